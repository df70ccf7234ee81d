use serde::{Deserialize, Serialize};

const NS_PER_MS: f64 = 1_000_000.0;
const NS_PER_US: f64 = 1_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// One named measurement. `time_ns` is the authoritative unit; the other
/// views are conversions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub time_ns: f64,
    pub confidence_interval: Option<ConfidenceInterval>,
    pub throughput: Option<f64>,
}

impl BenchmarkResult {
    pub fn new<T: Into<String>>(name: T, time_ns: f64) -> Self {
        Self {
            name: name.into(),
            time_ns,
            confidence_interval: None,
            throughput: None,
        }
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ns / NS_PER_MS
    }

    pub fn time_us(&self) -> f64 {
        self.time_ns / NS_PER_US
    }

    pub fn summary(&self) -> String {
        format!("{}: {:.3}ms", self.name, self.time_ms())
    }
}
