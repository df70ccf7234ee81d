use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    bench_meta::BenchmarkResult,
    config::{AnalysisConfig, NOTABLE_CHANGE_PERCENT},
    record::BenchmarkMap,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    /// Magnitude only; the sign of `change_percent` is irrelevant.
    pub fn classify(change_percent: f64, config: &AnalysisConfig) -> Self {
        let magnitude = change_percent.abs();
        if magnitude > config.severe_threshold {
            Severity::Severe
        } else if magnitude > config.regression_threshold * 2.0 {
            Severity::Moderate
        } else {
            Severity::Minor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub benchmark_name: String,
    pub current_time_ms: f64,
    pub baseline_time_ms: f64,
    pub change_percent: f64,
    pub is_regression: bool,
    pub is_improvement: bool,
    pub severity: Severity,
}

impl RegressionResult {
    pub fn is_severe_regression(&self) -> bool {
        self.is_regression && self.severity == Severity::Severe
    }

    pub fn change_description(&self) -> String {
        if self.is_regression {
            format!("{:.1}% slower", self.change_percent.abs())
        } else if self.is_improvement {
            format!("{:.1}% faster", self.change_percent.abs())
        } else {
            format!("{:+.1}% change", self.change_percent)
        }
    }
}

pub fn change_percent(current_ns: f64, baseline_ns: f64) -> f64 {
    (current_ns - baseline_ns) / baseline_ns * 100.0
}

#[derive(Clone, Debug, Default)]
pub struct RegressionAnalyzer {
    config: AnalysisConfig,
}

impl RegressionAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn compare(
        &self,
        current: &BenchmarkResult,
        baseline: &BenchmarkResult,
    ) -> Option<RegressionResult> {
        if baseline.time_ns <= 0.0 {
            debug!(benchmark = %current.name, "skipping pair with zero baseline");
            return None;
        }
        let change = change_percent(current.time_ns, baseline.time_ns);
        Some(RegressionResult {
            benchmark_name: current.name.clone(),
            current_time_ms: current.time_ms(),
            baseline_time_ms: baseline.time_ms(),
            change_percent: change,
            is_regression: change > self.config.regression_threshold,
            is_improvement: change < -self.config.improvement_threshold,
            severity: Severity::classify(change, &self.config),
        })
    }

    /// Pairs `current` with `baseline` by name and returns the notable
    /// results, largest absolute change first.
    pub fn analyze(
        &self,
        current: &BenchmarkMap,
        baseline: &BenchmarkMap,
    ) -> Vec<RegressionResult> {
        let mut results: Vec<RegressionResult> = current
            .iter()
            .filter_map(|(name, cur)| {
                let base = baseline.get(name)?;
                self.compare(cur, base)
            })
            .filter(is_notable)
            .collect();
        results.sort_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
        info!(
            compared = current.keys().filter(|n| baseline.contains_key(*n)).count(),
            reported = results.len(),
            "regression analysis complete"
        );
        results
    }
}

fn is_notable(result: &RegressionResult) -> bool {
    result.is_regression
        || result.is_improvement
        || result.change_percent.abs() > NOTABLE_CHANGE_PERCENT
}

pub fn analyze(
    current: &BenchmarkMap,
    baseline: &BenchmarkMap,
    config: &AnalysisConfig,
) -> Vec<RegressionResult> {
    RegressionAnalyzer::new(*config).analyze(current, baseline)
}
