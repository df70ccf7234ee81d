//! Decoding of newline-delimited benchmark records.
//!
//! Each line is decoded on its own. A line that fails to decode, that is not
//! a completed measurement, or that carries no usable estimate is logged at
//! debug level and dropped; it never aborts the rest of the parse.

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    PerfGateError,
    bench_meta::{BenchmarkResult, ConfidenceInterval},
};

pub const BENCHMARK_COMPLETE: &str = "benchmark-complete";
const UNKNOWN_NAME: &str = "Unknown";

/// Benchmarks keyed by name. Ordered so that iteration, and therefore tie
/// order in the analyzer, does not depend on input line order.
pub type BenchmarkMap = BTreeMap<String, BenchmarkResult>;

#[derive(Debug, Deserialize)]
struct RawRecord {
    reason: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    typical: Option<RawEstimate>,
    #[serde(default)]
    mean: Option<RawEstimate>,
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawEstimate {
    #[serde(default)]
    estimate: Option<f64>,
    #[serde(default)]
    confidence_interval: Option<ConfidenceInterval>,
}

type EstimateAccessor = fn(&RawRecord) -> Option<&RawEstimate>;

fn typical_estimate(record: &RawRecord) -> Option<&RawEstimate> {
    record.typical.as_ref()
}

fn mean_estimate(record: &RawRecord) -> Option<&RawEstimate> {
    record.mean.as_ref()
}

/// Tried in order; the first shape present in the record is used, and a
/// present shape without a usable estimate drops the record.
const ESTIMATE_STRATEGIES: &[(&str, EstimateAccessor)] =
    &[("typical", typical_estimate), ("mean", mean_estimate)];

#[derive(Debug)]
enum RecordSkip {
    Blank,
    Malformed(serde_json::Error),
    NotComplete(String),
    NoEstimate,
}

impl std::fmt::Display for RecordSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSkip::Blank => write!(f, "blank line"),
            RecordSkip::Malformed(err) => write!(f, "malformed record: {err}"),
            RecordSkip::NotComplete(reason) => write!(f, "record kind {reason:?} ignored"),
            RecordSkip::NoEstimate => write!(f, "no usable estimate"),
        }
    }
}

fn decode_line(line: &[u8]) -> Result<BenchmarkResult, RecordSkip> {
    if line.iter().all(u8::is_ascii_whitespace) {
        return Err(RecordSkip::Blank);
    }
    let record: RawRecord = serde_json::from_slice(line).map_err(RecordSkip::Malformed)?;
    if record.reason != BENCHMARK_COMPLETE {
        return Err(RecordSkip::NotComplete(record.reason));
    }
    let shape = ESTIMATE_STRATEGIES
        .iter()
        .find_map(|(_, accessor)| accessor(&record))
        .ok_or(RecordSkip::NoEstimate)?;
    let time_ns = shape
        .estimate
        .filter(|ns| ns.is_finite() && *ns >= 0.0)
        .ok_or(RecordSkip::NoEstimate)?;
    let confidence_interval = shape.confidence_interval;
    Ok(BenchmarkResult {
        name: record.id.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        time_ns,
        confidence_interval,
        throughput: record.throughput.as_ref().and_then(per_iteration),
    })
}

/// Accepts `{"per_iteration": N}` (missing count is 0) or a list of such
/// objects, taking the first. Any other shape is `None`.
fn per_iteration(throughput: &serde_json::Value) -> Option<f64> {
    let entry = match throughput {
        serde_json::Value::Array(entries) => entries.first()?,
        other => other,
    };
    let fields = entry.as_object()?;
    match fields.get("per_iteration") {
        None => Some(0.0),
        Some(count) => count.as_f64(),
    }
}

pub fn parse_bytes(source: &[u8]) -> BenchmarkMap {
    let mut benchmarks = BenchmarkMap::new();
    let mut skipped = 0usize;
    for (idx, line) in source.split(|b| *b == b'\n').enumerate() {
        match decode_line(line) {
            Ok(result) => {
                benchmarks.insert(result.name.clone(), result);
            }
            Err(RecordSkip::Blank) => {}
            Err(skip) => {
                skipped += 1;
                debug!(line = idx + 1, %skip, "skipping benchmark record");
            }
        }
    }
    info!(parsed = benchmarks.len(), skipped, "parsed benchmark records");
    benchmarks
}

pub fn parse_str(source: &str) -> BenchmarkMap {
    parse_bytes(source.as_bytes())
}

/// Parses a results file. A missing file is an empty mapping, not an error.
pub fn parse_file(path: &Path) -> Result<BenchmarkMap, PerfGateError> {
    match fs::read(path) {
        Ok(data) => Ok(parse_bytes(&data)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "benchmark results file not found");
            Ok(BenchmarkMap::new())
        }
        Err(err) => Err(PerfGateError::io(path, err)),
    }
}
