use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::json;

use crate::{
    bench_meta::{BenchmarkResult, ConfidenceInterval},
    record::{BENCHMARK_COMPLETE, BenchmarkMap},
};

#[derive(Clone, Copy, Debug)]
pub enum EstimateShape {
    Typical,
    Mean,
}

impl EstimateShape {
    fn key(self) -> &'static str {
        match self {
            EstimateShape::Typical => "typical",
            EstimateShape::Mean => "mean",
        }
    }
}

pub fn generate_results(count: usize, seed: u64) -> Vec<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|idx| {
            let time_ns = rng.gen_range(1_000.0..50_000_000.0);
            let spread = time_ns * rng.gen_range(0.01..0.05);
            BenchmarkResult {
                name: format!("group_{}/bench_{idx}", idx % 8),
                time_ns,
                confidence_interval: Some(ConfidenceInterval {
                    lower_bound: time_ns - spread,
                    upper_bound: time_ns + spread,
                }),
                throughput: None,
            }
        })
        .collect()
}

/// Scales every timing by a random factor within `±max_change_percent`.
pub fn perturb(
    results: &[BenchmarkResult],
    max_change_percent: f64,
    seed: u64,
) -> Vec<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    results
        .iter()
        .map(|result| {
            let change = rng.gen_range(-max_change_percent..=max_change_percent);
            BenchmarkResult {
                time_ns: result.time_ns * (1.0 + change / 100.0),
                ..result.clone()
            }
        })
        .collect()
}

pub fn to_map(results: &[BenchmarkResult]) -> BenchmarkMap {
    results
        .iter()
        .map(|result| (result.name.clone(), result.clone()))
        .collect()
}

pub fn record_line(result: &BenchmarkResult, shape: EstimateShape) -> String {
    let mut estimate = json!({ "estimate": result.time_ns, "unit": "ns" });
    if let Some(ci) = result.confidence_interval {
        estimate["confidence_interval"] = json!({
            "confidence_level": 0.95,
            "lower_bound": ci.lower_bound,
            "upper_bound": ci.upper_bound,
        });
    }
    let mut record = json!({
        "reason": BENCHMARK_COMPLETE,
        "id": result.name,
        "report_directory": format!("target/criterion/reports/{}", result.name),
    });
    record[shape.key()] = estimate;
    if let Some(per_iteration) = result.throughput {
        record["throughput"] = json!({ "per_iteration": per_iteration, "unit": "bytes" });
    }
    record.to_string()
}

/// Newline-delimited output in the shape a benchmark harness emits:
/// alternating estimate shapes, with progress records and a trailing
/// summary record mixed in.
pub fn to_ndjson(results: &[BenchmarkResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() * 2 + 1);
    for (idx, result) in results.iter().enumerate() {
        lines.push(json!({ "reason": "benchmark-start", "id": result.name }).to_string());
        let shape = if idx % 2 == 0 {
            EstimateShape::Typical
        } else {
            EstimateShape::Mean
        };
        lines.push(record_line(result, shape));
    }
    lines.push(json!({ "reason": "group-complete", "benchmarks": results.len() }).to_string());
    lines.join("\n")
}
