//! Benchmark regression detection for CI gating.
//!
//! Parses newline-delimited benchmark records for a current and a baseline
//! run, pairs them by name, classifies each change, and derives a report
//! model plus a 0 / 1 / 2 gate outcome.
//!
//! Criterion benches over synthetic records live in `benches/`.

pub mod annotations;
pub mod bench_gates;
pub mod bench_meta;
pub mod bench_regression;
pub mod bench_utils;
pub mod cli;
pub mod config;
pub mod errors;
pub mod record;
pub mod render;
pub mod report;

pub use crate::bench_gates::{Outcome, decide};
pub use crate::bench_meta::{BenchmarkResult, ConfidenceInterval};
pub use crate::bench_regression::{RegressionAnalyzer, RegressionResult, Severity, analyze};
pub use crate::config::{AnalysisConfig, NOTABLE_CHANGE_PERCENT};
pub use crate::errors::PerfGateError;
pub use crate::record::{BenchmarkMap, parse_file, parse_str};
pub use crate::report::{ReportBuilder, ReportModel, ReportStatus};
