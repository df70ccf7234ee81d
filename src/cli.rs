use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use tracing::{info, warn};

use crate::{
    PerfGateError,
    annotations::github_annotations,
    bench_gates::{self, Outcome},
    bench_regression::RegressionAnalyzer,
    config::{
        AnalysisConfig, DEFAULT_IMPROVEMENT_THRESHOLD, DEFAULT_REGRESSION_THRESHOLD,
        DEFAULT_SEVERE_THRESHOLD,
    },
    record::{self, BenchmarkMap},
    render::{ReportFormat, render},
    report::{ReportBuilder, ResourceSnapshot},
};

/// Detect performance regressions in benchmark results
#[derive(Parser, Debug, Clone)]
#[command(name = "perfgate", version)]
pub struct Args {
    /// Path to current benchmark results (one JSON record per line)
    pub current_results: PathBuf,

    /// Path to baseline benchmark results; absent or missing means nothing to compare
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Write the report here instead of standard output
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Percentage slowdown above which a benchmark is a regression
    #[arg(
        long,
        env = "PERFGATE_REGRESSION_THRESHOLD",
        default_value_t = DEFAULT_REGRESSION_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub regression_threshold: f64,

    /// Percentage speedup above which a benchmark is an improvement
    #[arg(
        long,
        env = "PERFGATE_IMPROVEMENT_THRESHOLD",
        default_value_t = DEFAULT_IMPROVEMENT_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub improvement_threshold: f64,

    /// Percentage change above which a result is severe
    #[arg(
        long,
        env = "PERFGATE_SEVERE_THRESHOLD",
        default_value_t = DEFAULT_SEVERE_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub severe_threshold: f64,

    /// Emit GitHub Actions outputs and annotations after the report
    #[arg(long)]
    pub github_actions: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// JSON resource snapshot to attach to the report verbatim
    #[arg(long)]
    pub resource_snapshot: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_regression_threshold(self.regression_threshold)
            .with_improvement_threshold(self.improvement_threshold)
            .with_severe_threshold(self.severe_threshold)
    }
}

/// Runs one analysis and writes the report (or the output-file notice) and
/// any annotations to `out`. Returns the gate outcome for the exit code.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome, PerfGateError> {
    let config = args.analysis_config();
    config.validate()?;

    let current = record::parse_file(&args.current_results)?;
    if current.is_empty() {
        return Err(PerfGateError::no_current_results(&args.current_results));
    }
    let baseline = load_baseline(args.baseline.as_deref())?;

    let regressions = RegressionAnalyzer::new(config).analyze(&current, &baseline);

    let mut builder = ReportBuilder::new(config)
        .generated_at(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    if let Some(path) = &args.resource_snapshot {
        builder = builder.resource_snapshot(load_snapshot(path)?);
    }
    let model = builder.build(&current, &baseline, &regressions);
    let rendered = render(&model, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| PerfGateError::io(path, e))?;
            writeln!(out, "Report written to {}", path.display()).map_err(stdout_error)?;
        }
        None => writeln!(out, "{rendered}").map_err(stdout_error)?,
    }

    if args.github_actions {
        for line in github_annotations(&regressions) {
            writeln!(out, "{line}").map_err(stdout_error)?;
        }
    }

    let gate = bench_gates::evaluate(&regressions);
    for reason in &gate.reasons {
        warn!("{reason}");
    }
    info!(outcome = %gate.outcome, "gate decided");
    Ok(gate.outcome)
}

fn load_baseline(path: Option<&Path>) -> Result<BenchmarkMap, PerfGateError> {
    match path {
        Some(path) if path.exists() => record::parse_file(path),
        Some(path) => {
            warn!(path = %path.display(), "baseline not found, nothing to compare against");
            Ok(BenchmarkMap::new())
        }
        None => {
            info!("no baseline given, nothing to compare against");
            Ok(BenchmarkMap::new())
        }
    }
}

fn load_snapshot(path: &Path) -> Result<ResourceSnapshot, PerfGateError> {
    let data = fs::read(path).map_err(|e| PerfGateError::io(path, e))?;
    serde_json::from_slice(&data).map_err(|e| {
        PerfGateError::invalid_input(format!("resource snapshot {}: {e}", path.display()))
    })
}

fn stdout_error(err: io::Error) -> PerfGateError {
    PerfGateError::io("<stdout>", err)
}
