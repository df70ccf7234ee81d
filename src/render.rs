use std::fmt::Write;

use crate::{
    PerfGateError,
    bench_meta::BenchmarkResult,
    bench_regression::RegressionResult,
    report::{ReportModel, ReportStatus},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

pub fn render(model: &ReportModel, format: ReportFormat) -> Result<String, PerfGateError> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(model)),
        ReportFormat::Json => render_json(model),
    }
}

pub fn render_json(model: &ReportModel) -> Result<String, PerfGateError> {
    serde_json::to_string_pretty(model).map_err(|e| PerfGateError::invalid_input(e.to_string()))
}

fn status_marker(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Critical => "🚨",
        ReportStatus::Warning => "⚠️",
        ReportStatus::Good => "✅",
        ReportStatus::Stable => "📊",
    }
}

pub fn render_markdown(model: &ReportModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Performance Regression Analysis Report\n");

    let _ = writeln!(out, "## Executive Summary\n");
    let _ = writeln!(out, "- **Total Benchmarks**: {}", model.counts.total_benchmarks);
    let _ = writeln!(out, "- **Performance Regressions**: {}", model.counts.regressions);
    let _ = writeln!(out, "- **Performance Improvements**: {}", model.counts.improvements);
    let _ = writeln!(out, "- **Severe Issues**: {}\n", model.counts.severe);
    let _ = writeln!(
        out,
        "{} **Status**: {} - {}\n",
        status_marker(model.status),
        model.status,
        model.status.headline()
    );

    if !model.fastest.is_empty() {
        let _ = writeln!(out, "## Current Performance Metrics\n");
        let _ = writeln!(out, "### Fastest Benchmarks");
        write_timings(&mut out, &model.fastest);
        if !model.slowest.is_empty() {
            let _ = writeln!(out, "### Slowest Benchmarks");
            write_timings(&mut out, &model.slowest);
        }
    }

    write_findings(&mut out, "🚨 Severe Performance Regressions", &model.severe_regressions);
    write_findings(&mut out, "⚠️ Performance Regressions", &model.regressions);
    write_findings(&mut out, "✅ Performance Improvements", &model.improvements);

    let _ = writeln!(out, "## Analysis Configuration\n");
    let _ = writeln!(
        out,
        "- **Regression Threshold**: {:?}%",
        model.config.regression_threshold
    );
    let _ = writeln!(
        out,
        "- **Improvement Threshold**: {:?}%",
        model.config.improvement_threshold
    );
    let _ = writeln!(out, "- **Severe Threshold**: {:?}%", model.config.severe_threshold);
    if let Some(timestamp) = &model.generated_at {
        let _ = writeln!(out, "- **Analysis Timestamp**: {timestamp}");
    }

    if let Some(snapshot) = &model.resource_snapshot {
        let body = serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| snapshot.to_string());
        let _ = writeln!(out, "\n## Resource Snapshot\n");
        let _ = writeln!(out, "```json\n{body}\n```");
    }
    out
}

fn write_timings(out: &mut String, results: &[BenchmarkResult]) {
    for result in results {
        let _ = writeln!(out, "- **{}**: {:.3}ms", result.name, result.time_ms());
    }
    out.push('\n');
}

fn write_findings(out: &mut String, heading: &str, findings: &[RegressionResult]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {heading}\n");
    for finding in findings {
        let _ = writeln!(
            out,
            "- **{}**: {}",
            finding.benchmark_name,
            finding.change_description()
        );
        let _ = writeln!(out, "  - Current: {:.3}ms", finding.current_time_ms);
        let _ = writeln!(out, "  - Baseline: {:.3}ms", finding.baseline_time_ms);
    }
    out.push('\n');
}
