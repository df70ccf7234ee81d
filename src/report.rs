//! Renderer-agnostic report model.
//!
//! The builder only aggregates: counts, overall status, fastest/slowest
//! views, and categorized findings taken from the ranked analyzer output.
//! Text formatting lives in [`crate::render`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    bench_meta::BenchmarkResult,
    bench_regression::{RegressionResult, Severity},
    config::AnalysisConfig,
    record::BenchmarkMap,
};

pub const TOP_N: usize = 10;

/// Opaque resource snapshot from the metrics collector, carried verbatim.
pub type ResourceSnapshot = serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Critical,
    Warning,
    Good,
    Stable,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Critical => "CRITICAL",
            ReportStatus::Warning => "WARNING",
            ReportStatus::Good => "GOOD",
            ReportStatus::Stable => "STABLE",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ReportStatus::Critical => "Severe performance regressions detected",
            ReportStatus::Warning => "Performance regressions detected",
            ReportStatus::Good => "Performance improvements detected",
            ReportStatus::Stable => "No significant performance changes",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub total_benchmarks: usize,
    pub regressions: usize,
    pub improvements: usize,
    pub severe: usize,
}

impl ReportCounts {
    pub fn from_results(total_benchmarks: usize, regressions: &[RegressionResult]) -> Self {
        Self {
            total_benchmarks,
            regressions: regressions.iter().filter(|r| r.is_regression).count(),
            improvements: regressions.iter().filter(|r| r.is_improvement).count(),
            severe: regressions
                .iter()
                .filter(|r| r.severity == Severity::Severe)
                .count(),
        }
    }

    pub fn status(&self) -> ReportStatus {
        if self.severe > 0 {
            ReportStatus::Critical
        } else if self.regressions > 0 {
            ReportStatus::Warning
        } else if self.improvements > 0 {
            ReportStatus::Good
        } else {
            ReportStatus::Stable
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    pub counts: ReportCounts,
    pub status: ReportStatus,
    pub baseline_benchmarks: usize,
    pub fastest: Vec<BenchmarkResult>,
    /// Empty unless there are more than [`TOP_N`] current results.
    pub slowest: Vec<BenchmarkResult>,
    pub severe_regressions: Vec<RegressionResult>,
    pub regressions: Vec<RegressionResult>,
    pub improvements: Vec<RegressionResult>,
    pub config: AnalysisConfig,
    pub generated_at: Option<String>,
    pub resource_snapshot: Option<ResourceSnapshot>,
}

#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    config: AnalysisConfig,
    generated_at: Option<String>,
    resource_snapshot: Option<ResourceSnapshot>,
}

impl ReportBuilder {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn generated_at<T: Into<String>>(mut self, timestamp: T) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    pub fn resource_snapshot(mut self, snapshot: ResourceSnapshot) -> Self {
        self.resource_snapshot = Some(snapshot);
        self
    }

    pub fn build(
        self,
        current: &BenchmarkMap,
        baseline: &BenchmarkMap,
        regressions: &[RegressionResult],
    ) -> ReportModel {
        let counts = ReportCounts::from_results(current.len(), regressions);
        let mut by_time: Vec<&BenchmarkResult> = current.values().collect();
        by_time.sort_by(|a, b| a.time_ns.total_cmp(&b.time_ns));
        let fastest = by_time.iter().take(TOP_N).map(|r| (*r).clone()).collect();
        let slowest = if by_time.len() > TOP_N {
            by_time[by_time.len() - TOP_N..]
                .iter()
                .map(|r| (*r).clone())
                .collect()
        } else {
            Vec::new()
        };
        ReportModel {
            status: counts.status(),
            counts,
            baseline_benchmarks: baseline.len(),
            fastest,
            slowest,
            severe_regressions: filtered(regressions, |r| r.is_severe_regression()),
            regressions: filtered(regressions, |r| {
                r.is_regression && r.severity != Severity::Severe
            }),
            improvements: filtered(regressions, |r| r.is_improvement),
            config: self.config,
            generated_at: self.generated_at,
            resource_snapshot: self.resource_snapshot,
        }
    }
}

fn filtered<F>(regressions: &[RegressionResult], keep: F) -> Vec<RegressionResult>
where
    F: Fn(&RegressionResult) -> bool,
{
    regressions.iter().filter(|r| keep(r)).cloned().collect()
}
