//! GitHub Actions workflow commands for `--github-actions` runs.

use crate::{bench_regression::RegressionResult, report::ReportCounts};

pub fn github_annotations(regressions: &[RegressionResult]) -> Vec<String> {
    let counts = ReportCounts::from_results(0, regressions);
    let mut lines = vec![
        format!("::set-output name=regression_count::{}", counts.regressions),
        format!("::set-output name=severe_count::{}", counts.severe),
        format!("::set-output name=improvement_count::{}", counts.improvements),
    ];

    if counts.severe > 0 {
        lines.push(format!(
            "::error::Severe performance regressions detected in {} benchmarks",
            counts.severe
        ));
        lines.extend(
            regressions
                .iter()
                .filter(|r| r.is_severe_regression())
                .map(|r| format!("::error::{} is {}", r.benchmark_name, slower(r))),
        );
    } else if counts.regressions > 0 {
        lines.push(format!(
            "::warning::Performance regressions detected in {} benchmarks",
            counts.regressions
        ));
        lines.extend(
            regressions
                .iter()
                .filter(|r| r.is_regression)
                .map(|r| format!("::warning::{} is {}", r.benchmark_name, slower(r))),
        );
    }

    if counts.improvements > 0 {
        lines.push(format!(
            "::notice::Performance improvements detected in {} benchmarks",
            counts.improvements
        ));
    }
    lines
}

fn slower(result: &RegressionResult) -> String {
    format!("{:.1}% slower", result.change_percent.abs())
}
