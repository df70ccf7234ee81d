use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bench_regression::RegressionResult;

/// Gate verdict. Variants are ordered by how badly the run failed; CI
/// relies on the exit code mapping staying 0 / 1 / 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Clean,
    Regressed,
    Severe,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Regressed => 1,
            Outcome::Severe => 2,
        }
    }

    pub fn passed(self) -> bool {
        self == Outcome::Clean
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Clean => "clean",
            Outcome::Regressed => "regressed",
            Outcome::Severe => "severe",
        };
        f.write_str(label)
    }
}

/// A severe improvement never produces `Severe`; only a severe regression does.
pub fn decide(regressions: &[RegressionResult]) -> Outcome {
    if regressions.iter().any(RegressionResult::is_severe_regression) {
        Outcome::Severe
    } else if regressions.iter().any(|r| r.is_regression) {
        Outcome::Regressed
    } else {
        Outcome::Clean
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GateReport {
    pub outcome: Outcome,
    pub reasons: Vec<String>,
}

impl GateReport {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

pub fn evaluate(regressions: &[RegressionResult]) -> GateReport {
    let reasons = regressions
        .iter()
        .filter(|r| r.is_regression)
        .map(|r| {
            format!(
                "{} regression ({}): current={:.3}ms baseline={:.3}ms",
                r.benchmark_name,
                r.severity,
                r.current_time_ms,
                r.baseline_time_ms
            )
        })
        .collect();
    GateReport {
        outcome: decide(regressions),
        reasons,
    }
}
