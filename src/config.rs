//! Analysis thresholds.
//!
//! All values are percentages. They are user-overridable and only checked
//! for being finite.

use serde::{Deserialize, Serialize};

use crate::PerfGateError;

pub const DEFAULT_REGRESSION_THRESHOLD: f64 = 15.0;
pub const DEFAULT_IMPROVEMENT_THRESHOLD: f64 = 10.0;
pub const DEFAULT_SEVERE_THRESHOLD: f64 = 50.0;

/// Absolute change (percent) above which a pair is reported even when it
/// crosses neither configured threshold. Does not scale with the thresholds.
pub const NOTABLE_CHANGE_PERCENT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub regression_threshold: f64,
    pub improvement_threshold: f64,
    pub severe_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            regression_threshold: DEFAULT_REGRESSION_THRESHOLD,
            improvement_threshold: DEFAULT_IMPROVEMENT_THRESHOLD,
            severe_threshold: DEFAULT_SEVERE_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn with_regression_threshold(mut self, percent: f64) -> Self {
        self.regression_threshold = percent;
        self
    }

    pub fn with_improvement_threshold(mut self, percent: f64) -> Self {
        self.improvement_threshold = percent;
        self
    }

    pub fn with_severe_threshold(mut self, percent: f64) -> Self {
        self.severe_threshold = percent;
        self
    }

    pub fn validate(&self) -> Result<(), PerfGateError> {
        for (name, value) in [
            ("regression_threshold", self.regression_threshold),
            ("improvement_threshold", self.improvement_threshold),
            ("severe_threshold", self.severe_threshold),
        ] {
            if !value.is_finite() {
                return Err(PerfGateError::invalid_config(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
