use crate::Money;

use serde::Serialize;

/// How the cash held in the agency compares to its regulatory ceiling
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdStatus {
    pub total: Money,
    pub threshold: Money,
    pub exceeded: bool,

    /// `total` as a percentage of `threshold`, 0 when no threshold is set
    pub ratio_percent: f64,
}

impl ThresholdStatus {
    pub fn evaluate(total: Money, threshold: Money) -> Self {
        let ratio_percent = if threshold.is_positive() {
            total.0 as f64 / threshold.0 as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            threshold,
            exceeded: total > threshold,
            ratio_percent,
        }
    }
}
