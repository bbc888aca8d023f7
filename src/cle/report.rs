use crate::{Ledger, Money, Result, ThresholdStatus};

use serde::{Deserialize, Serialize};

/// Flat, one-row view of the ledger's position, meant for CSV output
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub vault: Money,
    pub counter: Money,
    pub atm: Money,
    pub total: Money,
    pub threshold: Money,
    pub threshold_exceeded: bool,

    /// Percentage with one decimal, e.g. `"42.5"`
    pub threshold_ratio: String,

    pub cumulative_deposits: Money,
    pub cumulative_withdrawals: Money,
    pub cumulative_atm_loads: Money,
    pub cumulative_atm_unloads: Money,
    pub movements: usize,
}

impl SummaryReport {
    pub fn build(ledger: &Ledger) -> Result<Self> {
        let (summary, log) = ledger.snapshot()?;
        let status = ThresholdStatus::evaluate(summary.total, ledger.threshold());

        Ok(Self {
            vault: summary.balances.vault,
            counter: summary.balances.counter,
            atm: summary.balances.atm,
            total: summary.total,
            threshold: status.threshold,
            threshold_exceeded: status.exceeded,
            threshold_ratio: format!("{:.1}", status.ratio_percent),
            cumulative_deposits: summary.cumulative_deposits,
            cumulative_withdrawals: summary.cumulative_withdrawals,
            cumulative_atm_loads: summary.cumulative_atm_loads,
            cumulative_atm_unloads: summary.cumulative_atm_unloads,
            movements: log.len(),
        })
    }
}
