use crate::settlement::Settlement;
use crate::Result;
use crate::{LedgerError, Location, Money, Movement, MovementType};

use serde::{Deserialize, Serialize};

/// Cash held in each internal location
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    pub vault: Money,
    pub counter: Money,
    pub atm: Money,
}

impl Balances {
    /// `None` for external locations, which carry no balance
    pub fn get(&self, location: Location) -> Option<Money> {
        match location {
            Location::Vault => Some(self.vault),
            Location::Counter => Some(self.counter),
            Location::Atm => Some(self.atm),
            _ => None,
        }
    }

    fn get_mut(&mut self, location: Location) -> Option<&mut Money> {
        match location {
            Location::Vault => Some(&mut self.vault),
            Location::Counter => Some(&mut self.counter),
            Location::Atm => Some(&mut self.atm),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, Money)> + '_ {
        Location::INTERNAL
            .into_iter()
            .filter_map(|location| self.get(location).map(|amount| (location, amount)))
    }

    pub fn total(&self) -> Result<Money> {
        let mut total = Money::ZERO;

        for (_, amount) in self.iter() {
            total.add(&amount)?;
        }

        Ok(total)
    }
}

/// Current position of the agency, derived from the movement log.
///
/// `total` is always the sum of `balances`. The cumulative counters only ever
/// grow, each by the amount of the movements of its type.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub balances: Balances,
    pub total: Money,
    pub cumulative_deposits: Money,
    pub cumulative_withdrawals: Money,
    pub cumulative_atm_loads: Money,
    pub cumulative_atm_unloads: Money,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `movements` over an empty summary, in order
    pub fn replay<'a>(movements: impl IntoIterator<Item = &'a Movement>) -> Result<Self> {
        movements
            .into_iter()
            .try_fold(Self::new(), |summary, movement| summary.apply(movement))
    }

    /// Returns the summary after settling `movement`, leaving `self` untouched.
    ///
    /// Fails with [`LedgerError::InsufficientBalance`] when the movement would take more
    /// cash out of a location than it holds.
    pub fn apply(&self, movement: &Movement) -> Result<Self> {
        let mut next = self.clone();
        let amount = movement.amount;

        let settlement =
            Settlement::for_movement(movement.movement_type, movement.origin, movement.destination);

        if let Some(location) = settlement.debit {
            let balance = next.balances.get_mut(location).ok_or_else(|| {
                LedgerError::Internal(format!(
                    "movement {} debits {location}, which carries no balance",
                    movement.id
                ))
            })?;

            if *balance < amount {
                Err(LedgerError::InsufficientBalance {
                    location,
                    balance: *balance,
                    amount,
                })?
            }

            balance.sub(&amount)?;
        }

        if let Some(location) = settlement.credit {
            let balance = next.balances.get_mut(location).ok_or_else(|| {
                LedgerError::Internal(format!(
                    "movement {} credits {location}, which carries no balance",
                    movement.id
                ))
            })?;

            balance.add(&amount)?;
        }

        next.total = next.balances.total()?;

        match movement.movement_type {
            MovementType::Deposit => next.cumulative_deposits.add(&amount)?,
            MovementType::Withdrawal => next.cumulative_withdrawals.add(&amount)?,
            MovementType::AtmLoad => next.cumulative_atm_loads.add(&amount)?,
            MovementType::AtmUnload => next.cumulative_atm_unloads.add(&amount)?,
            MovementType::Adjustment => {}
        }

        Ok(next)
    }
}
