use crate::ids::MovementId;
use crate::input::MovementCandidate;
use crate::store::{InMemoryStore, MovementStore};
use crate::threshold::ThresholdStatus;
use crate::validator::{self, Violations};
use crate::Result;
use crate::{Location, Money, Movement, Summary};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Insufficient balance: {location} holds {balance}, cannot take out {amount}")]
    InsufficientBalance {
        location: Location,
        balance: Money,
        amount: Money,
    },

    #[error("Internal ledger error: {0}")]
    Internal(String),
}

#[derive(Debug, Default)]
struct LedgerState {
    log: Vec<Movement>,
    summary: Summary,
}

impl LedgerState {
    fn next_id(&self) -> MovementId {
        self.log
            .last()
            .map(|movement| movement.id.next())
            .unwrap_or(MovementId::FIRST)
    }
}

/// Append-only record of the agency's cash movements and the summary derived from it.
///
/// Appends are serialized behind a write lock, so balance updates and log
/// appends never interleave. Readers always see the state either before or
/// after an append, never in between.
pub struct Ledger {
    threshold: Money,
    state: RwLock<LedgerState>,
    store: Box<dyn MovementStore>,
}

impl Ledger {
    /// Empty ledger kept in memory
    pub fn new(threshold: Money) -> Self {
        Self {
            threshold,
            state: RwLock::new(LedgerState::default()),
            store: Box::new(InMemoryStore::new()),
        }
    }

    /// Rebuilds a ledger from everything `store` already holds.
    ///
    /// The stored log must be numbered 1, 2, 3... and must replay cleanly,
    /// otherwise the store is considered corrupt.
    pub fn restore(threshold: Money, store: Box<dyn MovementStore>) -> Result<Self> {
        let log = store.load()?;

        let mut expected = MovementId::FIRST;
        for movement in log.iter() {
            if movement.id != expected {
                Err(LedgerError::Internal(format!(
                    "stored log is out of sequence: found movement {} where {expected} was expected",
                    movement.id
                )))?
            }
            expected = expected.next();
        }

        let summary = Summary::replay(&log).map_err(|e| {
            LedgerError::Internal(format!("stored log does not replay: {e:#}"))
        })?;

        log::debug!("Restored {} movements, total held: {}", log.len(), summary.total);

        Ok(Self {
            threshold,
            state: RwLock::new(LedgerState { log, summary }),
            store,
        })
    }

    /// Validates `candidate` and, if it is acceptable, records it.
    ///
    /// All or nothing: on any error the log and the summary are left as they were.
    pub fn append(&self, candidate: &MovementCandidate) -> Result<Movement> {
        let (movement, _) = self.append_with_summary(candidate)?;

        Ok(movement)
    }

    /// Same as [`Ledger::append`], also returning the summary as it stood right after the append
    pub fn append_with_summary(&self, candidate: &MovementCandidate) -> Result<(Movement, Summary)> {
        let request = validator::validate_into(candidate).map_err(|violations| {
            log::warn!("Rejected movement candidate: {violations}");
            LedgerError::Validation(violations)
        })?;

        let mut state = self.write_state()?;

        let movement = Movement::accept(state.next_id(), request, Utc::now());

        let summary = state.summary.apply(&movement).map_err(|e| {
            log::warn!("Rejected movement {}: {e:#}", movement.id);
            e
        })?;

        self.store.persist(&movement).map_err(|e| {
            log::error!("Could not persist movement {}: {e:#}", movement.id);
            LedgerError::Internal(format!("could not persist movement {}: {e:#}", movement.id))
        })?;

        state.log.push(movement.clone());
        state.summary = summary.clone();

        log::debug!(
            "Recorded movement {} ({}) of {} from {} to {}",
            movement.id,
            movement.movement_type.label(),
            movement.amount,
            movement.origin.label(),
            movement.destination.label()
        );

        Ok((movement, summary))
    }

    pub fn summary(&self) -> Result<Summary> {
        Ok(self.read_state()?.summary.clone())
    }

    /// Every accepted movement, oldest first
    pub fn log(&self) -> Result<Vec<Movement>> {
        Ok(self.read_state()?.log.clone())
    }

    /// Summary and log taken under the same read lock
    pub fn snapshot(&self) -> Result<(Summary, Vec<Movement>)> {
        let state = self.read_state()?;

        Ok((state.summary.clone(), state.log.clone()))
    }

    /// Regulatory ceiling on the total cash held in the agency
    pub fn threshold(&self) -> Money {
        self.threshold
    }

    pub fn threshold_status(&self) -> Result<ThresholdStatus> {
        let total = self.read_state()?.summary.total;

        Ok(ThresholdStatus::evaluate(total, self.threshold))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read_state()?.log.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, LedgerState>> {
        let state = self
            .state
            .read()
            .map_err(|_| LedgerError::Internal("ledger lock poisoned".to_string()))?;

        Ok(state)
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, LedgerState>> {
        let state = self
            .state
            .write()
            .map_err(|_| LedgerError::Internal("ledger lock poisoned".to_string()))?;

        Ok(state)
    }
}
