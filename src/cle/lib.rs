//! Cash ledger engine for a bank agency.
//!
//! Tracks the cash held in the vault, at the teller counter and in the ATM as
//! an append-only log of validated [`Movement`]s, and keeps a [`Summary`] of
//! balances and cumulative flows that a monitor compares against the
//! regulatory threshold.
//!
//! Candidates go through the [`validator`] first, then the [`Ledger`] settles
//! and records them. The summary is always equal to a replay of the log.

pub mod handlers;
pub mod ids;
pub mod input;
mod ledger;
mod location;
mod money;
mod movement;
mod movement_type;
pub mod policy;
mod report;
mod result;
mod settlement;
pub mod store;
mod summary;
mod threshold;
pub mod validator;

pub use ledger::{Ledger, LedgerError};
pub use location::{Location, LocationParseError};
pub use money::{Money, MoneyError};
pub use movement::Movement;
pub use movement_type::{MovementType, MovementTypeParseError};
pub use report::SummaryReport;
pub use result::Result;
pub use settlement::Settlement;
pub use summary::{Balances, Summary};
pub use threshold::ThresholdStatus;
