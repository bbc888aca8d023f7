//! The movement matrix: which origins and destinations each movement type may use.
//!
//! Adding a movement type means adding one row to [`MOVEMENT_MATRIX`]. A row
//! must never let an internal location through on a side the settlement of
//! that type ignores, otherwise cash would appear or vanish from the balances.

use crate::{Location, MovementType};

use crate::Location::{Atm, Client, Counter, Outside, Transport, Vault};

/// Allowed origins and destinations for one movement type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub origins: &'static [Location],
    pub destinations: &'static [Location],
}

impl Route {
    pub fn allows_origin(&self, location: Location) -> bool {
        self.origins.contains(&location)
    }

    pub fn allows_destination(&self, location: Location) -> bool {
        self.destinations.contains(&location)
    }

    pub fn allows(&self, origin: Location, destination: Location) -> bool {
        self.allows_origin(origin) && self.allows_destination(destination)
    }
}

pub const MOVEMENT_MATRIX: [(MovementType, Route); 5] = [
    (
        MovementType::Deposit,
        Route {
            origins: &[Transport, Client, Outside],
            destinations: &[Counter, Vault],
        },
    ),
    (
        MovementType::Withdrawal,
        Route {
            origins: &[Counter, Atm],
            destinations: &[Client],
        },
    ),
    (
        MovementType::AtmLoad,
        Route {
            origins: &[Vault],
            destinations: &[Atm],
        },
    ),
    (
        MovementType::AtmUnload,
        Route {
            origins: &[Atm],
            destinations: &[Vault],
        },
    ),
    (
        MovementType::Adjustment,
        Route {
            origins: &[Atm, Vault, Counter],
            destinations: &[Atm, Vault, Counter],
        },
    ),
];

pub fn route_for(movement_type: MovementType) -> Option<&'static Route> {
    MOVEMENT_MATRIX
        .iter()
        .find(|(candidate, _)| *candidate == movement_type)
        .map(|(_, route)| route)
}
