use crate::{Location, MovementType};

/// Balance effect of a movement: which internal location loses the amount and which one gains it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub debit: Option<Location>,
    pub credit: Option<Location>,
}

impl Settlement {
    pub fn for_movement(
        movement_type: MovementType,
        origin: Location,
        destination: Location,
    ) -> Self {
        match movement_type {
            MovementType::Deposit => Self {
                debit: None,
                credit: Some(destination),
            },
            MovementType::Withdrawal => Self {
                debit: Some(origin),
                credit: None,
            },
            MovementType::AtmLoad => Self {
                debit: Some(Location::Vault),
                credit: Some(Location::Atm),
            },
            MovementType::AtmUnload => Self {
                debit: Some(Location::Atm),
                credit: Some(Location::Vault),
            },
            MovementType::Adjustment => Self {
                debit: Some(origin),
                credit: Some(destination),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_deposits_and_withdrawals_change_the_total() {
        for movement_type in MovementType::ALL {
            let settlement = Settlement::for_movement(movement_type, Location::Vault, Location::Atm);

            let (debits, credits) = (settlement.debit.is_some(), settlement.credit.is_some());

            match movement_type {
                MovementType::Deposit => assert_eq!((debits, credits), (false, true)),
                MovementType::Withdrawal => assert_eq!((debits, credits), (true, false)),
                _ => assert_eq!((debits, credits), (true, true), "{movement_type}"),
            }
        }
    }

    #[test]
    fn atm_transfers_ignore_declared_ends() {
        let load = Settlement::for_movement(MovementType::AtmLoad, Location::Vault, Location::Atm);
        assert_eq!(load.debit, Some(Location::Vault));
        assert_eq!(load.credit, Some(Location::Atm));

        let unload = Settlement::for_movement(MovementType::AtmUnload, Location::Atm, Location::Vault);
        assert_eq!(unload.debit, Some(Location::Atm));
        assert_eq!(unload.credit, Some(Location::Vault));
    }
}
