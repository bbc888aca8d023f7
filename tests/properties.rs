use cle::input::MovementCandidate;
use cle::{Ledger, LedgerError, Location, Money, MovementType, Summary};

use proptest::prelude::*;
use proptest::sample::select;

fn candidate_strategy() -> impl Strategy<Value = MovementCandidate> {
    (
        select(MovementType::ALL.to_vec()),
        1i64..=5_000_000,
        select(Location::ALL.to_vec()),
        select(Location::ALL.to_vec()),
    )
        .prop_map(|(movement_type, millimes, origin, destination)| {
            MovementCandidate::new(movement_type, Money(millimes), origin, destination, "prop")
        })
}

fn is_rejection(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::Validation(_) | LedgerError::InsufficientBalance { .. })
    )
}

fn counter_for(summary: &Summary, movement_type: MovementType) -> Option<Money> {
    match movement_type {
        MovementType::Deposit => Some(summary.cumulative_deposits),
        MovementType::Withdrawal => Some(summary.cumulative_withdrawals),
        MovementType::AtmLoad => Some(summary.cumulative_atm_loads),
        MovementType::AtmUnload => Some(summary.cumulative_atm_unloads),
        MovementType::Adjustment => None,
    }
}

proptest! {
    #[test]
    fn replaying_the_log_gives_the_live_summary(
        candidates in prop::collection::vec(candidate_strategy(), 0..60)
    ) {
        let ledger = Ledger::new(Money::from_dinars(100_000));

        for candidate in candidates.iter() {
            if let Err(err) = ledger.append(candidate) {
                prop_assert!(is_rejection(&err), "unexpected error: {err:#}");
            }
        }

        let (summary, log) = ledger.snapshot().unwrap();
        prop_assert_eq!(Summary::replay(&log).unwrap(), summary);
    }

    #[test]
    fn every_append_keeps_the_invariants(
        candidates in prop::collection::vec(candidate_strategy(), 0..60)
    ) {
        let ledger = Ledger::new(Money::from_dinars(100_000));

        for candidate in candidates.iter() {
            let before = ledger.summary().unwrap();

            match ledger.append(candidate) {
                Ok(movement) => {
                    let after = ledger.summary().unwrap();

                    for location in Location::INTERNAL {
                        prop_assert!(!after.balances.get(location).unwrap().is_negative());
                    }

                    prop_assert_eq!(after.total, after.balances.total().unwrap());

                    match movement.movement_type {
                        MovementType::Deposit => {
                            prop_assert_eq!(after.total.0 - before.total.0, movement.amount.0)
                        }
                        MovementType::Withdrawal => {
                            prop_assert_eq!(before.total.0 - after.total.0, movement.amount.0)
                        }
                        _ => prop_assert_eq!(after.total, before.total),
                    }

                    for movement_type in MovementType::ALL {
                        if let (Some(old), Some(new)) = (
                            counter_for(&before, movement_type),
                            counter_for(&after, movement_type),
                        ) {
                            let expected = if movement_type == movement.movement_type {
                                old.0 + movement.amount.0
                            } else {
                                old.0
                            };
                            prop_assert_eq!(new.0, expected);
                        }
                    }
                }
                Err(err) => {
                    prop_assert!(is_rejection(&err), "unexpected error: {err:#}");
                    prop_assert_eq!(ledger.summary().unwrap(), before);
                }
            }
        }
    }
}
