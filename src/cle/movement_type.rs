use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovementTypeParseError {
    #[error("Unknown movement type: {0:?}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Deposit,
    Withdrawal,
    AtmLoad,
    AtmUnload,
    Adjustment,
}

impl MovementType {
    pub const ALL: [MovementType; 5] = [
        MovementType::Deposit,
        MovementType::Withdrawal,
        MovementType::AtmLoad,
        MovementType::AtmUnload,
        MovementType::Adjustment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Deposit => "deposit",
            MovementType::Withdrawal => "withdrawal",
            MovementType::AtmLoad => "atm_load",
            MovementType::AtmUnload => "atm_unload",
            MovementType::Adjustment => "adjustment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Deposit => "Cash deposit",
            MovementType::Withdrawal => "Counter/ATM withdrawal",
            MovementType::AtmLoad => "ATM load",
            MovementType::AtmUnload => "ATM unload",
            MovementType::Adjustment => "Internal adjustment",
        }
    }
}

impl FromStr for MovementType {
    type Err = MovementTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementType::ALL
            .into_iter()
            .find(|movement_type| movement_type.as_str() == s)
            .ok_or_else(|| MovementTypeParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_tag() {
        for movement_type in MovementType::ALL {
            assert_eq!(movement_type.as_str().parse::<MovementType>(), Ok(movement_type));
        }
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(
            "transfer".parse::<MovementType>(),
            Err(MovementTypeParseError::Unknown("transfer".to_string()))
        );
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for movement_type in MovementType::ALL {
            let json = serde_json::to_string(&movement_type).unwrap();
            assert_eq!(json, format!("\"{}\"", movement_type.as_str()));
        }
    }
}
