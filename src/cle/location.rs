use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationParseError {
    #[error("Unknown location: {0:?}")]
    Unknown(String),
}

/// A point cash can sit in or come from.
///
/// Only the internal locations carry a balance. External ones are treated as
/// unlimited sources and sinks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Vault,
    Counter,
    Atm,
    Client,
    Transport,
    Outside,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Vault,
        Location::Counter,
        Location::Atm,
        Location::Client,
        Location::Transport,
        Location::Outside,
    ];

    pub const INTERNAL: [Location; 3] = [Location::Vault, Location::Counter, Location::Atm];

    pub fn is_internal(&self) -> bool {
        matches!(self, Location::Vault | Location::Counter | Location::Atm)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Vault => "vault",
            Location::Counter => "counter",
            Location::Atm => "atm",
            Location::Client => "client",
            Location::Transport => "transport",
            Location::Outside => "outside",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::Vault => "Agency vault",
            Location::Counter => "Teller counter",
            Location::Atm => "ATM",
            Location::Client => "Client",
            Location::Transport => "Cash-in-transit",
            Location::Outside => "Outside the agency",
        }
    }
}

impl FromStr for Location {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| LocationParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_tag() {
        for location in Location::ALL {
            assert_eq!(location.as_str().parse::<Location>(), Ok(location));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(
            "Vault".parse::<Location>(),
            Err(LocationParseError::Unknown("Vault".to_string()))
        );
        assert!(" atm".parse::<Location>().is_err());
        assert!("".parse::<Location>().is_err());
    }

    #[test]
    fn only_vault_counter_and_atm_are_internal() {
        let internal: Vec<Location> = Location::ALL
            .into_iter()
            .filter(Location::is_internal)
            .collect();

        assert_eq!(internal, Location::INTERNAL);
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        assert_eq!(serde_json::to_string(&Location::Atm).unwrap(), "\"atm\"");
        assert_eq!(
            serde_json::from_str::<Location>("\"transport\"").unwrap(),
            Location::Transport
        );
    }
}
