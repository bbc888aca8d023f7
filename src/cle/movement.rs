use crate::ids::MovementId;
use crate::validator::MovementRequest;
use crate::{Location, Money, MovementType};

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

/// One accepted cash transfer. Never modified once it is in the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub id: MovementId,

    #[serde(rename = "type")]
    pub movement_type: MovementType,

    pub amount: Money,
    pub origin: Location,
    pub destination: Location,
    pub operator: String,
    pub comment: Option<String>,
    pub reference: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    pub fn accept(id: MovementId, request: MovementRequest, timestamp: DateTime<Utc>) -> Self {
        let MovementRequest {
            movement_type,
            amount,
            origin,
            destination,
            operator,
            comment,
            reference,
        } = request;

        Self {
            id,
            movement_type,
            amount,
            origin,
            destination,
            operator,
            comment,
            reference,
            timestamp,
        }
    }
}
