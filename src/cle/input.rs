use crate::{Location, Money, MovementType};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A proposed movement exactly as a caller sent it.
///
/// Every field is kept as a raw JSON value so that the validator can report a
/// wrongly typed field as a violation instead of the whole payload failing to
/// deserialize.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MovementCandidate {
    #[serde(rename = "type", default)]
    pub movement_type: Option<Value>,

    #[serde(default)]
    pub amount: Option<Value>,

    #[serde(default)]
    pub origin: Option<Value>,

    #[serde(default)]
    pub destination: Option<Value>,

    #[serde(default)]
    pub operator: Option<Value>,

    #[serde(default)]
    pub comment: Option<Value>,

    #[serde(default)]
    pub reference: Option<Value>,
}

impl MovementCandidate {
    pub fn new(
        movement_type: MovementType,
        amount: Money,
        origin: Location,
        destination: Location,
        operator: &str,
    ) -> Self {
        Self {
            movement_type: Some(Value::from(movement_type.as_str())),
            amount: Some(Value::from(amount.to_f64())),
            origin: Some(Value::from(origin.as_str())),
            destination: Some(Value::from(destination.as_str())),
            operator: Some(Value::from(operator)),
            comment: None,
            reference: None,
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(Value::from(comment));
        self
    }
}

/// One line of a CSV movement file.
///
/// CSV has no notion of primitive kinds, so every column is read as text. A
/// plain decimal amount becomes a JSON number, anything else stays text and is
/// rejected by validation like any non-numeric amount.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    #[serde(rename = "type")]
    pub typ: Option<String>,

    pub amount: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub operator: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,
}

impl From<MovementRow> for MovementCandidate {
    fn from(row: MovementRow) -> Self {
        Self {
            movement_type: row.typ.map(Value::from),
            amount: row.amount.map(amount_value),
            origin: row.origin.map(Value::from),
            destination: row.destination.map(Value::from),
            operator: row.operator.map(Value::from),
            comment: row.comment.map(Value::from),
            reference: row.reference.map(Value::from),
        }
    }
}

fn amount_value(text: String) -> Value {
    match Money::parse(&text) {
        Ok(amount) => Value::from(amount.to_f64()),
        Err(_) => Value::from(text),
    }
}
