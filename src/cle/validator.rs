//! Checks a [`MovementCandidate`] for well-formedness and against the movement matrix.
//!
//! Validation never stops at the first problem: every field is inspected and
//! each problem becomes one [`Violation`], so a caller can fix a payload in a
//! single round trip.

use crate::input::MovementCandidate;
use crate::policy;
use crate::{Location, Money, MovementType};

use std::fmt;

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A field is missing or holds the wrong kind of value
    Shape,

    /// Well-formed, but the movement matrix does not allow it
    Policy,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn shape(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Shape,
            field,
            message: message.into(),
        }
    }

    fn policy(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Policy,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Non-empty list of violations found on one candidate
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// A candidate that passed validation, with every field typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRequest {
    pub movement_type: MovementType,
    pub amount: Money,
    pub origin: Location,
    pub destination: Location,
    pub operator: String,
    pub comment: Option<String>,
    pub reference: Option<String>,
}

/// Lists every problem with `candidate`; an empty list means it may be appended
pub fn validate(candidate: &MovementCandidate) -> Vec<Violation> {
    inspect(candidate).1
}

/// Validates `candidate` and, when it is clean, returns its typed form
pub fn validate_into(candidate: &MovementCandidate) -> Result<MovementRequest, Violations> {
    match inspect(candidate) {
        (Some(request), violations) if violations.is_empty() => Ok(request),
        (_, violations) => Err(Violations(violations)),
    }
}

fn inspect(candidate: &MovementCandidate) -> (Option<MovementRequest>, Vec<Violation>) {
    let mut violations = vec![];

    let movement_type = candidate
        .movement_type
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse::<MovementType>().ok());

    if movement_type.is_none() {
        violations.push(Violation::shape("type", "Invalid movement type"));
    }

    let amount = candidate.amount.as_ref().and_then(positive_amount);
    if amount.is_none() {
        violations.push(Violation::shape("amount", "Invalid amount"));
    }

    let origin = non_blank_text(&candidate.origin);
    if origin.is_none() {
        violations.push(Violation::shape("origin", "Invalid origin"));
    }

    let destination = non_blank_text(&candidate.destination);
    if destination.is_none() {
        violations.push(Violation::shape("destination", "Invalid destination"));
    }

    let operator = non_blank_text(&candidate.operator).map(str::trim);
    if operator.is_none() {
        violations.push(Violation::shape("operator", "Operator required"));
    }

    let comment = optional_text(&candidate.comment).unwrap_or_else(|| {
        violations.push(Violation::shape("comment", "Comment must be text"));
        None
    });

    let reference = optional_text(&candidate.reference).unwrap_or_else(|| {
        violations.push(Violation::shape("reference", "Reference must be text"));
        None
    });

    // Unknown types skip the matrix entirely
    let route = movement_type.and_then(policy::route_for);

    let origin = match (movement_type, route, origin) {
        (Some(movement_type), Some(route), Some(raw)) => {
            let location = raw.parse::<Location>().ok().filter(|l| route.allows_origin(*l));
            if location.is_none() {
                violations.push(Violation::policy(
                    "origin",
                    format!("Origin {raw} is not allowed for {movement_type}"),
                ));
            }
            location
        }
        _ => None,
    };

    let destination = match (movement_type, route, destination) {
        (Some(movement_type), Some(route), Some(raw)) => {
            let location = raw
                .parse::<Location>()
                .ok()
                .filter(|l| route.allows_destination(*l));
            if location.is_none() {
                violations.push(Violation::policy(
                    "destination",
                    format!("Destination {raw} is not allowed for {movement_type}"),
                ));
            }
            location
        }
        _ => None,
    };

    let request = match (movement_type, amount, origin, destination, operator) {
        (Some(movement_type), Some(amount), Some(origin), Some(destination), Some(operator)) => {
            Some(MovementRequest {
                movement_type,
                amount,
                origin,
                destination,
                operator: operator.to_string(),
                comment,
                reference,
            })
        }
        _ => None,
    };

    (request, violations)
}

/// Only JSON numbers are amounts. They are rounded to the millime and must stay strictly positive.
fn positive_amount(value: &Value) -> Option<Money> {
    value
        .as_f64()
        .and_then(Money::from_f64)
        .filter(Money::is_positive)
}

/// The text as sent, provided it is not only whitespace
fn non_blank_text(value: &Option<Value>) -> Option<&str> {
    value
        .as_ref()
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// `Some(None)` when absent or blank, `None` when present but not text
fn optional_text(value: &Option<Value>) -> Option<Option<String>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(text)) if text.trim().is_empty() => Some(None),
        Some(Value::String(text)) => Some(Some(text.trim().to_string())),
        Some(_) => None,
    }
}
