//! Transport-neutral request handlers for reading the ledger and posting movements.
//!
//! A web layer only has to turn a [`Response`] into an HTTP status and a JSON
//! body.

use crate::input::MovementCandidate;
use crate::{Ledger, LedgerError, Result};

use anyhow::Context;

use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn rejected(violations: Vec<String>) -> Self {
        Self {
            status: 400,
            body: json!({
                "message": "Validation failed",
                "violations": violations,
            }),
        }
    }

    fn internal(err: &anyhow::Error) -> Self {
        log::error!("Internal error while handling request: {err:#}");

        Self {
            status: 500,
            body: json!({
                "message": "Internal error",
                "detail": format!("{err:#}"),
            }),
        }
    }
}

/// `GET summary`: threshold, current summary and the full movement log
pub fn get_summary(ledger: &Ledger) -> Response {
    match ledger.snapshot() {
        Ok((summary, movements)) => Response::ok(json!({
            "threshold": ledger.threshold(),
            "summary": summary,
            "movements": movements,
        })),
        Err(err) => Response::internal(&err),
    }
}

/// `POST movement`: validates and appends the movement described by the JSON `body`.
///
/// A body that is not JSON at all is an internal error. Any JSON value other
/// than an object is checked as if every field were missing.
pub fn post_movement(ledger: &Ledger, body: &str) -> Response {
    let candidate = match read_candidate(body) {
        Ok(Some(candidate)) => candidate,
        Ok(None) => return Response::rejected(vec!["Missing payload".to_string()]),
        Err(err) => return Response::internal(&err),
    };

    match ledger.append_with_summary(&candidate) {
        Ok((movement, summary)) => Response::ok(json!({
            "message": "Movement recorded",
            "movement": movement,
            "summary": summary,
        })),
        Err(err) => match err.downcast_ref::<LedgerError>() {
            Some(LedgerError::Validation(violations)) => Response::rejected(violations.messages()),
            Some(balance @ LedgerError::InsufficientBalance { .. }) => {
                Response::rejected(vec![balance.to_string()])
            }
            _ => Response::internal(&err),
        },
    }
}

fn read_candidate(body: &str) -> Result<Option<MovementCandidate>> {
    let payload: Value = serde_json::from_str(body).context("Unreadable movement payload")?;

    let candidate = match payload {
        Value::Null => None,
        payload @ Value::Object(_) => Some(serde_json::from_value(payload)?),
        _ => Some(MovementCandidate::default()),
    };

    Ok(candidate)
}
