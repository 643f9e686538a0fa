//! # Response Envelopes
//!
//! The ticket endpoint answers every request with a JSON object whose `status`
//! field decides which other fields are present:
//!
//! ```text
//! login:  {"status":"ok","ticket":<hex>,"decrypted_ticket":<json text>}
//! auth:   {"status":"ok"|"failed","ticket_text":<text>,"ticket_data":<json>,"text":<reason|null>}
//! error:  {"status":<anything else>,"text":<reason>}
//! ```
//!
//! Each envelope is parsed into an enum whose variants carry only the fields
//! that status guarantees. A body that is not JSON, or an `ok`/`failed` body
//! missing its ticket fields, is a parse error.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;

/// Rendering used for a `text` field the server left out or sent as `null`.
pub const MISSING_TEXT: &str = "null";

/// Response to a login request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginResponse {
    /// Ticket issued.
    Ok {
        /// Hex-encoded ciphertext
        ticket: String,
        /// Server-side plaintext of the ticket, itself JSON text
        decrypted_ticket: String,
    },
    /// Any status other than `ok`.
    Error { text: Option<String> },
}

/// Response to an auth request.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthResponse {
    /// The server accepted the ticket.
    Ok { ticket_text: String, ticket_data: Value },
    /// The ticket decrypted but was rejected. The decrypted content is still
    /// reported back.
    Failed {
        text: Option<String>,
        ticket_text: String,
        ticket_data: Value,
    },
    /// Any other status.
    Error { text: Option<String> },
}

#[derive(Deserialize)]
struct IssuedTicket {
    ticket: String,
    decrypted_ticket: String,
}

#[derive(Deserialize)]
struct DecryptedTicket {
    ticket_text: String,
    #[serde(default)]
    ticket_data: Value,
}

impl LoginResponse {
    /// Parse a login response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;

        match status(&value) {
            Some("ok") => {
                let issued: IssuedTicket = serde_json::from_value(value)
                    .map_err(|e| anyhow!("Malformed login response: {}", e))?;
                Ok(LoginResponse::Ok {
                    ticket: issued.ticket,
                    decrypted_ticket: issued.decrypted_ticket,
                })
            }
            _ => Ok(LoginResponse::Error {
                text: text_field(&value),
            }),
        }
    }
}

impl AuthResponse {
    /// Parse an auth response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let text = text_field(&value);

        match status(&value) {
            Some("ok") => {
                let decrypted: DecryptedTicket = serde_json::from_value(value)
                    .map_err(|e| anyhow!("Malformed auth response: {}", e))?;
                Ok(AuthResponse::Ok {
                    ticket_text: decrypted.ticket_text,
                    ticket_data: decrypted.ticket_data,
                })
            }
            Some("failed") => {
                let decrypted: DecryptedTicket = serde_json::from_value(value)
                    .map_err(|e| anyhow!("Malformed auth response: {}", e))?;
                Ok(AuthResponse::Failed {
                    text,
                    ticket_text: decrypted.ticket_text,
                    ticket_data: decrypted.ticket_data,
                })
            }
            _ => Ok(AuthResponse::Error { text }),
        }
    }
}

/// Render an optional `text` field for display.
pub fn display_text(text: Option<&str>) -> &str {
    text.unwrap_or(MISSING_TEXT)
}

fn status(value: &Value) -> Option<&str> {
    value.get("status").and_then(Value::as_str)
}

// Non-string reasons are shown as their JSON text.
fn text_field(value: &Value) -> Option<String> {
    match value.get("text") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
