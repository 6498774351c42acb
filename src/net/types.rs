//! Wire-protocol DTOs for the websocket boundary.
//!
//! DESIGN
//! ======
//! Both frame payloads are single-field JSON objects. Inbound decoding goes
//! through `decode_notification` so a malformed payload surfaces as a typed
//! error at the boundary instead of a partially-trusted value deeper in the
//! client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fixed text of the one greeting this client can send.
pub const GREETING_TEXT: &str = "The message";

/// Outbound greeting payload, serialized to `{"message":"..."}`.
///
/// Constructed fresh for each send action and discarded after transmission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Greeting text; always [`GREETING_TEXT`] in this client.
    pub message: String,
}

impl Greeting {
    /// The fixed greeting sent by the panel's send action.
    pub fn hello() -> Self {
        Self {
            message: GREETING_TEXT.to_owned(),
        }
    }
}

/// Inbound notification payload, decoded from `{"message":"..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Message text shown to the user.
    pub message: String,
}

/// Decode one inbound text frame into a [`Notification`].
///
/// # Errors
///
/// Returns the underlying JSON error when the payload is not a valid
/// notification object.
pub fn decode_notification(raw: &str) -> Result<Notification, serde_json::Error> {
    serde_json::from_str(raw)
}
