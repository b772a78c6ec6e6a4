//! Client and server message envelopes.
//!
//! Every frame is a JSON object discriminated by its `type` field.
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | `pixel` | both | Placement request / broadcast of a placed pixel |
//! | `request_canvas` | client → server | Ask for the full canvas |
//! | `check_cooldown` | client → server | Ask for the current cooldown |
//! | `canvas_state` | server → client | Full canvas, keyed by `"x,y"` |
//! | `cooldown_started` | server → client | Placement accepted |
//! | `cooldown_status` | server → client | Answer to `check_cooldown` |
//! | `cooldown_error` | server → client | Placement rejected, still cooling down |
//! | `error` | server → client | Placement or frame rejected |

// ============================================================================
// Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string};

use crate::error::Result;

use super::pixel::PixelEvent;

// ============================================================================
// ClientMessage
// ============================================================================

/// A frame sent by the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Place a pixel.
    Pixel(PixelEvent),
    /// Request the full canvas state.
    RequestCanvas,
    /// Request the current cooldown status.
    CheckCooldown,
}

impl ClientMessage {
    /// Returns the `type` tag of this message.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pixel(_) => "pixel",
            Self::RequestCanvas => "request_canvas",
            Self::CheckCooldown => "check_cooldown",
        }
    }

    /// Serializes the message to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(to_string(self)?)
    }

    /// Parses a message from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not a known client message.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(from_str(text)?)
    }
}

impl From<PixelEvent> for ClientMessage {
    fn from(event: PixelEvent) -> Self {
        Self::Pixel(event)
    }
}

// ============================================================================
// ServerMessage
// ============================================================================

/// A frame sent by the canvas server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A pixel was placed by some client.
    Pixel(PixelEvent),

    /// Full canvas: `"x,y"` → color.
    CanvasState {
        /// Painted pixels.
        #[serde(default)]
        pixels: BTreeMap<String, String>,
    },

    /// Our placement was accepted; the next one is allowed at `cooldown_end`.
    #[serde(rename_all = "camelCase")]
    CooldownStarted {
        /// Unix milliseconds when the cooldown ends.
        cooldown_end: u64,
    },

    /// Current cooldown.
    #[serde(rename_all = "camelCase")]
    CooldownStatus {
        /// Whether a placement is allowed now.
        allowed: bool,
        /// Milliseconds until the next placement is allowed.
        #[serde(default)]
        remaining_time: u64,
    },

    /// Our placement was rejected because of the cooldown.
    #[serde(rename_all = "camelCase")]
    CooldownError {
        /// Human readable reason.
        message: String,
        /// Milliseconds until the next placement is allowed.
        #[serde(default)]
        remaining_time: u64,
        /// Column of the rejected pixel.
        #[serde(default)]
        x: Option<u32>,
        /// Row of the rejected pixel.
        #[serde(default)]
        y: Option<u32>,
        /// Color to roll back to, as sent with the placement.
        #[serde(default)]
        previous_color: Option<String>,
    },

    /// Generic rejection.
    Error {
        /// Human readable reason.
        message: String,
    },

    /// Any other `type`.
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Parses a server frame from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not a JSON object with a `type`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(from_str(text)?)
    }

    /// Returns `true` for the server's answer to a placement.
    #[must_use]
    pub const fn is_placement_reply(&self) -> bool {
        matches!(
            self,
            Self::CooldownStarted { .. } | Self::CooldownError { .. } | Self::Error { .. }
        )
    }

    /// Returns `true` if the server rejected what we sent.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::CooldownError { .. } | Self::Error { .. })
    }

    /// Returns the server's reason if this is a rejection.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::CooldownError { message, .. } | Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    use crate::protocol::Color;

    #[test]
    fn test_unit_messages_serialize_to_type_only() {
        assert_eq!(
            ClientMessage::RequestCanvas.to_json().unwrap(),
            r#"{"type":"request_canvas"}"#
        );
        assert_eq!(
            ClientMessage::CheckCooldown.to_json().unwrap(),
            r#"{"type":"check_cooldown"}"#
        );
    }

    #[test]
    fn test_pixel_message_kind() {
        let msg = ClientMessage::from(PixelEvent::default());
        assert_eq!(msg.kind(), "pixel");
        assert_eq!(ClientMessage::RequestCanvas.kind(), "request_canvas");
    }

    #[test]
    fn test_pixel_message_field_order() {
        let text = ClientMessage::from(PixelEvent::default()).to_json().unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!({"type":"pixel","x":1000,"y":1000,"color":"#f4f4f4","timestamp":1762640288781u64})
        );
        assert!(text.starts_with(r#"{"type":"pixel","x":"#));
    }

    #[test]
    fn test_client_message_rejects_bad_color() {
        let text = r#"{"type":"pixel","x":1,"y":2,"color":"blue","timestamp":3}"#;
        assert!(ClientMessage::from_json(text).is_err());
    }

    #[test]
    fn test_server_pixel_broadcast() {
        let text = r##"{"type":"pixel","x":5,"y":6,"color":"#00A368","timestamp":99}"##;
        let msg = ServerMessage::from_json(text).unwrap();

        assert_eq!(
            msg,
            ServerMessage::Pixel(PixelEvent::at(5, 6, Color::new("#00A368").unwrap(), 99))
        );
        assert!(!msg.is_placement_reply());
    }

    #[test]
    fn test_server_cooldown_started() {
        let msg = ServerMessage::from_json(r#"{"type":"cooldown_started","cooldownEnd":1234}"#)
            .unwrap();
        assert_eq!(msg, ServerMessage::CooldownStarted { cooldown_end: 1234 });
        assert!(msg.is_placement_reply());
        assert!(!msg.is_rejection());
    }

    #[test]
    fn test_server_cooldown_status() {
        let msg = ServerMessage::from_json(
            r#"{"type":"cooldown_status","allowed":false,"remainingTime":800}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ServerMessage::CooldownStatus {
                allowed: false,
                remaining_time: 800
            }
        );
    }

    #[test]
    fn test_server_cooldown_error() {
        let text = r##"{
            "type": "cooldown_error",
            "message": "You must wait before placing another pixel",
            "remainingTime": 4000,
            "x": 10,
            "y": 20,
            "previousColor": "#FFFFFF"
        }"##;
        let msg = ServerMessage::from_json(text).unwrap();

        assert!(msg.is_rejection());
        match msg {
            ServerMessage::CooldownError {
                remaining_time,
                x,
                y,
                previous_color,
                ..
            } => {
                assert_eq!(remaining_time, 4000);
                assert_eq!((x, y), (Some(10), Some(20)));
                assert_eq!(previous_color.as_deref(), Some("#FFFFFF"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_server_error() {
        let msg = ServerMessage::from_json(r#"{"type":"error","message":"Invalid color"}"#)
            .unwrap();
        assert_eq!(
            msg,
            ServerMessage::Error {
                message: "Invalid color".to_string()
            }
        );
        assert!(msg.is_rejection());
        assert_eq!(msg.rejection_message(), Some("Invalid color"));
    }

    #[test]
    fn test_rejection_message_absent_on_success() {
        let msg = ServerMessage::CooldownStarted { cooldown_end: 1 };
        assert_eq!(msg.rejection_message(), None);
    }

    #[test]
    fn test_server_canvas_state() {
        let text = r##"{"type":"canvas_state","pixels":{"1,2":"#000000","30,40":"#FFFFFF"}}"##;
        match ServerMessage::from_json(text).unwrap() {
            ServerMessage::CanvasState { pixels } => {
                assert_eq!(pixels.len(), 2);
                assert_eq!(pixels.get("1,2").map(String::as_str), Some("#000000"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_server_unknown_type() {
        let msg = ServerMessage::from_json(r#"{"type":"heartbeat"}"#).unwrap();
        assert_eq!(msg, ServerMessage::Unknown);
    }

    #[test]
    fn test_server_missing_type_is_error() {
        assert!(ServerMessage::from_json(r#"{"message":"hi"}"#).is_err());
    }
}
