//! WebSocket protocol message types.
//!
//! This module defines the JSON frames exchanged with the canvas server.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | [`ClientMessage`] | Local → Server | Pixel placement and queries |
//! | [`ServerMessage`] | Server → Local | Broadcasts, cooldowns, errors |
//!
//! The emitter only ever needs [`ClientMessage::Pixel`]; the remaining
//! variants exist so callers can talk to the same server without a second
//! set of types.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `color` | Validated `#RRGGBB` color and the server palette |
//! | `message` | Client and server envelopes |
//! | `pixel` | The pixel placement event |

// ============================================================================
// Submodules
// ============================================================================

/// Hex colors and the canvas palette.
pub mod color;

/// Client and server message envelopes.
pub mod message;

/// Pixel placement event.
pub mod pixel;

// ============================================================================
// Re-exports
// ============================================================================

pub use color::{Color, PALETTE};
pub use message::{ClientMessage, ServerMessage};
pub use pixel::{DEFAULT_TIMESTAMP, DEFAULT_X, DEFAULT_Y, PixelEvent, now_millis};
