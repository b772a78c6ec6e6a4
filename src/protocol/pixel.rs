//! The pixel placement event.
//!
//! # Format
//!
//! ```json
//! {"type":"pixel","x":1000,"y":1000,"color":"#f4f4f4","timestamp":1762640288781}
//! ```
//!
//! The `type` tag is written by [`ClientMessage`](super::ClientMessage);
//! [`PixelEvent::to_json`] produces the complete frame.

// ============================================================================
// Imports
// ============================================================================

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::color::Color;
use super::message::ClientMessage;

// ============================================================================
// Constants
// ============================================================================

/// Column of the stock event.
pub const DEFAULT_X: u32 = 1000;

/// Row of the stock event.
pub const DEFAULT_Y: u32 = 1000;

/// Timestamp of the stock event, in Unix milliseconds.
pub const DEFAULT_TIMESTAMP: u64 = 1_762_640_288_781;

// ============================================================================
// PixelEvent
// ============================================================================

/// A single colored pixel placed at a coordinate.
///
/// Immutable once built; the `with_*` methods consume and return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelEvent {
    /// Pixel column.
    pub x: u32,

    /// Pixel row.
    pub y: u32,

    /// Color to paint.
    pub color: Color,

    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,

    /// Color being replaced, echoed back by the server on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_color: Option<Color>,
}

// ============================================================================
// Constructors
// ============================================================================

impl PixelEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(x: u32, y: u32, color: Color) -> Self {
        Self::at(x, y, color, now_millis())
    }

    /// Creates an event with an explicit timestamp.
    #[inline]
    #[must_use]
    pub fn at(x: u32, y: u32, color: Color, timestamp: u64) -> Self {
        Self {
            x,
            y,
            color,
            timestamp,
            previous_color: None,
        }
    }
}

impl Default for PixelEvent {
    /// The stock event: `(1000, 1000)`, `#f4f4f4`, `1762640288781`.
    fn default() -> Self {
        Self::at(DEFAULT_X, DEFAULT_Y, Color::default(), DEFAULT_TIMESTAMP)
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl PixelEvent {
    /// Replaces the timestamp.
    #[inline]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Replaces the timestamp with the current time.
    #[inline]
    #[must_use]
    pub fn stamped_now(self) -> Self {
        self.with_timestamp(now_millis())
    }

    /// Records the color this pixel overwrites.
    #[inline]
    #[must_use]
    pub fn with_previous_color(mut self, color: Color) -> Self {
        self.previous_color = Some(color);
        self
    }
}

// ============================================================================
// Conversion Methods
// ============================================================================

impl PixelEvent {
    /// Serializes the event into the JSON text of a `pixel` frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        ClientMessage::Pixel(self.clone()).to_json()
    }
}

/// Current time in Unix milliseconds.
///
/// Clocks set before 1970 read as zero.
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
