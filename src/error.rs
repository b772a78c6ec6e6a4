//! Error types for the pixel emitter.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use pixel_emitter::{Emitter, PixelEvent, Result};
//!
//! async fn example() -> Result<()> {
//!     let emitter = Emitter::builder().endpoint("ws://127.0.0.1:3000").build()?;
//!     emitter.emit(&PixelEvent::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Validation | [`Error::InvalidColor`], [`Error::ColorNotInPalette`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionTimeout`] |
//! | Transmission | [`Error::Transmission`], [`Error::ConnectionClosed`], [`Error::WebSocket`] |
//! | Server | [`Error::Rejected`] |
//! | External | [`Error::Io`], [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;
use tokio_tungstenite::tungstenite::Error as WsError;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when emitter configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Color is not in `#RRGGBB` form.
    #[error("Invalid color: {value:?} (expected #RRGGBB)")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// Color is well-formed but not one the canvas server accepts.
    #[error("Color not in palette: {color}")]
    ColorNotInPalette {
        /// The rejected color.
        color: String,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// WebSocket connection failed.
    ///
    /// Returned when the endpoint is unreachable or refuses the handshake.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// Connection attempt did not complete in time.
    #[error("Connection timeout after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // Transmission Errors
    // ========================================================================
    /// Writing to or closing an established connection failed.
    #[error("Transmission failed: {message}")]
    Transmission {
        /// Description of the write failure.
        message: String,
    },

    /// Operation attempted on a closed connection.
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // Server Errors
    // ========================================================================
    /// The server answered a placement with `error` or `cooldown_error`.
    #[error("Rejected by server: {message}")]
    Rejected {
        /// Reason given by the server.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid color error.
    #[inline]
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Creates a palette rejection error.
    #[inline]
    pub fn color_not_in_palette(color: impl Into<String>) -> Self {
        Self::ColorNotInPalette {
            color: color.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a connection timeout error.
    #[inline]
    pub fn connection_timeout(timeout_ms: u64) -> Self {
        Self::ConnectionTimeout { timeout_ms }
    }

    /// Creates a transmission error.
    #[inline]
    pub fn transmission(message: impl Into<String>) -> Self {
        Self::Transmission {
            message: message.into(),
        }
    }

    /// Creates a server rejection error.
    #[inline]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConnectionTimeout { .. })
    }

    /// Returns `true` if the connection could not be established.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::ConnectionTimeout { .. }
        )
    }

    /// Returns `true` if I/O on an established connection failed.
    ///
    /// Handshake failures are reported as [`Error::Connection`], so a raw
    /// [`Error::WebSocket`] always comes from an open socket.
    #[inline]
    #[must_use]
    pub fn is_transmission_error(&self) -> bool {
        matches!(
            self,
            Self::Transmission { .. } | Self::ConnectionClosed | Self::WebSocket(_)
        )
    }

    /// Returns `true` if the event itself was rejected before any I/O.
    #[inline]
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColor { .. } | Self::ColorNotInPalette { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
