//! Pixel Emitter - send pixel placements to a canvas server.
//!
//! This library opens a WebSocket connection to a collaborative pixel
//! canvas, sends a single `pixel` event as one JSON text frame, and closes
//! the connection.
//!
//! # Architecture
//!
//! The emitter is a fire-and-forget client:
//!
//! - **Local End (Rust)**: Builds a [`PixelEvent`], sends it, closes
//! - **Remote End (Server)**: Validates, applies, and broadcasts the pixel
//!
//! Key design principles:
//!
//! - One [`Connection`] per emission: connect → send → close, in sequence
//! - Colors are validated at construction; invalid events never reach the wire
//! - No retry: connection and transmission failures surface immediately
//!
//! # Quick Start
//!
//! ```no_run
//! use pixel_emitter::{Color, Emitter, PixelEvent, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let emitter = Emitter::builder()
//!         .endpoint("ws://192.168.0.83:3000")
//!         .build()?;
//!
//!     let event = PixelEvent::new(1000, 1000, Color::new("#f4f4f4")?);
//!     emitter.emit(&event).await?;
//!     println!("Message sent!");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `pixel-emit` command-line flags |
//! | [`emitter`] | [`Emitter`] and its configuration |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`protocol`] | Wire message types |
//! | [`transport`] | WebSocket connection |

// ============================================================================
// Modules
// ============================================================================

/// Command-line and environment configuration.
pub mod config;

/// Emitter and its configuration.
///
/// Use [`Emitter::builder()`] to create a configured emitter.
pub mod emitter;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// WebSocket protocol message types.
pub mod protocol;

/// WebSocket transport layer.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Config types
pub use config::Config;

// Emitter types
pub use emitter::{Emitter, EmitterBuilder, EmitterOptions};

// Error types
pub use error::{Error, Result};

// Protocol types
pub use protocol::{ClientMessage, Color, PALETTE, PixelEvent, ServerMessage};

// Transport types
pub use transport::{Connection, ConnectionState};
