//! Pixel event emitter.
//!
//! This module provides the main entry point for sending placements.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Emitter`] | Connect → send → close in one call |
//! | [`EmitterBuilder`] | Fluent configuration builder |
//! | [`EmitterOptions`] | Endpoint, timeout and palette policy |
//!
//! # Example
//!
//! ```no_run
//! use pixel_emitter::{Emitter, PixelEvent, Result};
//!
//! # async fn example() -> Result<()> {
//! let emitter = Emitter::builder()
//!     .endpoint("ws://192.168.0.83:3000")
//!     .build()?;
//!
//! emitter.emit(&PixelEvent::default()).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for emitter configuration.
pub mod builder;

/// Core emitter implementation.
pub mod core;

/// Endpoint and policy options.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::EmitterBuilder;
pub use core::Emitter;
pub use options::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, EmitterOptions};
