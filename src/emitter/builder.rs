//! Builder pattern for emitter configuration.
//!
//! Provides a fluent API for configuring and creating [`Emitter`] instances.
//!
//! # Example
//!
//! ```no_run
//! use pixel_emitter::Emitter;
//!
//! # fn example() -> pixel_emitter::Result<()> {
//! let emitter = Emitter::builder()
//!     .endpoint("ws://127.0.0.1:3000")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::Result;

use super::core::Emitter;
use super::options::EmitterOptions;

// ============================================================================
// EmitterBuilder
// ============================================================================

/// Builder for configuring an [`Emitter`] instance.
///
/// Use [`Emitter::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct EmitterBuilder {
    options: EmitterOptions,
}

impl EmitterBuilder {
    /// Creates a builder with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the WebSocket endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - `ws://` URL (e.g., "ws://192.168.0.83:3000")
    #[inline]
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.options.endpoint = endpoint.into();
        self
    }

    /// Sets the handshake timeout.
    #[inline]
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.options.connect_timeout = timeout;
        self
    }

    /// Rejects non-palette colors before connecting.
    #[inline]
    #[must_use]
    pub fn strict_palette(mut self, strict: bool) -> Self {
        self.options.strict_palette = strict;
        self
    }

    /// Replaces all options at once.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: EmitterOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the emitter with validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the endpoint or timeout is invalid.
    pub fn build(self) -> Result<Emitter> {
        self.options.validate()?;
        let endpoint = self.options.endpoint_url()?;

        Ok(Emitter::new(endpoint, self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================
