//! Emitter configuration.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use pixel_emitter::EmitterOptions;
//!
//! let options = EmitterOptions::new()
//!     .with_endpoint("ws://127.0.0.1:3000")
//!     .with_connect_timeout(Duration::from_secs(2))
//!     .with_strict_palette();
//!
//! let url = options.endpoint_url()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "ws://192.168.0.83:3000";

/// Handshake timeout used when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// EmitterOptions
// ============================================================================

/// Where and how the emitter connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// WebSocket endpoint (`ws://` only).
    pub endpoint: String,

    /// Maximum time for the TCP connect and WebSocket handshake.
    pub connect_timeout: Duration,

    /// Reject colors outside the server palette before connecting.
    pub strict_palette: bool,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl EmitterOptions {
    /// Creates options with the default endpoint and timeout.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            strict_palette: false,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl EmitterOptions {
    /// Sets the endpoint.
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the connect timeout.
    #[inline]
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enables palette enforcement.
    #[inline]
    #[must_use]
    pub fn with_strict_palette(mut self) -> Self {
        self.strict_palette = true;
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

impl EmitterOptions {
    /// Parses the endpoint, accepting only plain `ws` URLs.
    ///
    /// The crate is built without a TLS backend, so `wss` is refused here
    /// instead of failing later during the handshake.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the endpoint is not a `ws://` URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::config(format!("invalid endpoint {:?}: {e}", self.endpoint)))?;

        match url.scheme() {
            "ws" => Ok(url),
            "wss" => Err(Error::config(format!(
                "endpoint {url} uses wss, but TLS is not supported; use ws://"
            ))),
            other => Err(Error::config(format!(
                "endpoint scheme must be ws, got {other:?}"
            ))),
        }
    }

    /// Validates the options configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the endpoint is invalid or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;

        if self.connect_timeout.is_zero() {
            return Err(Error::config("connect timeout must be greater than zero"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
