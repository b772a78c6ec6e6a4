//! Command-line and environment configuration for `pixel-emit`.
//!
//! Every flag is optional; with none given the binary sends the stock event
//! to the stock endpoint.
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--endpoint` | `PIXEL_ENDPOINT` | `ws://192.168.0.83:3000` |
//! | `-x`, `-y` | | `1000`, `1000` |
//! | `--color` | | `#f4f4f4` |
//! | `--timestamp` / `--now` | | `1762640288781` |
//! | `--connect-timeout` | `PIXEL_CONNECT_TIMEOUT_MS` | `10000` |

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use clap::Parser;

use crate::emitter::{DEFAULT_ENDPOINT, EmitterOptions};
use crate::protocol::{Color, DEFAULT_TIMESTAMP, DEFAULT_X, DEFAULT_Y, PixelEvent};

// ============================================================================
// Config
// ============================================================================

/// Send one pixel placement to a canvas server over WebSocket.
#[derive(Debug, Clone, Parser)]
#[command(name = "pixel-emit", version, about)]
pub struct Config {
    /// WebSocket endpoint of the canvas server.
    #[arg(long, env = "PIXEL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Pixel column.
    #[arg(short, long, default_value_t = DEFAULT_X)]
    pub x: u32,

    /// Pixel row.
    #[arg(short, long, default_value_t = DEFAULT_Y)]
    pub y: u32,

    /// Pixel color as #RRGGBB.
    #[arg(long, default_value = "#f4f4f4")]
    pub color: Color,

    /// Event timestamp in Unix milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMESTAMP, conflicts_with = "now")]
    pub timestamp: u64,

    /// Stamp the event with the current time.
    #[arg(long)]
    pub now: bool,

    /// Color being overwritten, for server-side rollback.
    #[arg(long, value_name = "COLOR")]
    pub previous_color: Option<Color>,

    /// Connect and handshake timeout in milliseconds.
    #[arg(
        long,
        value_name = "MS",
        env = "PIXEL_CONNECT_TIMEOUT_MS",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout: u64,

    /// Refuse colors outside the server palette.
    #[arg(long)]
    pub strict_palette: bool,

    /// Wait this many milliseconds for the server's answer before closing.
    #[arg(long, value_name = "MS")]
    pub await_reply: Option<u64>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    /// Builds the event described by the flags.
    #[must_use]
    pub fn event(&self) -> PixelEvent {
        let mut event = PixelEvent::at(self.x, self.y, self.color.clone(), self.timestamp);
        if self.now {
            event = event.stamped_now();
        }
        if let Some(previous) = &self.previous_color {
            event = event.with_previous_color(previous.clone());
        }
        event
    }

    /// Builds the emitter options described by the flags.
    #[must_use]
    pub fn options(&self) -> EmitterOptions {
        let mut options = EmitterOptions::new()
            .with_endpoint(self.endpoint.clone())
            .with_connect_timeout(Duration::from_millis(self.connect_timeout));
        if self.strict_palette {
            options = options.with_strict_palette();
        }
        options
    }

    /// Returns how long to wait for a reply, if requested.
    #[inline]
    #[must_use]
    pub fn await_reply(&self) -> Option<Duration> {
        self.await_reply.map(Duration::from_millis)
    }
}

// ============================================================================
// Tests
// ============================================================================
