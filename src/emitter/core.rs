//! Core emitter implementation.
//!
//! The [`Emitter`] runs the whole placement in strict sequence:
//! connect, send one `pixel` frame, close.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};
use url::Url;

use crate::error::Result;
use crate::protocol::{PixelEvent, ServerMessage};
use crate::transport::Connection;

use super::builder::EmitterBuilder;
use super::options::EmitterOptions;

// ============================================================================
// Emitter
// ============================================================================

/// Sends pixel events to a canvas server.
///
/// Holds configuration only; each emission opens and closes its own
/// [`Connection`].
#[derive(Clone)]
pub struct Emitter {
    /// Validated endpoint.
    endpoint: Url,
    /// Options the emitter was built with.
    options: EmitterOptions,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("endpoint", &self.endpoint.as_str())
            .field("connect_timeout", &self.options.connect_timeout)
            .field("strict_palette", &self.options.strict_palette)
            .finish()
    }
}

// ============================================================================
// Emitter - Construction
// ============================================================================

impl Emitter {
    /// Creates a configuration builder.
    #[inline]
    #[must_use]
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new()
    }

    /// Creates an emitter from already validated parts.
    pub(crate) fn new(endpoint: Url, options: EmitterOptions) -> Self {
        Self { endpoint, options }
    }

    /// Returns the endpoint events are sent to.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the options the emitter was built with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }
}

// ============================================================================
// Emitter - Operations
// ============================================================================

impl Emitter {
    /// Opens a connection to the configured endpoint.
    ///
    /// # Errors
    ///
    /// See [`Connection::connect`].
    pub async fn connect(&self) -> Result<Connection> {
        Connection::connect(&self.endpoint, self.options.connect_timeout).await
    }

    /// Connects, sends `event` as one text frame, and closes.
    ///
    /// The connection is closed even when the send fails; the send error
    /// takes precedence over a close error.
    ///
    /// # Errors
    ///
    /// - [`Error::ColorNotInPalette`](crate::Error::ColorNotInPalette) if `strict_palette` is set and the color is off-palette
    /// - Connection errors from [`Connection::connect`]
    /// - Transmission errors from [`Connection::send`] and [`Connection::close`]
    pub async fn emit(&self, event: &PixelEvent) -> Result<()> {
        self.check_palette(event)?;

        let mut conn = self.connect().await?;
        let sent = conn.send(event).await;
        let closed = conn.close().await;

        sent?;
        closed?;

        info!(endpoint = %self.endpoint, "Pixel event emitted");
        Ok(())
    }

    /// Like [`emit`](Self::emit), but waits up to `wait` for the server's
    /// answer to the placement before closing.
    ///
    /// Broadcasts and status frames that arrive first are skipped. Returns
    /// `None` if no answer arrived in time or the server hung up.
    ///
    /// # Errors
    ///
    /// Same as [`emit`](Self::emit), plus read errors from [`Connection::receive`].
    pub async fn emit_and_wait(
        &self,
        event: &PixelEvent,
        wait: Duration,
    ) -> Result<Option<ServerMessage>> {
        self.check_palette(event)?;

        let mut conn = self.connect().await?;
        let reply = Self::send_and_wait(&mut conn, event, wait).await;
        let closed = conn.close().await;

        let reply = reply?;
        closed?;

        info!(endpoint = %self.endpoint, replied = reply.is_some(), "Pixel event emitted");
        Ok(reply)
    }

    async fn send_and_wait(
        conn: &mut Connection,
        event: &PixelEvent,
        wait: Duration,
    ) -> Result<Option<ServerMessage>> {
        conn.send(event).await?;

        let deadline = Instant::now() + wait;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match conn.receive(remaining).await? {
                Some(message) if message.is_placement_reply() => return Ok(Some(message)),
                Some(other) => debug!(?other, "Skipping non-reply message"),
                None => return Ok(None),
            }
        }
    }

    fn check_palette(&self, event: &PixelEvent) -> Result<()> {
        if self.options.strict_palette {
            event.color.require_palette()?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;
    use tokio::net::TcpListener;

    use crate::error::Error;
    use crate::protocol::Color;
    use crate::transport::testing::FrameSink;

    fn emitter_for(url: &Url) -> Emitter {
        Emitter::builder()
            .endpoint(url.as_str())
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_emit_sends_exactly_one_frame() {
        let sink = FrameSink::bind().await;
        let url = sink.ws_url();
        let server = sink.spawn(Vec::new());

        let event = PixelEvent::at(1000, 1000, Color::new("#f4f4f4").unwrap(), 1_762_640_288_781);
        emitter_for(&url).emit(&event).await.unwrap();

        let frames = server.await.unwrap();
        assert_eq!(
            frames,
            vec![
                r##"{"type":"pixel","x":1000,"y":1000,"color":"#f4f4f4","timestamp":1762640288781}"##
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_emit_unreachable_fails_fast() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = Url::parse(&format!("ws://127.0.0.1:{port}")).unwrap();
        let err = emitter_for(&url)
            .emit(&PixelEvent::default())
            .await
            .unwrap_err();

        assert!(err.is_connection_error());
    }

    #[tokio::test]
    async fn test_strict_palette_rejects_before_connecting() {
        // Nothing listens here; a connect attempt would be a connection error.
        let emitter = Emitter::builder()
            .endpoint("ws://127.0.0.1:9")
            .strict_palette(true)
            .build()
            .unwrap();

        let err = emitter.emit(&PixelEvent::default()).await.unwrap_err();
        assert!(matches!(err, Error::ColorNotInPalette { .. }));
    }

    #[tokio::test]
    async fn test_strict_palette_allows_palette_color() {
        let sink = FrameSink::bind().await;
        let url = sink.ws_url();
        let server = sink.spawn(Vec::new());

        let emitter = Emitter::builder()
            .endpoint(url.as_str())
            .strict_palette(true)
            .build()
            .unwrap();

        let event = PixelEvent::at(1, 2, Color::new("#FF4500").unwrap(), 3);
        emitter.emit(&event).await.unwrap();

        let frames = server.await.unwrap();
        let value: Value = serde_json::from_str(&frames[0]).unwrap();
        assert_eq!(value["color"], "#FF4500");
    }

    #[tokio::test]
    async fn test_strict_palette_rejects_lowercase_palette_color() {
        // The server compares colors exactly, so lower case would be refused there.
        let emitter = Emitter::builder()
            .endpoint("ws://127.0.0.1:9")
            .strict_palette(true)
            .build()
            .unwrap();

        let event = PixelEvent::at(1, 2, Color::new("#ff4500").unwrap(), 3);
        let err = emitter.emit(&event).await.unwrap_err();
        assert!(matches!(err, Error::ColorNotInPalette { color } if color == "#ff4500"));
    }

    #[tokio::test]
    async fn test_send_and_wait_skips_broadcasts() {
        let sink = FrameSink::bind().await;
        let url = sink.ws_url();
        // A broadcast is not an answer to our placement.
        let server = sink.spawn(vec![
            r##"{"type":"pixel","x":1,"y":1,"color":"#000000","timestamp":1}"##.to_string(),
        ]);

        let mut conn = emitter_for(&url).connect().await.unwrap();
        let reply =
            Emitter::send_and_wait(&mut conn, &PixelEvent::default(), Duration::from_millis(300))
                .await
                .unwrap();
        conn.close().await.unwrap();

        assert!(reply.is_none());
        assert_eq!(server.await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_emit_and_wait_returns_cooldown() {
        let sink = FrameSink::bind().await;
        let url = sink.ws_url();
        let server = sink.spawn(vec![
            r#"{"type":"cooldown_started","cooldownEnd":1762640298781}"#.to_string(),
        ]);

        let reply = emitter_for(&url)
            .emit_and_wait(&PixelEvent::default(), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(
            reply,
            Some(ServerMessage::CooldownStarted {
                cooldown_end: 1_762_640_298_781
            })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_emit_and_wait_surfaces_rejection() {
        let sink = FrameSink::bind().await;
        let url = sink.ws_url();
        let server = sink.spawn(vec![
            r#"{"type":"error","message":"Invalid color"}"#.to_string(),
        ]);

        let reply = emitter_for(&url)
            .emit_and_wait(&PixelEvent::default(), Duration::from_secs(5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reply.rejection_message(), Some("Invalid color"));
        server.await.unwrap();
    }

    #[test]
    fn test_debug_shows_endpoint() {
        let emitter = Emitter::builder().build().unwrap();
        let debug = format!("{emitter:?}");
        assert!(debug.contains("ws://192.168.0.83:3000/"));
    }
}
