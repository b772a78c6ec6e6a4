//! WebSocket connection to the canvas server.
//!
//! A [`Connection`] is owned by exactly one caller and driven in sequence:
//! connect, send, close. There is no background task; every method awaits
//! its own I/O before returning.
//!
//! # Lifecycle
//!
//! ```text
//! Disconnected ──connect──► Open ──send──► Open ──close──► Closed
//!                                                  ▲          │
//!                                                  └─close────┘ (no-op)
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout, timeout_at};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, trace, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::protocol::{ClientMessage, PixelEvent, ServerMessage};

// ============================================================================
// Constants
// ============================================================================

/// How long `close` waits for the server to acknowledge the close frame.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

// ============================================================================
// Types
// ============================================================================

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Whether a [`Connection`] can still carry frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake completed; frames can be sent.
    Open,
    /// Closed locally, by the server, or after a failed write.
    Closed,
}

// ============================================================================
// Connection
// ============================================================================

/// WebSocket connection to a canvas server.
///
/// Not `Clone`: the socket has a single owner and every operation takes
/// `&mut self`.
pub struct Connection {
    /// Endpoint this connection was opened against.
    endpoint: Url,
    /// Live stream; `None` once closed.
    stream: Option<WsStream>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint.as_str())
            .field("state", &self.state())
            .finish()
    }
}

impl Connection {
    /// Opens a WebSocket connection to `endpoint`.
    ///
    /// No retry is attempted.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `endpoint` is not a `ws://` URL (no TLS support)
    /// - [`Error::ConnectionTimeout`] if the handshake does not finish within `connect_timeout`
    /// - [`Error::Connection`] if the endpoint is unreachable or refuses the handshake
    pub async fn connect(endpoint: &Url, connect_timeout: Duration) -> Result<Self> {
        if endpoint.scheme() != "ws" {
            return Err(Error::config(format!(
                "cannot connect to {endpoint}: only ws:// is supported"
            )));
        }

        debug!(%endpoint, timeout_ms = connect_timeout.as_millis() as u64, "Connecting");

        let (stream, response) = timeout(connect_timeout, connect_async(endpoint.as_str()))
            .await
            .map_err(|_| Error::connection_timeout(connect_timeout.as_millis() as u64))?
            .map_err(|e| Error::connection(format!("{endpoint}: {e}")))?;

        info!(%endpoint, status = %response.status(), "WebSocket connection established");

        Ok(Self {
            endpoint: endpoint.clone(),
            stream: Some(stream),
        })
    }

    /// Returns the endpoint this connection was opened against.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        if self.stream.is_some() {
            ConnectionState::Open
        } else {
            ConnectionState::Closed
        }
    }

    /// Returns `true` while frames can be sent.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// Sends a pixel event as a single text frame.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`] if the connection is already closed
    /// - [`Error::Transmission`] if the write fails
    pub async fn send(&mut self, event: &PixelEvent) -> Result<()> {
        self.send_message(&ClientMessage::Pixel(event.clone())).await?;

        info!(x = event.x, y = event.y, color = %event.color, "Pixel event sent");
        Ok(())
    }

    /// Sends any client message as a single text frame.
    ///
    /// A failed write closes the connection.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`] if the connection is already closed
    /// - [`Error::Transmission`] if the write fails
    /// - [`Error::Json`] if the message cannot be serialized
    pub async fn send_message(&mut self, message: &ClientMessage) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::ConnectionClosed)?;

        let json = message.to_json()?;
        let bytes = json.len();

        let result = stream.send(Message::text(json)).await;
        if let Err(e) = result {
            self.stream = None;
            return Err(match e {
                WsError::ConnectionClosed | WsError::AlreadyClosed => Error::ConnectionClosed,
                other => Error::transmission(other.to_string()),
            });
        }

        trace!(kind = message.kind(), bytes, "Frame sent");
        Ok(())
    }

    /// Waits up to `wait` for the next server message.
    ///
    /// Non-text frames and text frames that do not decode are skipped.
    /// Returns `None` on timeout or when the server closes the connection.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`] if the connection is already closed
    /// - [`Error::Transmission`] if reading fails, e.g. the server drops the
    ///   socket without a close frame; the connection is closed afterwards
    pub async fn receive(&mut self, wait: Duration) -> Result<Option<ServerMessage>> {
        let stream = self.stream.as_mut().ok_or(Error::ConnectionClosed)?;
        let deadline = Instant::now() + wait;

        loop {
            let Ok(next) = timeout_at(deadline, stream.next()).await else {
                trace!(wait_ms = wait.as_millis() as u64, "No server message before deadline");
                return Ok(None);
            };

            match next {
                Some(Ok(Message::Text(text))) => match ServerMessage::from_json(text.as_str()) {
                    Ok(message) => {
                        debug!(?message, "Server message received");
                        return Ok(Some(message));
                    }
                    Err(e) => warn!(error = %e, text = %text.as_str(), "Undecodable server message"),
                },

                Some(Ok(Message::Close(_))) | None => {
                    debug!("WebSocket closed by remote");
                    self.stream = None;
                    return Ok(None);
                }

                Some(Err(e)) => {
                    warn!(error = %e, "WebSocket read failed");
                    self.stream = None;
                    return Err(Error::transmission(format!("read failed: {e}")));
                }

                // Ignore Binary, Ping, Pong, Frame
                Some(Ok(_)) => {}
            }
        }
    }

    /// Closes the connection.
    ///
    /// Idempotent: closing an already closed connection returns `Ok(())`.
    /// Waits briefly for the server's close acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transmission`] if the close frame cannot be written.
    pub async fn close(&mut self) -> Result<()> {
        let Some(mut stream) = self.stream.take() else {
            trace!("Close on closed connection");
            return Ok(());
        };

        match stream.close(None).await {
            Ok(()) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => {}
            Err(e) => return Err(Error::transmission(format!("close failed: {e}"))),
        }

        // Drain until the server echoes the close frame.
        let drained = timeout(CLOSE_TIMEOUT, async {
            while let Some(Ok(message)) = stream.next().await {
                if message.is_close() {
                    break;
                }
            }
        })
        .await;

        if drained.is_err() {
            debug!("Server did not acknowledge close in time");
        }

        debug!(endpoint = %self.endpoint, "Connection closed");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
