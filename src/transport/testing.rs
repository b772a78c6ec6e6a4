//! Throwaway WebSocket server for tests.
//!
//! Binds `127.0.0.1:0`, accepts one client, records every text frame until
//! the client closes, and optionally answers each frame with a canned reply.
//! [`FrameSink::spawn_dropping`] instead abandons the client right after the
//! handshake.

// ============================================================================
// Imports
// ============================================================================

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use url::Url;

// ============================================================================
// FrameSink
// ============================================================================

/// A bound server that has not accepted its client yet.
pub(crate) struct FrameSink {
    listener: TcpListener,
    port: u16,
}

impl FrameSink {
    /// Binds to a random localhost port.
    pub(crate) async fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should succeed");
        let port = listener.local_addr().expect("bound socket").port();

        Self { listener, port }
    }

    /// Returns `ws://127.0.0.1:{port}`.
    pub(crate) fn ws_url(&self) -> Url {
        Url::parse(&format!("ws://127.0.0.1:{}", self.port)).expect("valid url")
    }

    /// Serves one client in the background.
    ///
    /// The n-th text frame is answered with `replies[n]` if present. The
    /// handle resolves to the received text frames once the client is gone.
    pub(crate) fn spawn(self, replies: Vec<String>) -> JoinHandle<Vec<String>> {
        tokio::spawn(async move {
            let (stream, _) = self.listener.accept().await.expect("accept");
            let mut ws = accept_async(stream).await.expect("handshake");

            let mut replies = replies.into_iter();
            let mut frames = Vec::new();

            // Keep reading after Close so the acknowledgement gets flushed.
            while let Some(Ok(message)) = ws.next().await {
                if let Message::Text(text) = message {
                    frames.push(text.to_string());
                    if let Some(reply) = replies.next() {
                        ws.send(Message::text(reply)).await.expect("reply");
                    }
                }
            }

            frames
        })
    }

    /// Completes the handshake with one client, then drops the socket
    /// without sending a close frame.
    pub(crate) fn spawn_dropping(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let (stream, _) = self.listener.accept().await.expect("accept");
            let ws = accept_async(stream).await.expect("handshake");
            drop(ws);
        })
    }
}
