//! WebSocket transport layer.
//!
//! This module owns the socket between the emitter and the canvas server.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Emitter (Rust) │         WebSocket            │  Canvas server  │
//! │                 │─────────────────────────────►│                 │
//! │  Connection     │   one text frame per event   │                 │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. `Connection::connect` - Open socket and complete the handshake
//! 2. `Connection::send` - Write one `pixel` text frame
//! 3. `Connection::close` - Send a close frame; repeated calls are no-ops

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket connection.
pub mod connection;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{Connection, ConnectionState};
