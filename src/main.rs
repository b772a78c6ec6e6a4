//! `pixel-emit`: send one pixel placement and exit.
//!
//! Usage:
//!   pixel-emit
//!   pixel-emit --endpoint ws://127.0.0.1:3000 -x 10 -y 20 --color "#FF4500" --now
//!   pixel-emit --await-reply 2000 --debug

// ============================================================================
// Imports
// ============================================================================

use clap::Parser;
use pixel_emitter::{Config, Emitter, Error, Result, ServerMessage};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();
    init_logging(config.debug);

    if let Err(e) = run(config).await {
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let emitter = Emitter::builder().options(config.options()).build()?;
    let event = config.event();

    let Some(wait) = config.await_reply() else {
        emitter.emit(&event).await?;
        println!("Message sent!");
        return Ok(());
    };

    let reply = emitter.emit_and_wait(&event, wait).await?;
    println!("Message sent!");

    match reply {
        Some(reply) if reply.is_rejection() => {
            let reason = reply.rejection_message().unwrap_or("rejected");
            return Err(Error::rejected(reason));
        }
        Some(ServerMessage::CooldownStarted { cooldown_end }) => {
            println!("Accepted; next placement allowed at {cooldown_end}");
        }
        Some(other) => println!("Server replied: {other:?}"),
        None => println!("No reply within {}ms", wait.as_millis()),
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Initialize tracing/logging. `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let filter = if debug {
        "pixel_emitter=debug"
    } else {
        "pixel_emitter=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
