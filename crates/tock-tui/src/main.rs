//! tock entry point.
//!
//! # Usage
//!
//! ```bash
//! tock
//!
//! # Debug logging goes to stderr; redirect it away from the screen
//! RUST_LOG=debug tock 2>tock.log
//! ```
//!
//! Left/Right cycle styles, `h` toggles the footer, `q` quits.

use clap::Parser;
use tock_tui::{Runtime, SystemClock, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Full-screen terminal clock
#[derive(Parser, Debug)]
#[command(name = "tock")]
#[command(about = "Full-screen terminal clock with selectable styles")]
#[command(version)]
struct Args {}

/// Install a stderr subscriber, but only when `RUST_LOG` asks for one; the
/// alternate screen owns stdout.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .with(filter)
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {} = Args::parse();
    init_tracing();

    let driver = TerminalDriver::new()?;
    let runtime = Runtime::new(driver, SystemClock::new());

    runtime.run().await?;
    Ok(())
}
