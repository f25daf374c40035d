use anyhow::Result;
use tracing::info;

use penguin_engine::Penguin;
use penguin_uci::UciEngine;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    info!(version = env!("CARGO_PKG_VERSION"), "penguin starting");

    UciEngine::new(Penguin::new()).run()?;
    Ok(())
}
