// crates/server/src/main.rs
//! Presskit server binary.
//!
//! Loads market statistics from a JSON file, then serves the report API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use presskit_server::{create_app, MarketStore};
use tracing_subscriber::EnvFilter;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47310;

/// Default market data file, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/markets.json";

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("PRESSKIT_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get the market data path from environment or use default.
fn get_data_path() -> PathBuf {
    std::env::var("PRESSKIT_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("presskit=info")),
        )
        .compact()
        .init();

    eprintln!("\n\u{1f4f0} presskit v{}\n", env!("CARGO_PKG_VERSION"));

    let data_path = get_data_path();
    let store = MarketStore::load(&data_path)?;
    eprintln!(
        "  \u{2713} Loaded {} markets from {}",
        store.len(),
        data_path.display()
    );

    let app = create_app(store);

    let port = get_port();
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("  \u{2192} http://localhost:{}\n", port);

    axum::serve(listener, app).await?;

    Ok(())
}
