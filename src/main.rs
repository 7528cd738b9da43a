//! Carlot - Minimal car inventory HTTP service
//!
//! Main entry point: opens the SQLite store and serves the HTTP API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carlot_api::{AppState, CarServer, ServerConfig};
use carlot_store::CarStore;

/// Carlot CLI.
#[derive(Parser)]
#[command(name = "carlot")]
#[command(about = "Minimal car inventory HTTP service backed by SQLite")]
#[command(version)]
struct Cli {
    /// Server host
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Database file path
    #[arg(long, default_value = "./database.sqlite")]
    db_path: PathBuf,

    /// Insert the demo rows when the table is empty
    #[arg(long)]
    seed_demo: bool,
}

/// Initialize tracing with console output.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    info!("Starting carlot v{}", env!("CARGO_PKG_VERSION"));

    // Startup open failure is fatal: do not serve without storage
    let store = match CarStore::open(&cli.db_path).await {
        Ok(store) => store,
        Err(e) => {
            error!("error opening database at {}: {}", cli.db_path.display(), e);
            return Err(e.into());
        }
    };
    info!("Connected to sqlite database at {}", cli.db_path.display());

    if cli.seed_demo {
        let inserted = store.seed_demo().await?;
        if inserted == 0 {
            info!("Demo seed skipped, table is not empty");
        }
    }

    let state = Arc::new(AppState::new(Arc::new(store)));
    let config = ServerConfig::new(&cli.host, cli.port);
    let server = CarServer::new(config, state);

    info!("Server running on http://{}", server.addr());
    server.run().await?;

    Ok(())
}
