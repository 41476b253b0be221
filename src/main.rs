//! Secure greeting service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ security headers ─▶ timeout / body limit
//!                                                                     │
//!                                                                     ▼
//!                                        ┌──────────────────────────────────────────┐
//!                                        │ /greeting   validation::name  ─┐         │
//!                                        │ /number/{id} validation::index ─┼─▶ GreetingService
//!                                        │ /health                         │   (counter, table)
//!                                        └─────────────────────────────────┘         │
//!                                                                     │
//!     Client Response                                                 ▼
//!     ◀────────────── + X-Content-Type-Options, X-Frame-Options, CSP, ... (+ HSTS if secure)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use secure_greeting::config::{load_config, validate_config, ConfigError, ServiceConfig};
use secure_greeting::http::HttpServer;
use secure_greeting::lifecycle::{signals, Shutdown};
use secure_greeting::net::load_tls_config;
use secure_greeting::observability::{init_logging, init_metrics};

#[derive(Parser)]
#[command(name = "secure-greeting")]
#[command(about = "Hardened greeting service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!("secure-greeting v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let tls = config.listener.tls.clone();
    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config);

    match tls {
        Some(tls) => {
            let rustls = load_tls_config(&tls).await?;
            server.run_tls(rustls, server_shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, server_shutdown).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
