use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csv_schema_server::{ServerConfig, app, logging};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "csv-schema-server", version, about = "CSV schema inference service")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long, env = "CSV_SCHEMA_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "HOST")]
    host: Option<String>,
    #[arg(long, env = "PORT")]
    port: Option<u16>,
    /// Port variable used by earlier deployments; `--port`/PORT wins
    #[arg(long, env = "FLASK_PORT", hide = true)]
    flask_port: Option<u16>,
    /// Log level or EnvFilter directive (RUST_LOG still wins)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,
    /// Allowed CORS origin (repeatable; replaces the configured list)
    #[arg(long = "allowed-origin")]
    allowed_origins: Vec<String>,
}

impl Args {
    fn apply(self, cfg: &mut ServerConfig) {
        if let Some(host) = self.host {
            cfg.host = host;
        }
        if let Some(port) = self.port.or(self.flask_port) {
            cfg.port = port;
        }
        if let Some(level) = self.log_level {
            cfg.logging.level = level;
        }
        if self.log_json {
            cfg.logging.json = true;
        }
        if !self.allowed_origins.is_empty() {
            cfg.allowed_origins = self.allowed_origins;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    args.apply(&mut cfg);
    cfg.validate().context("validate config")?;

    logging::init(&cfg.logging).context("init logging")?;

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, service = %cfg.service_name, "api listening");

    axum::serve(listener, app(&cfg))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    info!("api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
