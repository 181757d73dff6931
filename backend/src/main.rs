//! Backend entry-point: loads settings, wires the expense store, and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};
use spendwise_backend::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load SPENDWISE settings")?;
    let config = ServerConfig::from_settings(&settings)
        .wrap_err_with(|| format!("invalid listen host '{}'", settings.host()))?;

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to start HTTP server on {bind_addr}"))?;
    server.await.wrap_err("HTTP server stopped unexpectedly")
}
