//! Service entry-point: wires configuration, the enrichment engine, and the
//! HTTP server.

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use sistema::inbound::http::health::HealthState;
use sistema::server::{self, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let state = server::build_state(&config).map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = server::run(config.bind_addr, state, health_state.clone())?;
    health_state.mark_ready();
    server.await
}
