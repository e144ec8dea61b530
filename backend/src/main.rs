//! Owner service entry-point: loads settings, seeds the owner directory and
//! serves the owner screens, health probes and OpenAPI docs.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use petclinic::config::ServerSettings;
use petclinic::inbound::http::health::HealthState;
use petclinic::outbound::memory::InMemoryOwnerDirectory;
use server::{ServerConfig, create_server};

fn load_settings(args: impl IntoIterator<Item = OsString>) -> Result<ServerSettings> {
    ServerSettings::load_from_iter(args).map_err(|err| eyre!("failed to load settings: {err}"))
}

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

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings.bind_addr()?;

    let seed_examples = settings.seed_examples();
    let directory = if seed_examples {
        InMemoryOwnerDirectory::with_example_owners().wrap_err("failed to seed example owners")?
    } else {
        InMemoryOwnerDirectory::new()
    };
    info!(
        %bind_addr,
        seeded = seed_examples,
        "starting owner service"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(bind_addr).with_directory(Arc::new(directory)),
    )
    .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    server.await.wrap_err("server terminated unexpectedly")
}
