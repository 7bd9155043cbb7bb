//! Service entry-point: loads settings, selects the store and serves the
//! mailing-list API.

mod server;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mailinglist::ServerSettings;
use server::{ServerConfig, build_repository, create_server};

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

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let emails = build_repository(&settings).await?;

    let config = ServerConfig::new(settings.bind_addr(), emails);
    let bind_addr = config.bind_addr().to_owned();
    let server =
        create_server(config).wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(bind_addr = %bind_addr, "mailing-list API listening");

    server.await.wrap_err("server terminated with an error")
}

#[cfg(test)]
mod tests;
