//! HTTP server configuration object and repository selection.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use mailinglist::ServerSettings;
use mailinglist::domain::ports::EmailRepository;
use mailinglist::outbound::memory::InMemoryEmailRepository;
use mailinglist::outbound::persistence::{
    DbPool, DieselEmailRepository, PoolConfig, run_migrations,
};

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) emails: Arc<dyn EmailRepository>,
}

impl ServerConfig {
    /// Construct a server configuration around a repository.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>, emails: Arc<dyn EmailRepository>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            emails,
        }
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

/// Select the repository adapter for the loaded settings.
///
/// With a database URL the schema is migrated and a Diesel repository is
/// returned; without one entries live in process memory.
///
/// # Errors
///
/// Fails when migrations cannot be applied or the pool cannot be built.
pub async fn build_repository(settings: &ServerSettings) -> Result<Arc<dyn EmailRepository>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; entries are kept in memory");
        return Ok(Arc::new(InMemoryEmailRepository::new()));
    };

    run_migrations(database_url)
        .await
        .wrap_err("failed to migrate database")?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to build database pool")?;
    info!(
        max_size = settings.pool_max_size(),
        "using PostgreSQL email repository"
    );
    Ok(Arc::new(DieselEmailRepository::new(pool)))
}
