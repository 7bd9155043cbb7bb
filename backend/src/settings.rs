//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MAILINGLIST_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the listener binds to when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration values for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MAILINGLIST")]
pub struct ServerSettings {
    /// Socket address for the HTTP listener.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one the service keeps entries
    /// in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections. Matches
    /// [`crate::outbound::persistence::DEFAULT_MAX_SIZE`] unless overridden.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured database URL, treating a blank value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the configured pool size.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }
}
