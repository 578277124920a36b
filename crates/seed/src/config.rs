use std::fmt;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Postgres endpoint of the hosted project (no credentials required in it).
pub const URL_VAR: &str = "SUPABASE_URL";
/// Password of the privileged service role used for seeding.
pub const SERVICE_ROLE_VAR: &str = "SUPABASE_SERVICE_ROLE";
/// Optional pool size override.
pub const MAX_CONNECTIONS_VAR: &str = "SEED_MAX_CONNECTIONS";

/// Default pool size; a seed run issues a single statement.
const DEFAULT_MAX_CONNECTIONS: u32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Seeding tool configuration loaded from environment variables.
#[derive(Clone)]
pub struct SeedConfig {
    pub database_url: String,
    pub service_role: String,
    pub max_connections: u32,
}

impl SeedConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SUPABASE_URL`          | **yes**  | --      |
    /// | `SUPABASE_SERVICE_ROLE` | **yes**  | --      |
    /// | `SEED_MAX_CONNECTIONS`  | no       | `2`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let database_url = required(URL_VAR)?;
        let service_role = required(SERVICE_ROLE_VAR)?;

        let max_connections = match lookup(MAX_CONNECTIONS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: MAX_CONNECTIONS_VAR,
                    reason: format!("expected a positive integer, got '{raw}'"),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            service_role,
            max_connections,
        })
    }

    /// Connect options for the endpoint, authenticated with the service role.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options =
            PgConnectOptions::from_str(&self.database_url).map_err(|e| ConfigError::Invalid {
                name: URL_VAR,
                reason: e.to_string(),
            })?;
        Ok(options.password(&self.service_role))
    }
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("database_url", &self.database_url)
            .field("service_role", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
