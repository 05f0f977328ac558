use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub users_base_path: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_USERS_BASE_PATH: &'static str = "/api/users";

    pub fn from_env() -> Result<Self, ConfigError> {
        // .env is optional, real deployments set variables directly
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or(&lookup, "BIND_ADDR", Self::DEFAULT_BIND_ADDR)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", "10")?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", "1")?;

        let raw_base_path = lookup("USERS_BASE_PATH")
            .unwrap_or_else(|| Self::DEFAULT_USERS_BASE_PATH.to_string());
        // The router cannot be nested at "/"
        let users_base_path = raw_base_path.trim_end_matches('/').to_string();
        if !users_base_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                name: "USERS_BASE_PATH",
                value: raw_base_path,
            });
        }

        Ok(Self {
            database_url,
            bind_addr,
            users_base_path,
            db_max_connections,
            db_min_connections,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
