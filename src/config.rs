//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Bounded concurrent connections; waiters queue.
pub const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub pool_size: u32,
    /// CA certificate for managed databases; enables verify-ca TLS.
    pub ca_cert: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub jwt_secret: String,
    pub listen_port: u16,
}

impl Config {
    /// Read configuration from the environment. `DB_HOST`, `DB_USER`,
    /// `DB_PASSWORD` and `DB_NAME` are required; the rest have defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            db: DbConfig {
                host: required("DB_HOST")?,
                port: parsed_or("DB_PORT", 5432)?,
                user: required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                name: required("DB_NAME")?,
                pool_size: parsed_or("DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
                ca_cert: env::var("DB_CA_CERT").ok().map(PathBuf::from),
            },
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".into()),
            listen_port: parsed_or("PORT", 4000)?,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::Config(format!("missing env var {}", key)))
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test mutating the process environment; keep it that way so
    // parallel test threads never race on env vars.
    #[test]
    fn from_env_reads_and_defaults() {
        env::set_var("DB_HOST", "db.example.com");
        env::set_var("DB_USER", "app");
        env::set_var("DB_PASSWORD", "pw");
        env::set_var("DB_NAME", "inventory");
        env::remove_var("DB_PORT");
        env::remove_var("DB_POOL_SIZE");
        env::remove_var("DB_CA_CERT");
        env::remove_var("JWT_SECRET");
        env::remove_var("PORT");

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.db.host, "db.example.com");
        assert_eq!(cfg.db.port, 5432);
        assert_eq!(cfg.db.pool_size, DEFAULT_POOL_SIZE);
        assert!(cfg.db.ca_cert.is_none());
        assert_eq!(cfg.listen_port, 4000);

        env::remove_var("DB_HOST");
        assert!(Config::from_env().is_err());
        env::set_var("DB_HOST", "db.example.com");
    }
}
