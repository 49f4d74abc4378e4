use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn numeric<T: std::str::FromStr>(
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::NotANumber(name))
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: numeric("JWT_EXPIRATION_HOURS", "24")?,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: numeric("SERVER_PORT", "8080")?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config {
            database_url: "postgres://localhost/spa".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration_hours: 24,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
        };

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
