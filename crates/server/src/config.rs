use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Issuer whose bearer tokens are accepted on account endpoints
    pub oidc_issuer_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Config {
    const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    name: "BIND_ADDR",
                    value,
                })?,
            None => Self::DEFAULT_BIND_ADDR,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value,
                })?,
            None => Self::DEFAULT_MAX_CONNECTIONS,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RUN_MIGRATIONS",
                        value,
                    });
                }
            },
            None => true,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            oidc_issuer_url: required("OIDC_ISSUER_URL")?,
            bind_addr,
            max_connections,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/cinema"),
            ("OIDC_ISSUER_URL", "https://auth.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.max_connections, 10);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_missing_required() {
        let err = Config::from_lookup(lookup(&[("OIDC_ISSUER_URL", "https://auth")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_values() {
        let base = [
            ("DATABASE_URL", "postgres://localhost/cinema"),
            ("OIDC_ISSUER_URL", "https://auth.example.com"),
        ];

        let mut vars = base.to_vec();
        vars.push(("BIND_ADDR", "nowhere"));
        assert!(matches!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));

        let mut vars = base.to_vec();
        vars.push(("DATABASE_MAX_CONNECTIONS", "0"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());

        let mut vars = base.to_vec();
        vars.push(("RUN_MIGRATIONS", "false"));
        vars.push(("BIND_ADDR", "127.0.0.1:8080"));
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert!(!config.run_migrations);
        assert_eq!(config.bind_addr.port(), 8080);
    }
}
