//! Process configuration from environment variables, optionally seeded from a `.env` file.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "./pokemon.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub max_connections: u32,
    /// Single origin allowed by the CORS layer.
    pub cors_origin: String,
    /// JSON array of records loaded into an empty table at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_origin: DEFAULT_CORS_ORIGIN.into(),
            seed_path: None,
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR`, `DATABASE_PATH`, `DATABASE_MAX_CONNECTIONS`, `CORS_ALLOWED_ORIGIN`
    /// and `SEED_PATH`. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::from_env`], after loading `.env` from the working directory if present.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Load(format!(".env: {}", e)));
            }
        }
        Self::from_env()
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();
        if let Some(v) = non_empty(lookup("BIND_ADDR")) {
            config.bind_addr = v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: v.clone() })?;
        }
        if let Some(v) = non_empty(lookup("DATABASE_PATH")) {
            config.database_path = PathBuf::from(v);
        }
        if let Some(v) = non_empty(lookup("DATABASE_MAX_CONNECTIONS")) {
            config.max_connections = match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", value: v }),
            };
        }
        if let Some(v) = non_empty(lookup("CORS_ALLOWED_ORIGIN")) {
            config.cors_origin = v;
        }
        config.seed_path = non_empty(lookup("SEED_PATH")).map(PathBuf::from);
        Ok(config)
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_path, PathBuf::from("./pokemon.db"));
        assert_eq!(config.max_connections, 5);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_PATH", "/tmp/dex.db"),
            ("CORS_ALLOWED_ORIGIN", "http://10.2.15.139:5173"),
            ("SEED_PATH", "seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/dex.db"));
        assert_eq!(config.cors_origin, "http://10.2.15.139:5173");
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
        let err =
            ServerConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }
}
