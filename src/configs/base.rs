use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{common::types::AnyResult, configs::*};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub jiosaavn: JioSaavnConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Loads `config.toml` (or `config.default.toml`), falling back to the
    /// built-in defaults, then applies `PORT`, `HOST` and `CACHE_TTL` from the
    /// environment. A `.env` file is read first when present.
    pub fn load() -> AnyResult<Self> {
        let _ = dotenvy::dotenv();

        let config_path = ["config.toml", "config.default.toml"]
            .into_iter()
            .find(|p| Path::new(p).exists());

        let mut config = match config_path {
            Some(path) => {
                println!("Loading configuration from: {}", path);
                let config_str = std::fs::read_to_string(path)?;
                toml::from_str(&config_str)?
            }
            None => Config::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }

        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => eprintln!("Ignoring PORT={:?}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("CACHE_TTL") {
            match raw.trim().parse::<u64>() {
                Ok(ttl) => self.cache.ttl_secs = ttl,
                Err(e) => eprintln!("Ignoring CACHE_TTL={:?}: {}", raw, e),
            }
        }
    }
}
