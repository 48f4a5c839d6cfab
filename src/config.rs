//! Frontend Config
//!
//! `grocery.toml` is compiled into the bundle; there is no filesystem to read
//! from at runtime.

use serde::Deserialize;

use grocery_core::{GroceryService, InMemoryGroceryService, Item};

use crate::commands::TauriGroceryService;

const CONFIG_TOML: &str = include_str!("../grocery.toml");

/// Which backend the actions talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Host application via Tauri IPC
    #[default]
    Tauri,
    /// In-page list, lost on reload
    Memory,
}

/// Item the memory backend starts with
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub log_level: String,
    pub seed: Vec<SeedItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            log_level: "info".to_string(),
            seed: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Most verbose level the console subscriber records
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Seed entries as items, numbered from 1
    pub fn seed_items(&self) -> Vec<Item> {
        self.seed
            .iter()
            .zip(1..)
            .map(|(seed, id)| Item {
                id,
                name: seed.name.clone(),
                done: seed.done,
                deleted: seed.deleted,
            })
            .collect()
    }

    /// Backend client selected by `backend`
    pub fn build_service(&self) -> Box<dyn GroceryService> {
        match self.backend {
            BackendKind::Tauri => Box::new(TauriGroceryService::new()),
            BackendKind::Memory => Box::new(InMemoryGroceryService::with_items(self.seed_items())),
        }
    }
}

/// Load the bundled config
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_toml_str(CONFIG_TOML)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config().expect("bundled config is valid");
        assert_eq!(config.backend, BackendKind::Tauri);
        assert_eq!(config.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_memory_backend_with_seed() {
        let config = Config::from_toml_str(
            r#"
            backend = "memory"
            log_level = "debug"

            [[seed]]
            name = "Milk"

            [[seed]]
            name = "Eggs"
            done = true
            "#,
        )
        .unwrap();

        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);

        let mut eggs = Item::new(2, "Eggs");
        eggs.done = true;
        assert_eq!(config.seed_items(), vec![Item::new(1, "Milk"), eggs]);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = Config::from_toml_str(r#"backend = "carrier-pigeon""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = Config {
            log_level: "WARN".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level().unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        let err = config.log_level().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "chatty"));
    }
}
