use super::{evolution::EvolutionConfig, profile::ProfileConfig, traits::ConfigSection};
use crate::error::LevelforgeError;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment overrides look like `LEVELFORGE__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "LEVELFORGE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub profile: ProfileConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), LevelforgeError> {
        self.evolution.validate()?;
        self.profile.validate()?;
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML file, layering `LEVELFORGE__*` environment variables on top
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LevelforgeError> {
        self.load_layered(Some(path.as_ref()))
    }

    /// Defaults with `LEVELFORGE__*` environment variables layered on top
    pub fn load_from_env(&self) -> Result<(), LevelforgeError> {
        self.load_layered(None)
    }

    fn load_layered(&self, path: Option<&Path>) -> Result<(), LevelforgeError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        // Values stay strings until deserialized, so "0123" keeps its leading zero
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| LevelforgeError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| LevelforgeError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LevelforgeError> {
        let toml_str = self.to_toml()?;

        std::fs::write(path, toml_str)
            .map_err(|e| LevelforgeError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, LevelforgeError> {
        toml::to_string_pretty(&self.get())
            .map_err(|e| LevelforgeError::Configuration(format!("Failed to serialize: {}", e)))
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), LevelforgeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
