use std::path::Path;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DataConfig {
    /// JSON dataset with streets, representatives, and houses.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoggingConfig {
    pub level: String,
    /// Log file; empty disables logging since the terminal belongs to the UI.
    pub file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: "data/streets.json".to_owned(),
            },
            logging: LoggingConfig {
                level: "info".to_owned(),
                file: "pozarreal.log".to_owned(),
            },
        }
    }
}

impl Config {
    /// Layer defaults, the optional config file, and `POZARREAL_*` variables.
    pub(crate) fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(ConfigBuilder::try_from(&Config::default())?)
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("POZARREAL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
