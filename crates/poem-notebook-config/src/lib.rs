use poem_notebook_engine::Pairing;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// A bundle file or a manifest directory.
    pub poems_path: PathBuf,
    /// Grid granularity for the translation view.
    #[serde(default)]
    pub pairing: Pairing,
}

impl Config {
    pub fn new(poems_path: impl Into<PathBuf>) -> Self {
        Self {
            poems_path: poems_path.into(),
            pairing: Pairing::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the poems path
        config.poems_path = Self::expand_path(&config.poems_path).unwrap_or(config.poems_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Resolves the effective configuration: a path given on the command
    /// line wins over the config file's `poems_path`, keeping its `pairing`.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Option<Self>, ConfigError> {
        Ok(Self::merge(cli_path, Self::load()?))
    }

    fn merge(cli_path: Option<PathBuf>, loaded: Option<Self>) -> Option<Self> {
        match (cli_path, loaded) {
            (Some(path), Some(config)) => Some(Self {
                poems_path: path,
                ..config
            }),
            (Some(path), None) => Some(Self::new(path)),
            (None, loaded) => loaded,
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/poem-notebook");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
