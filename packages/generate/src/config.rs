//! Generation settings and their layering.
//!
//! Settings resolve from three layers, lowest precedence first: built-in
//! defaults, an optional TOML file, then explicit overrides (CLI flags or
//! interactive answers). Every layer after the defaults is a
//! [`PartialConfig`] whose unset fields fall through.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Output path used when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "data/large.csv";

/// Number of data rows generated when none is configured.
pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;

/// Errors from loading or rendering configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateConfig {
    /// Destination CSV file. Its parent directory must already exist.
    pub output_path: PathBuf,

    /// Number of data rows to write (excluding the header).
    pub row_count: u64,

    /// Seed for the random source. `None` draws a fresh seed from the OS,
    /// so output differs between runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            row_count: DEFAULT_ROW_COUNT,
            seed: None,
        }
    }
}

impl GenerateConfig {
    /// Applies every field set in `layer` on top of `self`.
    #[must_use]
    pub fn merge(self, layer: PartialConfig) -> Self {
        Self {
            output_path: layer.output_path.unwrap_or(self.output_path),
            row_count: layer.row_count.unwrap_or(self.row_count),
            seed: layer.seed.or(self.seed),
        }
    }

    /// Renders the configuration as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is not valid UTF-8 or the seed
    /// does not fit in a TOML integer.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// One configuration layer where every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub output_path: Option<PathBuf>,
    pub row_count: Option<u64>,
    pub seed: Option<u64>,
}

impl PartialConfig {
    /// Parses a layer from TOML text. `origin` is only used in error
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, has unknown keys, or
    /// has values of the wrong type.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.display().to_string(),
            source,
        })
    }

    /// Reads a layer from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text, path)
    }
}

/// Resolves the final configuration from the defaults, an optional config
/// file, and explicit overrides.
///
/// # Errors
///
/// Returns an error if `config_file` is given but cannot be read or parsed.
pub fn resolve(
    config_file: Option<&Path>,
    overrides: PartialConfig,
) -> Result<GenerateConfig, ConfigError> {
    let mut config = GenerateConfig::default();

    if let Some(path) = config_file {
        log::debug!("Loading config from {}", path.display());
        config = config.merge(PartialConfig::load(path)?);
    }

    Ok(config.merge(overrides))
}
