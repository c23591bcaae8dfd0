//! Configuration management for tagdown.
//!
//! Parses `tagdown.toml` files with serde and provides auto-discovery of the
//! config file in parent directories.
//!
//! ```toml
//! [colors]
//! brand = "#ff0000"
//! sunset = "linear-gradient(90deg, orange, red)"
//!
//! [fonts]
//! monospace = "\"Fira Code\", monospace"
//! ```
//!
//! Only TOML syntax errors and I/O failures are fatal. Entries with the wrong
//! shape are skipped with a warning and the affected setting keeps its
//! default.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tagdown_renderer::{DEFAULT_MONOSPACE_FONT, RendererConfig};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "tagdown.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the monospace font family.
    pub monospace_font: Option<String>,
    /// Extra color entries; replace file entries with the same name.
    pub colors: Vec<(String, String)>,
}

/// Configuration file as parsed from TOML, before shape checks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    colors: Option<toml::Value>,
    fonts: Option<toml::Value>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Color name to CSS value table.
    pub colors: HashMap<String, String>,
    /// Font family for `[mono]` blocks.
    pub monospace_font: String,
    /// Path to the config file (set after loading from a file).
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: HashMap::new(),
            monospace_font: DEFAULT_MONOSPACE_FONT.to_owned(),
            config_path: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tagdown.toml` in the current directory and
    /// parents, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, the file cannot
    /// be read, or it is not valid TOML.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            colors: raw.colors.as_ref().map(parse_colors).unwrap_or_default(),
            monospace_font: raw
                .fonts
                .as_ref()
                .and_then(parse_monospace_font)
                .unwrap_or_else(|| DEFAULT_MONOSPACE_FONT.to_owned()),
            config_path: None,
        })
    }

    /// Settings for constructing a renderer.
    #[must_use]
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            colors: self.colors.clone(),
            monospace_font: self.monospace_font.clone(),
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(font) = &settings.monospace_font {
            self.monospace_font.clone_from(font);
        }
        for (name, value) in &settings.colors {
            self.colors.insert(name.clone(), value.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            colors = config.colors.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Extract string entries from the `[colors]` table.
fn parse_colors(value: &toml::Value) -> HashMap<String, String> {
    let Some(table) = value.as_table() else {
        tracing::warn!("Ignoring `colors`: expected a table");
        return HashMap::new();
    };

    table
        .iter()
        .filter_map(|(name, value)| match value.as_str() {
            Some(css) => Some((name.clone(), css.to_owned())),
            None => {
                tracing::warn!(color = %name, "Ignoring color: value must be a string");
                None
            }
        })
        .collect()
}

/// Extract `fonts.monospace`.
fn parse_monospace_font(value: &toml::Value) -> Option<String> {
    let Some(table) = value.as_table() else {
        tracing::warn!("Ignoring `fonts`: expected a table");
        return None;
    };

    let font = table.get("monospace")?;
    match font.as_str() {
        Some(font) => Some(font.to_owned()),
        None => {
            tracing::warn!("Ignoring `fonts.monospace`: value must be a string");
            None
        }
    }
}
