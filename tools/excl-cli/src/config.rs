//! Configuration management (<config dir>/excl/config.toml)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub save: SaveConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportConfig {
    /// Line separator for exported text files
    #[serde(default)]
    pub line_ending: LineEnding,
    /// Extension used when no export path is given
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveConfig {
    /// Copy the target to `<file>.bak` before overwriting it
    #[serde(default)]
    pub backup: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            extension: default_extension(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "excl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the config from an explicit path, or from the default location
///
/// An explicit path must exist. The default file is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    match config_dir().map(|dir| dir.join("config.toml")) {
        Some(path) if path.is_file() => load_file(&path),
        _ => Ok(Config::default()),
    }
}

fn load_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = parse(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
