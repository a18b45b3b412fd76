//! Serializable patch settings with environment overrides.
//!
//! Precedence (lowest to highest):
//! 1. Default values
//! 2. Settings file (TOML or JSON, chosen by extension)
//! 3. Environment variables

use crate::{
    DEFAULT_MAX_DEPTH,
    config::{PatchConfig, PatchMode},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

pub const ENV_MAX_DEPTH: &str = "PATCHWORK_MAX_DEPTH";
pub const ENV_MODE: &str = "PATCHWORK_MODE";
pub const ENV_IGNORE_PROPERTIES: &str = "PATCHWORK_IGNORE_PROPERTIES";

///
/// SettingsError
///

#[derive(Debug, ThisError)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value '{value}' for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

///
/// PatchSettings
///
/// The file-backed subset of `PatchConfig`. Type policies are code-only.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PatchSettings {
    /// Extra property names to skip; `Id` and `Number` are always skipped.
    pub ignore_properties: Vec<String>,

    pub max_depth: usize,

    pub mode: PatchMode,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            ignore_properties: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            mode: PatchMode::default(),
        }
    }
}

impl PatchSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a settings file; `.json` files parse as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_toml_str(&raw)
        }
    }

    /// Apply `PATCHWORK_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, SettingsError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup`. Blank values are ignored.
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let read = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = read(ENV_MAX_DEPTH) {
            self.max_depth = value
                .parse()
                .map_err(|_| SettingsError::InvalidEnv {
                    var: ENV_MAX_DEPTH,
                    value,
                })?;
        }

        if let Some(value) = read(ENV_MODE) {
            self.mode = parse_mode(&value).ok_or(SettingsError::InvalidEnv {
                var: ENV_MODE,
                value,
            })?;
        }

        if let Some(value) = read(ENV_IGNORE_PROPERTIES) {
            self.ignore_properties.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            );
        }

        Ok(self)
    }
}

impl From<PatchSettings> for PatchConfig {
    fn from(settings: PatchSettings) -> Self {
        Self::new()
            .ignore_properties(settings.ignore_properties)
            .with_max_depth(settings.max_depth)
            .with_mode(settings.mode)
    }
}

fn parse_mode(value: &str) -> Option<PatchMode> {
    match value.to_ascii_lowercase().replace('-', "_").as_str() {
        "in_place" => Some(PatchMode::InPlace),
        "atomic" => Some(PatchMode::Atomic),
        _ => None,
    }
}

///
/// TESTS
///
