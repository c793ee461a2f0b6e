//! # User Settings
//!
//! Defaults for the front end, read from a TOML file. Every key is optional;
//! missing keys fall back to the built-in defaults.
//!
//! ```toml
//! price_per_kg = 1.5
//! min_tonnage = 1.0
//! default_flute = "B"
//! articles_path = "data/articles.json"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use board_core::settings::Settings;
//!
//! let settings = Settings::from_toml("price_per_kg = 1.25").unwrap();
//! assert_eq!(settings.price_per_kg, 1.25);
//! assert_eq!(settings.min_tonnage, 1.0);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::moq::DEFAULT_MIN_TONNAGE;
use crate::errors::{CalcError, CalcResult};
use crate::flute::FluteCode;

/// File name looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "board.toml";

/// Front-end defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Paper price in USD per kilogram (0 until the user sets one)
    pub price_per_kg: f64,

    /// Target production weight for MOQ, in tonnes
    pub min_tonnage: f64,

    /// Flute used when a command doesn't name one
    pub default_flute: FluteCode,

    /// JSON article catalog replacing the built-in sample data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            price_per_kg: 0.0,
            min_tonnage: DEFAULT_MIN_TONNAGE,
            default_flute: FluteCode::default(),
            articles_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> CalcResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Render as TOML text
    pub fn to_toml(&self) -> CalcResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read settings from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml(&text)
    }

    /// Read settings, or use the defaults when the file doesn't exist.
    ///
    /// Any other failure (unreadable file, bad TOML) is still an error.
    pub fn load_or_default(path: &Path) -> CalcResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded settings");
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(CalcError::file_error("read", path.display().to_string(), e.to_string())),
        }
    }
}
