//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::style::{DEFAULT_SPACING_UNIT, ThemeTokens};

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GATEHOUSE_SPACING_UNIT must be a non-negative integer, got {0:?}")]
    InvalidSpacingUnit(String),

    #[error("GATEHOUSE_THEME_BACKGROUND must not be empty")]
    EmptyBackground,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Overrides the light palette background
    /// Example: #ffffff
    pub theme_background: Option<String>,

    /// Overrides the base spacing unit, in pixels
    pub spacing_unit: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            theme_background: std::env::var("GATEHOUSE_THEME_BACKGROUND").ok(),
            spacing_unit: std::env::var("GATEHOUSE_SPACING_UNIT").ok(),
        }
    }

    /// Check if any theme override is set
    pub fn has_theme_overrides(&self) -> bool {
        self.theme_background.is_some() || self.spacing_unit.is_some()
    }

    /// Build theme tokens, applying overrides on top of the defaults
    pub fn theme_tokens(&self) -> Result<ThemeTokens, ConfigError> {
        let defaults = ThemeTokens::default();

        let background = match self.theme_background.as_deref().map(str::trim) {
            Some("") => return Err(ConfigError::EmptyBackground),
            Some(value) => value.to_string(),
            None => defaults.palette.background.default,
        };

        let unit = match self.spacing_unit.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidSpacingUnit(raw.to_string()))?,
            None => DEFAULT_SPACING_UNIT,
        };

        Ok(ThemeTokens::new(background, unit))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
