//! Session configuration.
//!
//! Defaults match the shipped game: the studio is called
//! "Universal Dreams Studio", starts with 1,000,000 coins and 100 producer
//! credits, and the welcome banner stays up for five seconds.
//!
//! ```
//! use studio_logic::config::StudioConfig;
//!
//! let config = StudioConfig::from_json(r#"{ "studio_name": "Lumen Pictures" }"#).unwrap();
//! assert_eq!(config.studio_name, "Lumen Pictures");
//! assert_eq!(config.banner_seconds, 5.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::economy::Currency;
use crate::error::ConfigError;

pub const DEFAULT_STUDIO_NAME: &str = "Universal Dreams Studio";
pub const DEFAULT_BANNER_SECONDS: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub studio_name: String,
    pub starting_currency: Currency,
    /// How long the welcome banner stays visible after a successful start.
    pub banner_seconds: f32,
    /// Seed for talent and pitch generation (None = random).
    pub seed: Option<u64>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            studio_name: DEFAULT_STUDIO_NAME.to_string(),
            starting_currency: Currency::default(),
            banner_seconds: DEFAULT_BANNER_SECONDS,
            seed: None,
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.studio_name.trim().is_empty() {
            return Err(ConfigError::Invalid("studio_name must not be blank".into()));
        }
        if !self.banner_seconds.is_finite() || self.banner_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "banner_seconds must be positive, got {}",
                self.banner_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StudioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_currency, Currency::new(1_000_000, 100));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = StudioConfig::from_json(
            r#"{ "starting_currency": { "studio_coins": 5, "producer_credits": 1 }, "seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(config.studio_name, DEFAULT_STUDIO_NAME);
        assert_eq!(config.starting_currency, Currency::new(5, 1));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn partial_currency_fills_starting_amounts() {
        let config =
            StudioConfig::from_json(r#"{ "starting_currency": { "studio_coins": 5 } }"#).unwrap();
        assert_eq!(config.starting_currency, Currency::new(5, 100));
    }

    #[test]
    fn blank_name_invalid() {
        let err = StudioConfig::from_json(r#"{ "studio_name": " " }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_banner_invalid() {
        let err = StudioConfig::from_json(r#"{ "banner_seconds": 0.0 }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            StudioConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            StudioConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
