//! Error types for the logic crate.

use thiserror::Error;

use crate::talent::TalentType;

/// A record failed constructor validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a finite non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("level must be at least 1")]
    ZeroLevel,
    #[error("{role} contract must carry only the {role} skill")]
    RoleSkillMismatch { role: &'static str },
}

/// A store action was rejected. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("no studio has been initialized")]
    NoStudio,
    #[error("studio {0} is already initialized")]
    AlreadyInitialized(String),
    #[error("studio name must not be blank")]
    InvalidName,
    #[error("film {0} is already in production")]
    DuplicateFilm(String),
    #[error("talent {0} is already on the roster")]
    DuplicateTalent(String),
    #[error("film {0} is not on the studio slate")]
    UnknownFilm(String),
    #[error("talent {0} is not on the studio roster")]
    UnknownTalent(String),
    #[error("talent {id} cannot be credited as {expected:?}")]
    WrongRole { id: String, expected: TalentType },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Session configuration could not be loaded or is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Empty { field });
    }
    Ok(())
}

pub(crate) fn require_money(field: &'static str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::Negative { field, value });
    }
    Ok(())
}

pub(crate) fn require_unit(field: &'static str, value: f32) -> Result<(), ModelError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ModelError::OutOfRange { field, value });
    }
    Ok(())
}
