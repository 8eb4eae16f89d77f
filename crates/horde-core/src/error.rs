//! Configuration errors.

use glam::Vec3;
use thiserror::Error;

/// A tuning value or profile that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("sector count {count} is below the minimum of {min}")]
    TooFewSectors { count: usize, min: usize },

    #[error("{field} of {count} exceeds the maximum of {max}")]
    TooMany {
        field: &'static str,
        count: usize,
        max: usize,
    },

    #[error("radial and tangential weights are both zero")]
    ZeroOrbitWeights,

    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) fn require_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if require_finite(field, value)? <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if require_finite(field, value)? < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

pub(crate) fn require_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&require_finite(field, value)?) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

/// Reject positions with a NaN or infinite component.
pub fn require_finite_position(field: &'static str, position: Vec3) -> Result<Vec3, ConfigError> {
    if position.is_finite() {
        Ok(position)
    } else {
        Err(ConfigError::NotFinite { field })
    }
}
