//! Rejection reasons for edited values
//!
//! Every variant is recovered the same way: the apply that produced it is
//! dropped and the last good configuration stays in place.

use thiserror::Error;

use crate::config::keys::SettingKey;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("unknown setting key '{0}'")]
    UnknownKey(String),

    #[error("{key}: '{value}' is not a valid {expected}")]
    Malformed {
        key: SettingKey,
        value: String,
        expected: &'static str,
    },

    #[error("{key}: {value} is outside {min}..={max}")]
    OutOfRange {
        key: SettingKey,
        value: String,
        min: String,
        max: String,
    },

    #[error("{key}: value must not be empty")]
    EmptyValue { key: SettingKey },
}

impl ApplyError {
    /// Short machine-friendly tag for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ApplyError::UnknownKey(_) => "unknown_key",
            ApplyError::Malformed { .. } => "malformed",
            ApplyError::OutOfRange { .. } => "out_of_range",
            ApplyError::EmptyValue { .. } => "empty",
        }
    }
}
