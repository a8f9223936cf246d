use std::fmt;

use thiserror::Error;

/// Shortest accepted device model, in characters after normalization.
pub const MIN_MODEL_LEN: usize = 5;
/// Longest accepted device model, in characters after normalization.
pub const MAX_MODEL_LEN: usize = 20;

/// A trimmed, upper-cased device model that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceModel(String);

impl DeviceModel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a device model")]
    EmptyInput,
    #[error("Device model should be between 5-20 characters")]
    LengthOutOfRange { len: usize },
}

/// Normalizes raw input (trim + upper-case) and checks the length bound.
///
/// Length is counted in characters of the normalized string, so an
/// upper-casing that expands a character (`ß` -> `SS`) counts the expansion.
pub fn validate(raw: &str) -> Result<DeviceModel, ValidationError> {
    let normalized = raw.trim().to_uppercase();
    let len = normalized.chars().count();
    if len == 0 {
        return Err(ValidationError::EmptyInput);
    }
    if !(MIN_MODEL_LEN..=MAX_MODEL_LEN).contains(&len) {
        return Err(ValidationError::LengthOutOfRange { len });
    }
    Ok(DeviceModel(normalized))
}
