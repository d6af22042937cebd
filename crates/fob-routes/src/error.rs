//! Error types for loading routing plugin options.
//!
//! Normalization itself never fails; only reading options from disk or the
//! environment can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoutesError>;

#[derive(Debug, Error)]
pub enum RoutesError {
    #[error("invalid option value for `{field}`: {hint}")]
    InvalidValue { field: String, hint: String },
}

impl RoutesError {
    pub(crate) fn invalid(field: impl Into<String>, hint: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: hint.to_string(),
        }
    }
}
