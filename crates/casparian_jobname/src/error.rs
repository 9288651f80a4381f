//! Job naming error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NamingError>;

/// Errors raised at the configuration boundary.
///
/// Naming itself never fails; only a structurally invalid [`NamingConfig`]
/// (or configuration text that does not parse) is rejected.
///
/// [`NamingConfig`]: crate::NamingConfig
#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Invalid naming config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
