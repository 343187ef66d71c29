use chartkit_color::ParseColorError;
use thiserror::Error;

use crate::role::ColorRole;

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors from theme registration, activation, and color resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme: {name}")]
    UnknownTheme { name: String },

    #[error("unknown color role: {name}")]
    UnknownRole { name: String },

    #[error("theme table is missing role: {role}")]
    MissingRole { role: ColorRole },

    #[error("theme table sets role more than once: {role}")]
    DuplicateRole { role: ColorRole },

    #[error("invalid color for {name}: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ParseColorError,
    },
}

impl ThemeError {
    #[must_use]
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme { name: name.into() }
    }

    #[must_use]
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole { name: name.into() }
    }

    #[must_use]
    pub fn invalid_color(name: impl Into<String>, source: ParseColorError) -> Self {
        Self::InvalidColor {
            name: name.into(),
            source,
        }
    }
}
