//! Theme error types

use thiserror::Error;

use crate::store::ThemeId;
use crate::tokens::{AttributeKey, ThemeKind};

/// Errors from theme models, stores and the codec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// Value has the wrong type or is out of range for the attribute
    #[error("invalid value for `{key}`: {reason}")]
    Validation { key: AttributeKey, reason: String },

    /// Attribute is outside the theme's capability set
    #[error("attribute `{key}` is not supported by {kind} themes")]
    UnsupportedAttribute { key: AttributeKey, kind: ThemeKind },

    /// Linking the fallback would close a cycle
    #[error("fallback chain of theme {theme:?} would form a cycle")]
    InvalidChain { theme: ThemeId },

    /// No theme with this id in the store
    #[error("unknown theme {0:?}")]
    UnknownTheme(ThemeId),

    /// Encoded theme is newer than this decoder
    #[error("theme version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Malformed encoded theme
    #[error("failed to decode `{field}`: {reason}")]
    Decode { field: String, reason: String },

    /// Palette configuration could not be read, written or validated
    #[error("palette config error: {0}")]
    Config(String),
}

impl ThemeError {
    pub(crate) fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
