//! Error types for fragment emission.
//!
//! This module provides [`EmitError`], the error type for building and
//! running the emission engine. It abstracts over the underlying template
//! engine's errors, providing a stable public API.
//!
//! Build-time variants (unknown setting, variant/choice mismatch, template
//! compilation) indicate configuration contradictions and are fatal before
//! the first render. At render time the engine only surfaces genuine
//! programming errors — a value that merely fails validation deactivates its
//! rule instead.

use std::fmt;

/// Error type for emitter construction and rendering.
#[derive(Debug)]
pub enum EmitError {
    /// Template syntax error or substitution failure.
    TemplateError(String),

    /// A compiled template disappeared from the engine (programming error).
    TemplateNotFound(String),

    /// Value serialization failure while preparing template data.
    SerializationError(String),

    /// An emit rule references a setting absent from the registry.
    UnknownSetting { setting: String },

    /// A variant rule names a value outside its setting's choice set.
    VariantNotInChoices { setting: String, variant: String },

    /// A rule's activation predicate does not fit its body shape.
    MismatchedActivation { setting: String, detail: String },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::TemplateError(msg) => write!(f, "template error: {}", msg),
            EmitError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            EmitError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            EmitError::UnknownSetting { setting } => {
                write!(f, "emit rule references unknown setting '{}'", setting)
            }
            EmitError::VariantNotInChoices { setting, variant } => write!(
                f,
                "variant '{}' of rule for '{}' is not a key of its choice set",
                variant, setting
            ),
            EmitError::MismatchedActivation { setting, detail } => {
                write!(f, "rule for '{}' is inconsistent: {}", setting, detail)
            }
        }
    }
}

impl std::error::Error for EmitError {}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::SerializationError(err.to_string())
    }
}

// Conversion from minijinja::Error keeps the template backend internal.
impl From<minijinja::Error> for EmitError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => EmitError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => EmitError::SerializationError(err.to_string()),
            _ => EmitError::TemplateError(err.to_string()),
        }
    }
}
