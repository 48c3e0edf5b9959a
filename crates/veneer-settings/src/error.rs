//! Configuration errors detected while building a registry.
//!
//! These are contradictions in static configuration — an unknown section, a
//! default its own sanitizer rejects — and are fatal at build time. Nothing
//! in this module is produced during a render pass.

use thiserror::Error;

/// A contradiction in the registered configuration.
///
/// Returned by `RegistryBuilder::build`; a theme that fails to build must not
/// activate, since every variant here means some setting can never behave as
/// declared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A setting references a section that was never registered.
    #[error("setting '{setting}' references unknown section '{section}'")]
    UnknownSection { setting: String, section: String },

    /// A section references a panel that was never registered.
    #[error("section '{section}' references unknown panel '{panel}'")]
    UnknownPanel { section: String, panel: String },

    /// A setting names a sanitizer missing from the sanitizer registry.
    #[error("setting '{setting}' references unknown sanitizer '{sanitizer}'")]
    UnknownSanitizer { setting: String, sanitizer: String },

    /// A setting's default does not survive its own sanitizer.
    #[error(
        "default '{default}' of setting '{setting}' is rejected by sanitizer \
         '{sanitizer}' (sanitizes to '{sanitized}')"
    )]
    DefaultRejected {
        setting: String,
        sanitizer: String,
        default: String,
        sanitized: String,
    },

    /// A settings bundle file could not be read or parsed.
    #[error("failed to load settings bundle: {message}")]
    BundleLoad { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_setting() {
        let err = ConfigError::DefaultRejected {
            setting: "cart_color".into(),
            sanitizer: "color".into(),
            default: "oops".into(),
            sanitized: "".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cart_color"));
        assert!(msg.contains("oops"));
    }

    #[test]
    fn test_display_unknown_section() {
        let err = ConfigError::UnknownSection {
            setting: "x".into(),
            section: "missing".into(),
        };
        assert!(err.to_string().contains("missing"));
    }
}
