//! Declarative settings bundles loaded from YAML.
//!
//! A bundle is the data form of a group of registrations: panels, sections,
//! settings and per-setting choice sanitizers. Bundles merge into a
//! [`RegistryBuilder`] with the same idempotent-by-key semantics as
//! programmatic registration, so a YAML file and the equivalent builder
//! calls produce identical registries.
//!
//! # Example
//!
//! ```rust
//! use veneer_settings::{RegistryBuilder, SettingsBundle};
//!
//! let bundle = SettingsBundle::from_yaml(r##"
//! sections:
//!   - key: shop_styles
//!     title: Shop Styles
//!     priority: 100
//! settings:
//!   - key: cart_color
//!     kind: color
//!     default: "#444444"
//!     sanitizer: color
//!     section: shop_styles
//! "##).unwrap();
//!
//! let registry = RegistryBuilder::new().bundle(bundle).build().unwrap();
//! assert!(registry.setting("cart_color").is_some());
//! ```
//!
//! Note: `sanitizer` may be omitted per setting; it defaults from `kind`
//! exactly like [`SettingDef::new`](crate::SettingDef::new).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::registry::{Panel, RegistryBuilder, Section, SettingDef};
use crate::sanitize::Sanitizer;
use crate::value::{ControlHint, ValueKind};

/// A choice sanitizer declared in data: ordered `[key, label]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSanitizerDef {
    pub name: String,
    pub choices: Vec<(String, String)>,
}

/// Raw setting entry as it appears in a bundle file.
///
/// Mirrors [`SettingDef`] but lets `sanitizer` and `control` default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BundleSetting {
    key: String,
    kind: ValueKind,
    default: String,
    #[serde(default)]
    sanitizer: Option<String>,
    section: String,
    #[serde(default)]
    control: Option<ControlHint>,
}

/// The data form of a group of registrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsBundle {
    #[serde(default)]
    sanitizers: Vec<ChoiceSanitizerDef>,
    #[serde(default)]
    panels: Vec<Panel>,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    settings: Vec<BundleSetting>,
}

impl SettingsBundle {
    /// Parses a bundle from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::BundleLoad {
            message: e.to_string(),
        })
    }

    /// Loads a bundle from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BundleLoad {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content)
    }
}

impl RegistryBuilder {
    /// Merges a bundle's registrations into this builder.
    pub fn bundle(mut self, bundle: SettingsBundle) -> Self {
        for s in bundle.sanitizers {
            self = self.sanitizer(
                s.name,
                Sanitizer::Choice { valid: s.choices },
            );
        }
        for panel in bundle.panels {
            self = self.panel(panel);
        }
        for section in bundle.sections {
            self = self.section(section);
        }
        for s in bundle.settings {
            let mut def = SettingDef::new(s.key, s.kind, s.default, s.section);
            if let Some(name) = s.sanitizer {
                def = def.sanitizer(name);
            }
            if let Some(control) = s.control {
                def = def.control(control);
            }
            self = self.setting(def);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ValueStore;

    const SAMPLE: &str = r##"
sanitizers:
  - name: title_weight
    choices:
      - ["400", "Normal"]
      - ["700", "Bold"]
panels:
  - key: text_blocks
    title: Text Blocks
    priority: 69
sections:
  - key: shop_styles
    title: Shop Styles
    priority: 100
  - key: blocks
    title: Blocks
    priority: 19
    panel: text_blocks
settings:
  - key: cart_color
    kind: color
    default: "#444444"
    section: shop_styles
  - key: title_weight
    kind: choice
    default: "400"
    sanitizer: title_weight
    section: shop_styles
    control:
      type: select
  - key: heading_size
    kind: dimension
    default: "26"
    section: shop_styles
    control:
      type: number-input
      min: 0
      max: 10000
      step: 1
"##;

    #[test]
    fn test_bundle_builds_registry() {
        let bundle = SettingsBundle::from_yaml(SAMPLE).unwrap();
        let registry = RegistryBuilder::new().bundle(bundle).build().unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.panels().len(), 1);
        assert_eq!(registry.sections().len(), 2);
    }

    #[test]
    fn test_bundle_matches_builder_equivalent() {
        let from_yaml = RegistryBuilder::new()
            .bundle(SettingsBundle::from_yaml(SAMPLE).unwrap())
            .build()
            .unwrap();

        let store = ValueStore::new();
        assert_eq!(
            from_yaml.resolve(&store, "cart_color").as_deref(),
            Some("#444444")
        );
        assert_eq!(
            from_yaml.resolve(&store, "title_weight").as_deref(),
            Some("400")
        );
        // Declared choice sanitizer is in force.
        let sanitizer = from_yaml.sanitizer_for("title_weight").unwrap();
        assert_eq!(sanitizer.sanitize("700"), "700");
        assert_eq!(sanitizer.sanitize("450"), "");
    }

    #[test]
    fn test_bundle_sanitizer_defaults_from_kind() {
        let bundle = SettingsBundle::from_yaml(SAMPLE).unwrap();
        let registry = RegistryBuilder::new().bundle(bundle).build().unwrap();
        assert_eq!(registry.setting("cart_color").unwrap().sanitizer, "color");
        assert_eq!(registry.setting("heading_size").unwrap().sanitizer, "number");
    }

    #[test]
    fn test_bundle_invalid_yaml() {
        let err = SettingsBundle::from_yaml("settings: [").unwrap_err();
        assert!(matches!(err, ConfigError::BundleLoad { .. }));
    }

    #[test]
    fn test_bundle_from_file() {
        use std::io::Write;
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bundle.yaml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();

        let bundle = SettingsBundle::from_file(&path).unwrap();
        assert!(RegistryBuilder::new().bundle(bundle).build().is_ok());
    }

    #[test]
    fn test_bundle_from_file_missing() {
        let err = SettingsBundle::from_file("/nonexistent/bundle.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::BundleLoad { .. }));
    }
}
