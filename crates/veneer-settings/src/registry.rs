//! The settings registry: panels, sections and setting definitions.
//!
//! A [`RegistryBuilder`] accumulates definitions through chained registration
//! calls, then [`build`](RegistryBuilder::build) validates the whole
//! configuration at once and produces an immutable [`Registry`]. The registry
//! is an explicit object handed by reference into the emission engine and the
//! host's UI layer — there is no ambient registration state.
//!
//! Registration is idempotent by key: registering a key twice overwrites the
//! earlier definition in place (last write wins), which lets later setup code
//! refine earlier defaults without restructuring. Panels and sections order
//! by `priority` ascending with registration order breaking ties.
//!
//! # Example
//!
//! ```rust
//! use veneer_settings::{ControlHint, RegistryBuilder, Section, SettingDef, ValueKind};
//!
//! let registry = RegistryBuilder::new()
//!     .section(Section::new("shop_styles", "Shop Styles", 100))
//!     .setting(
//!         SettingDef::new("cart_color", ValueKind::Color, "#444444", "shop_styles")
//!             .control(ControlHint::ColorPicker),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.setting("cart_color").unwrap().default, "#444444");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::sanitize::{names, Sanitizer, SanitizerRegistry};
use crate::store::ValueStore;
use crate::value::{ControlHint, Toggle, ValueKind};

/// A top-level grouping of sections in the settings UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub key: String,
    pub title: String,
    pub priority: i32,
}

impl Panel {
    pub fn new(key: impl Into<String>, title: impl Into<String>, priority: i32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            priority,
        }
    }
}

/// A grouping of settings, optionally nested under a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub priority: i32,
    #[serde(default)]
    pub panel: Option<String>,
}

impl Section {
    pub fn new(key: impl Into<String>, title: impl Into<String>, priority: i32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            priority,
            panel: None,
        }
    }

    /// Nests this section under `panel`, returning `self` for chaining.
    pub fn in_panel(mut self, panel: impl Into<String>) -> Self {
        self.panel = Some(panel.into());
        self
    }
}

/// One configurable option: key, kind, default, sanitizer, owning section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDef {
    pub key: String,
    pub kind: ValueKind,
    pub default: String,
    /// Name of a [`SanitizerRegistry`] entry; must accept `default`.
    pub sanitizer: String,
    pub section: String,
    #[serde(default)]
    pub control: ControlHint,
}

impl SettingDef {
    /// Creates a definition with the sanitizer inferred from `kind`.
    ///
    /// The inferred names are the built-ins of [`SanitizerRegistry::builtin`];
    /// use [`sanitizer`](Self::sanitizer) to override (choice settings must,
    /// since their valid set is per-setting).
    pub fn new(
        key: impl Into<String>,
        kind: ValueKind,
        default: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        let sanitizer = match kind {
            ValueKind::Color => names::COLOR,
            ValueKind::Dimension => names::NUMBER,
            ValueKind::Toggle => names::CHECKBOX,
            ValueKind::Markup => names::TEXT,
            ValueKind::Text | ValueKind::Choice | ValueKind::ImageRef | ValueKind::Url => {
                names::ATTRIBUTE
            }
        };
        let control = match kind {
            ValueKind::Color => ControlHint::ColorPicker,
            ValueKind::Dimension => ControlHint::pixels(),
            ValueKind::Toggle => ControlHint::Checkbox,
            ValueKind::Choice => ControlHint::Select,
            ValueKind::ImageRef => ControlHint::ImagePicker,
            ValueKind::Url => ControlHint::UrlInput,
            ValueKind::Text | ValueKind::Markup => ControlHint::TextInput,
        };
        Self {
            key: key.into(),
            kind,
            default: default.into(),
            sanitizer: sanitizer.to_string(),
            section: section.into(),
            control,
        }
    }

    /// Overrides the sanitizer name, returning `self` for chaining.
    pub fn sanitizer(mut self, name: impl Into<String>) -> Self {
        self.sanitizer = name.into();
        self
    }

    /// Overrides the control hint, returning `self` for chaining.
    pub fn control(mut self, control: ControlHint) -> Self {
        self.control = control;
        self
    }
}

/// Builder accumulating panels, sections, settings and sanitizers.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    sanitizers: SanitizerRegistry,
    panels: Vec<Panel>,
    sections: Vec<Section>,
    settings: Vec<SettingDef>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Creates a builder with the built-in sanitizers pre-registered.
    pub fn new() -> Self {
        Self {
            sanitizers: SanitizerRegistry::builtin(),
            panels: Vec::new(),
            sections: Vec::new(),
            settings: Vec::new(),
        }
    }

    /// Registers a named sanitizer (last write wins).
    pub fn sanitizer(mut self, name: impl Into<String>, sanitizer: Sanitizer) -> Self {
        self.sanitizers = self.sanitizers.register(name, sanitizer);
        self
    }

    /// Registers a panel (idempotent by key, last write wins).
    pub fn panel(mut self, panel: Panel) -> Self {
        if let Some(existing) = self.panels.iter_mut().find(|p| p.key == panel.key) {
            *existing = panel;
        } else {
            self.panels.push(panel);
        }
        self
    }

    /// Registers a section (idempotent by key, last write wins).
    pub fn section(mut self, section: Section) -> Self {
        if let Some(existing) = self.sections.iter_mut().find(|s| s.key == section.key) {
            *existing = section;
        } else {
            self.sections.push(section);
        }
        self
    }

    /// Registers a setting (idempotent by key, last write wins).
    pub fn setting(mut self, setting: SettingDef) -> Self {
        if let Some(existing) = self.settings.iter_mut().find(|s| s.key == setting.key) {
            *existing = setting;
        } else {
            self.settings.push(setting);
        }
        self
    }

    /// Validates the accumulated configuration and produces a [`Registry`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: a section naming an unknown
    /// panel, a setting naming an unknown section or sanitizer, or a default
    /// its own sanitizer rewrites. These stop theme activation outright.
    pub fn build(self) -> Result<Registry, ConfigError> {
        for section in &self.sections {
            if let Some(panel) = &section.panel {
                if !self.panels.iter().any(|p| &p.key == panel) {
                    return Err(ConfigError::UnknownPanel {
                        section: section.key.clone(),
                        panel: panel.clone(),
                    });
                }
            }
        }
        for setting in &self.settings {
            if !self.sections.iter().any(|s| s.key == setting.section) {
                return Err(ConfigError::UnknownSection {
                    setting: setting.key.clone(),
                    section: setting.section.clone(),
                });
            }
            let sanitizer = self.sanitizers.get(&setting.sanitizer).ok_or_else(|| {
                ConfigError::UnknownSanitizer {
                    setting: setting.key.clone(),
                    sanitizer: setting.sanitizer.clone(),
                }
            })?;
            let sanitized = sanitizer.sanitize(&setting.default);
            if sanitized != setting.default {
                return Err(ConfigError::DefaultRejected {
                    setting: setting.key.clone(),
                    sanitizer: setting.sanitizer.clone(),
                    default: setting.default.clone(),
                    sanitized,
                });
            }
        }

        let mut panels = self.panels;
        panels.sort_by_key(|p| p.priority);
        let mut sections = self.sections;
        sections.sort_by_key(|s| s.priority);
        let index = self
            .settings
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.clone(), i))
            .collect();

        Ok(Registry {
            sanitizers: self.sanitizers,
            panels,
            sections,
            settings: self.settings,
            index,
        })
    }
}

/// The validated, immutable settings registry.
///
/// Built once at startup; the emission engine and settings UI borrow it for
/// the lifetime of the process. All lookups are by setting key.
#[derive(Debug, Clone)]
pub struct Registry {
    sanitizers: SanitizerRegistry,
    panels: Vec<Panel>,
    sections: Vec<Section>,
    settings: Vec<SettingDef>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    /// Looks up a setting definition by key.
    pub fn setting(&self, key: &str) -> Option<&SettingDef> {
        self.index.get(key).map(|&i| &self.settings[i])
    }

    /// All settings in registration order.
    pub fn settings(&self) -> impl Iterator<Item = &SettingDef> {
        self.settings.iter()
    }

    /// Panels sorted by priority (stable on ties).
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Sections sorted by priority (stable on ties).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections belonging to `panel`, in display order.
    pub fn sections_in<'a>(&'a self, panel: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.panel.as_deref() == Some(panel))
    }

    /// Settings belonging to `section`, in registration order.
    pub fn settings_in<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a SettingDef> + 'a {
        self.settings.iter().filter(move |s| s.section == section)
    }

    /// The sanitizer for a setting key, if both exist.
    pub fn sanitizer_for(&self, key: &str) -> Option<&Sanitizer> {
        self.setting(key)
            .and_then(|def| self.sanitizers.get(&def.sanitizer))
    }

    /// Direct access to the sanitizer registry.
    pub fn sanitizers(&self) -> &SanitizerRegistry {
        &self.sanitizers
    }

    /// Resolves the effective value of `key` against `store`.
    ///
    /// Returns the stored value when one exists and still survives the
    /// setting's current sanitizer unchanged; otherwise the definition's
    /// default. `None` only for unknown keys.
    pub fn resolve(&self, store: &ValueStore, key: &str) -> Option<String> {
        let def = self.setting(key)?;
        if let Some(stored) = store.get(key) {
            let sanitizer = self
                .sanitizers
                .get(&def.sanitizer)
                .expect("registry built with validated sanitizer names");
            if sanitizer.sanitize(stored) == stored {
                return Some(stored.to_string());
            }
            tracing::debug!(
                setting = key,
                "stored value no longer valid, falling back to default"
            );
        }
        Some(def.default.clone())
    }

    /// Resolves a toggle setting into its tri-state form.
    pub fn resolve_toggle(&self, store: &ValueStore, key: &str) -> Option<Toggle> {
        self.resolve(store, key).map(|v| Toggle::parse(&v))
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Number of registered settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }
}
