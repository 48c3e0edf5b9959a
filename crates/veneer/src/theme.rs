//! Theme assembly: registry + emit rules + preview bindings as one unit.
//!
//! A [`ThemeBuilder`] collects everything the catalog (or host code)
//! registers, then [`build`](ThemeBuilder::build) validates the whole
//! configuration — registry contradictions and rule contradictions alike —
//! before the theme can serve its first render. A failed build must stop
//! theme activation; a built [`Theme`] cannot fail on operator data.

use thiserror::Error;

use veneer_emit::{EmitError, EmitRule, Emitter, EmitterBuilder, PreviewBinder, RenderOutput};
use veneer_settings::{
    ConfigError, Panel, Registry, RegistryBuilder, Sanitizer, Section, SettingDef, SettingsBundle,
    SettingsUpdate, ValueStore,
};

/// A configuration contradiction found while building a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Accumulates registry entries, emit rules and preview bindings.
///
/// # Example
///
/// ```rust
/// use veneer::{EmitRule, FragmentGroup, Section, SettingDef, ThemeBuilder, ValueKind};
///
/// let theme = ThemeBuilder::new()
///     .section(Section::new("shop_styles", "Shop Styles", 100))
///     .setting(SettingDef::new("cart_color", ValueKind::Color, "#444444", "shop_styles"))
///     .rule(EmitRule::when_changed(
///         "cart_color",
///         FragmentGroup::Shop,
///         ".cart-contents:before { color: {{ value }}; }",
///     ))
///     .build()
///     .unwrap();
///
/// assert_eq!(theme.registry().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    registry: RegistryBuilder,
    rules: Vec<EmitRule>,
    bindings: Vec<(String, String)>,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self {
            registry: RegistryBuilder::new(),
            rules: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Registers a named sanitizer.
    pub fn sanitizer(mut self, name: impl Into<String>, sanitizer: Sanitizer) -> Self {
        self.registry = self.registry.sanitizer(name, sanitizer);
        self
    }

    /// Registers a panel.
    pub fn panel(mut self, panel: Panel) -> Self {
        self.registry = self.registry.panel(panel);
        self
    }

    /// Registers a section.
    pub fn section(mut self, section: Section) -> Self {
        self.registry = self.registry.section(section);
        self
    }

    /// Registers a setting.
    pub fn setting(mut self, setting: SettingDef) -> Self {
        self.registry = self.registry.setting(setting);
        self
    }

    /// Merges a declarative settings bundle.
    pub fn bundle(mut self, bundle: SettingsBundle) -> Self {
        self.registry = self.registry.bundle(bundle);
        self
    }

    /// Adds an emit rule.
    pub fn rule(mut self, rule: EmitRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several emit rules in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = EmitRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Binds a setting to its live-preview selector.
    pub fn bind_preview(mut self, setting: impl Into<String>, selector: impl Into<String>) -> Self {
        self.bindings.push((setting.into(), selector.into()));
        self
    }

    /// Validates everything and produces a ready [`Theme`].
    pub fn build(self) -> Result<Theme, ThemeError> {
        let registry = self.registry.build()?;
        let emitter = EmitterBuilder::new().rules(self.rules).build(&registry)?;
        let mut preview = PreviewBinder::new();
        for (setting, selector) in self.bindings {
            preview = preview.bind(setting, selector);
        }
        tracing::debug!(
            settings = registry.len(),
            rules = emitter.len(),
            bindings = preview.len(),
            "theme built"
        );
        Ok(Theme {
            registry,
            emitter,
            preview,
        })
    }
}

/// A built theme: validated registry, compiled emitter, preview routing.
#[derive(Debug)]
pub struct Theme {
    registry: Registry,
    emitter: Emitter,
    preview: PreviewBinder,
}

impl Theme {
    /// Starts an empty builder (the catalog offers a populated one).
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn preview(&self) -> &PreviewBinder {
        &self.preview
    }

    /// Resolves the effective value of one setting against a snapshot.
    pub fn resolve(&self, store: &ValueStore, key: &str) -> Option<String> {
        self.registry.resolve(store, key)
    }

    /// Applies a settings-form submission to `store` through the sanitizers.
    pub fn apply_update(&self, store: &mut ValueStore, update: &SettingsUpdate) {
        store.apply(&self.registry, update);
    }

    /// Runs one render pass against a snapshot of the value store.
    pub fn render(&self, store: &ValueStore) -> Result<RenderOutput, EmitError> {
        self.emitter.render(&self.registry, store)
    }
}
