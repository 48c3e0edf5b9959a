//! # Veneer - Settings-Driven Style Emission
//!
//! `veneer` is the engine inside a customizable presentation theme: a
//! registry of typed, defaulted, validated settings organized into panels
//! and sections, an emission pass that turns customized values into scoped
//! style/script fragments, a live-preview binder that routes setting changes
//! to the DOM region they affect, and a recursive navigation-menu renderer
//! with explicit extension points.
//!
//! This crate is the facade: it re-exports the building blocks from
//! `veneer-settings`, `veneer-emit` and `veneer-menu`, and ships the
//! built-in [`catalog`] mirroring a full theme's option surface.
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer::catalog::{self, CatalogOptions};
//! use veneer::{SettingsUpdate, ValueStore};
//!
//! let theme = catalog::theme(&CatalogOptions::default()).build().unwrap();
//!
//! // The operator customizes the cart color...
//! let mut store = ValueStore::new();
//! theme.apply_update(
//!     &mut store,
//!     &SettingsUpdate::new()
//!         .set("cart_color", "#ff0000")
//!         .set("show_cart_in_menu", "true"),
//! );
//!
//! // ...and every page render re-derives the conditional fragments.
//! let output = theme.render(&store).unwrap();
//! assert!(output.head.contains(".cart-contents:before"));
//! assert!(output.head.contains("color: #ff0000;"));
//! ```
//!
//! ## Rendering Menus
//!
//! ```rust
//! use veneer::menu::{MenuNode, MenuRenderer, RenderContext};
//!
//! let tree = vec![MenuNode::new(1, "Home", "/")];
//! let html = MenuRenderer::new().render_wrapped(
//!     &tree,
//!     &RenderContext::default(),
//!     "navbar-menu menu-main",
//! );
//! assert!(html.contains("menu-item-1"));
//! ```
//!
//! ## Guarantees
//!
//! - Configuration contradictions fail [`ThemeBuilder::build`]; a built
//!   [`Theme`] never fails a render over operator data.
//! - Rendering is deterministic: one store snapshot, byte-identical output.
//! - Sanitizer rejection means "no override", invisible to page visitors.

pub mod catalog;
pub mod theme;

/// Menu rendering, re-exported whole (it is independent of the settings
/// machinery).
pub use veneer_menu as menu;

pub use theme::{Theme, ThemeBuilder, ThemeError};

// Settings layer re-exports.
pub use veneer_settings::{
    AllowedTags, ConfigError, ControlHint, Panel, Registry, RegistryBuilder, Sanitizer,
    SanitizerRegistry, Section, SettingDef, SettingsBundle, SettingsUpdate, Toggle, ValueKind,
    ValueStore,
};

// Emission layer re-exports.
pub use veneer_emit::{
    Activation, BufferSink, EmitError, EmitRule, Emitter, EmitterBuilder, FragmentGroup,
    FragmentKind, MiniJinjaEngine, OutputSink, PreviewBinder, RefreshPlan, RenderOutput,
    TemplateEngine,
};

/// Convenience imports for hosts embedding the engine.
pub mod prelude {
    pub use crate::catalog::{self, CatalogOptions};
    pub use crate::menu::{MenuFilters, MenuNode, MenuRenderer, RenderContext};
    pub use crate::{
        EmitRule, FragmentGroup, RefreshPlan, Section, SettingDef, SettingsUpdate, Theme,
        ThemeBuilder, ValueKind, ValueStore,
    };
}
