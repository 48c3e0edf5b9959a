//! # Veneer Settings - Typed Presentation Settings
//!
//! `veneer-settings` is the registry layer of the veneer engine: typed,
//! defaulted, validated settings organized into panels and sections, a named
//! registry of pure sanitizers, and the host-persisted value store with its
//! sanitizer-routed update path.
//!
//! ## Core Concepts
//!
//! - [`Registry`]: the validated, immutable settings catalog built once at
//!   startup and passed by reference everywhere values are resolved
//! - [`SettingDef`]: one configurable option — key, [`ValueKind`], default,
//!   sanitizer name, owning section, [`ControlHint`]
//! - [`Sanitizer`]: pure raw → validated functions; rejection means "no
//!   override" (empty string), never an error
//! - [`ValueStore`]: snapshot of customized values; absent keys resolve to
//!   defaults; mutated only through [`ValueStore::apply`]
//! - [`Toggle`]: the tri-state model behind checkbox settings
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer_settings::{
//!     RegistryBuilder, Section, SettingDef, SettingsUpdate, ValueKind, ValueStore,
//! };
//!
//! let registry = RegistryBuilder::new()
//!     .section(Section::new("shop_styles", "Shop Styles", 100))
//!     .setting(SettingDef::new("cart_color", ValueKind::Color, "#444444", "shop_styles"))
//!     .build()
//!     .unwrap();
//!
//! let mut store = ValueStore::new();
//! store.apply(&registry, &SettingsUpdate::new().set("cart_color", "#ff0000"));
//!
//! assert_eq!(registry.resolve(&store, "cart_color").as_deref(), Some("#ff0000"));
//! ```
//!
//! ## Validation Model
//!
//! Configuration contradictions (unknown section/panel/sanitizer, a default
//! rejected by its own sanitizer) fail [`RegistryBuilder::build`] — fatal at
//! startup. Operator input failures are absorbed by sanitizers at store time
//! and never reach a page visitor.

pub mod bundle;
pub mod error;
pub mod markup;
pub mod registry;
pub mod sanitize;
pub mod store;
pub mod value;

pub use bundle::{ChoiceSanitizerDef, SettingsBundle};
pub use error::ConfigError;
pub use markup::AllowedTags;
pub use registry::{Panel, Registry, RegistryBuilder, Section, SettingDef};
pub use sanitize::{escape_attribute, names as sanitizer_names, Sanitizer, SanitizerRegistry};
pub use store::{SettingsUpdate, ValueStore};
pub use value::{ControlHint, Toggle, ValueKind};
