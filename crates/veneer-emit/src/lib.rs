//! # Veneer Emit - Conditional Fragment Emission
//!
//! `veneer-emit` turns customized settings into scoped style and script
//! fragments. Each render pass compares a value-store snapshot against the
//! settings registry and concatenates the fragments of every active rule
//! into one head block and one footer block, deterministically.
//!
//! ## Core Concepts
//!
//! - [`EmitRule`]: one setting → one conditional fragment, with a declared
//!   [`Activation`] predicate and a fixed declaration template
//! - [`Emitter`]: the built engine — rules validated and templates compiled
//!   up front, so render passes cannot fail on operator data
//! - [`RenderOutput`]: the head/footer text of one pass
//! - [`PreviewBinder`]: routing table for live-preview partial refresh
//! - [`TemplateEngine`]: backend seam, MiniJinja by default
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer_emit::{EmitRule, EmitterBuilder, FragmentGroup};
//! use veneer_settings::{RegistryBuilder, Section, SettingDef, ValueKind, ValueStore};
//!
//! let registry = RegistryBuilder::new()
//!     .section(Section::new("shop_styles", "Shop Styles", 100))
//!     .setting(SettingDef::new("cart_color", ValueKind::Color, "#444444", "shop_styles"))
//!     .build()
//!     .unwrap();
//!
//! let emitter = EmitterBuilder::new()
//!     .rule(EmitRule::when_changed(
//!         "cart_color",
//!         FragmentGroup::Shop,
//!         ".cart-contents:before { color: {{ value }}; }",
//!     ))
//!     .build(&registry)
//!     .unwrap();
//!
//! // Untouched settings emit nothing.
//! let output = emitter.render(&registry, &ValueStore::new()).unwrap();
//! assert!(output.is_empty());
//!
//! // A customized value produces its fragment.
//! let store = ValueStore::from_pairs([("cart_color", "#ff0000")]);
//! let output = emitter.render(&registry, &store).unwrap();
//! assert!(output.head.contains("color: #ff0000;"));
//! ```
//!
//! ## Failure Semantics
//!
//! Configuration contradictions fail [`EmitterBuilder::build`]. Render
//! passes never abort over operator data: a stored value that fails its
//! sanitizer resolves back to the default and the rule goes inactive.

pub mod emitter;
pub mod engine;
mod error;
pub mod preview;
pub mod rule;
pub mod sink;

pub use emitter::{Emitter, EmitterBuilder, RenderOutput};
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::EmitError;
pub use preview::{PreviewBinder, RefreshPlan};
pub use rule::{Activation, EmitRule, FragmentGroup, FragmentKind, RuleBody};
pub use sink::{BufferSink, OutputSink};
