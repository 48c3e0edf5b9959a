//! The style emission engine.
//!
//! An [`Emitter`] is built once from a rule set, validated against the
//! settings [`Registry`], then run once per render pass against a value
//! store snapshot. Building compiles every declaration template and checks
//! every rule for contradictions (unknown setting, variant outside the
//! choice set, body/predicate mismatch) — by the time [`Emitter::render`]
//! runs, the only possible failures are programming errors, and a value that
//! merely fails validation deactivates its rule instead of aborting the pass.
//!
//! Output is deterministic: rules run in group order (groups ordered by
//! first registration), then registration order within a group, and the same
//! store snapshot always yields byte-identical head and footer blocks.
//!
//! # Example
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
//!         ".cart-contents:before {\n\tcolor: {{ value }};\n}",
//!     ))
//!     .build(&registry)
//!     .unwrap();
//!
//! let store = ValueStore::from_pairs([("cart_color", "#ff0000")]);
//! let output = emitter.render(&registry, &store).unwrap();
//! assert!(output.head.contains("color: #ff0000;"));
//! ```

use serde_json::json;

use veneer_settings::{Registry, Toggle, ValueStore};

use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::EmitError;
use crate::rule::{Activation, EmitRule, FragmentGroup, FragmentKind, RuleBody};

/// The head and footer text produced by one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Concatenated `<style>` elements for the document head.
    pub head: String,
    /// Concatenated script text for the late body.
    pub footer: String,
}

impl RenderOutput {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.footer.is_empty()
    }

    /// Appends this output to host-provided head and footer sinks.
    pub fn write_to<H, F>(&self, head: &mut H, footer: &mut F)
    where
        H: crate::sink::OutputSink,
        F: crate::sink::OutputSink,
    {
        if !self.head.is_empty() {
            head.append(&self.head);
        }
        if !self.footer.is_empty() {
            footer.append(&self.footer);
        }
    }
}

/// A rule with its compiled template names.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: EmitRule,
    body: CompiledBody,
}

#[derive(Debug, Clone)]
enum CompiledBody {
    Template(String),
    Toggle { on: String, off: String },
    Variants(Vec<(String, String)>),
}

/// Accumulates emit rules for validation and compilation.
#[derive(Debug, Clone, Default)]
pub struct EmitterBuilder {
    rules: Vec<EmitRule>,
}

impl EmitterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one rule, returning `self` for chaining.
    pub fn rule(mut self, rule: EmitRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several rules in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = EmitRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Validates every rule against `registry` and compiles all templates.
    ///
    /// # Errors
    ///
    /// - [`EmitError::UnknownSetting`] for a rule whose setting is not
    ///   registered
    /// - [`EmitError::VariantNotInChoices`] for a variant value outside the
    ///   setting's choice sanitizer
    /// - [`EmitError::MismatchedActivation`] when predicate and body shapes
    ///   disagree
    /// - [`EmitError::TemplateError`] for a template that fails to compile
    ///   or render
    pub fn build(self, registry: &Registry) -> Result<Emitter, EmitError> {
        let mut engine = MiniJinjaEngine::new();
        let mut compiled = Vec::with_capacity(self.rules.len());

        for (index, rule) in self.rules.into_iter().enumerate() {
            if registry.setting(&rule.setting).is_none() {
                return Err(EmitError::UnknownSetting {
                    setting: rule.setting.clone(),
                });
            }
            check_shape(&rule)?;

            let body = match &rule.body {
                RuleBody::Template(source) => {
                    let name = format!("{}.{}", rule.setting, index);
                    engine.add_template(&name, source)?;
                    CompiledBody::Template(name)
                }
                RuleBody::Toggle { on, off } => {
                    let on_name = format!("{}.{}.on", rule.setting, index);
                    let off_name = format!("{}.{}.off", rule.setting, index);
                    engine.add_template(&on_name, on)?;
                    engine.add_template(&off_name, off)?;
                    CompiledBody::Toggle {
                        on: on_name,
                        off: off_name,
                    }
                }
                RuleBody::Variants(pairs) => {
                    let choice_keys = registry
                        .sanitizer_for(&rule.setting)
                        .and_then(|s| s.choice_keys());
                    if let Some(keys) = &choice_keys {
                        for (value, _) in pairs {
                            if !keys.contains(&value.as_str()) {
                                return Err(EmitError::VariantNotInChoices {
                                    setting: rule.setting.clone(),
                                    variant: value.clone(),
                                });
                            }
                        }
                    }
                    let mut names = Vec::with_capacity(pairs.len());
                    for (value, source) in pairs {
                        let name = format!("{}.{}.{}", rule.setting, index, value);
                        engine.add_template(&name, source)?;
                        names.push((value.clone(), name));
                    }
                    CompiledBody::Variants(names)
                }
            };

            // Trial render so substitution failures surface now, not mid-render.
            match &body {
                CompiledBody::Template(name) => {
                    engine.render_named(name, &json!({"value": ""}))?;
                }
                CompiledBody::Toggle { on, off } => {
                    engine.render_named(on, &json!({"value": ""}))?;
                    engine.render_named(off, &json!({"value": ""}))?;
                }
                CompiledBody::Variants(names) => {
                    for (_, name) in names {
                        engine.render_named(name, &json!({"value": ""}))?;
                    }
                }
            }

            compiled.push(CompiledRule { rule, body });
        }

        sort_by_group(&mut compiled);
        Ok(Emitter {
            rules: compiled,
            engine,
        })
    }
}

/// Predicate and body shapes must agree; constructors guarantee this, but
/// rules can also be assembled field-wise from data.
fn check_shape(rule: &EmitRule) -> Result<(), EmitError> {
    let ok = matches!(
        (&rule.activation, &rule.body),
        (
            Activation::DiffersFromDefault | Activation::NonEmpty,
            RuleBody::Template(_)
        ) | (Activation::Toggle, RuleBody::Toggle { .. })
            | (Activation::Variant, RuleBody::Variants(_))
    );
    if ok {
        Ok(())
    } else {
        Err(EmitError::MismatchedActivation {
            setting: rule.setting.clone(),
            detail: format!(
                "activation {:?} does not fit body {:?}",
                rule.activation,
                std::mem::discriminant(&rule.body)
            ),
        })
    }
}

/// Stable sort: groups in first-appearance order, registration order within.
fn sort_by_group(rules: &mut [CompiledRule]) {
    let mut group_order: Vec<FragmentGroup> = Vec::new();
    for compiled in rules.iter() {
        if !group_order.contains(&compiled.rule.group) {
            group_order.push(compiled.rule.group.clone());
        }
    }
    rules.sort_by_key(|c| {
        group_order
            .iter()
            .position(|g| *g == c.rule.group)
            .expect("every group was collected")
    });
}

/// The built emission engine.
///
/// Holds compiled templates and the ordered rule list; render passes borrow
/// the registry and a store snapshot and share nothing mutable, so one
/// emitter serves any number of concurrent renders.
#[derive(Debug)]
pub struct Emitter {
    rules: Vec<CompiledRule>,
    engine: MiniJinjaEngine,
}

impl Emitter {
    /// Number of rules (after validation).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs one render pass against a store snapshot.
    ///
    /// Never fails on operator data: a value that no longer validates simply
    /// deactivates its rule. Errors indicate a template/engine programming
    /// error.
    pub fn render(&self, registry: &Registry, store: &ValueStore) -> Result<RenderOutput, EmitError> {
        let mut output = RenderOutput::default();

        for compiled in &self.rules {
            let rule = &compiled.rule;
            let Some(def) = registry.setting(&rule.setting) else {
                // Registry swapped since build; skip rather than abort the page.
                tracing::warn!(setting = rule.setting.as_str(), "rule for unregistered setting");
                continue;
            };
            let value = registry
                .resolve(store, &rule.setting)
                .expect("definition exists");

            let template = match (&rule.activation, &compiled.body) {
                (Activation::DiffersFromDefault, CompiledBody::Template(name)) => {
                    if !value.is_empty() && value != def.default {
                        Some(name)
                    } else {
                        None
                    }
                }
                (Activation::NonEmpty, CompiledBody::Template(name)) => {
                    if !value.is_empty() && value != "inherit" {
                        Some(name)
                    } else {
                        None
                    }
                }
                (Activation::Toggle, CompiledBody::Toggle { on, off }) => {
                    match Toggle::parse(&value) {
                        Toggle::On => Some(on),
                        Toggle::Off => Some(off),
                        Toggle::Unset => None,
                    }
                }
                (Activation::Variant, CompiledBody::Variants(names)) => names
                    .iter()
                    .find(|(variant, _)| *variant == value)
                    .map(|(_, name)| name),
                // Build rejected mismatched shapes.
                _ => unreachable!("rule shapes validated at build time"),
            };

            let Some(template) = template else {
                tracing::debug!(
                    setting = rule.setting.as_str(),
                    group = rule.group.label().as_str(),
                    "inactive"
                );
                continue;
            };

            let body = self
                .engine
                .render_named(template, &json!({ "value": value }))?;
            match rule.kind {
                FragmentKind::Style => {
                    output.head.push_str("<style type=\"text/css\">\n");
                    output.head.push_str(&body);
                    output.head.push_str("\n</style>\n");
                }
                FragmentKind::Script => {
                    output.footer.push_str(&body);
                    output.footer.push('\n');
                }
            }
        }

        Ok(output)
    }
}


#[cfg(test)]
mod properties {
    use super::tests::{emitter_for_properties, registry_for_properties};
    use proptest::prelude::*;
    use veneer_settings::ValueStore;

    proptest! {
        /// Any snapshot renders byte-identically across passes.
        #[test]
        fn render_is_deterministic(
            color in "#[0-9a-f]{6}",
            toggle in prop::sample::select(vec!["", "true", "false", "junk"]),
            align in prop::sample::select(vec!["", "left", "right", "center"]),
        ) {
            let registry = registry_for_properties();
            let emitter = emitter_for_properties(&registry);
            let store = ValueStore::from_pairs([
                ("cart_color", color.as_str()),
                ("show_widget", toggle),
                ("navbar_align", align),
            ]);
            let first = emitter.render(&registry, &store).unwrap();
            let second = emitter.render(&registry, &store).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
