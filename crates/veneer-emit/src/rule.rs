//! Emit rules: which setting, which concern, when, and what to produce.
//!
//! An [`EmitRule`] ties one setting to one conditionally emitted fragment.
//! The activation predicate is declared on the rule, never inferred from the
//! setting — a color that should only apply when customized uses
//! [`Activation::DiffersFromDefault`], a visibility switch uses
//! [`Activation::Toggle`] with a fragment for each state, an alignment
//! choice uses [`Activation::Variant`] with one fixed fragment per value.

/// Whether a fragment lands in the document head or the late body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A `<style>` element appended to the head stream.
    Style,
    /// Raw script text appended to the footer stream.
    Script,
}

/// The concern a rule belongs to.
///
/// Groups exist only to keep fragment ordering stable: output is
/// concatenated group by group (in first-registration order), then rule by
/// rule within a group. They grant no access control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FragmentGroup {
    Shop,
    Layout,
    Typography,
    BackToTop,
    /// Per-menu-slot styling, keyed by slot identifier.
    Menu(String),
    TextBlocks,
    Media,
    Script,
}

impl FragmentGroup {
    /// A stable label for diagnostics and template naming.
    pub fn label(&self) -> String {
        match self {
            FragmentGroup::Shop => "shop".to_string(),
            FragmentGroup::Layout => "layout".to_string(),
            FragmentGroup::Typography => "typography".to_string(),
            FragmentGroup::BackToTop => "back-to-top".to_string(),
            FragmentGroup::Menu(slot) => format!("menu.{}", slot),
            FragmentGroup::TextBlocks => "text-blocks".to_string(),
            FragmentGroup::Media => "media".to_string(),
            FragmentGroup::Script => "script".to_string(),
        }
    }
}

/// When a rule's fragment is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Resolved value differs from the setting's default (and is non-empty —
    /// empty always means "no override").
    DiffersFromDefault,
    /// Resolved value is non-empty and not the literal `inherit`.
    NonEmpty,
    /// Tri-state: on emits one fragment, off another, unset nothing.
    Toggle,
    /// Resolved value selects one of several fixed fragments; no match
    /// emits nothing.
    Variant,
}

/// The fragment template(s) attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBody {
    /// One template with the resolved value substituted for `{{ value }}`.
    Template(String),
    /// Two fixed fragments chosen by toggle state.
    Toggle { on: String, off: String },
    /// Fixed fragments keyed by choice value, in declaration order.
    Variants(Vec<(String, String)>),
}

/// One setting → one conditional fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitRule {
    pub(crate) setting: String,
    pub(crate) group: FragmentGroup,
    pub(crate) kind: FragmentKind,
    pub(crate) activation: Activation,
    pub(crate) body: RuleBody,
}

impl EmitRule {
    /// Style fragment emitted when the value differs from the default.
    ///
    /// ```rust
    /// use veneer_emit::{EmitRule, FragmentGroup};
    ///
    /// let rule = EmitRule::when_changed(
    ///     "cart_color",
    ///     FragmentGroup::Shop,
    ///     ".cart-contents:before { color: {{ value }}; }",
    /// );
    /// assert_eq!(rule.setting(), "cart_color");
    /// ```
    pub fn when_changed(
        setting: impl Into<String>,
        group: FragmentGroup,
        template: impl Into<String>,
    ) -> Self {
        Self {
            setting: setting.into(),
            group,
            kind: FragmentKind::Style,
            activation: Activation::DiffersFromDefault,
            body: RuleBody::Template(template.into()),
        }
    }

    /// Style fragment emitted whenever a non-empty, non-`inherit` value is
    /// set. Used for settings whose default is "no override".
    pub fn when_set(
        setting: impl Into<String>,
        group: FragmentGroup,
        template: impl Into<String>,
    ) -> Self {
        Self {
            setting: setting.into(),
            group,
            kind: FragmentKind::Style,
            activation: Activation::NonEmpty,
            body: RuleBody::Template(template.into()),
        }
    }

    /// Paired fragments for a tri-state toggle: `on` when switched on,
    /// `off` when switched off, nothing when never customized.
    pub fn toggle(
        setting: impl Into<String>,
        group: FragmentGroup,
        on: impl Into<String>,
        off: impl Into<String>,
    ) -> Self {
        Self {
            setting: setting.into(),
            group,
            kind: FragmentKind::Style,
            activation: Activation::Toggle,
            body: RuleBody::Toggle {
                on: on.into(),
                off: off.into(),
            },
        }
    }

    /// One fixed fragment per choice value.
    pub fn variants<V, T>(
        setting: impl Into<String>,
        group: FragmentGroup,
        pairs: impl IntoIterator<Item = (V, T)>,
    ) -> Self
    where
        V: Into<String>,
        T: Into<String>,
    {
        Self {
            setting: setting.into(),
            group,
            kind: FragmentKind::Style,
            activation: Activation::Variant,
            body: RuleBody::Variants(
                pairs
                    .into_iter()
                    .map(|(v, t)| (v.into(), t.into()))
                    .collect(),
            ),
        }
    }

    /// Script fragment (footer stream) emitted when a non-empty value is set.
    /// The stored value is substituted verbatim — the setting's sanitizer is
    /// the only gate on its content.
    pub fn script_when_set(setting: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            setting: setting.into(),
            group: FragmentGroup::Script,
            kind: FragmentKind::Script,
            activation: Activation::NonEmpty,
            body: RuleBody::Template(template.into()),
        }
    }

    pub fn setting(&self) -> &str {
        &self.setting
    }

    pub fn group(&self) -> &FragmentGroup {
        &self.group
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when_changed_shape() {
        let rule = EmitRule::when_changed("x", FragmentGroup::Shop, "t");
        assert_eq!(rule.kind(), FragmentKind::Style);
        assert_eq!(rule.activation(), Activation::DiffersFromDefault);
        assert!(matches!(rule.body, RuleBody::Template(_)));
    }

    #[test]
    fn test_toggle_shape() {
        let rule = EmitRule::toggle("x", FragmentGroup::Layout, "on", "off");
        assert_eq!(rule.activation(), Activation::Toggle);
        assert!(matches!(rule.body, RuleBody::Toggle { .. }));
    }

    #[test]
    fn test_variants_shape() {
        let rule = EmitRule::variants(
            "align",
            FragmentGroup::Menu("main".into()),
            [("left", "L"), ("right", "R")],
        );
        assert_eq!(rule.activation(), Activation::Variant);
        match &rule.body {
            RuleBody::Variants(pairs) => assert_eq!(pairs.len(), 2),
            other => panic!("expected variants, got {:?}", other),
        }
    }

    #[test]
    fn test_script_shape() {
        let rule = EmitRule::script_when_set("custom_js", "{{ value }}");
        assert_eq!(rule.kind(), FragmentKind::Script);
        assert_eq!(rule.group(), &FragmentGroup::Script);
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(FragmentGroup::Shop.label(), "shop");
        assert_eq!(FragmentGroup::Menu("main".into()).label(), "menu.main");
    }
}
