//! Value kinds and control hints for setting definitions.
//!
//! Every setting declares a [`ValueKind`] — a closed set of value shapes the
//! engine knows how to handle — and a [`ControlHint`] describing the editing
//! affordance the settings UI should present. The hint is persisted alongside
//! the definition but carries no rendering behavior of its own.

use serde::{Deserialize, Serialize};

/// The shape of a setting's value.
///
/// This is a closed set: the emission engine matches on it exhaustively, so a
/// new kind cannot be introduced without handling it everywhere values are
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A CSS color (`#rgb`, `#rrggbb`, `rgb()`, `rgba()`).
    Color,
    /// A numeric size or amount, stored in decimal form without a unit.
    Dimension,
    /// Free text (sanitized for attribute context).
    Text,
    /// A tri-state on/off switch — see [`Toggle`].
    Toggle,
    /// One key out of a fixed set of choices.
    Choice,
    /// A reference to a host-managed image.
    ImageRef,
    /// A link target.
    Url,
    /// Short formatted text restricted to an allow-list of markup tags.
    Markup,
}

/// Tri-state value of a [`ValueKind::Toggle`] setting.
///
/// Toggles carried over an HTTP form are genuinely three-valued: a checkbox
/// that was never customized is distinct from one the operator switched off.
/// The stored string encodes the state (`"true"`/`"on"`/`"1"` vs
/// `"false"`/`"off"`/`"0"`); anything else — including the empty string —
/// parses as [`Toggle::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    /// Never customized; inherits whatever the stylesheet already does.
    #[default]
    Unset,
    On,
    Off,
}

impl Toggle {
    /// Parses a stored string into a toggle state.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "true" | "on" | "1" => Toggle::On,
            "false" | "off" | "0" => Toggle::Off,
            _ => Toggle::Unset,
        }
    }

    /// Returns the canonical stored encoding for this state.
    ///
    /// [`Toggle::Unset`] encodes as the empty string (absent from the store).
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Unset => "",
            Toggle::On => "true",
            Toggle::Off => "false",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On)
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Toggle::Off)
    }
}

/// UI affordance for editing a setting.
///
/// Hints are declarative: the core never branches on them, but they are part
/// of the registry so the host's settings surface can build its controls from
/// one source of truth. Numeric bounds live here rather than on the sanitizer
/// — out-of-range values are a UI concern, not a validity one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlHint {
    ColorPicker,
    /// Color picker with an opacity channel (stores `rgba()` values).
    AlphaColorPicker,
    NumberInput {
        min: f64,
        max: f64,
        step: f64,
    },
    Checkbox,
    Select,
    #[default]
    TextInput,
    CodeEditor,
    ImagePicker,
    UrlInput,
}

impl ControlHint {
    /// Standard whole-pixel number input, 0..=10000 step 1.
    pub fn pixels() -> Self {
        ControlHint::NumberInput {
            min: 0.0,
            max: 10_000.0,
            step: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parse_on() {
        assert_eq!(Toggle::parse("true"), Toggle::On);
        assert_eq!(Toggle::parse("on"), Toggle::On);
        assert_eq!(Toggle::parse("1"), Toggle::On);
    }

    #[test]
    fn test_toggle_parse_off() {
        assert_eq!(Toggle::parse("false"), Toggle::Off);
        assert_eq!(Toggle::parse("off"), Toggle::Off);
        assert_eq!(Toggle::parse("0"), Toggle::Off);
    }

    #[test]
    fn test_toggle_parse_unset() {
        assert_eq!(Toggle::parse(""), Toggle::Unset);
        assert_eq!(Toggle::parse("maybe"), Toggle::Unset);
        assert_eq!(Toggle::parse("TRUE"), Toggle::Unset);
    }

    #[test]
    fn test_toggle_parse_trims() {
        assert_eq!(Toggle::parse("  true "), Toggle::On);
    }

    #[test]
    fn test_toggle_round_trip() {
        for t in [Toggle::On, Toggle::Off, Toggle::Unset] {
            assert_eq!(Toggle::parse(t.as_str()), t);
        }
    }

    #[test]
    fn test_value_kind_serde_kebab() {
        let yaml = serde_yaml::to_string(&ValueKind::ImageRef).unwrap();
        assert_eq!(yaml.trim(), "image-ref");
        let back: ValueKind = serde_yaml::from_str("color").unwrap();
        assert_eq!(back, ValueKind::Color);
    }

    #[test]
    fn test_control_hint_default() {
        assert_eq!(ControlHint::default(), ControlHint::TextInput);
    }

    #[test]
    fn test_control_hint_pixels() {
        match ControlHint::pixels() {
            ControlHint::NumberInput { min, max, step } => {
                assert_eq!(min, 0.0);
                assert_eq!(max, 10_000.0);
                assert_eq!(step, 1.0);
            }
            other => panic!("expected NumberInput, got {:?}", other),
        }
    }
}
