//! Sanitizers: pure raw-input → validated-value functions.
//!
//! Every setting names a sanitizer from a [`SanitizerRegistry`]. Sanitizers
//! never error: a value that fails validation comes back as the empty string,
//! which every consumer treats as "no override". That keeps operator typos
//! invisible to site visitors instead of surfacing as render failures.
//!
//! Built-in kinds:
//!
//! - [`Sanitizer::Color`] — hex (`#rgb`/`#rrggbb`) or `rgb()`/`rgba()` with
//!   a 0–1 alpha
//! - [`Sanitizer::Number`] — strips non-numeric characters, keeps decimal form
//! - [`Sanitizer::Choice`] — membership in a fixed key set
//! - [`Sanitizer::Checkbox`] — verbatim passthrough (the absent-field rule
//!   lives in the update decoder, not here)
//! - [`Sanitizer::Markup`] — allow-list tag filtering, see [`crate::markup`]
//! - [`Sanitizer::Attribute`] — entity-aware attribute escaping
//!
//! # Example
//!
//! ```rust
//! use veneer_settings::Sanitizer;
//!
//! let color = Sanitizer::Color;
//! assert_eq!(color.sanitize("#ff0000"), "#ff0000");
//! assert_eq!(color.sanitize("red"), "");
//!
//! let number = Sanitizer::Number;
//! assert_eq!(number.sanitize("26.5px"), "26.5");
//! ```

use crate::markup::AllowedTags;

/// A pure validation function for one category of raw input.
///
/// Parameterized variants carry their configuration by value so the whole
/// registry stays cheap to clone and free of shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitizer {
    /// CSS color: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Color,
    /// Decimal number: strips everything that is not part of a numeric
    /// literal. No clamping — range limits are a UI constraint.
    Number,
    /// One key of a fixed choice set; anything else rejects to empty.
    Choice {
        /// Ordered `(key, label)` pairs. Order is the UI presentation order.
        valid: Vec<(String, String)>,
    },
    /// Verbatim passthrough for checkbox submissions.
    Checkbox,
    /// Allow-list markup filtering for short formatted strings.
    Markup { allowed: AllowedTags },
    /// Attribute-context escaping for free text (shadows, references).
    Attribute,
    /// Verbatim passthrough for operator-trusted code blocks (tracking
    /// snippets). The host restricts who may edit these settings; the value
    /// is emitted into the footer stream untouched.
    Raw,
}

impl Sanitizer {
    /// Builds a choice sanitizer from `(key, label)` pairs.
    pub fn choice<K, L>(pairs: &[(K, L)]) -> Self
    where
        K: AsRef<str>,
        L: AsRef<str>,
    {
        Sanitizer::Choice {
            valid: pairs
                .iter()
                .map(|(k, l)| (k.as_ref().to_string(), l.as_ref().to_string()))
                .collect(),
        }
    }

    /// Validates `raw`, returning the accepted value or the empty string.
    pub fn sanitize(&self, raw: &str) -> String {
        match self {
            Sanitizer::Color => sanitize_color(raw),
            Sanitizer::Number => sanitize_number(raw),
            Sanitizer::Choice { valid } => {
                if valid.iter().any(|(k, _)| k == raw) {
                    raw.to_string()
                } else {
                    String::new()
                }
            }
            Sanitizer::Checkbox => raw.to_string(),
            Sanitizer::Markup { allowed } => crate::markup::sanitize_markup(raw, allowed),
            Sanitizer::Attribute => escape_attribute(raw),
            Sanitizer::Raw => raw.to_string(),
        }
    }

    /// True if `default` survives this sanitizer unchanged.
    ///
    /// Registry building requires this of every setting; a default its own
    /// sanitizer rewrites is a configuration contradiction.
    pub fn accepts_default(&self, default: &str) -> bool {
        self.sanitize(default) == default
    }

    /// The choice keys, if this is a [`Sanitizer::Choice`].
    pub fn choice_keys(&self) -> Option<Vec<&str>> {
        match self {
            Sanitizer::Choice { valid } => Some(valid.iter().map(|(k, _)| k.as_str()).collect()),
            _ => None,
        }
    }
}

/// Validates a color string. Empty output means "not a color".
fn sanitize_color(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }
    let ok = if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if s.starts_with("rgba(") && s.ends_with(')') {
        parse_rgb_components(&s[5..s.len() - 1], true)
    } else if s.starts_with("rgb(") && s.ends_with(')') {
        parse_rgb_components(&s[4..s.len() - 1], false)
    } else {
        false
    };
    if ok {
        s.to_string()
    } else {
        String::new()
    }
}

/// Accepts 3- or 6-digit hex color codes (without the `#` prefix).
fn parse_hex(hex: &str) -> bool {
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Accepts `r, g, b[, a]` with integer channels 0–255 and alpha 0–1.
fn parse_rgb_components(inner: &str, with_alpha: bool) -> bool {
    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return false;
    }
    for part in &parts[..3] {
        match part.parse::<u32>() {
            Ok(n) if n <= 255 => {}
            _ => return false,
        }
    }
    if with_alpha {
        match parts[3].parse::<f64>() {
            Ok(a) if (0.0..=1.0).contains(&a) => {}
            _ => return false,
        }
    }
    true
}

/// Strips everything that is not part of a decimal numeric literal.
///
/// Keeps digits, at most one decimal point, and a minus sign only in the
/// leading position. Output containing no digit collapses to empty.
fn sanitize_number(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            '-' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    if out.chars().any(|c| c.is_ascii_digit()) {
        out
    } else {
        String::new()
    }
}

/// Escapes text for HTML attribute context without double-encoding.
///
/// `<`, `>`, `"` and `'` are always replaced; `&` is left alone when it
/// already introduces an entity, so sanitizing stored output again is a
/// fixed point.
pub fn escape_attribute(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    for (idx, c) in raw.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '&' => {
                if starts_entity(&bytes[idx..]) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// True when `bytes` begins with `&name;` / `&#123;` style entity syntax.
fn starts_entity(bytes: &[u8]) -> bool {
    debug_assert_eq!(bytes.first(), Some(&b'&'));
    let body = &bytes[1..];
    let len = body
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'#')
        .count();
    len > 0 && len <= 8 && body.get(len) == Some(&b';')
}

/// Named collection of sanitizers.
///
/// Registration is idempotent by name — registering a name twice replaces the
/// earlier entry in place, so later setup code can refine earlier defaults.
///
/// # Example
///
/// ```rust
/// use veneer_settings::{Sanitizer, SanitizerRegistry};
///
/// let sanitizers = SanitizerRegistry::builtin()
///     .register("weight", Sanitizer::choice(&[("400", "Normal"), ("700", "Bold")]));
///
/// assert!(sanitizers.get("color").is_some());
/// assert_eq!(sanitizers.get("weight").unwrap().sanitize("700"), "700");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SanitizerRegistry {
    entries: Vec<(String, Sanitizer)>,
}

/// Names of the sanitizers [`SanitizerRegistry::builtin`] pre-registers.
pub mod names {
    pub const COLOR: &str = "color";
    pub const NUMBER: &str = "number";
    pub const CHECKBOX: &str = "checkbox";
    pub const ATTRIBUTE: &str = "attribute";
    /// Markup sanitizer with the default short-text allow-list.
    pub const TEXT: &str = "text";
    /// Verbatim passthrough for operator-trusted code.
    pub const CODE: &str = "code";
}

impl SanitizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in sanitizers.
    pub fn builtin() -> Self {
        Self::new()
            .register(names::COLOR, Sanitizer::Color)
            .register(names::NUMBER, Sanitizer::Number)
            .register(names::CHECKBOX, Sanitizer::Checkbox)
            .register(names::ATTRIBUTE, Sanitizer::Attribute)
            .register(
                names::TEXT,
                Sanitizer::Markup {
                    allowed: AllowedTags::short_text(),
                },
            )
            .register(names::CODE, Sanitizer::Raw)
    }

    /// Registers a sanitizer under `name`, replacing any earlier entry.
    pub fn register(mut self, name: impl Into<String>, sanitizer: Sanitizer) -> Self {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = sanitizer;
        } else {
            self.entries.push((name, sanitizer));
        }
        self
    }

    /// Looks up a sanitizer by name.
    pub fn get(&self, name: &str) -> Option<&Sanitizer> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Color sanitizer tests
    // =========================================================================

    #[test]
    fn test_color_hex_6_digit() {
        assert_eq!(Sanitizer::Color.sanitize("#ff6b35"), "#ff6b35");
        assert_eq!(Sanitizer::Color.sanitize("#444444"), "#444444");
    }

    #[test]
    fn test_color_hex_3_digit() {
        assert_eq!(Sanitizer::Color.sanitize("#fff"), "#fff");
        assert_eq!(Sanitizer::Color.sanitize("#f80"), "#f80");
    }

    #[test]
    fn test_color_hex_invalid() {
        assert_eq!(Sanitizer::Color.sanitize("#ff"), "");
        assert_eq!(Sanitizer::Color.sanitize("#ffff"), "");
        assert_eq!(Sanitizer::Color.sanitize("#gggggg"), "");
    }

    #[test]
    fn test_color_rgb() {
        assert_eq!(
            Sanitizer::Color.sanitize("rgb(255, 107, 53)"),
            "rgb(255, 107, 53)"
        );
        assert_eq!(Sanitizer::Color.sanitize("rgb(0,0,0)"), "rgb(0,0,0)");
    }

    #[test]
    fn test_color_rgba() {
        assert_eq!(
            Sanitizer::Color.sanitize("rgba(238,238,238,1)"),
            "rgba(238,238,238,1)"
        );
        assert_eq!(
            Sanitizer::Color.sanitize("rgba(50, 50, 50, 0.8)"),
            "rgba(50, 50, 50, 0.8)"
        );
    }

    #[test]
    fn test_color_rgba_out_of_range() {
        assert_eq!(Sanitizer::Color.sanitize("rgba(256,0,0,1)"), "");
        assert_eq!(Sanitizer::Color.sanitize("rgba(0,0,0,1.5)"), "");
        assert_eq!(Sanitizer::Color.sanitize("rgba(0,0,0,-0.1)"), "");
    }

    #[test]
    fn test_color_rgb_wrong_arity() {
        assert_eq!(Sanitizer::Color.sanitize("rgb(1,2)"), "");
        assert_eq!(Sanitizer::Color.sanitize("rgb(1,2,3,4)"), "");
        assert_eq!(Sanitizer::Color.sanitize("rgba(1,2,3)"), "");
    }

    #[test]
    fn test_color_named_rejected() {
        // Named colors are a stylesheet concern; operator input is not.
        assert_eq!(Sanitizer::Color.sanitize("red"), "");
        assert_eq!(Sanitizer::Color.sanitize("inherit"), "");
    }

    #[test]
    fn test_color_trims() {
        assert_eq!(Sanitizer::Color.sanitize("  #fff "), "#fff");
    }

    #[test]
    fn test_color_empty_passes_through() {
        assert_eq!(Sanitizer::Color.sanitize(""), "");
    }

    #[test]
    fn test_color_fixed_point() {
        for raw in ["#ff6b35", "rgba(0, 1, 2, 0.5)", "junk", "", "  #abc "] {
            let once = Sanitizer::Color.sanitize(raw);
            assert_eq!(Sanitizer::Color.sanitize(&once), once);
        }
    }

    // =========================================================================
    // Number sanitizer tests
    // =========================================================================

    #[test]
    fn test_number_plain() {
        assert_eq!(Sanitizer::Number.sanitize("588"), "588");
        assert_eq!(Sanitizer::Number.sanitize("26.5"), "26.5");
    }

    #[test]
    fn test_number_strips_units() {
        assert_eq!(Sanitizer::Number.sanitize("26.5px"), "26.5");
        assert_eq!(Sanitizer::Number.sanitize("  1400 px "), "1400");
    }

    #[test]
    fn test_number_negative() {
        assert_eq!(Sanitizer::Number.sanitize("-12"), "-12");
        // Minus only counts in leading position.
        assert_eq!(Sanitizer::Number.sanitize("12-4"), "124");
    }

    #[test]
    fn test_number_no_clamping() {
        // Out-of-range values pass through; bounds belong to the control hint.
        assert_eq!(Sanitizer::Number.sanitize("99999"), "99999");
    }

    #[test]
    fn test_number_second_point_dropped() {
        assert_eq!(Sanitizer::Number.sanitize("1.2.3"), "1.23");
    }

    #[test]
    fn test_number_no_digits() {
        assert_eq!(Sanitizer::Number.sanitize("px"), "");
        assert_eq!(Sanitizer::Number.sanitize("-"), "");
        assert_eq!(Sanitizer::Number.sanitize("."), "");
        assert_eq!(Sanitizer::Number.sanitize(""), "");
    }

    // =========================================================================
    // Choice sanitizer tests
    // =========================================================================

    #[test]
    fn test_choice_member() {
        let s = Sanitizer::choice(&[("right", "Right"), ("left", "Left")]);
        assert_eq!(s.sanitize("right"), "right");
        assert_eq!(s.sanitize("left"), "left");
    }

    #[test]
    fn test_choice_non_member() {
        let s = Sanitizer::choice(&[("yes", "Yes"), ("no", "No")]);
        assert_eq!(s.sanitize("maybe"), "");
        assert_eq!(s.sanitize("Yes"), "");
    }

    #[test]
    fn test_choice_keys() {
        let s = Sanitizer::choice(&[("100", "Thin"), ("400", "Normal")]);
        assert_eq!(s.choice_keys(), Some(vec!["100", "400"]));
        assert_eq!(Sanitizer::Number.choice_keys(), None);
    }

    // =========================================================================
    // Checkbox sanitizer tests
    // =========================================================================

    #[test]
    fn test_checkbox_verbatim() {
        assert_eq!(Sanitizer::Checkbox.sanitize("on"), "on");
        assert_eq!(Sanitizer::Checkbox.sanitize("false"), "false");
        assert_eq!(Sanitizer::Checkbox.sanitize("anything"), "anything");
    }

    // =========================================================================
    // Attribute escaping tests
    // =========================================================================

    #[test]
    fn test_attribute_escapes_specials() {
        assert_eq!(
            escape_attribute(r#"<a href="x">"#),
            "&lt;a href=&quot;x&quot;&gt;"
        );
        assert_eq!(escape_attribute("it's"), "it&#039;s");
    }

    #[test]
    fn test_attribute_escapes_bare_ampersand() {
        assert_eq!(escape_attribute("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attribute_keeps_entities() {
        assert_eq!(escape_attribute("a &amp; b"), "a &amp; b");
        assert_eq!(escape_attribute("&#039;"), "&#039;");
    }

    #[test]
    fn test_attribute_fixed_point() {
        for raw in ["a & b", "<b>", "plain", "#323232 0px 0px 5px", "&"] {
            let once = escape_attribute(raw);
            assert_eq!(escape_attribute(&once), once);
        }
    }

    #[test]
    fn test_attribute_plain_text_unchanged() {
        assert_eq!(
            escape_attribute("#323232 0px 0px 5px"),
            "#323232 0px 0px 5px"
        );
    }

    // =========================================================================
    // Registry tests
    // =========================================================================

    #[test]
    fn test_builtin_registry_names() {
        let reg = SanitizerRegistry::builtin();
        for name in [
            names::COLOR,
            names::NUMBER,
            names::CHECKBOX,
            names::ATTRIBUTE,
            names::TEXT,
            names::CODE,
        ] {
            assert!(reg.get(name).is_some(), "missing builtin '{}'", name);
        }
    }

    #[test]
    fn test_register_last_write_wins() {
        let reg = SanitizerRegistry::new()
            .register("x", Sanitizer::Number)
            .register("x", Sanitizer::Checkbox);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("x"), Some(&Sanitizer::Checkbox));
    }

    #[test]
    fn test_unknown_lookup() {
        assert!(SanitizerRegistry::builtin().get("nope").is_none());
    }

    #[test]
    fn test_accepts_default() {
        assert!(Sanitizer::Color.accepts_default("#444444"));
        assert!(Sanitizer::Color.accepts_default(""));
        assert!(!Sanitizer::Color.accepts_default("not-a-color"));
        assert!(Sanitizer::Number.accepts_default("588"));
        assert!(!Sanitizer::Number.accepts_default("588px"));
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Sanitizing accepted color output again is a fixed point.
        #[test]
        fn color_fixed_point(raw in "\\PC{0,24}") {
            let once = Sanitizer::Color.sanitize(&raw);
            prop_assert_eq!(Sanitizer::Color.sanitize(&once), once);
        }

        /// Number output is either empty or a parseable decimal.
        #[test]
        fn number_output_is_decimal(raw in "\\PC{0,24}") {
            let out = Sanitizer::Number.sanitize(&raw);
            if !out.is_empty() {
                prop_assert!(out.parse::<f64>().is_ok(), "unparseable: {:?}", out);
            }
        }

        /// Attribute escaping is idempotent on arbitrary input.
        #[test]
        fn attribute_escape_idempotent(raw in "\\PC{0,32}") {
            let once = escape_attribute(&raw);
            prop_assert_eq!(escape_attribute(&once), once);
        }

        /// Valid rgba strings always survive.
        #[test]
        fn rgba_in_range_accepted(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u32..=10) {
            let raw = format!("rgba({}, {}, {}, 0.{})", r, g, b, a);
            prop_assert_eq!(Sanitizer::Color.sanitize(&raw), raw);
        }
    }
}
