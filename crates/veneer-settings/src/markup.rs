//! Allow-list markup filtering for short formatted strings.
//!
//! Text-block settings accept a little markup — a link, an emphasis span, a
//! line break — but nothing that could smuggle script into the page. The
//! filter walks the input once, keeps tags on the allow-list with only their
//! allowed attributes, and drops every other tag while preserving its inner
//! text. This is the one sanitizer with a security contract: output never
//! contains a tag or attribute outside the allow-list.
//!
//! # Example
//!
//! ```rust
//! use veneer_settings::markup::{sanitize_markup, AllowedTags};
//!
//! let allowed = AllowedTags::short_text();
//! assert_eq!(
//!     sanitize_markup(r#"<strong onclick="evil()">Hi</strong>"#, &allowed),
//!     "<strong>Hi</strong>",
//! );
//! assert_eq!(
//!     sanitize_markup("<script>alert(1)</script>", &allowed),
//!     "alert(1)",
//! );
//! ```

use once_cell::sync::Lazy;

use crate::sanitize::escape_attribute;

/// Shared instance of the short-text allow-list.
static SHORT_TEXT: Lazy<AllowedTags> = Lazy::new(|| {
    AllowedTags::new()
        .allow("a", &["href", "title", "target", "class", "id"])
        .allow("span", &["class", "id"])
        .allow("br", &[])
        .allow("em", &[])
        .allow("strong", &[])
});

/// The markup allow-list: tag names and the attributes each may carry.
///
/// Lookups are case-insensitive; kept markup is normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedTags {
    tags: Vec<(String, Vec<String>)>,
}

impl AllowedTags {
    /// Creates an empty allow-list (rejects all tags).
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows `tag` with the given attribute names, replacing any earlier
    /// entry for the same tag.
    pub fn allow(mut self, tag: &str, attrs: &[&str]) -> Self {
        let tag = tag.to_ascii_lowercase();
        let attrs: Vec<String> = attrs.iter().map(|a| a.to_ascii_lowercase()).collect();
        if let Some(entry) = self.tags.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 = attrs;
        } else {
            self.tags.push((tag, attrs));
        }
        self
    }

    /// The allow-list used for operator-editable text blocks: inline
    /// formatting plus anchors, nothing that can carry script.
    pub fn short_text() -> Self {
        SHORT_TEXT.clone()
    }

    /// Allowed attributes for `tag`, or `None` if the tag is disallowed.
    pub fn attributes_for(&self, tag: &str) -> Option<&[String]> {
        let tag = tag.to_ascii_lowercase();
        self.tags
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, attrs)| attrs.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Filters `raw` against `allowed`, returning markup that only contains
/// allowed tags and attributes.
///
/// Disallowed tags are stripped but their inner text is kept. A `<` that
/// never closes is escaped rather than dropped. Kept tags are re-serialized
/// in normalized form (lowercase names, double-quoted attribute values), so
/// filtering its own output is a fixed point.
pub fn sanitize_markup(raw: &str, allowed: &AllowedTags) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            let start = i;
            while i < bytes.len() && bytes[i] != b'<' {
                i += 1;
            }
            out.push_str(&raw[start..i]);
            continue;
        }
        match find_tag_end(bytes, i) {
            None => {
                // Unterminated tag open; neutralize it and treat the rest as text.
                out.push_str("&lt;");
                i += 1;
            }
            Some(end) => {
                let inner = &raw[i + 1..end];
                emit_tag(inner, allowed, &mut out);
                i = end + 1;
            }
        }
    }
    out
}

/// Finds the index of the `>` closing the tag that opens at `start`,
/// honoring quoted attribute values that may contain `>`.
fn find_tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, &b) in bytes[start + 1..].iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(start + 1 + offset),
                _ => {}
            },
        }
    }
    None
}

/// Re-serializes one tag body (the text between `<` and `>`) if allowed.
fn emit_tag(inner: &str, allowed: &AllowedTags, out: &mut String) {
    let inner = inner.trim();
    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim().to_ascii_lowercase();
        if allowed.attributes_for(&name).is_some() {
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
        return;
    }

    let name_len = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    if name_len == 0 {
        // Comments, doctypes, or garbage like `<3` — dropped entirely.
        return;
    }
    let name = inner[..name_len].to_ascii_lowercase();
    let Some(allowed_attrs) = allowed.attributes_for(&name) else {
        return;
    };

    let (attrs, self_closing) = parse_attributes(&inner[name_len..]);
    out.push('<');
    out.push_str(&name);
    for (attr_name, value) in attrs {
        if !allowed_attrs.iter().any(|a| *a == attr_name) {
            continue;
        }
        out.push(' ');
        out.push_str(&attr_name);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&escape_attribute(&value));
            out.push('"');
        }
    }
    if self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

/// Parses `name="value"` / `name='value'` / `name=value` / bare-name tokens.
///
/// Returns the attributes in source order plus whether the tag body ended
/// with a self-closing slash.
fn parse_attributes(rest: &str) -> (Vec<(String, Option<String>)>, bool) {
    let mut attrs = Vec::new();
    let mut chars = rest.char_indices().peekable();
    let bytes = rest.as_bytes();
    let mut self_closing = false;

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '/' {
            // Only counts as self-closing when it terminates the body.
            if rest[idx + 1..].trim().is_empty() {
                self_closing = true;
                break;
            }
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            continue;
        }

        let name_start = idx;
        let mut name_end = idx + c.len_utf8();
        while let Some(&(j, cc)) = chars.peek() {
            if cc.is_ascii_alphanumeric() || cc == '-' || cc == '_' {
                chars.next();
                name_end = j + cc.len_utf8();
            } else {
                break;
            }
        }
        let attr_name = rest[name_start..name_end].to_ascii_lowercase();

        while chars.peek().is_some_and(|&(_, cc)| cc.is_whitespace()) {
            chars.next();
        }
        if chars.peek().map(|&(_, cc)| cc) != Some('=') {
            attrs.push((attr_name, None));
            continue;
        }
        chars.next(); // consume '='
        while chars.peek().is_some_and(|&(_, cc)| cc.is_whitespace()) {
            chars.next();
        }

        let value = match chars.peek().map(|&(_, cc)| cc) {
            Some(q @ ('"' | '\'')) => {
                let (vstart, _) = chars.next().unwrap();
                let content_start = vstart + 1;
                let mut content_end = rest.len();
                for (j, _) in chars.by_ref() {
                    if bytes[j] == q as u8 {
                        content_end = j;
                        break;
                    }
                }
                rest[content_start..content_end.min(rest.len())].to_string()
            }
            _ => {
                let vstart = chars.peek().map(|&(j, _)| j).unwrap_or(rest.len());
                let mut vend = rest.len();
                while let Some(&(j, cc)) = chars.peek() {
                    if cc.is_whitespace() {
                        vend = j;
                        break;
                    }
                    chars.next();
                    vend = j + cc.len_utf8();
                }
                rest[vstart..vend].to_string()
            }
        };
        attrs.push((attr_name, Some(value)));
    }

    (attrs, self_closing)
}
