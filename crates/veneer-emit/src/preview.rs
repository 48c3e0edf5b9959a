//! Live-preview partial refresh routing.
//!
//! Inside the editing surface, changing a setting can either refresh one DOM
//! region or reload the whole preview frame. The [`PreviewBinder`] is the
//! routing table: settings with a bound selector refresh partially, all
//! others fall back to a full reload. This is purely a preview-surface
//! decision — it never affects the published page.
//!
//! # Example
//!
//! ```rust
//! use veneer_emit::{PreviewBinder, RefreshPlan};
//!
//! let binder = PreviewBinder::new().bind("tgtext-1", "#tgtext-1");
//!
//! assert_eq!(binder.refresh_plan("tgtext-1"), RefreshPlan::Partial("#tgtext-1"));
//! assert_eq!(binder.refresh_plan("cart_color"), RefreshPlan::FullReload);
//! ```

/// How the editing surface should apply one setting change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPlan<'a> {
    /// Re-render only the DOM subtree at this selector.
    Partial(&'a str),
    /// No binding exists; reload the whole preview.
    FullReload,
}

/// Maps setting keys to the DOM selector they affect.
///
/// Binding is idempotent by key (last write wins). Absence of a binding is
/// not an error — it just means "requires full reload to preview".
#[derive(Debug, Clone, Default)]
pub struct PreviewBinder {
    bindings: Vec<(String, String)>,
}

impl PreviewBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `setting` to `selector`, returning `self` for chaining.
    pub fn bind(mut self, setting: impl Into<String>, selector: impl Into<String>) -> Self {
        let setting = setting.into();
        let selector = selector.into();
        if let Some(entry) = self.bindings.iter_mut().find(|(s, _)| *s == setting) {
            entry.1 = selector;
        } else {
            self.bindings.push((setting, selector));
        }
        self
    }

    /// The bound selector for `setting`, if any.
    pub fn lookup(&self, setting: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(s, _)| s == setting)
            .map(|(_, sel)| sel.as_str())
    }

    /// The refresh decision for one changed setting.
    pub fn refresh_plan(&self, setting: &str) -> RefreshPlan<'_> {
        match self.lookup(setting) {
            Some(selector) => RefreshPlan::Partial(selector),
            None => RefreshPlan::FullReload,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
