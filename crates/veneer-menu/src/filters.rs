//! Extension filter points for menu rendering.
//!
//! Callers extend the walk without altering it: each filter point is an
//! explicit ordered list of pure transforms applied in registration order.
//! Every transform receives the value produced so far plus the node being
//! rendered, and returns the (possibly replaced) value — there is no shared
//! mutable state and no ambient event bus.
//!
//! # Filter Points
//!
//! - Item classes: runs on the assembled class list (host classes +
//!   identity class + fixed extension class) before joining.
//!   Use for: adding state classes, stripping host noise.
//! - Item id: runs on the computed identity attribute; an empty result
//!   drops the attribute.
//! - Label: runs on the escaped label text before wrapping.
//!   Use for: decoration, truncation, injecting badges.
//! - Item markup: runs on the finished item line before it is appended.
//!   Use for: wrapping, instrumentation.

use std::fmt;
use std::rc::Rc;

use crate::node::MenuNode;

/// Transform for the assembled class list of one item.
pub type ClassesFilterFn = Rc<dyn Fn(Vec<String>, &MenuNode, usize) -> Vec<String>>;

/// Transform for the identity attribute of one item.
pub type IdFilterFn = Rc<dyn Fn(String, &MenuNode) -> String>;

/// Transform for the (already escaped) label of one item.
pub type LabelFilterFn = Rc<dyn Fn(String, &MenuNode) -> String>;

/// Transform for the complete rendered item markup.
pub type MarkupFilterFn = Rc<dyn Fn(String, &MenuNode, usize) -> String>;

/// The filter chains attached to one renderer.
///
/// # Example
///
/// ```rust
/// use veneer_menu::MenuFilters;
///
/// let filters = MenuFilters::new()
///     .item_classes(|mut classes, _node, depth| {
///         if depth == 0 {
///             classes.push("top-level".to_string());
///         }
///         classes
///     })
///     .label(|label, _node| format!("» {}", label));
/// assert!(!filters.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MenuFilters {
    item_classes: Vec<ClassesFilterFn>,
    item_id: Vec<IdFilterFn>,
    label: Vec<LabelFilterFn>,
    item_markup: Vec<MarkupFilterFn>,
}

impl MenuFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.item_classes.is_empty()
            && self.item_id.is_empty()
            && self.label.is_empty()
            && self.item_markup.is_empty()
    }

    /// Adds a class-list transform.
    pub fn item_classes<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<String>, &MenuNode, usize) -> Vec<String> + 'static,
    {
        self.item_classes.push(Rc::new(f));
        self
    }

    /// Adds an identity-attribute transform.
    pub fn item_id<F>(mut self, f: F) -> Self
    where
        F: Fn(String, &MenuNode) -> String + 'static,
    {
        self.item_id.push(Rc::new(f));
        self
    }

    /// Adds a label transform.
    pub fn label<F>(mut self, f: F) -> Self
    where
        F: Fn(String, &MenuNode) -> String + 'static,
    {
        self.label.push(Rc::new(f));
        self
    }

    /// Adds a whole-item markup transform.
    pub fn item_markup<F>(mut self, f: F) -> Self
    where
        F: Fn(String, &MenuNode, usize) -> String + 'static,
    {
        self.item_markup.push(Rc::new(f));
        self
    }

    /// Runs the class-list chain.
    pub fn run_item_classes(
        &self,
        classes: Vec<String>,
        node: &MenuNode,
        depth: usize,
    ) -> Vec<String> {
        let mut current = classes;
        for filter in &self.item_classes {
            current = filter(current, node, depth);
        }
        current
    }

    /// Runs the identity-attribute chain.
    pub fn run_item_id(&self, id: String, node: &MenuNode) -> String {
        let mut current = id;
        for filter in &self.item_id {
            current = filter(current, node);
        }
        current
    }

    /// Runs the label chain.
    pub fn run_label(&self, label: String, node: &MenuNode) -> String {
        let mut current = label;
        for filter in &self.label {
            current = filter(current, node);
        }
        current
    }

    /// Runs the item-markup chain.
    pub fn run_item_markup(&self, markup: String, node: &MenuNode, depth: usize) -> String {
        let mut current = markup;
        for filter in &self.item_markup {
            current = filter(current, node, depth);
        }
        current
    }
}

impl fmt::Debug for MenuFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuFilters")
            .field("item_classes_count", &self.item_classes.len())
            .field("item_id_count", &self.item_id.len())
            .field("label_count", &self.label.len())
            .field("item_markup_count", &self.item_markup.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> MenuNode {
        MenuNode::new(1, "Home", "/")
    }

    #[test]
    fn test_empty_chains_pass_through() {
        let filters = MenuFilters::new();
        assert!(filters.is_empty());
        let classes = filters.run_item_classes(vec!["a".into()], &node(), 0);
        assert_eq!(classes, vec!["a"]);
        assert_eq!(filters.run_label("x".into(), &node()), "x");
    }

    #[test]
    fn test_chains_apply_in_order() {
        let filters = MenuFilters::new()
            .label(|l, _| format!("{}1", l))
            .label(|l, _| format!("{}2", l));
        assert_eq!(filters.run_label("x".into(), &node()), "x12");
    }

    #[test]
    fn test_classes_filter_can_remove() {
        let filters = MenuFilters::new().item_classes(|classes, _, _| {
            classes.into_iter().filter(|c| c != "drop-me").collect()
        });
        let out = filters.run_item_classes(
            vec!["keep".into(), "drop-me".into()],
            &node(),
            0,
        );
        assert_eq!(out, vec!["keep"]);
    }

    #[test]
    fn test_id_filter_can_clear() {
        let filters = MenuFilters::new().item_id(|_, _| String::new());
        assert_eq!(filters.run_item_id("menu-item-1".into(), &node()), "");
    }

    #[test]
    fn test_debug_shows_counts() {
        let filters = MenuFilters::new().label(|l, _| l);
        let dbg = format!("{:?}", filters);
        assert!(dbg.contains("label_count: 1"));
    }
}
