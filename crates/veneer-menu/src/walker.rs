//! The recursive menu tree walker.
//!
//! Each node renders as `open <li> → anchor → children at depth+1 → close
//! </li>`; a node with no children produces no child list element at all.
//! Class and identity pipelines are pure value transforms routed through the
//! renderer's [`MenuFilters`], so callers can extend per-item output without
//! touching the walk itself.
//!
//! # Example
//!
//! ```rust
//! use veneer_menu::{MenuNode, MenuRenderer, RenderContext};
//!
//! let tree = vec![
//!     MenuNode::new(1, "Home", "/"),
//!     MenuNode::new(2, "Shop", "/shop")
//!         .child(MenuNode::new(3, "Sale", "/shop/sale")),
//! ];
//!
//! let html = MenuRenderer::new().render(&tree, &RenderContext::default());
//! assert!(html.contains(r#"<a class="navbar-menu-link" href="/shop">Shop</a>"#));
//! assert!(html.contains(r#"<ul class="sub-menu">"#));
//! ```

use crate::escape::{escape_attr, escape_html};
use crate::filters::MenuFilters;
use crate::node::MenuNode;

/// Fixed class every rendered item carries, alongside its identity class.
pub const ITEM_CLASS: &str = "item";

/// Fixed class on every rendered anchor.
pub const ANCHOR_CLASS: &str = "navbar-menu-link";

/// Caller-supplied wrapping strings for anchors and labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub before_anchor: String,
    pub after_anchor: String,
    pub before_label: String,
    pub after_label: String,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_anchor(mut self, s: impl Into<String>) -> Self {
        self.before_anchor = s.into();
        self
    }

    pub fn after_anchor(mut self, s: impl Into<String>) -> Self {
        self.after_anchor = s.into();
        self
    }

    pub fn before_label(mut self, s: impl Into<String>) -> Self {
        self.before_label = s.into();
        self
    }

    pub fn after_label(mut self, s: impl Into<String>) -> Self {
        self.after_label = s.into();
        self
    }
}

/// Renders a host-supplied menu tree into nested list markup.
pub struct MenuRenderer {
    filters: MenuFilters,
    max_depth: usize,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRenderer {
    pub fn new() -> Self {
        Self {
            filters: MenuFilters::new(),
            max_depth: 16,
        }
    }

    /// Attaches extension filters, returning `self` for chaining.
    pub fn with_filters(mut self, filters: MenuFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Overrides the defensive recursion limit (default 16 levels).
    ///
    /// The host guarantees a finite, acyclic tree; the guard only bounds the
    /// damage of a malformed one.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Renders the items of `nodes` without an outer list element; the host
    /// template supplies the wrapper.
    pub fn render(&self, nodes: &[MenuNode], ctx: &RenderContext) -> String {
        let mut out = String::new();
        for node in nodes {
            self.render_node(&mut out, node, 0, ctx);
        }
        out
    }

    /// Renders `nodes` wrapped in a `<ul>` carrying `list_class`.
    pub fn render_wrapped(&self, nodes: &[MenuNode], ctx: &RenderContext, list_class: &str) -> String {
        let mut out = String::new();
        out.push_str("<ul class=\"");
        out.push_str(&escape_attr(list_class));
        out.push_str("\">\n");
        for node in nodes {
            self.render_node(&mut out, node, 0, ctx);
        }
        out.push_str("</ul>\n");
        out
    }

    fn render_node(&self, out: &mut String, node: &MenuNode, depth: usize, ctx: &RenderContext) {
        let indent = "\t".repeat(depth);

        let mut item = String::with_capacity(64);
        item.push_str(&indent);
        item.push_str("<li");

        let id_value = self
            .filters
            .run_item_id(format!("menu-item-{}", node.id), node);
        if !id_value.is_empty() {
            item.push_str(" id=\"");
            item.push_str(&escape_attr(&id_value));
            item.push('"');
        }

        let classes = self.assemble_classes(node, depth);
        if !classes.is_empty() {
            item.push_str(" class=\"");
            item.push_str(&escape_attr(&classes.join(" ")));
            item.push('"');
        }
        item.push('>');

        item.push_str(&ctx.before_anchor);
        item.push_str("<a class=\"");
        item.push_str(ANCHOR_CLASS);
        item.push('"');
        push_attr(&mut item, "title", &node.attrs.title);
        push_attr(&mut item, "target", &node.attrs.target);
        push_attr(&mut item, "rel", &node.attrs.rel);
        push_attr(&mut item, "href", &node.url);
        item.push('>');

        item.push_str(&ctx.before_label);
        let label = self.filters.run_label(escape_html(&node.label), node);
        item.push_str(&label);
        item.push_str(&ctx.after_label);

        item.push_str("</a>");
        item.push_str(&ctx.after_anchor);

        let item = self.filters.run_item_markup(item, node, depth);
        out.push_str(&item);

        if !node.children.is_empty() {
            if depth >= self.max_depth {
                tracing::warn!(
                    id = node.id,
                    depth,
                    "menu deeper than guard, pruning subtree"
                );
            } else {
                out.push('\n');
                out.push_str(&indent);
                out.push_str("<ul class=\"sub-menu\">\n");
                for child in &node.children {
                    self.render_node(out, child, depth + 1, ctx);
                }
                out.push_str(&indent);
                out.push_str("</ul>\n");
                out.push_str(&indent);
            }
        }
        out.push_str("</li>\n");
    }

    /// Host classes + identity class + fixed class, deduplicated in first-
    /// occurrence order, then through the class filter chain.
    fn assemble_classes(&self, node: &MenuNode, depth: usize) -> Vec<String> {
        let mut classes: Vec<String> = Vec::with_capacity(node.raw_classes.len() + 2);
        for class in &node.raw_classes {
            if !class.is_empty() && !classes.contains(class) {
                classes.push(class.clone());
            }
        }
        let identity = format!("menu-item-{}", node.id);
        if !classes.contains(&identity) {
            classes.push(identity);
        }
        let fixed = ITEM_CLASS.to_string();
        if !classes.contains(&fixed) {
            classes.push(fixed);
        }
        self.filters.run_item_classes(classes, node, depth)
    }
}

/// Appends ` name="escaped"` only when `value` is non-empty.
fn push_attr(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::MenuAttrs;

    fn render(nodes: &[MenuNode]) -> String {
        MenuRenderer::new().render(nodes, &RenderContext::default())
    }

    // =========================================================================
    // Tree shape tests
    // =========================================================================

    #[test]
    fn test_three_level_tree_shape() {
        // root → {A, B{C}}
        let tree = vec![
            MenuNode::new(1, "A", "/a"),
            MenuNode::new(2, "B", "/b").child(MenuNode::new(3, "C", "/b/c")),
        ];
        let html = render(&tree);

        // Two items at depth 0, one nested list under B with one item for C.
        assert_eq!(html.matches("<li").count(), 3);
        assert_eq!(html.matches("<ul class=\"sub-menu\">").count(), 1);
        assert_eq!(html.matches("\t<li").count(), 1);

        let b_at = html.find("menu-item-2").unwrap();
        let sub_at = html.find("<ul class=\"sub-menu\">").unwrap();
        let c_at = html.find("menu-item-3").unwrap();
        assert!(b_at < sub_at && sub_at < c_at);
    }

    #[test]
    fn test_leaf_has_no_empty_list() {
        let html = render(&[MenuNode::new(1, "A", "/a")]);
        assert!(!html.contains("<ul"));
        assert!(html.ends_with("</li>\n"));
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_depth_guard_prunes() {
        // A degenerate chain deeper than the guard renders without panicking.
        let mut node = MenuNode::new(100, "deep", "/");
        for id in (1..40u64).rev() {
            node = MenuNode::new(id, format!("n{}", id), "/").child(node);
        }
        let html = MenuRenderer::new().max_depth(5).render(
            std::slice::from_ref(&node),
            &RenderContext::default(),
        );
        // Guard at 5: depths 0..=5 render, the rest are pruned.
        assert_eq!(html.matches("<li").count(), 6);
    }

    // =========================================================================
    // Anchor attribute tests
    // =========================================================================

    #[test]
    fn test_anchor_with_url() {
        let html = render(&[MenuNode::new(1, "X", "https://x")]);
        assert!(html.contains(r#"<a class="navbar-menu-link" href="https://x">X</a>"#));
    }

    #[test]
    fn test_linkless_anchor_has_no_href() {
        let html = render(&[MenuNode::new(1, "Jump", "")]);
        assert!(html.contains(r#"<a class="navbar-menu-link">Jump</a>"#));
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_url_escaped_for_attribute() {
        let html = render(&[MenuNode::new(1, "X", r#"https://x?a=1&b="2""#)]);
        assert!(html.contains(r#"href="https://x?a=1&amp;b=&quot;2&quot;""#));
    }

    #[test]
    fn test_optional_attrs_present_only_when_set() {
        let node = MenuNode::new(1, "X", "/x").attrs(MenuAttrs {
            title: "The X".into(),
            target: "_blank".into(),
            rel: String::new(),
        });
        let html = render(&[node]);
        assert!(html.contains(r#" title="The X""#));
        assert!(html.contains(r#" target="_blank""#));
        assert!(!html.contains(" rel="));
    }

    #[test]
    fn test_attr_order_matches_walk() {
        let node = MenuNode::new(1, "X", "/x").attrs(MenuAttrs {
            title: "t".into(),
            target: "_blank".into(),
            rel: "noopener".into(),
        });
        let html = render(&[node]);
        assert!(html.contains(
            r#"<a class="navbar-menu-link" title="t" target="_blank" rel="noopener" href="/x">"#
        ));
    }

    // =========================================================================
    // Class and id pipeline tests
    // =========================================================================

    #[test]
    fn test_class_union() {
        let node = MenuNode::new(9, "X", "/x").class("featured").class("wide");
        let html = render(&[node]);
        assert!(html.contains(r#"class="featured wide menu-item-9 item""#));
    }

    #[test]
    fn test_class_union_dedups() {
        let node = MenuNode::new(9, "X", "/x").class("item").class("item");
        let html = render(&[node]);
        assert!(html.contains(r#"class="item menu-item-9""#));
    }

    #[test]
    fn test_empty_host_classes_skipped() {
        let node = MenuNode::new(9, "X", "/x").class("");
        let html = render(&[node]);
        assert!(html.contains(r#"class="menu-item-9 item""#));
    }

    #[test]
    fn test_class_filter_applies() {
        let filters = MenuFilters::new().item_classes(|mut classes, _, _| {
            classes.push("injected".into());
            classes
        });
        let html = MenuRenderer::new()
            .with_filters(filters)
            .render(&[MenuNode::new(1, "X", "/x")], &RenderContext::default());
        assert!(html.contains(r#"class="menu-item-1 item injected""#));
    }

    #[test]
    fn test_id_attribute_and_filter() {
        let html = render(&[MenuNode::new(42, "X", "/x")]);
        assert!(html.contains(r#"id="menu-item-42""#));

        let filters = MenuFilters::new().item_id(|_, _| String::new());
        let html = MenuRenderer::new()
            .with_filters(filters)
            .render(&[MenuNode::new(42, "X", "/x")], &RenderContext::default());
        assert!(!html.contains(" id="));
    }

    // =========================================================================
    // Label and context tests
    // =========================================================================

    #[test]
    fn test_label_escaped() {
        let html = render(&[MenuNode::new(1, "Fish & Chips <now>", "/f")]);
        assert!(html.contains(">Fish &amp; Chips &lt;now&gt;</a>"));
    }

    #[test]
    fn test_label_filter_after_escaping() {
        let filters = MenuFilters::new().label(|l, _| format!("<span>{}</span>", l));
        let html = MenuRenderer::new()
            .with_filters(filters)
            .render(&[MenuNode::new(1, "A & B", "/")], &RenderContext::default());
        // The filter may inject markup; the original text stays escaped.
        assert!(html.contains("<span>A &amp; B</span>"));
    }

    #[test]
    fn test_context_wrapping() {
        let ctx = RenderContext::new()
            .before_anchor("<div class=\"slot\">")
            .after_anchor("</div>")
            .before_label("[")
            .after_label("]");
        let html = MenuRenderer::new().render(&[MenuNode::new(1, "X", "/x")], &ctx);
        assert!(html.contains("<div class=\"slot\"><a"));
        assert!(html.contains(">[X]</a></div>"));
    }

    #[test]
    fn test_item_markup_filter() {
        let filters =
            MenuFilters::new().item_markup(|item, _, depth| format!("{}<!--d{}-->", item, depth));
        let html = MenuRenderer::new()
            .with_filters(filters)
            .render(&[MenuNode::new(1, "X", "/x")], &RenderContext::default());
        assert!(html.contains("</a><!--d0-->"));
    }

    #[test]
    fn test_render_wrapped() {
        let html = MenuRenderer::new().render_wrapped(
            &[MenuNode::new(1, "X", "/x")],
            &RenderContext::default(),
            "navbar-menu main",
        );
        assert!(html.starts_with("<ul class=\"navbar-menu main\">\n"));
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn test_nodes_not_mutated() {
        let tree = vec![MenuNode::new(2, "B", "/b").child(MenuNode::new(3, "C", "/b/c"))];
        let before = tree.clone();
        let _ = render(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_deterministic() {
        let tree = vec![
            MenuNode::new(1, "A", "/a").class("x"),
            MenuNode::new(2, "B", "/b").child(MenuNode::new(3, "C", "/b/c")),
        ];
        assert_eq!(render(&tree), render(&tree));
    }
}
