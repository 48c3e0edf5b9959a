//! # Veneer Menu - Navigation Tree Rendering
//!
//! `veneer-menu` renders a host-supplied navigation tree into nested list
//! markup. It is independent of the settings machinery: input is a read-only
//! [`MenuNode`] tree plus a [`RenderContext`] of wrapping strings, output is
//! deterministic HTML text.
//!
//! ## Core Concepts
//!
//! - [`MenuNode`]: one item — id, label, url, optional anchor attributes,
//!   host classes, ordered children
//! - [`MenuRenderer`]: the recursive walker; one nesting level per depth,
//!   no child list element for childless nodes
//! - [`MenuFilters`]: explicit ordered transform chains at the class, id,
//!   label and item-markup extension points
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer_menu::{MenuFilters, MenuNode, MenuRenderer, RenderContext};
//!
//! let tree = vec![
//!     MenuNode::new(1, "Home", "/"),
//!     MenuNode::new(2, "Shop", "/shop")
//!         .child(MenuNode::new(3, "Sale", "/shop/sale")),
//! ];
//!
//! let renderer = MenuRenderer::new().with_filters(
//!     MenuFilters::new().item_classes(|mut classes, _node, depth| {
//!         if depth == 0 {
//!             classes.push("top-level".to_string());
//!         }
//!         classes
//!     }),
//! );
//!
//! let html = renderer.render_wrapped(&tree, &RenderContext::default(), "navbar-menu");
//! assert!(html.contains("top-level"));
//! assert!(html.contains(r#"<ul class="sub-menu">"#));
//! ```

pub mod escape;
pub mod filters;
pub mod node;
pub mod walker;

pub use escape::{escape_attr, escape_html};
pub use filters::{ClassesFilterFn, IdFilterFn, LabelFilterFn, MarkupFilterFn, MenuFilters};
pub use node::{MenuAttrs, MenuNode};
pub use walker::{MenuRenderer, RenderContext, ANCHOR_CLASS, ITEM_CLASS};
