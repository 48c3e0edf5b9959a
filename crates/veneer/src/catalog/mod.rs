//! The built-in settings catalog.
//!
//! [`theme`] assembles the full catalog — shop styles, layout, titles,
//! back-to-top widget, content slots, per-menu styling and the tracking
//! code hook — into one [`ThemeBuilder`]. The host can keep building on the
//! result (extra settings, extra rules) before calling `build()`.
//!
//! Content-slot and menu-slot counts are host decisions, so they arrive as
//! [`CatalogOptions`]; everything else is fixed by the catalog.
//!
//! # Example
//!
//! ```rust
//! use veneer::catalog::{self, CatalogOptions};
//!
//! let theme = catalog::theme(&CatalogOptions::default()).build().unwrap();
//! assert!(theme.registry().setting("cart_color").is_some());
//! assert!(theme.registry().setting("menu_main_text_color").is_some());
//! ```

mod back_to_top;
mod blocks;
mod choices;
mod layout;
mod menus;
mod shop;
mod titles;
mod tracking;

use crate::theme::ThemeBuilder;

/// Host-declared dimensions of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Number of editable text blocks (`tgtext-1..n`).
    pub text_blocks: usize,
    /// Number of replaceable images (`tgimg-1..n`).
    pub images: usize,
    /// Number of editable links (`tglink-1..n`).
    pub links: usize,
    /// Number of replaceable background images (`tgback-1..n`).
    pub backgrounds: usize,
    /// Named navigation slots, each of which gets a full styling section.
    pub menu_slots: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            text_blocks: 12,
            images: 6,
            links: 6,
            backgrounds: 3,
            menu_slots: vec!["main".to_string()],
        }
    }
}

impl CatalogOptions {
    /// Replaces the menu slot list, returning `self` for chaining.
    pub fn menu_slots<S: Into<String>>(mut self, slots: impl IntoIterator<Item = S>) -> Self {
        self.menu_slots = slots.into_iter().map(Into::into).collect();
        self
    }
}

/// Builds the full catalog as a [`ThemeBuilder`].
pub fn theme(options: &CatalogOptions) -> ThemeBuilder {
    let mut builder = ThemeBuilder::new();
    builder = shop::install(builder);
    builder = layout::install(builder);
    builder = titles::install(builder);
    builder = back_to_top::install(builder);
    builder = blocks::install(
        builder,
        options.text_blocks,
        options.images,
        options.links,
        options.backgrounds,
    );
    builder = menus::install(builder, &options.menu_slots);
    builder = tracking::install(builder);
    builder
}
