//! Snapshot of the emitted head block for a representative customization.
//!
//! Determinism is a hard contract: the snapshot pins the exact bytes,
//! including fragment order and wrapper elements.

use veneer::catalog::{self, CatalogOptions};
use veneer::ValueStore;

#[test]
fn head_block_snapshot() {
    let theme = catalog::theme(&CatalogOptions::default()).build().unwrap();
    let store = ValueStore::from_pairs([
        ("cart_color", "#ff0000"),
        ("menu_main_align", "left"),
        ("custom_js", "console.log(\"veneer\");"),
    ]);
    let output = theme.render(&store).unwrap();

    insta::assert_snapshot!("head_with_overrides", output.head.trim_end());
    assert_eq!(output.footer, "console.log(\"veneer\");\n");

    // Same snapshot twice over: determinism at the byte level.
    let again = theme.render(&store).unwrap();
    assert_eq!(output.head, again.head);
}
