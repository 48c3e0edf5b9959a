//! Menu renderer behavior through the facade.

use veneer::menu::{MenuAttrs, MenuFilters, MenuNode, MenuRenderer, RenderContext};

fn render(nodes: &[MenuNode]) -> String {
    MenuRenderer::new().render(nodes, &RenderContext::default())
}

#[test]
fn three_level_tree_nests_once_under_b() {
    // root → {A, B{C}}
    let tree = vec![
        MenuNode::new(1, "A", "/a"),
        MenuNode::new(2, "B", "/b").child(MenuNode::new(3, "C", "/b/c")),
    ];
    let html = render(&tree);

    // Exactly two items at depth 0 (no indentation), one nested list under
    // B containing C, and no nested list under A or C.
    assert_eq!(html.matches("<li").count(), 3);
    assert_eq!(
        html.matches("\n<li").count() + (html.starts_with("<li") as usize),
        2
    );
    assert_eq!(html.matches("<ul class=\"sub-menu\">").count(), 1);
    assert_eq!(html.matches("\t<li").count(), 1);
    assert!(html.contains("menu-item-3"));
}

#[test]
fn empty_url_renders_linkless_anchor() {
    let html = render(&[MenuNode::new(5, "Section Jump", "")]);
    assert!(html.contains(r#"<a class="navbar-menu-link">Section Jump</a>"#));
    assert!(!html.contains("href"));
}

#[test]
fn url_is_attribute_escaped() {
    let html = render(&[MenuNode::new(5, "X", "https://x/?q=\"a\"&r=1")]);
    assert!(html.contains(r#"href="https://x/?q=&quot;a&quot;&amp;r=1""#));
}

#[test]
fn classes_combine_host_identity_and_fixed() {
    let node = MenuNode::new(9, "Docs", "/docs").class("current-page");
    let html = render(&[node]);
    assert!(html.contains(r#"class="current-page menu-item-9 item""#));
}

#[test]
fn filters_extend_without_altering_walk() {
    let filters = MenuFilters::new()
        .item_classes(|mut classes, _, depth| {
            classes.push(format!("depth-{}", depth));
            classes
        })
        .label(|label, node| format!("{} ({})", label, node.id));
    let tree = vec![MenuNode::new(1, "Top", "/").child(MenuNode::new(2, "Sub", "/s"))];
    let html = MenuRenderer::new()
        .with_filters(filters)
        .render(&tree, &RenderContext::default());

    assert!(html.contains("depth-0"));
    assert!(html.contains("depth-1"));
    assert!(html.contains(">Top (1)</a>"));
    assert!(html.contains(">Sub (2)</a>"));
    // Still exactly one sub-menu list.
    assert_eq!(html.matches("<ul class=\"sub-menu\">").count(), 1);
}

#[test]
fn context_wraps_anchor_and_label() {
    let ctx = RenderContext::new()
        .before_anchor("<span class=\"pill\">")
        .after_anchor("</span>");
    let html = MenuRenderer::new().render(&[MenuNode::new(1, "X", "/x")], &ctx);
    assert!(html.contains("<span class=\"pill\"><a class=\"navbar-menu-link\""));
    assert!(html.contains("</a></span>"));
}

#[test]
fn attributes_only_when_present() {
    let with_attrs = MenuNode::new(1, "Ext", "https://e").attrs(MenuAttrs {
        title: "External".into(),
        target: "_blank".into(),
        rel: "noopener".into(),
    });
    let html = render(&[with_attrs]);
    assert!(html.contains(r#" title="External" target="_blank" rel="noopener" href="https://e""#));

    let html = render(&[MenuNode::new(2, "Plain", "/p")]);
    assert!(!html.contains(" title="));
    assert!(!html.contains(" target="));
    assert!(!html.contains(" rel="));
}

#[test]
fn host_tree_json_round_trip() {
    let node = MenuNode::from_json(
        r#"{
            "id": 1,
            "label": "Shop",
            "url": "/shop",
            "raw_classes": ["featured"],
            "children": [
                {"id": 2, "label": "Sale", "url": "/shop/sale"},
                {"id": 3, "label": "New", "url": "/shop/new"}
            ]
        }"#,
    )
    .unwrap();
    let html = render(std::slice::from_ref(&node));
    assert!(html.contains("featured menu-item-1 item"));
    assert_eq!(html.matches("\t<li").count(), 2);
}
