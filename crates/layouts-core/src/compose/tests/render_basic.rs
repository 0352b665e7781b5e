//! Basic folding tests for the compositor

use super::helpers::{blog_registry, titled_chain_registry};
use super::*;
use crate::document::Layout;
use crate::matcher::{LiteralMatcher, MatchFlags};

#[test]
fn test_render_blog_post() {
    let registry = blog_registry();
    let page = Page::new("Hello").with_layout("post");

    let rendered = render(&page, &registry, None).unwrap();
    assert_eq!(rendered.stack, vec!["base", "post"]);
    assert_eq!(rendered.content, "<html><article>Hello</article></html>");
    assert_eq!(rendered.original, "Hello");
    assert!(rendered.diagnostics.is_empty());
}

#[test]
fn test_render_without_layout_is_identity() {
    let registry = blog_registry();
    let page = Page::new("Just text").with_data("title", "Plain");

    let rendered = render(&page, &registry, None).unwrap();
    assert!(rendered.stack.is_empty());
    assert_eq!(rendered.content, "Just text");
    assert_eq!(rendered.metadata, page.metadata);
}

#[test]
fn test_render_negative_layout_is_identity() {
    let registry = blog_registry();

    for negative in ["none", "false", "nil", "null"] {
        let page = Page::new("Hello").with_layout(negative);
        let rendered = render(&page, &registry, None).unwrap();
        assert!(rendered.stack.is_empty(), "{} should not resolve", negative);
        assert_eq!(rendered.content, "Hello");
    }

    let page = Page::new("Hello").with_layout(false);
    assert_eq!(render(&page, &registry, None).unwrap().content, "Hello");
}

#[test]
fn test_render_three_levels() {
    let registry = titled_chain_registry();
    let page = Page::new("page").with_layout("a");

    let rendered = render(&page, &registry, None).unwrap();
    assert_eq!(rendered.stack, vec!["c", "b", "a"]);
    assert_eq!(rendered.content, "C(B(A(page)))");
}

#[test]
fn test_ancestor_content_appears_verbatim_once() {
    let registry = titled_chain_registry();
    let page = Page::new("page").with_layout("a");

    let content = render(&page, &registry, None).unwrap().content;
    assert_eq!(content.matches("C(").count(), 1);
    assert_eq!(content.matches("B(").count(), 1);
    assert_eq!(content.matches("A(").count(), 1);
    assert!(!content.contains("body"));
}

#[test]
fn test_page_content_is_inserted_literally() {
    let registry = blog_registry();
    let page = Page::new("price: $1 ${total}").with_layout("post");

    let rendered = render(&page, &registry, None).unwrap();
    assert_eq!(
        rendered.content,
        "<html><article>price: $1 ${total}</article></html>"
    );
}

#[test]
fn test_page_placeholder_text_is_not_expanded() {
    // The page is substituted last; a placeholder inside it stays as written
    let registry = blog_registry();
    let page = Page::new("literal {{ body }}").with_layout("base");

    let rendered = render(&page, &registry, None).unwrap();
    assert_eq!(rendered.content, "<html>literal {{ body }}</html>");
}

#[test]
fn test_placeholder_spacing_and_case() {
    let mut registry = Registry::new();
    registry
        .set("outer", Layout::new("[{{BODY}}]"))
        .set("inner", Layout::new("({{   body }})").with_layout("outer"));
    let page = Page::new("x").with_layout("inner");

    assert_eq!(render(&page, &registry, None).unwrap().content, "[(x)]");
}

#[test]
fn test_compositor_with_injected_matcher() {
    let mut registry = Registry::new();
    registry
        .set("shell", Layout::new("<body>@@CONTENT@@</body>"))
        .set("card", Layout::new("<div>@@CONTENT@@</div>").with_layout("shell"));

    let matcher = LiteralMatcher::new("@@CONTENT@@", MatchFlags::default()).unwrap();
    let stack = registry
        .create_stack(
            Some(&super::helpers::layout_ref("card")),
            &Default::default(),
        )
        .unwrap();
    let page = Page::new("hi");

    let rendered = Compositor::with_matcher(&matcher, "@@CONTENT@@")
        .unwrap()
        .compose(&stack, &registry, &page)
        .unwrap();
    assert_eq!(rendered.content, "<body><div>hi</div></body>");
}

#[test]
fn test_compositor_rejects_unmatched_seed() {
    let matcher = LiteralMatcher::new("@@CONTENT@@", MatchFlags::default()).unwrap();
    let err = Compositor::with_matcher(&matcher, "{{ body }}").err().unwrap();
    match err {
        LayoutError::ConfigInvalidValue { field, .. } => assert_eq!(field, "placeholder"),
        other => panic!("Expected ConfigInvalidValue, got {:?}", other),
    }
}

#[test]
fn test_render_str() {
    let registry = blog_registry();
    let page = Page::new("Hello").with_layout("post");
    assert_eq!(
        registry.render_str(&page, None).unwrap(),
        "<html><article>Hello</article></html>"
    );
}
