//! Shared test helpers for compositor tests

use crate::document::{Layout, Metadata};
use crate::registry::Registry;
use serde_json::{json, Value};

/// `base` wrapping `post`, the canonical two-level blog setup
pub(super) fn blog_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .set("base", Layout::new("<html>{{ body }}</html>"))
        .set(
            "post",
            Layout::new("<article>{{ body }}</article>").with_layout("base"),
        );
    registry
}

/// Three levels `a -> b -> c` with titles on `c` and `b`
pub(super) fn titled_chain_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .set(
            "c",
            Layout::new("C({{ body }})")
                .with_data("title", "x")
                .with_data("site", "example"),
        )
        .set(
            "b",
            Layout::new("B({{ body }})")
                .with_layout("c")
                .with_data("title", "y"),
        )
        .set("a", Layout::new("A({{ body }})").with_layout("b"));
    registry
}

pub(super) fn metadata(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        _ => panic!("metadata fixture must be an object"),
    }
}

pub(super) fn layout_ref(name: &str) -> Value {
    json!(name)
}
