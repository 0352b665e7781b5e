//! Layout and page fixtures
//!
//! Records are loose JSON in the shape a front-matter loader hands over:
//! `{"content": ..., "data": {...}}`. A small site is modelled:
//!
//! ```text
//! default            <!DOCTYPE html> shell, title "Site"
//! └── base           <body> wrapper, nav data
//!     ├── post       <article> wrapper, title "Post"
//!     └── page       <section> wrapper, upper-case placeholder
//! bare               no placeholder at all
//! ```

use serde_json::{json, Value};

/// Build a layout record from content and front matter
pub fn layout_record(content: &str, data: Value) -> Value {
    json!({ "content": content, "data": data })
}

/// Build a page record; pages use the `contents` spelling
pub fn page_record(contents: &str, data: Value) -> Value {
    json!({ "contents": contents, "data": data })
}

/// Named layout records of the sample site
pub fn site_layouts() -> Vec<(&'static str, Value)> {
    vec![
        (
            "default",
            layout_record(
                "<!DOCTYPE html>\n<html>\n{{ body }}\n</html>",
                json!({ "title": "Site", "lang": "en" }),
            ),
        ),
        (
            "base",
            layout_record(
                "<body>\n<nav>{{ nav }}</nav>\n{{body}}\n</body>",
                json!({ "layout": "default", "nav": "home" }),
            ),
        ),
        (
            "post",
            layout_record(
                "<article>{{ body }}</article>",
                json!({ "layout": "base", "title": "Post" }),
            ),
        ),
        (
            "page",
            layout_record(
                "<section>{{ BODY }}</section>",
                json!({ "layout": "base" }),
            ),
        ),
        ("bare", layout_record("<p>static</p>", json!({}))),
    ]
}

/// Page records of the sample site
pub fn site_pages() -> Vec<Value> {
    vec![
        page_record("Hello world", json!({ "layout": "post", "title": "Hello" })),
        page_record("About us", json!({ "layout": "page" })),
        page_record("Raw", json!({ "layout": "none" })),
    ]
}
