//! Layout registry
//!
//! Owns every known layout by name together with registry-level options.
//! Populate it with [`Registry::set`] first, then render any number of pages
//! against a shared `&Registry`; mutation needs `&mut`, so the borrow checker
//! keeps writes and renders apart.

use std::collections::HashMap;

use serde_json::Value;

use crate::compose::{self, Rendered};
use crate::config::{LayoutOptions, Negatives};
use crate::document::{Layout, Page};
use crate::error::Result;
use crate::stack::{self, Stack};

/// In-memory mapping from layout name to layout
#[derive(Debug, Clone, Default)]
pub struct Registry {
    layouts: HashMap<String, Layout>,
    options: LayoutOptions,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with options applied to every render
    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            layouts: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LayoutOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Store a layout, replacing any previous layout with the same name
    pub fn set(&mut self, name: impl Into<String>, layout: Layout) -> &mut Self {
        self.layouts.insert(name.into(), layout);
        self
    }

    /// Validate a loose `{content, metadata}` record and store it
    pub fn set_value(&mut self, name: impl Into<String>, record: Value) -> Result<&mut Self> {
        let layout = Layout::from_value(record)?;
        Ok(self.set(name, layout))
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Registered layout names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the layout stack starting at `start`, outermost first
    pub fn create_stack(&self, start: Option<&Value>, negatives: &Negatives) -> Result<Stack> {
        stack::resolve_stack(start, self, negatives)
    }

    /// Flatten `page` into its layout stack
    pub fn render(&self, page: &Page, overrides: Option<&LayoutOptions>) -> Result<Rendered> {
        compose::render(page, self, overrides)
    }

    /// Like [`Registry::render`], returning only the content
    pub fn render_str(&self, page: &Page, overrides: Option<&LayoutOptions>) -> Result<String> {
        Ok(self.render(page, overrides)?.content)
    }
}
