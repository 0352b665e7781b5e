//! Layout and page records
//!
//! Both are a raw content block plus front matter. Loading and front-matter
//! parsing happen outside this crate; a loader hands over either typed values
//! or loose JSON records (`{"content": ..., "metadata": {...}}`).

use serde_json::{Map, Value};

use crate::error::{LayoutError, Result};

/// Ordered front-matter mapping
pub type Metadata = Map<String, Value>;

/// Reserved metadata key naming the parent layout
pub const LAYOUT_KEY: &str = "layout";

/// A reusable wrapper template
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Raw content, expected to hold a body placeholder
    pub content: String,
    /// Front matter; `layout` names the parent
    pub metadata: Metadata,
}

impl Layout {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the parent layout
    pub fn with_layout(mut self, parent: impl Into<String>) -> Self {
        self.metadata
            .insert(LAYOUT_KEY.to_string(), Value::String(parent.into()));
        self
    }

    /// Set a single metadata entry
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The raw parent reference, if any
    pub fn parent(&self) -> Option<&Value> {
        self.metadata.get(LAYOUT_KEY)
    }

    /// Build a layout from a loose JSON record
    pub fn from_value(record: Value) -> Result<Self> {
        let (content, metadata) = split_record(record, "layout")?;
        Ok(Self { content, metadata })
    }
}

/// The leaf document being wrapped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub content: String,
    pub metadata: Metadata,
}

impl Page {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the first layout to wrap this page in
    pub fn with_layout(mut self, layout: impl Into<Value>) -> Self {
        self.metadata.insert(LAYOUT_KEY.to_string(), layout.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Build a page from a loose JSON record
    pub fn from_value(record: Value) -> Result<Self> {
        let (content, metadata) = split_record(record, "page")?;
        Ok(Self { content, metadata })
    }
}

/// Split a `{content, metadata}` record, accepting `contents` and `data` aliases
fn split_record(record: Value, kind: &str) -> Result<(String, Metadata)> {
    let Value::Object(mut fields) = record else {
        return Err(LayoutError::MalformedRecord(format!(
            "{} record must be an object",
            kind
        )));
    };

    let content = match take_either(&mut fields, "content", "contents") {
        Some(Value::String(content)) => content,
        Some(other) => {
            return Err(LayoutError::MalformedRecord(format!(
                "{} content must be a string, got {}",
                kind,
                type_name(&other)
            )))
        }
        None => {
            return Err(LayoutError::MalformedRecord(format!(
                "{} record has no content",
                kind
            )))
        }
    };

    let metadata = match take_either(&mut fields, "metadata", "data") {
        Some(Value::Object(metadata)) => metadata,
        None | Some(Value::Null) => Metadata::new(),
        Some(other) => {
            return Err(LayoutError::MalformedRecord(format!(
                "{} metadata must be an object, got {}",
                kind,
                type_name(&other)
            )))
        }
    };

    Ok((content, metadata))
}

fn take_either(fields: &mut Metadata, key: &str, alias: &str) -> Option<Value> {
    fields.remove(key).or_else(|| fields.remove(alias))
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
