//! Layout stack resolution
//!
//! Starting from a page's layout reference, follow each layout's `layout`
//! front-matter key up to the outermost ancestor. The walk stops on:
//!
//! - a negative value (see [`Negatives`])
//! - null, `false`, `0`, absence or an empty name, whatever the negatives are
//! - a name missing from the registry; the partial stack is kept and the
//!   missing name is reported through [`Stack::unresolved`]
//!
//! Reaching the same layout twice is a cycle and fails with
//! [`LayoutError::Cycle`].

use std::collections::HashSet;

use serde_json::Value;

use crate::config::Negatives;
use crate::error::{LayoutError, Result};
use crate::registry::Registry;

/// A reference that named a layout the registry does not have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub name: String,
    /// Layout holding the reference, `None` for the page itself
    pub referenced_by: Option<String>,
}

/// Ordered layout chain, outermost ancestor first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack {
    layouts: Vec<String>,
    unresolved: Option<Unresolved>,
}

impl Stack {
    pub fn names(&self) -> &[String] {
        &self.layouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.layouts.iter()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Missing reference the walk stopped on, if any
    pub fn unresolved(&self) -> Option<&Unresolved> {
        self.unresolved.as_ref()
    }

    pub fn into_names(self) -> Vec<String> {
        self.layouts
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Human-readable holder of a layout reference
pub(crate) fn describe_referrer(referrer: Option<&str>) -> String {
    match referrer {
        Some(name) => format!("layout '{}'", name),
        None => "the page".to_string(),
    }
}

/// Turn a raw layout reference into a layout name
///
/// Returns `None` when no further layout should be used.
pub fn resolve_layout_name(
    value: Option<&Value>,
    negatives: &Negatives,
    referrer: Option<&str>,
) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(value) if negatives.contains(value) => Ok(None),
        Some(Value::String(name)) if name.trim().is_empty() => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(other) => Err(LayoutError::InvalidReference {
            value: other.to_string(),
            referenced_by: describe_referrer(referrer),
        }),
    }
}

/// Build the stack for `start`, outermost ancestor first
pub fn resolve_stack(
    start: Option<&Value>,
    registry: &Registry,
    negatives: &Negatives,
) -> Result<Stack> {
    let mut walked: Vec<String> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut unresolved = None;
    let mut referrer: Option<String> = None;
    let mut current = resolve_layout_name(start, negatives, None)?;

    while let Some(name) = current {
        if visited.contains(&name) {
            let mut chain = walked.clone();
            chain.push(name.clone());
            return Err(LayoutError::Cycle {
                name,
                chain: chain.join(" -> "),
            });
        }

        let Some(layout) = registry.get(&name) else {
            tracing::debug!(
                layout = %name,
                referenced_by = %describe_referrer(referrer.as_deref()),
                "layout not found, stack stops here"
            );
            unresolved = Some(Unresolved {
                name,
                referenced_by: referrer,
            });
            break;
        };

        visited.insert(name.clone());
        walked.push(name.clone());
        current = resolve_layout_name(layout.parent(), negatives, Some(&name))?;
        referrer = Some(name);
    }

    // Walked innermost first; stacks are outermost first
    walked.reverse();
    tracing::debug!(stack = ?walked, "resolved layout stack");

    Ok(Stack {
        layouts: walked,
        unresolved,
    })
}
