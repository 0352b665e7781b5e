//! Compose module - Flatten a page into its layout stack
//!
//! The fold starts from the bare placeholder text. Every layout in the
//! stack, outermost first, is substituted into the placeholder left by the
//! previous step, and the page content goes into the last one:
//!
//! ```text
//! "{{ body }}" -> "<html>{{ body }}</html>"
//!              -> "<html><article>{{ body }}</article></html>"
//!              -> "<html><article>Hello</article></html>"
//! ```
//!
//! Metadata is merged along the same path, so children override ancestors
//! and the page overrides everything. A stack of N layouts always takes
//! N + 1 substitution passes.

use std::fmt;

use crate::config::{LayoutOptions, ResolvedOptions};
use crate::document::{Metadata, Page};
use crate::error::{LayoutError, Result};
use crate::matcher::BodyMatcher;
use crate::registry::Registry;
use crate::stack::{describe_referrer, resolve_stack, Stack};

/// Non-fatal finding reported alongside a render result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A layout reference named a layout the registry does not have
    MissingLayout {
        name: String,
        /// Layout holding the reference, `None` for the page
        referenced_by: Option<String>,
    },

    /// A layout has no placeholder, so the content it wraps was dropped
    MissingPlaceholder { layout: String },
}

impl Diagnostic {
    fn into_error(self) -> LayoutError {
        match self {
            Diagnostic::MissingLayout {
                name,
                referenced_by,
            } => LayoutError::LayoutNotFound {
                name,
                referenced_by: describe_referrer(referenced_by.as_deref()),
            },
            Diagnostic::MissingPlaceholder { layout } => {
                LayoutError::PlaceholderMissing(format!("layout '{}'", layout))
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingLayout {
                name,
                referenced_by,
            } => write!(
                f,
                "Layout '{}' referenced by {} is not registered",
                name,
                describe_referrer(referenced_by.as_deref())
            ),
            Diagnostic::MissingPlaceholder { layout } => write!(
                f,
                "Layout '{}' has no body placeholder; the content it wraps was dropped",
                layout
            ),
        }
    }
}

/// Flattened page
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub content: String,
    /// Page content before any layout was applied
    pub original: String,
    /// Ancestors overridden by children, page last
    pub metadata: Metadata,
    /// Layouts applied, outermost first
    pub stack: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Accumulator of one fold
struct Fold<'a> {
    content: String,
    /// Innermost layout applied so far, `None` while `content` is the seed
    wrapper: Option<&'a str>,
    /// The current wrapper lost its placeholder and has been reported
    dropped: bool,
}

/// Folds a resolved stack and a page with a given matcher
pub struct Compositor<'m> {
    matcher: &'m dyn BodyMatcher,
    placeholder: &'m str,
    strict: bool,
}

impl<'m> Compositor<'m> {
    /// Create a compositor seeding each fold with `placeholder`
    ///
    /// Fails when `matcher` does not recognize `placeholder`, since every
    /// fold would then drop all of its content.
    pub fn with_matcher(matcher: &'m dyn BodyMatcher, placeholder: &'m str) -> Result<Self> {
        if !matcher.is_match(placeholder) {
            return Err(LayoutError::invalid_value(
                "placeholder",
                format!("'{}' is not matched by the body matcher", placeholder),
            ));
        }

        Ok(Self {
            matcher,
            placeholder,
            strict: false,
        })
    }

    /// Treat diagnostics as errors
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Fold `stack` (resolved against `registry`) and `page` into one document
    pub fn compose(&self, stack: &Stack, registry: &Registry, page: &Page) -> Result<Rendered> {
        let mut diagnostics = Vec::new();

        if let Some(unresolved) = stack.unresolved() {
            self.report(
                Diagnostic::MissingLayout {
                    name: unresolved.name.clone(),
                    referenced_by: unresolved.referenced_by.clone(),
                },
                &mut diagnostics,
            )?;
        }

        let mut fold = Fold {
            content: self.placeholder.to_string(),
            wrapper: None,
            dropped: false,
        };
        let mut metadata = Metadata::new();

        for name in stack {
            let layout = registry
                .get(name)
                .ok_or_else(|| LayoutError::LayoutNotFound {
                    name: name.clone(),
                    referenced_by: "the resolved stack".to_string(),
                })?;

            merge_metadata(&mut metadata, &layout.metadata);
            if self.inject(&mut fold, &layout.content, &mut diagnostics)? {
                tracing::debug!(layout = %name, "applied layout");
                fold.wrapper = Some(name.as_str());
            }
        }

        merge_metadata(&mut metadata, &page.metadata);
        self.inject(&mut fold, &page.content, &mut diagnostics)?;

        Ok(Rendered {
            content: fold.content,
            original: page.content.clone(),
            metadata,
            stack: stack.names().to_vec(),
            diagnostics,
        })
    }

    /// Substitute `inner` into the placeholder held by the fold
    ///
    /// Returns whether a placeholder was found; without one the fold is left
    /// untouched and `inner` is dropped. A wrapper without a placeholder is
    /// reported once, not on every later pass.
    fn inject(
        &self,
        fold: &mut Fold<'_>,
        inner: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<bool> {
        let substitution = self.matcher.substitute(&fold.content, inner);

        if substitution.replaced == 0 {
            if !fold.dropped {
                fold.dropped = true;
                let layout = fold.wrapper.unwrap_or(self.placeholder);
                self.report(
                    Diagnostic::MissingPlaceholder {
                        layout: layout.to_string(),
                    },
                    diagnostics,
                )?;
            }
            return Ok(false);
        }

        fold.content = substitution.content;
        Ok(true)
    }

    fn report(&self, diagnostic: Diagnostic, diagnostics: &mut Vec<Diagnostic>) -> Result<()> {
        if self.strict {
            return Err(diagnostic.into_error());
        }

        tracing::warn!("{}", diagnostic);
        diagnostics.push(diagnostic);
        Ok(())
    }
}

/// Shallow merge; keys from `source` win
fn merge_metadata(target: &mut Metadata, source: &Metadata) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Layer registry options, page front matter and `overrides` over the defaults
pub fn resolve_options(
    page: &Page,
    registry: &Registry,
    overrides: Option<&LayoutOptions>,
) -> Result<ResolvedOptions> {
    let mut options = registry
        .options()
        .clone()
        .merge(LayoutOptions::from_metadata(&page.metadata)?);

    if let Some(overrides) = overrides {
        options = options.merge(overrides.clone());
    }

    options.resolve()
}

/// Flatten `page` into the layout stack it names
pub fn render(
    page: &Page,
    registry: &Registry,
    overrides: Option<&LayoutOptions>,
) -> Result<Rendered> {
    let options = resolve_options(page, registry, overrides)?;
    let matcher = options.matcher()?;
    let stack = resolve_stack(options.layout.as_ref(), registry, &options.negatives)?;

    Compositor::with_matcher(&*matcher, &options.placeholder)?
        .strict(options.strict)
        .compose(&stack, registry, page)
}

#[cfg(test)]
mod tests;
