use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::consts::{
    default_negatives, BODY_WORD, DEFAULT_CLOSE, DEFAULT_FLAGS, DEFAULT_MATTER, DEFAULT_OPEN,
};
use crate::document::{Metadata, LAYOUT_KEY};
use crate::error::{LayoutError, Result};
use crate::matcher::{compile, BodyMatcher, Delimiters, LiteralMatcher, MatchFlags};

/// How the body placeholder is searched for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// `open + matter + close` as a regular expression
    #[default]
    Pattern,
    /// Exact search for the placeholder text
    Literal,
}

/// Set of values that stop layout resolution, compared by value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Negatives(Vec<Value>);

impl Negatives {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.iter().any(|negative| negative == value)
    }
}

impl Default for Negatives {
    fn default() -> Self {
        Self(default_negatives())
    }
}

/// Partial render options; unset fields fall through to the next layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Layout to start from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    /// `[open, close]` placeholder delimiters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delims: Option<(String, String)>,
    /// Regex between the delimiters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter: Option<String>,
    /// Placeholder text seeded into the fold
    #[serde(alias = "expression", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MatchStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negatives: Option<Negatives>,
    /// Turn diagnostics into errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: impl Into<Value>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_delims(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.delims = Some((open.into(), close.into()));
        self
    }

    pub fn with_matter(mut self, matter: impl Into<String>) -> Self {
        self.matter = Some(matter.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_negatives(mut self, negatives: Vec<Value>) -> Self {
        self.negatives = Some(Negatives::new(negatives));
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: LayoutOptions) -> LayoutOptions {
        LayoutOptions {
            layout: other.layout.or(self.layout),
            delims: other.delims.or(self.delims),
            matter: other.matter.or(self.matter),
            placeholder: other.placeholder.or(self.placeholder),
            flags: other.flags.or(self.flags),
            strategy: other.strategy.or(self.strategy),
            negatives: other.negatives.or(self.negatives),
            strict: other.strict.or(self.strict),
        }
    }

    /// Pick the recognized option keys out of front matter
    ///
    /// An explicit `layout: null` is kept so a page can cancel an inherited
    /// default layout. Other keys set to null count as unset.
    pub fn from_metadata(metadata: &Metadata) -> Result<Self> {
        let placeholder = match pick(metadata, "placeholder")? {
            Some(placeholder) => Some(placeholder),
            None => pick(metadata, "expression")?,
        };

        Ok(Self {
            layout: metadata.get(LAYOUT_KEY).cloned(),
            delims: pick(metadata, "delims")?,
            matter: pick(metadata, "matter")?,
            placeholder,
            flags: pick(metadata, "flags")?,
            strategy: pick(metadata, "strategy")?,
            negatives: pick(metadata, "negatives")?,
            strict: pick(metadata, "strict")?,
        })
    }

    /// Parse registry options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read registry options from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LayoutError::ConfigParseError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Fill unset fields with engine defaults
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let (open, close) = self
            .delims
            .clone()
            .unwrap_or_else(|| (DEFAULT_OPEN.to_string(), DEFAULT_CLOSE.to_string()));

        // Custom delimiters without a custom placeholder get one built from them
        let placeholder = self
            .placeholder
            .clone()
            .unwrap_or_else(|| format!("{} {} {}", open, BODY_WORD, close));

        let flags = self
            .flags
            .as_deref()
            .unwrap_or(DEFAULT_FLAGS)
            .parse::<MatchFlags>()
            .map_err(|e| LayoutError::invalid_value("flags", e.to_string()))?;

        Ok(ResolvedOptions {
            layout: self.layout.clone(),
            delimiters: Delimiters::new(open, close),
            matter: self
                .matter
                .clone()
                .unwrap_or_else(|| DEFAULT_MATTER.to_string()),
            placeholder,
            flags,
            strategy: self.strategy.unwrap_or_default(),
            negatives: self.negatives.clone().unwrap_or_default(),
            strict: self.strict.unwrap_or(false),
        })
    }
}

fn pick<T: DeserializeOwned>(metadata: &Metadata, key: &str) -> Result<Option<T>> {
    match metadata.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| LayoutError::invalid_value(key, e.to_string())),
    }
}

/// Fully resolved options for a single render call
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub layout: Option<Value>,
    pub delimiters: Delimiters,
    pub matter: String,
    pub placeholder: String,
    pub flags: MatchFlags,
    pub strategy: MatchStrategy,
    pub negatives: Negatives,
    pub strict: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            layout: None,
            delimiters: Delimiters::new(DEFAULT_OPEN, DEFAULT_CLOSE),
            matter: DEFAULT_MATTER.to_string(),
            placeholder: format!("{} {} {}", DEFAULT_OPEN, BODY_WORD, DEFAULT_CLOSE),
            flags: MatchFlags {
                global: true,
                case_insensitive: true,
            },
            strategy: MatchStrategy::Pattern,
            negatives: Negatives::default(),
            strict: false,
        }
    }
}

impl ResolvedOptions {
    /// Build the body matcher these options describe
    pub fn matcher(&self) -> Result<Box<dyn BodyMatcher>> {
        let matcher: Box<dyn BodyMatcher> = match self.strategy {
            MatchStrategy::Pattern => {
                Box::new(compile(&self.delimiters, &self.matter, self.flags)?)
            }
            MatchStrategy::Literal => Box::new(LiteralMatcher::new(
                self.placeholder.clone(),
                self.flags,
            )?),
        };
        Ok(matcher)
    }
}
