use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    // Stack errors
    #[error("LAYOUT_CYCLE: layout '{name}' is reached twice ({chain})")]
    Cycle { name: String, chain: String },

    #[error("LAYOUT_REF_INVALID: layout reference {value} is not a name (in {referenced_by})")]
    InvalidReference { value: String, referenced_by: String },

    #[error("LAYOUT_NOT_FOUND: layout '{name}' referenced by {referenced_by} not found")]
    LayoutNotFound { name: String, referenced_by: String },

    // Composition errors
    #[error("PLACEHOLDER_MISSING: {0} has no body placeholder, inner content would be dropped")]
    PlaceholderMissing(String),

    #[error("RECORD_MALFORMED: {0}")]
    MalformedRecord(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Matcher errors
    #[error("PATTERN_INVALID: {0}")]
    PatternInvalid(String),
}

impl From<crate::matcher::error::PatternError> for LayoutError {
    fn from(err: crate::matcher::error::PatternError) -> Self {
        LayoutError::PatternInvalid(err.to_string())
    }
}

impl From<toml::de::Error> for LayoutError {
    fn from(err: toml::de::Error) -> Self {
        LayoutError::ConfigParseError(err.to_string())
    }
}

impl LayoutError {
    pub(crate) fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        LayoutError::ConfigInvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
