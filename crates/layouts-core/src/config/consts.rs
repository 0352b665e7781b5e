//! Default option values

use serde_json::Value;

/// Default opening delimiter of the body placeholder
pub const DEFAULT_OPEN: &str = "{{";

/// Default closing delimiter of the body placeholder
pub const DEFAULT_CLOSE: &str = "}}";

/// Default inner pattern between the delimiters
pub const DEFAULT_MATTER: &str = r"\s*body\s*";

/// Default flags: replace every occurrence, ignore case
pub const DEFAULT_FLAGS: &str = "gi";

/// Word used when deriving a placeholder from custom delimiters
pub const BODY_WORD: &str = "body";

/// Values meaning "no further layout"
pub fn default_negatives() -> Vec<Value> {
    vec![
        Value::Bool(false),
        Value::from("false"),
        Value::from("none"),
        Value::from("nil"),
        Value::from("null"),
        Value::Null,
    ]
}
