//! Matcher construction errors

use std::fmt;

/// Errors raised while building a body matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The combined delimiter + matter pattern does not compile
    InvalidPattern {
        /// The full pattern source that was compiled
        pattern: String,
        /// Message from the regex compiler
        message: String,
    },

    /// A delimiter or literal token is empty
    EmptyToken {
        /// Which part was empty ("open", "close" or "placeholder")
        which: &'static str,
    },

    /// Unknown character in a flag string
    UnknownFlag {
        /// The offending flag
        flag: char,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidPattern { pattern, message } => {
                write!(f, "Pattern '{}' does not compile: {}", pattern, message)
            }
            PatternError::EmptyToken { which } => {
                write!(f, "The {} token of a body matcher cannot be empty", which)
            }
            PatternError::UnknownFlag { flag } => {
                write!(
                    f,
                    "Unknown matcher flag '{}'. Supported flags are 'g' (global) and 'i' (case-insensitive)",
                    flag
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
