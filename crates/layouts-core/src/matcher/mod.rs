//! Matcher module - Body placeholder recognition
//!
//! A layout marks where its inner content goes with a body placeholder,
//! `{{ body }}` by default. This module turns the configured delimiters and
//! inner pattern into a [`BodyMatcher`] and performs the substitution.
//!
//! Two strategies are provided:
//!
//! - [`PatternMatcher`]: `open + matter + close` compiled as one regex
//!   (delimiters escaped, `matter` used verbatim)
//! - [`LiteralMatcher`]: exact search for a single token
//!
//! Replacement text is always inserted literally, so content containing `$1`
//! or `${name}` is never expanded.

pub mod error;
mod literal;
mod pattern;

pub use error::PatternError;
pub use literal::LiteralMatcher;
pub use pattern::{compile, PatternMatcher};

use std::str::FromStr;

/// Opening and closing delimiters of the placeholder expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Matcher flags, parsed from a JS-style flag string such as `"gi"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags {
    /// Replace every occurrence instead of the first one only
    pub global: bool,
    /// Match the placeholder regardless of case
    pub case_insensitive: bool,
}

impl FromStr for MatchFlags {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = MatchFlags::default();
        for flag in s.chars() {
            match flag {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                other => return Err(PatternError::UnknownFlag { flag: other }),
            }
        }
        Ok(flags)
    }
}

/// Result of one substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The haystack with matched placeholders replaced
    pub content: String,
    /// Number of placeholder occurrences that were replaced
    pub replaced: usize,
}

/// Recognizes the body placeholder inside layout content
pub trait BodyMatcher: Send + Sync {
    /// Whether `haystack` contains at least one placeholder
    fn is_match(&self, haystack: &str) -> bool;

    /// Replace the placeholder occurrence(s) in `haystack` with `replacement`
    ///
    /// Without a match the haystack is returned unchanged and `replaced` is 0.
    fn substitute(&self, haystack: &str, replacement: &str) -> Substitution;
}

/// Substitute the placeholder and return only the resulting content
pub fn substitute_first(matcher: &dyn BodyMatcher, haystack: &str, replacement: &str) -> String {
    matcher.substitute(haystack, replacement).content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> PatternMatcher {
        compile(
            &Delimiters::new("{{", "}}"),
            r"\s*body\s*",
            "gi".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let flags: MatchFlags = "gi".parse().unwrap();
        assert!(flags.global);
        assert!(flags.case_insensitive);

        let flags: MatchFlags = "".parse().unwrap();
        assert_eq!(flags, MatchFlags::default());
    }

    #[test]
    fn test_parse_flags_rejects_unknown() {
        let err = "gx".parse::<MatchFlags>().unwrap_err();
        assert_eq!(err, PatternError::UnknownFlag { flag: 'x' });
    }

    #[test]
    fn test_pattern_matches_spacing_variants() {
        let matcher = default_matcher();
        assert!(matcher.is_match("{{body}}"));
        assert!(matcher.is_match("{{ body }}"));
        assert!(matcher.is_match("{{   body\n}}"));
        assert!(matcher.is_match("{{ BODY }}"));
        assert!(!matcher.is_match("{{ title }}"));
        assert!(!matcher.is_match("{ body }"));
    }

    #[test]
    fn test_pattern_substitutes_in_place() {
        let matcher = default_matcher();
        let result = matcher.substitute("<main>{{ body }}</main>", "Hello");
        assert_eq!(result.content, "<main>Hello</main>");
        assert_eq!(result.replaced, 1);
    }

    #[test]
    fn test_pattern_without_match_is_unchanged() {
        let matcher = default_matcher();
        let result = matcher.substitute("<main></main>", "Hello");
        assert_eq!(result.content, "<main></main>");
        assert_eq!(result.replaced, 0);
    }

    #[test]
    fn test_pattern_global_replaces_all() {
        let matcher = default_matcher();
        let result = matcher.substitute("{{ body }}|{{body}}", "x");
        assert_eq!(result.content, "x|x");
        assert_eq!(result.replaced, 2);
    }

    #[test]
    fn test_pattern_non_global_replaces_first() {
        let matcher = compile(
            &Delimiters::new("{{", "}}"),
            r"\s*body\s*",
            "i".parse().unwrap(),
        )
        .unwrap();
        let result = matcher.substitute("{{ body }}|{{ body }}", "x");
        assert_eq!(result.content, "x|{{ body }}");
        assert_eq!(result.replaced, 1);
    }

    #[test]
    fn test_pattern_case_sensitive_without_i_flag() {
        let matcher =
            compile(&Delimiters::new("{{", "}}"), r"\s*body\s*", MatchFlags::default()).unwrap();
        assert!(!matcher.is_match("{{ BODY }}"));
    }

    #[test]
    fn test_pattern_escapes_delimiters() {
        let matcher = compile(
            &Delimiters::new("<%", "%>"),
            r"\s*body\s*",
            "gi".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(substitute_first(&matcher, "[<% body %>]", "in"), "[in]");

        let matcher = compile(
            &Delimiters::new("[[", "]]"),
            r"\s*body\s*",
            "gi".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(substitute_first(&matcher, "a[[body]]b", "-"), "a-b");
    }

    #[test]
    fn test_replacement_is_literal() {
        let matcher = default_matcher();
        let result = substitute_first(&matcher, "{{ body }}", "costs $1 and ${name}");
        assert_eq!(result, "costs $1 and ${name}");
    }

    #[test]
    fn test_invalid_matter_is_rejected() {
        let err = compile(&Delimiters::new("{{", "}}"), r"\s*(body", MatchFlags::default())
            .unwrap_err();
        match err {
            PatternError::InvalidPattern { pattern, .. } => {
                assert!(pattern.contains("(body"));
            }
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let err = compile(&Delimiters::new("", "}}"), "body", MatchFlags::default()).unwrap_err();
        assert_eq!(err, PatternError::EmptyToken { which: "open" });
    }

    #[test]
    fn test_literal_matcher() {
        let matcher = LiteralMatcher::new("{{ body }}", "g".parse().unwrap()).unwrap();
        let result = matcher.substitute("a{{ body }}b{{ body }}c", "-");
        assert_eq!(result.content, "a-b-c");
        assert_eq!(result.replaced, 2);

        // Literal search does not tolerate spacing differences
        assert!(!matcher.is_match("{{body}}"));
    }

    #[test]
    fn test_literal_matcher_first_only() {
        let matcher = LiteralMatcher::new("@body", MatchFlags::default()).unwrap();
        let result = matcher.substitute("@body @body", "x");
        assert_eq!(result.content, "x @body");
        assert_eq!(result.replaced, 1);
    }

    #[test]
    fn test_literal_matcher_case_insensitive() {
        let matcher = LiteralMatcher::new("{{ body }}", "gi".parse().unwrap()).unwrap();
        assert!(matcher.is_match("{{ Body }}"));
        assert_eq!(substitute_first(&matcher, "[{{ BODY }}]", "$0"), "[$0]");
    }

    #[test]
    fn test_literal_matcher_rejects_empty_token() {
        let err = LiteralMatcher::new("", MatchFlags::default()).unwrap_err();
        assert_eq!(err, PatternError::EmptyToken { which: "placeholder" });
    }
}
