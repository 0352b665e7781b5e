//! Regex-backed body matcher

use regex::{Captures, Regex, RegexBuilder};

use super::{BodyMatcher, Delimiters, MatchFlags, PatternError, Substitution};

/// Body matcher compiled from `open + matter + close`
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
    global: bool,
}

/// Compile a body matcher from delimiters, an inner pattern and flags
///
/// Delimiters are escaped; `matter` is used as a regular expression.
pub fn compile(
    delimiters: &Delimiters,
    matter: &str,
    flags: MatchFlags,
) -> Result<PatternMatcher, PatternError> {
    if delimiters.open.is_empty() {
        return Err(PatternError::EmptyToken { which: "open" });
    }
    if delimiters.close.is_empty() {
        return Err(PatternError::EmptyToken { which: "close" });
    }

    let source = format!(
        "{}{}{}",
        regex::escape(&delimiters.open),
        matter,
        regex::escape(&delimiters.close)
    );
    let regex = build_regex(&source, flags.case_insensitive)?;

    Ok(PatternMatcher {
        regex,
        global: flags.global,
    })
}

pub(super) fn build_regex(source: &str, case_insensitive: bool) -> Result<Regex, PatternError> {
    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| PatternError::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })
}

/// Replace matches of `regex` in `haystack`, counting the replacements
pub(super) fn replace_counted(
    regex: &Regex,
    global: bool,
    haystack: &str,
    replacement: &str,
) -> Substitution {
    let limit = if global { 0 } else { 1 };
    let mut replaced = 0;
    let content = regex
        .replacen(haystack, limit, |_: &Captures<'_>| {
            replaced += 1;
            replacement
        })
        .into_owned();

    Substitution { content, replaced }
}

impl BodyMatcher for PatternMatcher {
    fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    fn substitute(&self, haystack: &str, replacement: &str) -> Substitution {
        replace_counted(&self.regex, self.global, haystack, replacement)
    }
}
