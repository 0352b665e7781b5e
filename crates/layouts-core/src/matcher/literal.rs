//! Literal token body matcher

use regex::Regex;

use super::pattern::{build_regex, replace_counted};
use super::{BodyMatcher, MatchFlags, PatternError, Substitution};

/// Body matcher that searches for one exact token
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    token: String,
    global: bool,
    // Case-insensitive search goes through an escaped regex
    folded: Option<Regex>,
}

impl LiteralMatcher {
    pub fn new(token: impl Into<String>, flags: MatchFlags) -> Result<Self, PatternError> {
        let token = token.into();
        if token.is_empty() {
            return Err(PatternError::EmptyToken {
                which: "placeholder",
            });
        }

        let folded = if flags.case_insensitive {
            Some(build_regex(&regex::escape(&token), true)?)
        } else {
            None
        };

        Ok(Self {
            token,
            global: flags.global,
            folded,
        })
    }
}

impl BodyMatcher for LiteralMatcher {
    fn is_match(&self, haystack: &str) -> bool {
        match &self.folded {
            Some(regex) => regex.is_match(haystack),
            None => haystack.contains(self.token.as_str()),
        }
    }

    fn substitute(&self, haystack: &str, replacement: &str) -> Substitution {
        if let Some(regex) = &self.folded {
            return replace_counted(regex, self.global, haystack, replacement);
        }

        let limit = if self.global { usize::MAX } else { 1 };
        let mut content = String::with_capacity(haystack.len());
        let mut last = 0;
        let mut replaced = 0;

        for (start, _) in haystack.match_indices(self.token.as_str()).take(limit) {
            content.push_str(&haystack[last..start]);
            content.push_str(replacement);
            last = start + self.token.len();
            replaced += 1;
        }
        content.push_str(&haystack[last..]);

        Substitution { content, replaced }
    }
}
