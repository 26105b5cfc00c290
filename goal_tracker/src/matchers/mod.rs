//! Line recognizers.
//!
//! Both pipelines are ordered lists of [`Matcher`] values. A matcher looks at
//! one line and either declines or produces one value.

use regex::{Captures, Regex};
use std::str::FromStr;

/// Recognizes one line shape.
pub trait Matcher<T> {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Try to recognize `line`, producing a value on success.
    fn try_match(&self, line: &str) -> Option<T>;
}

/// Extracts a value from the captures of a successful match. Returning `None`
/// turns the match into a non-match.
pub type Extractor<T> = fn(&Captures<'_>) -> Option<T>;

/// A matcher backed by one regular expression.
///
/// The expression is expected to be anchored (`^...$`) so that it matches
/// whole lines only.
pub struct Pattern<T> {
    name: &'static str,
    regex: Regex,
    extract: Extractor<T>,
}

impl<T> Pattern<T> {
    /// Compile a new pattern.
    pub fn new(
        name: &'static str,
        pattern: &str,
        extract: Extractor<T>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            extract,
        })
    }
}

impl<T> Matcher<T> for Pattern<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn try_match(&self, line: &str) -> Option<T> {
        let caps = self.regex.captures(line)?;
        (self.extract)(&caps)
    }
}

impl<T> std::fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

/// Parse capture group `index` as a number. Absent groups and values that do
/// not fit are `None`.
pub fn number<N: FromStr>(caps: &Captures<'_>, index: usize) -> Option<N> {
    caps.get(index)?.as_str().parse().ok()
}

/// Text of capture group `index`.
pub fn text<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_pattern() -> Pattern<u32> {
        Pattern::new("level", r"^Level (\d+):$", |caps| number(caps, 1)).unwrap()
    }

    #[test]
    fn test_pattern_match_and_decline() {
        let pattern = level_pattern();

        assert_eq!(pattern.name(), "level");
        assert_eq!(pattern.try_match("Level 3:"), Some(3));
        assert_eq!(pattern.try_match("Maximum Level 3:"), None);
    }

    #[test]
    fn test_number_overflow_is_non_match() {
        let pattern = level_pattern();
        assert_eq!(pattern.try_match("Level 99999999999999999999:"), None);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(Pattern::<u32>::new("broken", r"^(\d+$", |_| None).is_err());
    }
}
