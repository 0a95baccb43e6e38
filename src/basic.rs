//! Leaf matchers the combinators compose.
//!
//! These cover the primitive expectations a harness plugs into matcher-typed
//! slots: equality, negation, the always-matching wildcard, and string
//! patterns (substring, regex, glob). Any other type implementing
//! [`Matcher`] composes just as well.

use std::fmt;

use glob::Pattern;
use regex::Regex;

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches values equal to an expected value.
///
/// The comparison goes through `PartialEq`, so cross-type equality such as
/// `String == &str` works without conversion.
///
/// # Example
///
/// ```rust
/// use simile::{equal_to, Matcher};
///
/// assert!(equal_to(6).matches(&6));
/// assert!(!equal_to(6).matches(&7));
/// ```
pub fn equal_to<T>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

/// See [`equal_to`].
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    expected: T,
}

impl<T, U> Matcher<U> for EqualTo<T>
where
    T: fmt::Debug,
    U: PartialEq<T> + fmt::Debug + ?Sized,
{
    fn matches(&self, value: &U) -> bool {
        value == &self.expected
    }

    fn describe(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn describe_mismatch(&self, value: &U, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }
}

/// Matches every value. Used as the wildcard slot in field-wise matchers.
pub fn anything() -> Anything {
    Anything
}

/// See [`anything`].
#[derive(Debug, Clone, Copy)]
pub struct Anything;

impl<T: ?Sized> Matcher<T> for Anything {
    fn matches(&self, _value: &T) -> bool {
        true
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("anything");
    }

    fn describe_mismatch(&self, _value: &T, _description: &mut Description) {
        // Cannot mismatch; nothing to report.
    }
}

/// Inverts another matcher.
///
/// `not(anything())` is the canonical never-matching matcher.
pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

/// See [`not`].
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

impl<T, M> Matcher<T> for Not<M>
where
    T: fmt::Debug + ?Sized,
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("not ");
        self.inner.describe(description);
    }

    fn describe_mismatch(&self, value: &T, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }
}

/// Matches strings containing a fragment.
pub fn contains_string(fragment: impl Into<String>) -> ContainsString {
    ContainsString {
        fragment: fragment.into(),
    }
}

/// See [`contains_string`].
#[derive(Debug, Clone)]
pub struct ContainsString {
    fragment: String,
}

impl Matcher<String> for ContainsString {
    fn matches(&self, value: &String) -> bool {
        value.contains(&self.fragment)
    }

    fn describe(&self, description: &mut Description) {
        description
            .append_text("a string containing ")
            .append_value(&self.fragment);
    }

    fn describe_mismatch(&self, value: &String, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }
}

/// Matches strings against a compiled regular expression.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use simile::{matches_regex, Matcher};
///
/// let npm_install = matches_regex(Regex::new(r"^npm (install|i)$").unwrap());
/// assert!(npm_install.matches(&"npm i".to_string()));
/// assert!(!npm_install.matches(&"npm run".to_string()));
/// ```
pub fn matches_regex(pattern: Regex) -> MatchesRegex {
    MatchesRegex { pattern }
}

/// See [`matches_regex`].
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Regex,
}

impl Matcher<String> for MatchesRegex {
    fn matches(&self, value: &String) -> bool {
        self.pattern.is_match(value)
    }

    fn describe(&self, description: &mut Description) {
        description.append_text(format!("a string matching /{}/", self.pattern));
    }

    fn describe_mismatch(&self, value: &String, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }
}

/// Matches strings against a glob pattern, e.g. `*.env` or `**/config.json`.
pub fn matches_glob(pattern: Pattern) -> MatchesGlob {
    MatchesGlob { pattern }
}

/// See [`matches_glob`].
#[derive(Debug, Clone)]
pub struct MatchesGlob {
    pattern: Pattern,
}

impl Matcher<String> for MatchesGlob {
    fn matches(&self, value: &String) -> bool {
        self.pattern.matches(value)
    }

    fn describe(&self, description: &mut Description) {
        description.append_text(format!("a string matching glob {}", self.pattern.as_str()));
    }

    fn describe_mismatch(&self, value: &String, description: &mut Description) {
        description.append_text("was ").append_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch_text<T: ?Sized>(matcher: &dyn Matcher<T>, value: &T) -> String {
        let mut description = Description::new();
        matcher.describe_mismatch(value, &mut description);
        description.to_string()
    }

    #[test]
    fn test_equal_to_compares_across_string_types() {
        let matcher = equal_to("ValueError");
        assert!(matcher.matches(&"ValueError".to_string()));
        assert!(!matcher.matches(&"RuntimeError".to_string()));
    }

    #[test]
    fn test_equal_to_mismatch_reports_actual() {
        assert_eq!(mismatch_text::<i64>(&equal_to(6), &7), "was <7>");
    }

    #[test]
    fn test_not_anything_never_matches() {
        let matcher = not(anything());
        assert!(!matcher.matches(&0));
        assert!(!matcher.matches(&i64::MAX));
    }

    #[test]
    fn test_not_describes_inner() {
        let matcher: Box<dyn Matcher<bool>> = Box::new(not(equal_to(true)));
        let mut description = Description::new();
        matcher.describe(&mut description);
        assert_eq!(description.to_string(), "not <true>");
    }

    #[test]
    fn test_contains_string() {
        let matcher = contains_string("element #3");
        assert!(matcher.matches(&"not sequence with element #3".to_string()));
        assert!(!matcher.matches(&"element #4".to_string()));
    }

    #[test]
    fn test_matches_regex() {
        let matcher = matches_regex(Regex::new(r"^npm (install|i)$").unwrap());
        assert!(matcher.matches(&"npm install".to_string()));
        assert!(matcher.matches(&"npm i".to_string()));
        assert!(!matcher.matches(&"npm run".to_string()));
    }

    #[test]
    fn test_matches_glob() {
        let matcher = matches_glob(Pattern::new("*.env").unwrap());
        assert!(matcher.matches(&".env".to_string()));
        assert!(matcher.matches(&"test.env".to_string()));
        assert!(!matcher.matches(&"test.txt".to_string()));
    }
}
