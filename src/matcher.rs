//! The matcher contract shared by every predicate in this crate.
//!
//! A matcher answers three questions: does a value match, what was expected,
//! and what was actually seen when a mismatch is confirmed. Evaluation is
//! split from diagnostics so callers only pay for text rendering on failure,
//! and so a successful match leaves the caller's sink untouched.

use crate::description::Description;

/// A predicate over values of type `T` that can explain itself.
///
/// Matchers are immutable once constructed and hold only the configuration
/// they were built with, so a single instance may be shared freely across
/// threads and evaluated against many inputs.
///
/// `describe_mismatch` is only meaningful after `matches` has returned
/// `false` for the same value; callers must not invoke it on a successful
/// match.
pub trait Matcher<T: ?Sized> {
    /// Whether `value` satisfies this matcher. Pure; never touches a sink.
    fn matches(&self, value: &T) -> bool;

    /// Append a statement of what this matcher expects.
    fn describe(&self, description: &mut Description);

    /// Append a statement of what was actually observed for a confirmed
    /// mismatch.
    fn describe_mismatch(&self, value: &T, description: &mut Description);
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self, description: &mut Description) {
        (**self).describe(description);
    }

    fn describe_mismatch(&self, value: &T, description: &mut Description) {
        (**self).describe_mismatch(value, description);
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self, description: &mut Description) {
        (**self).describe(description);
    }

    fn describe_mismatch(&self, value: &T, description: &mut Description) {
        (**self).describe_mismatch(value, description);
    }
}

/// Assert that `value` satisfies `matcher`, panicking with a rendered
/// diagnostic otherwise.
///
/// # Example
///
/// ```rust
/// use simile::{assert_that, equal_to, is_sequence_of};
///
/// assert_that(&[2, 2, 2][..], is_sequence_of(equal_to(2)));
/// ```
///
/// # Panics
///
/// Panics with `assertion failed` plus the expectation and mismatch text
/// when the value does not match.
pub fn assert_that<T: ?Sized, M: Matcher<T>>(value: &T, matcher: M) {
    if matcher.matches(value) {
        return;
    }
    let mut expected = Description::new();
    matcher.describe(&mut expected);
    let mut mismatch = Description::new();
    matcher.describe_mismatch(value, &mut mismatch);
    panic!("assertion failed\n expected: {expected}\n      but: {mismatch}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{anything, equal_to};

    #[test]
    fn test_assert_that_passes_silently() {
        assert_that(&5, equal_to(5));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_that_panics_on_mismatch() {
        assert_that(&5, equal_to(6));
    }

    #[test]
    fn test_boxed_matcher_delegates() {
        let matcher: Box<dyn Matcher<i64>> = Box::new(equal_to(5));
        assert!(matcher.matches(&5));
        assert!(!matcher.matches(&6));
    }

    #[test]
    fn test_borrowed_matcher_delegates() {
        let matcher = anything();
        assert!((&matcher).matches(&"whatever"));
    }
}
