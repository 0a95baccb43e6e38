//! Matching a sequence by its reduced value.

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches a sequence whose elements, folded with `combine` starting from
/// `zero`, satisfy `sum`.
///
/// The fold is the caller's choice: integer addition, string concatenation,
/// byte concatenation, or anything else that pairs an identity `zero` with a
/// `combine(accumulator, element)` step. The matcher does not verify that
/// `zero` really is the identity for `combine`; that is a construction-time
/// precondition. An empty sequence reduces to exactly `zero`.
///
/// # Example
///
/// ```rust
/// use simile::{equal_to, has_sum, Matcher};
///
/// let sums_to_six = has_sum(equal_to(6), 0, |acc, n: &i32| acc + n);
/// assert!(sums_to_six.matches(&[1, 2, 3]));
/// assert!(!sums_to_six.matches(&[1, 2]));
/// ```
pub fn has_sum<S, M, F>(sum: M, zero: S, combine: F) -> HasSum<S, M, F>
where
    S: Clone,
    M: Matcher<S>,
    F: Fn(S, &S) -> S,
{
    HasSum { sum, zero, combine }
}

/// See [`has_sum`].
#[derive(Debug, Clone)]
pub struct HasSum<S, M, F> {
    sum: M,
    zero: S,
    combine: F,
}

impl<S, M, F> HasSum<S, M, F>
where
    S: Clone,
    F: Fn(S, &S) -> S,
{
    fn reduce(&self, sequence: &[S]) -> S {
        sequence
            .iter()
            .fold(self.zero.clone(), |accumulator, element| {
                (self.combine)(accumulator, element)
            })
    }
}

impl<S, M, F> Matcher<[S]> for HasSum<S, M, F>
where
    S: Clone,
    M: Matcher<S>,
    F: Fn(S, &S) -> S,
{
    fn matches(&self, value: &[S]) -> bool {
        self.sum.matches(&self.reduce(value))
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("a sequence with sum ");
        self.sum.describe(description);
    }

    fn describe_mismatch(&self, value: &[S], description: &mut Description) {
        self.describe(description);
        description.append_text(" but ");
        self.sum.describe_mismatch(&self.reduce(value), description);
    }
}
