//! Element-wise sequence matchers.

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches a sequence in which every element satisfies `element`.
///
/// Elements are checked in order and evaluation stops at the first failure;
/// the mismatch text names the first failing zero-based index. An empty
/// sequence matches vacuously.
///
/// # Example
///
/// ```rust
/// use simile::{equal_to, is_sequence_of, Matcher};
///
/// let all_true = is_sequence_of(equal_to(true));
/// assert!(all_true.matches(&[true, true]));
/// assert!(!all_true.matches(&[true, false, true]));
/// ```
pub fn is_sequence_of<M>(element: M) -> IsSequenceOf<M> {
    IsSequenceOf { element }
}

/// See [`is_sequence_of`].
#[derive(Debug, Clone)]
pub struct IsSequenceOf<M> {
    element: M,
}

impl<E, M: Matcher<E>> Matcher<[E]> for IsSequenceOf<M> {
    fn matches(&self, value: &[E]) -> bool {
        value.iter().all(|element| self.element.matches(element))
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("a sequence containing only ");
        self.element.describe(description);
    }

    fn describe_mismatch(&self, value: &[E], description: &mut Description) {
        self.describe(description);
        let failed = value
            .iter()
            .position(|element| !self.element.matches(element));
        if let Some(index) = failed {
            description.append_text(format!(", not sequence with element #{index} "));
            self.element.describe_mismatch(&value[index], description);
        }
    }
}

/// Matches a sequence with exactly one element per given matcher, in order.
///
/// This is the positional analogue of [`crate::is_tuple`] for slices: the
/// sequence must have the same length as the matcher list and every element
/// must satisfy the matcher at its position. The usual use is pinning down a
/// captured frame list:
///
/// ```rust
/// use simile::{contains_exactly, similar_frame, Frame, Matcher};
///
/// let frames = vec![Frame {
///     function: "run".to_string(),
///     source: "job/worker.rs".to_string(),
///     line: 7,
/// }];
/// let matcher = contains_exactly(vec![Box::new(similar_frame("run", "worker")) as _]);
/// assert!(matcher.matches(&frames[..]));
/// ```
pub fn contains_exactly<E>(elements: Vec<Box<dyn Matcher<E>>>) -> ContainsExactly<E> {
    ContainsExactly { elements }
}

/// See [`contains_exactly`].
pub struct ContainsExactly<E> {
    elements: Vec<Box<dyn Matcher<E>>>,
}

impl<E> Matcher<[E]> for ContainsExactly<E> {
    fn matches(&self, value: &[E]) -> bool {
        value.len() == self.elements.len()
            && self
                .elements
                .iter()
                .zip(value)
                .all(|(matcher, element)| matcher.matches(element))
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("a sequence containing exactly ");
        description.append_list("[", ", ", "]", &self.elements);
    }

    fn describe_mismatch(&self, value: &[E], description: &mut Description) {
        self.describe(description);
        if value.len() != self.elements.len() {
            description.append_text(format!(
                ", was a sequence of {} elements instead of {}",
                value.len(),
                self.elements.len()
            ));
            return;
        }
        for (index, (matcher, element)) in self.elements.iter().zip(value).enumerate() {
            if !matcher.matches(element) {
                description.append_text(format!(", not sequence with element #{index} "));
                matcher.describe_mismatch(element, description);
            }
        }
    }
}
