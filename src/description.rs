//! Append-only text sink for matcher diagnostics.
//!
//! Matchers never build strings directly; they append fragments to a
//! [`Description`] passed in by the caller. Composite matchers thread the same
//! sink through their inner matchers, so a full diagnostic is assembled in
//! call order.

use std::fmt;

use crate::matcher::Matcher;

/// An ordered, append-only accumulator of diagnostic text.
///
/// Fragments are rendered in the exact order they were appended; nothing is
/// ever truncated or reordered. A matcher that appends nothing leaves the
/// sink exactly as it received it.
///
/// # Example
///
/// ```rust
/// use simile::Description;
///
/// let mut description = Description::new();
/// description.append_text("was ").append_value(&7);
/// assert_eq!(description.to_string(), "was <7>");
/// ```
#[derive(Debug, Default)]
pub struct Description {
    fragments: Vec<String>,
}

impl Description {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|fragment| fragment.is_empty())
    }

    /// Append a literal text fragment.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(text.into());
        self
    }

    /// Append a value rendered in angle brackets, e.g. `<7>` or `<"abc">`.
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        self.fragments.push(format!("<{value:?}>"));
        self
    }

    /// Append the expectation text of another matcher.
    pub fn append_description_of<T: ?Sized>(&mut self, matcher: &dyn Matcher<T>) -> &mut Self {
        matcher.describe(self);
        self
    }

    /// Append the expectations of a list of matchers, delimited and separated.
    pub fn append_list<T: ?Sized>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        matchers: &[Box<dyn Matcher<T>>],
    ) -> &mut Self {
        self.append_text(start);
        for (index, matcher) in matchers.iter().enumerate() {
            if index > 0 {
                self.append_text(separator);
            }
            matcher.describe(self);
        }
        self.append_text(end);
        self
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
