//! Fixed-arity positional matching over dynamic values.

use crate::capture::Value;
use crate::description::Description;
use crate::matcher::Matcher;

/// Matches a [`Value::Tuple`] with one matcher per slot, in order.
///
/// Anything that is not a tuple, or a tuple of a different arity, is an
/// ordinary non-match rather than an error. The [`crate::is_tuple!`] macro
/// boxes its arguments for the common literal case:
///
/// ```rust
/// use simile::{equal_to, Matcher, Value};
///
/// let matcher = simile::is_tuple![equal_to(Value::Int(1)), equal_to(Value::Bool(true))];
/// assert!(matcher.matches(&Value::Tuple(vec![Value::Int(1), Value::Bool(true)])));
/// assert!(!matcher.matches(&Value::List(vec![Value::Int(1), Value::Bool(true)])));
/// ```
pub fn is_tuple(slots: Vec<Box<dyn Matcher<Value>>>) -> IsTuple {
    IsTuple { slots }
}

/// See [`is_tuple`].
pub struct IsTuple {
    slots: Vec<Box<dyn Matcher<Value>>>,
}

impl Matcher<Value> for IsTuple {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Tuple(items) => {
                items.len() == self.slots.len()
                    && self
                        .slots
                        .iter()
                        .zip(items)
                        .all(|(matcher, item)| matcher.matches(item))
            }
            _ => false,
        }
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("a tuple of ");
        description.append_list("(", ", ", ")", &self.slots);
    }

    fn describe_mismatch(&self, value: &Value, description: &mut Description) {
        let items = match value {
            Value::Tuple(items) if items.len() == self.slots.len() => items,
            other => {
                // No positional comparison was possible.
                description.append_text(format!(
                    "not a tuple of the expected shape, was {other}"
                ));
                return;
            }
        };
        self.describe(description);
        for (index, (matcher, item)) in self.slots.iter().zip(items).enumerate() {
            if !matcher.matches(item) {
                description.append_text(format!(", element #{index} "));
                matcher.describe_mismatch(item, description);
            }
        }
    }
}

/// Build an [`is_tuple`] matcher from a list of matcher expressions, boxing
/// each one.
///
/// ```rust
/// use simile::{anything, equal_to, Matcher, Value};
///
/// let matcher = simile::is_tuple![equal_to(Value::Int(1)), anything()];
/// assert!(matcher.matches(&Value::Tuple(vec![Value::Int(1), Value::Nil])));
/// ```
#[macro_export]
macro_rules! is_tuple {
    ($($matcher:expr),* $(,)?) => {
        $crate::is_tuple(::std::vec![
            $(::std::boxed::Box::new($matcher) as ::std::boxed::Box<dyn $crate::Matcher<$crate::Value>>,)*
        ])
    };
}
