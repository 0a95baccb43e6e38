//! Structural matching over captured failures and their stack frames.

use crate::basic::anything;
use crate::capture::{Failure, Frame, Value};
use crate::description::Description;
use crate::matcher::Matcher;

/// Matches a [`Failure`] field by field.
///
/// Every field starts out as the [`anything`] wildcard; chain the builder
/// methods to constrain the fields you care about. All constrained fields
/// must match for the failure to match.
///
/// # Example
///
/// ```rust
/// use simile::{equal_to, is_failure, Failure, Matcher, Value};
///
/// let failure = Failure {
///     kind: "ValueError".to_string(),
///     value: Value::Text("Oh no".to_string()),
///     parents: vec![],
///     frames: vec![],
/// };
/// assert!(is_failure().kind(equal_to("ValueError")).matches(&failure));
/// assert!(!is_failure().kind(equal_to("RuntimeError")).matches(&failure));
/// ```
pub fn is_failure() -> IsFailure {
    IsFailure {
        kind: Box::new(anything()),
        value: Box::new(anything()),
        parents: Box::new(anything()),
        frames: Box::new(anything()),
    }
}

/// See [`is_failure`].
pub struct IsFailure {
    kind: Box<dyn Matcher<String>>,
    value: Box<dyn Matcher<Value>>,
    parents: Box<dyn Matcher<[String]>>,
    frames: Box<dyn Matcher<[Frame]>>,
}

impl IsFailure {
    /// Constrain the runtime tag of the raised error.
    pub fn kind(mut self, matcher: impl Matcher<String> + 'static) -> Self {
        self.kind = Box::new(matcher);
        self
    }

    /// Constrain the payload the error carried.
    pub fn value(mut self, matcher: impl Matcher<Value> + 'static) -> Self {
        self.value = Box::new(matcher);
        self
    }

    /// Constrain the ancestor tags of the error's kind.
    pub fn parents(mut self, matcher: impl Matcher<[String]> + 'static) -> Self {
        self.parents = Box::new(matcher);
        self
    }

    /// Constrain the captured call stack, usually with
    /// [`crate::contains_exactly`] over [`crate::similar_frame`] matchers.
    pub fn frames(mut self, matcher: impl Matcher<[Frame]> + 'static) -> Self {
        self.frames = Box::new(matcher);
        self
    }
}

impl Matcher<Failure> for IsFailure {
    fn matches(&self, failure: &Failure) -> bool {
        self.kind.matches(&failure.kind)
            && self.value.matches(&failure.value)
            && self.parents.matches(&failure.parents)
            && self.frames.matches(&failure.frames)
    }

    fn describe(&self, description: &mut Description) {
        description.append_text("a failure with kind ");
        self.kind.describe(description);
        description.append_text(", value ");
        self.value.describe(description);
        description.append_text(", parents ");
        self.parents.describe(description);
        description.append_text(", frames ");
        self.frames.describe(description);
    }

    fn describe_mismatch(&self, failure: &Failure, description: &mut Description) {
        description.append_text("a failure where");
        if !self.kind.matches(&failure.kind) {
            description.append_text(" kind ");
            self.kind.describe_mismatch(&failure.kind, description);
        }
        if !self.value.matches(&failure.value) {
            description.append_text(" value ");
            self.value.describe_mismatch(&failure.value, description);
        }
        if !self.parents.matches(&failure.parents) {
            description.append_text(" parents ");
            self.parents.describe_mismatch(&failure.parents, description);
        }
        if !self.frames.matches(&failure.frames) {
            description.append_text(" frames ");
            self.frames.describe_mismatch(&failure.frames, description);
        }
    }
}

/// Matches a single [`Frame`] by function name and source location.
///
/// The function name must be equal; the source location only has to contain
/// the expected fragment, since capture mechanisms disagree on how much of a
/// path or module name they record.
///
/// # Example
///
/// ```rust
/// use simile::{similar_frame, Frame, Matcher};
///
/// let frame = Frame {
///     function: "run".to_string(),
///     source: "job/worker.rs".to_string(),
///     line: 7,
/// };
/// assert!(similar_frame("run", "worker").matches(&frame));
/// assert!(!similar_frame("run", "scheduler").matches(&frame));
/// ```
pub fn similar_frame(function: impl Into<String>, source: impl Into<String>) -> SimilarFrame {
    SimilarFrame {
        function: function.into(),
        source: source.into(),
    }
}

/// See [`similar_frame`].
#[derive(Debug, Clone)]
pub struct SimilarFrame {
    function: String,
    source: String,
}

impl Matcher<Frame> for SimilarFrame {
    fn matches(&self, frame: &Frame) -> bool {
        frame.function == self.function && frame.source.contains(&self.source)
    }

    fn describe(&self, description: &mut Description) {
        description.append_text(format!(
            "a frame for function {:?} from a source containing {:?}",
            self.function, self.source
        ));
    }

    fn describe_mismatch(&self, frame: &Frame, description: &mut Description) {
        description.append_text(format!(
            "was function {:?} from source {:?}",
            frame.function, frame.source
        ));
    }
}
