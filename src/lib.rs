//! # simile
//!
//! Composable assertion matchers with human-readable mismatch diagnostics.
//!
//! A matcher is a predicate that can also explain itself: it reports whether
//! a value matches, describes what it expected, and, on failure, describes
//! what it actually saw. Matchers nest, so a test harness can express
//! expectations like "this sequence sums to 6" or "this captured failure has
//! this kind and these stack frames" without hand-writing comparison and
//! error-message code per assertion.
//!
//! ## Quick Start
//!
//! ```rust
//! use simile::{assert_that, equal_to, has_sum, is_sequence_of};
//!
//! // Passes: 1 + 2 + 3 == 6.
//! assert_that(&[1, 2, 3][..], has_sum(equal_to(6), 0, |acc, n: &i32| acc + n));
//!
//! // Passes vacuously on the empty sequence.
//! assert_that(&[] as &[bool], is_sequence_of(equal_to(true)));
//! ```
//!
//! ## Diagnostics
//!
//! On mismatch, ask the same matcher tree for an explanation. Nothing is
//! written on a successful match; the sink you pass in stays untouched.
//!
//! ```rust
//! use simile::{equal_to, is_sequence_of, Description, Matcher};
//!
//! let matcher = is_sequence_of(equal_to(true));
//! let sequence = [true, false, true];
//! assert!(!matcher.matches(&sequence));
//!
//! let mut description = Description::new();
//! matcher.describe_mismatch(&sequence[..], &mut description);
//! assert!(description.to_string().contains("a sequence containing only"));
//! assert!(description.to_string().contains("element #1"));
//! ```
//!
//! ## Matching captured failures
//!
//! Failure and frame records come from an external exception-capture
//! mechanism (see [`capture`]); this crate only reads their fields.
//!
//! ```rust
//! use simile::{contains_exactly, equal_to, is_failure, similar_frame};
//! use simile::{Failure, Frame, Matcher};
//!
//! let failure = Failure {
//!     kind: "ValueError".to_string(),
//!     value: simile::Value::Text("Oh no".to_string()),
//!     parents: vec!["Exception".to_string()],
//!     frames: vec![Frame {
//!         function: "run".to_string(),
//!         source: "job/worker.rs".to_string(),
//!         line: 7,
//!     }],
//! };
//!
//! let matcher = is_failure()
//!     .kind(equal_to("ValueError"))
//!     .frames(contains_exactly(vec![Box::new(similar_frame("run", "worker")) as _]));
//! assert!(matcher.matches(&failure));
//! ```

pub mod basic;
pub mod capture;
pub mod description;
pub mod matcher;
pub mod matchers;

// The matcher contract and its sink
pub use description::Description;
pub use matcher::{assert_that, Matcher};

// Leaf matchers
pub use basic::{
    anything, contains_string, equal_to, matches_glob, matches_regex, not, Anything,
    ContainsString, EqualTo, MatchesGlob, MatchesRegex, Not,
};

// Combinators
pub use matchers::{
    contains_exactly, has_sum, is_failure, is_sequence_of, is_tuple, similar_frame,
    ContainsExactly, HasSum, IsFailure, IsSequenceOf, IsTuple, SimilarFrame,
};

// Capture records and stream decoding
pub use capture::{parse_failure_file, parse_failure_lines, CaptureError, Failure, Frame, Value};
