//! Combinator matchers built on the three-operation contract.
//!
//! Each combinator wraps one or more inner matchers and delegates both
//! evaluation and diagnostics to them, adding its own positional or
//! field-name context on the way down.

mod failure;
mod sequence;
mod sum;
mod tuple;

pub use failure::{is_failure, similar_frame, IsFailure, SimilarFrame};
pub use sequence::{contains_exactly, is_sequence_of, ContainsExactly, IsSequenceOf};
pub use sum::{has_sum, HasSum};
pub use tuple::{is_tuple, IsTuple};
