//! Structural records produced by an external exception-capture mechanism.
//!
//! The matcher core never constructs or mutates these records; it only reads
//! their named fields. Capture streams arrive as JSONL, one failure record
//! per line, and are decoded here so a harness can feed them straight into
//! [`crate::is_failure`] and friends.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A dynamically typed payload carried by a capture record.
///
/// Captured values come from an untyped runtime, so the payload keeps its
/// runtime tag. Tuples and lists are distinct variants on purpose: tuple
/// matchers reject anything that is not a tuple, including lists of the
/// right length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// No payload.
    #[default]
    Nil,
    /// A boolean payload.
    Bool(bool),
    /// An integer payload.
    Int(i64),
    /// A text payload.
    Text(String),
    /// A raw byte payload.
    Bytes(Vec<u8>),
    /// A variable-length ordered collection.
    List(Vec<Value>),
    /// A fixed-arity ordered collection.
    Tuple(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value:?}"),
            Value::Bytes(value) => write!(f, "{value:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// One entry in a captured call stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Name of the function executing in this frame.
    pub function: String,
    /// Module or file identifier the frame comes from.
    pub source: String,
    /// Line number within `source`, when the capture mechanism records one.
    #[serde(default)]
    pub line: u32,
}

/// A captured failure: a raised error plus its call-stack context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Runtime tag of the raised error, e.g. `ValueError`.
    pub kind: String,
    /// The underlying payload the error carried.
    #[serde(default)]
    pub value: Value,
    /// Tags of the error's ancestor kinds, outermost last.
    #[serde(default)]
    pub parents: Vec<String>,
    /// The captured call stack, outermost frame first.
    #[serde(default)]
    pub frames: Vec<Frame>,
}

/// Error decoding a capture stream.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The stream could not be read at all.
    #[error("failed to read capture stream: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not a valid failure record.
    #[error("malformed failure record on line {line}: {source}")]
    Malformed {
        /// One-based line number of the offending record.
        line: usize,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a capture stream held in memory. Blank lines are skipped.
pub fn parse_failure_lines(input: &str) -> Result<Vec<Failure>, CaptureError> {
    let mut failures = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let failure = serde_json::from_str(line).map_err(|source| CaptureError::Malformed {
            line: index + 1,
            source,
        })?;
        failures.push(failure);
    }
    Ok(failures)
}

/// Decode a JSONL capture file, one failure record per line.
pub fn parse_failure_file(path: &Path) -> Result<Vec<Failure>, CaptureError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut failures = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let failure = serde_json::from_str(&line).map_err(|source| CaptureError::Malformed {
            line: index + 1,
            source,
        })?;
        failures.push(failure);
    }

    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let stream = concat!(
            r#"{"kind":"ValueError","value":{"text":"Oh no"}}"#,
            "\n\n",
            r#"{"kind":"RuntimeError"}"#,
            "\n",
        );
        let failures = parse_failure_lines(stream).unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].kind, "ValueError");
        assert_eq!(failures[0].value, Value::Text("Oh no".to_string()));
        assert_eq!(failures[1].kind, "RuntimeError");
        assert_eq!(failures[1].value, Value::Nil);
        assert!(failures[1].frames.is_empty());
    }

    #[test]
    fn test_parse_reports_offending_line_number() {
        let stream = concat!(
            r#"{"kind":"ValueError"}"#,
            "\n",
            "not json at all\n",
        );
        match parse_failure_lines(stream) {
            Err(CaptureError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a malformed-record error, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_line_defaults_to_zero() {
        let stream = r#"{"kind":"ValueError","frames":[{"function":"run","source":"worker.rs"}]}"#;
        let failures = parse_failure_lines(stream).unwrap();
        assert_eq!(failures[0].frames[0].line, 0);
    }

    #[test]
    fn test_value_display_distinguishes_tuples_from_lists() {
        let tuple = Value::Tuple(vec![Value::Int(1), Value::Text("a".into())]);
        let list = Value::List(vec![Value::Int(1), Value::Text("a".into())]);
        assert_eq!(tuple.to_string(), "(1, \"a\")");
        assert_eq!(list.to_string(), "[1, \"a\"]");
    }
}
