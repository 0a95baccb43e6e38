//! Integration tests: decode a capture stream from disk and match it with
//! composed failure matchers, the way a harness consumes this crate.

use std::io::Write;

use simile::{
    assert_that, contains_exactly, contains_string, equal_to, is_failure, not,
    parse_failure_file, parse_failure_lines, similar_frame, CaptureError, Failure, Frame, Matcher,
    Value,
};
use tempfile::NamedTempFile;

fn sample_failures() -> Vec<Failure> {
    vec![
        Failure {
            kind: "ValueError".to_string(),
            value: Value::Text("Oh no".to_string()),
            parents: vec!["Exception".to_string()],
            frames: vec![
                Frame {
                    function: "run_case".to_string(),
                    source: "harness/runner.rs".to_string(),
                    line: 88,
                },
                Frame {
                    function: "check_total".to_string(),
                    source: "harness/checks.rs".to_string(),
                    line: 17,
                },
            ],
        },
        Failure {
            kind: "ZeroDivisionError".to_string(),
            value: Value::Tuple(vec![Value::Int(1), Value::Int(0)]),
            parents: vec!["ArithmeticError".to_string(), "Exception".to_string()],
            frames: vec![],
        },
    ]
}

fn write_stream(failures: &[Failure]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for failure in failures {
        let line = serde_json::to_string(failure).expect("Failed to encode failure");
        writeln!(file, "{line}").expect("Failed to write capture line");
    }
    writeln!(file).expect("Failed to write trailing blank line");
    file
}

#[test]
fn test_capture_file_round_trips_through_the_matchers() {
    let failures = sample_failures();
    let file = write_stream(&failures);

    let decoded = parse_failure_file(file.path()).expect("Failed to decode capture file");
    assert_eq!(decoded.len(), 2);

    assert_that(
        &decoded[0],
        is_failure()
            .kind(equal_to("ValueError"))
            .value(equal_to(Value::Text("Oh no".to_string())))
            .frames(contains_exactly(vec![
                Box::new(similar_frame("run_case", "runner")) as Box<dyn Matcher<Frame>>,
                Box::new(similar_frame("check_total", "checks")),
            ])),
    );

    assert_that(
        &decoded[1],
        is_failure()
            .kind(not(equal_to("ValueError")))
            .value(simile::is_tuple![
                equal_to(Value::Int(1)),
                equal_to(Value::Int(0)),
            ]),
    );
}

#[test]
fn test_mismatch_diagnostic_renders_for_a_decoded_failure() {
    let failures = sample_failures();
    let stream: String = failures
        .iter()
        .map(|f| serde_json::to_string(f).unwrap() + "\n")
        .collect();

    let decoded = parse_failure_lines(&stream).expect("Failed to decode capture stream");
    let matcher = is_failure()
        .kind(contains_string("Timeout"))
        .frames(contains_exactly(vec![
            Box::new(similar_frame("run_case", "runner")) as Box<dyn Matcher<Frame>>,
        ]));

    assert!(!matcher.matches(&decoded[0]));
    let mut description = simile::Description::new();
    matcher.describe_mismatch(&decoded[0], &mut description);
    let text = description.to_string();
    assert!(text.contains("kind"), "got: {text}");
    assert!(text.contains("ValueError"), "got: {text}");
    assert!(text.contains("2 elements instead of 1"), "got: {text}");
}

#[test]
fn test_malformed_capture_line_is_reported_with_its_position() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", serde_json::to_string(&sample_failures()[0]).unwrap()).unwrap();
    writeln!(file, "this is not a failure record").unwrap();

    match parse_failure_file(file.path()) {
        Err(CaptureError::Malformed { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a malformed-record error, got {other:?}"),
    }
}
