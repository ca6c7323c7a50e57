use rusty_scene::{evaluate_source, SceneError};

use regex::Regex;
use std::path::Path;
use test_generator::test_resources;

#[derive(Debug, PartialEq)]
enum ExpectedOutput {
    ParserErrors(Vec<String>),
    RuntimeError(String),
    Evaluated(Vec<String>),
}

#[test_resources("tests/scene_test_cases/**/*.sdl")]
fn test_scene_file(file: &str) {
    let source = std::fs::read_to_string(file).unwrap();
    let expected = std::fs::read_to_string(Path::new(file).with_extension("expected")).unwrap();

    let result = evaluate_source(&source);

    if let Some(message) = get_expected_scene_error(&expected) {
        let error = result.as_ref().err().map(|e| e.to_string());
        assert_eq!(error, Some(message), "{}", file);
    }

    assert_eq!(get_expected_output(&expected), to_output(result), "{}", file);
}

fn to_output<T: ToString>(result: Result<T, SceneError>) -> ExpectedOutput {
    match result {
        Ok(values) => ExpectedOutput::Evaluated(
            values.to_string().lines().map(|l| l.to_owned()).collect(),
        ),
        Err(SceneError::Parse(errors)) => {
            ExpectedOutput::ParserErrors(errors.iter().map(|e| e.to_string()).collect())
        }
        Err(SceneError::Evaluate(e)) => ExpectedOutput::RuntimeError(e.to_string()),
    }
}

fn get_expected_scene_error(expected: &str) -> Option<String> {
    let scene_error_regexer = Regex::new(r"^expect error: (.*)$").unwrap();

    expected
        .lines()
        .find_map(|line| scene_error_regexer.captures(line))
        .map(|r| r.get(1).unwrap().as_str().to_owned())
}

fn get_expected_output(expected: &str) -> ExpectedOutput {
    let output_regexer = Regex::new(r"^expect: (.*)$").unwrap();
    let parser_error_regexer = Regex::new(r"^expect parse error: (.*)$").unwrap();
    let runtime_error_regexer = Regex::new(r"^expect runtime error: (.*)$").unwrap();

    let mut output = vec![];
    let mut parser_errors = vec![];
    let mut runtime_error = None;

    for line in expected.lines() {
        if let Some(r) = output_regexer.captures(line) {
            output.push(r.get(1).unwrap().as_str().to_owned());
        }
        if let Some(r) = parser_error_regexer.captures(line) {
            parser_errors.push(r.get(1).unwrap().as_str().to_owned());
        }
        if let Some(r) = runtime_error_regexer.captures(line) {
            runtime_error.replace(r.get(1).unwrap().as_str().to_owned());
        }
    }

    if !parser_errors.is_empty() {
        ExpectedOutput::ParserErrors(parser_errors)
    } else if let Some(e) = runtime_error {
        ExpectedOutput::RuntimeError(e)
    } else {
        ExpectedOutput::Evaluated(output)
    }
}
