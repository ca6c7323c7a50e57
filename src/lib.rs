pub mod evaluator;
pub mod frontend;

use evaluator::{EvaluatedValues, Evaluator, EvaluatorError};
use frontend::ast::File;
use frontend::{Parser, ParserError};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum SceneError {
    #[error("failed to parse scene: {}", join_errors(.0))]
    Parse(Vec<ParserError>),
    #[error("failed to evaluate scene: {0}")]
    Evaluate(#[from] EvaluatorError),
}

fn join_errors(errors: &[ParserError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Evaluates an already parsed scene.
pub fn evaluate(file: &File) -> Result<EvaluatedValues, SceneError> {
    let mut evaluator = Evaluator::new();
    evaluator.eval_file(file)?;
    Ok(evaluator.export_values())
}

/// Parses and evaluates scene source in one go.
pub fn evaluate_source(source: &str) -> Result<EvaluatedValues, SceneError> {
    let file = Parser::new(source).parse().map_err(SceneError::Parse)?;
    evaluate(&file)
}
