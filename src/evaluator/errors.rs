use crate::frontend::operator::{InfixOperator, PrefixOperator};
use thiserror::Error;

/// First failure hit while walking a scene. Evaluation stops on it.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluatorError {
    #[error("redefining objects is not allowed: {0}")]
    Redefinition(String),
    #[error("undefined identifier: {0}")]
    UndefinedIdentifier(String),
    #[error("infix operator {0} only supports numbers, got: {1}")]
    IllegalInfixOperation(InfixOperator, &'static str),
    #[error("prefix operator {0} only supports numbers, got: {1}")]
    IllegalPrefixOperation(PrefixOperator, &'static str),
    #[error("division by zero")]
    DivideByZero,
    #[error("only built-in objects can be modified: {0}")]
    NotABuiltin(String),
    #[error("{0} can only be modified with properties, got: {1}")]
    ModifyWithoutProperties(String, &'static str),
}

pub type RuntimeResult<T> = Result<T, EvaluatorError>;
