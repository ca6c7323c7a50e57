use super::constants::MAX_NESTING_DEPTH;
use super::span::Span;
use super::token::{Token, TokenKind};
use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
#[error("{error} (line {})", .span.line_no())]
pub struct ParserError {
    pub span: Span,
    pub error: ParserErrorType,
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParserErrorType {
    #[error("Expected {0}, but instead got {1}")]
    ExpectedToken(TokenKind, Token),
    #[error("Expected expression, but instead got {0}")]
    ExpectedExpr(Token),
    #[error("Expected identifier, but instead got {0}")]
    ExpectedIdentifier(Token),
    #[error("Expected property name, but instead got {0}")]
    ExpectedPropertyName(Token),
    #[error("Expected object to modify, but instead got {0}")]
    ExpectedModifyTarget(Token),
    #[error("Could not parse `{0}` as a number")]
    MalformedNumber(String),
    #[error("Illegal token `{0}`")]
    IllegalToken(String),
    #[error("Expression nested deeper than {} levels", MAX_NESTING_DEPTH)]
    TooDeeplyNested,
}

pub type ParserResult<T> = Result<T, ParserError>;

impl ParserError {
    pub fn new(span: Span, error: ParserErrorType) -> Self {
        ParserError { span, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::span::CodePosition;

    #[test]
    fn test_error_messages() {
        let span = Span::at(CodePosition::new(14, 3, 2));
        let error = ParserError::new(
            span,
            ParserErrorType::ExpectedToken(TokenKind::Assign, Token::new(TokenKind::Float, "5")),
        );

        assert_eq!(
            error.to_string(),
            "Expected '=', but instead got FLOAT '5' (line 3)"
        );
    }
}
