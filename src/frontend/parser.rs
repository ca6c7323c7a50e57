use super::ast::{Expr, ExprType, File, FloatLiteral, Identifier, Properties, Stmt, StmtType};
use super::constants::MAX_NESTING_DEPTH;
use super::errors::{ParserError, ParserErrorType, ParserResult};
use super::lexer::Lexer;
use super::operator::{InfixOperator, Precedence, PrefixOperator};
use super::span::Span;
use super::token::{SpannedToken, Token, TokenKind};
use tracing::{debug, trace};

pub struct Parser<'s> {
    lexer: Lexer<'s>,
    current: SpannedToken,
    previous: SpannedToken,
    errors: Vec<ParserError>,
    depth: usize,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            previous: SpannedToken::new(Token::end_of_file(), Span::default()),
            errors: vec![],
            depth: 0,
        }
    }

    /// Diagnostics collected so far. A non-empty list means the parsed
    /// file cannot be trusted.
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    /// Parses the whole source, returning the tree only if it is error free.
    pub fn parse(mut self) -> Result<File, Vec<ParserError>> {
        let file = self.parse_file();

        if self.errors.is_empty() {
            Ok(file)
        } else {
            Err(self.errors)
        }
    }

    /// Parses every statement up to the end of input, recording errors
    /// instead of stopping at the first one.
    pub fn parse_file(&mut self) -> File {
        let mut stmts = vec![];

        while !self.check(TokenKind::EndOfFile) {
            if let Some(stmt) = self.parse_statement_with_recovery() {
                stmts.push(stmt);
            }
        }

        debug!(
            statements = stmts.len(),
            errors = self.errors.len(),
            "parsed scene file"
        );
        File::new(stmts)
    }

    /// Advances the stream.
    fn bump(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
        self.current = self.lexer.next_token();
    }

    /// Checks whether or not the current token is of the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    /// If the current token is of the given kind, consume it and return true.
    fn check_consume(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.bump();
            return true;
        }
        false
    }

    /// Consumes the current token if it has the expected kind. A mismatch is
    /// left in the stream for recovery to deal with.
    fn consume(&mut self, expected: TokenKind) -> ParserResult<()> {
        if self.check_consume(expected) {
            Ok(())
        } else {
            Err(self.error_at_current(ParserErrorType::ExpectedToken(
                expected,
                self.current.token.clone(),
            )))
        }
    }

    fn error_at_current(&self, error: ParserErrorType) -> ParserError {
        let error = match self.current.kind() {
            TokenKind::Illegal => ParserErrorType::IllegalToken(self.current.token.literal.clone()),
            _ => error,
        };
        ParserError::new(self.current.span, error)
    }

    fn emit_error(&mut self, error: ParserError) {
        trace!(%error, "recording parse error");
        self.errors.push(error);
    }

    fn starts_statement(&self) -> bool {
        let kind = self.current.kind();
        kind.is_value_kind() || kind == TokenKind::Modify
    }

    /// Skips ahead to the next token that can begin a statement.
    fn synchronize(&mut self) {
        while !self.starts_statement() && !self.check(TokenKind::EndOfFile) {
            self.bump();
        }
    }

    fn parse_statement_with_recovery(&mut self) -> Option<Stmt> {
        self.depth = 0;

        match self.parse_statement() {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.emit_error(err);
                self.synchronize();
                None
            }
        }
    }

    fn parse_statement(&mut self) -> ParserResult<Stmt> {
        let curr_span = self.current.span;

        let stmt_type = match self.current.kind() {
            kind if kind.is_value_kind() => self.parse_assign()?,
            TokenKind::Modify => self.parse_modify()?,
            _ => StmtType::Expression(self.parse_expression()?),
        };

        Ok(Stmt::new(stmt_type, curr_span.extend(self.previous.span)))
    }

    /// `TYPE name = expression`
    fn parse_assign(&mut self) -> ParserResult<StmtType> {
        let class = self.current.token.clone();
        self.bump();

        let name = self.parse_identifier()?;
        self.consume(TokenKind::Assign)?;
        let value = self.parse_expression()?;

        Ok(StmtType::Assign(class, name, value))
    }

    /// `MODIFY target { properties }`
    fn parse_modify(&mut self) -> ParserResult<StmtType> {
        let keyword = self.current.token.clone();
        self.bump();

        let target = if self.check(TokenKind::Ident) || self.current.kind().is_builtin_object() {
            self.bump();
            Identifier::new(self.previous.token.literal.clone(), self.previous.span)
        } else {
            return Err(self.error_at_current(ParserErrorType::ExpectedModifyTarget(
                self.current.token.clone(),
            )));
        };

        let curr_span = self.current.span;
        let properties = self.parse_properties()?;
        let value = Expr::new(
            ExprType::Properties(properties),
            curr_span.extend(self.previous.span),
        );

        Ok(StmtType::Modify(keyword, target, value))
    }

    fn parse_identifier(&mut self) -> ParserResult<Identifier> {
        if !self.check(TokenKind::Ident) {
            return Err(self.error_at_current(ParserErrorType::ExpectedIdentifier(
                self.current.token.clone(),
            )));
        }

        self.bump();
        Ok(Identifier::new(
            self.previous.token.literal.clone(),
            self.previous.span,
        ))
    }

    /// Parse expression with precedence.
    pub fn parse_expression(&mut self) -> ParserResult<Expr> {
        self.parse_expression_with(Precedence::Lowest)
    }

    fn parse_expression_with(&mut self, min_precedence: Precedence) -> ParserResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.too_deeply_nested());
        }

        let entry_depth = self.depth;
        self.depth += 1;
        let result = self.run_pratt_parse_algo(min_precedence);
        self.depth = entry_depth;

        result
    }

    fn too_deeply_nested(&self) -> ParserError {
        ParserError::new(self.current.span, ParserErrorType::TooDeeplyNested)
    }

    /// Parses a prefix expression, then keeps folding in infix operators
    /// that bind tighter than `min_precedence`. Every folded operator adds a
    /// level to the tree, so it counts toward the nesting depth.
    fn run_pratt_parse_algo(&mut self, min_precedence: Precedence) -> ParserResult<Expr> {
        let mut lhs = match PrefixOperator::from_token(self.current.kind()) {
            Some(op) => {
                let curr_span = self.current.span;
                self.bump();
                let rhs = self.parse_expression_with(op.precedence())?;
                Expr::new(
                    ExprType::Prefix(op, Box::new(rhs)),
                    curr_span.extend(self.previous.span),
                )
            }
            None => self.parse_primary()?,
        };

        while let Some(op) = InfixOperator::from_token(self.current.kind()) {
            if !op.binds_tighter_than(min_precedence) {
                break;
            }
            if self.depth >= MAX_NESTING_DEPTH {
                return Err(self.too_deeply_nested());
            }

            self.depth += 1;
            self.bump();
            let rhs = self.parse_expression_with(op.precedence())?;
            let span = lhs.span.extend(self.previous.span);
            lhs = Expr::new(ExprType::Infix(op, Box::new(lhs), Box::new(rhs)), span);
        }

        Ok(lhs)
    }

    fn parse_primary(&mut self) -> ParserResult<Expr> {
        let curr_span = self.current.span;

        let expr = match self.current.kind() {
            TokenKind::Float => {
                let literal = self.current.token.literal.clone();
                let value = match literal.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(ParserError::new(
                            curr_span,
                            ParserErrorType::MalformedNumber(literal),
                        ))
                    }
                };
                self.bump();
                ExprType::FloatLiteral(FloatLiteral { value, literal })
            }
            TokenKind::Ident => {
                self.bump();
                let name = self.previous.token.literal.clone();
                ExprType::Identifier(Identifier::new(name, curr_span))
            }
            TokenKind::LeftParen => {
                self.bump();
                let sub_expr = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                return Ok(sub_expr);
            }
            TokenKind::LeftBracket => {
                self.bump();
                let elements = self.parse_comma_sep(TokenKind::RightBracket, Self::parse_expression)?;
                ExprType::Array(elements)
            }
            TokenKind::LeftBrace => ExprType::Properties(self.parse_properties()?),
            _ => {
                return Err(self.error_at_current(ParserErrorType::ExpectedExpr(
                    self.current.token.clone(),
                )))
            }
        };

        Ok(Expr::new(expr, curr_span.extend(self.previous.span)))
    }

    /// `{ key: value, ... }` with the current token on the opening brace.
    fn parse_properties(&mut self) -> ParserResult<Properties> {
        self.consume(TokenKind::LeftBrace)?;

        let entries = self.parse_comma_sep(TokenKind::RightBrace, |this| {
            let key = if this.check(TokenKind::Ident) {
                this.bump();
                Identifier::new(this.previous.token.literal.clone(), this.previous.span)
            } else {
                return Err(this.error_at_current(ParserErrorType::ExpectedPropertyName(
                    this.current.token.clone(),
                )));
            };
            this.consume(TokenKind::Colon)?;
            let value = this.parse_expression()?;
            Ok((key, value))
        })?;

        let mut properties = Properties::new();
        for (key, value) in entries.into_iter() {
            properties.insert(key, value);
        }

        Ok(properties)
    }

    /// Parses comma separated items up to and including `closing`. The
    /// opening delimiter must already be consumed. A trailing comma is allowed.
    fn parse_comma_sep<T, F>(&mut self, closing: TokenKind, parser: F) -> ParserResult<Vec<T>>
    where
        F: Fn(&mut Parser<'s>) -> ParserResult<T>,
    {
        let mut items = vec![];

        while !self.check_consume(closing) {
            items.push(parser(self)?);

            if !self.check_consume(TokenKind::Comma) {
                self.consume(closing)?;
                break;
            }
        }

        Ok(items)
    }
}
