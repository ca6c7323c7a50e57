use super::operator::{InfixOperator, PrefixOperator};
use super::span::Span;
use super::token::Token;
use std::fmt;

/// Root of a parsed scene. Statement order is evaluation order.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct File {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Stmt {
    pub stmt: StmtType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum StmtType {
    /// `SPHERE ball = {...}`. The token is the declaring keyword.
    Assign(Token, Identifier, Expr),
    /// `MODIFY CAMERA {...}`. The token is `MODIFY`.
    Modify(Token, Identifier, Expr),
    Expression(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Expr {
    pub expr: ExprType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExprType {
    Identifier(Identifier),
    FloatLiteral(FloatLiteral),
    Prefix(PrefixOperator, Box<Expr>),
    Infix(InfixOperator, Box<Expr>, Box<Expr>),
    Array(Vec<Expr>),
    Properties(Properties),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Number literal together with the text it was written as.
#[derive(Debug, PartialEq, Clone)]
pub struct FloatLiteral {
    pub value: f64,
    pub literal: String,
}

/// Property dictionary `{key: value, ...}`. Keys are unique; entries keep
/// the position their key was first written at.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Properties {
    entries: Vec<(Identifier, Expr)>,
}

impl File {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        File { stmts }
    }
}

impl Stmt {
    pub fn new(stmt: StmtType, span: Span) -> Self {
        Stmt { stmt, span }
    }
}

impl Expr {
    pub fn new(expr: ExprType, span: Span) -> Self {
        Expr { expr, span }
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

impl Properties {
    pub fn new() -> Self {
        Properties::default()
    }

    /// Adds an entry. A repeated key replaces the earlier value.
    pub fn insert(&mut self, key: Identifier, value: Expr) {
        match self.entries.iter_mut().find(|(k, _)| k.name == key.name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entries
            .iter()
            .find(|(k, _)| k.name == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.entries.iter().map(|(k, v)| (k.name.as_str(), v))
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in self.stmts.iter() {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.stmt {
            StmtType::Assign(class, name, value) => {
                write!(f, "{} {} = {}", class.literal, name.name, value)
            }
            StmtType::Modify(keyword, target, value) => {
                write!(f, "{} {} {}", keyword.literal, target.name, value)
            }
            StmtType::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.expr {
            ExprType::Identifier(ident) => write!(f, "{}", ident.name),
            ExprType::FloatLiteral(literal) => write!(f, "{}", literal.literal),
            ExprType::Prefix(op, rhs) => write!(f, "({}{})", op, rhs),
            ExprType::Infix(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            ExprType::Array(elements) => {
                let elements: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            ExprType::Properties(properties) => {
                writeln!(f, "{{")?;
                for (key, value) in properties.iter() {
                    writeln!(f, "{}: {},", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::token::TokenKind;

    fn float(literal: &str) -> Expr {
        let value = literal.parse().unwrap();
        let literal = literal.to_owned();
        Expr::new(
            ExprType::FloatLiteral(FloatLiteral { value, literal }),
            Span::default(),
        )
    }

    fn ident(name: &str) -> Identifier {
        Identifier::new(name, Span::default())
    }

    #[test]
    fn test_file_display() {
        let sum = Expr::new(
            ExprType::Infix(
                InfixOperator::Add,
                Box::new(Expr::new(
                    ExprType::Prefix(PrefixOperator::Negate, Box::new(float("1.50"))),
                    Span::default(),
                )),
                Box::new(Expr::new(ExprType::Identifier(ident("r")), Span::default())),
            ),
            Span::default(),
        );
        let color = Expr::new(
            ExprType::Array(vec![float("1.0"), float("0")]),
            Span::default(),
        );

        let file = File::new(vec![
            Stmt::new(
                StmtType::Assign(Token::new(TokenKind::Number, "NUMBER"), ident("x"), sum),
                Span::default(),
            ),
            Stmt::new(
                StmtType::Assign(Token::new(TokenKind::Color, "COLOR"), ident("c"), color),
                Span::default(),
            ),
        ]);

        assert_eq!(
            file.to_string(),
            "NUMBER x = ((-1.50) + r)\nCOLOR c = [1.0, 0]\n"
        );
    }

    #[test]
    fn test_properties_last_write_wins() {
        let mut properties = Properties::new();
        properties.insert(ident("b"), float("1"));
        properties.insert(ident("a"), float("2"));
        properties.insert(ident("b"), float("3"));

        assert_eq!(properties.len(), 2);
        assert_eq!(properties.get("b"), Some(&float("3")));

        let expr = Expr::new(ExprType::Properties(properties), Span::default());
        assert_eq!(expr.to_string(), "{\nb: 3,\na: 2,\n}");
    }
}
