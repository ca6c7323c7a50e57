use super::span::Span;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Operators.
    Assign,
    Minus,
    Plus,
    Asterisk,
    Slash,

    // Delimiters.
    Colon,
    Comma,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // Literals.
    Ident,
    Float,

    // Statement keywords.
    Modify,
    Camera,
    Place,
    At,

    // Value kinds.
    Number,
    Color,
    Material,
    Sphere,
    Light,

    Illegal,
    EndOfFile,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl TokenKind {
    /// Re-tags an identifier as a keyword when it matches one exactly.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "MODIFY" => TokenKind::Modify,
            "CAMERA" => TokenKind::Camera,
            "PLACE" => TokenKind::Place,
            "AT" => TokenKind::At,
            "NUMBER" => TokenKind::Number,
            "COLOR" => TokenKind::Color,
            "MATERIAL" => TokenKind::Material,
            "SPHERE" => TokenKind::Sphere,
            "LIGHT" => TokenKind::Light,
            _ => TokenKind::Ident,
        }
    }

    /// Keywords that declare a named value, e.g. `SPHERE s = {...}`.
    pub fn is_value_kind(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Color
                | TokenKind::Material
                | TokenKind::Sphere
                | TokenKind::Light
        )
    }

    /// Keywords naming objects that exist before any statement runs.
    pub fn is_builtin_object(&self) -> bool {
        matches!(self, TokenKind::Camera)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Assign => "=",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Ident => "IDENT",
            TokenKind::Float => "FLOAT",
            TokenKind::Modify => "MODIFY",
            TokenKind::Camera => "CAMERA",
            TokenKind::Place => "PLACE",
            TokenKind::At => "AT",
            TokenKind::Number => "NUMBER",
            TokenKind::Color => "COLOR",
            TokenKind::Material => "MATERIAL",
            TokenKind::Sphere => "SPHERE",
            TokenKind::Light => "LIGHT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfFile => "EOF",
        }
    }

    fn is_symbol(&self) -> bool {
        !self.name().starts_with(|ch: char| ch.is_ascii_uppercase())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_symbol() {
            write!(f, "'{}'", self.name())
        } else {
            write!(f, "{}", self.name())
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn end_of_file() -> Self {
        Token::new(TokenKind::EndOfFile, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Float | TokenKind::Illegal => {
                write!(f, "{} '{}'", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl SpannedToken {
    pub fn new(token: Token, span: Span) -> Self {
        SpannedToken { token, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ident() {
        assert_eq!(TokenKind::lookup_ident("SPHERE"), TokenKind::Sphere);
        assert_eq!(TokenKind::lookup_ident("MODIFY"), TokenKind::Modify);
        assert_eq!(TokenKind::lookup_ident("sphere"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("SPHERES"), TokenKind::Ident);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Assign, "=").to_string(), "'='");
        assert_eq!(Token::new(TokenKind::Float, "2.5").to_string(), "FLOAT '2.5'");
        assert_eq!(Token::new(TokenKind::Number, "NUMBER").to_string(), "NUMBER");
        assert_eq!(Token::end_of_file().to_string(), "EOF");
    }
}
