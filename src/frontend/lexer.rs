use super::cursor::Cursor;
use super::span::Span;
use super::token::{SpannedToken, Token, TokenKind};

fn is_digit_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from scene source.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token. Keeps returning `EOF` once the input is exhausted.
    pub fn next_token(&mut self) -> SpannedToken {
        self.cursor.take_while(is_whitespace);

        let start_pos = self.cursor.position();
        let token = self.lex_token();
        let end_pos = self.cursor.position();

        SpannedToken::new(token, Span::new(start_pos, end_pos))
    }

    fn lex_token(&mut self) -> Token {
        let start_pos = self.cursor.position();
        let ch = match self.cursor.take() {
            Some(ch) => ch,
            None => return Token::end_of_file(),
        };

        let kind = match ch {
            '=' => TokenKind::Assign,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,

            _ if is_digit_char(ch) => {
                self.lex_number();
                TokenKind::Float
            }

            _ if is_ident_start(ch) => {
                self.cursor.take_while(is_ident_char);
                TokenKind::lookup_ident(self.cursor.slice_from(start_pos))
            }

            _ => TokenKind::Illegal,
        };

        Token::new(kind, self.cursor.slice_from(start_pos))
    }

    /// Consumes the rest of a number whose first digit was already taken.
    /// The fractional part is only consumed when a digit follows the period.
    fn lex_number(&mut self) {
        self.cursor.take_while(is_digit_char);

        if self.cursor.peek() == Some('.') && self.cursor.peek_next().map_or(false, is_digit_char)
        {
            self.cursor.take();
            self.cursor.take_while(is_digit_char);
        }
    }

    /// Returns an iterator over the tokens before `EOF`.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator { lexer: self }
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next_token();

        if token.kind() == TokenKind::EndOfFile {
            return None;
        }

        Some(token)
    }
}
