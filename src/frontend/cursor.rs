use super::span::CodePosition;
use std::iter::Peekable;
use std::str::CharIndices;

/// Character stream over the scene source that keeps track of line and
/// column numbers as it advances.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    position: CodePosition,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            chars: source.char_indices().peekable(),
            position: CodePosition::start(),
        }
    }

    pub fn position(&self) -> CodePosition {
        self.position
    }

    /// Peeks the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    /// Peeks one character past the next one.
    pub fn peek_next(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character.
    pub fn take(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;

        self.position.byte_pos += ch.len_utf8();
        if ch == '\n' {
            self.position.line_no += 1;
            self.position.column_no = 1;
        } else {
            self.position.column_no += 1;
        }

        Some(ch)
    }

    /// Consumes characters as long as they meet the condition.
    pub fn take_while<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        while self.peek().map_or(false, &condition) {
            self.take();
        }
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: CodePosition) -> &'src str {
        &self.source[start.byte_pos..self.position.byte_pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracks_lines() {
        let mut cursor = Cursor::new("ab\ncd");
        let start = cursor.position();

        cursor.take_while(|ch| ch != 'c');
        assert_eq!(cursor.slice_from(start), "ab\n");
        assert_eq!(cursor.position(), CodePosition::new(3, 2, 1));
        assert_eq!(cursor.peek(), Some('c'));
        assert_eq!(cursor.peek_next(), Some('d'));

        cursor.take();
        cursor.take();
        assert_eq!(cursor.take(), None);
        assert_eq!(cursor.peek_next(), None);
    }
}
