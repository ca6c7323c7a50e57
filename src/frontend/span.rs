use std::fmt;

/// Location of a character in the scene source.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct CodePosition {
    pub byte_pos: usize,
    pub line_no: usize,
    pub column_no: usize,
}

/// Source range covered by a token, statement or expression.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Span {
    pub start_pos: CodePosition,
    pub end_pos: CodePosition,
}

impl CodePosition {
    pub fn new(byte_pos: usize, line_no: usize, column_no: usize) -> Self {
        CodePosition {
            byte_pos,
            line_no,
            column_no,
        }
    }

    pub fn start() -> Self {
        CodePosition::new(0, 1, 1)
    }
}

impl fmt::Display for CodePosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line_no, self.column_no)
    }
}

impl Span {
    pub fn new(start_pos: CodePosition, end_pos: CodePosition) -> Self {
        Span { start_pos, end_pos }
    }

    /// Zero-width span at a single position.
    pub fn at(pos: CodePosition) -> Self {
        Span::new(pos, pos)
    }

    pub fn extend(&self, other: Self) -> Self {
        Span {
            start_pos: std::cmp::min(self.start_pos, other.start_pos),
            end_pos: std::cmp::max(self.end_pos, other.end_pos),
        }
    }

    pub fn line_no(&self) -> usize {
        self.start_pos.line_no
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::at(CodePosition::start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_covers_both_spans() {
        let first = Span::new(CodePosition::new(0, 1, 1), CodePosition::new(3, 1, 4));
        let second = Span::new(CodePosition::new(5, 1, 6), CodePosition::new(10, 2, 2));

        let joined = second.extend(first);
        assert_eq!(joined.start_pos, first.start_pos);
        assert_eq!(joined.end_pos, second.end_pos);
        assert_eq!(joined.line_no(), 1);
        assert_eq!(second.line_no(), 1);
        assert_eq!(joined.end_pos.byte_pos, 10);
    }
}
