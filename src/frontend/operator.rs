use super::token::TokenKind;
use num_enum::IntoPrimitive;
use std::fmt;

/// Binding power of expression operators. The discriminant doubles as the
/// numeric binding power used by the precedence climbing loop.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, IntoPrimitive)]
#[repr(u8)]
pub enum Precedence {
    // Lowest precedence
    Lowest,
    Addition,
    Multiplication,
    Unary, // Highest precedence
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Negate,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Precedence {
    pub fn binding_power(self) -> u8 {
        self.into()
    }
}

impl PrefixOperator {
    pub fn from_token(kind: TokenKind) -> Option<PrefixOperator> {
        match kind {
            TokenKind::Minus => Some(PrefixOperator::Negate),
            _ => None,
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            PrefixOperator::Negate => Precedence::Unary,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::Negate => "-",
        }
    }
}

impl InfixOperator {
    pub fn from_token(kind: TokenKind) -> Option<InfixOperator> {
        let op = match kind {
            TokenKind::Plus => InfixOperator::Add,
            TokenKind::Minus => InfixOperator::Subtract,
            TokenKind::Asterisk => InfixOperator::Multiply,
            TokenKind::Slash => InfixOperator::Divide,
            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            InfixOperator::Add | InfixOperator::Subtract => Precedence::Addition,
            InfixOperator::Multiply | InfixOperator::Divide => Precedence::Multiplication,
        }
    }

    /// All infix operators are left associative, so an operator only binds
    /// when it is strictly stronger than the surrounding threshold.
    pub fn binds_tighter_than(&self, min_precedence: Precedence) -> bool {
        self.precedence().binding_power() > min_precedence.binding_power()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::more_asserts::*;

    #[test]
    fn test_precedence() {
        assert_lt!(Precedence::Lowest, Precedence::Unary);
        assert_gt!(Precedence::Multiplication, Precedence::Addition);
        assert_gt!(Precedence::Unary, Precedence::Multiplication);
        assert_lt!(
            Precedence::Addition.binding_power(),
            Precedence::Multiplication.binding_power()
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            InfixOperator::from_token(TokenKind::Plus),
            Some(InfixOperator::Add)
        );

        assert_eq!(
            InfixOperator::from_token(TokenKind::Minus),
            Some(InfixOperator::Subtract)
        );

        assert_eq!(
            PrefixOperator::from_token(TokenKind::Minus),
            Some(PrefixOperator::Negate)
        );

        assert_eq!(InfixOperator::from_token(TokenKind::Colon), None);
        assert_eq!(PrefixOperator::from_token(TokenKind::Asterisk), None);
    }

    #[test]
    fn test_left_associativity() {
        assert!(!InfixOperator::Add.binds_tighter_than(Precedence::Addition));
        assert!(InfixOperator::Multiply.binds_tighter_than(Precedence::Addition));
        assert!(!InfixOperator::Divide.binds_tighter_than(Precedence::Unary));
    }
}
