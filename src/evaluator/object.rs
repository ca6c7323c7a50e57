use super::errors::{EvaluatorError, RuntimeResult};
use crate::frontend::operator::{InfixOperator, PrefixOperator};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Number(f64),
    Array(Vec<Object>),
    Dictionary(BTreeMap<String, Object>),
}

/// A named value tagged with the keyword it was declared under.
#[derive(Debug, PartialEq, Clone)]
pub struct Entity {
    pub name: String,
    pub class: String,
    pub value: Object,
}

impl Object {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Object::Number(_) => "NUMBER",
            Object::Array(_) => "ARRAY",
            Object::Dictionary(_) => "DICTIONARY",
        }
    }

    pub fn apply_infix_op(op: InfixOperator, lhs: Object, rhs: Object) -> RuntimeResult<Object> {
        let (a, b) = match (lhs, rhs) {
            (Object::Number(a), Object::Number(b)) => (a, b),
            (Object::Number(_), other) | (other, _) => {
                return Err(EvaluatorError::IllegalInfixOperation(op, other.kind_name()))
            }
        };

        let result = match op {
            InfixOperator::Add => a + b,
            InfixOperator::Subtract => a - b,
            InfixOperator::Multiply => a * b,
            InfixOperator::Divide => {
                if b == 0.0 {
                    return Err(EvaluatorError::DivideByZero);
                }
                a / b
            }
        };

        Ok(Object::Number(result))
    }

    pub fn apply_prefix_op(op: PrefixOperator, value: Object) -> RuntimeResult<Object> {
        match (op, value) {
            (PrefixOperator::Negate, Object::Number(n)) => Ok(Object::Number(-n)),
            (op, other) => Err(EvaluatorError::IllegalPrefixOperation(op, other.kind_name())),
        }
    }
}

impl Entity {
    pub fn new(name: impl Into<String>, class: impl Into<String>, value: Object) -> Self {
        Entity {
            name: name.into(),
            class: class.into(),
            value,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Number(n) => write!(f, "{}", n),
            Object::Array(elements) => {
                let elements: Vec<_> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Object::Dictionary(properties) => {
                let properties: Vec<_> = properties
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                write!(f, "{{{}}}", properties.join(", "))
            }
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} = {}", self.class, self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Object {
        Object::Array(values.iter().map(|v| Object::Number(*v)).collect())
    }

    #[test]
    fn test_infix_operations() {
        let cases = [
            (InfixOperator::Add, 5.0, 5.0, 10.0),
            (InfixOperator::Subtract, 5.0, 10.0, -5.0),
            (InfixOperator::Multiply, 5.0, 5.0, 25.0),
            (InfixOperator::Divide, 5.0, 2.0, 2.5),
        ];

        for (op, a, b, expected) in cases {
            assert_eq!(
                Object::apply_infix_op(op, Object::Number(a), Object::Number(b)),
                Ok(Object::Number(expected))
            );
        }
    }

    #[test]
    fn test_infix_names_offending_side() {
        assert_eq!(
            Object::apply_infix_op(InfixOperator::Add, numbers(&[1.0]), Object::Number(1.0)),
            Err(EvaluatorError::IllegalInfixOperation(InfixOperator::Add, "ARRAY"))
        );
        assert_eq!(
            Object::apply_infix_op(
                InfixOperator::Add,
                Object::Number(1.0),
                Object::Dictionary(BTreeMap::new())
            ),
            Err(EvaluatorError::IllegalInfixOperation(InfixOperator::Add, "DICTIONARY"))
        );
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Object::apply_infix_op(InfixOperator::Divide, Object::Number(5.0), Object::Number(0.0)),
            Err(EvaluatorError::DivideByZero)
        );
        assert_eq!(
            Object::apply_infix_op(InfixOperator::Divide, Object::Number(0.0), Object::Number(5.0)),
            Ok(Object::Number(0.0))
        );
    }

    #[test]
    fn test_negation() {
        for x in [0.5, -3.0, 255.0, 1e-9] {
            let once = Object::apply_prefix_op(PrefixOperator::Negate, Object::Number(x)).unwrap();
            let twice = Object::apply_prefix_op(PrefixOperator::Negate, once).unwrap();
            assert_eq!(twice, Object::Number(x));
        }

        assert_eq!(
            Object::apply_prefix_op(PrefixOperator::Negate, numbers(&[])),
            Err(EvaluatorError::IllegalPrefixOperation(PrefixOperator::Negate, "ARRAY"))
        );
    }

    #[test]
    fn test_display() {
        let mut properties = BTreeMap::new();
        properties.insert("radius".to_owned(), Object::Number(1.5));
        properties.insert("color".to_owned(), numbers(&[255.0, 0.0, 0.0]));

        let entity = Entity::new("ball", "SPHERE", Object::Dictionary(properties));
        assert_eq!(
            entity.to_string(),
            "SPHERE ball = {color: [255, 0, 0], radius: 1.5}"
        );
        assert_eq!(Object::Dictionary(BTreeMap::new()).to_string(), "{}");
        assert_eq!(numbers(&[]).to_string(), "[]");
    }
}
