use super::environment::Environment;
use super::errors::{EvaluatorError, RuntimeResult};
use super::object::{Entity, Object};
use super::values::EvaluatedValues;
use crate::frontend::ast::{Expr, ExprType, File, Identifier, Properties, Stmt, StmtType};
use crate::frontend::operator::{InfixOperator, PrefixOperator};
use crate::frontend::token::Token;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Walks a parsed scene once, binding every declared name. Single use:
/// evaluate, then export.
#[derive(Debug, Default)]
pub struct Evaluator {
    env: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            env: Environment::new(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Evaluates statements in order and returns the value of the last one.
    pub fn eval_file(&mut self, file: &File) -> RuntimeResult<Option<Object>> {
        let mut last = None;

        for stmt in file.stmts.iter() {
            last = Some(self.eval_statement(stmt)?);
        }

        Ok(last)
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<Object> {
        trace!(line = stmt.span.line_no(), "evaluating statement");

        match &stmt.stmt {
            StmtType::Assign(class, name, expr) => self.eval_assign(class, name, expr),
            StmtType::Modify(_, target, expr) => self.eval_modify(target, expr),
            StmtType::Expression(expr) => self.eval_expression(expr),
        }
    }

    fn eval_assign(&mut self, class: &Token, name: &Identifier, expr: &Expr) -> RuntimeResult<Object> {
        if self.env.contains(&name.name) {
            return Err(EvaluatorError::Redefinition(name.name.clone()));
        }

        let value = self.eval_expression(expr)?;
        self.env
            .define(Entity::new(&name.name, &class.literal, value.clone()))?;

        Ok(value)
    }

    fn eval_modify(&mut self, target: &Identifier, expr: &Expr) -> RuntimeResult<Object> {
        let value = self.eval_expression(expr)?;

        match &value {
            Object::Dictionary(properties) => {
                self.env.modify_builtin(&target.name, properties.clone())?
            }
            other => {
                return Err(EvaluatorError::ModifyWithoutProperties(
                    target.name.clone(),
                    other.kind_name(),
                ))
            }
        }

        Ok(value)
    }

    pub fn eval_expression(&self, expr: &Expr) -> RuntimeResult<Object> {
        match &expr.expr {
            ExprType::FloatLiteral(literal) => Ok(Object::Number(literal.value)),
            ExprType::Identifier(ident) => Ok(self.env.get(&ident.name)?.value.clone()),
            ExprType::Prefix(op, rhs) => self.eval_prefix_operator(*op, rhs),
            ExprType::Infix(op, lhs, rhs) => self.eval_infix_operator(*op, lhs, rhs),
            ExprType::Array(elements) => {
                let elements = elements
                    .iter()
                    .map(|element| self.eval_expression(element))
                    .collect::<RuntimeResult<Vec<_>>>()?;
                Ok(Object::Array(elements))
            }
            ExprType::Properties(properties) => self.eval_properties(properties),
        }
    }

    fn eval_properties(&self, properties: &Properties) -> RuntimeResult<Object> {
        let mut evaluated = BTreeMap::new();

        for (key, value) in properties.iter() {
            evaluated.insert(key.to_owned(), self.eval_expression(value)?);
        }

        Ok(Object::Dictionary(evaluated))
    }

    fn eval_prefix_operator(&self, op: PrefixOperator, expr: &Expr) -> RuntimeResult<Object> {
        let value = self.eval_expression(expr)?;
        Object::apply_prefix_op(op, value)
    }

    fn eval_infix_operator(
        &self,
        op: InfixOperator,
        lhs: &Expr,
        rhs: &Expr,
    ) -> RuntimeResult<Object> {
        let lhs = self.eval_expression(lhs)?;
        let rhs = self.eval_expression(rhs)?;
        Object::apply_infix_op(op, lhs, rhs)
    }

    /// Consumes the evaluator and groups every bound entity by class.
    pub fn export_values(self) -> EvaluatedValues {
        let values = EvaluatedValues::from_entities(self.env.into_entities());
        debug!(classes = values.len(), "exported scene values");
        values
    }
}
