use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates the operand, then applies `op`.
    pub(in crate::interpreter::evaluator) fn visit_unary_op(&mut self,
                                                            op: Operator,
                                                            expr: &Node,
                                                            line: usize)
                                                            -> EvalResult<f64> {
        let value = self.visit(expr)?;
        Self::eval_unary(op, value, line)
    }

    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Minus`: negation.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownOperator`] for any other operator. The
    /// parser only builds unary nodes with `+` or `-`.
    ///
    /// # Example
    /// ```
    /// use minipas::{ast::Operator, interpreter::evaluator::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_unary(Operator::Minus, 5.0, 1).unwrap(), -5.0);
    /// assert!(Interpreter::eval_unary(Operator::Mul, 5.0, 1).is_err());
    /// ```
    pub fn eval_unary(op: Operator, value: f64, line: usize) -> EvalResult<f64> {
        match op {
            Operator::Plus => Ok(value),
            Operator::Minus => Ok(-value),
            Operator::Mul | Operator::IntegerDiv | Operator::FloatDiv => {
                Err(RuntimeError::UnknownOperator { operator: op.to_string(),
                                                    line })
            },
        }
    }
}
