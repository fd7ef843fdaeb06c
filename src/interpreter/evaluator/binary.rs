use crate::{
    ast::{Node, Operator},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates both operands, left before right, then applies `op`.
    pub(in crate::interpreter::evaluator) fn visit_binary_op(&mut self,
                                                             left: &Node,
                                                             op: Operator,
                                                             right: &Node)
                                                             -> EvalResult<f64> {
        let left = self.visit(left)?;
        let right = self.visit(right)?;
        Ok(Self::eval_binary(op, left, right))
    }

    /// Applies a binary operator to two values.
    ///
    /// `DIV` and `/` are the same floating-point division: `10 DIV 4` is
    /// `2.5`. Division by zero follows IEEE 754.
    ///
    /// # Example
    /// ```
    /// use minipas::{ast::Operator, interpreter::evaluator::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_binary(Operator::Minus, 2.0, 12.0), -10.0);
    /// assert_eq!(Interpreter::eval_binary(Operator::IntegerDiv, 10.0, 4.0), 2.5);
    /// assert_eq!(Interpreter::eval_binary(Operator::FloatDiv, 10.0, 4.0), 2.5);
    /// ```
    #[must_use]
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> f64 {
        match op {
            Operator::Plus => left + right,
            Operator::Minus => left - right,
            Operator::Mul => left * right,
            Operator::IntegerDiv | Operator::FloatDiv => left / right,
        }
    }
}
