use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, INERT, Interpreter},
};

impl Interpreter {
    /// Evaluates the program body and discards its result.
    pub(in crate::interpreter::evaluator) fn visit_program(&mut self,
                                                           block: &Node)
                                                           -> EvalResult<f64> {
        self.visit(block)?;
        Ok(INERT)
    }

    /// Evaluates every declaration in order, then the compound statement.
    pub(in crate::interpreter::evaluator) fn visit_block(&mut self,
                                                         declarations: &[Node],
                                                         compound: &Node)
                                                         -> EvalResult<f64> {
        for declaration in declarations {
            self.visit(declaration)?;
        }
        self.visit(compound)?;
        Ok(INERT)
    }

    /// Declarations have no runtime effect; the variable stays undefined
    /// until it is assigned.
    pub(in crate::interpreter::evaluator) const fn visit_var_decl() -> f64 {
        INERT
    }

    /// Types are discarded at runtime.
    pub(in crate::interpreter::evaluator) const fn visit_type_spec() -> f64 {
        INERT
    }

    /// Evaluates each statement in source order.
    pub(in crate::interpreter::evaluator) fn visit_compound(&mut self,
                                                            children: &[Node])
                                                            -> EvalResult<f64> {
        for child in children {
            self.visit(child)?;
        }
        Ok(INERT)
    }

    /// Evaluates the right-hand side, then binds it under the target name.
    ///
    /// # Errors
    /// Propagates errors from the value expression. A target that is not a
    /// variable reference is reported as
    /// [`RuntimeError::InvalidAssignmentTarget`]; the parser never builds
    /// one.
    pub(in crate::interpreter::evaluator) fn visit_assign(&mut self,
                                                          target: &Node,
                                                          value: &Node)
                                                          -> EvalResult<f64> {
        let Node::Variable { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { found: target.label() });
        };

        let value = self.visit(value)?;
        trace!(%name, value, "assign");
        self.bind(name, value);
        Ok(INERT)
    }
}
