use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::evaluator::output::Output,
    util::num::format_number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A `Context` holds the variable environment of a single program run and the
/// sink that receives printed lines. It is consumed by [`Context::run`], so
/// every run starts from an empty environment.
pub struct Context<'o> {
    /// Current value of every declared variable.
    variables: HashMap<String, f64>,
    output:    &'o mut dyn Output,
}

impl<'o> Context<'o> {
    /// Creates a context with an empty environment that prints to `output`.
    #[must_use]
    pub fn new(output: &'o mut dyn Output) -> Self {
        Self { variables: HashMap::new(),
               output }
    }

    /// Executes every statement of `program` in source order.
    ///
    /// Execution stops at the first error. Lines already emitted stay
    /// emitted.
    pub fn run(mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.body.len(), "running program");

        for statement in &program.body {
            self.eval_statement(statement)?;
        }

        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// The right-hand side is always evaluated before the statement's own
    /// check, so an undeclared name on the right is reported before a
    /// redeclaration on the left.
    ///
    /// # Errors
    /// - `VariableAlreadyDeclared` when `new` reuses an existing name.
    /// - `VariableNotDeclared` when assigning to or reading an unknown name.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(?statement, "executing statement");

        match statement {
            Statement::VariableDeclaration { name, value } => {
                let value = self.eval(value)?;

                if self.variables.contains_key(name) {
                    return Err(RuntimeError::VariableAlreadyDeclared { name: name.clone() });
                }

                self.variables.insert(name.clone(), value);
            },
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;

                let slot = self.variables
                               .get_mut(name)
                               .ok_or_else(|| RuntimeError::VariableNotDeclared { name:
                                                                                      name.clone() })?;
                *slot = value;
            },
            Statement::Print { value } => {
                let value = self.eval(value)?;
                self.output.emit(&format_number(value));
            },
        }

        Ok(())
    }

    /// Evaluates an expression and returns its value.
    ///
    /// # Errors
    /// Returns `VariableNotDeclared` if the expression reads an unknown name.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::Identifier { name } => self.eval_variable(name),
            Expr::Binary { op, left, right } => self.eval_binary_op(*op, left, right),
        }
    }

    /// Looks up the current value of a variable.
    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::VariableNotDeclared { name: name.to_string() })
    }
}
