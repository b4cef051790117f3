#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A `new` declaration reused a name that already exists.
    VariableAlreadyDeclared {
        /// The name of the variable.
        name: String,
    },
    /// A variable was read or assigned before being declared.
    VariableNotDeclared {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableAlreadyDeclared { name } => {
                write!(f, "Variable '{name}' is already declared")
            },
            Self::VariableNotDeclared { name } => write!(f, "Variable '{name}' is not declared"),
        }
    }
}

impl std::error::Error for RuntimeError {}
