use std::fmt;

/// The root of a parsed program.
///
/// Holds the top-level statements in source order. Exactly one `Program` is
/// produced per parse and it owns the whole tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in the order they appear in the source.
    pub body: Vec<Statement>,
}

/// A top-level statement.
///
/// Statements produce effects: they declare or update variables, or emit
/// output.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `new <name> = <value>;`
    VariableDeclaration {
        /// Name of the declared variable.
        name:  String,
        /// Initial value.
        value: Expr,
    },
    /// `<name> = <value>;`
    Assignment {
        /// Name of the assigned variable.
        name:  String,
        /// New value.
        value: Expr,
    },
    /// `print(<value>);`
    Print {
        /// The printed expression.
        value: Expr,
    },
}

/// An expression node.
///
/// Expressions produce a numeric value and have no side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A non-negative number literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (`+` or `-`).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from its operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }
}

/// Binary operators supported by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Sub => f.write_str("-"),
        }
    }
}
