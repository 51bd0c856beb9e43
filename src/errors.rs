use itertools::Itertools;
use thiserror::Error;

/// Error raised by the lexer when it meets a character that is neither
/// whitespace, a connective, a parenthesis, nor part of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character '{ch}' at offset {offset}")]
pub struct LexError {
    /// Byte offset of the offending character in the source text.
    pub offset: usize,
    /// The offending character.
    pub ch: char,
}

/// Errors raised by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The input contained no tokens at all.
    #[error("empty input")]
    EmptyInput,
    /// A token appeared where the grammar expected something else.
    #[error("unexpected token '{found}' at offset {offset}, expected one of: {}", expected.iter().join(", "))]
    UnexpectedToken {
        /// Byte offset of the unexpected token.
        offset: usize,
        /// Printed form of the token that was found.
        found: String,
        /// The token classes that would have been accepted here.
        expected: &'static [&'static str],
    },
    /// An opening parenthesis was never closed, or a closing one never opened.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    /// A complete formula was parsed but tokens remained.
    #[error("trailing tokens after a complete formula, starting at offset {offset}")]
    TrailingTokens {
        /// Byte offset of the first leftover token.
        offset: usize,
    },
}

/// Errors raised by formula validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The formula uses more distinct variables than the truth-table
    /// enumeration bound allows.
    #[error("formula uses {count} distinct variables, the limit is {limit}")]
    TooManyVariables {
        /// Distinct variables counted in the formula.
        count: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// A variable name does not match `[A-Za-z][A-Za-z0-9]*`. The lexer never
    /// produces such a name; this guards ASTs built by hand.
    #[error("malformed variable name '{name}'")]
    MalformedVariableName {
        /// The offending name.
        name: String,
    },
}

/// Error raised when evaluation meets a variable the assignment does not bind.
/// The pipeline always evaluates under complete assignments, so this
/// surfacing indicates an internal invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("assignment has no binding for variable '{name}'")]
pub struct EvaluationError {
    /// The unbound variable name.
    pub name: String,
}

/// Umbrella error for every failure the engine can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Lexing failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Evaluation failed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
