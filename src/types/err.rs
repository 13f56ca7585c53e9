/*!
Error types used in the library.

- Some of these are expected in use --- e.g. [SolveError::Unsatisfiable] is how unsatisfiability of a formula is reported, and is as much an answer as an error.
- Others only occur on malformed input --- e.g. a [FormulaError] from handing a manually built formula an empty clause.

Names of the error enums --- for the most part --- match the part of the library they originate from.
*/

use crate::structures::formula::Index;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when determining satisfiability.
    Solve(SolveError),

    /// An error when building a formula.
    Formula(FormulaError),

    /// An error related to parsing an expression.
    Parse(ParseError),
}

/// Errors when determining satisfiability, or screening an assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The formula (or theory) admits no satisfying assignment.
    Unsatisfiable,

    /// The backend could not determine satisfiability.
    Unknown,
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Errors when building a formula by hand.
///
/// Formulas produced by [from_expression](crate::structures::formula::Formula::from_expression) never trip these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A clause with no literals.
    /// The empty clause is unsatisfiable, but the canonical encoding of an unsatisfiable formula is `[[1], [-1]]`.
    EmptyClause,

    /// A literal with index zero.
    /// Indices begin at one, as the sign of a literal carries its polarity.
    ZeroLiteral,

    /// A literal whose index has no binding, outside the canonical unsatisfiable placeholder.
    UnboundIndex(Index),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors during parsing of a surface-syntax expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended where a subexpression was required.
    UnexpectedEnd,

    /// A character which fits no token.
    UnexpectedCharacter(char),

    /// A token in a position the grammar does not allow.
    UnexpectedToken(String),

    /// An empty (or all-whitespace) input.
    Empty,

    /// A group was opened and never closed.
    Unbalanced,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
