/*!
The SAT facade: a backend trait, two backends, and the dispatch between them.

A backend answers for the conjunction of a clause sequence over indices `1..=index_count`, and nothing more --- no bindings, no expressions.
Everything a caller sees goes through a [context](crate::context::Context), which translates backend models back into variables.

Two backends are provided:
- [Dpll], the default: unit propagation with backtracking search.
- [Exhaustive], a deterministic reference for tests and small formulas: assignments tried in increasing binary order, so the reported model is always the numerically least.

Backends may keep internal state (the DPLL backend carries its rng), but a fresh backend is built per public call and nothing leaks across calls.
*/

mod dpll;
pub use dpll::Dpll;

mod exhaustive;
pub use exhaustive::Exhaustive;

use crate::config::{Config, SolverChoice};
use crate::structures::formula::{CClause, CLiteral, Index};

/// The outcome of a backend solve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// A satisfying assignment: one literal per index from one up, the sign carrying the value.
    Satisfiable(Vec<CLiteral>),

    /// No satisfying assignment exists.
    Unsatisfiable,

    /// The backend declined to answer.
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A solver backend.
pub trait Solver {
    /// The satisfiability of the conjunction of `clauses`, with every index in `1..=index_count` valued in a satisfiable verdict.
    fn solve(&mut self, index_count: Index, clauses: &[CClause]) -> Verdict;
}

/// A fresh backend of the configured kind.
pub fn backend(config: &Config) -> Box<dyn Solver> {
    match config.solver {
        SolverChoice::Dpll => Box::new(Dpll::from_config(config)),
        SolverChoice::Exhaustive => Box::new(Exhaustive),
    }
}
