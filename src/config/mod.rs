/*!
Configuration of a context.

A [Config] travels with each [context](crate::context::Context) and fixes the backend used for solves together with any backend parameters.

The backend named by [Config::default] is read from a process-scoped slot, set with [select_solver].
The slot exists so a test harness (or an application) can switch every default-configured context onto the deterministic [exhaustive](SolverChoice::Exhaustive) backend without threading a config through each call site.
Passing an explicit config always wins over the slot.
*/

use std::sync::atomic::{AtomicU8, Ordering};

pub mod defaults {
    //! Default values, collected.

    /// Clause count above which [from_expression](crate::structures::formula::Formula::from_expression) warns.
    ///
    /// Distribution-based conversion can explode exponentially.
    /// The intended use case is small specification-style formulas, and a formula past this threshold deserves a note in the log.
    pub const CLAUSE_WARNING_THRESHOLD: usize = 100;

    /// Index count above which the [exhaustive](crate::solver::Exhaustive) backend reports [Unknown](crate::solver::Verdict::Unknown) rather than enumerate.
    pub const EXHAUSTIVE_INDEX_LIMIT: u32 = 24;
}

/// Representation for the probability of choosing `true` when the DPLL backend decides a polarity.
pub type PolarityLean = f64;

/// The available solver backends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverChoice {
    /// A DPLL backend: unit propagation with backtracking search.
    Dpll,

    /// A deterministic reference backend which enumerates assignments in increasing binary order.
    ///
    /// Intended for tests and small formulas.
    Exhaustive,
}

/// The process-scoped backend slot, read by [Config::default].
static SELECTED_SOLVER: AtomicU8 = AtomicU8::new(0);

/// Names the backend used by default-configured contexts, process wide.
pub fn select_solver(choice: SolverChoice) {
    SELECTED_SOLVER.store(choice as u8, Ordering::Relaxed);
}

/// The backend default-configured contexts currently use.
pub fn selected_solver() -> SolverChoice {
    match SELECTED_SOLVER.load(Ordering::Relaxed) {
        0 => SolverChoice::Dpll,
        _ => SolverChoice::Exhaustive,
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The backend used for solves.
    pub solver: SolverChoice,

    /// The probability of assigning positive polarity to an index when the DPLL backend freely decides.
    ///
    /// At the default of `0.0` every decision tries `false` first and solves are deterministic.
    pub polarity_lean: PolarityLean,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solver: selected_solver(),
            polarity_lean: 0.0,
        }
    }
}
