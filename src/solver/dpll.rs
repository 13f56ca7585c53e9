//! A DPLL backend: unit propagation with chronological backtracking.
//!
//! The search keeps a value per index.
//! Unit propagation runs to a fixpoint, and on exhaustion the first unvalued index is decided, leading polarity drawn through the rng.
//! The rng is a [Pcg32] behind [rand::Rng], seeded to a constant per backend, and at the default polarity lean of `0.0` the draw always lands on `false` --- so the whole search is deterministic.
//!
//! No clauses are learnt and backtracking is chronological --- the intended use is small specification-style formulas, for which the bookkeeping of a conflict-driven solver costs more than it saves.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{Config, PolarityLean};
use crate::misc::log::targets;
use crate::structures::formula::{CClause, CLiteral, Index, Literal};

use super::{Solver, Verdict};

/// The DPLL backend.
pub struct Dpll {
    rng: Pcg32,
    polarity_lean: PolarityLean,
}

impl Dpll {
    /// A backend configured from `config`, with a fixed rng seed so equal configurations give equal searches.
    pub fn from_config(config: &Config) -> Self {
        Dpll {
            rng: Pcg32::seed_from_u64(0),
            polarity_lean: config.polarity_lean,
        }
    }

    fn search(&mut self, clauses: &[CClause], values: &mut Vec<Option<bool>>) -> bool {
        // Unit propagation, to a fixpoint.
        loop {
            let mut unit: Option<CLiteral> = None;

            for clause in clauses {
                let mut satisfied = false;
                let mut unvalued: Option<CLiteral> = None;
                let mut unvalued_count = 0;

                for literal in clause {
                    match values[literal.index() as usize] {
                        Some(value) => {
                            if value == literal.polarity() {
                                satisfied = true;
                                break;
                            }
                        }
                        None => {
                            unvalued_count += 1;
                            unvalued = Some(*literal);
                        }
                    }
                }

                if satisfied {
                    continue;
                }
                match unvalued_count {
                    // Every literal of the clause conflicts with the valuation.
                    0 => return false,
                    1 => {
                        unit = unvalued;
                        break;
                    }
                    _ => {}
                }
            }

            match unit {
                Some(literal) => {
                    log::trace!(target: targets::SOLVE, "Propagated {literal}");
                    values[literal.index() as usize] = Some(literal.polarity());
                }
                None => break,
            }
        }

        if clauses.iter().all(|clause| satisfied_on(clause, values)) {
            return true;
        }

        let decision_index = match (1..values.len()).find(|index| values[*index].is_none()) {
            Some(index) => index,
            None => return false,
        };

        let leading_polarity = self.rng.random_bool(self.polarity_lean);
        log::trace!(
            target: targets::SOLVE,
            "Decision on index {decision_index}, {leading_polarity} first"
        );

        for polarity in [leading_polarity, !leading_polarity] {
            let mut trail = values.clone();
            trail[decision_index] = Some(polarity);
            if self.search(clauses, &mut trail) {
                *values = trail;
                return true;
            }
        }

        false
    }
}

fn satisfied_on(clause: &[CLiteral], values: &[Option<bool>]) -> bool {
    clause
        .iter()
        .any(|literal| values[literal.index() as usize] == Some(literal.polarity()))
}

impl Solver for Dpll {
    fn solve(&mut self, index_count: Index, clauses: &[CClause]) -> Verdict {
        let mut values: Vec<Option<bool>> = vec![None; index_count as usize + 1];

        match self.search(clauses, &mut values) {
            true => {
                // Indices untouched by the search are free, valued false by convention.
                let model = (1..=index_count)
                    .map(|index| {
                        CLiteral::new(index, values[index as usize].unwrap_or(false))
                    })
                    .collect();
                Verdict::Satisfiable(model)
            }
            false => Verdict::Unsatisfiable,
        }
    }
}
