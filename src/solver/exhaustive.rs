//! A deterministic reference backend.
//!
//! Assignments are tried in increasing binary order --- index one is the least significant bit --- and the first satisfying assignment is the model.
//! The enumeration is exponential, so past [EXHAUSTIVE_INDEX_LIMIT](defaults::EXHAUSTIVE_INDEX_LIMIT) indices the backend declines with [Unknown](Verdict::Unknown) rather than stall.

use crate::config::defaults;
use crate::misc::log::targets;
use crate::structures::formula::{CClause, CLiteral, Index, Literal};

use super::{Solver, Verdict};

/// The exhaustive backend.
pub struct Exhaustive;

impl Solver for Exhaustive {
    fn solve(&mut self, index_count: Index, clauses: &[CClause]) -> Verdict {
        if index_count > defaults::EXHAUSTIVE_INDEX_LIMIT {
            log::warn!(
                target: targets::SOLVE,
                "{index_count} indices is past the exhaustive limit of {}",
                defaults::EXHAUSTIVE_INDEX_LIMIT
            );
            return Verdict::Unknown;
        }

        'assignments: for bits in 0_u64..(1 << index_count) {
            for clause in clauses {
                let satisfied = clause
                    .iter()
                    .any(|literal| value_of(bits, literal.index()) == literal.polarity());
                if !satisfied {
                    continue 'assignments;
                }
            }

            let model = (1..=index_count)
                .map(|index| CLiteral::new(index, value_of(bits, index)))
                .collect();
            return Verdict::Satisfiable(model);
        }

        Verdict::Unsatisfiable
    }
}

fn value_of(bits: u64, index: Index) -> bool {
    (bits >> (index - 1)) & 1 == 1
}
