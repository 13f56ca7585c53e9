//! Variables are drawn from a caller-chosen domain.
//!
//! The whole pipeline is parameterised by the variable type.
//! Anything with equality, a total order, and a hash will do --- strings, integers, characters, or a richer domain type.
//! The reserved constants `⊤` and `⊥` are [expression](crate::structures::expression::Expression) variants, never variables.

/// Anything which may stand as a variable.
///
/// The order is used for deterministic iteration and as the tie-break whenever a caller-supplied sorter declares two variables equal.
pub trait Variable: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug {}

impl<T: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug> Variable for T {}
