//! Assignments of truth values to variables.
//!
//! A *model* is total over the variables bound by a formula.
//! A *scenario* is partial: it lists only the variables which hold, and anything unmentioned reads as `⊥`.

use std::collections::BTreeMap;

/// An assignment satisfying a formula, total over the formula's bound variables.
pub type Model<V> = BTreeMap<V, bool>;

/// A partial satisfying assignment, as returned by [scenario minimization](crate::analysis::scenarios).
///
/// Every value in a scenario is `true`; variables a scenario does not mention are treated as false.
pub type Scenario<V> = BTreeMap<V, bool>;
