/*!
Analyses layered over the solver: scenario minimization, decision tree synthesis, and assignment validation.

Each analysis runs under a [Theory]: the caller's reading of how variables relate, beyond what the formula itself says.

- `implies` --- "whenever *a* holds, *b* holds". Asymmetric, consulted one pair at a time; no transitive closure is ever computed.
- `conflicts` --- "*a* and *b* cannot hold together". Expected symmetric, and checked in both argument orders regardless.
- `sorter` --- the order in which an analysis iterates variables, when it must. Ties (and an absent sorter) fall back to the natural variable order, except where an analysis documents otherwise.
*/

pub mod scenarios;
pub mod tree;
pub mod validate;

use std::cmp::Ordering;

use crate::structures::variable::Variable;

/// A caller-supplied relation between variables.
pub type Relation<'a, V> = &'a dyn Fn(&V, &V) -> bool;

/// A caller-supplied total order on variables.
pub type Sorter<'a, V> = &'a dyn Fn(&V, &V) -> Ordering;

/// The implication/conflict theory an analysis runs under.
///
/// The empty theory --- [Theory::default] --- relates nothing and sorts naturally.
pub struct Theory<'a, V> {
    implies: Option<Relation<'a, V>>,
    conflicts: Option<Relation<'a, V>>,
    sorter: Option<Sorter<'a, V>>,
}

impl<V> Default for Theory<'_, V> {
    fn default() -> Self {
        Theory {
            implies: None,
            conflicts: None,
            sorter: None,
        }
    }
}

impl<'a, V: Variable> Theory<'a, V> {
    /// The theory extended with an implication relation.
    pub fn with_implies(mut self, relation: Relation<'a, V>) -> Self {
        self.implies = Some(relation);
        self
    }

    /// The theory extended with a conflict relation.
    pub fn with_conflicts(mut self, relation: Relation<'a, V>) -> Self {
        self.conflicts = Some(relation);
        self
    }

    /// The theory extended with an iteration order.
    pub fn with_sorter(mut self, sorter: Sorter<'a, V>) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Whether the theory holds that `antecedent` forces `consequent`.
    pub(crate) fn implies(&self, antecedent: &V, consequent: &V) -> bool {
        match self.implies {
            Some(relation) => relation(antecedent, consequent),
            None => false,
        }
    }

    /// Whether the theory holds the pair in conflict, in either argument order.
    pub(crate) fn conflict_between(&self, a: &V, b: &V) -> bool {
        match self.conflicts {
            Some(relation) => relation(a, b) || relation(b, a),
            None => false,
        }
    }

    /// The supplied sorter, if any.
    pub(crate) fn sorter(&self) -> Option<Sorter<'a, V>> {
        self.sorter
    }

    /// The iteration order: the sorter with natural tie-breaking, or the natural order alone.
    pub(crate) fn compare(&self, a: &V, b: &V) -> Ordering {
        match self.sorter {
            Some(sorter) => sorter(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}
