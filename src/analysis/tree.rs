/*!
Decision tree synthesis: a variable-ordered tree whose paths enumerate the formula's truth.

Synthesis recurses on a residual clause set.
Fixing a variable removes every clause the choice satisfies and strips the falsified literal from the rest; no clauses left is `⊤`, an emptied clause is `⊥`.
At each step the next variable is the least --- by the theory's sorter, or by first appearance in the formula when no sorter is given --- among those still occurring in the residual.

Two prunings keep the tree small:
- A `⊤` branch which would put the variable in conflict with one already holding on the path becomes a `⊥` leaf outright.
- Structurally identical children collapse to a single subtree, which is how a variable with no bearing on the outcome vanishes from the tree.

# Example

```rust
# use crux::analysis::Theory;
# use crux::context::Context;
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
# use crux::structures::tree::DecisionTree;
let ctx = Context::default();
let formula = Formula::from_expression(&"a & b".parse::<Expression<String>>().unwrap());

let tree = ctx.decision_tree(&formula, &Theory::default());

let inner = DecisionTree::node("b".to_string(), DecisionTree::leaf(false), DecisionTree::leaf(true));
assert_eq!(tree, DecisionTree::node("a".to_string(), DecisionTree::leaf(false), inner));
```
*/

use crate::context::Context;
use crate::misc::log::targets;
use crate::structures::formula::{CClause, Clause, Formula, Index, Literal};
use crate::structures::tree::DecisionTree;
use crate::structures::variable::Variable;

use super::Theory;

impl Context {
    /// A decision tree for the formula, pruned under the theory.
    ///
    /// The value at each leaf is the formula's value under the path's partial assignment, however the remaining variables are valued.
    pub fn decision_tree<V: Variable>(
        &self,
        formula: &Formula<V>,
        theory: &Theory<'_, V>,
    ) -> DecisionTree<V> {
        if formula.is_top() {
            return DecisionTree::leaf(true);
        }
        if formula.is_bottom() {
            return DecisionTree::leaf(false);
        }

        let tree = synthesize(formula.clauses().to_vec(), formula, theory, &mut Vec::new());
        log::debug!(
            target: targets::TREE,
            "{} paths over {} variables",
            tree.paths().len(),
            formula.bindings().count()
        );
        tree
    }
}

fn synthesize<V: Variable>(
    clauses: Vec<CClause>,
    formula: &Formula<V>,
    theory: &Theory<'_, V>,
    holding: &mut Vec<V>,
) -> DecisionTree<V> {
    if clauses.is_empty() {
        return DecisionTree::leaf(true);
    }
    if clauses.iter().any(|clause| clause.is_empty()) {
        return DecisionTree::leaf(false);
    }

    let index = choose(&clauses, formula, theory);
    let Some(variable) = formula.bindings().variable_of(index).cloned() else {
        unreachable!("every index of a checked formula is bound")
    };

    let when_false = synthesize(assign(&clauses, index, false), formula, theory, holding);

    let conflicted = holding
        .iter()
        .any(|held| theory.conflict_between(held, &variable));
    let when_true = match conflicted {
        true => DecisionTree::leaf(false),
        false => {
            holding.push(variable.clone());
            let subtree = synthesize(assign(&clauses, index, true), formula, theory, holding);
            holding.pop();
            subtree
        }
    };

    // A variable both of whose branches agree has no bearing on the outcome.
    match when_false == when_true {
        true => when_false,
        false => DecisionTree::node(variable, when_false, when_true),
    }
}

/// The next variable to decide: least by the sorter, or by first appearance when no sorter is given.
fn choose<V: Variable>(clauses: &[CClause], formula: &Formula<V>, theory: &Theory<'_, V>) -> Index {
    let mut remaining: Vec<Index> = clauses
        .iter()
        .flat_map(|clause| clause.indices())
        .collect();
    remaining.sort_unstable();
    remaining.dedup();

    match theory.sorter() {
        None => remaining[0],
        Some(_) => {
            let Some(choice) = remaining.iter().copied().min_by(|a, b| {
                let Some(variable_a) = formula.bindings().variable_of(*a) else {
                    unreachable!("every index of a checked formula is bound")
                };
                let Some(variable_b) = formula.bindings().variable_of(*b) else {
                    unreachable!("every index of a checked formula is bound")
                };
                theory.compare(variable_a, variable_b)
            }) else {
                unreachable!("the residual holds a nonempty clause")
            };
            choice
        }
    }
}

/// The residual clause set after fixing `index` to `value`.
fn assign(clauses: &[CClause], index: Index, value: bool) -> Vec<CClause> {
    let mut residual = Vec::new();

    for clause in clauses {
        let satisfied = clause
            .iter()
            .any(|literal| literal.index() == index && literal.polarity() == value);
        if satisfied {
            continue;
        }
        residual.push(
            clause
                .iter()
                .copied()
                .filter(|literal| literal.index() != index)
                .collect(),
        );
    }

    residual
}
