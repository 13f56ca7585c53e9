/*!
Scenario minimization: every way the formula may hold, each stated as small as the theory allows.

All models are enumerated by feeding each found model back as a blocking clause --- the negation of the model --- and re-solving until the formula gives out.
Each model is then cut down to the variables which hold, any variable forced by another through the theory's `implies` is dropped, and finally only the subset-minimal scenarios survive, so the result is a minimal set of scenarios covering every model.

The implication filter is one-pass: antecedents are read from the model's unreduced set of holding variables, so a chain `a → b → c` over `{a, b, c}` reduces to `{a}` without any closure being computed.
A variable is never taken as its own antecedent.

# Example

```rust
# use std::collections::BTreeMap;
# use crux::analysis::Theory;
# use crux::context::Context;
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
let ctx = Context::default();
let formula = Formula::from_expression(&"a | b".parse::<Expression<String>>().unwrap());

let scenarios = ctx.satisfying_scenarios(&formula, &Theory::default());

let a_holds = BTreeMap::from([("a".to_string(), true)]);
let b_holds = BTreeMap::from([("b".to_string(), true)]);
assert_eq!(scenarios.len(), 2);
assert!(scenarios.contains(&a_holds));
assert!(scenarios.contains(&b_holds));
```
*/

use crate::context::Context;
use crate::misc::log::targets;
use crate::solver::{self, Verdict};
use crate::structures::assignment::{Model, Scenario};
use crate::structures::formula::{CClause, Formula, Literal};
use crate::structures::variable::Variable;

use super::Theory;

impl Context {
    /// A minimal set of scenarios covering every model of the formula, each reduced under the theory.
    ///
    /// `⊤` is satisfied by the empty scenario and yields `[{}]`; an unsatisfiable formula yields `[]`.
    /// Models setting two conflicting variables are discarded during enumeration.
    /// Order is first-discovery, which is deterministic for the deterministic backends.
    pub fn satisfying_scenarios<V: Variable>(
        &self,
        formula: &Formula<V>,
        theory: &Theory<'_, V>,
    ) -> Vec<Scenario<V>> {
        if formula.is_top() {
            return vec![Scenario::new()];
        }

        let models = self.all_models(formula, theory);

        let mut scenarios: Vec<Scenario<V>> = Vec::new();
        for model in &models {
            let scenario = reduce(model, theory);
            if !scenarios.contains(&scenario) {
                scenarios.push(scenario);
            }
        }

        scenarios
            .iter()
            .filter(|scenario| !scenarios.iter().any(|other| strict_subset(other, scenario)))
            .cloned()
            .collect()
    }

    /// Every model of the formula, by iterated blocking clauses.
    ///
    /// Enumeration is bounded by 2^|bindings| rounds, the count of distinct assignments.
    fn all_models<V: Variable>(
        &self,
        formula: &Formula<V>,
        theory: &Theory<'_, V>,
    ) -> Vec<Model<V>> {
        let bindings = formula.bindings();
        let index_count = formula.index_count();

        let mut backend = solver::backend(&self.config);
        let mut clauses: Vec<CClause> = formula.clauses().to_vec();
        let mut models: Vec<Model<V>> = Vec::new();

        let rounds = 1_u128
            .checked_shl(bindings.count() as u32)
            .unwrap_or(u128::MAX);

        for _ in 0..rounds {
            let literals = match backend.solve(index_count, &clauses) {
                Verdict::Satisfiable(literals) => literals,
                Verdict::Unsatisfiable => break,
                Verdict::Unknown => {
                    log::warn!(
                        target: targets::SCENARIOS,
                        "Backend declined during model enumeration, scenarios incomplete"
                    );
                    break;
                }
            };

            // Block the model over the bound indices, whether or not it is kept.
            let blocking: CClause = literals
                .iter()
                .take(bindings.count())
                .map(|literal| literal.negate())
                .collect();
            clauses.push(blocking);

            let model = bindings.model_of(&literals);
            match violates_conflicts(&model, theory) {
                true => log::trace!(target: targets::SCENARIOS, "Model blocked by a conflict"),
                false => models.push(model),
            }
        }

        log::debug!(
            target: targets::SCENARIOS,
            "{} models over {} variables",
            models.len(),
            bindings.count()
        );
        models
    }
}

/// The holding variables of a model, in the theory's iteration order.
fn holding_variables<'m, V: Variable>(model: &'m Model<V>, theory: &Theory<'_, V>) -> Vec<&'m V> {
    let mut holding: Vec<&V> = model
        .iter()
        .filter(|(_, value)| **value)
        .map(|(variable, _)| variable)
        .collect();
    holding.sort_by(|a, b| theory.compare(a, b));
    holding
}

/// Whether some pair of holding variables is in conflict under the theory.
fn violates_conflicts<V: Variable>(model: &Model<V>, theory: &Theory<'_, V>) -> bool {
    let holding = holding_variables(model, theory);

    for position in 0..holding.len() {
        for other in position + 1..holding.len() {
            if theory.conflict_between(holding[position], holding[other]) {
                return true;
            }
        }
    }

    false
}

/// The model cut to its holding variables, less any variable implied by another --- one pass, antecedents from the unreduced set.
fn reduce<V: Variable>(model: &Model<V>, theory: &Theory<'_, V>) -> Scenario<V> {
    let holding = holding_variables(model, theory);

    let mut scenario = Scenario::new();
    for variable in holding.iter().copied() {
        let implied = holding
            .iter()
            .copied()
            .any(|antecedent| antecedent != variable && theory.implies(antecedent, variable));
        if !implied {
            scenario.insert(variable.clone(), true);
        }
    }

    scenario
}

/// Whether `a` mentions strictly fewer variables, all of which `b` mentions.
fn strict_subset<V: Variable>(a: &Scenario<V>, b: &Scenario<V>) -> bool {
    a.len() < b.len() && a.keys().all(|variable| b.contains_key(variable))
}
