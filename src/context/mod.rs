/*!
The context --- within which solves and analyses take place.

A context is little more than a carried [Config]: it fixes the backend for every call made through it, and translates backend verdicts into variable-level answers.
Constant formulas are answered directly, without a backend being built.

The analyses ([scenarios](Context::satisfying_scenarios), [trees](Context::decision_tree), [validation](Context::validate_assignments)) are implemented alongside their machinery in [analysis](crate::analysis), as further methods on the context.

# Example

```rust
# use crux::context::Context;
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
let ctx = Context::default();

let e: Expression<String> = "(a & !b) | c".parse().unwrap();
let formula = Formula::from_expression(&e);

assert!(ctx.satisfiable(&formula));

let model = ctx.solve(&formula).unwrap();
assert!(e.evaluate(&|v| model.get(v).copied().unwrap_or(false)));
```
*/

use crate::config::Config;
use crate::misc::log::targets;
use crate::solver;
use crate::structures::assignment::Model;
use crate::structures::formula::Formula;
use crate::structures::variable::Variable;
use crate::types::err::SolveError;

/// The context: a configuration, and the methods which use it.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,
}

impl Context {
    /// A context with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Context { config }
    }

    /// A model of the formula, or [Unsatisfiable](SolveError::Unsatisfiable).
    ///
    /// The model is total over the formula's bound variables; synthetic indices a backend valued are discarded on the way out.
    pub fn solve<V: Variable>(&self, formula: &Formula<V>) -> Result<Model<V>, SolveError> {
        if formula.is_top() {
            return Ok(Model::new());
        }
        if formula.is_bottom() {
            return Err(SolveError::Unsatisfiable);
        }

        let mut backend = solver::backend(&self.config);
        match backend.solve(formula.index_count(), formula.clauses()) {
            solver::Verdict::Satisfiable(literals) => {
                log::debug!(
                    target: targets::SOLVE,
                    "Satisfiable over {} indices",
                    formula.index_count()
                );
                Ok(formula.bindings().model_of(&literals))
            }
            solver::Verdict::Unsatisfiable => Err(SolveError::Unsatisfiable),
            solver::Verdict::Unknown => Err(SolveError::Unknown),
        }
    }

    /// Whether the formula has a model.
    pub fn satisfiable<V: Variable>(&self, formula: &Formula<V>) -> bool {
        self.solve(formula).is_ok()
    }
}
