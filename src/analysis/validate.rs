/*!
Assignment validation: screening a candidate assignment against the theory, with no solver involved.

Pairs are folded left to right into an accumulator, and for each pair `(v, value)` in turn:

1. `v` holds and some accumulated `u` holds with `implies(u, v)` --- `v` is redundant, and is dropped from the result.
2. `v` fails and some accumulated `u` holds with `implies(u, v)` --- `u` forces `v`, contradicting the pair: unsatisfiable.
3. `v` holds and some accumulated `u` holds in conflict with `v` (either argument order) --- unsatisfiable.
4. Otherwise the pair is kept.

Failing variables never introduce conflicts.

# Example

```rust
# use crux::analysis::Theory;
# use crux::context::Context;
# use crux::types::err::SolveError;
let ctx = Context::default();
let forces = |u: &&str, v: &&str| *u == "a" && *v == "b";
let theory = Theory::default().with_implies(&forces);

let redundant = ctx.validate_assignments([("a", true), ("b", true)], &theory);
assert_eq!(redundant, Ok(vec![("a", true)]));

let contradicted = ctx.validate_assignments([("a", true), ("b", false)], &theory);
assert_eq!(contradicted, Err(SolveError::Unsatisfiable));
```
*/

use crate::context::Context;
use crate::misc::log::targets;
use crate::structures::variable::Variable;
use crate::types::err::SolveError;

use super::Theory;

impl Context {
    /// The assignment screened under the theory: redundant pairs dropped, contradictions surfaced.
    ///
    /// Pairs are processed in the sorter's order when one is supplied, and in input order otherwise; the result preserves the processing order.
    pub fn validate_assignments<V: Variable>(
        &self,
        assignments: impl IntoIterator<Item = (V, bool)>,
        theory: &Theory<'_, V>,
    ) -> Result<Vec<(V, bool)>, SolveError> {
        let mut pairs: Vec<(V, bool)> = assignments.into_iter().collect();
        if theory.sorter().is_some() {
            pairs.sort_by(|a, b| theory.compare(&a.0, &b.0));
        }

        let mut accumulator: Vec<(V, bool)> = Vec::new();

        for (variable, value) in pairs {
            let forced = accumulator
                .iter()
                .any(|(held, held_value)| *held_value && theory.implies(held, &variable));

            match value {
                true => {
                    if forced {
                        log::trace!(
                            target: targets::VALIDATION,
                            "{variable:?} is already forced, dropped"
                        );
                        continue;
                    }

                    let conflicted = accumulator.iter().any(|(held, held_value)| {
                        *held_value && theory.conflict_between(held, &variable)
                    });
                    if conflicted {
                        return Err(SolveError::Unsatisfiable);
                    }
                }

                false => {
                    if forced {
                        return Err(SolveError::Unsatisfiable);
                    }
                }
            }

            accumulator.push((variable, value));
        }

        Ok(accumulator)
    }
}
