/*!
A small boolean reasoning library.

Given a propositional expression over caller-chosen variable names, crux answers four questions:

- Is it satisfiable?
- What is a model of it?
- Which minimal scenarios satisfy it?
- Which decision tree enumerates its truth?

Alongside sits a [validator](crate::analysis::validate) which screens a candidate assignment under a caller-supplied implication/conflict theory, without touching a solver.

# Orientation

The pipeline runs expression to formula to verdict:

- An [Expression](crate::structures::expression::Expression) is built from combinators or parsed from surface syntax, and may be [simplified](crate::structures::expression::Expression::expand) through a [rule-driven rewrite engine](crate::rewrite).
- [Transcription](crate::transcription) turns an expression into a clausal [Formula](crate::structures::formula::Formula) with stable variable numbering, turns a formula back into a balanced expression, and renders [DIMACS](crate::structures::formula::Formula::as_dimacs).
- A [Context](crate::context::Context) dispatches formulas to a [solver backend](crate::solver) and translates verdicts back to variables; the [analyses](crate::analysis) layer scenario minimization, decision trees, and validation on top.

The solver backends are deliberately plain --- the intended use is small specification-style formulas, where an answer arrives before any sophistication pays for itself.
The backend used by default-configured contexts may be switched process-wide through [config::select_solver](crate::config::select_solver), with the [exhaustive](crate::solver::Exhaustive) backend as the deterministic reference.

# Examples

Satisfiability and a model:

```rust
# use crux::context::Context;
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
let ctx = Context::default();

let e: Expression<String> = "(a & !b) | (!c & d)".parse().unwrap();
let formula = Formula::from_expression(&e);

let model = ctx.solve(&formula).unwrap();
assert!(e.evaluate(&|v| model.get(v).copied().unwrap_or(false)));
```

Contradictions are answered without a model:

```rust
# use crux::context::Context;
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
# use crux::types::err::SolveError;
let ctx = Context::default();

let e: Expression<String> = "a & !a".parse().unwrap();
assert_eq!(ctx.solve(&Formula::from_expression(&e)), Err(SolveError::Unsatisfiable));
```

# Logs

Calls to [log!](log) are made throughout, tagged by the pipeline-stage targets listed in [misc::log]; the library writes only to the facade, and which implementation (if any) receives the output is the consumer's choice.
*/

pub mod analysis;
pub mod config;
pub mod context;
pub mod misc;
pub mod rewrite;
pub mod solver;
pub mod structures;
pub mod transcription;
pub mod types;
