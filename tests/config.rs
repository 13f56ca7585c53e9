//! The process-scoped backend slot.
//!
//! Kept to a single test in its own binary: the slot is process-wide, and flipping it under
//! concurrently running default-configured contexts would make a suite order-dependent.

use crux::config::{self, Config, SolverChoice};
use crux::context::Context;
use crux::structures::expression::Expression;
use crux::structures::formula::Formula;

#[test]
fn the_slot_names_the_default_backend() {
    assert_eq!(config::selected_solver(), SolverChoice::Dpll);
    assert_eq!(Config::default().solver, SolverChoice::Dpll);

    config::select_solver(SolverChoice::Exhaustive);
    assert_eq!(config::selected_solver(), SolverChoice::Exhaustive);
    assert_eq!(Config::default().solver, SolverChoice::Exhaustive);

    // A default context built now runs on the exhaustive backend.
    let ctx = Context::default();
    let e: Expression<String> = "(a | b) & !a".parse().unwrap();
    let model = ctx.solve(&Formula::from_expression(&e)).unwrap();
    assert_eq!(model.get(&"a".to_string()), Some(&false));
    assert_eq!(model.get(&"b".to_string()), Some(&true));

    // An explicit config is untouched by the slot.
    let explicit = Config {
        solver: SolverChoice::Dpll,
        polarity_lean: 0.0,
    };
    assert_eq!(explicit.solver, SolverChoice::Dpll);

    config::select_solver(SolverChoice::Dpll);
    assert_eq!(config::selected_solver(), SolverChoice::Dpll);
}
