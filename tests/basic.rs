use crux::config::{Config, SolverChoice};
use crux::context::Context;
use crux::structures::expression::Expression;
use crux::structures::formula::Formula;
use crux::types::err::SolveError;

fn formula(src: &str) -> Formula<String> {
    Formula::from_expression(&src.parse::<Expression<String>>().unwrap())
}

fn dpll() -> Context {
    Context::from_config(Config {
        solver: SolverChoice::Dpll,
        polarity_lean: 0.0,
    })
}

fn exhaustive() -> Context {
    Context::from_config(Config {
        solver: SolverChoice::Exhaustive,
        polarity_lean: 0.0,
    })
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        for ctx in [dpll(), exhaustive()] {
            let model = ctx.solve(&formula("a")).unwrap();
            assert_eq!(model.get(&"a".to_string()), Some(&true));
        }
    }

    #[test]
    fn conflict() {
        let f = formula("(p | q) & (!p | !q) & (p | !q) & (!p | q)");
        for ctx in [dpll(), exhaustive()] {
            assert_eq!(ctx.solve(&f), Err(SolveError::Unsatisfiable));
            assert!(!ctx.satisfiable(&f));
        }
    }

    #[test]
    fn unit_conjunct() {
        let f = formula("(a | b) & !a");
        for ctx in [dpll(), exhaustive()] {
            let model = ctx.solve(&f).unwrap();
            assert_eq!(model.get(&"a".to_string()), Some(&false));
            assert_eq!(model.get(&"b".to_string()), Some(&true));
        }
    }

    #[test]
    fn direct_contradiction() {
        for ctx in [dpll(), exhaustive()] {
            assert_eq!(ctx.solve(&formula("a & !a")), Err(SolveError::Unsatisfiable));
        }
    }
}

mod constants {
    use super::*;

    #[test]
    fn top_solves_to_the_empty_model() {
        let ctx = Context::default();
        assert_eq!(ctx.solve(&Formula::<String>::top()), Ok(Default::default()));
        assert_eq!(ctx.solve(&formula("true")), Ok(Default::default()));
    }

    #[test]
    fn bottom_is_unsatisfiable() {
        let ctx = Context::default();
        assert_eq!(
            ctx.solve(&Formula::<String>::bottom()),
            Err(SolveError::Unsatisfiable)
        );
        assert_eq!(ctx.solve(&formula("false")), Err(SolveError::Unsatisfiable));
    }
}

mod models {
    use super::*;

    const FAMILY: [&str; 8] = [
        "a",
        "!a",
        "(a & !b) | (!c & d)",
        "(a | b) & (!a | c) & !c",
        "a & (b | c) & !(b & c)",
        "(a | !a) & b",
        "!(a & b) | c",
        "a | (b & (c | d))",
    ];

    /// Every model returned satisfies the expression it came from.
    #[test]
    fn models_satisfy_their_expressions() {
        for src in FAMILY {
            let e: Expression<String> = src.parse().unwrap();
            let f = Formula::from_expression(&e);
            for ctx in [dpll(), exhaustive()] {
                match ctx.solve(&f) {
                    Ok(model) => {
                        assert!(
                            e.evaluate(&|v| model.get(v).copied().unwrap_or(false)),
                            "model fails {src}"
                        );
                    }
                    Err(SolveError::Unsatisfiable) => {}
                    Err(SolveError::Unknown) => panic!("unknown verdict for {src}"),
                }
            }
        }
    }

    /// The two backends agree on satisfiability.
    #[test]
    fn backends_agree() {
        for src in FAMILY {
            let f = formula(src);
            assert_eq!(
                dpll().satisfiable(&f),
                exhaustive().satisfiable(&f),
                "backends split on {src}"
            );
        }
    }
}

mod limits {
    use super::*;

    #[test]
    fn exhaustive_declines_wide_formulas() {
        let mut wide = Expression::var("v00".to_string());
        for i in 1..25 {
            wide = wide.or(Expression::var(format!("v{i:02}")));
        }
        let f = Formula::from_expression(&wide);

        assert_eq!(exhaustive().solve(&f), Err(SolveError::Unknown));
        assert!(!exhaustive().satisfiable(&f));

        assert!(dpll().satisfiable(&f));
    }
}
