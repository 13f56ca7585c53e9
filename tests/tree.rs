use crux::analysis::Theory;
use crux::context::Context;
use crux::structures::expression::Expression;
use crux::structures::formula::{Bindings, Formula};
use crux::structures::tree::DecisionTree;

fn var(name: &'static str) -> Expression<&'static str> {
    Expression::var(name)
}

fn formula(e: &Expression<&'static str>) -> Formula<&'static str> {
    Formula::from_expression(e)
}

fn leaf(outcome: bool) -> DecisionTree<&'static str> {
    DecisionTree::leaf(outcome)
}

fn node(
    variable: &'static str,
    when_false: DecisionTree<&'static str>,
    when_true: DecisionTree<&'static str>,
) -> DecisionTree<&'static str> {
    DecisionTree::node(variable, when_false, when_true)
}

mod structure {
    use super::*;

    #[test]
    fn conjunction() {
        let ctx = Context::default();
        let tree = ctx.decision_tree(&formula(&var("a").and(var("b"))), &Theory::default());

        assert_eq!(tree, node("a", leaf(false), node("b", leaf(false), leaf(true))));
    }

    #[test]
    fn disjunction() {
        let ctx = Context::default();
        let tree = ctx.decision_tree(&formula(&var("a").or(var("b"))), &Theory::default());

        assert_eq!(tree, node("a", node("b", leaf(false), leaf(true)), leaf(true)));
    }

    #[test]
    fn a_sorter_reorders_the_splits() {
        let ctx = Context::default();
        let descending = |a: &&str, b: &&str| b.cmp(a);
        let theory = Theory::default().with_sorter(&descending);

        let tree = ctx.decision_tree(&formula(&var("a").or(var("b"))), &theory);

        assert_eq!(tree, node("b", node("a", leaf(false), leaf(true)), leaf(true)));
    }

    #[test]
    fn constants_are_bare_leaves() {
        let ctx = Context::default();
        assert_eq!(
            ctx.decision_tree(&Formula::<&str>::top(), &Theory::default()),
            leaf(true)
        );
        assert_eq!(
            ctx.decision_tree(&Formula::<&str>::bottom(), &Theory::default()),
            leaf(false)
        );
        assert_eq!(
            ctx.decision_tree(&formula(&var("a").and(var("a").not())), &Theory::default()),
            leaf(false)
        );
    }
}

mod pruning {
    use super::*;

    /// A variable with no bearing on the outcome collapses out of the tree.
    #[test]
    fn irrelevant_variables_vanish() {
        let mut bindings = Bindings::new();
        bindings.index_or_fresh(&"a");
        bindings.index_or_fresh(&"b");
        // (a ∨ b) ∧ (a ∨ ¬b) --- b decides nothing.
        let f = Formula::new(vec![vec![1, 2], vec![1, -2]], bindings).unwrap();

        let ctx = Context::default();
        assert_eq!(
            ctx.decision_tree(&f, &Theory::default()),
            node("a", leaf(false), leaf(true))
        );
    }

    /// A branch which would set two conflicting variables is a false leaf, without recursion.
    #[test]
    fn conflicting_branches_fail_outright() {
        let ctx = Context::default();
        let clash = |u: &&str, v: &&str| *u == "a" && *v == "b";
        let theory = Theory::default().with_conflicts(&clash);

        let conjunction = ctx.decision_tree(&formula(&var("a").and(var("b"))), &theory);
        assert_eq!(conjunction, leaf(false));

        // (a ∧ b) ∨ c under the same clash leaves only c to decide.
        let e = var("a").and(var("b")).or(var("c"));
        assert_eq!(
            ctx.decision_tree(&formula(&e), &theory),
            node("c", leaf(false), leaf(true))
        );
    }
}

mod soundness {
    use super::*;

    /// The leaf value holds under the path's assignment, however the free variables are valued.
    #[test]
    fn paths_are_extension_invariant() {
        let ctx = Context::default();

        let family: Vec<Expression<&str>> = vec![
            var("a").and(var("b")),
            var("a").or(var("b")),
            var("a").and(var("b").not()).or(var("c").not().and(var("d"))),
            var("a").or(var("b")).and(var("a").not().or(var("c"))),
            var("a").and(var("b").or(var("c"))),
        ];

        for e in &family {
            let tree = ctx.decision_tree(&formula(e), &Theory::default());
            assert_paths_sound(e, &tree);
        }
    }

    fn assert_paths_sound(e: &Expression<&'static str>, tree: &DecisionTree<&'static str>) {
        let variables: Vec<&str> = e.variables().into_iter().copied().collect();

        for (path, outcome) in tree.paths() {
            let free: Vec<&str> = variables
                .iter()
                .copied()
                .filter(|v| !path.iter().any(|(fixed, _)| fixed == v))
                .collect();

            for bits in 0_u32..(1 << free.len()) {
                let oracle = |v: &&str| {
                    if let Some((_, value)) = path.iter().find(|(fixed, _)| fixed == v) {
                        return *value;
                    }
                    match free.iter().position(|f| f == v) {
                        Some(position) => (bits >> position) & 1 == 1,
                        None => false,
                    }
                };

                assert_eq!(
                    e.evaluate(&oracle),
                    outcome,
                    "path {path:?} of {e} is not invariant under {bits:#b}"
                );
            }
        }
    }
}
