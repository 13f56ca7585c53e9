use crux::analysis::Theory;
use crux::context::Context;
use crux::types::err::SolveError;

fn forces(u: &&str, v: &&str) -> bool {
    *u == "a" && *v == "b"
}

fn clash(u: &&str, v: &&str) -> bool {
    *u == "a" && *v == "b"
}

mod screening {
    use super::*;

    #[test]
    fn an_empty_theory_keeps_everything() {
        let ctx = Context::default();
        let pairs = vec![("a", true), ("b", false), ("c", true)];

        assert_eq!(
            ctx.validate_assignments(pairs.clone(), &Theory::default()),
            Ok(pairs)
        );
    }

    /// An implied variable which holds is redundant, and drops from the result.
    #[test]
    fn forward_filtering() {
        let ctx = Context::default();
        let theory = Theory::default().with_implies(&forces);

        assert_eq!(
            ctx.validate_assignments([("a", true), ("b", true)], &theory),
            Ok(vec![("a", true)])
        );
    }

    /// An implied variable which fails contradicts its antecedent.
    #[test]
    fn backward_conflict_detection() {
        let ctx = Context::default();
        let theory = Theory::default().with_implies(&forces);

        assert_eq!(
            ctx.validate_assignments([("a", true), ("b", false)], &theory),
            Err(SolveError::Unsatisfiable)
        );
    }

    #[test]
    fn conflicting_holds_are_unsatisfiable() {
        let ctx = Context::default();
        let theory = Theory::default().with_conflicts(&clash);

        assert_eq!(
            ctx.validate_assignments([("a", true), ("b", true)], &theory),
            Err(SolveError::Unsatisfiable)
        );
    }

    /// The conflict relation is read in both argument orders.
    #[test]
    fn conflicts_are_symmetric() {
        let ctx = Context::default();
        let theory = Theory::default().with_conflicts(&clash);

        assert_eq!(
            ctx.validate_assignments([("b", true), ("a", true)], &theory),
            Err(SolveError::Unsatisfiable)
        );
    }

    /// Variables valued `⊥` never introduce conflicts.
    #[test]
    fn failing_variables_never_conflict() {
        let ctx = Context::default();
        let theory = Theory::default().with_conflicts(&clash);

        assert_eq!(
            ctx.validate_assignments([("a", true), ("b", false)], &theory),
            Ok(vec![("a", true), ("b", false)])
        );
    }
}

mod ordering {
    use super::*;

    /// Pairs are folded in input order by default, so a consequent ahead of its antecedent is kept.
    #[test]
    fn input_order_is_the_default() {
        let ctx = Context::default();
        let theory = Theory::default().with_implies(&forces);

        assert_eq!(
            ctx.validate_assignments([("b", true), ("a", true)], &theory),
            Ok(vec![("b", true), ("a", true)])
        );
    }

    /// A sorter fixes the processing order, and the result preserves it.
    #[test]
    fn a_sorter_reorders_processing() {
        let ctx = Context::default();
        let descending = |a: &&str, b: &&str| b.cmp(a);
        let theory = Theory::default().with_sorter(&descending);

        assert_eq!(
            ctx.validate_assignments([("a", true), ("c", true), ("b", true)], &theory),
            Ok(vec![("c", true), ("b", true), ("a", true)])
        );
    }

    /// Sorted back into antecedent-first order, the forward filter applies after all.
    #[test]
    fn sorting_can_expose_redundancy() {
        let ctx = Context::default();
        let ascending = |a: &&str, b: &&str| a.cmp(b);
        let theory = Theory::default()
            .with_implies(&forces)
            .with_sorter(&ascending);

        assert_eq!(
            ctx.validate_assignments([("b", true), ("a", true)], &theory),
            Ok(vec![("a", true)])
        );
    }
}
