use crux::structures::expression::{ExpandOptions, Expression};

fn parsed(src: &str) -> Expression<String> {
    src.parse().unwrap()
}

fn simplified(src: &str) -> Expression<String> {
    parsed(src).expand(ExpandOptions::default())
}

fn clausal(src: &str) -> Expression<String> {
    parsed(src).expand(ExpandOptions { aggressive: true })
}

mod laws {
    use super::*;

    #[test]
    fn double_negation() {
        assert_eq!(simplified("!!a"), parsed("a"));
        assert_eq!(simplified("!!!a"), parsed("!a"));
    }

    #[test]
    fn constant_negation() {
        assert_eq!(simplified("!true"), parsed("false"));
        assert_eq!(simplified("!false"), parsed("true"));
    }

    #[test]
    fn de_morgan() {
        assert_eq!(simplified("!(a & b)"), parsed("!a | !b"));
        assert_eq!(simplified("!(a | b)"), parsed("!a & !b"));
    }

    #[test]
    fn identity() {
        assert_eq!(simplified("a & true"), parsed("a"));
        assert_eq!(simplified("true & a"), parsed("a"));
        assert_eq!(simplified("a | false"), parsed("a"));
        assert_eq!(simplified("false | a"), parsed("a"));
    }

    #[test]
    fn domination() {
        assert_eq!(simplified("a & false"), parsed("false"));
        assert_eq!(simplified("false & a"), parsed("false"));
        assert_eq!(simplified("a | true"), parsed("true"));
        assert_eq!(simplified("true | a"), parsed("true"));
    }

    #[test]
    fn complement() {
        assert_eq!(simplified("a & !a"), parsed("false"));
        assert_eq!(simplified("!a & a"), parsed("false"));
        assert_eq!(simplified("a | !a"), parsed("true"));
        assert_eq!(simplified("!a | a"), parsed("true"));
    }

    #[test]
    fn idempotent() {
        assert_eq!(simplified("a & a"), parsed("a"));
        assert_eq!(simplified("a | a"), parsed("a"));
        assert_eq!(simplified("(a | b) & (a | b)"), parsed("a | b"));
    }

    #[test]
    fn idempotent_catches_nested_duplicates() {
        assert_eq!(simplified("a & (a & b)"), parsed("a & b"));
        assert_eq!(simplified("(a & b) & a"), parsed("a & b"));
        assert_eq!(simplified("a | (b | a)"), parsed("b | a"));
    }

    #[test]
    fn absorption() {
        assert_eq!(simplified("a & (a | b)"), parsed("a"));
        assert_eq!(simplified("(a | b) & a"), parsed("a"));
        assert_eq!(simplified("a | (a & b)"), parsed("a"));
        assert_eq!(simplified("(a & b) | a"), parsed("a"));
    }
}

mod fixpoint {
    use super::*;

    /// Rules compose across levels: the parent shape after one rewrite exposes the next.
    #[test]
    fn rewrites_cascade() {
        assert_eq!(simplified("!(!a | b) | !!a"), parsed("a"));
        assert_eq!(simplified("!(a | !a)"), parsed("false"));
        assert_eq!(simplified("!!(a & true) | false"), parsed("a"));
    }

    #[test]
    fn repeated_subtrees_normalize_alike() {
        let e = simplified("(!!a & !!a) | (!!a & !!a)");
        assert_eq!(e, parsed("a"));
    }
}

mod distribution {
    use super::*;

    /// Without the aggressive option the or-over-and shape is left alone.
    #[test]
    fn gated_behind_aggressive() {
        assert_eq!(simplified("(a & b) | c"), parsed("(a & b) | c"));
        assert_eq!(simplified("c | (a & b)"), parsed("c | (a & b)"));
    }

    #[test]
    fn distributes_to_clausal_form() {
        assert_eq!(clausal("(a & b) | c"), parsed("(a | c) & (b | c)"));
        assert_eq!(clausal("c | (a & b)"), parsed("(c | a) & (c | b)"));
    }

    #[test]
    fn fixpoint_is_a_conjunction_of_disjunctions() {
        let e = clausal("(a & !b) | (!c & d)");
        let expected = parsed("((a | !c) & (a | d)) & ((!b | !c) & (!b | d))");
        assert_eq!(e, expected);
    }
}

mod helpers {
    use crux::structures::expression::Expression;

    fn var(name: &str) -> Expression<&str> {
        Expression::var(name)
    }

    #[test]
    fn at_most_one_pairs_lexicographically() {
        let built = Expression::at_most_one(["b", "a", "c"]);
        let expected = var("a")
            .not()
            .or(var("b").not())
            .and(var("a").not().or(var("c").not()))
            .and(var("b").not().or(var("c").not()));
        assert_eq!(built, expected);
    }

    #[test]
    fn at_most_one_of_few_is_top() {
        assert_eq!(Expression::at_most_one(Vec::<&str>::new()), Expression::constant(true));
        assert_eq!(Expression::at_most_one(vec!["a"]), Expression::constant(true));
    }

    /// The helper means what it says: two of the listed variables cannot hold together.
    #[test]
    fn at_most_one_semantics() {
        let e = Expression::at_most_one(["a", "b", "c"]);

        let none = |_: &&str| false;
        assert!(e.evaluate(&none));

        let only_b = |v: &&str| *v == "b";
        assert!(e.evaluate(&only_b));

        let a_and_c = |v: &&str| *v == "a" || *v == "c";
        assert!(!e.evaluate(&a_and_c));
    }
}
