/*!
Expressions, aka. propositional formulas over a caller-chosen variable type.

The canonical representation of an expression is a tree of the five connectives, with no implicit normalization.
Binary connectives are strictly binary --- chained [and](Expression::and)/[or](Expression::or) calls build left-leaning trees, and so preserve surface associativity.

Equality and hashing are structural.
The [rewrite engine](crate::rewrite) relies on this: idempotence, absorption, and complement rules compare subtrees for structural identity, and semantic equivalence beyond that is the solver's job.

# Examples

```rust
# use crux::structures::expression::Expression;
let e = Expression::var("a").and(Expression::var("b").not());

assert!(e.evaluate(&|v: &&str| *v == "a"));
assert!(!e.evaluate(&|_| true));

assert_eq!(e.to_string(), "(a ∧ ¬b)");
```

An expression over `String` variables may also be parsed from surface syntax:

```rust
# use crux::structures::expression::Expression;
let parsed: Expression<String> = "(a & !b) | c".parse().unwrap();
let built = Expression::var("a".to_string())
    .and(Expression::var("b".to_string()).not())
    .or(Expression::var("c".to_string()));

assert_eq!(parsed, built);
```
*/

mod parse;

use std::collections::BTreeSet;

use crate::rewrite::Ruleset;
use crate::structures::variable::Variable;

/// A propositional expression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Expression<V> {
    /// A constant: `⊤` as `true`, `⊥` as `false`.
    Const(bool),

    /// A variable.
    Var(V),

    /// Negation.
    Not(Box<Expression<V>>),

    /// Conjunction, strictly binary.
    And(Box<Expression<V>>, Box<Expression<V>>),

    /// Disjunction, strictly binary.
    Or(Box<Expression<V>>, Box<Expression<V>>),
}

/// Options for [expand](Expression::expand).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpandOptions {
    /// Also apply distribution, so the fixpoint is clausal.
    ///
    /// Distribution grows expressions, and is only of use on the way to a [formula](crate::structures::formula::Formula).
    pub aggressive: bool,
}

impl<V: Variable> Expression<V> {
    /// An expression holding the given variable.
    pub fn var(variable: V) -> Self {
        Expression::Var(variable)
    }

    /// A constant expression.
    pub fn constant(value: bool) -> Self {
        Expression::Const(value)
    }

    /// The negation of the expression.
    pub fn not(self) -> Self {
        Expression::Not(Box::new(self))
    }

    /// The conjunction of the expression with `other`.
    pub fn and(self, other: Self) -> Self {
        Expression::And(Box::new(self), Box::new(other))
    }

    /// The disjunction of the expression with `other`.
    pub fn or(self, other: Self) -> Self {
        Expression::Or(Box::new(self), Box::new(other))
    }

    /// The conjunction of `¬vᵢ ∨ ¬vⱼ` for every unordered pair of the given variables, in the variable order.
    ///
    /// True of any assignment which sets at most one of the variables.
    /// With one variable or none there is nothing to rule out, and the result is `⊤`.
    pub fn at_most_one<I: IntoIterator<Item = V>>(variables: I) -> Self {
        let mut ordered: Vec<V> = variables.into_iter().collect();
        ordered.sort();

        let mut conjunction: Option<Self> = None;
        for i in 0..ordered.len() {
            for j in (i + 1)..ordered.len() {
                let pair = Expression::var(ordered[i].clone())
                    .not()
                    .or(Expression::var(ordered[j].clone()).not());
                conjunction = Some(match conjunction {
                    Some(built) => built.and(pair),
                    None => pair,
                });
            }
        }

        conjunction.unwrap_or(Expression::Const(true))
    }

    /// The truth value of the expression, with free variables read through `oracle`.
    ///
    /// Evaluation is total and strict: both operands of a connective are evaluated, with no short-circuiting, so evaluation agrees with the algebraic semantics literal for literal.
    /// An oracle is expected to answer for every variable of the expression --- what to do about an unknown variable is the oracle's concern, not part of the semantic domain.
    pub fn evaluate(&self, oracle: &impl Fn(&V) -> bool) -> bool {
        match self {
            Expression::Const(value) => *value,
            Expression::Var(variable) => oracle(variable),
            Expression::Not(e) => !e.evaluate(oracle),
            Expression::And(lhs, rhs) => {
                let lhs_value = lhs.evaluate(oracle);
                let rhs_value = rhs.evaluate(oracle);
                lhs_value & rhs_value
            }
            Expression::Or(lhs, rhs) => {
                let lhs_value = lhs.evaluate(oracle);
                let rhs_value = rhs.evaluate(oracle);
                lhs_value | rhs_value
            }
        }
    }

    /// The variables of the expression, in the variable order.
    pub fn variables(&self) -> BTreeSet<&V> {
        let mut collected = BTreeSet::new();
        self.collect_variables(&mut collected);
        collected
    }

    fn collect_variables<'e>(&'e self, collected: &mut BTreeSet<&'e V>) {
        match self {
            Expression::Const(_) => {}
            Expression::Var(variable) => {
                collected.insert(variable);
            }
            Expression::Not(e) => e.collect_variables(collected),
            Expression::And(lhs, rhs) | Expression::Or(lhs, rhs) => {
                lhs.collect_variables(collected);
                rhs.collect_variables(collected);
            }
        }
    }

    /// The expression simplified to a fixpoint of the [rewrite rules](crate::rewrite::rules).
    ///
    /// Without the `aggressive` option distribution is never applied, and the result is no larger than the input.
    pub fn expand(&self, options: ExpandOptions) -> Self {
        let ruleset = match options.aggressive {
            true => Ruleset::clausal(),
            false => Ruleset::normalization(),
        };
        ruleset.rewrite(self)
    }
}

impl<V: Variable + std::fmt::Display> std::fmt::Display for Expression<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Const(true) => write!(f, "⊤"),
            Expression::Const(false) => write!(f, "⊥"),
            Expression::Var(variable) => write!(f, "{variable}"),
            Expression::Not(e) => write!(f, "¬{e}"),
            Expression::And(lhs, rhs) => write!(f, "({lhs} ∧ {rhs})"),
            Expression::Or(lhs, rhs) => write!(f, "({lhs} ∨ {rhs})"),
        }
    }
}
