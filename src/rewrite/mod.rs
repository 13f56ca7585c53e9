/*!
Bottom-up fixpoint rewriting of expressions, driven by rules.

A [Rule] is a pure function: given an expression which matches the rule's pattern it returns the rewritten form, and otherwise declines.
A [Ruleset] composes rules by post-order traversal:

1. Children are rewritten first.
2. The rule sequence is applied at the rebuilt node; if any rule fires the node is re-entered, since the fresh shape may expose matches the old shape hid.
3. Results are memoized per subtree (structural hash) for the duration of a pass, so repeated subexpressions are rewritten once.

Every rule strictly shrinks a size/normal-form measure with one exception: distribution grows expressions, and so only belongs to the [clausal](Ruleset::clausal) set used on the way to a formula.
Distribution still terminates --- it fires only while an `∨` over `∧` shape remains.
*/

pub mod rules;

use std::collections::HashMap;

use crate::misc::log::targets;
use crate::structures::expression::Expression;
use crate::structures::variable::Variable;

/// A rewrite rule: `Some` holds the rewritten form, `None` declines the expression.
pub type Rule<V> = fn(&Expression<V>) -> Option<Expression<V>>;

/// A named, ordered sequence of rules.
pub struct Ruleset<V> {
    /// A name, for logs.
    pub name: &'static str,

    /// The rules, applied in sequence at each node.
    pub rules: Vec<Rule<V>>,
}

impl<V: Variable> Ruleset<V> {
    /// The simplification laws, without distribution.
    ///
    /// A pass with this set never grows an expression.
    pub fn normalization() -> Self {
        Ruleset {
            name: "normalization",
            rules: vec![
                rules::constant_negation,
                rules::double_negation,
                rules::de_morgan,
                rules::domination,
                rules::identity,
                rules::complement,
                rules::idempotent,
                rules::absorption,
            ],
        }
    }

    /// The simplification laws together with distribution.
    ///
    /// A fixpoint of this set is a constant, or a conjunction of disjunctions of literals.
    pub fn clausal() -> Self {
        let mut ruleset = Self::normalization();
        ruleset.name = "clausal normalization";
        ruleset.rules.push(rules::distribution);
        ruleset
    }

    /// The expression rewritten to a fixpoint of the ruleset.
    pub fn rewrite(&self, expression: &Expression<V>) -> Expression<V> {
        let mut cache = HashMap::new();
        let rewritten = self.rewrite_cached(expression, &mut cache);
        log::trace!(
            target: targets::REWRITE,
            "{} pass: {} nodes memoized",
            self.name,
            cache.len()
        );
        rewritten
    }

    fn rewrite_cached(
        &self,
        expression: &Expression<V>,
        cache: &mut HashMap<Expression<V>, Expression<V>>,
    ) -> Expression<V> {
        if let Some(known) = cache.get(expression) {
            return known.clone();
        }

        // Children first, so each rule sees normalized operands.
        let mut node = match expression {
            Expression::Not(e) => Expression::Not(Box::new(self.rewrite_cached(e, cache))),
            Expression::And(lhs, rhs) => Expression::And(
                Box::new(self.rewrite_cached(lhs, cache)),
                Box::new(self.rewrite_cached(rhs, cache)),
            ),
            Expression::Or(lhs, rhs) => Expression::Or(
                Box::new(self.rewrite_cached(lhs, cache)),
                Box::new(self.rewrite_cached(rhs, cache)),
            ),
            leaf => leaf.clone(),
        };

        if let Some(rewritten) = self.apply(&node) {
            node = self.rewrite_cached(&rewritten, cache);
        }

        cache.insert(expression.clone(), node.clone());
        node
    }

    /// One pass of the rule sequence at a single node; `Some` if any rule fired.
    fn apply(&self, expression: &Expression<V>) -> Option<Expression<V>> {
        let mut current: Option<Expression<V>> = None;

        for rule in &self.rules {
            let subject = current.as_ref().unwrap_or(expression);
            if let Some(rewritten) = rule(subject) {
                log::trace!(target: targets::REWRITE, "{subject:?} ⊢ {rewritten:?}");
                current = Some(rewritten);
            }
        }

        current
    }
}
