/*!
Transcription between expressions and clausal formulas.

[from_expression](Formula::from_expression) runs in three stages:

1. Rewrite to a fixpoint of the [clausal ruleset](crate::rewrite::Ruleset::clausal), after which the expression is a constant or a conjunction of disjunctions of literals.
2. Number variables by a left-to-right, leaves-first walk of the normalized expression: consecutive indices from one, first seen first bound.
3. Emit one clause per top-level disjunct, suppressing duplicate literals within a clause and dropping any tautological clause outright --- a clause holding `x` and `¬x` is true of everything, so in a conjunction it is omitted rather than making the whole formula `⊤`.

[to_expression](Formula::to_expression) reverses the trip with balanced trees: each clause becomes a minimum-depth `∨` tree over its literals in clause order, and the formula a minimum-depth `∧` tree over its clauses.
The constant encodings reverse exactly.

Clause ordering is deterministic given the input expression, though only semantic agreement between the two directions is contractual.
*/

use crate::config::defaults;
use crate::misc::log::targets;
use crate::structures::expression::{ExpandOptions, Expression};
use crate::structures::formula::{Bindings, CClause, CLiteral, Formula, Literal};
use crate::structures::variable::Variable;

impl<V: Variable> Formula<V> {
    /// The expression in clausal form, with stable first-seen variable numbering.
    ///
    /// Distribution can square the clause count at each nesting level; a warning is logged past
    /// [CLAUSE_WARNING_THRESHOLD](defaults::CLAUSE_WARNING_THRESHOLD) clauses.
    pub fn from_expression(expression: &Expression<V>) -> Formula<V> {
        let normal = expression.expand(ExpandOptions { aggressive: true });

        match &normal {
            Expression::Const(true) => Formula::top(),
            Expression::Const(false) => Formula::bottom(),

            _ => {
                let mut bindings = Bindings::new();
                number_leaves(&normal, &mut bindings);

                let mut conjuncts = Vec::new();
                collect_conjuncts(&normal, &mut conjuncts);

                let mut clauses = Vec::new();
                for conjunct in conjuncts {
                    if let Some(clause) = clause_of(conjunct, &bindings) {
                        clauses.push(clause);
                    }
                }

                if clauses.len() > defaults::CLAUSE_WARNING_THRESHOLD {
                    log::warn!(
                        target: targets::TRANSCRIPTION,
                        "{} clauses from one expression, distribution may be exploding",
                        clauses.len()
                    );
                }

                Formula::from_parts(clauses, bindings)
            }
        }
    }

    /// The formula as a balanced expression.
    ///
    /// # Panics
    /// On a formula referencing an index with no binding, outside the canonical `⊥` placeholder.
    /// Such a formula cannot be obtained from [from_expression](Formula::from_expression) or [new](Formula::new).
    pub fn to_expression(&self) -> Expression<V> {
        if self.is_top() {
            return Expression::Const(true);
        }
        if self.is_bottom() {
            return Expression::Const(false);
        }

        let conjuncts: Vec<Expression<V>> = self
            .clauses()
            .iter()
            .map(|clause| balanced_disjunction(clause, self.bindings()))
            .collect();

        balanced_conjunction(&conjuncts)
    }
}

/// Binds each variable of the expression in left-to-right, leaves-first order.
fn number_leaves<V: Variable>(expression: &Expression<V>, bindings: &mut Bindings<V>) {
    match expression {
        Expression::Const(_) => {}
        Expression::Var(variable) => {
            bindings.index_or_fresh(variable);
        }
        Expression::Not(negated) => number_leaves(negated, bindings),
        Expression::And(lhs, rhs) | Expression::Or(lhs, rhs) => {
            number_leaves(lhs, bindings);
            number_leaves(rhs, bindings);
        }
    }
}

/// Flattens a conjunction tree into its conjuncts, left to right.
fn collect_conjuncts<'e, V: Variable>(
    expression: &'e Expression<V>,
    conjuncts: &mut Vec<&'e Expression<V>>,
) {
    match expression {
        Expression::And(lhs, rhs) => {
            collect_conjuncts(lhs, conjuncts);
            collect_conjuncts(rhs, conjuncts);
        }
        _ => conjuncts.push(expression),
    }
}

/// Flattens a disjunction tree into its disjuncts, left to right.
fn collect_disjuncts<'e, V: Variable>(
    expression: &'e Expression<V>,
    disjuncts: &mut Vec<&'e Expression<V>>,
) {
    match expression {
        Expression::Or(lhs, rhs) => {
            collect_disjuncts(lhs, disjuncts);
            collect_disjuncts(rhs, disjuncts);
        }
        _ => disjuncts.push(expression),
    }
}

/// The clause of a single conjunct, or `None` for a tautological clause.
fn clause_of<V: Variable>(conjunct: &Expression<V>, bindings: &Bindings<V>) -> Option<CClause> {
    let mut disjuncts = Vec::new();
    collect_disjuncts(conjunct, &mut disjuncts);

    let mut clause: CClause = Vec::new();
    for disjunct in disjuncts {
        let literal = match disjunct {
            Expression::Var(variable) => literal_of(variable, true, bindings),
            Expression::Not(negated) => match negated.as_ref() {
                Expression::Var(variable) => literal_of(variable, false, bindings),
                _ => unreachable!("negation of a non-variable survived clausal rewriting"),
            },
            _ => unreachable!("non-literal disjunct survived clausal rewriting"),
        };

        if clause.contains(&literal.negate()) {
            // x ∨ ¬x ∨ …, the clause holds of everything.
            return None;
        }
        if !clause.contains(&literal) {
            clause.push(literal);
        }
    }

    Some(clause)
}

fn literal_of<V: Variable>(variable: &V, polarity: bool, bindings: &Bindings<V>) -> CLiteral {
    let Some(index) = bindings.index_of(variable) else {
        unreachable!("every variable is numbered before clause emission")
    };
    CLiteral::new(index, polarity)
}

/// A minimum-depth `∨` tree over the literals of a clause, splitting at the midpoint.
fn balanced_disjunction<V: Variable>(clause: &[CLiteral], bindings: &Bindings<V>) -> Expression<V> {
    match clause.len() {
        0 => unreachable!("clauses hold at least one literal"),
        1 => literal_expression(clause[0], bindings),
        len => {
            let mid = (len + 1) / 2;
            Expression::Or(
                Box::new(balanced_disjunction(&clause[..mid], bindings)),
                Box::new(balanced_disjunction(&clause[mid..], bindings)),
            )
        }
    }
}

/// A minimum-depth `∧` tree over already built clause expressions.
fn balanced_conjunction<V: Variable>(conjuncts: &[Expression<V>]) -> Expression<V> {
    match conjuncts.len() {
        0 => unreachable!("the empty conjunction is the canonical ⊤, handled above"),
        1 => conjuncts[0].clone(),
        len => {
            let mid = (len + 1) / 2;
            Expression::And(
                Box::new(balanced_conjunction(&conjuncts[..mid])),
                Box::new(balanced_conjunction(&conjuncts[mid..])),
            )
        }
    }
}

fn literal_expression<V: Variable>(literal: CLiteral, bindings: &Bindings<V>) -> Expression<V> {
    let Some(variable) = bindings.variable_of(literal.index()) else {
        panic!(
            "index {} has no binding outside the unsatisfiable placeholder",
            literal.index()
        )
    };

    match literal.polarity() {
        true => Expression::Var(variable.clone()),
        false => Expression::Not(Box::new(Expression::Var(variable.clone()))),
    }
}
