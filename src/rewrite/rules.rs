/*!
The rewrite rule set: the algebraic laws, one function per law family.

Each rule matches both operand orders where the law allows --- commutativity is not itself a rule, it is encoded by attempting each ordering inside a pattern.
Equality between subtrees is structural, on operands already normalized by the bottom-up traversal; any equivalence beyond structural identity is left to the solver.
*/

use crate::structures::expression::Expression::{self, And, Const, Not, Or};
use crate::structures::variable::Variable;

/// `¬⊤ → ⊥` and `¬⊥ → ⊤`.
pub fn constant_negation<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        Not(negated) => match negated.as_ref() {
            Const(value) => Some(Const(!value)),
            _ => None,
        },
        _ => None,
    }
}

/// `¬¬a → a`.
pub fn double_negation<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        Not(outer) => match outer.as_ref() {
            Not(inner) => Some(inner.as_ref().clone()),
            _ => None,
        },
        _ => None,
    }
}

/// `¬(a ∧ b) → ¬a ∨ ¬b` and `¬(a ∨ b) → ¬a ∧ ¬b`.
pub fn de_morgan<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        Not(negated) => match negated.as_ref() {
            And(lhs, rhs) => Some(Or(
                Box::new(Not(lhs.clone())),
                Box::new(Not(rhs.clone())),
            )),
            Or(lhs, rhs) => Some(And(
                Box::new(Not(lhs.clone())),
                Box::new(Not(rhs.clone())),
            )),
            _ => None,
        },
        _ => None,
    }
}

/// `a ∧ ⊥ → ⊥` and `a ∨ ⊤ → ⊤`, either operand order.
pub fn domination<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        And(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
            (Const(false), _) | (_, Const(false)) => Some(Const(false)),
            _ => None,
        },
        Or(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
            (Const(true), _) | (_, Const(true)) => Some(Const(true)),
            _ => None,
        },
        _ => None,
    }
}

/// `a ∧ ⊤ → a` and `a ∨ ⊥ → a`, either operand order.
pub fn identity<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        And(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
            (Const(true), kept) | (kept, Const(true)) => Some(kept.clone()),
            _ => None,
        },
        Or(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
            (Const(false), kept) | (kept, Const(false)) => Some(kept.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// `a ∧ ¬a → ⊥` and `a ∨ ¬a → ⊤`, either operand order.
pub fn complement<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    fn complementary<V: Variable>(lhs: &Expression<V>, rhs: &Expression<V>) -> bool {
        match (lhs, rhs) {
            (Not(negated), other) | (other, Not(negated)) => negated.as_ref() == other,
            _ => false,
        }
    }

    match expression {
        And(lhs, rhs) if complementary(lhs, rhs) => Some(Const(false)),
        Or(lhs, rhs) if complementary(lhs, rhs) => Some(Const(true)),
        _ => None,
    }
}

/// `a ∧ a → a` and `a ∨ a → a`, also catching a nested duplicate: `a ∧ (a ∧ b) → a ∧ b`.
pub fn idempotent<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        And(lhs, rhs) => {
            if lhs == rhs {
                return Some(lhs.as_ref().clone());
            }
            if let And(inner_lhs, inner_rhs) = rhs.as_ref() {
                if inner_lhs == lhs || inner_rhs == lhs {
                    return Some(rhs.as_ref().clone());
                }
            }
            if let And(inner_lhs, inner_rhs) = lhs.as_ref() {
                if inner_lhs == rhs || inner_rhs == rhs {
                    return Some(lhs.as_ref().clone());
                }
            }
            None
        }
        Or(lhs, rhs) => {
            if lhs == rhs {
                return Some(lhs.as_ref().clone());
            }
            if let Or(inner_lhs, inner_rhs) = rhs.as_ref() {
                if inner_lhs == lhs || inner_rhs == lhs {
                    return Some(rhs.as_ref().clone());
                }
            }
            if let Or(inner_lhs, inner_rhs) = lhs.as_ref() {
                if inner_lhs == rhs || inner_rhs == rhs {
                    return Some(lhs.as_ref().clone());
                }
            }
            None
        }
        _ => None,
    }
}

/// `a ∧ (a ∨ b) → a` and `a ∨ (a ∧ b) → a`, either operand and disjunct order.
pub fn absorption<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        And(lhs, rhs) => {
            if let Or(inner_lhs, inner_rhs) = rhs.as_ref() {
                if inner_lhs == lhs || inner_rhs == lhs {
                    return Some(lhs.as_ref().clone());
                }
            }
            if let Or(inner_lhs, inner_rhs) = lhs.as_ref() {
                if inner_lhs == rhs || inner_rhs == rhs {
                    return Some(rhs.as_ref().clone());
                }
            }
            None
        }
        Or(lhs, rhs) => {
            if let And(inner_lhs, inner_rhs) = rhs.as_ref() {
                if inner_lhs == lhs || inner_rhs == lhs {
                    return Some(lhs.as_ref().clone());
                }
            }
            if let And(inner_lhs, inner_rhs) = lhs.as_ref() {
                if inner_lhs == rhs || inner_rhs == rhs {
                    return Some(rhs.as_ref().clone());
                }
            }
            None
        }
        _ => None,
    }
}

/// Distribution of `∨` over `∧`, either operand order: `(a ∧ b) ∨ c → (a ∨ c) ∧ (b ∨ c)`.
///
/// The growing rule. Belongs only to the clausal ruleset, and a fixpoint leaves no `∨` above an `∧`.
pub fn distribution<V: Variable>(expression: &Expression<V>) -> Option<Expression<V>> {
    match expression {
        Or(lhs, rhs) => {
            if let And(inner_lhs, inner_rhs) = lhs.as_ref() {
                return Some(And(
                    Box::new(Or(inner_lhs.clone(), rhs.clone())),
                    Box::new(Or(inner_rhs.clone(), rhs.clone())),
                ));
            }
            if let And(inner_lhs, inner_rhs) = rhs.as_ref() {
                return Some(And(
                    Box::new(Or(lhs.clone(), inner_lhs.clone())),
                    Box::new(Or(lhs.clone(), inner_rhs.clone())),
                ));
            }
            None
        }
        _ => None,
    }
}
