/*!
Formulas in conjunctive normal form, paired with variable bindings.

A formula is an ordered sequence of clauses, each clause a disjunction of literals, the whole read as a conjunction.
A literal is a nonzero [i32](CLiteral): the absolute value is the index of a variable, the sign its polarity, and indices begin at one.
[Bindings] tie indices back to the variable type the rest of the pipeline works with.

Two constant encodings are fixed:
- `⊤` is the empty clause sequence with no bindings.
- `⊥` is the pair of clauses `[[1], [-1]]` with no bindings --- index 1 is synthetic and bound to nothing, a trivially unsatisfiable placeholder.

# Examples

```rust
# use crux::structures::expression::Expression;
# use crux::structures::formula::Formula;
let e: Expression<String> = "a & !b".parse().unwrap();
let formula = Formula::from_expression(&e);

assert_eq!(formula.as_dimacs(), "p cnf 2 2\n1 0\n-2 0");
```
*/

mod bindings;
pub use bindings::Bindings;

use crate::structures::variable::Variable;
use crate::types::err::FormulaError;

/// The index of a variable in clausal form.
pub type Index = u32;

/// The canonical representation of a literal: a signed, nonzero integer.
pub type CLiteral = i32;

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Something with the methods of a literal.
pub trait Literal {
    /// A fresh literal, specified by pairing an index with a polarity.
    fn new(index: Index, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The index of the literal.
    fn index(&self) -> Index;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

impl Literal for CLiteral {
    fn new(index: Index, polarity: bool) -> Self {
        match polarity {
            true => index as CLiteral,
            false => -(index as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn index(&self) -> Index {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Something with the methods of a clause.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// An iterator over the indices of the clause, in clause order.
    fn indices(&self) -> impl Iterator<Item = Index>;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut line = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            line.push_str(" 0");
        }
        line
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn indices(&self) -> impl Iterator<Item = Index> {
        self.iter().map(|literal| literal.index())
    }
}

/// A formula in conjunctive normal form together with its bindings.
#[derive(Clone, Debug)]
pub struct Formula<V> {
    clauses: Vec<CClause>,
    bindings: Bindings<V>,
}

impl<V: Variable> PartialEq for Formula<V> {
    fn eq(&self, other: &Self) -> bool {
        self.clauses == other.clauses && self.bindings == other.bindings
    }
}

impl<V: Variable> Eq for Formula<V> {}

impl<V: Variable> Formula<V> {
    /// The canonical encoding of `⊤`: no clauses, no bindings.
    pub fn top() -> Self {
        Formula {
            clauses: Vec::new(),
            bindings: Bindings::new(),
        }
    }

    /// The canonical encoding of `⊥`: the clauses `[[1], [-1]]` over a synthetic index with no bindings.
    pub fn bottom() -> Self {
        Formula {
            clauses: vec![vec![1], vec![-1]],
            bindings: Bindings::new(),
        }
    }

    /// A formula from parts, checked.
    ///
    /// Rejected are: an empty clause, a zero literal, and a literal whose index has no binding --- unless the parts are exactly the `⊥` placeholder.
    /// Formulas produced by [from_expression](Formula::from_expression) are built directly and never pass through these checks.
    pub fn new(clauses: Vec<CClause>, bindings: Bindings<V>) -> Result<Self, FormulaError> {
        let candidate = Formula { clauses, bindings };
        if candidate.is_bottom() {
            return Ok(candidate);
        }

        for clause in &candidate.clauses {
            if clause.is_empty() {
                return Err(FormulaError::EmptyClause);
            }
            for literal in clause {
                if *literal == 0 {
                    return Err(FormulaError::ZeroLiteral);
                }
                if candidate.bindings.variable_of(literal.index()).is_none() {
                    return Err(FormulaError::UnboundIndex(literal.index()));
                }
            }
        }

        Ok(candidate)
    }

    /// A formula from parts produced by conversion, with invariants already established.
    pub(crate) fn from_parts(clauses: Vec<CClause>, bindings: Bindings<V>) -> Self {
        Formula { clauses, bindings }
    }

    /// Whether the formula is the canonical `⊤`.
    ///
    /// An empty conjunction holds of anything.
    pub fn is_top(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the formula is the canonical `⊥` placeholder.
    pub fn is_bottom(&self) -> bool {
        self.bindings.is_empty() && self.clauses == vec![vec![1], vec![-1]]
    }

    /// The clauses of the formula, in formula order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The bindings of the formula.
    pub fn bindings(&self) -> &Bindings<V> {
        &self.bindings
    }

    /// The count of indices a backend must value: the greater of the binding count and the largest index used in a clause.
    ///
    /// The two differ only when a synthetic index appears (the `⊥` placeholder) or a binding's clause was dropped as tautological.
    pub fn index_count(&self) -> Index {
        let referenced = self
            .clauses
            .iter()
            .flat_map(|clause| clause.indices())
            .max()
            .unwrap_or(0);
        Index::max(self.bindings.count() as Index, referenced)
    }

    /// The formula in DIMACS form: a problem line, then one line per clause, each terminated by `0`, with no trailing newline.
    pub fn as_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.index_count(), self.clauses.len());
        out.push_str(
            &self
                .clauses
                .iter()
                .map(|clause| clause.as_dimacs(true))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        out
    }
}
