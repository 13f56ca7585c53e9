//! The association between clause indices and variables.

use std::collections::HashMap;

use crate::structures::assignment::Model;
use crate::structures::formula::{CLiteral, Index, Literal};
use crate::structures::variable::Variable;

/// A one-to-one mapping between indices and variables, with indices handed out in first-seen order from one.
#[derive(Clone, Debug)]
pub struct Bindings<V> {
    /// Variables in index order, so the variable of index `i` sits at position `i - 1`.
    variables: Vec<V>,

    /// The inverse map.
    indices: HashMap<V, Index>,
}

// The inverse map is determined by the variable list, so equality reads the list alone.
impl<V: Variable> PartialEq for Bindings<V> {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl<V: Variable> Eq for Bindings<V> {}

impl<V> Default for Bindings<V> {
    fn default() -> Self {
        Bindings {
            variables: Vec::default(),
            indices: HashMap::default(),
        }
    }
}

impl<V: Variable> Bindings<V> {
    /// An empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The index bound to `variable`, if any.
    pub fn index_of(&self, variable: &V) -> Option<Index> {
        self.indices.get(variable).copied()
    }

    /// The variable bound to `index`, if any.
    pub fn variable_of(&self, index: Index) -> Option<&V> {
        match index {
            0 => None,
            _ => self.variables.get(index as usize - 1),
        }
    }

    /// The index bound to `variable`, binding the next fresh index if the variable is new.
    pub fn index_or_fresh(&mut self, variable: &V) -> Index {
        if let Some(index) = self.indices.get(variable) {
            return *index;
        }

        let fresh = self.variables.len() as Index + 1;
        self.variables.push(variable.clone());
        self.indices.insert(variable.clone(), fresh);
        fresh
    }

    /// The number of bound variables.
    pub fn count(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The bound variables, in index order.
    pub fn variables(&self) -> impl Iterator<Item = &V> {
        self.variables.iter()
    }

    /// A backend model read through the bindings, with any literal whose index has no binding discarded.
    pub fn model_of(&self, literals: &[CLiteral]) -> Model<V> {
        let mut model = Model::new();
        for literal in literals {
            if let Some(variable) = self.variable_of(literal.index()) {
                model.insert(variable.clone(), literal.polarity());
            }
        }
        model
    }
}
