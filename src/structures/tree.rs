/*!
Decision trees, whose root-to-leaf paths enumerate the truth of a formula.

An internal node carries a variable and a child for each way of valuing it; leaves carry `⊤` or `⊥`.
No variable repeats along a path, and a tree may be degenerate --- a bare leaf, when the formula is constant.

The guarantee [synthesis](crate::analysis::tree) maintains is extension invariance: the partial assignment read off any root-to-leaf path fixes the formula's value at the leaf, however the unmentioned variables are valued.
*/

use crate::structures::variable::Variable;

/// A binary decision tree over variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecisionTree<V> {
    /// A constant outcome.
    Leaf(bool),

    /// A split on a variable.
    Node {
        /// The variable decided at this node.
        variable: V,

        /// The subtree for the variable valued `⊥`.
        when_false: Box<DecisionTree<V>>,

        /// The subtree for the variable valued `⊤`.
        when_true: Box<DecisionTree<V>>,
    },
}

impl<V: Variable> DecisionTree<V> {
    /// A leaf with the given outcome.
    pub fn leaf(outcome: bool) -> Self {
        DecisionTree::Leaf(outcome)
    }

    /// A node splitting on `variable`.
    pub fn node(variable: V, when_false: Self, when_true: Self) -> Self {
        DecisionTree::Node {
            variable,
            when_false: Box::new(when_false),
            when_true: Box::new(when_true),
        }
    }

    /// Every root-to-leaf path, as the partial assignment read along the path paired with the leaf outcome.
    pub fn paths(&self) -> Vec<(Vec<(V, bool)>, bool)> {
        let mut collected = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut collected);
        collected
    }

    fn collect_paths(&self, prefix: &mut Vec<(V, bool)>, collected: &mut Vec<(Vec<(V, bool)>, bool)>) {
        match self {
            DecisionTree::Leaf(outcome) => collected.push((prefix.clone(), *outcome)),
            DecisionTree::Node {
                variable,
                when_false,
                when_true,
            } => {
                prefix.push((variable.clone(), false));
                when_false.collect_paths(prefix, collected);
                prefix.pop();

                prefix.push((variable.clone(), true));
                when_true.collect_paths(prefix, collected);
                prefix.pop();
            }
        }
    }
}

impl<V: Variable + std::fmt::Display> std::fmt::Display for DecisionTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionTree::Leaf(true) => write!(f, "⊤"),
            DecisionTree::Leaf(false) => write!(f, "⊥"),
            DecisionTree::Node {
                variable,
                when_false,
                when_true,
            } => write!(f, "({variable} ? {when_true} : {when_false})"),
        }
    }
}
