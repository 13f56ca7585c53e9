/*!
The abstract elements of the library: expressions, formulas, assignments, and decision trees.

Each structure is immutable once built.
The pipeline stages ([rewrite](crate::rewrite), [transcription](crate::transcription), [analysis](crate::analysis)) produce fresh values rather than mutate in place, and ownership is tree-shaped throughout.
*/

pub mod assignment;
pub mod expression;
pub mod formula;
pub mod tree;
pub mod variable;
