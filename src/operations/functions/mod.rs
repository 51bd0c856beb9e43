mod semantic_class;
mod sub_nodes;
mod truth_table;

pub use semantic_class::{semantic_class, SemanticClass};
pub use sub_nodes::sub_nodes;
pub use truth_table::{build_truth_table, evaluate, Assignment, TruthTable};
