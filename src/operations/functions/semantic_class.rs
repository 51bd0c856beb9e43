use crate::errors::EvaluationError;
use crate::formulas::Formula;
use crate::operations::functions::build_truth_table;

/// Semantic classification of a formula over all of its assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticClass {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// True under some assignments and false under others.
    Contingent,
}

impl SemanticClass {
    /// The label the front end displays for this class.
    pub fn label(self) -> &'static str {
        match self {
            SemanticClass::Tautology => "Tautologie",
            SemanticClass::Contradiction => "Contradicție",
            SemanticClass::Contingent => "Nici tautologie, nici contradicție",
        }
    }
}

/// Decides whether `formula` is a tautology, a contradiction, or contingent
/// by inspecting the formula column of its truth table.
pub fn semantic_class(formula: &Formula) -> Result<SemanticClass, EvaluationError> {
    let table = build_truth_table(formula)?;
    let column = table.headers.last().cloned().unwrap_or_default();
    let mut all_true = true;
    let mut all_false = true;
    for row in &table.rows {
        if row[&column] {
            all_false = false;
        } else {
            all_true = false;
        }
    }
    Ok(if all_true {
        SemanticClass::Tautology
    } else if all_false {
        SemanticClass::Contradiction
    } else {
        SemanticClass::Contingent
    })
}
