/// Functions computing values from formulas.
pub mod functions;
/// Structural predicates on formulas.
pub mod predicates;
/// Step-recording normal-form transformations.
pub mod transformations;
