use crate::formulas::Formula;

/// NNF predicate. Indicates whether a formula is in negation normal form:
/// only `∧`, `∨` and literals, every `¬` directly on a variable.
pub fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Var(_) => true,
        Formula::Not(op) => matches!(**op, Formula::Var(_)),
        Formula::And(l, r) | Formula::Or(l, r) => is_nnf(l) && is_nnf(r),
        Formula::Implies(_, _) | Formula::Iff(_, _) => false,
    }
}
