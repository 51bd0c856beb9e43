use crate::formulas::Formula;

/// CNF predicate. Indicates whether a formula is in conjunctive normal form:
/// a conjunction (possibly of one element) of clauses, each clause a
/// disjunction (possibly of one element) of literals.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_cnf;
///
/// let formula1: Formula = "p".parse().unwrap();
/// let formula2: Formula = "p ∧ ¬q ∧ (q ∨ r)".parse().unwrap();
/// let formula3: Formula = "p ∨ q ∨ r".parse().unwrap();
/// let formula4: Formula = "p ∧ ¬q → q ∨ r".parse().unwrap();
///
/// assert_eq!(is_cnf(&formula1), true);
/// assert_eq!(is_cnf(&formula2), true);
/// assert_eq!(is_cnf(&formula3), true);
/// assert_eq!(is_cnf(&formula4), false);
/// ```
pub fn is_cnf(formula: &Formula) -> bool {
    match formula {
        Formula::And(l, r) => is_cnf(l) && is_cnf(r),
        _ => is_clause(formula),
    }
}

/// A clause: a disjunction of one or more literals.
fn is_clause(formula: &Formula) -> bool {
    match formula {
        Formula::Or(l, r) => is_clause(l) && is_clause(r),
        _ => formula.is_literal(),
    }
}
