use crate::formulas::Formula;

/// DNF predicate. Indicates whether a formula is in disjunctive normal form:
/// a disjunction (possibly of one element) of terms, each term a conjunction
/// (possibly of one element) of literals. The structural dual of
/// [`is_cnf`](super::is_cnf).
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::is_dnf;
///
/// let formula1: Formula = "p".parse().unwrap();
/// let formula2: Formula = "p ∨ ¬q ∨ q ∧ r".parse().unwrap();
/// let formula3: Formula = "p ∧ q ∧ r".parse().unwrap();
/// let formula4: Formula = "p ∨ ¬q → q ∧ r".parse().unwrap();
///
/// assert_eq!(is_dnf(&formula1), true);
/// assert_eq!(is_dnf(&formula2), true);
/// assert_eq!(is_dnf(&formula3), true);
/// assert_eq!(is_dnf(&formula4), false);
/// ```
pub fn is_dnf(formula: &Formula) -> bool {
    match formula {
        Formula::Or(l, r) => is_dnf(l) && is_dnf(r),
        _ => is_term(formula),
    }
}

/// A term (minterm): a conjunction of one or more literals.
fn is_term(formula: &Formula) -> bool {
    match formula {
        Formula::And(l, r) => is_term(l) && is_term(r),
        _ => formula.is_literal(),
    }
}

#[cfg(test)]
mod tests {
    use super::is_dnf;
    use crate::formulas::Formula;

    fn check(text: &str) -> bool {
        is_dnf(&text.parse::<Formula>().unwrap())
    }

    #[test]
    fn test_is_dnf() {
        assert!(check("p"));
        assert!(check("¬p"));
        assert!(check("p ∧ ¬q"));
        assert!(check("p ∨ q"));
        assert!(check("p ∧ q ∨ ¬p ∧ ¬q"));
        assert!(check("p ∧ q ∧ r ∨ s"));

        assert!(!check("¬(p ∨ q)"));
        assert!(!check("¬¬p"));
        assert!(!check("p → q"));
        assert!(!check("p ↔ q"));
        assert!(!check("(p ∨ q) ∧ r"));
        assert!(!check("p ∨ (q → r)"));
    }
}
