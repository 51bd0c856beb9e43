use crate::formulas::Formula;

/// `a ↔ b  →  (a → b) ∧ (b → a)`
pub(super) fn eliminate_iff(formula: &Formula) -> Option<(&'static str, Formula)> {
    match formula {
        Formula::Iff(l, r) => Some((
            "Eliminare ↔",
            Formula::and(
                Formula::implication((**l).clone(), (**r).clone()),
                Formula::implication((**r).clone(), (**l).clone()),
            ),
        )),
        _ => None,
    }
}

/// `a → b  →  ¬a ∨ b`
pub(super) fn eliminate_implies(formula: &Formula) -> Option<(&'static str, Formula)> {
    match formula {
        Formula::Implies(l, r) => Some((
            "Eliminare →",
            Formula::or(Formula::not((**l).clone()), (**r).clone()),
        )),
        _ => None,
    }
}

/// Pushes one negation inward: `¬¬a → a`, `¬(a ∧ b) → ¬a ∨ ¬b`,
/// `¬(a ∨ b) → ¬a ∧ ¬b`. Applied to a fixpoint after the eliminations, this
/// leaves every `¬` directly on a variable (negation normal form).
pub(super) fn push_negation(formula: &Formula) -> Option<(&'static str, Formula)> {
    let Formula::Not(op) = formula else {
        return None;
    };
    match &**op {
        Formula::Not(inner) => Some(("Eliminarea dublei negații", (**inner).clone())),
        Formula::And(l, r) => Some((
            "Legea lui De Morgan",
            Formula::or(Formula::not((**l).clone()), Formula::not((**r).clone())),
        )),
        Formula::Or(l, r) => Some((
            "Legea lui De Morgan",
            Formula::and(Formula::not((**l).clone()), Formula::not((**r).clone())),
        )),
        _ => None,
    }
}
