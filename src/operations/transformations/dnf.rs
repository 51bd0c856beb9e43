use crate::formulas::Formula;
use crate::operations::transformations::nnf::{eliminate_iff, eliminate_implies, push_negation};
use crate::operations::transformations::{apply_to_fixpoint, DerivationStep, INITIAL_STEP};

/// `(a ∨ b) ∧ c  →  (a ∧ c) ∨ (b ∧ c)`, and the symmetric form on the right
/// operand. The dual of the CNF distribution rule.
pub(super) fn distribute_and_over_or(formula: &Formula) -> Option<(&'static str, Formula)> {
    let Formula::And(l, r) = formula else {
        return None;
    };
    if let Formula::Or(a, b) = &**l {
        return Some((
            "Distributivitate",
            Formula::or(
                Formula::and((**a).clone(), (**r).clone()),
                Formula::and((**b).clone(), (**r).clone()),
            ),
        ));
    }
    if let Formula::Or(a, b) = &**r {
        return Some((
            "Distributivitate",
            Formula::or(
                Formula::and((**l).clone(), (**a).clone()),
                Formula::and((**l).clone(), (**b).clone()),
            ),
        ));
    }
    None
}

/// Transforms `formula` into disjunctive normal form, recording every single
/// rewrite as a [`DerivationStep`]. The pipeline mirrors
/// [`to_cnf`](super::to_cnf), distributing ∧ over ∨ in the final phase.
pub fn to_dnf(formula: &Formula) -> Vec<DerivationStep> {
    let mut steps = vec![DerivationStep { description: INITIAL_STEP.to_string(), formula: formula.clone() }];
    let current = apply_to_fixpoint(&mut steps, formula.clone(), eliminate_iff);
    let current = apply_to_fixpoint(&mut steps, current, eliminate_implies);
    let current = apply_to_fixpoint(&mut steps, current, push_negation);
    apply_to_fixpoint(&mut steps, current, distribute_and_over_or);
    steps
}
