use crate::formulas::Formula;
use crate::operations::transformations::nnf::{eliminate_iff, eliminate_implies, push_negation};
use crate::operations::transformations::{apply_to_fixpoint, DerivationStep, INITIAL_STEP};

/// `(a ∧ b) ∨ c  →  (a ∨ c) ∧ (b ∨ c)`, and the symmetric form on the right
/// operand. The left operand is inspected first, keeping the step sequence
/// deterministic.
pub(super) fn distribute_or_over_and(formula: &Formula) -> Option<(&'static str, Formula)> {
    let Formula::Or(l, r) = formula else {
        return None;
    };
    if let Formula::And(a, b) = &**l {
        return Some((
            "Distributivitate",
            Formula::and(
                Formula::or((**a).clone(), (**r).clone()),
                Formula::or((**b).clone(), (**r).clone()),
            ),
        ));
    }
    if let Formula::And(a, b) = &**r {
        return Some((
            "Distributivitate",
            Formula::and(
                Formula::or((**l).clone(), (**a).clone()),
                Formula::or((**l).clone(), (**b).clone()),
            ),
        ));
    }
    None
}

/// Transforms `formula` into conjunctive normal form, recording every single
/// rewrite as a [`DerivationStep`].
///
/// The pipeline is fixed, each phase run to a fixpoint before the next:
/// ↔-elimination, →-elimination, negation pushing (De Morgan and double
/// negation, reaching NNF), then ∨-over-∧ distribution. The first step
/// carries the unmodified input, so the sequence always runs from the
/// original formula to the final CNF, and every adjacent pair of step
/// formulas is logically equivalent.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::transformations::to_cnf;
///
/// let formula: Formula = "p ↔ q".parse().unwrap();
/// let steps = to_cnf(&formula);
/// let printed: Vec<String> = steps.iter().map(|s| s.formula.to_string()).collect();
///
/// assert_eq!(
///     printed,
///     ["p ↔ q", "(p → q) ∧ (q → p)", "(¬p ∨ q) ∧ (q → p)", "(¬p ∨ q) ∧ (¬q ∨ p)"]
/// );
/// ```
pub fn to_cnf(formula: &Formula) -> Vec<DerivationStep> {
    let mut steps = vec![DerivationStep { description: INITIAL_STEP.to_string(), formula: formula.clone() }];
    let current = apply_to_fixpoint(&mut steps, formula.clone(), eliminate_iff);
    let current = apply_to_fixpoint(&mut steps, current, eliminate_implies);
    let current = apply_to_fixpoint(&mut steps, current, push_negation);
    apply_to_fixpoint(&mut steps, current, distribute_or_over_and);
    steps
}
