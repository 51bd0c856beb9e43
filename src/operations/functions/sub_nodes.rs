use indexmap::IndexSet;

use crate::formulas::Formula;

/// Computes all sub-formulas of `formula`, deduplicated by structural
/// equality.
///
/// The order is post-order, bottom-up: a sub-formula only appears once all of
/// its own sub-formulas are already listed, so atomic variables come first
/// and the formula itself is always the last element. Printing each element
/// yields a string that re-parses to a structurally equal formula.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::operations::functions::sub_nodes;
///
/// let formula = "¬p ∧ q".parse().unwrap();
/// let subs: Vec<String> = sub_nodes(&formula).iter().map(ToString::to_string).collect();
///
/// assert_eq!(subs, ["p", "¬p", "q", "¬p ∧ q"]);
/// ```
pub fn sub_nodes(formula: &Formula) -> Vec<Formula> {
    let mut seen = IndexSet::new();
    collect(formula, &mut seen);
    seen.into_iter().collect()
}

fn collect(formula: &Formula, seen: &mut IndexSet<Formula>) {
    if seen.contains(formula) {
        return;
    }
    match formula {
        Formula::Var(_) => {}
        Formula::Not(op) => collect(op, seen),
        Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
            collect(l, seen);
            collect(r, seen);
        }
    }
    seen.insert(formula.clone());
}
