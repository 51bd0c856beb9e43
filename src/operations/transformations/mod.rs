mod cnf;
mod dnf;
mod nnf;

pub use cnf::to_cnf;
pub use dnf::to_dnf;

use log::trace;

use crate::formulas::Formula;

/// One recorded rewrite: the name of the rule applied and the full formula
/// after that single application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationStep {
    /// Name of the rewrite rule, e.g. "Legea lui De Morgan".
    pub description: String,
    /// The whole formula after the rewrite.
    pub formula: Formula,
}

/// Description of the opening step that carries the unmodified input.
pub(crate) const INITIAL_STEP: &str = "Formulă inițială";

/// A rewrite rule: matches a subtree and returns its name and replacement,
/// or `None` if the pattern does not apply at this node.
pub(crate) type Rule = fn(&Formula) -> Option<(&'static str, Formula)>;

/// Applies `rule` exactly once, at the leftmost-outermost position where it
/// matches: the root is tried before the children, and the left child before
/// the right. Returns the rule name and the rewritten whole formula.
fn rewrite_once(formula: &Formula, rule: Rule) -> Option<(&'static str, Formula)> {
    if let Some(applied) = rule(formula) {
        return Some(applied);
    }
    match formula {
        Formula::Var(_) => None,
        Formula::Not(op) => rewrite_once(op, rule).map(|(name, op)| (name, Formula::not(op))),
        Formula::And(l, r) => rewrite_once_binary(l, r, rule, Formula::and),
        Formula::Or(l, r) => rewrite_once_binary(l, r, rule, Formula::or),
        Formula::Implies(l, r) => rewrite_once_binary(l, r, rule, Formula::implication),
        Formula::Iff(l, r) => rewrite_once_binary(l, r, rule, Formula::equivalence),
    }
}

fn rewrite_once_binary(
    left: &Formula,
    right: &Formula,
    rule: Rule,
    rebuild: fn(Formula, Formula) -> Formula,
) -> Option<(&'static str, Formula)> {
    if let Some((name, l)) = rewrite_once(left, rule) {
        return Some((name, rebuild(l, right.clone())));
    }
    rewrite_once(right, rule).map(|(name, r)| (name, rebuild(left.clone(), r)))
}

/// Runs one phase of the pipeline: applies `rule` again and again until it no
/// longer matches anywhere, pushing one [`DerivationStep`] per application.
/// An explicit loop with a no-match termination check, so the step count per
/// phase stays bounded by the rule's own measure.
pub(crate) fn apply_to_fixpoint(steps: &mut Vec<DerivationStep>, mut current: Formula, rule: Rule) -> Formula {
    while let Some((name, next)) = rewrite_once(&current, rule) {
        trace!("{name}: {next}");
        steps.push(DerivationStep { description: name.to_string(), formula: next.clone() });
        current = next;
    }
    current
}
