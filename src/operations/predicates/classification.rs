use crate::formulas::Formula;
use crate::operations::predicates::{is_cnf, is_dnf};

/// The normal-form category reported for a formula.
///
/// The structural predicates [`is_cnf`] and [`is_dnf`] overlap on flat
/// formulas (a disjunction of literals satisfies both); the reported
/// category resolves that overlap the way the original checker did: CNF is
/// tested first and wins, and only a lone literal is reported as both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalFormKind {
    /// Conjunctive normal form.
    Cnf,
    /// Disjunctive normal form.
    Dnf,
    /// A single literal, which satisfies both definitions.
    Both,
    /// Neither normal form.
    Neither,
}

/// Result of classifying a formula against the two normal forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The resolved category.
    pub kind: NormalFormKind,
}

impl Classification {
    /// Whether the reported category counts as CNF.
    pub fn is_cnf(self) -> bool {
        matches!(self.kind, NormalFormKind::Cnf | NormalFormKind::Both)
    }

    /// Whether the reported category counts as DNF.
    pub fn is_dnf(self) -> bool {
        matches!(self.kind, NormalFormKind::Dnf | NormalFormKind::Both)
    }

    /// The human-readable type name displayed by the front end.
    pub fn type_name(self) -> &'static str {
        match self.kind {
            NormalFormKind::Cnf => "FNC",
            NormalFormKind::Dnf => "FND",
            NormalFormKind::Both => "FNC și FND",
            NormalFormKind::Neither => "Nici FNC, nici FND",
        }
    }
}

/// Classifies `formula` structurally. Pure inspection: nothing is rewritten.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::operations::predicates::classify;
///
/// let formula: Formula = "¬p ∨ q".parse().unwrap();
/// assert_eq!(classify(&formula).type_name(), "FNC");
///
/// let formula: Formula = "p → q".parse().unwrap();
/// assert_eq!(classify(&formula).type_name(), "Nici FNC, nici FND");
/// ```
pub fn classify(formula: &Formula) -> Classification {
    let kind = if formula.is_literal() {
        NormalFormKind::Both
    } else if is_cnf(formula) {
        NormalFormKind::Cnf
    } else if is_dnf(formula) {
        NormalFormKind::Dnf
    } else {
        NormalFormKind::Neither
    };
    Classification { kind }
}
