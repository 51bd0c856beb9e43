use std::fmt;

use super::Formula;

/// Binding strength of a formula's top-level connective. Higher binds
/// tighter: ¬ > ∧ > ∨ > → > ↔; atoms bind tightest of all.
fn precedence(formula: &Formula) -> u8 {
    match formula {
        Formula::Var(_) => 6,
        Formula::Not(_) => 5,
        Formula::And(_, _) => 4,
        Formula::Or(_, _) => 3,
        Formula::Implies(_, _) => 2,
        Formula::Iff(_, _) => 1,
    }
}

fn symbol(formula: &Formula) -> &'static str {
    match formula {
        Formula::And(_, _) => "∧",
        Formula::Or(_, _) => "∨",
        Formula::Implies(_, _) => "→",
        Formula::Iff(_, _) => "↔",
        Formula::Var(_) | Formula::Not(_) => unreachable!("no binary symbol"),
    }
}

/// Canonical printing. Parentheses are emitted only where re-parsing would
/// otherwise bind differently: a child is wrapped when it binds looser than
/// its parent, or equally loose on the non-associative side (∧ and ∨ are
/// printed left-associative, → and ↔ right-associative). The result
/// round-trips: parsing it yields a structurally equal formula.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Var(name) => f.write_str(name),
            Formula::Not(op) => {
                f.write_str("¬")?;
                if precedence(op) < precedence(self) {
                    write!(f, "({op})")
                } else {
                    write!(f, "{op}")
                }
            }
            Formula::And(l, r) | Formula::Or(l, r) => {
                write_child(f, l, precedence(self), false)?;
                write!(f, " {} ", symbol(self))?;
                write_child(f, r, precedence(self), true)
            }
            Formula::Implies(l, r) | Formula::Iff(l, r) => {
                write_child(f, l, precedence(self), true)?;
                write!(f, " {} ", symbol(self))?;
                write_child(f, r, precedence(self), false)
            }
        }
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Formula, parent_prec: u8, wrap_equal: bool) -> fmt::Result {
    let prec = precedence(child);
    if prec < parent_prec || (wrap_equal && prec == parent_prec) {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}
