mod printer;
mod validation;

pub use validation::{validate, MAX_VARIABLES};

use indexmap::IndexSet;

/// A propositional-logic formula.
///
/// The variant set is closed and every traversal in this crate matches on it
/// exhaustively, so adding a connective is a compile-time event. Children are
/// owned exclusively by their parent: the tree is finite, acyclic, and two
/// structurally identical subtrees compare equal.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
///
/// let p = Formula::var("p");
/// let q = Formula::var("q");
/// let and = Formula::and(p.clone(), q);
///
/// assert_eq!(and.to_string(), "p ∧ q");
/// assert_eq!(and, "p ∧ q".parse().unwrap());
/// assert!(!and.is_literal());
/// assert!(Formula::not(p).is_literal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional variable. The name matches `[A-Za-z][A-Za-z0-9]*`.
    Var(String),
    /// Negation `¬a`.
    Not(Box<Formula>),
    /// Conjunction `a ∧ b`.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction `a ∨ b`.
    Or(Box<Formula>, Box<Formula>),
    /// Implication `a → b`.
    Implies(Box<Formula>, Box<Formula>),
    /// Equivalence `a ↔ b`.
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates a variable formula.
    pub fn var<S: Into<String>>(name: S) -> Self {
        Formula::Var(name.into())
    }

    /// Creates the negation of `operand`.
    pub fn not(operand: Formula) -> Self {
        Formula::Not(Box::new(operand))
    }

    /// Creates the conjunction of `left` and `right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// Creates the disjunction of `left` and `right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// Creates the implication from `left` to `right`.
    pub fn implication(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    /// Creates the equivalence of `left` and `right`.
    pub fn equivalence(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// Returns `true` if this formula is a literal, i.e. a variable or a
    /// negated variable.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Var(_) => true,
            Formula::Not(op) => matches!(**op, Formula::Var(_)),
            _ => false,
        }
    }

    /// Returns the distinct variable names of this formula in order of first
    /// syntactic appearance (left-to-right, depth-first).
    pub fn variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut IndexSet<String>) {
        match self {
            Formula::Var(name) => {
                vars.insert(name.clone());
            }
            Formula::Not(op) => op.collect_variables(vars),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }
}

impl std::str::FromStr for Formula {
    type Err = crate::errors::FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
