use indexmap::IndexMap;

use crate::errors::EvaluationError;
use crate::formulas::Formula;

/// A mapping from variable name to truth value. Evaluation requires a
/// binding for every variable of the formula.
pub type Assignment = IndexMap<String, bool>;

/// A complete truth table: the variable headers in order of first syntactic
/// appearance, the printed formula as the final header, and one ordered row
/// per assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Column names: the variables followed by the formula's printed form.
    pub headers: Vec<String>,
    /// Rows in canonical enumeration order; each row maps every header,
    /// including the formula column, to its value.
    pub rows: Vec<IndexMap<String, bool>>,
}

/// Evaluates `formula` under `assignment` with the standard two-valued
/// semantics: `a → b` as `¬a ∨ b` and `a ↔ b` as `(a ∧ b) ∨ (¬a ∧ ¬b)`.
///
/// Fails with [`EvaluationError`] if the assignment misses a variable of the
/// formula.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> Result<bool, EvaluationError> {
    match formula {
        Formula::Var(name) => assignment
            .get(name)
            .copied()
            .ok_or_else(|| EvaluationError { name: name.clone() }),
        Formula::Not(op) => Ok(!evaluate(op, assignment)?),
        Formula::And(l, r) => Ok(evaluate(l, assignment)? && evaluate(r, assignment)?),
        Formula::Or(l, r) => Ok(evaluate(l, assignment)? || evaluate(r, assignment)?),
        Formula::Implies(l, r) => Ok(!evaluate(l, assignment)? || evaluate(r, assignment)?),
        Formula::Iff(l, r) => {
            let (a, b) = (evaluate(l, assignment)?, evaluate(r, assignment)?);
            Ok((a && b) || (!a && !b))
        }
    }
}

/// Builds the full truth table of `formula` by enumerating all `2^n`
/// assignments of its `n` distinct variables.
///
/// Variables are columns in order of first syntactic appearance; the
/// first-appearing variable is the most significant bit of the row index,
/// with `true` = 1. Row 0 is therefore all-false and the last row all-true.
/// The printed formula is the final column of every row.
///
/// The caller is expected to have run [`crate::formulas::validate`] first;
/// the variable ceiling there keeps this enumeration bounded.
pub fn build_truth_table(formula: &Formula) -> Result<TruthTable, EvaluationError> {
    let variables: Vec<String> = formula.variables().into_iter().collect();
    let formula_column = formula.to_string();
    let n = variables.len();

    let mut headers = variables.clone();
    headers.push(formula_column.clone());

    let mut rows = Vec::with_capacity(1 << n);
    for k in 0..(1_usize << n) {
        let mut row: IndexMap<String, bool> = IndexMap::with_capacity(n + 1);
        for (i, name) in variables.iter().enumerate() {
            let value = k & (1 << (n - 1 - i)) != 0;
            row.insert(name.clone(), value);
        }
        let value = evaluate(formula, &row)?;
        row.insert(formula_column.clone(), value);
        rows.push(row);
    }

    Ok(TruthTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::{build_truth_table, evaluate, Assignment};
    use crate::errors::EvaluationError;
    use crate::formulas::Formula;

    fn assignment(bindings: &[(&str, bool)]) -> Assignment {
        bindings.iter().map(|&(n, v)| (n.to_string(), v)).collect()
    }

    #[test]
    fn test_connective_semantics() {
        let cases: &[(&str, bool, bool, bool)] = &[
            ("p ∧ q", false, false, false),
            ("p ∧ q", true, false, false),
            ("p ∧ q", true, true, true),
            ("p ∨ q", false, false, false),
            ("p ∨ q", true, false, true),
            ("p → q", true, false, false),
            ("p → q", false, false, true),
            ("p → q", false, true, true),
            ("p ↔ q", true, true, true),
            ("p ↔ q", false, false, true),
            ("p ↔ q", true, false, false),
        ];
        for &(text, p, q, expected) in cases {
            let formula: Formula = text.parse().unwrap();
            let a = assignment(&[("p", p), ("q", q)]);
            assert_eq!(evaluate(&formula, &a), Ok(expected), "{text} under p={p}, q={q}");
        }
    }

    #[test]
    fn test_missing_binding() {
        let formula: Formula = "p ∧ q".parse().unwrap();
        let a = assignment(&[("p", true)]);
        assert_eq!(evaluate(&formula, &a), Err(EvaluationError { name: "q".into() }));
    }

    #[test]
    fn test_table_dimensions() {
        let formula: Formula = "p ∧ q ∨ ¬r".parse().unwrap();
        let table = build_truth_table(&formula).unwrap();
        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows.len(), 8);
        for row in &table.rows {
            assert_eq!(row.len(), 4);
        }
    }

    #[test]
    fn test_canonical_row_order() {
        let formula: Formula = "p ∧ q".parse().unwrap();
        let table = build_truth_table(&formula).unwrap();
        assert_eq!(table.headers, ["p", "q", "p ∧ q"]);
        let expected = [
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ];
        for (row, &(p, q, value)) in table.rows.iter().zip(&expected) {
            assert_eq!(row["p"], p);
            assert_eq!(row["q"], q);
            assert_eq!(row["p ∧ q"], value);
        }
    }

    #[test]
    fn test_first_seen_variable_is_most_significant() {
        // q appears first, so it flips slowest
        let formula: Formula = "q ∨ p".parse().unwrap();
        let table = build_truth_table(&formula).unwrap();
        assert_eq!(table.headers, ["q", "p", "q ∨ p"]);
        let q_column: Vec<bool> = table.rows.iter().map(|r| r["q"]).collect();
        assert_eq!(q_column, [false, false, true, true]);
    }

    #[test]
    fn test_single_variable_table() {
        let formula = Formula::var("p");
        let table = build_truth_table(&formula).unwrap();
        assert_eq!(table.headers, ["p", "p"]);
        assert_eq!(table.rows.len(), 2);
    }
}
