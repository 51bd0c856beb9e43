use crate::errors::ValidationError;
use crate::formulas::Formula;

/// Ceiling on the number of distinct variables in a single formula. Bounds
/// truth-table enumeration at 2^20 rows; the failure is reported before any
/// enumeration starts.
pub const MAX_VARIABLES: usize = 20;

/// Checks that `formula` is within resource bounds and that every variable
/// name matches `[A-Za-z][A-Za-z0-9]*`.
///
/// The lexer never produces a name outside that charset, so the name check
/// only fires on ASTs constructed directly.
pub fn validate(formula: &Formula) -> Result<(), ValidationError> {
    let vars = formula.variables();
    for name in &vars {
        if !well_formed_name(name) {
            return Err(ValidationError::MalformedVariableName { name: name.clone() });
        }
    }
    if vars.len() > MAX_VARIABLES {
        return Err(ValidationError::TooManyVariables { count: vars.len(), limit: MAX_VARIABLES });
    }
    Ok(())
}

fn well_formed_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
