//! Request-scoped operations mirroring the front end's endpoints.
//!
//! Every operation takes the raw formula text, parses and validates it, and
//! returns a serializable response. Failures come back as error values and
//! never cross this boundary as panics; [`validate`] goes one step further
//! and folds even its failures into the response body, which is what the
//! validation form displays.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::errors::FormulaError;
use crate::formulas::{self, Formula};
use crate::operations::functions::{build_truth_table, semantic_class, sub_nodes};
use crate::operations::predicates;
use crate::operations::transformations::{to_cnf, to_dnf, DerivationStep};
use crate::parser;

/// Which normal form a [`transform`] request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalFormTarget {
    /// Conjunctive normal form.
    Cnf,
    /// Disjunctive normal form.
    Dnf,
}

/// Response of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateResponse {
    /// Whether the text parsed and validated.
    pub valid: bool,
    /// Canonical printed form of the formula, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Failure message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of [`truth_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTableResponse {
    /// Column names: variables in first-appearance order, then the formula.
    pub headers: Vec<String>,
    /// One entry per assignment, in canonical enumeration order.
    pub table: Vec<IndexMap<String, bool>>,
}

/// Response of [`subformulas`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubformulasResponse {
    /// Printed subformulas, post-order, deduplicated, the formula last.
    pub subformulas: Vec<String>,
}

/// One derivation step of a [`transform`] response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResponse {
    /// Name of the applied rule.
    pub description: String,
    /// Printed formula after the rewrite.
    pub formula: String,
}

/// Response of [`check_normal_form`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    /// "FNC", "FND", "FNC și FND", or "Nici FNC, nici FND".
    #[serde(rename = "typeName")]
    pub type_name: String,
}

/// Response of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifyResponse {
    /// "Tautologie", "Contradicție", or "Nici tautologie, nici contradicție".
    pub classification: String,
}

fn parse_and_validate(text: &str) -> Result<Formula, FormulaError> {
    let formula = parser::parse(text)?;
    formulas::validate(&formula)?;
    Ok(formula)
}

/// Checks whether `text` is a well-formed formula within resource bounds.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::api::validate;
///
/// assert!(validate("p ∧ q").valid);
/// assert!(!validate("p ∧∧ q").valid);
/// assert!(!validate("(p ∧ q").valid);
/// ```
pub fn validate(text: &str) -> ValidateResponse {
    debug!("validate: {text}");
    match parse_and_validate(text) {
        Ok(formula) => ValidateResponse { valid: true, formula: Some(formula.to_string()), error: None },
        Err(e) => ValidateResponse { valid: false, formula: None, error: Some(e.to_string()) },
    }
}

/// Builds the full truth table of `text`.
pub fn truth_table(text: &str) -> Result<TruthTableResponse, FormulaError> {
    debug!("truth-table: {text}");
    let formula = parse_and_validate(text)?;
    let table = build_truth_table(&formula)?;
    Ok(TruthTableResponse { headers: table.headers, table: table.rows })
}

/// Extracts the deduplicated subformulas of `text` in post-order.
pub fn subformulas(text: &str) -> Result<SubformulasResponse, FormulaError> {
    debug!("subformulas: {text}");
    let formula = parse_and_validate(text)?;
    let subformulas = sub_nodes(&formula).iter().map(ToString::to_string).collect();
    Ok(SubformulasResponse { subformulas })
}

/// Transforms `text` step by step into the targeted normal form.
pub fn transform(text: &str, target: NormalFormTarget) -> Result<Vec<StepResponse>, FormulaError> {
    debug!("transform to {target:?}: {text}");
    let formula = parse_and_validate(text)?;
    let steps = match target {
        NormalFormTarget::Cnf => to_cnf(&formula),
        NormalFormTarget::Dnf => to_dnf(&formula),
    };
    Ok(steps.into_iter().map(step_response).collect())
}

fn step_response(step: DerivationStep) -> StepResponse {
    StepResponse { description: step.description, formula: step.formula.to_string() }
}

/// Reports which normal form `text` already is in, without rewriting it.
pub fn check_normal_form(text: &str) -> Result<CheckResponse, FormulaError> {
    debug!("check normal form: {text}");
    let formula = parse_and_validate(text)?;
    Ok(CheckResponse { type_name: predicates::classify(&formula).type_name().to_string() })
}

/// Reports whether `text` is a tautology, a contradiction, or contingent.
pub fn classify(text: &str) -> Result<ClassifyResponse, FormulaError> {
    debug!("classify: {text}");
    let formula = parse_and_validate(text)?;
    let class = semantic_class(&formula)?;
    Ok(ClassifyResponse { classification: class.label().to_string() })
}
