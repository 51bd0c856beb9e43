use proplogic::api::{self, NormalFormTarget};
use proplogic::errors::{FormulaError, SyntaxError};
use proplogic::formulas::Formula;
use proplogic::operations::predicates::classify;

#[test]
fn test_conjunction_scenario() {
    let response = api::validate("p ∧ q");
    assert!(response.valid);

    let table = api::truth_table("p ∧ q").unwrap();
    assert_eq!(table.headers, ["p", "q", "p ∧ q"]);
    assert_eq!(table.table.len(), 4);

    // row p=true, q=false is row index 2
    let row = &table.table[2];
    assert!(row["p"]);
    assert!(!row["q"]);
    assert!(!row["p ∧ q"]);
}

#[test]
fn test_implication_scenario() {
    let steps = api::transform("p → q", NormalFormTarget::Cnf).unwrap();
    assert_eq!(steps[1].description, "Eliminare →");
    assert_eq!(steps[1].formula, "¬p ∨ q");

    assert_eq!(api::check_normal_form("p → q").unwrap().type_name, "Nici FNC, nici FND");
    assert_eq!(api::check_normal_form("¬p ∨ q").unwrap().type_name, "FNC");

    let c = classify(&"¬p ∨ q".parse::<Formula>().unwrap());
    assert!(c.is_cnf());
    assert!(!c.is_dnf());
}

#[test]
fn test_equivalence_scenario() {
    let steps = api::transform("p ↔ q", NormalFormTarget::Cnf).unwrap();
    let formulas: Vec<&str> = steps.iter().map(|s| s.formula.as_str()).collect();
    assert_eq!(
        formulas,
        ["p ↔ q", "(p → q) ∧ (q → p)", "(¬p ∨ q) ∧ (q → p)", "(¬p ∨ q) ∧ (¬q ∨ p)"]
    );
    assert_eq!(api::check_normal_form("(¬p ∨ q) ∧ (¬q ∨ p)").unwrap().type_name, "FNC");
}

#[test]
fn test_de_morgan_scenario() {
    let steps = api::transform("¬(p ∧ q)", NormalFormTarget::Cnf).unwrap();
    assert_eq!(steps[1].description, "Legea lui De Morgan");
    assert_eq!(steps[1].formula, "¬p ∨ ¬q");
}

#[test]
fn test_subformulas_scenario() {
    let response = api::subformulas("¬p ∧ q").unwrap();
    assert_eq!(response.subformulas, ["p", "¬p", "q", "¬p ∧ q"]);
}

#[test]
fn test_unmatched_parenthesis_scenario() {
    let response = api::validate("(p ∧ q");
    assert!(!response.valid);
    assert_eq!(response.error.as_deref(), Some("unbalanced parentheses"));

    match "(p ∧ q".parse::<Formula>() {
        Err(FormulaError::Syntax(SyntaxError::UnbalancedParentheses)) => {}
        other => panic!("expected UnbalancedParentheses, got {other:?}"),
    }
}

#[test]
fn test_literal_checks_as_both_forms() {
    assert_eq!(api::check_normal_form("p").unwrap().type_name, "FNC și FND");
    assert_eq!(api::check_normal_form("¬p").unwrap().type_name, "FNC și FND");
}

#[test]
fn test_classify_endpoint() {
    assert_eq!(api::classify("p ∨ ¬p").unwrap().classification, "Tautologie");
    assert_eq!(api::classify("p ∧ ¬p").unwrap().classification, "Contradicție");
    assert_eq!(
        api::classify("p → q").unwrap().classification,
        "Nici tautologie, nici contradicție"
    );
}

#[test]
fn test_wire_shapes() {
    let json = serde_json::to_value(api::validate("p ∧ q")).unwrap();
    assert_eq!(json, serde_json::json!({ "valid": true, "formula": "p ∧ q" }));

    let json = serde_json::to_value(api::validate("p ∧")).unwrap();
    assert_eq!(json["valid"], false);
    assert!(json["error"].is_string());
    assert!(json.get("formula").is_none());

    let json = serde_json::to_value(api::truth_table("p ∧ q").unwrap()).unwrap();
    assert_eq!(json["headers"], serde_json::json!(["p", "q", "p ∧ q"]));
    assert_eq!(
        json["table"][2],
        serde_json::json!({ "p": true, "q": false, "p ∧ q": false })
    );

    let json = serde_json::to_value(api::check_normal_form("¬p ∨ q").unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "typeName": "FNC" }));

    let json = serde_json::to_value(api::transform("p → q", NormalFormTarget::Cnf).unwrap()).unwrap();
    assert_eq!(
        json[1],
        serde_json::json!({ "description": "Eliminare →", "formula": "¬p ∨ q" })
    );

    let json = serde_json::to_value(api::subformulas("¬p ∧ q").unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "subformulas": ["p", "¬p", "q", "¬p ∧ q"] }));
}
