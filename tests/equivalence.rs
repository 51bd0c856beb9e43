use proplogic::formulas::Formula;
use proplogic::operations::functions::{evaluate, Assignment};
use proplogic::operations::predicates::{is_cnf, is_dnf, is_nnf};
use proplogic::operations::transformations::{to_cnf, to_dnf};
use proplogic::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};

fn randomizer() -> FormulaRandomizer {
    FormulaRandomizer::new(FormulaRandomizerConfig::default_with_num_vars(4, 3).seed(1234))
}

/// True if `f1` and `f2` agree under every assignment of their shared
/// variable set.
fn equivalent(f1: &Formula, f2: &Formula) -> bool {
    let mut variables = f1.variables();
    variables.extend(f2.variables());
    let variables: Vec<String> = variables.into_iter().collect();
    let n = variables.len();
    for k in 0..(1_usize << n) {
        let assignment: Assignment = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), k & (1 << (n - 1 - i)) != 0))
            .collect();
        if evaluate(f1, &assignment).unwrap() != evaluate(f2, &assignment).unwrap() {
            return false;
        }
    }
    true
}

#[test]
fn test_random_round_trip() {
    let mut randomizer = randomizer();
    for _ in 0..200 {
        let formula = randomizer.formula();
        let reparsed: Formula = formula.to_string().parse().unwrap();
        assert_eq!(reparsed, formula, "round-trip of {formula}");
    }
}

#[test]
fn test_truth_table_size() {
    let mut randomizer = randomizer();
    for _ in 0..50 {
        let formula = randomizer.formula();
        let table = proplogic::operations::functions::build_truth_table(&formula).unwrap();
        let k = formula.variables().len();
        assert_eq!(table.rows.len(), 1 << k);
        assert_eq!(table.headers.len(), k + 1);
    }
}

#[test]
fn test_cnf_steps_are_pairwise_equivalent() {
    let mut randomizer = randomizer();
    for _ in 0..50 {
        let formula = randomizer.formula();
        let steps = to_cnf(&formula);
        assert_eq!(steps[0].formula, formula);
        for pair in steps.windows(2) {
            assert!(
                equivalent(&pair[0].formula, &pair[1].formula),
                "{} not equivalent to {} ({})",
                pair[0].formula,
                pair[1].formula,
                pair[1].description,
            );
        }
        let last = &steps.last().unwrap().formula;
        assert!(is_cnf(last), "{last} is not CNF");
    }
}

#[test]
fn test_dnf_steps_are_pairwise_equivalent() {
    let mut randomizer = randomizer();
    for _ in 0..50 {
        let formula = randomizer.formula();
        let steps = to_dnf(&formula);
        for pair in steps.windows(2) {
            assert!(equivalent(&pair[0].formula, &pair[1].formula));
        }
        let last = &steps.last().unwrap().formula;
        assert!(is_dnf(last), "{last} is not DNF");
    }
}

#[test]
fn test_step_formulas_round_trip_as_text() {
    // every printed step re-parses to the recorded tree
    let mut randomizer = randomizer();
    for _ in 0..20 {
        let formula = randomizer.formula();
        for step in to_cnf(&formula) {
            let reparsed: Formula = step.formula.to_string().parse().unwrap();
            assert_eq!(reparsed, step.formula);
        }
    }
}

#[test]
fn test_transformation_passes_through_nnf() {
    // once negation pushing is done, everything after it stays in NNF
    let mut randomizer = randomizer();
    for _ in 0..50 {
        let formula = randomizer.formula();
        let steps = to_cnf(&formula);
        let mut seen_distribution = false;
        for step in &steps {
            if step.description == "Distributivitate" {
                seen_distribution = true;
            }
            if seen_distribution {
                assert!(is_nnf(&step.formula));
            }
        }
    }
}

#[test]
fn test_classification_is_idempotent_on_cnf_results() {
    let mut randomizer = randomizer();
    for _ in 0..50 {
        let formula = randomizer.formula();
        let last = to_cnf(&formula).last().unwrap().formula.clone();
        assert!(proplogic::operations::predicates::classify(&last).is_cnf());
    }
}
