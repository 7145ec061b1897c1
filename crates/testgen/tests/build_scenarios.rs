use std::path::{Path, PathBuf};

use pe_testgen::{
    Household, HouseholdType, OutputValue, TestCaseBuilder, TestgenError, load_document,
    map_person_ids,
};
use serde_json::{Number, json};

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(relative)
}

fn load(household: &str, outputs: &str) -> (Household, Vec<OutputValue>) {
    let household = load_document(&fixture(household)).expect("load household fixture");
    let outputs = load_document(&fixture(outputs)).expect("load outputs fixture");
    (household, outputs)
}

#[test]
fn single_adult_in_california() {
    let (household, outputs) = load("households/single_ca.json", "outputs/single_ca.json");
    let case = TestCaseBuilder::new()
        .build(&household, &outputs, None)
        .expect("build");

    assert_eq!(case.household_type, HouseholdType::Single);
    assert_eq!(case.name, "Tax unit for single household (2024)");
    assert_eq!(case.period, "2024");
    assert_eq!(case.absolute_error_margin, 0.01);
    assert_eq!(case.input.household.state_fips, 6);
    assert_eq!(case.output["household_net_income"].as_f64(), Some(42000.5));
    assert_eq!(
        case.input.tax_unit.use_tax_field.as_deref(),
        Some("ca_use_tax")
    );
    let person = &case.input.people["person1"];
    assert_eq!(person.age, Number::from(40));
    assert_eq!(person.employment_income, Number::from(50000));
}

#[test]
fn two_adults_in_texas() {
    let (household, outputs) = load("households/joint_tx.json", "outputs/joint_tx.json");
    let case = TestCaseBuilder::new()
        .build(&household, &outputs, None)
        .expect("build");

    assert_eq!(case.household_type, HouseholdType::Joint);
    assert_eq!(case.input.household.state_fips, 48);
    assert!(case.input.tax_unit.use_tax_field.is_none());
    // Income recorded only for another year does not leak into the period.
    assert_eq!(case.input.people["person2"].employment_income, Number::from(0));
}

#[test]
fn parent_and_child_in_pennsylvania() {
    let (household, outputs) = load("households/dependent_pa.json", "outputs/duplicates.json");
    let case = TestCaseBuilder::new()
        .build(&household, &outputs, None)
        .expect("build");

    assert_eq!(case.household_type, HouseholdType::Dependent);
    assert_eq!(case.period, "2025");
    assert_eq!(case.name, "Tax unit for dependent household (2025)");
    assert_eq!(
        case.input.tax_unit.use_tax_field.as_deref(),
        Some("pa_use_tax")
    );
    assert_eq!(case.input.household.state_fips, 42);
}

#[test]
fn member_lists_are_shared_across_units() {
    let (household, outputs) = load("households/joint_tx.json", "outputs/joint_tx.json");
    let case = TestCaseBuilder::new()
        .build(&household, &outputs, None)
        .expect("build");

    assert_eq!(case.input.tax_unit.members, vec!["person1", "person2"]);
    assert_eq!(case.input.tax_unit.members, case.input.spm_unit.members);
    assert_eq!(case.input.tax_unit.members, case.input.household.members);
}

#[test]
fn person_ids_cover_every_person_in_order() {
    let (household, _) = load("households/dependent_pa.json", "outputs/duplicates.json");
    let ids = map_person_ids(&household.people);
    assert_eq!(ids.len(), household.people.len());
    let assigned: Vec<_> = ids.iter().map(|(_, id)| id).collect();
    assert_eq!(assigned, vec!["person1", "person2"]);
    assert_eq!(ids.get("your first dependent"), Some("person2"));
}

#[test]
fn duplicate_outputs_keep_the_last_value() {
    let (household, outputs) = load("households/single_ca.json", "outputs/duplicates.json");
    let case = TestCaseBuilder::new()
        .build(&household, &outputs, None)
        .expect("build");

    let keys: Vec<_> = case.output.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["income_tax", "snap"]);
    assert_eq!(case.output["income_tax"].as_f64(), Some(250.75));
}

#[test]
fn unknown_state_resolves_to_zero() {
    let household: Household = serde_json::from_value(json!({
        "people": {"you": {"age": {"2024": 30}}},
        "tax_units": {"your tax unit": {"members": ["you"]}},
        "households": {"your household": {"state_name": {"2024": "ZZ"}}}
    }))
    .unwrap();
    let case = TestCaseBuilder::new()
        .build(&household, &[], None)
        .expect("unknown state is not an error");
    assert_eq!(case.input.household.state_fips, 0);
    assert!(case.input.tax_unit.use_tax_field.is_none());
    assert!(case.output.is_empty());
}

#[test]
fn outputs_with_non_numeric_values_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outputs.json");
    std::fs::write(
        &path,
        r#"[{"variable": "income_tax", "value": 1}, {"variable": "snap", "value": "abc"}]"#,
    )
    .unwrap();

    let err = load_document::<Vec<OutputValue>>(&path).unwrap_err();
    assert!(matches!(err, TestgenError::Parse { .. }), "{err}");
    assert!(err.to_string().contains("outputs.json"), "{err}");
}
