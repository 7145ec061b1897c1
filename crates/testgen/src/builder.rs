use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::household::{Household, OutputValue};
use crate::ids::map_person_ids;
use crate::jurisdiction::{requires_use_tax, state_fips};
use crate::test_case::{
    HouseholdInput, HouseholdType, PersonInput, SpmUnitInput, TaxUnitInput, TestCase, TestInput,
};

pub const DEFAULT_ABSOLUTE_ERROR_MARGIN: f64 = 0.01;

/// Age assumed for people without a numeric age in the classification year.
const ASSUMED_ADULT_AGE: f64 = 18.0;

/// Year whose ages decide whether a two-person household has a dependent.
///
/// `Period` reads the household's own year. `Fixed("2023")` matches fixtures
/// that were classified against 2023 ages whatever their period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassificationYear {
    #[default]
    Period,
    Fixed(String),
}

#[derive(Debug, Clone)]
pub struct TestCaseBuilder {
    absolute_error_margin: f64,
    classification_year: ClassificationYear,
}

impl Default for TestCaseBuilder {
    fn default() -> Self {
        Self {
            absolute_error_margin: DEFAULT_ABSOLUTE_ERROR_MARGIN,
            classification_year: ClassificationYear::Period,
        }
    }
}

impl TestCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_absolute_error_margin(mut self, margin: f64) -> Self {
        self.absolute_error_margin = margin;
        self
    }

    pub fn with_classification_year(mut self, year: ClassificationYear) -> Self {
        self.classification_year = year;
        self
    }

    /// Build the test case for `household`, expecting `outputs` as results.
    ///
    /// Fails if the household has no state for its period or a tax unit
    /// member is not one of its people. Nothing is written on failure.
    pub fn build(
        &self,
        household: &Household,
        outputs: &[OutputValue],
        name: Option<&str>,
    ) -> Result<TestCase> {
        let period = household.period();
        let state_code = household.state_code(&period)?;
        let state = state_code.to_lowercase();

        let classification_year = match &self.classification_year {
            ClassificationYear::Period => period.as_str(),
            ClassificationYear::Fixed(year) => year.as_str(),
        };
        let household_type = classify_household(household, classification_year);

        let ids = map_person_ids(&household.people);
        let (_, tax_unit) = household.primary_tax_unit()?;
        let members = tax_unit
            .members
            .iter()
            .map(|member| ids.translate(member))
            .collect::<Result<Vec<_>>>()?;

        let mut people = IndexMap::with_capacity(household.people.len());
        for (key, person) in &household.people {
            people.insert(
                ids.translate(key)?,
                PersonInput {
                    age: person.age_at(&period),
                    employment_income: person.employment_income_at(&period),
                },
            );
        }

        let fips = state_fips(state_code);
        if fips == 0 {
            debug!(state = state_code, "unknown state code; using FIPS 0");
        }

        let use_tax_field = requires_use_tax(&state).then(|| format!("{state}_use_tax"));

        let mut output = IndexMap::with_capacity(outputs.len());
        for item in outputs {
            output.insert(item.variable.clone(), item.value.clone());
        }

        let name = name
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Tax unit for {household_type} household ({period})"));

        debug!(
            %period,
            state = %state,
            %household_type,
            people = people.len(),
            outputs = output.len(),
            "test case built"
        );

        Ok(TestCase {
            name,
            household_type,
            absolute_error_margin: self.absolute_error_margin,
            period,
            input: TestInput {
                people,
                tax_unit: TaxUnitInput {
                    members: members.clone(),
                    use_tax_field,
                },
                spm_unit: SpmUnitInput {
                    members: members.clone(),
                },
                household: HouseholdInput {
                    members,
                    state_fips: fips,
                },
            },
            output,
        })
    }
}

/// `single` for one person, `joint` for two adults, `dependent` otherwise.
pub fn classify_household(household: &Household, year: &str) -> HouseholdType {
    let people = &household.people;
    let has_dependents = people
        .values()
        .any(|person| person.numeric_age(year).unwrap_or(ASSUMED_ADULT_AGE) < ASSUMED_ADULT_AGE);

    match people.len() {
        1 => HouseholdType::Single,
        2 if !has_dependents => HouseholdType::Joint,
        _ => HouseholdType::Dependent,
    }
}
