use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Number;

use crate::error::{Result, TestgenError};

/// Period used when the household carries no `state_name` years at all.
pub const FALLBACK_PERIOD: &str = "0";

/// Numeric variable values keyed by year, in document order. `null` marks a
/// year the engine left uncomputed.
pub type YearMap = IndexMap<String, Option<Number>>;

/// Household document as exported by the engine's web app.
///
/// Only the fields the test case needs are modelled; anything else in the
/// document (other variables, `spm_units`, `families`, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Household {
    pub people: IndexMap<String, Person>,
    pub tax_units: IndexMap<String, TaxUnit>,
    pub households: IndexMap<String, HouseholdUnit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub age: YearMap,
    #[serde(default)]
    pub employment_income: YearMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxUnit {
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseholdUnit {
    #[serde(default)]
    pub state_name: IndexMap<String, Option<String>>,
}

/// One `{variable, value}` pair of the computed outputs document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputValue {
    pub variable: String,
    pub value: Number,
}

impl Household {
    /// The first year recorded under the household's `state_name`.
    pub fn period(&self) -> String {
        self.households
            .values()
            .next()
            .and_then(|unit| unit.state_name.keys().next())
            .cloned()
            .unwrap_or_else(|| FALLBACK_PERIOD.to_string())
    }

    pub fn primary_household(&self) -> Result<(&str, &HouseholdUnit)> {
        self.households
            .iter()
            .next()
            .map(|(key, unit)| (key.as_str(), unit))
            .ok_or_else(|| TestgenError::MissingField("households.<household>".into()))
    }

    pub fn primary_tax_unit(&self) -> Result<(&str, &TaxUnit)> {
        self.tax_units
            .iter()
            .next()
            .map(|(key, unit)| (key.as_str(), unit))
            .ok_or_else(|| TestgenError::MissingField("tax_units.<tax unit>".into()))
    }

    /// Two-letter state code at `period`, as written in the document.
    pub fn state_code(&self, period: &str) -> Result<&str> {
        let (key, unit) = self.primary_household()?;
        unit.state_name
            .get(period)
            .and_then(Option::as_deref)
            .ok_or_else(|| TestgenError::MissingField(format!("households.{key}.state_name.{period}")))
    }
}

impl Person {
    pub fn age_at(&self, year: &str) -> Number {
        value_at(&self.age, year)
    }

    pub fn employment_income_at(&self, year: &str) -> Number {
        value_at(&self.employment_income, year)
    }

    /// Numeric age at `year`, if one is recorded.
    pub fn numeric_age(&self, year: &str) -> Option<f64> {
        self.age.get(year).and_then(Option::as_ref).and_then(Number::as_f64)
    }
}

// Absent and null both read as zero; other years are never consulted.
fn value_at(values: &YearMap, year: &str) -> Number {
    values
        .get(year)
        .cloned()
        .flatten()
        .unwrap_or_else(|| Number::from(0))
}

/// Read a JSON document, or a YAML one when the file says so by extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| TestgenError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    if crate::render::has_yaml_extension(path) {
        serde_yaml_bw::from_str(&data).map_err(|source| TestgenError::ParseYaml {
            source,
            path: path.to_path_buf(),
        })
    } else {
        serde_json::from_str(&data).map_err(|source| TestgenError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }
}
