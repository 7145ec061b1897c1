use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Number;
use serde_yaml_bw::FlowSeq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdType {
    Single,
    Joint,
    Dependent,
}

impl fmt::Display for HouseholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HouseholdType::Single => "single",
            HouseholdType::Joint => "joint",
            HouseholdType::Dependent => "dependent",
        })
    }
}

/// One engine test case: a single household, tax unit and SPM unit cluster.
///
/// Serializes in the key order the engine's fixtures use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    pub name: String,
    #[serde(skip)]
    pub household_type: HouseholdType,
    pub absolute_error_margin: f64,
    pub period: String,
    pub input: TestInput,
    pub output: IndexMap<String, Number>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestInput {
    pub people: IndexMap<String, PersonInput>,
    pub tax_unit: TaxUnitInput,
    pub spm_unit: SpmUnitInput,
    pub household: HouseholdInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonInput {
    pub age: Number,
    pub employment_income: Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxUnitInput {
    pub members: Vec<String>,
    /// `<state>_use_tax` for states that require it.
    pub use_tax_field: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpmUnitInput {
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdInput {
    #[serde(serialize_with = "flow_members")]
    pub members: Vec<String>,
    pub state_fips: u32,
}

const TAX_UNIT_PLACEHOLDERS: &[&str] = &[
    "tax_unit_childcare_expenses",
    "premium_tax_credit",
    "local_income_tax",
    "state_sales_tax",
];
const SPM_UNIT_PLACEHOLDERS: &[&str] = &["snap", "tanf"];
const PERSON_PLACEHOLDERS: &[&str] = &["ssi", "state_supplement", "wic"];

impl Serialize for TestInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("people", &self.people)?;
        map.serialize_entry("tax_units", &BTreeMap::from([("tax_unit", &self.tax_unit)]))?;
        map.serialize_entry("spm_units", &BTreeMap::from([("spm_unit", &self.spm_unit)]))?;
        map.serialize_entry(
            "households",
            &BTreeMap::from([("household", &self.household)]),
        )?;
        map.end()
    }
}

impl Serialize for PersonInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + PERSON_PLACEHOLDERS.len()))?;
        map.serialize_entry("age", &self.age)?;
        map.serialize_entry("employment_income", &self.employment_income)?;
        zeroes(&mut map, PERSON_PLACEHOLDERS)?;
        map.end()
    }
}

impl Serialize for TaxUnitInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("members", &FlowSeq(&self.members))?;
        zeroes(&mut map, TAX_UNIT_PLACEHOLDERS)?;
        if let Some(field) = &self.use_tax_field {
            map.serialize_entry(field, &0)?;
        }
        map.end()
    }
}

impl Serialize for SpmUnitInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + SPM_UNIT_PLACEHOLDERS.len()))?;
        map.serialize_entry("members", &FlowSeq(&self.members))?;
        zeroes(&mut map, SPM_UNIT_PLACEHOLDERS)?;
        map.end()
    }
}

// Person lists are written inline: `[person1, person2]`.
fn flow_members<S: Serializer>(members: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    FlowSeq(members).serialize(serializer)
}

fn zeroes<M: SerializeMap>(map: &mut M, keys: &[&str]) -> Result<(), M::Error> {
    for key in keys {
        map.serialize_entry(key, &0)?;
    }
    Ok(())
}
