//! Turns a household description plus computed policy outputs into a YAML
//! test case for the microsimulation engine's test runner.

pub mod builder;
pub mod error;
pub mod household;
pub mod ids;
pub mod jurisdiction;
pub mod render;
pub mod test_case;

pub use builder::{ClassificationYear, TestCaseBuilder, classify_household};
pub use error::{Result, TestgenError};
pub use household::{Household, OutputValue, load_document};
pub use ids::{IdMap, map_person_ids};
pub use render::{FixtureWriter, render};
pub use test_case::{HouseholdType, TestCase};
