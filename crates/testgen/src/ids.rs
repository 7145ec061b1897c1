use indexmap::IndexMap;

use crate::error::{Result, TestgenError};

/// Prefix of every anonymized person identifier.
pub const PERSON_PREFIX: &str = "person";

/// Source person key -> anonymized `personN` identifier, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    ids: IndexMap<String, String>,
}

/// Number people `person1..personN` in the iteration order of `people`.
pub fn map_person_ids<V>(people: &IndexMap<String, V>) -> IdMap {
    let ids = people
        .keys()
        .enumerate()
        .map(|(i, key)| (key.clone(), format!("{PERSON_PREFIX}{}", i + 1)))
        .collect();
    IdMap { ids }
}

impl IdMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.ids.get(key).map(String::as_str)
    }

    pub fn translate(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_owned)
            .ok_or_else(|| TestgenError::MissingMember(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
