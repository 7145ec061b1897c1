//! Loader for the workspace `fixtures/` directory, shared by the
//! integration tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

pub struct Fixture;

impl Fixture {
    /// Absolute path of a file under the workspace `fixtures/` directory.
    pub fn path(path: impl AsRef<Path>) -> PathBuf {
        fixtures_root().join(path.as_ref())
    }

    /// Load a JSON fixture relative to `fixtures/`.
    #[allow(dead_code)]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
        let full = Self::path(path);
        let data = fs::read_to_string(&full)
            .with_context(|| format!("failed to read fixture {}", full.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid JSON in fixture {}", full.display()))
    }

    /// Load a text fixture relative to `fixtures/`.
    pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
        let full = Self::path(path);
        fs::read_to_string(&full)
            .with_context(|| format!("failed to read fixture {}", full.display()))
    }
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(|root| root.join("fixtures"))
        .unwrap_or_else(|| PathBuf::from("fixtures"))
}
