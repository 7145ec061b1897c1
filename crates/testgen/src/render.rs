//! YAML rendering and writing of generated fixtures.
//!
//! Fixtures live in version control, so the output must diff cleanly: keys
//! stay in construction order, person lists are written inline and nothing
//! is ever shared through anchors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TestgenError};
use crate::test_case::TestCase;

pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Render a test case as the one-element sequence the engine's runner loads.
pub fn render(test_case: &TestCase) -> Result<String> {
    serde_yaml_bw::to_string(&[test_case]).map_err(TestgenError::Render)
}

pub fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.iter().any(|y| ext.eq_ignore_ascii_case(y)))
}

/// Resolves fixture names to paths and writes rendered documents.
#[derive(Debug, Clone)]
pub struct FixtureWriter {
    dir: Option<PathBuf>,
    default_extension: String,
}

impl Default for FixtureWriter {
    fn default() -> Self {
        Self {
            dir: None,
            default_extension: DEFAULT_EXTENSION.into(),
        }
    }
}

impl FixtureWriter {
    pub fn new(dir: Option<PathBuf>, default_extension: impl Into<String>) -> Self {
        Self {
            dir,
            default_extension: default_extension.into(),
        }
    }

    /// Append the default extension when missing and place relative names
    /// under the configured directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(file_name);
        if !has_yaml_extension(&path) {
            let ext = self.default_extension.trim_start_matches('.');
            path = PathBuf::from(format!("{file_name}.{ext}"));
        }
        match &self.dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    pub fn write(&self, file_name: &str, text: &str) -> Result<PathBuf> {
        let path = self.resolve(file_name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TestgenError::Write {
                source,
                path: parent.to_path_buf(),
            })?;
        }
        fs::write(&path, text).map_err(|source| TestgenError::Write {
            source,
            path: path.clone(),
        })?;
        debug!(path = %path.display(), bytes = text.len(), "fixture written");
        Ok(path)
    }
}
