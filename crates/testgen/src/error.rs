use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestgenError {
    #[error("failed to read {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("failed to parse {path}: {source}")]
    ParseYaml {
        source: serde_yaml_bw::Error,
        path: PathBuf,
    },
    #[error("failed to render test case: {0}")]
    Render(#[source] serde_yaml_bw::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("tax unit member `{0}` is not listed under people")]
    MissingMember(String),
}

pub type Result<T, E = TestgenError> = std::result::Result<T, E>;
