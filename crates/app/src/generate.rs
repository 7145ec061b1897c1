use std::path::PathBuf;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use pe_testgen::{Household, OutputValue, TestCase, load_document, render};
use tracing::info;

use crate::config::AppConfig;

/// One conversion: a household and its computed outputs into one fixture.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub household: Utf8PathBuf,
    /// Without an outputs document the fixture's `output` is left empty.
    pub variables: Option<Utf8PathBuf>,
    pub name: Option<String>,
}

pub fn build_test_case(request: &GenerateRequest, config: &AppConfig) -> Result<TestCase> {
    let household: Household = load_document(request.household.as_std_path())
        .with_context(|| format!("failed to load household from {}", request.household))?;

    let outputs: Vec<OutputValue> = match &request.variables {
        Some(path) => load_document(path.as_std_path())
            .with_context(|| format!("failed to load outputs from {path}"))?,
        None => Vec::new(),
    };

    let case = config
        .builder()
        .build(&household, &outputs, request.name.as_deref())
        .with_context(|| format!("failed to build test case from {}", request.household))?;

    info!(
        name = %case.name,
        period = %case.period,
        people = case.input.people.len(),
        outputs = case.output.len(),
        "test case built"
    );
    Ok(case)
}

pub fn render_request(request: &GenerateRequest, config: &AppConfig) -> Result<String> {
    let case = build_test_case(request, config)?;
    render(&case).context("failed to render test case")
}

/// Render the fixture and write it under `output`, returning the final path.
pub fn generate(request: &GenerateRequest, output: &str, config: &AppConfig) -> Result<PathBuf> {
    let text = render_request(request, config)?;
    let path = config
        .writer()
        .write(output, &text)
        .context("failed to write test case")?;
    info!(path = %path.display(), "fixture written");
    Ok(path)
}
