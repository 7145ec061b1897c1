use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use once_cell::sync::Lazy;
use pe_testgen::builder::DEFAULT_ABSOLUTE_ERROR_MARGIN;
use pe_testgen::render::DEFAULT_EXTENSION;
use pe_testgen::{ClassificationYear, FixtureWriter, TestCaseBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const APP_NAME: &str = "policyengine-tests-generator";
pub const ENV_PREFIX: &str = "PE_TESTGEN_";

/// Looked up relative to the working directory.
const LOCAL_CONFIG_PATH: &str = "config/testgen.toml";

static DEFAULT_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub test_case: TestCaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that relative output names are placed under.
    #[serde(default)]
    pub dir: Option<Utf8PathBuf>,
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            default_extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseConfig {
    #[serde(default = "default_margin")]
    pub absolute_error_margin: f64,
    /// `period` (or unset) to classify by the household's own year, or a
    /// fixed year such as `2023`.
    #[serde(default)]
    pub classification_year: Option<YearSetting>,
}

impl Default for TestCaseConfig {
    fn default() -> Self {
        Self {
            absolute_error_margin: default_margin(),
            classification_year: None,
        }
    }
}

fn default_margin() -> f64 {
    DEFAULT_ABSOLUTE_ERROR_MARGIN
}

/// TOML and env values may spell a year as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearSetting {
    Number(u32),
    Text(String),
}

impl YearSetting {
    fn to_classification_year(&self) -> ClassificationYear {
        match self {
            YearSetting::Number(year) => ClassificationYear::Fixed(year.to_string()),
            YearSetting::Text(text) if text.eq_ignore_ascii_case("period") => {
                ClassificationYear::Period
            }
            YearSetting::Text(text) => ClassificationYear::Fixed(text.clone()),
        }
    }
}

impl AppConfig {
    pub fn classification_year(&self) -> ClassificationYear {
        self.test_case
            .classification_year
            .as_ref()
            .map(YearSetting::to_classification_year)
            .unwrap_or_default()
    }

    pub fn builder(&self) -> TestCaseBuilder {
        TestCaseBuilder::new()
            .with_absolute_error_margin(self.test_case.absolute_error_margin)
            .with_classification_year(self.classification_year())
    }

    pub fn writer(&self) -> FixtureWriter {
        FixtureWriter::new(
            self.output.dir.clone().map(Utf8PathBuf::into_std_path_buf),
            self.output.default_extension.clone(),
        )
    }
}

/// Defaults < config file < `PE_TESTGEN_*` environment variables.
pub fn load_config(explicit_path: Option<&Utf8Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(DEFAULT_CONFIG.clone()));

    if let Some(path) = explicit_path {
        if !path.exists() {
            bail!("config file {path} does not exist");
        }
        figment = figment.merge(Toml::file(path));
    } else if let Some(path) = resolve_default_config_path() {
        debug!(%path, "using config file");
        figment = figment.merge(Toml::file(path));
    } else {
        debug!("no config file found; relying on defaults + env overrides");
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("failed to load policyengine-tests-generator configuration")
}

fn resolve_default_config_path() -> Option<Utf8PathBuf> {
    let local = Utf8PathBuf::from(LOCAL_CONFIG_PATH);
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = ProjectDirs::from("org", "PolicyEngine", APP_NAME)
        && let Ok(path) = Utf8PathBuf::from_path_buf(dirs.config_dir().join("config.toml"))
        && path.exists()
    {
        return Some(path);
    }

    None
}
