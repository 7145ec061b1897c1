use std::process::ExitCode;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use policyengine_tests_generator::config::load_config;
use policyengine_tests_generator::generate::{GenerateRequest, generate, render_request};

#[derive(Parser, Debug)]
#[command(
    name = "policyengine-tests-generator",
    version,
    about = "Generate YAML test cases for PolicyEngine"
)]
struct Cli {
    /// Input JSON file containing household data
    #[arg(long, value_name = "PATH")]
    household: Utf8PathBuf,
    /// Input JSON file containing variables output data
    #[arg(long, value_name = "PATH")]
    variables: Option<Utf8PathBuf>,
    /// Output YAML file name
    #[arg(long, value_name = "FILE", required_unless_present = "stdout")]
    output: Option<String>,
    /// Test case name
    #[arg(long)]
    name: Option<String>,
    /// Path to the configuration file (defaults to config/testgen.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,
    /// Print the rendered YAML instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let request = GenerateRequest {
        household: cli.household,
        variables: cli.variables,
        name: cli.name,
    };

    match cli.output {
        Some(output) if !cli.stdout => {
            generate(&request, &output, &config)?;
            println!("Successfully generated YAML file: {output}");
        }
        _ => print!("{}", render_request(&request, &config)?),
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
