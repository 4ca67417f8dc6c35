#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the employee CSV generator.
//!
//! Running without a subcommand starts an interactive prompt. Logging goes
//! through [`employee_csv_cli_utils::init_logger`] so log lines and the
//! progress bar never fight for the terminal; set `RUST_LOG=info` to see
//! them.

mod interactive;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use employee_csv_cli_utils::{IndicatifProgress, MultiProgress};
use employee_csv_generate::{GenerateConfig, PartialConfig, config};

#[derive(Parser)]
#[command(name = "employee_csv", about = "Synthetic employee CSV generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CSV file of synthetic employee records
    Generate {
        /// TOML file with `output_path`, `row_count` and/or `seed`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Destination CSV file (default: data/large.csv). The parent
        /// directory must already exist.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Number of data rows to generate (default: 1,000,000)
        #[arg(long)]
        rows: Option<u64>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    Defaults,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = employee_csv_cli_utils::init_logger();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run(&multi);
    };

    match command {
        Commands::Generate {
            config: config_file,
            output,
            rows,
            seed,
        } => {
            let config = config::resolve(
                config_file.as_deref(),
                PartialConfig {
                    output_path: output,
                    row_count: rows,
                    seed,
                },
            )?;
            run_generation(&multi, &config)?;
        }
        Commands::Defaults => {
            print!("{}", GenerateConfig::default().to_toml()?);
        }
    }

    Ok(())
}

/// Runs one generation with a progress bar and prints the confirmation.
fn run_generation(
    multi: &MultiProgress,
    config: &GenerateConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let progress = IndicatifProgress::records_bar(multi, "Generating employee records");
    let summary = employee_csv_generate::generate(config, Some(progress))?;

    println!(
        "CSV file generated successfully: {} ({} rows)",
        summary.path.display(),
        summary.rows
    );

    Ok(())
}
