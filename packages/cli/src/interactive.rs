//! Interactive prompts for the generator.
//!
//! Provides a terminal-based UI using `dialoguer` that asks for the output
//! path, row count and an optional seed instead of requiring CLI flags.

use dialoguer::{Confirm, Input};
use employee_csv_cli_utils::MultiProgress;
use employee_csv_generate::GenerateConfig;
use employee_csv_generate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_ROW_COUNT};

use crate::run_generation;

/// Runs the interactive generation flow.
///
/// # Errors
///
/// Returns an error if user input is invalid or generation fails.
pub fn run(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let output_path: String = Input::new()
        .with_prompt("Output CSV path")
        .default(DEFAULT_OUTPUT_PATH.to_string())
        .interact_text()?;

    let rows_str: String = Input::new()
        .with_prompt("Number of rows")
        .default(DEFAULT_ROW_COUNT.to_string())
        .interact_text()?;
    let row_count = parse_row_count(&rows_str)?;

    let seed_str: String = Input::new()
        .with_prompt("Random seed (leave empty for random output)")
        .allow_empty(true)
        .interact_text()?;
    let seed = parse_seed(&seed_str)?;

    let config = GenerateConfig {
        output_path: output_path.trim().into(),
        row_count,
        seed,
    };

    if config.output_path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config.output_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            log::info!("Leaving {} untouched", config.output_path.display());
            return Ok(());
        }
    }

    run_generation(multi, &config)
}

fn parse_row_count(input: &str) -> Result<u64, String> {
    let input = input.trim();
    match input.replace('_', "").parse::<u64>() {
        Ok(0) => Err("Row count must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("Invalid row count '{input}': {e}")),
    }
}

fn parse_seed(input: &str) -> Result<Option<u64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|e| format!("Invalid seed '{input}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_count() {
        assert_eq!(parse_row_count("1000000"), Ok(1_000_000));
        assert_eq!(parse_row_count(" 1_000 "), Ok(1_000));
    }

    #[test]
    fn rejects_bad_row_count() {
        assert!(parse_row_count("0").is_err());
        assert!(parse_row_count("-5").is_err());
        assert!(parse_row_count("lots").is_err());
    }

    #[test]
    fn empty_seed_means_random() {
        assert_eq!(parse_seed(""), Ok(None));
        assert_eq!(parse_seed("   "), Ok(None));
    }

    #[test]
    fn parses_seed() {
        assert_eq!(parse_seed("42"), Ok(Some(42)));
        assert!(parse_seed("forty-two").is_err());
    }
}
