#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for generating large CSV files of synthetic employee records.
//!
//! A run truncates the output file, writes the header row, then synthesizes
//! and serializes one record per ID from 1 to the configured row count.
//! Records are written as they are produced, so memory use is constant
//! regardless of row count.
//!
//! Output is reproducible when a seed is configured; see
//! [`synth::rng_for`].

pub mod config;
pub mod progress;
pub mod synth;
pub mod writer;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

pub use config::{ConfigError, GenerateConfig, PartialConfig};

use crate::progress::ProgressCallback;
use crate::writer::RecordWriter;

/// Number of rows between progress updates.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Errors that can occur while generating a CSV file.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Creating, writing or flushing the output file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the output file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A record could not be serialized as CSV.
    #[error("Failed to serialize record for {path}: {message}")]
    Serialize {
        /// Path of the output file.
        path: String,
        /// Description of the serialization failure.
        message: String,
    },

    /// The requested row count is not positive.
    #[error("Invalid row count {0}: must be at least 1")]
    InvalidRowCount(u64),
}

impl GenerateError {
    fn from_csv(path: &Path, source: csv::Error) -> Self {
        let path = path.display().to_string();
        match source.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io { path, source },
            kind => Self::Serialize {
                path,
                message: format!("{kind:?}"),
            },
        }
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Number of data rows written (excluding the header).
    pub rows: u64,
}

/// Generates the CSV file described by `config`.
///
/// The file is created or truncated, then receives one header row followed
/// by `config.row_count` data rows with IDs `1..=row_count`. The file is
/// flushed before returning; on error it is closed and left as written so
/// far.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidRowCount`] if `config.row_count` is zero,
/// and [`GenerateError::Io`] if the file cannot be created or written (for
/// example when its parent directory does not exist).
pub fn generate(
    config: &GenerateConfig,
    progress: Option<Arc<dyn ProgressCallback>>,
) -> Result<GenerateSummary, GenerateError> {
    if config.row_count == 0 {
        return Err(GenerateError::InvalidRowCount(config.row_count));
    }

    let progress = progress.unwrap_or_else(progress::null_progress);
    let path = &config.output_path;

    match config.seed {
        Some(seed) => log::info!(
            "Generating {} rows to {} (seed {seed})",
            config.row_count,
            path.display()
        ),
        None => log::info!("Generating {} rows to {}", config.row_count, path.display()),
    }

    let result = File::create(path)
        .map_err(|source| GenerateError::Io {
            path: path.display().to_string(),
            source,
        })
        .and_then(|file| {
            let mut rng = synth::rng_for(config.seed);
            write_records(
                BufWriter::new(file),
                config.row_count,
                &mut rng,
                progress.as_ref(),
            )
            .map_err(|e| GenerateError::from_csv(path, e))
        });

    let rows = match result {
        Ok(rows) => rows,
        Err(e) => {
            progress.finish_and_clear();
            return Err(e);
        }
    };

    progress.finish(format!("Wrote {rows} rows to {}", path.display()));
    log::info!("CSV file generated successfully: {}", path.display());

    Ok(GenerateSummary {
        path: path.clone(),
        rows,
    })
}

/// Writes the header and `row_count` synthesized records to `out`.
///
/// Returns the number of data rows written. `out` is flushed before
/// returning.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_records<W: Write, R: Rng + ?Sized>(
    out: W,
    row_count: u64,
    rng: &mut R,
    progress: &dyn ProgressCallback,
) -> Result<u64, csv::Error> {
    progress.set_total(row_count);

    let mut writer = RecordWriter::new(out);
    writer.write_header()?;

    for id in 1..=row_count {
        let record = synth::synthesize(id, rng);
        writer.write_record(&record)?;

        if id % PROGRESS_INTERVAL == 0 {
            progress.inc(PROGRESS_INTERVAL);
            log::trace!("Wrote {id}/{row_count} rows");
        }
    }

    progress.inc(row_count % PROGRESS_INTERVAL);

    let rows = writer.rows();
    writer.finish()?;

    Ok(rows)
}
