use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

pub mod annotation;
pub mod config;
pub mod io;
pub mod log_utils;
pub mod report;
pub mod vep;

use crate::config::{AnnotatorSettings, InputConfig};
use crate::vep::{AnnotationSource, VepClient};

pub fn run(config: InputConfig) -> Result<usize> {
    let settings = AnnotatorSettings::load()
        .context("Failed to load annotator settings")?
        .with_overrides(&config);
    debug!("Settings: {:?}", settings);

    let client = VepClient::new(&settings).context("Failed to build HTTP client")?;

    annotate_file(&config.input_file, &config.output_file, &client)
}

/// Reads the RSIDs, looks them up in one batch and writes the report.
///
/// Returns the number of report rows. Only the lookup itself is allowed to fail
/// silently; input and output errors are returned.
pub fn annotate_file<S: AnnotationSource + ?Sized>(
    input_file: &Path,
    output_file: &Path,
    source: &S,
) -> Result<usize> {
    let rsids = io::read_rsids(input_file)
        .with_context(|| format!("Failed to read RSIDs from {}", input_file.display()))?;
    info!("Read {} identifiers from {}", rsids.len(), input_file.display());

    let annotations = vep::fetch_annotations(source, &rsids);
    debug!("{} identifiers in annotation lookup", annotations.len());

    let rows = report::write_report_file(output_file, &rsids, &annotations)
        .with_context(|| format!("Failed to write report to {}", output_file.display()))?;
    info!("Wrote {} rows to {}", rows, output_file.display());

    Ok(rows)
}
