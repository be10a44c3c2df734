//! # report.rs
//!
//! Tab-separated report writer. One row per requested RSID, in input order, with
//! `N/A` in every column the annotation service did not provide.

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

use crate::annotation::{AnnotationMap, AnnotationRecord, field_text};

/// Written in place of any value the service did not return.
pub const NOT_AVAILABLE: &str = "N/A";

pub const REPORT_HEADER: [&str; 5] = ["RSID", "Start", "End", "Most Severe Consequence", "Genes"];

/// MARK: ReportRow
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow {
    pub rsid: String,
    pub start: String,
    pub end: String,
    pub most_severe_consequence: String,
    pub genes: String,
}

impl ReportRow {
    pub fn not_found(rsid: &str) -> ReportRow {
        ReportRow {
            rsid: rsid.to_string(),
            start: NOT_AVAILABLE.to_string(),
            end: NOT_AVAILABLE.to_string(),
            most_severe_consequence: NOT_AVAILABLE.to_string(),
            genes: NOT_AVAILABLE.to_string(),
        }
    }

    /// Each missing field falls back to `N/A` on its own.
    pub fn from_record(rsid: &str, record: &AnnotationRecord) -> ReportRow {
        let genes = record.gene_symbols();
        ReportRow {
            rsid: rsid.to_string(),
            start: or_not_available(record.start.as_ref()),
            end: or_not_available(record.end.as_ref()),
            most_severe_consequence: or_not_available(record.most_severe_consequence.as_ref()),
            genes: if genes.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                genes.join(", ")
            },
        }
    }

    pub fn build(rsid: &str, annotations: &AnnotationMap) -> ReportRow {
        match annotations.get(rsid) {
            Some(record) => ReportRow::from_record(rsid, record),
            None => ReportRow::not_found(rsid),
        }
    }
}

fn or_not_available(value: Option<&Value>) -> String {
    field_text(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Writes the header and one row per RSID to `wtr`. Returns the number of data rows.
pub fn write_report<W: Write>(
    wtr: W,
    rsids: &[String],
    annotations: &AnnotationMap,
) -> csv::Result<usize> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(wtr);

    writer.write_record(REPORT_HEADER)?;
    for rsid in rsids {
        writer.serialize(ReportRow::build(rsid, annotations))?;
    }
    writer.flush()?;
    Ok(rsids.len())
}

pub fn write_report_file(
    path: &Path,
    rsids: &[String],
    annotations: &AnnotationMap,
) -> csv::Result<usize> {
    let file = std::fs::File::create(path)?;
    write_report(file, rsids, annotations)
}
