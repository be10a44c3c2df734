//! # annotation.rs
//!
//! Data structures for the VEP annotation records returned by the remote service,
//! and the lookup table that maps each RSID to the record used in the report.
//! It includes:
//! - `AnnotationRecord`: one variant as returned by the service.
//! - `TranscriptConsequence`: the per-transcript sub-record (only the gene symbol is used).
//! - `AnnotationMap`: RSID to record, with an explicit absent marker.

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// MARK: AnnotationRecord
/// One variant entry of the VEP response. Only `id` is required; the other fields are
/// kept as the service sent them so a single odd value never hides the rest of the record.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct AnnotationRecord {
    pub id: String,
    pub start: Option<Value>,
    pub end: Option<Value>,
    pub most_severe_consequence: Option<Value>,
    #[serde(default, deserialize_with = "lenient_consequences")]
    pub transcript_consequences: Vec<TranscriptConsequence>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct TranscriptConsequence {
    pub gene_symbol: Option<String>,
}

/// `null` or a non-array counts as no consequences; a non-string `gene_symbol` as no symbol.
fn lenient_consequences<'de, D>(deserializer: D) -> Result<Vec<TranscriptConsequence>, D::Error>
where
    D: Deserializer<'de>,
{
    let consequences = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| TranscriptConsequence {
                gene_symbol: item
                    .get("gene_symbol")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(consequences)
}

/// Report text for a raw field: strings unquoted, other JSON values as written, `null` as missing.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl AnnotationRecord {
    /// Distinct gene symbols across all transcript consequences, sorted ascending.
    ///
    /// Consequences without a `gene_symbol` are ignored, so a record without any
    /// symbol yields an empty list.
    pub fn gene_symbols(&self) -> Vec<String> {
        self.transcript_consequences
            .iter()
            .filter_map(|tc| tc.gene_symbol.as_deref())
            .sorted_unstable()
            .dedup()
            .map(str::to_string)
            .collect()
    }
}

/// MARK: AnnotationMap
/// RSID to annotation lookup. `None` marks an RSID that was requested but has no data.
#[derive(Debug, Default, Clone)]
pub struct AnnotationMap {
    records: HashMap<String, Option<AnnotationRecord>>,
}

impl AnnotationMap {
    /// Every requested RSID explicitly marked as absent.
    pub fn all_absent(rsids: &[String]) -> AnnotationMap {
        let records = rsids.iter().map(|rsid| (rsid.clone(), None)).collect();
        AnnotationMap { records }
    }

    /// Builds the lookup from the raw response array.
    ///
    /// Entries are visited in response order and only the first record seen for an
    /// RSID is kept. Entries that are not a record with an `id` are skipped.
    pub fn from_response(entries: Vec<Value>) -> AnnotationMap {
        let mut annotations = AnnotationMap::default();
        for entry in entries {
            match serde_json::from_value::<AnnotationRecord>(entry) {
                Ok(record) => {
                    annotations.insert_if_absent(record);
                }
                Err(e) => debug!("Skipping response entry without usable id: {}", e),
            }
        }
        annotations
    }

    /// Returns `true` if the record was stored, `false` if the RSID already had one.
    pub fn insert_if_absent(&mut self, record: AnnotationRecord) -> bool {
        match self.records.entry(record.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(Some(record));
                true
            }
            Entry::Occupied(slot) => {
                debug!("Duplicate record for {} in response, keeping the first", slot.key());
                false
            }
        }
    }

    /// The record for `rsid`, or `None` if it is missing or marked absent.
    pub fn get(&self, rsid: &str) -> Option<&AnnotationRecord> {
        self.records.get(rsid).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, rsid: &str) -> bool {
        self.records.contains_key(rsid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
