//! # vep.rs
//!
//! Batched lookup of RSIDs against the Ensembl VEP REST service.
//!
//! All identifiers go out in a single POST. Any failure of that request, whatever
//! the cause, is reported as a `FetchError` and turned into an "absent" entry for
//! every requested RSID by `fetch_annotations`. There is no retry.

use log::{info, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::annotation::AnnotationMap;
use crate::config::AnnotatorSettings;

/// Ways the batched request can fail. All of them share the same recovery.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or body read failure
    #[error("could not reach the annotation service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("annotation service returned HTTP {0}")]
    Status(StatusCode),

    /// The body is not a JSON array
    #[error("annotation response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a batched RSID lookup with the raw response entries.
pub trait AnnotationSource {
    fn post_ids(&self, rsids: &[String]) -> Result<Vec<Value>, FetchError>;
}

#[derive(Debug, Serialize)]
struct VepRequest<'a> {
    ids: &'a [String],
}

/// Blocking client for `POST /vep/{species}/id`.
#[derive(Debug)]
pub struct VepClient {
    client: Client,
    endpoint: String,
}

impl VepClient {
    pub fn new(settings: &AnnotatorSettings) -> Result<VepClient, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(VepClient {
            client,
            endpoint: settings.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnnotationSource for VepClient {
    fn post_ids(&self, rsids: &[String]) -> Result<Vec<Value>, FetchError> {
        info!(
            "Requesting annotation for {} identifiers from {}",
            rsids.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&VepRequest { ids: rsids })
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().map_err(FetchError::Transport)?;
        Ok(serde_json::from_str::<Vec<Value>>(&body)?)
    }
}

/// Looks up every RSID with one call to `source`.
///
/// On failure every requested RSID is mapped to absent; no partial results are kept.
pub fn fetch_annotations<S: AnnotationSource + ?Sized>(
    source: &S,
    rsids: &[String],
) -> AnnotationMap {
    match source.post_ids(rsids) {
        Ok(entries) => AnnotationMap::from_response(entries),
        Err(e) => {
            warn!("Annotation lookup failed, reporting all variants as not found: {}", e);
            AnnotationMap::all_absent(rsids)
        }
    }
}
