//! # config.rs
//!
//! Command-line arguments and service settings for the annotation run.
//! It includes:
//! - `InputConfig`: parses the two positional paths and the optional overrides.
//! - `AnnotatorSettings`: VEP server settings loaded from the embedded TOML defaults,
//!   then the environment, then the command line.

use clap::{CommandFactory, Parser};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

use crate::log_utils::LogLevel;

/// Configuration parsed from CLI input arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rsid-annotator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Annotate a list of RSIDs with position, most severe consequence and genes from the Ensembl VEP REST API."
)]
pub struct InputConfig {
    /// Text file with one RSID per line (may be gzip compressed, *.gz)
    pub input_file: PathBuf,
    /// Tab-separated report to write
    pub output_file: PathBuf,
    /// Base URL of the REST server, e.g. https://grch37.rest.ensembl.org
    #[arg(long)]
    pub server: Option<String>,
    /// Species path segment of the VEP endpoint
    #[arg(long)]
    pub species: Option<String>,
    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
    #[arg(short = 'l', long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl InputConfig {
    ///
    /// Parses command-line arguments into an `InputConfig` structure.
    ///
    /// # Errors
    /// Returns the clap error when the arguments are malformed, including a wrong
    /// number of positional paths.
    pub fn build() -> Result<InputConfig, clap::Error> {
        InputConfig::try_parse()
    }

    pub fn usage() -> String {
        InputConfig::command().render_usage().to_string()
    }
}

///
/// Embedded default settings, overridable through the environment.
pub const DEFAULT_CONFIG_STR: &str = include_str!("../data/annotator_config.toml");

/// Prefix of the environment overrides, e.g. `RSID_ANNOTATOR_VEP__SERVER`.
pub const ENV_PREFIX: &str = "RSID_ANNOTATOR";

#[derive(Debug, Deserialize)]
struct SettingsFile {
    vep: AnnotatorSettings,
}

/// Where and how to reach the VEP service.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnnotatorSettings {
    pub server: String,
    pub species: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AnnotatorSettings {
    /// Loads the embedded defaults and applies environment overrides.
    ///
    /// # Errors
    /// Returns an error if an override has the wrong type.
    pub fn load() -> Result<AnnotatorSettings, ConfigError> {
        let settings: SettingsFile = Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG_STR,
                config::FileFormat::Toml,
            ))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings.vep)
    }

    /// Applies the command-line options on top of the loaded settings.
    pub fn with_overrides(mut self, input_config: &InputConfig) -> AnnotatorSettings {
        if let Some(server) = &input_config.server {
            self.server = server.clone();
        }
        if let Some(species) = &input_config.species {
            self.species = species.clone();
        }
        if input_config.timeout_secs.is_some() {
            self.timeout_secs = input_config.timeout_secs;
        }
        self
    }

    /// `{server}/vep/{species}/id`
    pub fn endpoint(&self) -> String {
        format!("{}/vep/{}/id", self.server.trim_end_matches('/'), self.species)
    }
}
