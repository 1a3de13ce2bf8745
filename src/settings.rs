//! Settings: built-in defaults, then `cardscan.toml`, then `CARDSCAN_*` env vars.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::{identity, Extractor};

pub const DEFAULT_CONFIG_FILE: &str = "cardscan.toml";
const ENV_PREFIX: &str = "CARDSCAN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per card per line
    #[default]
    Json,
    /// Indented JSON array
    Pretty,
    /// Field/value table per card
    Table,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub format: OutputFormat,
    /// Strip trailing logo fragments ("AC mL") from name candidates.
    pub strip_logo_marks: bool,
    /// Progress bar on stderr for multi-card runs.
    pub progress: bool,
    /// Extensions picked up when a directory is given as input.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: OutputFormat::Json,
            strip_logo_marks: true,
            progress: true,
            extensions: vec!["txt".to_string()],
        }
    }
}

impl Settings {
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extensions"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn extractor(&self) -> Extractor {
        let extractor = Extractor::new();
        if self.strip_logo_marks {
            extractor
        } else {
            extractor.with_name_cleaner(identity::keep_as_is)
        }
    }
}
