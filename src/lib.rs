//! cardscan: heuristic contact extraction from business card OCR text.
//!
//! The extractor is a pure function from text to a seven-field
//! [`ContactRecord`]; unresolved fields hold [`NOT_FOUND`]. Reading cards,
//! settings and rendering live beside it for the CLI.

pub mod error;
pub mod input;
pub mod output;
pub mod parser;
pub mod record;
pub mod settings;

pub use error::{Error, Result};
pub use parser::{extract_contact, Extraction, Extractor, LineReport};
pub use record::{ContactRecord, Field, NOT_FOUND};
pub use settings::{OutputFormat, Settings};
