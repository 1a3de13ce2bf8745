use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Source label used for text read from standard input.
pub const STDIN_SOURCE: &str = "-";

/// Raw OCR text of one card and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub source: String,
    pub text: String,
}

/// Expand the command-line inputs into card files. Directories contribute
/// their direct children with a matching extension, sorted by name; files are
/// taken as given. `-` is passed through for stdin.
pub fn collect_paths(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.as_os_str() == STDIN_SOURCE || !input.is_dir() {
            paths.push(input.clone());
            continue;
        }

        let entries = std::fs::read_dir(input).map_err(|e| Error::io(input, e))?;
        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && has_extension(p, extensions))
            .collect();
        if found.is_empty() {
            return Err(Error::NoInput {
                path: input.clone(),
                extensions: extensions.to_vec(),
            });
        }
        found.sort();
        debug!(dir = %input.display(), files = found.len(), "collected card files");
        paths.extend(found);
    }
    Ok(paths)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Invalid UTF-8 is replaced rather than rejected; OCR output is often dirty.
pub fn read_card(path: &Path) -> Result<CardText> {
    if path.as_os_str() == STDIN_SOURCE {
        return read_stdin();
    }
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(CardText {
        source: path.display().to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

pub fn read_stdin() -> Result<CardText> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(STDIN_SOURCE, e))?;
    Ok(CardText {
        source: STDIN_SOURCE.to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
