use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::lines::{Claim, Claims, Line};
use super::tags::Tag;

/// Trailing 1-4 capital letters, optionally followed by one short word: "AC mL", "XYZ".
static LOGO_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[A-Z]{1,4}(?:\s+[A-Za-z]{2,4})?$").unwrap());

const MIN_NAME_CHARS: usize = 4;

/// Post-processing applied to every name candidate before selection.
pub type NameCleaner = fn(&str) -> String;

/// Drop OCR debris that a printed logo mark leaves at the end of the name line.
pub fn strip_logo_marks(candidate: &str) -> String {
    LOGO_TAIL_RE.replace(candidate, "").trim().to_string()
}

pub fn keep_as_is(candidate: &str) -> String {
    candidate.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub job_title: Option<String>,
    pub name: Option<String>,
}

/// Job title first, then the name line sitting closest to it.
pub fn resolve(lines: &[Line], tags: &[Tag], claims: &mut Claims, clean: NameCleaner) -> Identity {
    let job_idx = lines
        .iter()
        .find(|l| tags[l.index] == Tag::Job && !claims.is_claimed(l.index))
        .map(|l| l.index);
    if let Some(idx) = job_idx {
        claims.claim(idx, Claim::JobTitle);
    }

    let candidates: Vec<(usize, String)> = lines
        .iter()
        .filter(|l| !claims.is_claimed(l.index))
        .filter(|l| matches!(tags[l.index], Tag::Identity | Tag::Generic))
        .filter(|l| l.char_len() >= MIN_NAME_CHARS)
        .map(|l| (l.index, clean(&l.text)))
        .filter(|(_, cleaned)| !cleaned.is_empty())
        .collect();

    let chosen = match job_idx {
        Some(anchor) => candidates
            .into_iter()
            .min_by_key(|(idx, _)| idx.abs_diff(anchor)),
        None => candidates.into_iter().next(),
    };
    if let Some((idx, _)) = &chosen {
        claims.claim(*idx, Claim::Name);
    }

    let identity = Identity {
        job_title: job_idx.map(|idx| lines[idx].text.clone()),
        name: chosen.map(|(_, name)| name),
    };
    debug!(
        job_line = ?job_idx,
        name = identity.name.as_deref().unwrap_or("-"),
        "identity resolved"
    );
    identity
}
