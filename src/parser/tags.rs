use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use super::lines::{Claims, Line};
use super::vocab::{ADDRESS_KEYWORDS, COMPANY_SUFFIXES, JOB_KEYWORDS, REGIONS};

static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| word_list_re(COMPANY_SUFFIXES));
static POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5,6}\b").unwrap());
static UK_POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[A-Z]{1,2}\d[A-Z\d]? \d[A-Z]{2}\b").unwrap());
static JOB_TERMS: LazyLock<Vec<String>> = LazyLock::new(|| lowercased(JOB_KEYWORDS.iter()));
static ADDRESS_TERMS: LazyLock<Vec<String>> =
    LazyLock::new(|| lowercased(ADDRESS_KEYWORDS.iter().chain(REGIONS)));

fn lowercased<'a>(terms: impl Iterator<Item = &'a &'a str>) -> Vec<String> {
    terms.map(|t| t.to_lowercase()).collect()
}

/// `(?i)\b(?:a|b|c)\b`
fn word_list_re(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

fn contains_any(line: &str, terms: &[String]) -> bool {
    let lower = line.to_lowercase();
    terms.iter().any(|t| lower.contains(t.as_str()))
}

/// Role a line plays on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Already claimed by an anchor before tagging.
    Used,
    Company,
    Job,
    Address,
    Identity,
    Generic,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tag::Used => "used",
            Tag::Company => "company",
            Tag::Job => "job",
            Tag::Address => "address",
            Tag::Identity => "identity",
            Tag::Generic => "generic",
        };
        f.write_str(s)
    }
}

type Rule = (Tag, fn(&str) -> bool);

/// Evaluated top to bottom; the first predicate that holds decides the tag.
const RULES: &[Rule] = &[
    (Tag::Company, has_company_suffix),
    (Tag::Job, has_job_keyword),
    (Tag::Address, looks_like_address),
    (Tag::Identity, looks_like_identity),
];

pub fn has_company_suffix(line: &str) -> bool {
    COMPANY_RE.is_match(line)
}

/// Substring match, so OCR-merged titles such as "ProjectManager" still count.
pub fn has_job_keyword(line: &str) -> bool {
    contains_any(line, &JOB_TERMS)
}

pub fn looks_like_address(line: &str) -> bool {
    contains_any(line, &ADDRESS_TERMS)
        || POSTAL_RE.is_match(line)
        || UK_POSTCODE_RE.is_match(line)
}

/// Capitalised, longer than three chars, no digits: the shape of a name.
pub fn looks_like_identity(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
        && line.chars().count() > 3
        && !line.chars().any(char::is_numeric)
}

pub fn classify(line: &str) -> Tag {
    RULES
        .iter()
        .find(|(_, matches)| matches(line))
        .map(|(tag, _)| *tag)
        .unwrap_or(Tag::Generic)
}

/// One tag per line, aligned with `lines`. Claimed lines are `Used`.
pub fn tag_lines(lines: &[Line], claims: &Claims) -> Vec<Tag> {
    let tags: Vec<Tag> = lines
        .iter()
        .map(|line| {
            let tag = if claims.is_claimed(line.index) {
                Tag::Used
            } else {
                classify(&line.text)
            };
            trace!(line = line.index, %tag, text = %line.text, "tagged");
            tag
        })
        .collect();
    debug!(lines = tags.len(), "lines tagged");
    tags
}
