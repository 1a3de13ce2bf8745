use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, trace};

use super::lines::{Claim, Claims, Line};
use super::vocab::PHONE_KEYWORDS;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(?:/\S*)?").unwrap()
});

/// Tried in order on every line; each variant can contribute one number.
static PHONE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // optional +/00 prefix, 8-15 loosely separated digits, optional "/ 89" extension
        Regex::new(r"(?:(?:\+|00)[\s.-]{0,3})?(?:[0-9][\s.-]{0,3}){8,15}(?:\s*/\s*[0-9]{2,4})?")
            .unwrap(),
        // (08455) 242087 / 89, (555) 123-4567
        Regex::new(r"\([0-9]{3,5}\)\s*[0-9](?:[\s.-]?[0-9]){5,9}(?:\s*/\s*[0-9]{2,4})?").unwrap(),
        Regex::new(r"\b[0-9]{10}\b").unwrap(),
    ]
});

static PHONE_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", PHONE_KEYWORDS.join("|"))).unwrap()
});

/// A line whose anchor match leaves fewer residual chars than this belongs to the anchor.
const DOMINANCE_RESIDUAL: usize = 5;
const MIN_PHONE_DIGITS: usize = 8;

/// High-confidence fields found by pattern alone, independent of layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    pub email: Option<String>,
    pub website: Option<String>,
    pub phones: Vec<String>,
}

impl Anchors {
    /// All collected numbers in discovery order, comma separated.
    pub fn phone_field(&self) -> Option<String> {
        if self.phones.is_empty() {
            None
        } else {
            Some(self.phones.iter().join(", "))
        }
    }

    fn push_phone(&mut self, number: &str) {
        if !self.phones.iter().any(|p| p.contains(number)) {
            self.phones.push(number.to_string());
        }
    }
}

pub fn extract(lines: &[Line], claims: &mut Claims) -> Anchors {
    let mut anchors = Anchors::default();

    for line in lines {
        if let Some(m) = EMAIL_RE.find(&line.text) {
            if anchors.email.is_none() {
                anchors.email = Some(m.as_str().to_string());
            }
            if is_dominated_by(&line.text, m.as_str()) {
                claims.claim(line.index, Claim::Email);
            }
        }

        if let Some(m) = URL_RE.find(&line.text) {
            if anchors.website.is_none() {
                anchors.website = Some(m.as_str().to_string());
            }
            if is_dominated_by(&line.text, m.as_str()) {
                claims.claim(line.index, Claim::Website);
            }
        }

        let mut found_phone = false;
        for re in PHONE_RES.iter() {
            let Some(m) = re.find(&line.text) else {
                continue;
            };
            let number = m.as_str().trim();
            if digit_count(number) >= MIN_PHONE_DIGITS {
                trace!(line = line.index, number, "phone match");
                anchors.push_phone(number);
                found_phone = true;
            }
        }

        if found_phone {
            claims.claim(line.index, Claim::Phone);
        } else if is_contact_label(&line.text) {
            claims.claim(line.index, Claim::ContactLabel);
        }
    }

    debug!(
        email = anchors.email.as_deref().unwrap_or("-"),
        website = anchors.website.as_deref().unwrap_or("-"),
        phones = anchors.phones.len(),
        "anchors extracted"
    );
    anchors
}

fn is_dominated_by(line: &str, matched: &str) -> bool {
    line.replace(matched, "").trim().chars().count() < DOMINANCE_RESIDUAL
}

/// "Tel ...", "Mobile ...", or any "Label: 123" shaped line.
fn is_contact_label(line: &str) -> bool {
    PHONE_KEYWORD_RE.is_match(line)
        || (line.contains(':') && line.chars().any(|c| c.is_ascii_digit()))
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}
