//! Business card text → contact record.
//!
//! Single linear pass per card:
//!   1. lines: trim, drop blanks, index top to bottom
//!   2. anchors: email, website, phones; claim anchor-dominated lines
//!   3. tags: company / job / address / identity / generic per free line
//!   4. address: densest address cluster, widened and joined
//!   5. identity: job title, then the name line closest to it
//!   6. company: suffix rescan over every line, email-domain fallback
//!
//! All state lives in per-call vectors indexed by line position, so separate
//! cards can be extracted on separate threads without coordination.

pub mod address;
pub mod anchors;
pub mod company;
pub mod identity;
pub mod lines;
pub mod tags;
pub mod vocab;

use serde::Serialize;
use tracing::debug;

use crate::record::{ContactRecord, Field};
use identity::NameCleaner;
use lines::{Claim, Claims};
use tags::Tag;

/// How one input line was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub index: usize,
    pub text: String,
    pub tag: Tag,
    pub claimed_by: Option<Claim>,
}

/// A record together with the per-line reading that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub record: ContactRecord,
    pub lines: Vec<LineReport>,
}

impl Extraction {
    /// Lines no stage took.
    pub fn residuals(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|l| l.claimed_by.is_none())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    clean_name: NameCleaner,
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor {
            clean_name: identity::strip_logo_marks,
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the post-processing applied to name candidates.
    pub fn with_name_cleaner(mut self, clean: NameCleaner) -> Self {
        self.clean_name = clean;
        self
    }

    pub fn extract(&self, text: &str) -> ContactRecord {
        self.explain(text).record
    }

    pub fn explain(&self, text: &str) -> Extraction {
        let lines = lines::normalize(text);
        let mut claims = Claims::new(lines.len());

        let anchors = anchors::extract(&lines, &mut claims);
        let tags = tags::tag_lines(&lines, &claims);
        let address = address::assemble(&lines, &tags, &mut claims);
        let identity = identity::resolve(&lines, &tags, &mut claims, self.clean_name);
        let company = company::resolve(&lines, anchors.email.as_deref());

        let resolved = [
            (Field::Name, identity.name),
            (Field::JobTitle, identity.job_title),
            (Field::Company, company),
            (Field::Email, anchors.email.clone()),
            (Field::Phone, anchors.phone_field()),
            (Field::Address, address),
            (Field::Website, anchors.website.clone()),
        ];
        let mut record = ContactRecord::default();
        for (field, value) in resolved {
            if let Some(value) = value {
                record.set(field, value);
            }
        }

        let reports = lines
            .into_iter()
            .map(|line| LineReport {
                tag: tags[line.index],
                claimed_by: claims.owner(line.index),
                index: line.index,
                text: line.text,
            })
            .collect::<Vec<_>>();

        debug!(
            lines = reports.len(),
            resolved = Field::ALL.iter().filter(|&&f| record.is_resolved(f)).count(),
            "card extracted"
        );
        Extraction {
            record,
            lines: reports,
        }
    }
}

/// Extract a contact record with the default settings.
pub fn extract_contact(text: &str) -> ContactRecord {
    Extractor::default().extract(text)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_FOUND;

    fn card(fixture: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", fixture)).unwrap()
    }

    /// Every resolved value (or each comma-separated piece of it) appears in the input.
    fn assert_grounded(input: &str, record: &ContactRecord) {
        let haystack = input.to_lowercase();
        for (key, value) in record.entries() {
            if value == NOT_FOUND {
                continue;
            }
            for piece in value.split(", ") {
                assert!(
                    haystack.contains(&piece.to_lowercase()),
                    "{} piece {:?} not found in input",
                    key,
                    piece
                );
            }
        }
    }

    #[test]
    fn communications_manager_card() {
        let text = card("communications_manager");
        let r = extract_contact(&text);
        assert_eq!(r.job_title, "Communications Manager");
        assert_eq!(r.email, "sundarkumar@gmail.com");
        assert!(r.phone.contains("1234567890"));
        assert_eq!(r.company, "Lyero & Company");
        assert!(r.address.contains("Lucknow Indranagar"));
        assert_grounded(&text, &r);
    }

    #[test]
    fn software_engineer_card() {
        let text = card("software_engineer");
        let r = extract_contact(&text);
        assert_eq!(r.name, "John Doe");
        assert!(r.job_title.contains("Software Engineer"));
        assert_eq!(r.company, "Tech Solutions Inc.");
        assert_eq!(r.email, "john.doe@techsolutions.com");
        assert_eq!(r.website, "www.techsolutions.com");
        assert!(r.phone.contains("123-4567"));
        assert!(r.address.contains("123 Tech Park"));
        assert_grounded(&text, &r);
    }

    #[test]
    fn minimal_card() {
        let text = card("minimal");
        let r = extract_contact(&text);
        assert_eq!(r.name, "Jane Smith");
        assert_eq!(r.job_title, "Director of Marketing");
        assert_eq!(r.company, "Global Corp");
        assert_eq!(r.email, "jane@globex.io");
        assert_eq!(r.phone, "+1 415 555 0199");
        assert_eq!(r.address, NOT_FOUND);
        assert_eq!(r.website, NOT_FOUND);
    }

    #[test]
    fn industrial_card() {
        let text = card("assam_carbon");
        let r = extract_contact(&text);
        assert_eq!(r.name, "N.V. SELVAKUMAR");
        assert_eq!(r.job_title, "Sales Head (South & West)");
        assert_eq!(r.company, "ASSAM CARBON PRODUCTS LTD");
        assert_eq!(r.email, "sales.head.sw@ascarbon.com");
        assert_eq!(r.website, "www.assamcarbon.in");
        assert_eq!(r.phone, "9488473006, (08455) 242087 / 89");
        assert!(r.address.starts_with("ASSAM CARBON PRODUCTS LTD, Assam Carbon Products Ltd, 2. IDA"));
        assert!(r.address.ends_with("Sangareddy (Dist.), Telangana State - 502319"));
        assert_grounded(&text, &r);
    }

    #[test]
    fn single_name_line() {
        let r = extract_contact("Jane");
        assert_eq!(r.name, "Jane");
        for field in Field::ALL.iter().filter(|&&f| f != Field::Name) {
            assert_eq!(r.get(*field), NOT_FOUND, "{}", field);
        }
    }

    #[test]
    fn blank_inputs_resolve_nothing() {
        for text in ["", "   ", "\n\n\t\r\n", " \n "] {
            assert_eq!(extract_contact(text), ContactRecord::default());
            assert!(Extractor::new().explain(text).lines.is_empty());
        }
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let long_digits = "7".repeat(200);
        let inputs = [
            "a",
            "1234567890",
            "@@@@",
            ":::: 1",
            "((((((",
            "İstanbul Straße",
            "\u{0}\u{1}\u{7f}",
            "🙂🙂🙂🙂",
            long_digits.as_str(),
            "www.\nhttp://\n@\n+\n00",
        ];
        for text in inputs {
            let r = extract_contact(text);
            assert_eq!(r.entries().count(), 7);
            assert_grounded(text, &r);
        }
    }

    #[test]
    fn email_domain_names_company_when_no_suffix() {
        let r = extract_contact("Ravi Kumar\nravi@brightpath.in");
        assert_eq!(r.company, "Brightpath");
        assert_eq!(r.name, "Ravi Kumar");
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = card("assam_carbon");
        let first = extract_contact(&text);
        for _ in 0..5 {
            assert_eq!(extract_contact(&text), first);
        }
    }

    #[test]
    fn parallel_extraction_matches_sequential() {
        use rayon::prelude::*;

        let cards: Vec<String> = ["communications_manager", "software_engineer", "minimal", "assam_carbon"]
            .iter()
            .map(|f| card(f))
            .collect();
        let sequential: Vec<_> = cards.iter().map(|c| extract_contact(c)).collect();
        let parallel: Vec<_> = cards.par_iter().map(|c| extract_contact(c)).collect();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn custom_name_cleaner() {
        let text = "Priya Raman XYZ\nLead Designer";
        assert_eq!(extract_contact(text).name, "Priya Raman");
        let raw = Extractor::new()
            .with_name_cleaner(identity::keep_as_is)
            .extract(text);
        assert_eq!(raw.name, "Priya Raman XYZ");
    }

    #[test]
    fn explain_reports_every_line() {
        let text = card("software_engineer");
        let ex = Extractor::new().explain(&text);
        assert_eq!(ex.lines.len(), 7);
        assert_eq!(ex.lines[0].tag, Tag::Identity);
        assert_eq!(ex.lines[0].claimed_by, Some(Claim::Name));
        assert_eq!(ex.lines[1].claimed_by, Some(Claim::JobTitle));
        assert_eq!(ex.lines[4].tag, Tag::Used);
        assert_eq!(ex.lines[4].claimed_by, Some(Claim::Email));
        assert_eq!(ex.lines[5].claimed_by, Some(Claim::Phone));
        assert_eq!(ex.lines[6].claimed_by, Some(Claim::Website));
        assert_eq!(ex.residuals().count(), 0);
    }

    #[test]
    fn residuals_are_unclaimed_lines() {
        let ex = Extractor::new().explain("Jane Smith\nChief Editor\nJohn Adams");
        let left: Vec<_> = ex.residuals().map(|l| l.text.as_str()).collect();
        assert_eq!(left, vec!["John Adams"]);
    }
}
