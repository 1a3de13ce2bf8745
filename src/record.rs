use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for a field the extractor could not resolve.
pub const NOT_FOUND: &str = "Not Found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    JobTitle,
    Company,
    Email,
    Phone,
    Address,
    Website,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::JobTitle,
        Field::Company,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::Website,
    ];

    /// External key used in serialized records.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::JobTitle => "Job Title",
            Field::Company => "Company",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Address => "Address",
            Field::Website => "Website",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Structured contact pulled from one card. Every field is always present and
/// holds either extracted text or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Website")]
    pub website: String,
}

impl Default for ContactRecord {
    fn default() -> Self {
        ContactRecord {
            name: NOT_FOUND.to_string(),
            job_title: NOT_FOUND.to_string(),
            company: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            address: NOT_FOUND.to_string(),
            website: NOT_FOUND.to_string(),
        }
    }
}

impl ContactRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::JobTitle => &self.job_title,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Website => &self.website,
        }
    }

    /// Overwrite a field. Blank values are ignored so a field never loses the
    /// sentinel to empty text.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        *self.slot(field) = value;
    }

    pub fn is_resolved(&self, field: Field) -> bool {
        self.get(field) != NOT_FOUND
    }

    /// `(key, value)` pairs in canonical field order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL.iter().map(move |&f| (f.label(), self.get(f)))
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::JobTitle => &mut self.job_title,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::Website => &mut self.website,
        }
    }
}
