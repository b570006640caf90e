//! Experience records, the project entries whose notes get highlighted

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::parse_list;

/// One project or position, with every field trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub code: String,
    pub name: String,
    pub period: String,
    pub company: String,
    pub tech_stack: String,
    pub keywords: String,
    pub details: String,
}

impl Experience {
    /// The keywords to underline in this entry's details.
    pub fn keyword_list(&self) -> Vec<&str> {
        parse_list(&self.keywords)
    }

    /// The technologies listed in the tech stack field.
    pub fn technologies(&self) -> Vec<&str> {
        parse_list(&self.tech_stack)
    }
}

/// An entry as it arrives over the wire; anything may be missing or null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Record {
    experience_code: Option<String>,
    name: Option<String>,
    period: Option<String>,
    company_name: Option<String>,
    tech_stack: Option<String>,
    keywords: Option<String>,
    details: Option<String>,
}

fn tidy(value: Option<String>) -> String {
    value
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string()
}

impl Record {
    fn normalise(self, index: usize) -> Experience {
        Experience {
            code: self
                .experience_code
                .map(|code| code.trim().to_string())
                .unwrap_or_else(|| index.to_string()),
            name: tidy(self.name),
            period: tidy(self.period),
            company: tidy(self.company_name),
            tech_stack: tidy(self.tech_stack),
            keywords: tidy(self.keywords),
            details: tidy(self.details),
        }
    }
}

#[derive(Deserialize)]
struct Metadata {
    experiences: Option<Vec<Record>>,
}

#[derive(Deserialize)]
struct Section {
    metadata: Option<Metadata>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<Record>),
    Response { data: Section },
    Section(Section),
}

/// Read experience entries from JSON. Accepts a bare array of entries, a
/// section payload carrying them under `metadata.experiences`, or an API
/// response wrapping such a section under `data`.
pub fn parse_experiences(json: &str) -> Result<Vec<Experience>, serde_json::Error> {
    let records = match serde_json::from_str::<Payload>(json)? {
        Payload::List(records) => records,
        Payload::Response { data: section } | Payload::Section(section) => section
            .metadata
            .and_then(|metadata| metadata.experiences)
            .unwrap_or_default(),
    };

    debug!(
        "Found {} experience{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.normalise(i))
        .collect())
}
