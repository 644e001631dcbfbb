//! Submission files: one patient, one panel, the entered results.
//!
//! ```toml
//! panel = "Hemograma"
//!
//! [patient]
//! name = "Ana Torres"
//! dni = "45871236"
//! age = 30
//! sex = "Femenino"
//! physician = "Dr. Salas"
//! date = "2025-03-14"
//!
//! [results]
//! "Glóbulos blancos" = 6500
//! Hemoglobina = "13.2"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use labref_model::PatientInfo;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub panel: String,
    pub patient: PatientInfo,
    #[serde(default)]
    pub results: BTreeMap<String, EnteredValue>,
}

/// A result as written in the file: quoted text or a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnteredValue {
    Text(String),
    Number(f64),
}

impl EnteredValue {
    pub fn as_text(&self) -> String {
        match self {
            EnteredValue::Text(text) => text.clone(),
            EnteredValue::Number(number) => number.to_string(),
        }
    }
}

impl Submission {
    /// Entered results as text, keyed by analyte name.
    pub fn entered_values(&self) -> BTreeMap<String, String> {
        self.results
            .iter()
            .map(|(name, value)| (name.clone(), value.as_text()))
            .collect()
    }
}

pub fn parse_submission(text: &str) -> Result<Submission> {
    toml::from_str(text).context("parse submission")
}

pub fn load_submission(path: &Path) -> Result<Submission> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read submission: {}", path.display()))?;
    parse_submission(&text).with_context(|| format!("in {}", path.display()))
}
