#![deny(unsafe_code)]

//! On-disk schema of a reference table file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const TABLE_SCHEMA: &str = "labref.reference-ranges";
pub const TABLE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFile {
    pub table: TableHeader,
    #[serde(default)]
    pub panels: Vec<PanelEntry>,
    #[serde(default)]
    pub analytes: Vec<AnalyteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableHeader {
    pub schema: String,
    pub schema_version: u32,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelEntry {
    pub name: String,
    pub analytes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyteEntry {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub range: Option<RangeEntry>,
    /// Keyed by bucket label ("Masculino", "Femenino", "Niño", "2-11m", "RN").
    #[serde(default)]
    pub buckets: Option<BTreeMap<String, RangeEntry>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeEntry {
    Bounded { min: f64, max: f64 },
    UpperBoundOnly { bound: f64 },
}
