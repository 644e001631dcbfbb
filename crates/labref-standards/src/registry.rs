#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use labref_model::{
    AnalyteDefinition, DemographicBucket, NameIndex, Panel, RangeSpec, ReferenceRange,
};
use tracing::debug;

use crate::error::StandardsError;
use crate::manifest::{
    AnalyteEntry, RangeEntry, TABLE_SCHEMA, TABLE_SCHEMA_VERSION, TableFile,
};

/// Immutable, validated set of analyte definitions and panels.
///
/// Every bucketed analyte defines all five demographic buckets and every
/// panel member resolves to a known analyte, so lookups against a loaded
/// table never hit a gap.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    summary: Option<String>,
    analytes: BTreeMap<String, AnalyteDefinition>,
    names: NameIndex,
    panels: Vec<Panel>,
}

impl ReferenceTable {
    /// Build a table from analyte definitions and panels, validating both.
    pub fn new(
        analytes: Vec<AnalyteDefinition>,
        panels: Vec<Panel>,
    ) -> Result<Self, StandardsError> {
        let mut names = NameIndex::new();
        let mut by_name = BTreeMap::new();
        for analyte in analytes {
            validate_analyte(&analyte)?;
            if let Some(existing) = names.get(&analyte.name) {
                return Err(StandardsError::DuplicateAnalyte {
                    name: analyte.name.clone(),
                    existing: existing.to_string(),
                });
            }
            for spelling in std::iter::once(&analyte.name).chain(analyte.aliases.iter()) {
                if let Some(existing) = names.insert(spelling, &analyte.name)
                    && existing != analyte.name
                {
                    return Err(StandardsError::DuplicateAnalyte {
                        name: spelling.clone(),
                        existing: existing.to_string(),
                    });
                }
            }
            by_name.insert(analyte.name.clone(), analyte);
        }

        let mut panel_names = NameIndex::new();
        let mut resolved_panels = Vec::with_capacity(panels.len());
        for panel in panels {
            if panel_names.insert(&panel.name, &panel.name).is_some() {
                return Err(StandardsError::DuplicatePanel { name: panel.name });
            }
            if panel.analytes.is_empty() {
                return Err(StandardsError::EmptyPanel { name: panel.name });
            }
            let mut members = Vec::with_capacity(panel.analytes.len());
            for member in &panel.analytes {
                let Some(canonical) = names.get(member) else {
                    return Err(StandardsError::UnknownPanelAnalyte {
                        panel: panel.name.clone(),
                        analyte: member.clone(),
                    });
                };
                members.push(canonical.to_string());
            }
            resolved_panels.push(Panel {
                name: panel.name,
                analytes: members,
            });
        }

        debug!(
            analyte_count = by_name.len(),
            panel_count = resolved_panels.len(),
            "reference table validated"
        );
        Ok(Self {
            summary: None,
            analytes: by_name,
            names,
            panels: resolved_panels,
        })
    }

    /// Convert a parsed table file into a validated table.
    pub fn from_file(file: TableFile) -> Result<Self, StandardsError> {
        if file.table.schema != TABLE_SCHEMA {
            return Err(StandardsError::InvalidSchema {
                message: format!(
                    "expected schema {TABLE_SCHEMA:?}, found {:?}",
                    file.table.schema
                ),
            });
        }
        if file.table.schema_version != TABLE_SCHEMA_VERSION {
            return Err(StandardsError::InvalidSchema {
                message: format!(
                    "unsupported schema_version {} (expected {TABLE_SCHEMA_VERSION})",
                    file.table.schema_version
                ),
            });
        }
        let analytes = file
            .analytes
            .into_iter()
            .map(analyte_from_entry)
            .collect::<Result<Vec<_>, _>>()?;
        let panels = file
            .panels
            .into_iter()
            .map(|panel| Panel {
                name: panel.name,
                analytes: panel.analytes,
            })
            .collect();
        let mut table = Self::new(analytes, panels)?;
        table.summary = file.table.summary;
        Ok(table)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Look up an analyte by name or alias (case-insensitive).
    pub fn analyte(&self, name: &str) -> Option<&AnalyteDefinition> {
        let canonical = self.names.get(name)?;
        self.analytes.get(canonical)
    }

    /// Canonical name for a spelling, if known.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.names.get(name)
    }

    /// All analytes, ordered by canonical name.
    pub fn analytes(&self) -> impl Iterator<Item = &AnalyteDefinition> {
        self.analytes.values()
    }

    pub fn analyte_count(&self) -> usize {
        self.analytes.len()
    }

    /// Panels in declaration order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Look up a panel by name (case-insensitive).
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        let wanted = name.trim();
        self.panels
            .iter()
            .find(|panel| panel.name.to_lowercase() == wanted.to_lowercase())
    }
}

fn validate_analyte(analyte: &AnalyteDefinition) -> Result<(), StandardsError> {
    let check = |range: &ReferenceRange| match *range {
        ReferenceRange::Bounded { min, max } => ReferenceRange::bounded(min, max).map(|_| ()),
        ReferenceRange::UpperBoundOnly { bound } => {
            ReferenceRange::upper_bound_only(bound).map(|_| ())
        }
    };
    match &analyte.ranges {
        RangeSpec::Fixed(range) => {
            check(range).map_err(|err| StandardsError::InvalidRange {
                analyte: analyte.name.clone(),
                message: err.to_string(),
            })?;
        }
        RangeSpec::ByBucket(ranges) => {
            for (bucket, range) in ranges {
                check(range).map_err(|err| StandardsError::InvalidRange {
                    analyte: analyte.name.clone(),
                    message: format!("{bucket}: {err}"),
                })?;
            }
            let missing = analyte.ranges.missing_buckets();
            if !missing.is_empty() {
                let buckets = missing
                    .iter()
                    .map(DemographicBucket::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(StandardsError::MissingBuckets {
                    analyte: analyte.name.clone(),
                    buckets,
                });
            }
        }
    }
    Ok(())
}

fn analyte_from_entry(entry: AnalyteEntry) -> Result<AnalyteDefinition, StandardsError> {
    let ranges = match (entry.range, entry.buckets) {
        (Some(range), None) => RangeSpec::Fixed(range_from_entry(range)),
        (None, Some(buckets)) => {
            let mut by_bucket = BTreeMap::new();
            let mut seen = BTreeSet::new();
            for (label, range) in buckets {
                let bucket: DemographicBucket =
                    label.parse().map_err(|_| StandardsError::UnknownBucket {
                        analyte: entry.name.clone(),
                        label: label.clone(),
                    })?;
                if !seen.insert(bucket) {
                    return Err(StandardsError::InvalidRange {
                        analyte: entry.name.clone(),
                        message: format!("bucket {bucket} is defined more than once"),
                    });
                }
                by_bucket.insert(bucket, range_from_entry(range));
            }
            RangeSpec::ByBucket(by_bucket)
        }
        _ => {
            return Err(StandardsError::AmbiguousRange {
                analyte: entry.name,
            });
        }
    };
    Ok(AnalyteDefinition {
        name: entry.name.trim().to_string(),
        unit: entry.unit,
        aliases: entry.aliases,
        ranges,
    })
}

fn range_from_entry(entry: RangeEntry) -> ReferenceRange {
    match entry {
        RangeEntry::Bounded { min, max } => ReferenceRange::Bounded { min, max },
        RangeEntry::UpperBoundOnly { bound } => ReferenceRange::UpperBoundOnly { bound },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(name: &str, min: f64, max: f64) -> AnalyteDefinition {
        AnalyteDefinition::fixed(name, "%", ReferenceRange::Bounded { min, max })
    }

    #[test]
    fn rejects_duplicate_alias() {
        let analytes = vec![
            fixed("Basófilos", 0.0, 1.0).with_aliases(["BASOFILOS"]),
            fixed("Basofilos", 0.0, 1.0),
        ];
        let err = ReferenceTable::new(analytes, Vec::new()).unwrap_err();
        assert!(matches!(err, StandardsError::DuplicateAnalyte { .. }));
    }

    #[test]
    fn rejects_repeated_name() {
        let analytes = vec![fixed("MCV", 80.0, 99.0), fixed("mcv", 27.0, 31.0)];
        let err = ReferenceTable::new(analytes, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::DuplicateAnalyte { ref name, ref existing }
                if name == "mcv" && existing == "MCV"
        ));
    }

    #[test]
    fn alias_repeating_own_name_is_tolerated() {
        let analytes = vec![fixed("Abastonados", 0.0, 5.0).with_aliases(["ABASTONADOS"])];
        let table = ReferenceTable::new(analytes, Vec::new()).unwrap();
        assert_eq!(table.analyte_count(), 1);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = ReferenceTable::new(vec![fixed("Segmentados", 65.0, 45.0)], Vec::new())
            .unwrap_err();
        assert!(matches!(err, StandardsError::InvalidRange { .. }));
    }

    #[test]
    fn panel_members_are_canonicalized() {
        let analytes =
            vec![fixed("Glóbulos blancos", 4000.0, 10000.0).with_aliases(["GLOB. BLANCOS"])];
        let panels = vec![Panel {
            name: "Hemograma".to_string(),
            analytes: vec!["glob. blancos".to_string()],
        }];
        let table = ReferenceTable::new(analytes, panels).unwrap();
        let panel = table.panel("HEMOGRAMA").unwrap();
        assert_eq!(panel.analytes, vec!["Glóbulos blancos".to_string()]);
    }

    #[test]
    fn rejects_empty_and_duplicate_panels() {
        let analytes = vec![fixed("MCV", 80.0, 99.0)];
        let empty = vec![Panel {
            name: "Vacio".to_string(),
            analytes: Vec::new(),
        }];
        assert!(matches!(
            ReferenceTable::new(analytes.clone(), empty).unwrap_err(),
            StandardsError::EmptyPanel { .. }
        ));
        let panel = Panel {
            name: "Indices".to_string(),
            analytes: vec!["MCV".to_string()],
        };
        let duplicated = vec![panel.clone(), panel];
        assert!(matches!(
            ReferenceTable::new(analytes, duplicated).unwrap_err(),
            StandardsError::DuplicatePanel { .. }
        ));
    }
}
