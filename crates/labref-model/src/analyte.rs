use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::DemographicBucket;
use crate::range::ReferenceRange;

/// How an analyte's normal range is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSpec {
    /// One range for every patient.
    Fixed(ReferenceRange),
    /// One range per demographic bucket.
    ByBucket(BTreeMap<DemographicBucket, ReferenceRange>),
}

impl RangeSpec {
    pub fn is_demographic(&self) -> bool {
        matches!(self, RangeSpec::ByBucket(_))
    }

    /// Range for `bucket`. Fixed specs ignore the bucket.
    pub fn range_for(&self, bucket: DemographicBucket) -> Option<ReferenceRange> {
        match self {
            RangeSpec::Fixed(range) => Some(*range),
            RangeSpec::ByBucket(ranges) => ranges.get(&bucket).copied(),
        }
    }

    /// Buckets from [`DemographicBucket::ALL`] with no range defined.
    pub fn missing_buckets(&self) -> Vec<DemographicBucket> {
        match self {
            RangeSpec::Fixed(_) => Vec::new(),
            RangeSpec::ByBucket(ranges) => DemographicBucket::ALL
                .into_iter()
                .filter(|bucket| !ranges.contains_key(bucket))
                .collect(),
        }
    }
}

/// Static definition of a measurable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyteDefinition {
    /// Canonical display name (e.g., "Hemoglobina").
    pub name: String,
    /// Display unit (e.g., "g/dL").
    pub unit: String,
    /// Alternative spellings accepted on input (e.g., "GLOB. BLANCOS").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub ranges: RangeSpec,
}

impl AnalyteDefinition {
    pub fn fixed(name: impl Into<String>, unit: impl Into<String>, range: ReferenceRange) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            aliases: Vec::new(),
            ranges: RangeSpec::Fixed(range),
        }
    }

    pub fn by_bucket(
        name: impl Into<String>,
        unit: impl Into<String>,
        ranges: BTreeMap<DemographicBucket, ReferenceRange>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            aliases: Vec::new(),
            ranges: RangeSpec::ByBucket(ranges),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// A named, ordered set of analytes presented together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub name: String,
    pub analytes: Vec<String>,
}
