pub mod analyte;
pub mod enums;
pub mod error;
pub mod lookup;
pub mod patient;
pub mod range;
pub mod result;

pub use analyte::{AnalyteDefinition, Panel, RangeSpec};
pub use enums::{DemographicBucket, Sex};
pub use error::{ModelError, Result};
pub use lookup::NameIndex;
pub use patient::{MAX_AGE_YEARS, PatientInfo};
pub use range::ReferenceRange;
pub use result::{ResolvedReference, ResultEntry, ResultStatus, StatusCounts};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_tally_entries() {
        let reference = ResolvedReference {
            analyte: "MCV".to_string(),
            unit: "fL".to_string(),
            range: ReferenceRange::Bounded { min: 80.0, max: 99.0 },
            bucket: None,
        };
        let entries = vec![
            ResultEntry::new(&reference, "85", ResultStatus::InRange),
            ResultEntry::new(&reference, "120", ResultStatus::OutOfRange),
            ResultEntry::new(&reference, "", ResultStatus::Unparseable),
            ResultEntry::new(&reference, "90", ResultStatus::InRange),
        ];
        let counts = StatusCounts::from_entries(&entries);
        assert_eq!(counts.in_range, 2);
        assert_eq!(counts.out_of_range, 1);
        assert_eq!(counts.unparseable, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn entry_serializes() {
        let reference = ResolvedReference {
            analyte: "Glucosa postprandial".to_string(),
            unit: "mg/dL".to_string(),
            range: ReferenceRange::UpperBoundOnly { bound: 140.0 },
            bucket: None,
        };
        let entry = ResultEntry::new(&reference, "139", ResultStatus::InRange);
        let json = serde_json::to_string(&entry).expect("serialize entry");
        let round: ResultEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(round.range_display, "< 140");
        assert_eq!(round.status, ResultStatus::InRange);
    }
}
