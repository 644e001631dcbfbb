use labref_model::DemographicBucket;
use thiserror::Error;

/// Hard failures that block range resolution.
///
/// An unparseable entered value is not an error; it is reported as
/// [`labref_model::ResultStatus::Unparseable`] on its row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("unknown analyte: {name}")]
    UnknownAnalyte { name: String },
    #[error("invalid age {age}: age must be a non-negative number of years")]
    InvalidAge { age: f64 },
    #[error("unknown panel: {name}")]
    UnknownPanel { name: String },
    #[error("conflicting values for {analyte}: {first:?} and {second:?}")]
    ConflictingValue {
        analyte: String,
        first: String,
        second: String,
    },
    /// Only reachable with definitions that bypassed table validation.
    #[error("analyte {analyte} has no reference range for bucket {bucket}")]
    MissingBucket {
        analyte: String,
        bucket: DemographicBucket,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
