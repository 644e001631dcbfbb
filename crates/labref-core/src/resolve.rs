//! Reference range resolution.
//!
//! Picks the `(unit, range)` pair for an analyte given the patient's age
//! and sex. Only demographic analytes consult the patient; every other
//! analyte returns its single fixed range.

use labref_model::{AnalyteDefinition, DemographicBucket, RangeSpec, ResolvedReference, Sex};
use labref_standards::ReferenceTable;
use tracing::trace;

use crate::error::{ResolveError, Result};

/// Resolve the reference range for `analyte` (name or alias).
///
/// # Errors
///
/// - [`ResolveError::InvalidAge`] when `age` is negative or not finite.
/// - [`ResolveError::UnknownAnalyte`] when the table has no such analyte.
pub fn resolve_reference(
    table: &ReferenceTable,
    analyte: &str,
    age: f64,
    sex: Sex,
) -> Result<ResolvedReference> {
    check_age(age)?;
    let definition = table
        .analyte(analyte)
        .ok_or_else(|| ResolveError::UnknownAnalyte {
            name: analyte.to_string(),
        })?;
    resolve_definition(definition, age, sex)
}

/// Resolve against a single definition.
pub fn resolve_definition(
    definition: &AnalyteDefinition,
    age: f64,
    sex: Sex,
) -> Result<ResolvedReference> {
    check_age(age)?;
    let (range, bucket) = match &definition.ranges {
        RangeSpec::Fixed(range) => (*range, None),
        RangeSpec::ByBucket(ranges) => {
            let bucket = DemographicBucket::select(age, sex);
            let range = ranges
                .get(&bucket)
                .copied()
                .ok_or_else(|| ResolveError::MissingBucket {
                    analyte: definition.name.clone(),
                    bucket,
                })?;
            (range, Some(bucket))
        }
    };
    trace!(
        analyte = %definition.name,
        bucket = bucket.as_ref().map(DemographicBucket::as_str),
        range = %range,
        "resolved reference range"
    );
    Ok(ResolvedReference {
        analyte: definition.name.clone(),
        unit: definition.unit.clone(),
        range,
        bucket,
    })
}

fn check_age(age: f64) -> Result<()> {
    if age.is_finite() && age >= 0.0 {
        Ok(())
    } else {
        Err(ResolveError::InvalidAge { age })
    }
}
