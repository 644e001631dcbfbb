//! Reference range kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Interval considered clinically normal for an analyte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceRange {
    /// Normal when `min <= value <= max`.
    Bounded { min: f64, max: f64 },
    /// Normal when `value < bound`. Used for limits such as "< 140 mg/dL";
    /// the bound is an upper limit, never a minimum.
    UpperBoundOnly { bound: f64 },
}

impl ReferenceRange {
    pub fn bounded(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ModelError::InvalidRange {
                message: format!("bounds must be finite (got {min} - {max})"),
            });
        }
        if min > max {
            return Err(ModelError::InvalidRange {
                message: format!("min {min} is greater than max {max}"),
            });
        }
        Ok(Self::Bounded { min, max })
    }

    pub fn upper_bound_only(bound: f64) -> Result<Self> {
        if !bound.is_finite() {
            return Err(ModelError::InvalidRange {
                message: format!("bound must be finite (got {bound})"),
            });
        }
        Ok(Self::UpperBoundOnly { bound })
    }

    /// Map a legacy `(min, max?)` pair onto a range kind.
    ///
    /// An absent `max` means the single number is a strict upper limit.
    pub fn from_bounds(min: f64, max: Option<f64>) -> Result<Self> {
        match max {
            Some(max) => Self::bounded(min, max),
            None => Self::upper_bound_only(min),
        }
    }

    /// Returns true if `value` is within the normal range.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            ReferenceRange::Bounded { min, max } => min <= value && value <= max,
            ReferenceRange::UpperBoundOnly { bound } => value < bound,
        }
    }
}

impl fmt::Display for ReferenceRange {
    /// Formats as `"{min} - {max}"` or `"< {bound}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceRange::Bounded { min, max } => write!(f, "{min} - {max}"),
            ReferenceRange::UpperBoundOnly { bound } => write!(f, "< {bound}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_is_inclusive() {
        let range = ReferenceRange::bounded(4000.0, 10000.0).unwrap();
        assert!(range.contains(4000.0));
        assert!(range.contains(10000.0));
        assert!(!range.contains(3999.9));
        assert!(!range.contains(10000.1));
    }

    #[test]
    fn upper_bound_is_strict() {
        let range = ReferenceRange::upper_bound_only(140.0).unwrap();
        assert!(range.contains(139.0));
        assert!(!range.contains(140.0));
        assert!(range.contains(0.0));
    }

    #[test]
    fn display_drops_trailing_zero() {
        assert_eq!(
            ReferenceRange::bounded(4000.0, 10000.0).unwrap().to_string(),
            "4000 - 10000"
        );
        assert_eq!(
            ReferenceRange::bounded(11.2, 16.0).unwrap().to_string(),
            "11.2 - 16"
        );
        assert_eq!(
            ReferenceRange::upper_bound_only(140.0).unwrap().to_string(),
            "< 140"
        );
    }

    #[test]
    fn from_bounds_without_max_is_upper_limit() {
        assert_eq!(
            ReferenceRange::from_bounds(140.0, None).unwrap(),
            ReferenceRange::UpperBoundOnly { bound: 140.0 }
        );
        assert_eq!(
            ReferenceRange::from_bounds(70.0, Some(110.0)).unwrap(),
            ReferenceRange::Bounded {
                min: 70.0,
                max: 110.0
            }
        );
    }

    #[test]
    fn rejects_inverted_or_non_finite_bounds() {
        assert!(ReferenceRange::bounded(10.0, 5.0).is_err());
        assert!(ReferenceRange::bounded(f64::NAN, 5.0).is_err());
        assert!(ReferenceRange::upper_bound_only(f64::INFINITY).is_err());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ReferenceRange::UpperBoundOnly { bound: 140.0 }).unwrap();
        assert_eq!(json["kind"], "upper_bound_only");
        assert_eq!(json["bound"], 140.0);
    }
}
