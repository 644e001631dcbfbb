//! Type-safe enumerations for patient demographics.
//!
//! The entry forms collect sex as one of two Spanish labels and age in
//! years. Reference ranges for a few analytes depend on a demographic
//! bucket derived from both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Patient sex as collected on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(alias = "M", alias = "Male")]
    Masculino,
    #[serde(alias = "F", alias = "Female")]
    Femenino,
}

impl Sex {
    /// Returns the label as shown on the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Masculino => "Masculino",
            Sex::Femenino => "Femenino",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    /// Parse a sex label (case-insensitive).
    /// Accepts the Spanish labels, single-letter codes and English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "MASCULINO" | "M" | "MALE" => Ok(Sex::Masculino),
            "FEMENINO" | "F" | "FEMALE" => Ok(Sex::Femenino),
            _ => Err(ModelError::UnknownSex(s.to_string())),
        }
    }
}

/// Age/sex category used to pick among candidate reference ranges.
///
/// Thresholds, with age in years:
/// - **RN** (newborn): age < 1
/// - **2-11m** (infant): 1 <= age < 2
/// - **Niño** (child): 2 <= age <= 12
/// - **Masculino / Femenino**: age > 12, taken from the patient's sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DemographicBucket {
    #[serde(rename = "Masculino")]
    Masculino,
    #[serde(rename = "Femenino")]
    Femenino,
    #[serde(rename = "Niño")]
    Nino,
    #[serde(rename = "2-11m")]
    Infant,
    #[serde(rename = "RN")]
    Newborn,
}

impl DemographicBucket {
    /// Every bucket a demographic-dependent analyte must define.
    pub const ALL: [DemographicBucket; 5] = [
        DemographicBucket::Masculino,
        DemographicBucket::Femenino,
        DemographicBucket::Nino,
        DemographicBucket::Infant,
        DemographicBucket::Newborn,
    ];

    /// Select the bucket for a patient.
    ///
    /// Sex is only consulted once age exceeds 12 years. The caller is
    /// responsible for rejecting negative or non-finite ages.
    pub fn select(age: f64, sex: Sex) -> Self {
        if age < 1.0 {
            DemographicBucket::Newborn
        } else if age < 2.0 {
            DemographicBucket::Infant
        } else if age <= 12.0 {
            DemographicBucket::Nino
        } else {
            match sex {
                Sex::Masculino => DemographicBucket::Masculino,
                Sex::Femenino => DemographicBucket::Femenino,
            }
        }
    }

    /// Returns the label used in reference tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemographicBucket::Masculino => "Masculino",
            DemographicBucket::Femenino => "Femenino",
            DemographicBucket::Nino => "Niño",
            DemographicBucket::Infant => "2-11m",
            DemographicBucket::Newborn => "RN",
        }
    }
}

impl fmt::Display for DemographicBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DemographicBucket {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "MASCULINO" => Ok(DemographicBucket::Masculino),
            "FEMENINO" => Ok(DemographicBucket::Femenino),
            "NIÑO" | "NINO" => Ok(DemographicBucket::Nino),
            "2-11M" => Ok(DemographicBucket::Infant),
            "RN" => Ok(DemographicBucket::Newborn),
            _ => Err(ModelError::UnknownBucket(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Masculino".parse::<Sex>().unwrap(), Sex::Masculino);
        assert_eq!("femenino".parse::<Sex>().unwrap(), Sex::Femenino);
        assert_eq!(" F ".parse::<Sex>().unwrap(), Sex::Femenino);
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Masculino);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_bucket_from_str() {
        assert_eq!(
            "Niño".parse::<DemographicBucket>().unwrap(),
            DemographicBucket::Nino
        );
        assert_eq!(
            "nino".parse::<DemographicBucket>().unwrap(),
            DemographicBucket::Nino
        );
        assert_eq!(
            "2-11m".parse::<DemographicBucket>().unwrap(),
            DemographicBucket::Infant
        );
        assert_eq!(
            "rn".parse::<DemographicBucket>().unwrap(),
            DemographicBucket::Newborn
        );
        assert!("Adulto".parse::<DemographicBucket>().is_err());
    }

    #[test]
    fn test_bucket_thresholds() {
        let select = DemographicBucket::select;
        assert_eq!(select(0.0, Sex::Femenino), DemographicBucket::Newborn);
        assert_eq!(select(0.99, Sex::Masculino), DemographicBucket::Newborn);
        assert_eq!(select(1.0, Sex::Masculino), DemographicBucket::Infant);
        assert_eq!(select(1.5, Sex::Femenino), DemographicBucket::Infant);
        assert_eq!(select(2.0, Sex::Femenino), DemographicBucket::Nino);
        assert_eq!(select(12.0, Sex::Masculino), DemographicBucket::Nino);
        assert_eq!(select(12.5, Sex::Masculino), DemographicBucket::Masculino);
        assert_eq!(select(30.0, Sex::Femenino), DemographicBucket::Femenino);
    }

    #[test]
    fn test_bucket_labels_round_trip() {
        for bucket in DemographicBucket::ALL {
            assert_eq!(bucket.as_str().parse::<DemographicBucket>().unwrap(), bucket);
        }
    }
}
