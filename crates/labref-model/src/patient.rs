use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Sex;
use crate::error::{ModelError, Result};

/// Oldest age accepted by the entry form.
pub const MAX_AGE_YEARS: f64 = 120.0;

/// Patient header printed on every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    /// National identity document number.
    #[serde(default)]
    pub dni: String,
    /// Age in years. Infants use fractional years (1.5 = 18 months).
    pub age: f64,
    pub sex: Sex,
    /// Treating physician.
    #[serde(default)]
    pub physician: String,
    /// Report delivery date.
    pub date: NaiveDate,
}

impl PatientInfo {
    /// Check the age is a finite number of years within the form's bounds.
    pub fn validate(&self) -> Result<()> {
        if !self.age.is_finite() || self.age < 0.0 || self.age > MAX_AGE_YEARS {
            return Err(ModelError::InvalidAge {
                age: self.age,
                max: MAX_AGE_YEARS,
            });
        }
        Ok(())
    }
}
