//! Parameter checks shared by the validated constructors.

use crate::errors::ValidationError;
use crate::utils::angle::Angle;

pub fn finite(parameter: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { parameter })
    }
}

pub fn finite_angle(parameter: &'static str, value: Angle) -> Result<Angle, ValidationError> {
    finite(parameter, value.radians()).map(Angle::from_radians)
}

/// Finite and strictly larger than zero.
pub fn positive(parameter: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotGreaterThan {
            parameter,
            limit: 0.0,
        })
    }
}

pub fn positive_angle(parameter: &'static str, value: Angle) -> Result<Angle, ValidationError> {
    positive(parameter, value.radians()).map(Angle::from_radians)
}

/// Finite and zero or larger.
pub fn non_negative(parameter: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::LessThan {
            parameter,
            limit: 0.0,
        })
    }
}

pub fn positive_count(parameter: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ValidationError::NotGreaterThan {
            parameter,
            limit: 0.0,
        })
    }
}
