use thiserror::Error;

/// Rejected physical or numerical parameter.
///
/// The `Display` output is the message handed to the presentation layer, so
/// its wording is kept stable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{parameter} must be a concrete number and cannot be NaN or Infinity.")]
    NotFinite { parameter: &'static str },

    #[error("{parameter} must be larger than {limit}.")]
    NotGreaterThan { parameter: &'static str, limit: f64 },

    #[error("{parameter} must be equal to or larger than {limit}.")]
    LessThan { parameter: &'static str, limit: f64 },

    #[error("{parameter} must be smaller than {limit}.")]
    NotLessThan { parameter: &'static str, limit: f64 },
}

impl ValidationError {
    pub fn parameter(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { parameter }
            | ValidationError::NotGreaterThan { parameter, .. }
            | ValidationError::LessThan { parameter, .. }
            | ValidationError::NotLessThan { parameter, .. } => parameter,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculationError {
    #[error(
        "Calculation did not converge within {max_nr_of_time_steps} time steps \
         (failure speed {failure_speed} m/s)."
    )]
    NotConverged {
        failure_speed: u32,
        max_nr_of_time_steps: u32,
    },

    #[error("Aborted and continued takeoff distances never intersect in the sweep.")]
    NoBalancedPoint,

    #[error("No failure speed candidates are available to determine the balanced field length.")]
    EmptySweep,

    #[error("Calculation was cancelled.")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),
}
