use crate::aircraft::checks;
use crate::errors::ValidationError;

/// Settings of a single takeoff simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationSettings {
    failure_speed: u32,
    max_nr_of_time_steps: u32,
    time_step: f64,
}

impl CalculationSettings {
    /// `failure_speed` in m/s, `time_step` in s.
    pub fn new(
        failure_speed: u32,
        max_nr_of_time_steps: u32,
        time_step: f64,
    ) -> Result<Self, ValidationError> {
        Ok(CalculationSettings {
            failure_speed,
            max_nr_of_time_steps: checks::positive_count(
                "maximumNrOfTimeSteps",
                max_nr_of_time_steps,
            )?,
            time_step: checks::positive("timeStep", time_step)?,
        })
    }

    pub fn failure_speed(&self) -> u32 {
        self.failure_speed
    }

    pub fn max_nr_of_time_steps(&self) -> u32 {
        self.max_nr_of_time_steps
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Same step configuration for another failure speed.
    pub fn with_failure_speed(&self, failure_speed: u32) -> Self {
        CalculationSettings {
            failure_speed,
            ..*self
        }
    }
}
