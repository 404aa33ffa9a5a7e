use super::aerodynamics_data::AerodynamicsData;
use super::checks;
use crate::constants::KILO_NEWTON;
use crate::errors::ValidationError;
use crate::utils::angle::Angle;

/// Static aircraft parameters. Owns its [`AerodynamicsData`].
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftData {
    nr_of_engines: u32,
    maximum_thrust_per_engine: f64,
    takeoff_weight: f64,
    pitch_angle_gradient: Angle,
    maximum_pitch_angle: Angle,
    rolling_resistance_coefficient: f64,
    braking_resistance_coefficient: f64,
    aerodynamics: AerodynamicsData,
}

impl AircraftData {
    /// Thrust and weight in kN. `pitch_angle_gradient` is the rotation rate per second.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nr_of_engines: u32,
        maximum_thrust_per_engine: f64,
        takeoff_weight: f64,
        pitch_angle_gradient: Angle,
        maximum_pitch_angle: Angle,
        rolling_resistance_coefficient: f64,
        braking_resistance_coefficient: f64,
        aerodynamics: AerodynamicsData,
    ) -> Result<Self, ValidationError> {
        Ok(AircraftData {
            nr_of_engines: checks::positive_count("numberOfEngines", nr_of_engines)?,
            maximum_thrust_per_engine: checks::positive(
                "maximumThrustPerEngine",
                maximum_thrust_per_engine,
            )?,
            takeoff_weight: checks::positive("takeOffWeight", takeoff_weight)?,
            pitch_angle_gradient: checks::positive_angle(
                "pitchAngleGradient",
                pitch_angle_gradient,
            )?,
            maximum_pitch_angle: checks::positive_angle(
                "maximumPitchAngle",
                maximum_pitch_angle,
            )?,
            rolling_resistance_coefficient: checks::non_negative(
                "rollingResistanceCoefficient",
                rolling_resistance_coefficient,
            )?,
            braking_resistance_coefficient: checks::non_negative(
                "brakingResistanceCoefficient",
                braking_resistance_coefficient,
            )?,
            aerodynamics,
        })
    }

    pub fn nr_of_engines(&self) -> u32 {
        self.nr_of_engines
    }

    /// kN
    pub fn maximum_thrust_per_engine(&self) -> f64 {
        self.maximum_thrust_per_engine
    }

    /// kN
    pub fn takeoff_weight(&self) -> f64 {
        self.takeoff_weight
    }

    pub fn takeoff_weight_newtons(&self) -> f64 {
        self.takeoff_weight * KILO_NEWTON
    }

    /// Thrust in N delivered by `nr_of_working_engines` engines at full power.
    pub fn thrust_newtons(&self, nr_of_working_engines: u32) -> f64 {
        f64::from(nr_of_working_engines) * self.maximum_thrust_per_engine * KILO_NEWTON
    }

    pub fn pitch_angle_gradient(&self) -> Angle {
        self.pitch_angle_gradient
    }

    pub fn maximum_pitch_angle(&self) -> Angle {
        self.maximum_pitch_angle
    }

    pub fn rolling_resistance_coefficient(&self) -> f64 {
        self.rolling_resistance_coefficient
    }

    pub fn braking_resistance_coefficient(&self) -> f64 {
        self.braking_resistance_coefficient
    }

    pub fn aerodynamics(&self) -> &AerodynamicsData {
        &self.aerodynamics
    }
}
