use super::checks;
use crate::errors::ValidationError;
use crate::utils::angle::Angle;

/// Static aerodynamic coefficients of the aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct AerodynamicsData {
    aspect_ratio: f64,
    wing_area: f64,
    zero_lift_angle_of_attack: Angle,
    lift_coefficient_gradient: f64,
    maximum_lift_coefficient: f64,
    rest_drag_coefficient_without_engine_failure: f64,
    rest_drag_coefficient_with_engine_failure: f64,
    oswald_factor: f64,
}

impl AerodynamicsData {
    /// Wing area in m², lift coefficient gradient in 1/rad.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        aspect_ratio: f64,
        wing_area: f64,
        zero_lift_angle_of_attack: Angle,
        lift_coefficient_gradient: f64,
        maximum_lift_coefficient: f64,
        rest_drag_coefficient_without_engine_failure: f64,
        rest_drag_coefficient_with_engine_failure: f64,
        oswald_factor: f64,
    ) -> Result<Self, ValidationError> {
        Ok(AerodynamicsData {
            aspect_ratio: checks::positive("aspectRatio", aspect_ratio)?,
            wing_area: checks::positive("wingArea", wing_area)?,
            zero_lift_angle_of_attack: checks::finite_angle(
                "zeroLiftAngleOfAttack",
                zero_lift_angle_of_attack,
            )?,
            lift_coefficient_gradient: checks::positive(
                "liftCoefficientGradient",
                lift_coefficient_gradient,
            )?,
            maximum_lift_coefficient: checks::positive(
                "maximumLiftCoefficient",
                maximum_lift_coefficient,
            )?,
            rest_drag_coefficient_without_engine_failure: checks::non_negative(
                "restDragCoefficientWithoutEngineFailure",
                rest_drag_coefficient_without_engine_failure,
            )?,
            rest_drag_coefficient_with_engine_failure: checks::non_negative(
                "restDragCoefficientWithEngineFailure",
                rest_drag_coefficient_with_engine_failure,
            )?,
            oswald_factor: checks::positive("oswaldFactor", oswald_factor)?,
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn wing_area(&self) -> f64 {
        self.wing_area
    }

    pub fn zero_lift_angle_of_attack(&self) -> Angle {
        self.zero_lift_angle_of_attack
    }

    pub fn lift_coefficient_gradient(&self) -> f64 {
        self.lift_coefficient_gradient
    }

    pub fn maximum_lift_coefficient(&self) -> f64 {
        self.maximum_lift_coefficient
    }

    pub fn rest_drag_coefficient_without_engine_failure(&self) -> f64 {
        self.rest_drag_coefficient_without_engine_failure
    }

    pub fn rest_drag_coefficient_with_engine_failure(&self) -> f64 {
        self.rest_drag_coefficient_with_engine_failure
    }

    pub fn oswald_factor(&self) -> f64 {
        self.oswald_factor
    }
}
