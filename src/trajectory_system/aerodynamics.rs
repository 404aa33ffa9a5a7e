use std::f64::consts::PI;

use crate::aircraft::aerodynamics_data::AerodynamicsData;
use crate::utils::angle::Angle;

/// Lift coefficient of the linear lift curve, saturated at the maximum lift
/// coefficient. Post-stall lift loss is not modelled.
pub fn calculate_lift_coefficient(aerodynamics: &AerodynamicsData, angle_of_attack: Angle) -> f64 {
    let lift_coefficient = (angle_of_attack - aerodynamics.zero_lift_angle_of_attack()).radians()
        * aerodynamics.lift_coefficient_gradient();

    lift_coefficient.min(aerodynamics.maximum_lift_coefficient())
}

/// Lift in N.
pub fn calculate_lift(
    aerodynamics: &AerodynamicsData,
    angle_of_attack: Angle,
    density: f64,
    true_airspeed: f64,
) -> f64 {
    calculate_dynamic_pressure(density, true_airspeed)
        * aerodynamics.wing_area()
        * calculate_lift_coefficient(aerodynamics, angle_of_attack)
}

/// Drag in N with all engines running.
pub fn calculate_drag_without_engine_failure(
    aerodynamics: &AerodynamicsData,
    lift_coefficient: f64,
    density: f64,
    true_airspeed: f64,
) -> f64 {
    calculate_drag(
        aerodynamics,
        aerodynamics.rest_drag_coefficient_without_engine_failure(),
        lift_coefficient,
        density,
        true_airspeed,
    )
}

/// Drag in N with a failed engine (windmilling engine and rudder deflection
/// included in the rest drag coefficient).
pub fn calculate_drag_with_engine_failure(
    aerodynamics: &AerodynamicsData,
    lift_coefficient: f64,
    density: f64,
    true_airspeed: f64,
) -> f64 {
    calculate_drag(
        aerodynamics,
        aerodynamics.rest_drag_coefficient_with_engine_failure(),
        lift_coefficient,
        density,
        true_airspeed,
    )
}

/// Stall speed in m/s for a weight in N.
pub fn calculate_stall_speed(aerodynamics: &AerodynamicsData, weight: f64, density: f64) -> f64 {
    (2.0 * weight / (density * aerodynamics.wing_area() * aerodynamics.maximum_lift_coefficient()))
        .sqrt()
}

fn calculate_drag(
    aerodynamics: &AerodynamicsData,
    rest_drag_coefficient: f64,
    lift_coefficient: f64,
    density: f64,
    true_airspeed: f64,
) -> f64 {
    let induced_drag_coefficient = lift_coefficient.powi(2)
        / (PI * aerodynamics.aspect_ratio() * aerodynamics.oswald_factor());

    calculate_dynamic_pressure(density, true_airspeed)
        * aerodynamics.wing_area()
        * (rest_drag_coefficient + induced_drag_coefficient)
}

fn calculate_dynamic_pressure(density: f64, true_airspeed: f64) -> f64 {
    0.5 * density * true_airspeed.powi(2)
}
