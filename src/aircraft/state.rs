use crate::utils::angle::Angle;

/// Longitudinal state of the aircraft at one instant.
///
/// The default state is the aircraft standing at brake release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AircraftState {
    pub pitch_angle: Angle,
    pub flight_path_angle: Angle,
    /// m/s
    pub true_airspeed: f64,
    /// m
    pub height: f64,
    /// m
    pub distance: f64,
}

impl AircraftState {
    pub fn new(
        pitch_angle: Angle,
        flight_path_angle: Angle,
        true_airspeed: f64,
        height: f64,
        distance: f64,
    ) -> Self {
        AircraftState {
            pitch_angle,
            flight_path_angle,
            true_airspeed,
            height,
            distance,
        }
    }

    pub fn angle_of_attack(&self) -> Angle {
        self.pitch_angle - self.flight_path_angle
    }
}

/// Time derivatives of an [`AircraftState`] for one time step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AircraftAccelerations {
    /// Per second.
    pub pitch_rate: Angle,
    /// m/s
    pub climb_rate: f64,
    /// m/s²
    pub true_airspeed_rate: f64,
    /// Per second.
    pub flight_path_rate: Angle,
}

impl AircraftAccelerations {
    pub fn new(
        pitch_rate: Angle,
        climb_rate: f64,
        true_airspeed_rate: f64,
        flight_path_rate: Angle,
    ) -> Self {
        AircraftAccelerations {
            pitch_rate,
            climb_rate,
            true_airspeed_rate,
            flight_path_rate,
        }
    }
}
