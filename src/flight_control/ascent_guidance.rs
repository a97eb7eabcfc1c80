use super::{common::math::unit_fraction, flight_computer::FlightComputer, GuidanceError};
use crate::config::GuidanceConfig;

/// Linear gravity-turn steering law.
///
/// Pitch falls linearly from 90° (vertical) at the turn start altitude to 0° (horizontal) at
/// the turn end altitude and stays clamped outside that band. Commands are only issued when
/// the pitch has dropped by more than the hysteresis since the last command, except for the
/// very first command and for reaching horizontal, which are always sent. The commanded pitch
/// therefore never increases, even if the altitude reading jitters downwards.
#[derive(Debug, Clone, Copy)]
pub struct GravityTurn {
    start_altitude: f64,
    end_altitude: f64,
    heading: f64,
    hysteresis: f64,
}

impl GravityTurn {
    /// Pitch at the start of the turn.
    pub const MAX_PITCH: f64 = 90.0;

    pub fn new(config: &GuidanceConfig) -> Self {
        Self {
            start_altitude: config.turn_start_altitude,
            end_altitude: config.turn_end_altitude,
            heading: config.heading,
            hysteresis: config.pitch_hysteresis,
        }
    }

    /// Target pitch in degrees for the given altitude.
    pub fn target_pitch(&self, altitude: f64) -> f64 {
        let frac = unit_fraction(altitude, self.start_altitude, self.end_altitude);
        Self::MAX_PITCH - frac * Self::MAX_PITCH
    }

    /// Decides whether `target` warrants a new attitude command after `last`.
    pub fn needs_command(&self, target: f64, last: Option<f64>) -> bool {
        match last {
            None => true,
            Some(last) if target >= last => false,
            Some(last) => last - target > self.hysteresis || target <= 0.0,
        }
    }

    /// Evaluates the steering law for `altitude` and commands the vehicle if needed.
    ///
    /// # Returns
    /// The newly commanded pitch, or `None` if no command was issued.
    pub async fn update(
        &self,
        f_cont: &mut FlightComputer,
        altitude: f64,
    ) -> Result<Option<f64>, GuidanceError> {
        let target = self.target_pitch(altitude);
        if !self.needs_command(target, f_cont.state().commanded_pitch()) {
            return Ok(None);
        }
        f_cont.set_pitch_and_heading(target, self.heading).await?;
        Ok(Some(target))
    }
}
