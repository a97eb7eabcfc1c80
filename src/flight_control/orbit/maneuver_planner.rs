use super::{
    maneuver_plan::{CircularizationBurn, ManeuverPlan},
    orbital_mechanics::{burn_duration, circularization_delta_v},
};
use crate::flight_control::{
    flight_computer::FlightComputer, telemetry::OrbitalSample, GuidanceError,
};
use crate::{config::GuidanceConfig, info};

/// Plans the circularization burn at the coming apoapsis.
#[derive(Debug, Clone, Copy)]
pub struct ManeuverPlanner {
    standard_gravity: f64,
}

impl ManeuverPlanner {
    pub fn new(config: &GuidanceConfig) -> Self {
        Self { standard_gravity: config.standard_gravity }
    }

    /// Computes Δv and burn duration from one orbital sample.
    pub fn compute(&self, sample: &OrbitalSample) -> Result<CircularizationBurn, GuidanceError> {
        let delta_v = circularization_delta_v(
            sample.gravitational_parameter,
            sample.apoapsis_radius,
            sample.semi_major_axis,
        )?;
        let burn_time = burn_duration(
            delta_v,
            sample.available_thrust,
            sample.specific_impulse,
            self.standard_gravity,
            sample.mass,
        )?;
        Ok(CircularizationBurn {
            apoapsis_time: sample.time + sample.time_to_apoapsis,
            delta_v,
            burn_time,
        })
    }

    /// Samples the orbit, computes the burn and creates its maneuver node on the vehicle.
    pub async fn plan(&self, f_cont: &mut FlightComputer) -> Result<ManeuverPlan, GuidanceError> {
        let sample = f_cont.telemetry().orbital_sample().await?;
        let burn = self.compute(&sample)?;
        info!(
            "Circularization: {:.2} m/s over {:.2}s, ignition at T+{:.1}s (apoapsis at T+{:.1}s)",
            burn.delta_v,
            burn.burn_time,
            burn.ignition_time(),
            burn.apoapsis_time
        );
        let node = f_cont.add_node(burn.apoapsis_time, burn.delta_v).await?;
        Ok(ManeuverPlan::new(node, burn))
    }
}
