use super::{
    common::Vec3D,
    guidance_error::{GuidanceError, finite},
    vehicle_link::{NodeId, VehicleLink},
};
use std::sync::Arc;

/// One immutable sample of every quantity the guidance loop reacts to.
///
/// A snapshot is valid for the control tick it was taken in only; the next tick samples anew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    /// Seconds since the mission epoch.
    pub time: f64,
    /// Mean altitude above the surface (m).
    pub altitude: f64,
    pub apoapsis_altitude: f64,
    pub time_to_apoapsis: f64,
    /// Propellant left in the watched stage.
    pub stage_propellant: f64,
    /// Residual Δv of the active maneuver node, if one exists.
    pub residual_burn: Option<Vec3D>,
}

/// Figures of the current orbit and vehicle needed to plan the insertion burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSample {
    pub time: f64,
    pub time_to_apoapsis: f64,
    pub gravitational_parameter: f64,
    pub apoapsis_radius: f64,
    pub semi_major_axis: f64,
    pub available_thrust: f64,
    pub specific_impulse: f64,
    pub mass: f64,
}

/// Read-only access to the vehicle's telemetry.
///
/// Every getter re-samples the link and rejects non-finite values with
/// [`GuidanceError::TelemetryUnavailable`]. Nothing is cached.
#[derive(Clone)]
pub struct Telemetry {
    link: Arc<dyn VehicleLink>,
    watched_stage: u32,
}

impl Telemetry {
    pub fn new(link: Arc<dyn VehicleLink>, watched_stage: u32) -> Self {
        Self { link, watched_stage }
    }

    pub async fn time(&self) -> Result<f64, GuidanceError> {
        finite("mission_time", self.link.mission_time().await?)
    }

    pub async fn altitude(&self) -> Result<f64, GuidanceError> {
        finite("mean_altitude", self.link.mean_altitude().await?)
    }

    pub async fn apoapsis_altitude(&self) -> Result<f64, GuidanceError> {
        finite("apoapsis_altitude", self.link.apoapsis_altitude().await?)
    }

    pub async fn time_to_apoapsis(&self) -> Result<f64, GuidanceError> {
        finite("time_to_apoapsis", self.link.time_to_apoapsis().await?)
    }

    pub async fn stage_propellant(&self) -> Result<f64, GuidanceError> {
        finite("stage_propellant", self.link.stage_propellant(self.watched_stage).await?)
    }

    pub async fn residual_burn(&self, node: NodeId) -> Result<Vec3D, GuidanceError> {
        let residual = self.link.remaining_burn_vector(node).await?;
        if residual.is_finite() {
            Ok(residual)
        } else {
            Err(GuidanceError::telemetry("remaining_burn_vector", format!("{residual}")))
        }
    }

    pub async fn attitude_converged(&self) -> Result<bool, GuidanceError> {
        self.link.attitude_converged().await
    }

    /// Samples every guidance quantity once.
    pub async fn snapshot(&self, node: Option<NodeId>) -> Result<TelemetrySnapshot, GuidanceError> {
        let residual_burn = match node {
            Some(id) => Some(self.residual_burn(id).await?),
            None => None,
        };
        Ok(TelemetrySnapshot {
            time: self.time().await?,
            altitude: self.altitude().await?,
            apoapsis_altitude: self.apoapsis_altitude().await?,
            time_to_apoapsis: self.time_to_apoapsis().await?,
            stage_propellant: self.stage_propellant().await?,
            residual_burn,
        })
    }

    /// Samples the orbit and vehicle figures for burn planning.
    pub async fn orbital_sample(&self) -> Result<OrbitalSample, GuidanceError> {
        Ok(OrbitalSample {
            time: self.time().await?,
            time_to_apoapsis: self.time_to_apoapsis().await?,
            gravitational_parameter: finite(
                "gravitational_parameter",
                self.link.gravitational_parameter().await?,
            )?,
            apoapsis_radius: finite("apoapsis_radius", self.link.apoapsis_radius().await?)?,
            semi_major_axis: finite("semi_major_axis", self.link.semi_major_axis().await?)?,
            available_thrust: finite("available_thrust", self.link.available_thrust().await?)?,
            specific_impulse: finite("specific_impulse", self.link.specific_impulse().await?)?,
            mass: finite("mass", self.link.mass().await?)?,
        })
    }
}
