use super::{common::Vec3D, guidance_error::GuidanceError};
use async_trait::async_trait;
use std::fmt::{Display, Formatter};

/// Handle of a maneuver node created on the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "node#{}", self.0) }
}

/// Reference frame in which a direction or residual burn vector is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    /// The vehicle's orbital frame.
    VesselOrbital,
    /// The frame of a maneuver node; `y` points along the planned burn.
    ManeuverNode(NodeId),
}

impl Display for ReferenceFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceFrame::VesselOrbital => write!(f, "orbital"),
            ReferenceFrame::ManeuverNode(node) => write!(f, "frame of {node}"),
        }
    }
}

/// Contract of the external vehicle control and telemetry service.
///
/// Connection setup, data marshaling and the simulation itself live behind this trait.
/// Every read samples the current value anew; every command is fire-and-forget except for
/// the reported refusal. Implementations map transport failures to
/// [`GuidanceError::TelemetryUnavailable`] and refusals to [`GuidanceError::ActuationRejected`].
#[async_trait]
pub trait VehicleLink: Send + Sync {
    /// Universal mission time in seconds since the mission epoch.
    async fn mission_time(&self) -> Result<f64, GuidanceError>;
    async fn mean_altitude(&self) -> Result<f64, GuidanceError>;
    async fn apoapsis_altitude(&self) -> Result<f64, GuidanceError>;
    async fn time_to_apoapsis(&self) -> Result<f64, GuidanceError>;
    /// Propellant left in the given decouple stage.
    async fn stage_propellant(&self, stage: u32) -> Result<f64, GuidanceError>;
    /// Gravitational parameter μ (m³/s²) of the central body.
    async fn gravitational_parameter(&self) -> Result<f64, GuidanceError>;
    /// Apoapsis measured from the center of the central body (m).
    async fn apoapsis_radius(&self) -> Result<f64, GuidanceError>;
    async fn semi_major_axis(&self) -> Result<f64, GuidanceError>;
    /// Thrust (N) the active engines can deliver at full throttle.
    async fn available_thrust(&self) -> Result<f64, GuidanceError>;
    /// Specific impulse (s) of the active engines.
    async fn specific_impulse(&self) -> Result<f64, GuidanceError>;
    /// Total vehicle mass (kg).
    async fn mass(&self) -> Result<f64, GuidanceError>;
    /// Whether the autopilot reports its attitude target as reached.
    async fn attitude_converged(&self) -> Result<bool, GuidanceError>;

    async fn set_throttle(&self, fraction: f64) -> Result<(), GuidanceError>;
    async fn activate_next_stage(&self) -> Result<(), GuidanceError>;
    async fn set_pitch_and_heading(&self, pitch: f64, heading: f64) -> Result<(), GuidanceError>;
    async fn set_target_direction(
        &self,
        direction: Vec3D,
        frame: ReferenceFrame,
    ) -> Result<(), GuidanceError>;
    /// Requests a time-acceleration jump to the given mission time; no completion is reported.
    async fn warp_to(&self, mission_time: f64) -> Result<(), GuidanceError>;
    /// Creates a maneuver node at the given mission time with a purely prograde Δv.
    async fn add_node(&self, mission_time: f64, prograde: f64) -> Result<NodeId, GuidanceError>;
    async fn remove_node(&self, node: NodeId) -> Result<(), GuidanceError>;
    /// Δv still to be applied for the node, expressed in the node's frame.
    async fn remaining_burn_vector(&self, node: NodeId) -> Result<Vec3D, GuidanceError>;

    async fn set_stability_assist(&self, enabled: bool) -> Result<(), GuidanceError>;
    async fn set_reaction_control(&self, enabled: bool) -> Result<(), GuidanceError>;
    async fn engage_autopilot(&self) -> Result<(), GuidanceError>;
}
