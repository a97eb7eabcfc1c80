use crate::flight_control::vehicle_link::{NodeId, ReferenceFrame};

/// Closed-form figures of a circularization burn, before a node exists on the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularizationBurn {
    /// Mission time of the apoapsis passage the burn is centered on.
    pub apoapsis_time: f64,
    /// Prograde Δv (m/s).
    pub delta_v: f64,
    /// Full-throttle burn duration (s).
    pub burn_time: f64,
}

impl CircularizationBurn {
    /// Ignition time estimate, placing half the burn before apoapsis.
    pub fn ignition_time(&self) -> f64 { self.apoapsis_time - self.burn_time / 2.0 }

    pub fn half_burn(&self) -> f64 { self.burn_time / 2.0 }
}

/// A planned burn bound to its maneuver node.
///
/// Created by the planner, consumed by the burn executor which removes the node when done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverPlan {
    node: NodeId,
    burn: CircularizationBurn,
}

impl ManeuverPlan {
    pub fn new(node: NodeId, burn: CircularizationBurn) -> Self { Self { node, burn } }

    pub fn node(&self) -> NodeId { self.node }
    pub fn burn(&self) -> &CircularizationBurn { &self.burn }
    pub fn ignition_time(&self) -> f64 { self.burn.ignition_time() }
    pub fn burn_time(&self) -> f64 { self.burn.burn_time }

    /// Frame in which the burn direction and residual are expressed.
    pub fn frame(&self) -> ReferenceFrame { ReferenceFrame::ManeuverNode(self.node) }
}
