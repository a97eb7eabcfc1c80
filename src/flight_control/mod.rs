//! Leaf layer of the guidance: the vehicle contract, telemetry access, the flight computer
//! issuing commands, and the individual guidance components driven by the mode state machine.

mod apoapsis_throttle;
mod ascent_guidance;
mod burn_executor;
pub mod common;
mod flight_computer;
mod flight_phase;
mod guidance_error;
pub mod orbit;
mod staging_manager;
mod telemetry;
mod throttle_level;
mod vehicle_link;

#[cfg(test)]
pub(crate) mod test_vehicle;

pub use apoapsis_throttle::ApoapsisThrottle;
pub use ascent_guidance::GravityTurn;
pub use burn_executor::BurnExecutor;
pub use flight_computer::{FlightComputer, VehicleControlState};
pub use flight_phase::FlightPhase;
pub use guidance_error::GuidanceError;
pub use staging_manager::StagingManager;
pub use telemetry::{OrbitalSample, Telemetry, TelemetrySnapshot};
pub use throttle_level::ThrottleLevel;
pub use vehicle_link::{NodeId, ReferenceFrame, VehicleLink};
