//! Ascent and orbit-insertion guidance for a staged launch vehicle.
//!
//! The [`AscentController`] flies a vehicle reached through a [`VehicleLink`] from lift-off
//! through a gravity turn, booster separation and apoapsis targeting to a circularization burn
//! at apoapsis. An optional [`LaunchSequence`] performs the pad setup and countdown beforehand.
#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

mod logger;

pub mod config;
pub mod flight_control;
pub mod launch;
pub mod mode_control;

pub use config::GuidanceConfig;
pub use flight_control::{FlightPhase, GuidanceError, VehicleLink};
pub use launch::LaunchSequence;
pub use mode_control::{AscentController, MissionAbort, MissionReport};
