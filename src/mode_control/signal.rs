use crate::mode_control::mode::FlightMode;

/// Result of a finished flight mode: either the mode to run next or the end of the mission.
pub enum OpExitSignal {
    ReInit(Box<dyn FlightMode>),
    Complete,
}
