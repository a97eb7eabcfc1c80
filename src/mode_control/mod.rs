//! The ascent and insertion state machine. Each flight mode covers a stretch of consecutive
//! phases and hands over to its successor through an [`OpExitSignal`]; the
//! [`AscentController`] runs the chain on a shared [`ModeContext`].

mod controller;
pub(crate) mod mode;
mod mode_context;
mod signal;


pub use controller::{AscentController, MissionAbort, MissionReport};
pub use mode::FlightMode;
pub use mode_context::{ModeContext, PhaseRecord};
pub use signal::OpExitSignal;
