mod apoapsis_approach_mode;
mod ascent_mode;
mod circularization_mode;
mod coast_mode;
mod flight_mode;

pub(crate) use ascent_mode::AscentMode;
pub use flight_mode::FlightMode;
