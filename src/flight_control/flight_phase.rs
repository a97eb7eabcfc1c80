use strum_macros::{Display, EnumIter};

/// Phases of the ascent and insertion state machine, in flight order.
///
/// Transitions only ever go to [`FlightPhase::next`]; no phase is entered twice.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum FlightPhase {
    Ascent,
    ApproachingApoapsis,
    ThrottleDown,
    Coasting,
    PlanningBurn,
    Orienting,
    WaitingForBurn,
    Burning,
    FineTuning,
    Complete,
}

impl FlightPhase {
    /// The phase following `self`, or `None` for [`FlightPhase::Complete`].
    pub fn next(self) -> Option<FlightPhase> {
        match self {
            FlightPhase::Ascent => Some(FlightPhase::ApproachingApoapsis),
            FlightPhase::ApproachingApoapsis => Some(FlightPhase::ThrottleDown),
            FlightPhase::ThrottleDown => Some(FlightPhase::Coasting),
            FlightPhase::Coasting => Some(FlightPhase::PlanningBurn),
            FlightPhase::PlanningBurn => Some(FlightPhase::Orienting),
            FlightPhase::Orienting => Some(FlightPhase::WaitingForBurn),
            FlightPhase::WaitingForBurn => Some(FlightPhase::Burning),
            FlightPhase::Burning => Some(FlightPhase::FineTuning),
            FlightPhase::FineTuning => Some(FlightPhase::Complete),
            FlightPhase::Complete => None,
        }
    }
}
