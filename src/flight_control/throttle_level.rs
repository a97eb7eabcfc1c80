use strum_macros::Display;

/// The discrete throttle settings the guidance ever commands.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ThrottleLevel {
    /// Full thrust for ascent and the main circularization burn.
    Full,
    /// Reduced thrust while apoapsis closes in on its target.
    Approach,
    /// Minimal thrust to null the residual burn vector.
    FineTune,
    /// Engines off.
    Cutoff,
}

impl ThrottleLevel {
    /// Throttle fraction sent to the vehicle.
    pub fn fraction(self) -> f64 {
        match self {
            ThrottleLevel::Full => 1.0,
            ThrottleLevel::Approach => 0.25,
            ThrottleLevel::FineTune => 0.05,
            ThrottleLevel::Cutoff => 0.0,
        }
    }
}
