use strum_macros::Display;

/// Fatal conditions that abort the guidance state machine.
///
/// None of these are retried: the controller stops at the first error and hands it back to
/// its caller together with the phase it occurred in.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum GuidanceError {
    /// A telemetry read failed or produced a non-finite value.
    #[strum(to_string = "telemetry unavailable: {quantity} ({detail})")]
    TelemetryUnavailable { quantity: &'static str, detail: String },
    /// The vehicle refused a command.
    #[strum(to_string = "actuation rejected: {command} ({detail})")]
    ActuationRejected { command: &'static str, detail: String },
    /// The planned maneuver cannot be flown with the given orbit or vehicle figures.
    #[strum(to_string = "physically infeasible plan: {reason}")]
    PhysicallyInfeasiblePlan { reason: String },
    /// A configuration value is out of its admissible range.
    #[strum(to_string = "invalid configuration: {field} ({reason})")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl std::error::Error for GuidanceError {}

impl GuidanceError {
    pub fn telemetry(quantity: &'static str, detail: impl Into<String>) -> Self {
        GuidanceError::TelemetryUnavailable { quantity, detail: detail.into() }
    }

    pub fn rejected(command: &'static str, detail: impl Into<String>) -> Self {
        GuidanceError::ActuationRejected { command, detail: detail.into() }
    }

    pub fn infeasible(reason: impl Into<String>) -> Self {
        GuidanceError::PhysicallyInfeasiblePlan { reason: reason.into() }
    }

    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        GuidanceError::InvalidConfiguration { field, reason: reason.into() }
    }
}

/// Checks a sampled quantity for finiteness before it enters any control decision.
pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, GuidanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GuidanceError::telemetry(quantity, format!("non-finite value {value}")))
    }
}
