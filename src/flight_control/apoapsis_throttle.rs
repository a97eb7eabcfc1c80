use super::{flight_computer::FlightComputer, throttle_level::ThrottleLevel, GuidanceError};
use crate::{config::GuidanceConfig, info};

/// Two-stage throttle reduction to hit the target apoapsis without overshooting it.
///
/// Full throttle ends once apoapsis passes the approach altitude (a fraction of the target),
/// the engines then run at [`ThrottleLevel::Approach`] until apoapsis reaches the target and
/// are cut immediately afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ApoapsisThrottle {
    approach_altitude: f64,
    target_altitude: f64,
}

impl ApoapsisThrottle {
    pub fn new(config: &GuidanceConfig) -> Self {
        Self {
            approach_altitude: config.approach_altitude(),
            target_altitude: config.target_altitude,
        }
    }

    /// Whether full-throttle ascent should end at the sampled apoapsis.
    pub fn approach_reached(&self, apoapsis: f64) -> bool { apoapsis > self.approach_altitude }

    /// Reduces thrust and waits until apoapsis reaches the target.
    ///
    /// # Returns
    /// The first apoapsis altitude sampled at or above the target.
    pub async fn approach(&self, f_cont: &mut FlightComputer) -> Result<f64, GuidanceError> {
        f_cont.set_throttle(ThrottleLevel::Approach).await?;
        let apoapsis = f_cont.wait_for_apoapsis(self.target_altitude).await?;
        info!("Target apoapsis reached ({apoapsis:.0} m)");
        Ok(apoapsis)
    }

    /// Cuts the engines.
    pub async fn cut_off(&self, f_cont: &mut FlightComputer) -> Result<(), GuidanceError> {
        f_cont.set_throttle(ThrottleLevel::Cutoff).await.map(|_| ())
    }
}
