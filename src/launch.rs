//! Pre-launch setup and countdown, run once before the ascent controller takes over.

use crate::config::GuidanceConfig;
use crate::flight_control::{FlightComputer, GuidanceError, ThrottleLevel};
use crate::{info, log};
use std::time::Duration;
use tokio::time::sleep;

/// Pitch held on the pad and through the vertical climb.
const LAUNCH_PITCH: f64 = 90.0;

#[derive(Debug, Clone, Copy)]
pub struct LaunchSequence {
    countdown_secs: u64,
    heading: f64,
}

impl LaunchSequence {
    pub fn new(config: &GuidanceConfig) -> Self {
        Self { countdown_secs: config.countdown_secs, heading: config.heading }
    }

    /// Releases stability assist and reaction control and opens the throttle.
    pub async fn prepare(&self, f_cont: &mut FlightComputer) -> Result<(), GuidanceError> {
        f_cont.set_stability_assist(false).await?;
        f_cont.set_reaction_control(false).await?;
        f_cont.set_throttle(ThrottleLevel::Full).await.map(|_| ())
    }

    /// Counts down one log line per second.
    pub async fn countdown(&self) {
        for remaining in (1..=self.countdown_secs).rev() {
            log!("{remaining}...");
            sleep(Duration::from_secs(1)).await;
        }
    }

    /// Fires the first stage and hands attitude control to the autopilot pointing straight up.
    pub async fn lift_off(&self, f_cont: &mut FlightComputer) -> Result<(), GuidanceError> {
        f_cont.ignite().await?;
        info!("Lift-off");
        f_cont.engage_autopilot().await?;
        f_cont.set_pitch_and_heading(LAUNCH_PITCH, self.heading).await
    }

    pub async fn execute(&self, f_cont: &mut FlightComputer) -> Result<(), GuidanceError> {
        self.prepare(f_cont).await?;
        self.countdown().await;
        self.lift_off(f_cont).await
    }
}
