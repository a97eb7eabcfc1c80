use super::{
    common::Vec3D,
    guidance_error::GuidanceError,
    telemetry::Telemetry,
    throttle_level::ThrottleLevel,
    vehicle_link::{NodeId, ReferenceFrame, VehicleLink},
};
use crate::{cmd, config::GuidanceConfig, log};
use std::{sync::Arc, time::Duration};
use tokio::time::sleep;

/// Command state last issued by the guidance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleControlState {
    /// Last commanded throttle setting, `None` before the first throttle command.
    throttle: Option<ThrottleLevel>,
    /// Last commanded pitch in degrees, `None` before the first attitude command.
    commanded_pitch: Option<f64>,
    /// Set once the watched booster stage has been dropped, never cleared.
    srbs_separated: bool,
}

impl VehicleControlState {
    pub fn throttle(&self) -> Option<ThrottleLevel> { self.throttle }
    pub fn commanded_pitch(&self) -> Option<f64> { self.commanded_pitch }
    pub fn srbs_separated(&self) -> bool { self.srbs_separated }
}

/// The single writer of vehicle commands.
///
/// Wraps the [`VehicleLink`], keeps the [`VehicleControlState`] and provides the cooperative
/// polling waits every guidance phase is built from. A wait samples telemetry, checks its
/// trigger condition and sleeps for the poll interval before sampling again.
pub struct FlightComputer {
    link: Arc<dyn VehicleLink>,
    telemetry: Telemetry,
    state: VehicleControlState,
    poll_interval: Duration,
}

impl FlightComputer {
    pub fn new(link: Arc<dyn VehicleLink>, config: &GuidanceConfig) -> Self {
        let telemetry = Telemetry::new(Arc::clone(&link), config.watched_stage);
        Self {
            link,
            telemetry,
            state: VehicleControlState::default(),
            poll_interval: config.poll_interval(),
        }
    }

    pub fn telemetry(&self) -> &Telemetry { &self.telemetry }

    pub fn state(&self) -> &VehicleControlState { &self.state }

    /// Commands a throttle setting. Settings equal to the last commanded one are not re-sent.
    ///
    /// # Returns
    /// `true` if a command was issued.
    pub async fn set_throttle(&mut self, level: ThrottleLevel) -> Result<bool, GuidanceError> {
        if self.state.throttle == Some(level) {
            return Ok(false);
        }
        cmd!("Throttle {level} ({:.2})", level.fraction());
        self.link.set_throttle(level.fraction()).await?;
        self.state.throttle = Some(level);
        Ok(true)
    }

    /// Commands a pitch/heading attitude target and remembers the pitch for hysteresis.
    pub async fn set_pitch_and_heading(
        &mut self,
        pitch: f64,
        heading: f64,
    ) -> Result<(), GuidanceError> {
        cmd!("Attitude pitch {pitch:.2}°, heading {heading:.1}°");
        self.link.set_pitch_and_heading(pitch, heading).await?;
        self.state.commanded_pitch = Some(pitch);
        Ok(())
    }

    /// Drops the booster stage once. Later calls are no-ops.
    ///
    /// # Returns
    /// `true` if the separation was commanded by this call.
    pub async fn separate_boosters(&mut self) -> Result<bool, GuidanceError> {
        if self.state.srbs_separated {
            return Ok(false);
        }
        cmd!("Activating next stage (booster separation)");
        self.link.activate_next_stage().await?;
        self.state.srbs_separated = true;
        Ok(true)
    }

    /// Activates the next stage without touching the separation flag, used for ignition.
    pub async fn ignite(&mut self) -> Result<(), GuidanceError> {
        cmd!("Activating next stage (ignition)");
        self.link.activate_next_stage().await
    }

    pub async fn point_at(
        &mut self,
        direction: Vec3D,
        frame: ReferenceFrame,
    ) -> Result<(), GuidanceError> {
        cmd!("Attitude direction {direction} in {frame}");
        self.link.set_target_direction(direction, frame).await
    }

    pub async fn warp_to(&mut self, mission_time: f64) -> Result<(), GuidanceError> {
        cmd!("Time warp to T+{mission_time:.1}s");
        self.link.warp_to(mission_time).await
    }

    pub async fn add_node(
        &mut self,
        mission_time: f64,
        prograde: f64,
    ) -> Result<NodeId, GuidanceError> {
        let node = self.link.add_node(mission_time, prograde).await?;
        cmd!("Created {node} at T+{mission_time:.1}s with {prograde:.2} m/s prograde");
        Ok(node)
    }

    pub async fn remove_node(&mut self, node: NodeId) -> Result<(), GuidanceError> {
        cmd!("Removing {node}");
        self.link.remove_node(node).await
    }

    pub async fn set_stability_assist(&mut self, enabled: bool) -> Result<(), GuidanceError> {
        cmd!("Stability assist {}", if enabled { "on" } else { "off" });
        self.link.set_stability_assist(enabled).await
    }

    pub async fn set_reaction_control(&mut self, enabled: bool) -> Result<(), GuidanceError> {
        cmd!("Reaction control {}", if enabled { "on" } else { "off" });
        self.link.set_reaction_control(enabled).await
    }

    pub async fn engage_autopilot(&mut self) -> Result<(), GuidanceError> {
        cmd!("Engaging autopilot");
        self.link.engage_autopilot().await
    }

    /// Waits until the apoapsis altitude reaches `target`.
    ///
    /// # Returns
    /// The first sampled apoapsis altitude at or above `target`.
    pub async fn wait_for_apoapsis(&self, target: f64) -> Result<f64, GuidanceError> {
        loop {
            let apoapsis = self.telemetry.apoapsis_altitude().await?;
            if apoapsis >= target {
                return Ok(apoapsis);
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Waits until the altitude exceeds `boundary`.
    pub async fn wait_for_altitude(&self, boundary: f64) -> Result<f64, GuidanceError> {
        loop {
            let altitude = self.telemetry.altitude().await?;
            if altitude > boundary {
                return Ok(altitude);
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Waits until the autopilot reports the attitude target as reached.
    pub async fn wait_for_attitude(&self) -> Result<(), GuidanceError> {
        while !self.telemetry.attitude_converged().await? {
            sleep(self.poll_interval).await;
        }
        Ok(())
    }

    /// Waits until apoapsis is no more than `half_burn` seconds away.
    ///
    /// # Returns
    /// The mission time at which the burn window opened.
    pub async fn wait_for_burn_window(&self, half_burn: f64) -> Result<f64, GuidanceError> {
        loop {
            if self.telemetry.time_to_apoapsis().await? - half_burn <= 0.0 {
                return self.telemetry.time().await;
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Waits until the along-orbit component of the node's residual burn vector is no longer
    /// positive, i.e. the burn has reached or overshot its target.
    pub async fn wait_for_residual_nulled(&self, node: NodeId) -> Result<Vec3D, GuidanceError> {
        loop {
            let snapshot = self.telemetry.snapshot(Some(node)).await?;
            if let Some(residual) = snapshot.residual_burn.filter(|r| r.y() <= 0.0) {
                log!("Residual nulled at T+{:.2}s", snapshot.time);
                return Ok(residual);
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Converts a hold time in seconds into a [`Duration`]. Negative times hold for zero.
    ///
    /// # Errors
    /// [`GuidanceError::PhysicallyInfeasiblePlan`] if the time is NaN or not representable.
    pub fn hold_duration(secs: f64) -> Result<Duration, GuidanceError> {
        let infeasible = || GuidanceError::infeasible(format!("cannot hold commands for {secs}s"));
        if secs.is_nan() {
            return Err(infeasible());
        }
        Duration::try_from_secs_f64(secs.max(0.0)).map_err(|_| infeasible())
    }

    /// Holds the current commands for a fixed duration without looking at telemetry.
    ///
    /// This is the only time-based wait of the guidance.
    pub async fn hold_for(&self, duration: Duration) {
        log!("Holding commands for {:.2}s", duration.as_secs_f64());
        sleep(duration).await;
    }

    /// Sleeps for one poll interval.
    pub async fn tick(&self) { sleep(self.poll_interval).await; }
}
