use super::{
    common::Vec3D, flight_computer::FlightComputer, orbit::ManeuverPlan,
    throttle_level::ThrottleLevel, GuidanceError,
};
use crate::{config::GuidanceConfig, info, log, warn};

/// Flies a planned maneuver: orient, wait for ignition, timed main burn, throttled fine tuning
/// and removal of the node.
///
/// Every step only moves forward. A failed step aborts the burn without retry.
#[derive(Debug, Clone, Copy)]
pub struct BurnExecutor {
    lead_time: f64,
    fine_tune_margin: f64,
}

impl BurnExecutor {
    pub fn new(config: &GuidanceConfig) -> Self {
        Self {
            lead_time: config.burn_lead_time(),
            fine_tune_margin: config.fine_tune_margin(),
        }
    }

    /// Points the vehicle along the planned burn vector and waits for the attitude to settle.
    pub async fn orient(
        &self,
        f_cont: &mut FlightComputer,
        plan: &ManeuverPlan,
    ) -> Result<(), GuidanceError> {
        f_cont.point_at(Vec3D::PROGRADE, plan.frame()).await?;
        f_cont.wait_for_attitude().await
    }

    /// Warps to shortly before ignition and waits until apoapsis is half a burn away.
    ///
    /// # Returns
    /// The mission time at which the burn window opened.
    pub async fn await_ignition(
        &self,
        f_cont: &mut FlightComputer,
        plan: &ManeuverPlan,
    ) -> Result<f64, GuidanceError> {
        let warp_target = plan.ignition_time() - self.lead_time;
        let now = f_cont.telemetry().time().await?;
        if warp_target > now {
            log!("Ignition in {:.1}s, warping to T+{warp_target:.1}s", plan.ignition_time() - now);
            f_cont.warp_to(warp_target).await?;
        } else if plan.ignition_time() < now {
            warn!("Ignition time passed {:.1}s ago, burning late", now - plan.ignition_time());
        } else {
            log!("Ignition in {:.1}s, no warp needed", plan.ignition_time() - now);
        }
        f_cont.wait_for_burn_window(plan.burn().half_burn()).await
    }

    /// Runs the engines at full thrust for the planned duration minus the fine-tune margin.
    ///
    /// The duration is held by the clock, not by telemetry. A duration that cannot be held
    /// fails before the engines are lit.
    pub async fn main_burn(
        &self,
        f_cont: &mut FlightComputer,
        plan: &ManeuverPlan,
    ) -> Result<(), GuidanceError> {
        let hold = FlightComputer::hold_duration(plan.burn_time() - self.fine_tune_margin)?;
        f_cont.set_throttle(ThrottleLevel::Full).await?;
        f_cont.hold_for(hold).await;
        Ok(())
    }

    /// Burns at minimal thrust until the along-orbit residual crosses zero, then cuts off.
    ///
    /// # Returns
    /// The residual burn vector at cutoff.
    pub async fn fine_tune(
        &self,
        f_cont: &mut FlightComputer,
        plan: &ManeuverPlan,
    ) -> Result<Vec3D, GuidanceError> {
        f_cont.set_throttle(ThrottleLevel::FineTune).await?;
        let residual = f_cont.wait_for_residual_nulled(plan.node()).await?;
        f_cont.set_throttle(ThrottleLevel::Cutoff).await?;
        info!("Burn complete, residual {residual}");
        Ok(residual)
    }

    /// Removes the plan's node from the vehicle and discards the plan.
    ///
    /// Repeated calls find no plan and do nothing.
    ///
    /// # Returns
    /// `true` if a node was removed by this call.
    pub async fn complete(
        &self,
        f_cont: &mut FlightComputer,
        plan: &mut Option<ManeuverPlan>,
    ) -> Result<bool, GuidanceError> {
        match plan.take() {
            Some(done) => {
                f_cont.remove_node(done.node()).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
