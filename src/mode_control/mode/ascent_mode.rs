use super::{apoapsis_approach_mode::ApoapsisApproachMode, flight_mode::FlightMode};
use crate::flight_control::{
    ApoapsisThrottle, GravityTurn, GuidanceError, StagingManager, ThrottleLevel,
};
use crate::info;
use crate::mode_control::{mode_context::ModeContext, signal::OpExitSignal};
use async_trait::async_trait;

/// Powered full-throttle ascent.
///
/// Every poll evaluates the gravity turn on the sampled altitude and checks the watched booster
/// stage for burnout. The mode ends once apoapsis passes the approach altitude.
#[derive(Clone)]
pub(crate) struct AscentMode {}

impl AscentMode {
    const MODE_NAME: &'static str = "AscentMode";

    pub(crate) fn new() -> Self { Self {} }
}

#[async_trait]
impl FlightMode for AscentMode {
    fn type_name(&self) -> &'static str { Self::MODE_NAME }

    async fn init_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError> {
        context.f_cont_mut().set_throttle(ThrottleLevel::Full).await.map(|_| ())
    }

    async fn exec_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError> {
        let turn = GravityTurn::new(context.config());
        let staging = StagingManager::new(context.config());
        let throttle = ApoapsisThrottle::new(context.config());
        loop {
            let snapshot = context.f_cont().telemetry().snapshot(None).await?;
            turn.update(context.f_cont_mut(), snapshot.altitude).await?;
            if staging.poll(context.f_cont_mut(), snapshot.stage_propellant).await? {
                context.record_staging(snapshot.time);
            }
            if throttle.approach_reached(snapshot.apoapsis_altitude) {
                info!(
                    "Approaching target apoapsis at T+{:.1}s ({:.0} m)",
                    snapshot.time, snapshot.apoapsis_altitude
                );
                return Ok(());
            }
            context.f_cont().tick().await;
        }
    }

    fn exit_mode(&self) -> OpExitSignal { OpExitSignal::ReInit(Box::new(ApoapsisApproachMode::new())) }
}
