use super::{coast_mode::CoastMode, flight_mode::FlightMode};
use crate::flight_control::{ApoapsisThrottle, GuidanceError};
use crate::mode_control::{mode_context::ModeContext, signal::OpExitSignal};
use async_trait::async_trait;

/// Reduced-thrust approach to the target apoapsis followed by engine cutoff.
#[derive(Clone)]
pub(crate) struct ApoapsisApproachMode {}

impl ApoapsisApproachMode {
    const MODE_NAME: &'static str = "ApoapsisApproachMode";

    pub(crate) fn new() -> Self { Self {} }
}

#[async_trait]
impl FlightMode for ApoapsisApproachMode {
    fn type_name(&self) -> &'static str { Self::MODE_NAME }

    async fn exec_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError> {
        let throttle = ApoapsisThrottle::new(context.config());
        context.advance().await?;
        throttle.approach(context.f_cont_mut()).await?;
        context.advance().await?;
        throttle.cut_off(context.f_cont_mut()).await
    }

    fn exit_mode(&self) -> OpExitSignal { OpExitSignal::ReInit(Box::new(CoastMode::new())) }
}
