use super::{circularization_mode::CircularizationMode, flight_mode::FlightMode};
use crate::flight_control::GuidanceError;
use crate::info;
use crate::mode_control::{mode_context::ModeContext, signal::OpExitSignal};
use async_trait::async_trait;

/// Unpowered coast until the vehicle leaves the atmosphere.
#[derive(Clone)]
pub(crate) struct CoastMode {}

impl CoastMode {
    const MODE_NAME: &'static str = "CoastMode";

    pub(crate) fn new() -> Self { Self {} }
}

#[async_trait]
impl FlightMode for CoastMode {
    fn type_name(&self) -> &'static str { Self::MODE_NAME }

    async fn exec_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError> {
        let boundary = context.config().atmosphere_altitude;
        context.advance().await?;
        info!("Coasting out of atmosphere ({boundary:.0} m)");
        let altitude = context.f_cont().wait_for_altitude(boundary).await?;
        info!("Left atmosphere at {altitude:.0} m");
        Ok(())
    }

    fn exit_mode(&self) -> OpExitSignal { OpExitSignal::ReInit(Box::new(CircularizationMode::new())) }
}
