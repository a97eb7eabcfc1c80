use crate::flight_control::GuidanceError;
use crate::mode_control::{mode_context::ModeContext, signal::OpExitSignal};
use async_trait::async_trait;

/// One stage of the ascent state machine.
///
/// The controller runs `init_mode` followed by `exec_mode` on the shared [`ModeContext`] and
/// then asks `exit_mode` for the successor. Any error ends the mission in the current phase.
#[async_trait]
pub trait FlightMode: Send + Sync {
    fn type_name(&self) -> &'static str;

    /// Commands that open the mode. Does nothing by default.
    async fn init_mode(&self, _context: &mut ModeContext) -> Result<(), GuidanceError> {
        Ok(())
    }

    async fn exec_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError>;

    fn exit_mode(&self) -> OpExitSignal;
}
