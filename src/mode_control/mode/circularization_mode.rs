use super::flight_mode::FlightMode;
use crate::flight_control::{BurnExecutor, GuidanceError, orbit::ManeuverPlanner};
use crate::mode_control::{mode_context::ModeContext, signal::OpExitSignal};
use crate::{info, log};
use async_trait::async_trait;

/// Plans and flies the circularization burn at apoapsis.
///
/// Walks through `PlanningBurn`, `Orienting`, `WaitingForBurn`, `Burning` and `FineTuning`
/// and ends the mission in `Complete` once the node has been removed again.
#[derive(Clone)]
pub(crate) struct CircularizationMode {}

impl CircularizationMode {
    const MODE_NAME: &'static str = "CircularizationMode";

    pub(crate) fn new() -> Self { Self {} }
}

#[async_trait]
impl FlightMode for CircularizationMode {
    fn type_name(&self) -> &'static str { Self::MODE_NAME }

    async fn exec_mode(&self, context: &mut ModeContext) -> Result<(), GuidanceError> {
        let planner = ManeuverPlanner::new(context.config());
        let executor = BurnExecutor::new(context.config());

        context.advance().await?;
        let plan = planner.plan(context.f_cont_mut()).await?;
        context.store_plan(plan);

        context.advance().await?;
        executor.orient(context.f_cont_mut(), &plan).await?;

        context.advance().await?;
        let window = executor.await_ignition(context.f_cont_mut(), &plan).await?;
        log!("Burn window open at T+{window:.1}s");

        context.advance().await?;
        executor.main_burn(context.f_cont_mut(), &plan).await?;

        context.advance().await?;
        let residual = executor.fine_tune(context.f_cont_mut(), &plan).await?;
        context.record_residual(residual);

        context.advance().await?;
        let (f_cont, active_plan) = context.f_cont_and_plan();
        executor.complete(f_cont, active_plan).await?;
        info!("Orbit insertion complete");
        Ok(())
    }

    fn exit_mode(&self) -> OpExitSignal { OpExitSignal::Complete }
}
