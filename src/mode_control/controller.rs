use super::{
    mode::{AscentMode, FlightMode},
    mode_context::{ModeContext, PhaseRecord},
    signal::OpExitSignal,
};
use crate::config::GuidanceConfig;
use crate::flight_control::{
    FlightPhase, GuidanceError, VehicleLink, common::Vec3D, orbit::CircularizationBurn,
};
use crate::launch::LaunchSequence;
use crate::{error, info};
use std::{fmt, sync::Arc};

/// Summary of a completed mission.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionReport {
    pub phases: Vec<PhaseRecord>,
    pub final_phase: FlightPhase,
    /// Mission time of the booster separation, `None` if the stage never burned out.
    pub staging_time: Option<f64>,
    pub burn: Option<CircularizationBurn>,
    /// Residual burn vector at the final cutoff.
    pub final_residual: Option<Vec3D>,
}

/// A mission that ended on a fatal guidance error.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionAbort {
    pub phase: FlightPhase,
    pub error: GuidanceError,
}

impl fmt::Display for MissionAbort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mission aborted during {}: {}", self.phase, self.error)
    }
}

impl std::error::Error for MissionAbort {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.error) }
}

/// Drives the flight modes from lift-off to a circular orbit.
///
/// The controller is consumed by [`AscentController::run`]; a new mission needs a new
/// controller.
pub struct AscentController {
    context: ModeContext,
}

impl AscentController {
    /// Creates a controller after validating `config`.
    pub fn new(link: Arc<dyn VehicleLink>, config: GuidanceConfig) -> Result<Self, GuidanceError> {
        config.validate()?;
        Ok(Self { context: ModeContext::new(link, config) })
    }

    /// Runs the pre-launch setup and countdown on this controller's vehicle.
    pub async fn launch(&mut self) -> Result<(), MissionAbort> {
        let sequence = LaunchSequence::new(self.context.config());
        match sequence.execute(self.context.f_cont_mut()).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.abort(err)),
        }
    }

    /// Flies the state machine to completion.
    ///
    /// # Returns
    /// The [`MissionReport`], or the phase and error of the first failure. No further commands
    /// are issued after a failure.
    pub async fn run(mut self) -> Result<MissionReport, MissionAbort> {
        if let Err(err) = self.context.begin().await {
            return Err(self.abort(err));
        }
        let mut mode: Box<dyn FlightMode> = Box::new(AscentMode::new());
        loop {
            info!("Starting {} in phase {}", mode.type_name(), self.context.phase());
            if let Err(err) = Self::exec(mode.as_ref(), &mut self.context).await {
                return Err(self.abort(err));
            }
            match mode.exit_mode() {
                OpExitSignal::ReInit(next) => mode = next,
                OpExitSignal::Complete => break,
            }
        }
        info!("Mission complete after {} phases", self.context.history().len());
        Ok(self.report())
    }

    async fn exec(mode: &dyn FlightMode, context: &mut ModeContext) -> Result<(), GuidanceError> {
        mode.init_mode(context).await?;
        mode.exec_mode(context).await
    }

    fn abort(&self, error: GuidanceError) -> MissionAbort {
        let abort = MissionAbort { phase: self.context.phase(), error };
        error!("{abort}");
        abort
    }

    fn report(&self) -> MissionReport {
        MissionReport {
            phases: self.context.history().to_vec(),
            final_phase: self.context.phase(),
            staging_time: self.context.staging_time(),
            burn: self.context.executed_burn().copied(),
            final_residual: self.context.final_residual(),
        }
    }
}
