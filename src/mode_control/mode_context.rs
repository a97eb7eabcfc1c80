use crate::config::GuidanceConfig;
use crate::flight_control::{
    FlightComputer, FlightPhase, GuidanceError, VehicleLink,
    common::Vec3D,
    orbit::{CircularizationBurn, ManeuverPlan},
};
use crate::info;
use std::sync::Arc;

/// Entry of the phase history: which phase started at which mission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRecord {
    pub phase: FlightPhase,
    pub entered_at: f64,
}

/// State shared by all flight modes of one controller run.
///
/// Owns the [`FlightComputer`] and thereby the vehicle control state, the current phase with
/// its history and the active maneuver plan. Each controller instance has its own context.
pub struct ModeContext {
    f_cont: FlightComputer,
    config: GuidanceConfig,
    phase: FlightPhase,
    history: Vec<PhaseRecord>,
    plan: Option<ManeuverPlan>,
    executed_burn: Option<CircularizationBurn>,
    final_residual: Option<Vec3D>,
    staging_time: Option<f64>,
}

impl ModeContext {
    pub fn new(link: Arc<dyn VehicleLink>, config: GuidanceConfig) -> Self {
        Self {
            f_cont: FlightComputer::new(link, &config),
            config,
            phase: FlightPhase::Ascent,
            history: Vec::new(),
            plan: None,
            executed_burn: None,
            final_residual: None,
            staging_time: None,
        }
    }

    pub fn f_cont(&self) -> &FlightComputer { &self.f_cont }
    pub fn f_cont_mut(&mut self) -> &mut FlightComputer { &mut self.f_cont }
    pub fn config(&self) -> &GuidanceConfig { &self.config }
    pub fn phase(&self) -> FlightPhase { self.phase }
    pub fn history(&self) -> &[PhaseRecord] { &self.history }
    pub fn staging_time(&self) -> Option<f64> { self.staging_time }
    pub fn executed_burn(&self) -> Option<&CircularizationBurn> { self.executed_burn.as_ref() }
    pub fn final_residual(&self) -> Option<Vec3D> { self.final_residual }

    /// Splits the context into the flight computer and the plan slot for the burn executor.
    pub fn f_cont_and_plan(&mut self) -> (&mut FlightComputer, &mut Option<ManeuverPlan>) {
        (&mut self.f_cont, &mut self.plan)
    }

    /// Makes `plan` the active plan and remembers its figures for the mission report.
    pub fn store_plan(&mut self, plan: ManeuverPlan) {
        self.executed_burn = Some(*plan.burn());
        self.plan = Some(plan);
    }

    pub fn record_residual(&mut self, residual: Vec3D) { self.final_residual = Some(residual); }

    pub fn record_staging(&mut self, mission_time: f64) {
        self.staging_time.get_or_insert(mission_time);
    }

    /// Records the start of the initial phase. Only has an effect once.
    pub async fn begin(&mut self) -> Result<(), GuidanceError> {
        if self.history.is_empty() {
            let now = self.f_cont.telemetry().time().await?;
            info!("Entering phase {} at T+{now:.1}s", self.phase);
            self.history.push(PhaseRecord { phase: self.phase, entered_at: now });
        }
        Ok(())
    }

    /// Moves to the next phase and logs how long the previous one took.
    ///
    /// # Returns
    /// The phase now active. At [`FlightPhase::Complete`] the phase stays unchanged.
    pub async fn advance(&mut self) -> Result<FlightPhase, GuidanceError> {
        let Some(next) = self.phase.next() else {
            return Ok(self.phase);
        };
        let now = self.f_cont.telemetry().time().await?;
        if let Some(last) = self.history.last() {
            info!("Finished phase {} after {:.1}s", last.phase, now - last.entered_at);
        }
        info!("Entering phase {next} at T+{now:.1}s");
        self.phase = next;
        self.history.push(PhaseRecord { phase: next, entered_at: now });
        Ok(next)
    }
}
