use super::{
    common::Vec3D,
    vehicle_link::{NodeId, ReferenceFrame, VehicleLink},
    GuidanceError,
};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::time::Instant;

/// Value rising or falling linearly from `start` to `end` over `duration` seconds, then flat.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearProfile {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

impl LinearProfile {
    pub fn new(start: f64, end: f64, duration: f64) -> Self { Self { start, end, duration } }

    pub fn at(&self, t: f64) -> f64 {
        let frac = (t / self.duration).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * frac
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Command {
    Throttle(f64),
    Stage,
    Pitch(f64),
    Direction(Vec3D, ReferenceFrame),
    Warp(f64),
    AddNode { time: f64, prograde: f64 },
    RemoveNode(NodeId),
    StabilityAssist(bool),
    ReactionControl(bool),
    Autopilot,
}

/// A command together with the mission time and apoapsis it was received at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CommandRecord {
    pub time: f64,
    pub apoapsis: f64,
    pub command: Command,
}

/// Orbit and vehicle figures reported for burn planning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VehicleFigures {
    pub mu: f64,
    pub apoapsis_radius: f64,
    pub semi_major_axis: f64,
    pub thrust: f64,
    pub isp: f64,
    pub mass: f64,
}

#[derive(Debug, Default)]
struct ScriptState {
    warp_offset: f64,
    throttle: f64,
    commands: Vec<CommandRecord>,
    nodes: Vec<(NodeId, f64)>,
    next_node: u64,
    delivered_dv: f64,
    last_integration: f64,
    direction_set_at: Option<f64>,
}

/// Vehicle double replaying scripted telemetry on tokio's (paused) clock.
///
/// Mission time is the virtual time since construction plus any warp. Residual Δv of the
/// newest node shrinks with the commanded throttle at `thrust / mass` per second.
pub(crate) struct ScriptedVehicle {
    epoch: Instant,
    pub altitude: LinearProfile,
    pub apoapsis: LinearProfile,
    pub propellant: LinearProfile,
    /// Mission time of the next apoapsis passage.
    pub apoapsis_time: f64,
    pub figures: VehicleFigures,
    /// Seconds the autopilot needs to settle on a new direction.
    pub attitude_delay: f64,
    /// Mission time after which every read fails.
    pub telemetry_loss_at: Option<f64>,
    pub reject_staging: bool,
    state: Mutex<ScriptState>,
}

impl ScriptedVehicle {
    /// Linear ascent to 250 km with booster burnout at 120 s and apoapsis reaching
    /// 200 km at 200 s, apoapsis passage at T+400 s around Kerbin.
    pub fn nominal() -> Self {
        Self {
            epoch: Instant::now(),
            altitude: LinearProfile::new(0.0, 250_000.0, 250.0),
            apoapsis: LinearProfile::new(0.0, 200_000.0, 200.0),
            propellant: LinearProfile::new(100.0, 0.0, 120.0),
            apoapsis_time: 400.0,
            figures: VehicleFigures {
                mu: 3.5316e12,
                apoapsis_radius: 782_000.0,
                semi_major_axis: 696_000.0,
                thrust: 60_000.0,
                isp: 320.0,
                mass: 5000.0,
            },
            attitude_delay: 2.0,
            telemetry_loss_at: None,
            reject_staging: false,
            state: Mutex::new(ScriptState::default()),
        }
    }

    pub fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() + self.state.lock().unwrap().warp_offset
    }

    pub fn commands(&self) -> Vec<CommandRecord> { self.state.lock().unwrap().commands.clone() }

    pub fn throttle_history(&self) -> Vec<f64> {
        self.commands()
            .iter()
            .filter_map(|c| if let Command::Throttle(t) = c.command { Some(t) } else { None })
            .collect()
    }

    pub fn pitch_history(&self) -> Vec<f64> {
        self.commands()
            .iter()
            .filter_map(|c| if let Command::Pitch(p) = c.command { Some(p) } else { None })
            .collect()
    }

    pub fn stage_times(&self) -> Vec<f64> {
        self.commands()
            .iter()
            .filter(|c| c.command == Command::Stage)
            .map(|c| c.time)
            .collect()
    }

    pub fn open_nodes(&self) -> usize { self.state.lock().unwrap().nodes.len() }

    fn read(&self, value: impl FnOnce(f64) -> f64) -> Result<f64, GuidanceError> {
        let now = self.now();
        match self.telemetry_loss_at {
            Some(t) if now >= t => Err(GuidanceError::telemetry("link", "connection lost")),
            _ => Ok(value(now)),
        }
    }

    fn record(&self, command: Command) {
        let now = self.now();
        let apoapsis = self.apoapsis.at(now);
        self.state.lock().unwrap().commands.push(CommandRecord { time: now, apoapsis, command });
    }

    fn integrate(&self, state: &mut ScriptState, now: f64) {
        if !state.nodes.is_empty() {
            let accel = self.figures.thrust / self.figures.mass;
            state.delivered_dv += accel * state.throttle * (now - state.last_integration).max(0.0);
        }
        state.last_integration = now;
    }
}

#[async_trait]
impl VehicleLink for ScriptedVehicle {
    async fn mission_time(&self) -> Result<f64, GuidanceError> { self.read(|t| t) }

    async fn mean_altitude(&self) -> Result<f64, GuidanceError> {
        self.read(|t| self.altitude.at(t))
    }

    async fn apoapsis_altitude(&self) -> Result<f64, GuidanceError> {
        self.read(|t| self.apoapsis.at(t))
    }

    async fn time_to_apoapsis(&self) -> Result<f64, GuidanceError> {
        self.read(|t| self.apoapsis_time - t)
    }

    async fn stage_propellant(&self, _stage: u32) -> Result<f64, GuidanceError> {
        self.read(|t| self.propellant.at(t))
    }

    async fn gravitational_parameter(&self) -> Result<f64, GuidanceError> {
        self.read(|_| self.figures.mu)
    }

    async fn apoapsis_radius(&self) -> Result<f64, GuidanceError> {
        self.read(|_| self.figures.apoapsis_radius)
    }

    async fn semi_major_axis(&self) -> Result<f64, GuidanceError> {
        self.read(|_| self.figures.semi_major_axis)
    }

    async fn available_thrust(&self) -> Result<f64, GuidanceError> {
        self.read(|_| self.figures.thrust)
    }

    async fn specific_impulse(&self) -> Result<f64, GuidanceError> {
        self.read(|_| self.figures.isp)
    }

    async fn mass(&self) -> Result<f64, GuidanceError> { self.read(|_| self.figures.mass) }

    async fn attitude_converged(&self) -> Result<bool, GuidanceError> {
        let set_at = self.state.lock().unwrap().direction_set_at;
        let now = self.read(|t| t)?;
        Ok(set_at.is_some_and(|s| now - s >= self.attitude_delay))
    }

    async fn set_throttle(&self, fraction: f64) -> Result<(), GuidanceError> {
        self.record(Command::Throttle(fraction));
        let now = self.now();
        let mut state = self.state.lock().unwrap();
        self.integrate(&mut state, now);
        state.throttle = fraction;
        Ok(())
    }

    async fn activate_next_stage(&self) -> Result<(), GuidanceError> {
        if self.reject_staging {
            return Err(GuidanceError::rejected("activate_next_stage", "stage locked"));
        }
        self.record(Command::Stage);
        Ok(())
    }

    async fn set_pitch_and_heading(&self, pitch: f64, _heading: f64) -> Result<(), GuidanceError> {
        self.record(Command::Pitch(pitch));
        Ok(())
    }

    async fn set_target_direction(
        &self,
        direction: Vec3D,
        frame: ReferenceFrame,
    ) -> Result<(), GuidanceError> {
        self.record(Command::Direction(direction, frame));
        let now = self.now();
        self.state.lock().unwrap().direction_set_at = Some(now);
        Ok(())
    }

    async fn warp_to(&self, mission_time: f64) -> Result<(), GuidanceError> {
        self.record(Command::Warp(mission_time));
        let now = self.now();
        if mission_time > now {
            let mut state = self.state.lock().unwrap();
            state.warp_offset += mission_time - now;
            state.last_integration = mission_time;
        }
        Ok(())
    }

    async fn add_node(&self, mission_time: f64, prograde: f64) -> Result<NodeId, GuidanceError> {
        self.record(Command::AddNode { time: mission_time, prograde });
        let now = self.now();
        let mut state = self.state.lock().unwrap();
        state.next_node += 1;
        let id = NodeId(state.next_node);
        state.nodes.push((id, prograde));
        state.delivered_dv = 0.0;
        state.last_integration = now;
        Ok(id)
    }

    async fn remove_node(&self, node: NodeId) -> Result<(), GuidanceError> {
        let mut state = self.state.lock().unwrap();
        let before = state.nodes.len();
        state.nodes.retain(|(id, _)| *id != node);
        if state.nodes.len() == before {
            return Err(GuidanceError::rejected("remove_node", format!("{node} does not exist")));
        }
        drop(state);
        self.record(Command::RemoveNode(node));
        Ok(())
    }

    async fn remaining_burn_vector(&self, node: NodeId) -> Result<Vec3D, GuidanceError> {
        let now = self.read(|t| t)?;
        let mut state = self.state.lock().unwrap();
        self.integrate(&mut state, now);
        let prograde = state
            .nodes
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, dv)| *dv)
            .ok_or_else(|| GuidanceError::telemetry("remaining_burn_vector", "unknown node"))?;
        Ok(Vec3D::new(0.0, prograde - state.delivered_dv, 0.0))
    }

    async fn set_stability_assist(&self, enabled: bool) -> Result<(), GuidanceError> {
        self.record(Command::StabilityAssist(enabled));
        Ok(())
    }

    async fn set_reaction_control(&self, enabled: bool) -> Result<(), GuidanceError> {
        self.record(Command::ReactionControl(enabled));
        Ok(())
    }

    async fn engage_autopilot(&self) -> Result<(), GuidanceError> {
        self.record(Command::Autopilot);
        Ok(())
    }
}
