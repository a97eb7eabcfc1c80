mod maneuver_plan;
mod maneuver_planner;
mod orbital_mechanics;
#[cfg(test)]
mod tests;

pub use maneuver_plan::{CircularizationBurn, ManeuverPlan};
pub use maneuver_planner::ManeuverPlanner;
pub use orbital_mechanics::{burn_duration, circularization_delta_v, vis_viva_speed};
