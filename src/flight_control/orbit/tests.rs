use super::{
    maneuver_plan::CircularizationBurn,
    orbital_mechanics::{burn_duration, circularization_delta_v, vis_viva_speed},
    ManeuverPlanner,
};
use crate::config::GuidanceConfig;
use crate::flight_control::{
    common::math::relative_error, telemetry::OrbitalSample, GuidanceError,
};

const MU_EARTH: f64 = 3.986e14;
const MU_KERBIN: f64 = 3.5316e12;

#[test]
fn test_vis_viva_delta_v() {
    let (r, a1) = (6.6e6, 6.5e6);
    let expected = (MU_EARTH * (2.0 / r - 1.0 / r)).sqrt() - (MU_EARTH * (2.0 / r - 1.0 / a1)).sqrt();
    let dv = circularization_delta_v(MU_EARTH, r, a1).unwrap();
    assert!(relative_error(dv, expected) < 1e-6, "dv {dv}, expected {expected}");
    assert!(dv > 0.0);
}

#[test]
fn test_circular_orbit_needs_no_burn() {
    let r = 782_000.0;
    let dv = circularization_delta_v(MU_KERBIN, r, r).unwrap();
    assert!(dv.abs() < 1e-9);
    let v = vis_viva_speed(MU_KERBIN, r, r).unwrap();
    assert!(relative_error(v, (MU_KERBIN / r).sqrt()) < 1e-12);
}

#[test]
fn test_rocket_equation_burn_time() {
    let (thrust, isp, g0, m0, dv) = (1000.0, 300.0, 9.82, 1000.0, 100.0);
    let ve: f64 = isp * g0;
    let expected = (m0 - m0 / (dv / ve).exp()) / (thrust / ve);
    let burn = burn_duration(dv, thrust, isp, g0, m0).unwrap();
    assert!(relative_error(burn, expected) < 1e-9, "burn {burn}, expected {expected}");
    // Propellant consumption shortens the burn compared to a constant-mass estimate.
    assert!(burn < m0 * dv / thrust);
}

#[test]
fn test_infeasible_inputs() {
    let infeasible = |res: Result<f64, GuidanceError>| {
        matches!(res, Err(GuidanceError::PhysicallyInfeasiblePlan { .. }))
    };
    assert!(infeasible(burn_duration(100.0, 0.0, 300.0, 9.82, 1000.0)));
    assert!(infeasible(burn_duration(0.0, 0.0, 300.0, 9.82, 1000.0)));
    assert!(infeasible(burn_duration(-5.0, 1000.0, 300.0, 9.82, 1000.0)));
    assert!(infeasible(burn_duration(100.0, 1000.0, 0.0, 9.82, 1000.0)));
    assert!(infeasible(burn_duration(100.0, 1000.0, 300.0, 9.82, 0.0)));
    assert!(infeasible(circularization_delta_v(MU_EARTH, 0.0, 6.5e6)));
    assert!(infeasible(circularization_delta_v(MU_EARTH, 6.6e6, -1.0)));
    // Radius beyond the apoapsis of the orbit.
    assert!(infeasible(circularization_delta_v(MU_EARTH, 2.0e7, 6.5e6)));
}

#[test]
fn test_planner_anchors_ignition_on_apoapsis() {
    let planner = ManeuverPlanner::new(&GuidanceConfig::default());
    let sample = OrbitalSample {
        time: 200.0,
        time_to_apoapsis: 150.0,
        gravitational_parameter: MU_KERBIN,
        apoapsis_radius: 782_000.0,
        semi_major_axis: 696_000.0,
        available_thrust: 60_000.0,
        specific_impulse: 320.0,
        mass: 5000.0,
    };
    let burn: CircularizationBurn = planner.compute(&sample).unwrap();
    assert!((burn.apoapsis_time - 350.0).abs() < f64::EPSILON);
    assert!((burn.ignition_time() - (350.0 - burn.burn_time / 2.0)).abs() < 1e-12);
    assert!(burn.delta_v > 100.0 && burn.delta_v < 200.0, "dv {}", burn.delta_v);
    assert!(burn.burn_time > 5.0 && burn.burn_time < 20.0, "burn {}", burn.burn_time);

    let no_thrust = OrbitalSample { available_thrust: 0.0, ..sample };
    assert!(planner.compute(&no_thrust).is_err());
}
