use crate::flight_control::GuidanceError;

/// Orbital speed at radius `r` on an orbit with semi-major axis `a` (vis-viva equation).
///
/// # Arguments
/// - `mu`: Gravitational parameter of the central body (m³/s²).
/// - `r`: Distance from the center of the central body (m).
/// - `a`: Semi-major axis of the orbit (m).
///
/// # Errors
/// [`GuidanceError::PhysicallyInfeasiblePlan`] for a non-positive `mu`, `r` or `a`, or if
/// `r` lies outside the orbit (`2/r < 1/a`).
pub fn vis_viva_speed(mu: f64, r: f64, a: f64) -> Result<f64, GuidanceError> {
    if mu <= 0.0 || r <= 0.0 || a <= 0.0 {
        return Err(GuidanceError::infeasible(format!(
            "vis-viva needs positive inputs (mu {mu}, r {r}, a {a})"
        )));
    }
    let energy_term = 2.0 / r - 1.0 / a;
    if energy_term < 0.0 {
        return Err(GuidanceError::infeasible(format!(
            "radius {r} m lies outside an orbit with semi-major axis {a} m"
        )));
    }
    Ok((mu * energy_term).sqrt())
}

/// Prograde Δv that turns the current orbit into a circular one at radius `r`.
///
/// Evaluated at apoapsis, where `r` is the apoapsis radius and `a1` the current semi-major
/// axis; the target orbit has `a2 = r`.
pub fn circularization_delta_v(mu: f64, r: f64, a1: f64) -> Result<f64, GuidanceError> {
    let v1 = vis_viva_speed(mu, r, a1)?;
    let v2 = vis_viva_speed(mu, r, r)?;
    Ok(v2 - v1)
}

/// Duration of a constant-thrust burn delivering `delta_v` (ideal rocket equation).
///
/// # Arguments
/// - `delta_v`: Velocity change to deliver (m/s).
/// - `thrust`: Available thrust (N).
/// - `isp`: Specific impulse (s).
/// - `g0`: Standard gravity converting `isp` into exhaust velocity (m/s²).
/// - `m0`: Vehicle mass at ignition (kg).
///
/// # Errors
/// [`GuidanceError::PhysicallyInfeasiblePlan`] if the duration comes out negative or
/// non-finite, e.g. for zero thrust.
pub fn burn_duration(
    delta_v: f64,
    thrust: f64,
    isp: f64,
    g0: f64,
    m0: f64,
) -> Result<f64, GuidanceError> {
    if m0 <= 0.0 || isp * g0 <= 0.0 {
        return Err(GuidanceError::infeasible(format!(
            "mass {m0} kg and exhaust velocity {} m/s must be positive",
            isp * g0
        )));
    }
    let exhaust_velocity = isp * g0;
    let m1 = m0 / (delta_v / exhaust_velocity).exp();
    let flow_rate = thrust / exhaust_velocity;
    let burn_time = (m0 - m1) / flow_rate;
    if !burn_time.is_finite() || burn_time < 0.0 {
        return Err(GuidanceError::infeasible(format!(
            "burn time {burn_time} s (dv {delta_v} m/s, thrust {thrust} N, isp {isp} s)"
        )));
    }
    Ok(burn_time)
}
