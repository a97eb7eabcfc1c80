use std::fmt::{Display, Formatter};

/// A 3D vector in an arbitrary vehicle reference frame.
///
/// Used for burn-vector directions and residual burn vectors. In a maneuver-node frame
/// the `y` axis points along the orbit (prograde), which is the component the burn
/// executor watches during fine tuning.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec3D {
    /// The x-component of the vector.
    x: f64,
    /// The y-component of the vector.
    y: f64,
    /// The z-component of the vector.
    z: f64,
}

impl Vec3D {
    /// Unit vector along the `y` axis, i.e. prograde in a maneuver-node frame.
    pub const PROGRADE: Vec3D = Vec3D::new(0.0, 1.0, 0.0);

    /// Creates a new vector with the given components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub const fn y(&self) -> f64 { self.y }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Display for Vec3D {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}
