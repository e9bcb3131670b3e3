//! Body type and the mass→radius relation

use glam::Vec2;

use crate::constants::AREAL_DENSITY;

/// Stable identifier for a body. Allocated monotonically by the store
/// and never reused; a body destroyed in a merge takes its id with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

/// One circular point-mass.
///
/// `radius` is always derived from `mass` via [`radius_for_mass`], both
/// at creation and after every merge. `color` is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub color: [f32; 3],
}

impl Body {
    /// Create a body at rest with the radius implied by its mass.
    pub fn new(id: BodyId, position: Vec2, mass: f32, color: [f32; 3]) -> Self {
        assert!(mass > 0.0, "body mass must be positive, got {mass}");
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            mass,
            radius: radius_for_mass(mass),
            color,
        }
    }

    /// True if the two circles overlap (strict, touching does not count).
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }
}

/// Radius of a circle of the given mass at constant areal density:
/// `mass = AREAL_DENSITY * pi * r^2`, so `r = sqrt(mass / (AREAL_DENSITY * pi))`.
///
/// Strictly increasing in mass, so visual size always reflects mass.
pub fn radius_for_mass(mass: f32) -> f32 {
    (mass / (AREAL_DENSITY * std::f32::consts::PI)).sqrt()
}
