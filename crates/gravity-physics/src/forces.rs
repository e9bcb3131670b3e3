//! Gravity kernel and merge arithmetic
//!
//! These are the pure per-pair formulas; the simulation crate owns the
//! loops that accumulate them over a body set.

use glam::Vec2;

use crate::constants::{G, SOFTENING};

/// Gravitational acceleration on a body at `p_i` due to mass `m_j` at `p_j`:
///
/// `a = G * m_j * (p_j - p_i) / (|p_j - p_i|^3 + ε)`
///
/// The softening term keeps the result bounded as the separation
/// approaches zero instead of blowing up the integrator.
pub fn gravitational_accel(p_i: Vec2, p_j: Vec2, m_j: f32) -> Vec2 {
    let d = p_j - p_i;
    let r2 = d.length_squared();
    let denom = r2 * r2.sqrt() + SOFTENING;
    G * m_j * d / denom
}

/// Velocity of the single body left by a perfectly inelastic merge,
/// conserving momentum: `v' = (m1*v1 + m2*v2) / (m1 + m2)`.
pub fn merged_velocity(m1: f32, v1: Vec2, m2: f32, v2: Vec2) -> Vec2 {
    (m1 * v1 + m2 * v2) / (m1 + m2)
}
