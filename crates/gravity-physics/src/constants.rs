//! Physical constants for the sandbox
//!
//! World space is wgpu clip space, [-1, 1] on both axes, so the
//! constants are scaled for bodies a few hundredths of a unit across
//! rather than for SI magnitudes.

/// Gravitational constant in simulation units
pub const G: f32 = 0.01;

/// Softening term added to the cubed separation in the gravity kernel,
/// bounding acceleration as two bodies approach coincidence
pub const SOFTENING: f32 = 1.0e-5;

/// Areal density shared by every body. Mass and radius stay locked to
/// `mass = AREAL_DENSITY * pi * radius^2` at creation and after merges.
pub const AREAL_DENSITY: f32 = 800.0;

/// Mass given to a spawned body when the spawn request carries none.
/// Yields a radius of about 0.02 clip units.
pub const DEFAULT_SPAWN_MASS: f32 = 1.0;
