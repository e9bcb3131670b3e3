//! Input requests queued against the simulation
//!
//! External handlers (mouse, keyboard) run between frames; they never
//! touch the store directly. They queue commands, and the simulation
//! applies the whole batch atomically at the start of its next step.

use glam::Vec2;

/// White, for spawn requests that carry no color.
pub const DEFAULT_SPAWN_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// Spawn a body at a world-space position. Mass defaults to
    /// [`gravity_physics::DEFAULT_SPAWN_MASS`], color to white.
    Spawn {
        position: Vec2,
        mass: Option<f32>,
        color: Option<[f32; 3]>,
    },
    TogglePause,
    /// Adjust the speed multiplier by whole notches, `+1` or `-1` per
    /// key press.
    SpeedDelta(i32),
    /// Drop every body and restore clock defaults.
    Reset,
}
