//! The per-frame simulation context

use gravity_physics::DEFAULT_SPAWN_MASS;

use crate::clock::SimClock;
use crate::collision::resolve_collisions;
use crate::commands::{SimCommand, DEFAULT_SPAWN_COLOR};
use crate::integrator::integrate;
use crate::store::BodyStore;

/// Owns the body store, the clock, and the pending command queue, and
/// sequences one step: apply commands → clock → integrate → resolve.
///
/// One `Simulation` per window; nothing here is global, so tests run
/// as many independent instances as they like.
#[derive(Debug, Default)]
pub struct Simulation {
    store: BodyStore,
    clock: SimClock,
    pending: Vec<SimCommand>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for the start of the next step.
    pub fn queue(&mut self, command: SimCommand) {
        self.pending.push(command);
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Run one full simulation step for a frame that took `nominal_dt`
    /// wall-clock seconds. After this returns the store is exactly the
    /// state the projector should render.
    pub fn advance(&mut self, nominal_dt: f32) {
        self.apply_pending();
        let dt = self.clock.tick(nominal_dt);
        integrate(&mut self.store, dt);
        resolve_collisions(&mut self.store);
    }

    fn apply_pending(&mut self) {
        for command in std::mem::take(&mut self.pending) {
            match command {
                SimCommand::Spawn {
                    position,
                    mass,
                    color,
                } => {
                    let id = self.store.spawn(
                        position,
                        mass.unwrap_or(DEFAULT_SPAWN_MASS),
                        color.unwrap_or(DEFAULT_SPAWN_COLOR),
                    );
                    log::debug!("spawned {id:?} at ({:.3}, {:.3})", position.x, position.y);
                }
                SimCommand::TogglePause => self.clock.toggle_pause(),
                SimCommand::SpeedDelta(steps) => self.clock.adjust_speed(steps),
                SimCommand::Reset => {
                    // Atomic replacement: the old store is dropped whole.
                    self.store = BodyStore::new();
                    self.clock.reset();
                    log::info!("simulation reset");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn commands_apply_at_the_start_of_the_next_step() {
        let mut sim = Simulation::new();
        sim.queue(SimCommand::Spawn {
            position: Vec2::ZERO,
            mass: None,
            color: None,
        });
        assert!(sim.store().is_empty());

        sim.advance(1.0 / 60.0);
        assert_eq!(sim.store().len(), 1);
    }

    #[test]
    fn spawn_defaults_fill_in_mass_and_color() {
        let mut sim = Simulation::new();
        sim.queue(SimCommand::Spawn {
            position: Vec2::ZERO,
            mass: None,
            color: None,
        });
        sim.advance(0.0);

        let body = sim.store().iter().next().unwrap();
        assert_eq!(body.mass, DEFAULT_SPAWN_MASS);
        assert_eq!(body.color, DEFAULT_SPAWN_COLOR);
    }

    #[test]
    fn reset_empties_the_store_and_restores_the_clock() {
        let mut sim = Simulation::new();
        sim.queue(SimCommand::Spawn {
            position: Vec2::ZERO,
            mass: Some(3.0),
            color: None,
        });
        sim.queue(SimCommand::TogglePause);
        sim.queue(SimCommand::SpeedDelta(2));
        sim.advance(1.0 / 60.0);
        assert!(!sim.store().is_empty());
        assert!(sim.clock().is_paused());

        sim.queue(SimCommand::Reset);
        sim.advance(1.0 / 60.0);
        assert!(sim.store().is_empty());
        assert!(!sim.clock().is_paused());
        assert_eq!(
            sim.clock().speed_multiplier(),
            crate::clock::DEFAULT_SPEED_MULTIPLIER
        );
    }

    #[test]
    fn spawning_onto_a_body_merges_even_while_paused() {
        let mut sim = Simulation::new();
        sim.queue(SimCommand::TogglePause);
        sim.queue(SimCommand::Spawn {
            position: Vec2::ZERO,
            mass: Some(2.0),
            color: None,
        });
        sim.advance(1.0 / 60.0);

        sim.queue(SimCommand::Spawn {
            position: Vec2::new(0.001, 0.0),
            mass: Some(1.0),
            color: None,
        });
        sim.advance(1.0 / 60.0);

        assert_eq!(sim.store().len(), 1);
        assert!((sim.store().total_mass() - 3.0).abs() < 1e-6);
    }
}
