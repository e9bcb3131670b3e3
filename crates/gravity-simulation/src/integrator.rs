//! Semi-implicit Euler force integration
//!
//! All pairwise accelerations are accumulated into a scratch buffer
//! before any body moves; then velocities update from the summed
//! acceleration, then positions update from the *new* velocities.
//! That kick-then-drift ordering is what keeps orbits stable and runs
//! reproducible; do not fold the position update into the force loop.

use glam::Vec2;

use crate::store::BodyStore;
use gravity_physics::gravitational_accel;

/// Advance every body by `dt` seconds.
///
/// `dt` must be non-negative; the clock hands in `0.0` while paused and
/// the pass leaves the store untouched. A body with non-positive mass
/// or radius reaching this point is upstream corruption and aborts.
pub fn integrate(store: &mut BodyStore, dt: f32) {
    assert!(dt >= 0.0, "negative time step: {dt}");
    for b in store.iter() {
        assert!(
            b.mass > 0.0 && b.radius > 0.0,
            "body {:?} has non-positive mass or radius (mass={}, radius={})",
            b.id,
            b.mass,
            b.radius
        );
    }

    // Paused: invoked, but a no-op by contract.
    if dt == 0.0 {
        return;
    }

    let n = store.len();
    let mut accel = vec![Vec2::ZERO; n];

    {
        let bodies = store.bodies();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    accel[i] +=
                        gravitational_accel(bodies[i].position, bodies[j].position, bodies[j].mass);
                }
            }
        }
    }

    let bodies = store.bodies_mut();
    for (body, a) in bodies.iter_mut().zip(accel.iter()) {
        body.velocity += *a * dt;
    }
    for body in bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_bodies_accelerate_toward_each_other() {
        let mut store = BodyStore::new();
        store.spawn(Vec2::new(-0.5, 0.0), 10.0, [1.0; 3]);
        store.spawn(Vec2::new(0.5, 0.0), 10.0, [1.0; 3]);

        integrate(&mut store, 0.01);

        let bodies = store.bodies();
        assert!(bodies[0].velocity.x > 0.0);
        assert!(bodies[1].velocity.x < 0.0);
        assert!(bodies[0].position.x > -0.5);
        assert!(bodies[1].position.x < 0.5);
    }

    #[test]
    fn net_momentum_is_conserved_by_integration() {
        let mut store = BodyStore::new();
        store.spawn(Vec2::new(-0.3, 0.1), 4.0, [1.0; 3]);
        store.spawn(Vec2::new(0.4, -0.2), 2.0, [1.0; 3]);
        store.spawn(Vec2::new(0.0, 0.5), 7.0, [1.0; 3]);

        for _ in 0..50 {
            integrate(&mut store, 0.005);
        }

        let momentum: Vec2 = store.iter().map(|b| b.mass * b.velocity).sum();
        assert_relative_eq!(momentum.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(momentum.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_dt_leaves_bodies_bit_identical() {
        let mut store = BodyStore::new();
        store.spawn(Vec2::new(0.1, 0.2), 3.0, [1.0; 3]);
        store.spawn(Vec2::new(-0.4, 0.0), 5.0, [1.0; 3]);
        store.get_mut(gravity_physics::BodyId(0)).unwrap().velocity = Vec2::new(0.25, -0.5);

        let before = store.clone();
        for _ in 0..100 {
            integrate(&mut store, 0.0);
        }
        assert_eq!(store, before);
    }

    #[test]
    fn velocity_updates_before_position() {
        // Semi-implicit Euler: the position step must see the freshly
        // kicked velocity, so a body starting at rest still moves on
        // the very first step.
        let mut store = BodyStore::new();
        store.spawn(Vec2::new(-0.5, 0.0), 10.0, [1.0; 3]);
        store.spawn(Vec2::new(0.5, 0.0), 10.0, [1.0; 3]);

        integrate(&mut store, 0.01);
        assert!(store.bodies()[0].position.x != -0.5);
    }

    #[test]
    #[should_panic(expected = "non-positive mass")]
    fn corrupt_body_aborts() {
        let mut store = BodyStore::new();
        let id = store.spawn(Vec2::ZERO, 1.0, [1.0; 3]);
        store.get_mut(id).unwrap().mass = -1.0;
        integrate(&mut store, 0.01);
    }
}
