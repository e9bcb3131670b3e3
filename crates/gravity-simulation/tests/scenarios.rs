//! End-to-end scenarios for the simulation core: merge outcomes,
//! conservation laws, pause behavior, and run-to-run determinism.

use approx::assert_relative_eq;
use glam::Vec2;
use gravity_simulation::{integrate, resolve_collisions, BodyStore, SimClock, Simulation, SimCommand};

/// Two overlapping bodies, 10 and 5 mass units, the lighter one moving
/// upward. The merge must keep the heavier body's position, sum the
/// masses, and average the velocities by momentum.
#[test]
fn two_body_merge_conserves_mass_and_momentum() {
    let mut store = BodyStore::new();
    let heavy = store.spawn(Vec2::ZERO, 10.0, [1.0, 0.0, 0.0]);
    let light = store.spawn(Vec2::new(0.1, 0.0), 5.0, [0.0, 0.0, 1.0]);
    store.get_mut(light).unwrap().velocity = Vec2::new(0.0, 1.0);

    // Radii for 10 and 5 mass units sum to ~0.107, so 0.1 overlaps.
    let destroyed = resolve_collisions(&mut store);

    assert_eq!(destroyed, 1);
    assert_eq!(store.len(), 1);
    let merged = store.get(heavy).expect("heavier body survives");
    assert_relative_eq!(merged.mass, 15.0);
    assert_eq!(merged.position, Vec2::ZERO);
    assert_eq!(merged.color, [1.0, 0.0, 0.0]);
    assert_relative_eq!(merged.velocity.x, 0.0);
    assert_relative_eq!(merged.velocity.y, 5.0 / 15.0, epsilon = 1e-6);
    assert_relative_eq!(
        merged.radius,
        gravity_physics::radius_for_mass(15.0),
        epsilon = 1e-7
    );
}

#[test]
fn three_way_chain_merges_into_one_body_in_one_step() {
    let mut store = BodyStore::new();
    let a = store.spawn(Vec2::ZERO, 1.0, [1.0; 3]);
    let r = store.get(a).unwrap().radius;
    // A-B and B-C overlap; A-C are 3.6 radii apart and do not.
    store.spawn(Vec2::new(1.8 * r, 0.0), 2.0, [1.0; 3]);
    store.spawn(Vec2::new(3.6 * r, 0.0), 1.5, [1.0; 3]);

    resolve_collisions(&mut store);

    assert_eq!(store.len(), 1);
    assert_relative_eq!(store.iter().next().unwrap().mass, 4.5, epsilon = 1e-6);
}

#[test]
fn resolver_never_merges_separated_bodies() {
    let mut store = BodyStore::new();
    let a = store.spawn(Vec2::ZERO, 1.0, [1.0; 3]);
    let r = store.get(a).unwrap().radius;
    for i in 1..6 {
        store.spawn(Vec2::new(2.5 * r * i as f32, 0.0), 1.0, [1.0; 3]);
    }

    for _ in 0..10 {
        assert_eq!(resolve_collisions(&mut store), 0);
    }
    assert_eq!(store.len(), 6);
}

#[test]
fn mass_is_conserved_by_the_resolver_phase() {
    let mut store = BodyStore::new();
    for i in 0..8 {
        store.spawn(Vec2::new(0.01 * i as f32, 0.0), 1.0 + i as f32 * 0.3, [1.0; 3]);
    }
    let before = store.total_mass();
    resolve_collisions(&mut store);
    assert_relative_eq!(store.total_mass(), before, epsilon = 1e-4);
}

#[test]
fn hundred_paused_steps_change_nothing() {
    let mut store = BodyStore::new();
    store.spawn(Vec2::new(-0.4, 0.1), 3.0, [1.0; 3]);
    let moving = store.spawn(Vec2::new(0.3, -0.2), 1.0, [1.0; 3]);
    store.get_mut(moving).unwrap().velocity = Vec2::new(0.7, -0.1);

    let mut clock = SimClock::new();
    clock.toggle_pause();

    let before = store.clone();
    for _ in 0..100 {
        let dt = clock.tick(1.0 / 60.0);
        integrate(&mut store, dt);
        resolve_collisions(&mut store);
    }
    assert_eq!(store, before);
}

#[test]
fn identical_runs_produce_identical_stores() {
    let build = || {
        let mut store = BodyStore::new();
        store.spawn(Vec2::new(-0.5, 0.0), 6.0, [1.0, 0.5, 0.0]);
        store.spawn(Vec2::new(0.5, 0.1), 2.0, [0.0, 0.5, 1.0]);
        store.spawn(Vec2::new(0.0, -0.4), 3.5, [0.2, 1.0, 0.2]);
        store.spawn(Vec2::new(0.1, 0.45), 1.0, [1.0; 3]);
        store
    };

    let mut first = build();
    let mut second = build();
    // Uneven dt sequence, repeated exactly in both runs
    let dts = [0.016, 0.02, 0.0, 0.016, 0.033, 0.008];

    for step in 0..600 {
        let dt = dts[step % dts.len()];
        integrate(&mut first, dt);
        resolve_collisions(&mut first);
        integrate(&mut second, dt);
        resolve_collisions(&mut second);
    }

    assert_eq!(first, second);
}

#[test]
fn full_step_reflects_merges_before_projection() {
    // The store a caller observes after `advance` is the post-resolver
    // state, never the mid-step one.
    let mut sim = Simulation::new();
    sim.queue(SimCommand::Spawn {
        position: Vec2::ZERO,
        mass: Some(4.0),
        color: None,
    });
    sim.queue(SimCommand::Spawn {
        position: Vec2::new(0.001, 0.0),
        mass: Some(1.0),
        color: None,
    });
    sim.advance(1.0 / 60.0);

    assert_eq!(sim.store().len(), 1);
    assert_relative_eq!(sim.store().total_mass(), 5.0, epsilon = 1e-6);
}

#[test]
fn drifting_pair_eventually_merges() {
    let mut store = BodyStore::new();
    store.spawn(Vec2::new(-0.05, 0.0), 5.0, [1.0; 3]);
    store.spawn(Vec2::new(0.05, 0.0), 5.0, [1.0; 3]);

    let mut merged = false;
    for _ in 0..20_000 {
        integrate(&mut store, 1.0 / 60.0);
        if resolve_collisions(&mut store) > 0 {
            merged = true;
            break;
        }
    }
    assert!(merged, "mutually attracting pair never merged");
    assert_relative_eq!(store.total_mass(), 10.0, epsilon = 1e-4);
}
