//! Body store → packed instance array

use gravity_simulation::BodyStore;

use crate::instance::CircleInstance;

/// Project the live body set into per-instance render attributes, one
/// record per body in store iteration order.
///
/// Call this after the resolver has finished the step's merges; the
/// output is the sole data the instanced draw consumes, so a stale
/// projection would render destroyed bodies.
pub fn project(store: &BodyStore) -> Vec<CircleInstance> {
    store.iter().map(CircleInstance::from).collect()
}
