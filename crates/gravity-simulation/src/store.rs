//! The authoritative set of live bodies

use glam::Vec2;
use gravity_physics::{Body, BodyId};

/// Insertion-ordered arena of live bodies.
///
/// Ids are allocated monotonically and never reused, so a [`BodyId`]
/// stays valid for exactly one body's lifetime. Iteration order is
/// insertion order; it only changes when a merge removes bodies, never
/// mid-scan (the resolver stages removals and applies them after its
/// detection pass).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
    next_id: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new body at rest and return its id.
    pub fn spawn(&mut self, position: Vec2, mass: f32, color: [f32; 3]) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, position, mass, color));
        id
    }

    /// Remove a body by id. Returns the removed body, if it was live.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.remove(idx))
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Slot access for the integrator and resolver, which index
    /// pairwise over the same snapshot of the set.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Sum of all live masses. Conserved across merges, not spawns.
    pub fn total_mass(&self) -> f32 {
        self.bodies.iter().map(|b| b.mass).sum()
    }
}
