//! Overlap detection and inelastic merging
//!
//! Detect-then-apply: the full pairwise scan runs against a fixed
//! snapshot of the store, overlapping pairs are unioned into clusters,
//! and only then does each cluster collapse to a single body. A chain
//! A-B, B-C therefore merges into one body in one step even when A and
//! C never touch, and no scan ever iterates a store it is mutating.

use gravity_physics::{merged_velocity, radius_for_mass, BodyId};

use crate::store::BodyStore;

/// Union-find over store slots for one detection pass.
struct OverlapClusters {
    parent: Vec<usize>,
}

impl OverlapClusters {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Lower slot wins so cluster grouping is order-stable
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

/// Detect every overlapping pair and collapse each connected overlap
/// cluster into its heaviest member (ties go to the lower id).
///
/// Mass and momentum are conserved per cluster; the survivor keeps its
/// position and color and gets its radius recomputed from the merged
/// mass. Returns the number of bodies destroyed.
pub fn resolve_collisions(store: &mut BodyStore) -> usize {
    let n = store.len();
    if n < 2 {
        return 0;
    }
    for b in store.iter() {
        assert!(
            b.mass > 0.0 && b.radius > 0.0,
            "body {:?} has non-positive mass or radius (mass={}, radius={})",
            b.id,
            b.mass,
            b.radius
        );
    }

    let mut clusters = OverlapClusters::new(n);
    let mut any_overlap = false;
    {
        let bodies = store.bodies();
        for i in 0..n {
            for j in (i + 1)..n {
                if bodies[i].overlaps(&bodies[j]) {
                    clusters.union(i, j);
                    any_overlap = true;
                }
            }
        }
    }
    if !any_overlap {
        return 0;
    }

    // Group slots by cluster root, in slot order.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        let root = clusters.find(i);
        members[root].push(i);
    }

    // Stage every merge before touching the store.
    struct PendingMerge {
        survivor: BodyId,
        mass: f32,
        velocity: glam::Vec2,
        losers: Vec<BodyId>,
    }

    let mut pending = Vec::new();
    {
        let bodies = store.bodies();
        for cluster in members.iter().filter(|c| c.len() >= 2) {
            // Heaviest member survives; equal masses fall back to the
            // lower id so the outcome never depends on scan order.
            let survivor_slot = *cluster
                .iter()
                .max_by(|&&a, &&b| {
                    bodies[a]
                        .mass
                        .partial_cmp(&bodies[b].mass)
                        .expect("body mass is never NaN")
                        .then(bodies[b].id.cmp(&bodies[a].id))
                })
                .expect("cluster has at least two members");

            // Fold momentum pairwise; algebraically identical to
            // summing, and it reuses the two-body merge rule.
            let mut mass = bodies[survivor_slot].mass;
            let mut velocity = bodies[survivor_slot].velocity;
            let mut losers = Vec::with_capacity(cluster.len() - 1);
            for &slot in cluster {
                if slot == survivor_slot {
                    continue;
                }
                velocity = merged_velocity(mass, velocity, bodies[slot].mass, bodies[slot].velocity);
                mass += bodies[slot].mass;
                losers.push(bodies[slot].id);
            }

            pending.push(PendingMerge {
                survivor: bodies[survivor_slot].id,
                mass,
                velocity,
                losers,
            });
        }
    }

    // Apply: update each survivor atomically, then drop the losers.
    let mut destroyed = 0;
    for merge in pending {
        let body = store
            .get_mut(merge.survivor)
            .expect("survivor is live during the apply pass");
        body.mass = merge.mass;
        body.velocity = merge.velocity;
        body.radius = radius_for_mass(merge.mass);

        for id in &merge.losers {
            store.remove(*id);
            destroyed += 1;
        }
        log::debug!(
            "merged {} bodies into {:?} (mass {:.3})",
            merge.losers.len() + 1,
            merge.survivor,
            merge.mass
        );
    }
    destroyed
}
