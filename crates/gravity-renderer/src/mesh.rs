//! Shared unit-circle mesh

use std::f32::consts::TAU;

use crate::vertex::CircleVertex;

/// Triangle-fan unit circle: a center vertex plus `segments` rim
/// vertices, indexed as `segments` triangles. Vertex color is white so
/// the fragment color is entirely the instance's.
pub fn circle_mesh(segments: u16) -> (Vec<CircleVertex>, Vec<u16>) {
    assert!(segments >= 3, "a circle needs at least 3 segments");
    let color = [1.0, 1.0, 1.0];

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    vertices.push(CircleVertex {
        position: [0.0, 0.0],
        color,
    });
    for i in 0..segments {
        let angle = TAU * i as f32 / segments as f32;
        vertices.push(CircleVertex {
            position: [angle.cos(), angle.sin()],
            color,
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments {
        let next = if i == segments { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    (vertices, indices)
}
