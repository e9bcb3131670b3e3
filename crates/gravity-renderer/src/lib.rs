//! # Gravity Renderer
//!
//! Turns the live body store into GPU work: a packed per-instance
//! attribute array (center, radius, color), a shared unit-circle mesh,
//! and one instanced draw per frame.

pub mod instance;
pub mod mesh;
pub mod projector;
pub mod renderer;
pub mod vertex;

pub use instance::CircleInstance;
pub use mesh::circle_mesh;
pub use projector::project;
pub use renderer::CircleRenderer;
pub use vertex::CircleVertex;
