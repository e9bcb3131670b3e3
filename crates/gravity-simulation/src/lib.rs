//! # Gravity Simulation
//!
//! The simulation core: an insertion-ordered body store with stable
//! ids, O(n²) pairwise force integration, a detect-then-apply merge
//! resolver, the pause/speed clock, and the [`Simulation`] context
//! that sequences one step per frame.

pub mod clock;
pub mod collision;
pub mod commands;
pub mod integrator;
pub mod simulation;
pub mod store;

pub use clock::*;
pub use collision::*;
pub use commands::*;
pub use integrator::*;
pub use simulation::*;
pub use store::*;
