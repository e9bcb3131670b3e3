//! # Gravity Physics
//!
//! Pure math for the 2D gravitational sandbox: bodies, the pairwise
//! gravity kernel with softening, and the inelastic merge arithmetic.

pub mod body;
pub mod constants;
pub mod forces;

pub use body::*;
pub use constants::*;
pub use forces::*;
