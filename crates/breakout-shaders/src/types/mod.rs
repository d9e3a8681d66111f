//! Structs shared with the quad shader.

pub mod colors;
mod flags;
mod per_quad;
mod view;

pub use flags::{PerQuadFlags, PER_QUAD_FLAGS_AS_CIRCLE, PER_QUAD_FLAGS_NONE};
pub use per_quad::PerQuad;
pub use view::View;
