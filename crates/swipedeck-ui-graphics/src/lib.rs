//! Pure math/data for positioning cards in SwipeDeck
//!
//! Geometry primitives and the per-card layer transform shared by the
//! animation, input and rendering crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point, Rect, Size};
}
