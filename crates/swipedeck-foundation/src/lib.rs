//! Pointer input and gestures for SwipeDeck
//!
//! A single pointer stream feeds a [`DragGesture`], which tracks one drag
//! session at a time and reports cumulative deltas from the press position.

pub mod gestures;
pub mod types;

pub use gestures::{DragGesture, DragSession, DragUpdate};
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::gestures::{DragGesture, DragUpdate};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
