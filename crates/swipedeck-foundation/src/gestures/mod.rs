pub mod drag;

pub use drag::{DragGesture, DragSession, DragUpdate};
