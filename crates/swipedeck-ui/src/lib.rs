//! Swipeable card deck for SwipeDeck
//!
//! The deck renders a stack of caller-drawn cards. Dragging the top card past
//! a quarter of the viewport width and releasing flings it off-screen and
//! reports the swipe; shorter drags spring back.

mod deck;
mod error;

pub use deck::*;
pub use error::DeckError;

pub use swipedeck_animation::SpringSpec;
pub use swipedeck_foundation::{PointerEvent, PointerEventKind, PointerId};
pub use swipedeck_ui_graphics::{GraphicsLayer, Point, Rect, Size};

pub mod prelude {
    pub use crate::deck::{
        CardLayer, Deck, DeckBuilder, DeckOptions, DeckPhase, DeckScene, ExhaustionPolicy,
        SwipeDirection,
    };
    pub use crate::error::DeckError;
}
