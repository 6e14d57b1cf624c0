use std::fmt;

/// Reasons a deck cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckError {
    MissingRenderCard,
    MissingRenderNoMoreCards,
    InvalidViewportWidth(f32),
    InvalidCardHeight(f32),
    InvalidSwipeThreshold(f32),
    ZeroSwipeDuration,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::MissingRenderCard => write!(f, "deck has no card renderer"),
            DeckError::MissingRenderNoMoreCards => {
                write!(f, "deck has no renderer for the exhausted-deck view")
            }
            DeckError::InvalidViewportWidth(width) => {
                write!(f, "viewport width must be positive and finite, got {width}")
            }
            DeckError::InvalidCardHeight(height) => {
                write!(f, "card height must be positive and finite, got {height}")
            }
            DeckError::InvalidSwipeThreshold(fraction) => {
                write!(f, "swipe threshold fraction must be in (0, 1], got {fraction}")
            }
            DeckError::ZeroSwipeDuration => write!(f, "swipe-out duration must be non-zero"),
        }
    }
}

impl std::error::Error for DeckError {}
