//! Deck configuration.

use crate::error::DeckError;
use swipedeck_animation::SpringSpec;
use swipedeck_ui_graphics::Size;

/// What the deck does once every card has been swiped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Show the no-more-cards view for one render pass, then start over from
    /// the first card.
    #[default]
    Recycle,
    /// Keep showing the no-more-cards view until [`crate::Deck::reset`].
    Terminal,
}

/// Layout and gesture tuning for a deck.
///
/// The viewport width is read once by the host; every distance the deck
/// derives (swipe threshold, exit travel, rotation range) follows from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckOptions {
    pub viewport_width: f32,
    pub card_height: f32,
    /// Fraction of the viewport width a release must exceed to commit.
    pub swipe_threshold_fraction: f32,
    pub swipe_out_duration_millis: u64,
    /// Rotation of the active card when dragged a full viewport width.
    pub max_rotation_degrees: f32,
    /// Vertical offset between stacked cards.
    pub stack_offset: f32,
    /// Cards drawn beneath the active one.
    pub max_stacked_cards: usize,
    pub exhaustion: ExhaustionPolicy,
    /// Host capability flag: animate the stack moving up after a commit.
    pub layout_animations: bool,
    /// Spring used for spring-back and the layout transition.
    pub spring: SpringSpec,
}

impl DeckOptions {
    pub const DEFAULT_CARD_HEIGHT: f32 = 300.0;
    pub const DEFAULT_SWIPE_THRESHOLD_FRACTION: f32 = 0.25;
    pub const DEFAULT_SWIPE_OUT_DURATION_MILLIS: u64 = 250;
    pub const DEFAULT_MAX_ROTATION_DEGREES: f32 = 120.0;
    pub const DEFAULT_STACK_OFFSET: f32 = 10.0;
    pub const DEFAULT_MAX_STACKED_CARDS: usize = 3;

    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            card_height: Self::DEFAULT_CARD_HEIGHT,
            swipe_threshold_fraction: Self::DEFAULT_SWIPE_THRESHOLD_FRACTION,
            swipe_out_duration_millis: Self::DEFAULT_SWIPE_OUT_DURATION_MILLIS,
            max_rotation_degrees: Self::DEFAULT_MAX_ROTATION_DEGREES,
            stack_offset: Self::DEFAULT_STACK_OFFSET,
            max_stacked_cards: Self::DEFAULT_MAX_STACKED_CARDS,
            exhaustion: ExhaustionPolicy::default(),
            layout_animations: true,
            spring: SpringSpec::bouncy(),
        }
    }

    pub fn card_height(mut self, height: f32) -> Self {
        self.card_height = height;
        self
    }

    pub fn swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn swipe_out_duration_millis(mut self, millis: u64) -> Self {
        self.swipe_out_duration_millis = millis;
        self
    }

    pub fn max_rotation_degrees(mut self, degrees: f32) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    pub fn stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    pub fn max_stacked_cards(mut self, count: usize) -> Self {
        self.max_stacked_cards = count;
        self
    }

    pub fn exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    pub fn layout_animations(mut self, enabled: bool) -> Self {
        self.layout_animations = enabled;
        self
    }

    pub fn spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    /// Horizontal distance a release must exceed to commit a swipe.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_fraction * self.viewport_width
    }

    pub fn card_size(&self) -> Size {
        Size::new(self.viewport_width, self.card_height)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            return Err(DeckError::InvalidViewportWidth(self.viewport_width));
        }
        if !self.card_height.is_finite() || self.card_height <= 0.0 {
            return Err(DeckError::InvalidCardHeight(self.card_height));
        }
        let fraction = self.swipe_threshold_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(DeckError::InvalidSwipeThreshold(fraction));
        }
        if self.swipe_out_duration_millis == 0 {
            return Err(DeckError::ZeroSwipeDuration);
        }
        Ok(())
    }
}
