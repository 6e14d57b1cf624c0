//! Swipeable card deck.
//!
//! A [`Deck`] owns the caller's items and renderers plus the gesture
//! controller. Hosts feed it pointer events, pump frames with
//! [`Deck::advance_frame`] and draw whatever [`Deck::render`] returns.
//!
//! ```
//! use swipedeck_core::Runtime;
//! use swipedeck_ui::{Deck, DeckOptions};
//!
//! let runtime = Runtime::manual();
//! let mut deck = Deck::builder(vec!["A", "B", "C"], DeckOptions::new(400.0))
//!     .render_card(|item: &&str| item.to_string())
//!     .render_no_more_cards(|| "All done".to_string())
//!     .build(runtime.handle())
//!     .expect("valid deck");
//!
//! let scene = deck.render();
//! assert_eq!(scene.top_card().map(|card| card.content.as_str()), Some("A"));
//! ```

mod controller;
mod layout_transition;
mod options;
mod stack;

pub use controller::{DeckPhase, Resolution, SwipeDirection};
pub use options::{DeckOptions, ExhaustionPolicy};
pub use stack::{CardLayer, DeckScene};

use crate::error::DeckError;
use controller::{DeckController, SwipeCallbacks, SwipeHandler};
use stack::{render_stack, StackFrame};
use swipedeck_core::RuntimeHandle;
use swipedeck_foundation::PointerEvent;
use swipedeck_ui_graphics::{Point, Rect};

type RenderCard<T, C> = Box<dyn Fn(&T) -> C + 'static>;
type RenderNoMoreCards<C> = Box<dyn Fn() -> C + 'static>;

pub struct Deck<T, C> {
    runtime: RuntimeHandle,
    data: Vec<T>,
    options: DeckOptions,
    render_card: RenderCard<T, C>,
    render_no_more_cards: RenderNoMoreCards<C>,
    controller: DeckController<T>,
}

impl<T: Clone + 'static, C> Deck<T, C> {
    pub fn builder(data: impl Into<Vec<T>>, options: DeckOptions) -> DeckBuilder<T, C> {
        DeckBuilder::new(data, options)
    }

    /// Route a pointer event to the active card. Handled events are consumed.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent) -> bool {
        let handled = self.controller.on_pointer_event(event, &self.data);
        if handled {
            event.consume();
        }
        handled
    }

    /// Run animation callbacks for the frame at `frame_time_nanos`.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
    }

    /// Produce the scene for the current state.
    ///
    /// An exhausted deck renders the no-more-cards view; under
    /// [`ExhaustionPolicy::Recycle`] the index then resets so the following
    /// pass shows the first card again.
    pub fn render(&mut self) -> DeckScene<C> {
        self.runtime.take_render_request();
        let frame = StackFrame {
            current_index: self.controller.current_index(),
            drag_position: self.controller.drag_position(),
            rotation_degrees: self.controller.rotation_degrees(),
            layout_shift: self.controller.layout_shift(),
        };
        let scene = render_stack(
            &self.data,
            &frame,
            &self.options,
            &*self.render_card,
            &*self.render_no_more_cards,
        );
        self.controller.recycle_if_exhausted(self.data.len());
        scene
    }

    /// True while the host should keep pumping frames or re-render.
    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_render() || self.runtime.has_frame_callbacks()
    }

    /// True when deck state changed since the last [`Deck::render`].
    pub fn needs_render(&self) -> bool {
        self.runtime.needs_render()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn drag_position(&self) -> Point {
        self.controller.drag_position()
    }

    pub fn phase(&self) -> DeckPhase {
        self.controller.phase()
    }

    pub fn is_exhausted(&self) -> bool {
        self.controller.current_index() >= self.data.len()
    }

    pub fn active_card_rotation(&self) -> f32 {
        self.controller.rotation_degrees()
    }

    /// Bounds of the active card, `None` once the deck is exhausted.
    pub fn active_card_bounds(&self) -> Option<Rect> {
        (!self.is_exhausted()).then(|| self.controller.active_card_bounds())
    }

    /// Item on top of the deck.
    pub fn active_item(&self) -> Option<&T> {
        self.data.get(self.controller.current_index())
    }

    /// Start over from the first card. Refused while a swipe is resolving.
    pub fn reset(&mut self) -> bool {
        self.controller.reset()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }
}

/// Collects a deck's renderers and callbacks before construction.
pub struct DeckBuilder<T, C> {
    data: Vec<T>,
    options: DeckOptions,
    render_card: Option<RenderCard<T, C>>,
    render_no_more_cards: Option<RenderNoMoreCards<C>>,
    on_swipe_left: Option<SwipeHandler<T>>,
    on_swipe_right: Option<SwipeHandler<T>>,
}

impl<T: Clone + 'static, C> DeckBuilder<T, C> {
    pub fn new(data: impl Into<Vec<T>>, options: DeckOptions) -> Self {
        Self {
            data: data.into(),
            options,
            render_card: None,
            render_no_more_cards: None,
            on_swipe_left: None,
            on_swipe_right: None,
        }
    }

    /// Renders the interior of one card. Required.
    pub fn render_card(mut self, render: impl Fn(&T) -> C + 'static) -> Self {
        self.render_card = Some(Box::new(render));
        self
    }

    /// Renders the view shown once every card has been swiped. Required.
    pub fn render_no_more_cards(mut self, render: impl Fn() -> C + 'static) -> Self {
        self.render_no_more_cards = Some(Box::new(render));
        self
    }

    pub fn on_swipe_left(mut self, handler: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(handler));
        self
    }

    pub fn on_swipe_right(mut self, handler: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(handler));
        self
    }

    pub fn build(self, runtime: RuntimeHandle) -> Result<Deck<T, C>, DeckError> {
        self.options.validate()?;
        let render_card = self.render_card.ok_or(DeckError::MissingRenderCard)?;
        let render_no_more_cards = self
            .render_no_more_cards
            .ok_or(DeckError::MissingRenderNoMoreCards)?;

        log::debug!(
            "building deck of {} cards, viewport width {}",
            self.data.len(),
            self.options.viewport_width
        );
        let callbacks = SwipeCallbacks::new(self.on_swipe_left, self.on_swipe_right);
        let controller = DeckController::new(self.options, callbacks, runtime.clone());
        Ok(Deck {
            runtime,
            data: self.data,
            options: self.options,
            render_card,
            render_no_more_cards,
            controller,
        })
    }
}
