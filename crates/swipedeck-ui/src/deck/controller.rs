//! Gesture and swipe state machine for the active card.
//!
//! The controller owns the top-card index, the active card's animated drag
//! position and the drag recogniser. Pointer events move the card directly;
//! a release either commits a swipe (tween off-screen, fire the directional
//! callback, advance the index) or springs the card back to rest.

use std::cell::RefCell;
use std::rc::Rc;

use super::layout_transition::LayoutTransition;
use super::options::{DeckOptions, ExhaustionPolicy};
use swipedeck_animation::{interpolate, Animatable, AnimationSpec, AnimationType};
use swipedeck_core::{MutableState, RuntimeHandle};
use swipedeck_foundation::{DragGesture, DragUpdate, PointerEvent, PointerEventKind};
use swipedeck_ui_graphics::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the horizontal exit travel.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Where a released card is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    SpringBack,
    Commit(SwipeDirection),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeckPhase {
    /// Card at rest, waiting for a gesture.
    #[default]
    Settled,
    /// Card tracks the pointer.
    Dragging,
    /// Card animates toward its exit point or back to rest.
    Resolving(Resolution),
}

pub(crate) type SwipeHandler<T> = Box<dyn FnMut(&T) + 'static>;

pub(crate) struct SwipeCallbacks<T> {
    on_swipe_left: SwipeHandler<T>,
    on_swipe_right: SwipeHandler<T>,
}

fn ignore_swipe<T>(_: &T) {}

impl<T: 'static> SwipeCallbacks<T> {
    /// Missing handlers become no-ops.
    pub(crate) fn new(
        on_swipe_left: Option<SwipeHandler<T>>,
        on_swipe_right: Option<SwipeHandler<T>>,
    ) -> Self {
        let noop = || -> SwipeHandler<T> { Box::new(ignore_swipe::<T>) };
        Self {
            on_swipe_left: on_swipe_left.unwrap_or_else(noop),
            on_swipe_right: on_swipe_right.unwrap_or_else(noop),
        }
    }

    fn dispatch(&mut self, direction: SwipeDirection, item: &T) {
        match direction {
            SwipeDirection::Left => (self.on_swipe_left)(item),
            SwipeDirection::Right => (self.on_swipe_right)(item),
        }
    }
}

#[derive(Default)]
struct GestureState {
    phase: DeckPhase,
    drag: DragGesture,
}

pub(crate) struct DeckController<T> {
    options: DeckOptions,
    position: Animatable<Point>,
    index: MutableState<usize>,
    gesture: Rc<RefCell<GestureState>>,
    callbacks: Rc<RefCell<SwipeCallbacks<T>>>,
    layout_transition: LayoutTransition,
}

impl<T: Clone + 'static> DeckController<T> {
    pub(crate) fn new(
        options: DeckOptions,
        callbacks: SwipeCallbacks<T>,
        runtime: RuntimeHandle,
    ) -> Self {
        Self {
            options,
            position: Animatable::new(Point::ZERO, runtime.clone()),
            index: MutableState::with_runtime(0, runtime.clone()),
            gesture: Rc::new(RefCell::new(GestureState::default())),
            callbacks: Rc::new(RefCell::new(callbacks)),
            layout_transition: LayoutTransition::new(
                options.layout_animations,
                options.stack_offset,
                options.spring,
                runtime,
            ),
        }
    }

    pub(crate) fn current_index(&self) -> usize {
        self.index.value()
    }

    pub(crate) fn drag_position(&self) -> Point {
        self.position.value()
    }

    pub(crate) fn phase(&self) -> DeckPhase {
        self.gesture.borrow().phase
    }

    pub(crate) fn layout_shift(&self) -> f32 {
        self.layout_transition.shift()
    }

    /// Rotation of the active card, derived from the horizontal drag.
    pub(crate) fn rotation_degrees(&self) -> f32 {
        let width = self.options.viewport_width;
        let max = self.options.max_rotation_degrees;
        interpolate(
            self.position.value().x,
            &[-width, 0.0, width],
            &[-max, 0.0, max],
        )
    }

    /// Bounds of the active card as currently drawn, rotation ignored.
    pub(crate) fn active_card_bounds(&self) -> Rect {
        let drag = self.position.value();
        Rect::from_size(self.options.card_size()).translate(drag.x, drag.y + self.layout_shift())
    }

    /// Feed one pointer event. Returns true if the deck handled it.
    pub(crate) fn on_pointer_event(&self, event: &PointerEvent, data: &[T]) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event, data.len()),
            _ => {
                let update = self.gesture.borrow_mut().drag.on_event(event);
                match update {
                    Some(DragUpdate::Moved(delta)) => {
                        log::trace!("drag moved to ({:.1}, {:.1})", delta.x, delta.y);
                        self.position.snap_to(delta);
                        true
                    }
                    Some(DragUpdate::Released(delta)) => {
                        self.release(delta, data);
                        true
                    }
                    Some(DragUpdate::Cancelled(_)) => {
                        self.spring_back();
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn on_pointer_down(&self, event: &PointerEvent, len: usize) -> bool {
        let phase = self.phase();
        if let DeckPhase::Resolving(Resolution::Commit(_)) = phase {
            log::trace!("ignoring pointer down while a swipe resolves");
            return false;
        }
        if self.current_index() >= len {
            log::trace!("ignoring pointer down on exhausted deck");
            return false;
        }
        // A second press from the same pointer means its release was lost.
        let stale = {
            let mut gesture = self.gesture.borrow_mut();
            let stale = gesture.drag.session().map(|session| session.pointer) == Some(event.id);
            if stale {
                log::trace!("pointer {} pressed again without release", event.id);
                gesture.drag.reset();
            }
            stale
        };
        let bounds = self.active_card_bounds();
        if !bounds.contains(event.position.x, event.position.y) {
            if stale {
                self.spring_back();
            }
            return false;
        }

        let mut gesture = self.gesture.borrow_mut();
        if !gesture.drag.start(event) {
            return false;
        }
        if phase == DeckPhase::Resolving(Resolution::SpringBack) {
            // Grab the card mid-flight.
            self.position.stop();
        }
        gesture.phase = DeckPhase::Dragging;
        true
    }

    fn release(&self, delta: Point, data: &[T]) {
        let threshold = self.options.swipe_threshold();
        let direction = if delta.x > threshold {
            Some(SwipeDirection::Right)
        } else if delta.x < -threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        };

        let index = self.current_index();
        match direction.zip(data.get(index)) {
            Some((direction, item)) => self.commit(direction, index, item.clone()),
            None => self.spring_back(),
        }
    }

    /// Animate the active card off-screen, then finish the swipe.
    ///
    /// `item` is captured here so the callback sees the card that was swiped
    /// even if the index moves before the animation completes.
    fn commit(&self, direction: SwipeDirection, index: usize, item: T) {
        log::debug!("committing {:?} swipe of card {}", direction, index);
        self.gesture.borrow_mut().phase = DeckPhase::Resolving(Resolution::Commit(direction));

        let exit = Point::new(direction.sign() * self.options.viewport_width, 0.0);
        let animation =
            AnimationType::Tween(AnimationSpec::linear(self.options.swipe_out_duration_millis));

        let position = self.position.downgrade();
        let index_state = self.index.clone();
        let gesture = Rc::clone(&self.gesture);
        let callbacks = Rc::clone(&self.callbacks);
        let layout_transition = self.layout_transition.clone();

        self.position.animate_to_then(exit, animation, move || {
            callbacks.borrow_mut().dispatch(direction, &item);
            if let Some(position) = position.upgrade() {
                position.snap_to(Point::ZERO);
            }
            layout_transition.start();
            index_state.update(|index| *index += 1);
            gesture.borrow_mut().phase = DeckPhase::Settled;
            log::debug!("swipe of card {} finished", index);
        });
    }

    fn spring_back(&self) {
        let from = self.position.value();
        log::debug!("springing back from ({:.1}, {:.1})", from.x, from.y);
        self.gesture.borrow_mut().phase = DeckPhase::Resolving(Resolution::SpringBack);

        let gesture = Rc::clone(&self.gesture);
        self.position.animate_to_then(
            Point::ZERO,
            AnimationType::Spring(self.options.spring),
            move || {
                let mut gesture = gesture.borrow_mut();
                if gesture.phase == DeckPhase::Resolving(Resolution::SpringBack) {
                    gesture.phase = DeckPhase::Settled;
                }
            },
        );
    }

    /// Post-render effect: restart an exhausted deck under the recycling policy.
    ///
    /// Returns true if the index was reset.
    pub(crate) fn recycle_if_exhausted(&self, len: usize) -> bool {
        if self.options.exhaustion != ExhaustionPolicy::Recycle {
            return false;
        }
        let index = self.current_index();
        if index < len || index == 0 {
            return false;
        }
        log::debug!("deck exhausted after {} cards, recycling", index);
        // The first card returns to its resting slot, not from one slot below.
        self.layout_transition.cancel();
        self.index.set_value(0);
        true
    }

    /// Return to the first card. Refused while a swipe is resolving.
    pub(crate) fn reset(&self) -> bool {
        if let DeckPhase::Resolving(Resolution::Commit(_)) = self.phase() {
            return false;
        }
        log::debug!("resetting deck to the first card");
        {
            let mut gesture = self.gesture.borrow_mut();
            gesture.drag.reset();
            gesture.phase = DeckPhase::Settled;
        }
        self.position.snap_to(Point::ZERO);
        self.layout_transition.cancel();
        self.index.set_value(0);
        true
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.position.is_running() || self.layout_transition.is_running()
    }
}
