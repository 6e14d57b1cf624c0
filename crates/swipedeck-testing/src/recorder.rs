use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_ui::SwipeDirection;

/// One swipe callback invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwipeEvent<T> {
    pub direction: SwipeDirection,
    pub item: T,
}

/// Collects swipe callbacks in the order they fire.
///
/// Clones share the same log, so a recorder can hand out handlers to a deck
/// builder and still be inspected afterwards.
#[derive(Clone)]
pub struct SwipeRecorder<T> {
    events: Rc<RefCell<Vec<SwipeEvent<T>>>>,
}

impl<T: Clone + 'static> SwipeRecorder<T> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handler for `on_swipe_left`.
    pub fn left(&self) -> impl FnMut(&T) + 'static {
        self.handler(SwipeDirection::Left)
    }

    /// Handler for `on_swipe_right`.
    pub fn right(&self) -> impl FnMut(&T) + 'static {
        self.handler(SwipeDirection::Right)
    }

    fn handler(&self, direction: SwipeDirection) -> impl FnMut(&T) + 'static {
        let events = Rc::clone(&self.events);
        move |item: &T| {
            events.borrow_mut().push(SwipeEvent {
                direction,
                item: item.clone(),
            })
        }
    }

    pub fn events(&self) -> Vec<SwipeEvent<T>> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn items(&self, direction: SwipeDirection) -> Vec<T> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.direction == direction)
            .map(|event| event.item.clone())
            .collect()
    }
}

impl<T: Clone + 'static> Default for SwipeRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
