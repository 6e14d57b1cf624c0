use std::cell::Cell;
use std::rc::Rc;
use swipedeck_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// Handlers consume the events they act on so the host can route the rest
/// elsewhere.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position in deck coordinates.
    pub position: Point,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_copies() {
        let event = PointerEvent::down(1.0, 2.0).with_id(7);
        let copy = event.clone();
        assert!(!event.is_consumed());
        copy.consume();
        assert!(event.is_consumed());
        assert_eq!(copy.id, 7);
        assert_eq!(copy.position, Point::new(1.0, 2.0));
    }
}
