//! Drag gesture recogniser.
//!
//! Reports the raw cumulative delta from the press position. No touch slop,
//! smoothing or clamping is applied.

use crate::types::{PointerEvent, PointerEventKind, PointerId};
use swipedeck_ui_graphics::Point;

/// One drag from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer: PointerId,
    pub start: Point,
    pub delta: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Cumulative delta while the pointer is held.
    Moved(Point),
    /// Pointer released; final cumulative delta.
    Released(Point),
    /// Input stream cancelled the gesture; last known delta.
    Cancelled(Point),
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragGesture {
    session: Option<DragSession>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session from a press event. Returns false if one is already
    /// in progress or the event is not a press.
    pub fn start(&mut self, event: &PointerEvent) -> bool {
        if self.session.is_some() || event.kind != PointerEventKind::Down {
            return false;
        }
        self.session = Some(DragSession {
            pointer: event.id,
            start: event.position,
            delta: Point::ZERO,
        });
        log::trace!(
            "drag started by pointer {} at ({:.1}, {:.1})",
            event.id,
            event.position.x,
            event.position.y
        );
        true
    }

    /// Feed a move, release or cancel event belonging to the active session.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        let session = self.session.as_mut()?;
        if session.pointer != event.id {
            return None;
        }
        match event.kind {
            PointerEventKind::Down => None,
            PointerEventKind::Move => {
                session.delta = event.position - session.start;
                Some(DragUpdate::Moved(session.delta))
            }
            PointerEventKind::Up => {
                let delta = event.position - session.start;
                self.session = None;
                Some(DragUpdate::Released(delta))
            }
            PointerEventKind::Cancel => {
                let delta = session.delta;
                self.session = None;
                Some(DragUpdate::Cancelled(delta))
            }
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn reset(&mut self) {
        self.session = None;
    }
}
