use crate::frame_clock::FrameClock;
use crate::platform::{ManualScheduler, RuntimeScheduler};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Box<dyn FnOnce(u64) + 'static>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    next_frame_callback_id: Cell<FrameCallbackId>,
    frame_callbacks: RefCell<SmallVec<[FrameCallbackEntry; 4]>>,
    needs_render: Cell<bool>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            next_frame_callback_id: Cell::new(1),
            frame_callbacks: RefCell::new(SmallVec::new()),
            // The first frame always renders.
            needs_render: Cell::new(true),
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push(FrameCallbackEntry { id, callback });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Callbacks registered while draining run on the next frame.
        let pending: SmallVec<[FrameCallbackEntry; 4]> =
            std::mem::take(&mut *self.frame_callbacks.borrow_mut());
        if !pending.is_empty() {
            log::trace!(
                "draining {} frame callbacks at {}ns",
                pending.len(),
                frame_time_nanos
            );
        }
        for entry in pending {
            (entry.callback)(frame_time_nanos);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn request_render(&self) {
        if !self.needs_render.replace(true) {
            self.scheduler.schedule_frame();
        }
    }
}

/// Owner of the frame-callback registry and render invalidation flag.
///
/// Everything that animates or holds observable state keeps a
/// [`RuntimeHandle`]; dropping the `Runtime` turns those handles inert.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    /// Runtime for hosts that drive frames explicitly.
    pub fn manual() -> Self {
        Self::new(Arc::new(ManualScheduler))
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::manual()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Run every callback registered before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    /// Mark the scene as stale so the host renders on its next frame.
    pub fn request_render(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.request_render();
        }
    }

    pub fn needs_render(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_render.get())
            .unwrap_or(false)
    }

    /// Clear the render request, returning whether one was pending.
    pub fn take_render_request(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_render.replace(false))
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
