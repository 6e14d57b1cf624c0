//! Platform abstraction for the SwipeDeck runtime.
//!
//! The host decides when frames happen. The runtime only tells it that one
//! is wanted.

/// Schedules frames on behalf of the runtime.
///
/// Implementations must be safe to use from multiple threads even though the
/// runtime itself is single-threaded; hosts usually forward the request to
/// their event loop proxy.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that pump frames themselves (tests, headless demos).
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualScheduler;

impl RuntimeScheduler for ManualScheduler {
    fn schedule_frame(&self) {}
}
