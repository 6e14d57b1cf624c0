//! Core runtime for SwipeDeck
//!
//! A single-threaded frame runtime: one-shot frame callbacks, a render
//! invalidation flag, and observable state. Hosts pump frames by calling
//! [`RuntimeHandle::drain_frame_callbacks`] with a monotonic frame time.

mod frame_clock;
mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{ManualScheduler, RuntimeScheduler};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};
