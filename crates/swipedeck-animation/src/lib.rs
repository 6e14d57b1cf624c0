//! Animation system for SwipeDeck
//!
//! Tween and spring animations driven by the runtime frame clock, plus the
//! piecewise-linear [`interpolate`] used to derive transforms from animated
//! values.

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::interpolate;
