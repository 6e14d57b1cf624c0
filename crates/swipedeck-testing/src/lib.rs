//! Testing utilities and harness for SwipeDeck

pub mod recorder;
pub mod robot;
pub mod robot_assertions;

pub use recorder::{SwipeEvent, SwipeRecorder};
pub use robot::*;

pub mod prelude {
    pub use crate::recorder::{SwipeEvent, SwipeRecorder};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
