use swipedeck_animation::{Animatable, AnimationType, SpringSpec};
use swipedeck_core::RuntimeHandle;

/// Animates the stack moving up one slot after a commit.
///
/// Holds an extra vertical shift that starts at one stack offset and springs
/// back to zero. Disabled hosts always report a zero shift.
#[derive(Clone)]
pub(crate) struct LayoutTransition {
    enabled: bool,
    slot_height: f32,
    spring: SpringSpec,
    shift: Animatable<f32>,
}

impl LayoutTransition {
    pub(crate) fn new(
        enabled: bool,
        slot_height: f32,
        spring: SpringSpec,
        runtime: RuntimeHandle,
    ) -> Self {
        Self {
            enabled,
            slot_height,
            spring,
            shift: Animatable::new(0.0, runtime),
        }
    }

    pub(crate) fn start(&self) {
        if !self.enabled {
            return;
        }
        self.shift.snap_to(self.slot_height);
        self.shift.animate_to(0.0, AnimationType::Spring(self.spring));
    }

    pub(crate) fn cancel(&self) {
        self.shift.snap_to(0.0);
    }

    pub(crate) fn shift(&self) -> f32 {
        self.shift.value()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.shift.is_running()
    }
}
