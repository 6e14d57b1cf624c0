//! Frame-driven animations for SwipeDeck
//!
//! Provides time-based animations with easing curves and spring physics.
//! An [`Animatable`] registers one frame callback at a time with the runtime's
//! frame clock and re-registers until the animation reaches its target.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipedeck_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use swipedeck_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Values an [`Animatable`] can drive.
pub trait Animate: Lerp + Clone + PartialEq + 'static {
    /// Magnitude of the difference between two values.
    fn distance(&self, other: &Self) -> f32;
}

impl Animate for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (other - self).abs()
    }
}

impl Animate for f64 {
    fn distance(&self, other: &Self) -> f32 {
        (other - self).abs() as f32
    }
}

impl Animate for Point {
    fn distance(&self, other: &Self) -> f32 {
        self.distance_to(*other)
    }
}

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t at this x, clamped to [0, 1].
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Progress velocity (fractions of the travel per second) below which the spring may stop.
    pub velocity_threshold: f32,
    /// Distance to the target, in value units, below which the spring may stop.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

// Integration step for spring physics. Stiff springs go unstable at 16ms.
const SPRING_TIMESTEP_SECONDS: f32 = 0.004;

type FinishedCallback = Box<dyn FnOnce() + 'static>;

/// Generic animatable value holder.
///
/// Cloning yields another handle to the same animation.
pub struct Animatable<T: Animate> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Animate> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    /// Fraction of the way from `start` to `target`; springs may overshoot.
    progress: f32,
    /// Progress units per second, spring animations only.
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_finished: Option<FinishedCallback>,
}

impl<T: Animate> AnimatableInner<T> {
    fn set_current(&mut self, value: T) {
        self.current = value.clone();
        self.state.set_value(value);
    }

    fn settle_at_target(&mut self) {
        let target = self.target.clone();
        self.set_current(target.clone());
        self.start = target;
        self.progress = 0.0;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        // Interrupted animations never report completion.
        self.on_finished = None;
    }
}

impl<T: Animate> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            progress: 0.0,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value using the specified animation.
    pub fn animate_to(&self, target: T, animation: AnimationType) {
        self.start_animation(target, animation, None);
    }

    /// Animate to `target` and call `on_finished` once the target is reached.
    ///
    /// The callback is dropped without running if the animation is
    /// interrupted by another `animate_to*`, `snap_to` or `stop`.
    pub fn animate_to_then(
        &self,
        target: T,
        animation: AnimationType,
        on_finished: impl FnOnce() + 'static,
    ) {
        self.start_animation(target, animation, Some(Box::new(on_finished)));
    }

    fn start_animation(
        &self,
        target: T,
        animation: AnimationType,
        on_finished: Option<FinishedCallback>,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_pending();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.progress = 0.0;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.on_finished = on_finished;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_pending();
        inner.target = target.clone();
        inner.settle_at_target();
    }

    /// Stop any running animation, keeping the current value.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_pending();
        inner.target = inner.current.clone();
        inner.settle_at_target();
    }

    /// Current animated value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Get the current state.
    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let mut finished = None;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            match inner.animation_type {
                AnimationType::Tween(spec) => {
                    let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                    let delay_nanos = spec.delay_millis.saturating_mul(1_000_000);

                    if elapsed_nanos < delay_nanos {
                        schedule_next = true;
                    } else {
                        let animation_elapsed = elapsed_nanos - delay_nanos;
                        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
                        let linear_progress =
                            (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);

                        if linear_progress >= 1.0 {
                            inner.settle_at_target();
                            finished = inner.on_finished.take();
                        } else {
                            let progress = spec.easing.transform(linear_progress);
                            let value = inner.start.lerp(&inner.target, progress);
                            inner.progress = progress;
                            inner.set_current(value);
                            schedule_next = true;
                        }
                    }
                }
                AnimationType::Spring(spec) => {
                    let span = inner.start.distance(&inner.target);
                    let last_frame = inner.last_frame_nanos.replace(frame_time_nanos);

                    if span <= spec.position_threshold {
                        inner.settle_at_target();
                        finished = inner.on_finished.take();
                    } else if let Some(last_frame) = last_frame {
                        // Damped harmonic oscillator in progress space, target at 1.0,
                        // integrated with semi-implicit Euler.
                        let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / 1e9;
                        let stiffness = spec.stiffness;
                        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();

                        let steps = (dt / SPRING_TIMESTEP_SECONDS).ceil().max(1.0) as u32;
                        let step = dt / steps as f32;
                        for _ in 0..steps {
                            let displacement = inner.progress - 1.0;
                            let force = -stiffness * displacement - damping * inner.velocity;
                            inner.velocity += force * step;
                            inner.progress = (inner.progress + inner.velocity * step).clamp(0.0, 2.0);
                        }

                        let value = inner.start.lerp(&inner.target, inner.progress);
                        inner.set_current(value);

                        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                        let near_target =
                            inner.current.distance(&inner.target) < spec.position_threshold;

                        if at_rest && near_target {
                            inner.settle_at_target();
                            finished = inner.on_finished.take();
                        } else {
                            schedule_next = true;
                        }
                    } else {
                        // First frame only anchors the clock.
                        schedule_next = true;
                    }
                }
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(callback) = finished {
            callback();
        }
    }
}

impl<T: Animate> Animatable<T> {
    /// Non-owning handle, for completion callbacks that must not keep the
    /// animation alive.
    pub fn downgrade(&self) -> WeakAnimatable<T> {
        WeakAnimatable {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

pub struct WeakAnimatable<T: Animate> {
    inner: Weak<RefCell<AnimatableInner<T>>>,
}

impl<T: Animate> WeakAnimatable<T> {
    pub fn upgrade(&self) -> Option<Animatable<T>> {
        self.inner.upgrade().map(|inner| Animatable { inner })
    }
}

impl<T: Animate> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
