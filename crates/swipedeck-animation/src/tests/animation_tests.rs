use super::*;

use std::cell::Cell;
use swipedeck_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// Pump frames until no callbacks remain, returning every observed value.
fn run_to_idle<T: Animate>(runtime: &Runtime, animatable: &Animatable<T>) -> Vec<T> {
    let handle = runtime.handle();
    let mut frame_time = 0u64;
    let mut samples = Vec::new();
    for _ in 0..600 {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        samples.push(animatable.value());
    }
    samples
}

#[test]
fn tween_interpolates_over_time() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(250)));

    assert_eq!(animatable.value(), 0.0, "value only moves on frames");
    assert!(animatable.is_running());

    let samples = run_to_idle(&runtime, &animatable);
    assert!(
        samples.iter().any(|value| *value > 0.0 && *value < 1.0),
        "animation should report intermediate values"
    );
    let last = *samples.last().expect("at least one frame");
    assert!((last - 1.0).abs() < f32::EPSILON, "animation should end at target");
    assert!(!animatable.is_running());
    // First frame anchors the clock, then 250ms at ~16.7ms per frame.
    assert_eq!(samples.len(), 16);
}

#[test]
fn tween_drives_points_along_a_line() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(Point::new(100.0, 40.0), runtime.handle());
    animatable.animate_to(
        Point::new(400.0, 0.0),
        AnimationType::Tween(AnimationSpec::linear(250)),
    );

    let samples = run_to_idle(&runtime, &animatable);
    for window in samples.windows(2) {
        assert!(window[1].x >= window[0].x, "x should grow monotonically");
        assert!(window[1].y <= window[0].y, "y should shrink monotonically");
    }
    assert_eq!(animatable.value(), Point::new(400.0, 0.0));
}

#[test]
fn completion_callback_runs_once_after_target_reached() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    let calls = Rc::new(Cell::new(0));
    let seen_value = Rc::new(Cell::new(f32::NAN));
    {
        let calls = Rc::clone(&calls);
        let seen_value = Rc::clone(&seen_value);
        let observer = animatable.clone();
        animatable.animate_to_then(
            10.0,
            AnimationType::Tween(AnimationSpec::linear(100)),
            move || {
                calls.set(calls.get() + 1);
                seen_value.set(observer.value());
            },
        );
    }

    run_to_idle(&runtime, &animatable);
    assert_eq!(calls.get(), 1);
    assert_eq!(seen_value.get(), 10.0);
}

#[test]
fn interrupted_animation_drops_completion() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    let fired = Rc::new(Cell::new(false));
    {
        let fired = Rc::clone(&fired);
        animatable.animate_to_then(
            1.0,
            AnimationType::Tween(AnimationSpec::linear(100)),
            move || fired.set(true),
        );
    }
    runtime.handle().drain_frame_callbacks(FRAME_NANOS);
    runtime.handle().drain_frame_callbacks(2 * FRAME_NANOS);
    animatable.snap_to(0.5);

    assert!(!animatable.is_running());
    assert!(!runtime.handle().has_frame_callbacks());
    run_to_idle(&runtime, &animatable);
    assert!(!fired.get());
    assert_eq!(animatable.value(), 0.5);
    assert_eq!(animatable.target(), 0.5);
}

#[test]
fn stop_freezes_current_value() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(1000)));
    for frame in 1..=10 {
        runtime.handle().drain_frame_callbacks(frame * FRAME_NANOS);
    }
    let frozen = animatable.value();
    assert!(frozen > 0.0 && frozen < 100.0);

    animatable.stop();
    assert_eq!(animatable.target(), frozen);
    assert!(run_to_idle(&runtime, &animatable).is_empty());
    assert_eq!(animatable.value(), frozen);
}

#[test]
fn spring_settles_exactly_on_target() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(Point::new(120.0, -30.0), runtime.handle());
    let settled = Rc::new(Cell::new(false));
    {
        let settled = Rc::clone(&settled);
        animatable.animate_to_then(
            Point::ZERO,
            AnimationType::Spring(SpringSpec::bouncy()),
            move || settled.set(true),
        );
    }

    let samples = run_to_idle(&runtime, &animatable);
    assert!(settled.get(), "spring should settle within 10 seconds");
    assert!(samples.iter().any(|p| p.x < 0.0), "bouncy spring overshoots");
    assert_eq!(animatable.value(), Point::ZERO);
}

#[test]
fn stiff_spring_settles_sooner_than_default() {
    let runtime = Runtime::manual();
    let default_spring = Animatable::new(200.0f32, runtime.handle());
    default_spring.animate_to(0.0, AnimationType::Spring(SpringSpec::default_spring()));
    let default_frames = run_to_idle(&runtime, &default_spring).len();

    let stiff_spring = Animatable::new(200.0f32, runtime.handle());
    stiff_spring.animate_to(0.0, AnimationType::Spring(SpringSpec::stiff()));
    let stiff_frames = run_to_idle(&runtime, &stiff_spring).len();

    assert_eq!(default_spring.value(), 0.0);
    assert_eq!(stiff_spring.value(), 0.0);
    assert!(stiff_frames <= default_frames);
}

#[test]
fn spring_to_current_value_finishes_on_first_frame() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(Point::ZERO, runtime.handle());
    let finished = Rc::new(Cell::new(false));
    {
        let finished = Rc::clone(&finished);
        animatable.animate_to_then(
            Point::ZERO,
            AnimationType::Spring(SpringSpec::default()),
            move || finished.set(true),
        );
    }
    runtime.handle().drain_frame_callbacks(FRAME_NANOS);
    assert!(finished.get());
    assert!(!animatable.is_running());
}

#[test]
fn animation_writes_request_renders() {
    let runtime = Runtime::manual();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());
    let state = animatable.state();
    handle.take_render_request();

    animatable.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(100)));
    handle.drain_frame_callbacks(FRAME_NANOS);
    assert!(!handle.needs_render(), "anchor frame does not move the value");

    handle.drain_frame_callbacks(2 * FRAME_NANOS);
    assert!(handle.needs_render());
    assert_eq!(state.get(), animatable.value());
}

#[test]
fn delayed_tween_holds_start_value() {
    let runtime = Runtime::manual();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(100)),
    );
    for frame in 1..=6 {
        runtime.handle().drain_frame_callbacks(frame * FRAME_NANOS);
    }
    assert_eq!(animatable.value(), 0.0);
    run_to_idle(&runtime, &animatable);
    assert_eq!(animatable.value(), 1.0);
}

#[test]
fn huge_durations_do_not_overflow_frame_time() {
    let runtime = Runtime::manual();
    let handle = runtime.handle();
    let long = Animatable::new(0.0f32, handle.clone());
    long.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(u64::MAX)));
    let delayed = Animatable::new(0.0f32, handle.clone());
    delayed.animate_to(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(u64::MAX)),
    );

    handle.drain_frame_callbacks(FRAME_NANOS);
    handle.drain_frame_callbacks(60 * 1_000_000_000);

    assert!(long.is_running());
    assert!(long.value() < 1e-3);
    assert!(delayed.is_running());
    assert_eq!(delayed.value(), 0.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!((start - 0.0).abs() < 0.01, "Start should be ~0 for {:?}", easing);
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {:?}", easing);
    }
}

#[test]
fn spring_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}
