//! Assertion utilities for robot testing
//!
//! Helpers for validating rendered deck scenes in robot tests.

use swipedeck_ui::DeckScene;
use swipedeck_ui_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the card drawn on top shows the item at `index`.
pub fn assert_top_card<C>(scene: &DeckScene<C>, index: usize, msg: &str) {
    let top = scene.top_card().map(|card| card.index);
    assert_eq!(top, Some(index), "{}: unexpected top card", msg);
}

/// Assert the draw order of a scene by data index, back to front.
pub fn assert_draw_order<C>(scene: &DeckScene<C>, expected: &[usize], msg: &str) {
    let order: Vec<usize> = scene.layers().iter().map(|card| card.index).collect();
    assert_eq!(order, expected, "{}: unexpected draw order", msg);
}

/// Assert that exactly one layer, the top one, accepts input.
pub fn assert_only_top_interactive<C>(scene: &DeckScene<C>, msg: &str) {
    let interactive: Vec<usize> = scene
        .layers()
        .iter()
        .filter(|card| card.interactive)
        .map(|card| card.index)
        .collect();
    let top: Vec<usize> = scene.top_card().map(|card| card.index).into_iter().collect();
    assert_eq!(interactive, top, "{}: interactive layers", msg);
}

/// Assert that the scene is the no-more-cards view.
pub fn assert_exhausted<C: std::fmt::Debug>(scene: &DeckScene<C>, msg: &str) {
    assert!(
        scene.is_exhausted(),
        "{}: expected the no-more-cards view, got {:?}",
        msg,
        scene
    );
}
