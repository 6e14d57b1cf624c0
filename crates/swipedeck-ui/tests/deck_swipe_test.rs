//! End-to-end swipe flows driven through the robot harness.

use swipedeck_testing::prelude::*;
use swipedeck_ui::{
    Deck, DeckOptions, DeckPhase, ExhaustionPolicy, Point, Rect, Size, SwipeDirection,
};

const WIDTH: f32 = 400.0;

fn launch_deck(
    data: Vec<&'static str>,
    options: DeckOptions,
    recorder: &SwipeRecorder<&'static str>,
) -> DeckRobot<&'static str, String> {
    DeckRobot::launch(|runtime| {
        Deck::builder(data, options)
            .render_card(|item: &&'static str| format!("Card {item}"))
            .render_no_more_cards(|| "No more cards".to_string())
            .on_swipe_left(recorder.left())
            .on_swipe_right(recorder.right())
            .build(runtime)
    })
    .expect("deck builds")
}

#[test]
fn first_frame_shows_stack_with_first_card_on_top() {
    let recorder = SwipeRecorder::new();
    let robot = launch_deck(vec!["A", "B", "C"], DeckOptions::new(WIDTH), &recorder);

    let scene = robot.last_scene().expect("initial render");
    robot_assertions::assert_draw_order(scene, &[2, 1, 0], "initial stack");
    robot_assertions::assert_only_top_interactive(scene, "initial stack");
    assert_eq!(
        scene.top_card().map(|card| card.content.as_str()),
        Some("Card A")
    );
    assert_eq!(robot.deck().phase(), DeckPhase::Settled);
}

#[test]
fn full_session_swipes_through_and_recycles() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B", "C"], DeckOptions::new(WIDTH), &recorder);

    assert!(robot.swipe_right(200.0));
    assert_eq!(robot.current_index(), 1);
    robot_assertions::assert_top_card(robot.last_scene().expect("scene"), 1, "after A");
    assert_eq!(robot.deck().drag_position(), Point::ZERO);

    // Short drag: below the 100px threshold.
    assert!(robot.swipe_right(10.0));
    assert_eq!(robot.current_index(), 1);
    assert_eq!(robot.deck().drag_position(), Point::ZERO);
    assert_eq!(robot.deck().phase(), DeckPhase::Settled);

    assert!(robot.swipe_left(200.0));
    assert_eq!(robot.current_index(), 2);

    robot.clear_frames();
    assert!(robot.swipe_left(200.0));
    assert_eq!(robot.exhausted_frame_count(), 1);
    assert_eq!(robot.current_index(), 0);
    robot_assertions::assert_top_card(robot.last_scene().expect("scene"), 0, "recycled");

    let exhausted_at = robot
        .frames()
        .iter()
        .position(|frame| frame.exhausted)
        .expect("terminal frame");
    let next = robot.frames()[exhausted_at + 1];
    assert_eq!(next.top_index, Some(0));

    assert_eq!(
        recorder.events(),
        vec![
            SwipeEvent {
                direction: SwipeDirection::Right,
                item: "A"
            },
            SwipeEvent {
                direction: SwipeDirection::Left,
                item: "B"
            },
            SwipeEvent {
                direction: SwipeDirection::Left,
                item: "C"
            },
        ]
    );
}

#[test]
fn each_committed_swipe_advances_index_by_one() {
    let recorder = SwipeRecorder::new();
    let data = vec!["1", "2", "3", "4", "5", "6", "7", "8"];
    let mut robot = launch_deck(data, DeckOptions::new(WIDTH), &recorder);

    for swiped in 1..=5 {
        if swiped % 2 == 0 {
            robot.swipe_left(150.0);
        } else {
            robot.swipe_right(150.0);
        }
        assert_eq!(robot.current_index(), swiped);
    }
    assert_eq!(recorder.len(), 5);
    assert_eq!(recorder.items(SwipeDirection::Right), vec!["1", "3", "5"]);
    assert_eq!(recorder.items(SwipeDirection::Left), vec!["2", "4"]);
}

#[test]
fn release_exactly_at_threshold_springs_back() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B"], DeckOptions::new(WIDTH), &recorder);

    robot.swipe_right(100.0);
    assert_eq!(robot.current_index(), 0);
    assert!(recorder.is_empty());

    robot.swipe_left(100.0);
    assert_eq!(robot.current_index(), 0);
    assert!(recorder.is_empty());

    robot.swipe_right(101.0);
    assert_eq!(robot.current_index(), 1);
    assert_eq!(recorder.items(SwipeDirection::Right), vec!["A"]);
}

#[test]
fn rotation_follows_horizontal_drag() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B"], DeckOptions::new(WIDTH), &recorder);
    let center = robot.card_center();

    assert!(robot.press(center.x, center.y));
    robot.move_to(center.x + 200.0, center.y);
    robot_assertions::assert_approx_eq(robot.deck().active_card_rotation(), 60.0, 1e-3, "+W/2");
    let top = robot
        .last_scene()
        .and_then(|scene| scene.top_card())
        .expect("top card");
    robot_assertions::assert_approx_eq(top.layer.rotation_z, 60.0, 1e-3, "layer rotation");
    assert_eq!(top.layer.translation_offset(), Point::new(200.0, 0.0));

    robot.move_to(center.x - 400.0, center.y + 30.0);
    robot_assertions::assert_approx_eq(robot.deck().active_card_rotation(), -120.0, 1e-3, "-W");
    assert_eq!(robot.deck().drag_position(), Point::new(-400.0, 30.0));

    robot.move_to(center.x, center.y + 30.0);
    assert_eq!(robot.deck().active_card_rotation(), 0.0);
}

#[test]
fn committed_card_flies_off_toward_swipe_side() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B"], DeckOptions::new(WIDTH), &recorder);
    let center = robot.card_center();

    robot.press(center.x, center.y);
    robot.move_to(center.x - 150.0, center.y);
    robot.release();
    assert_eq!(
        robot.deck().phase(),
        DeckPhase::Resolving(swipedeck_ui::Resolution::Commit(SwipeDirection::Left))
    );

    robot.advance_frames(8);
    let x = robot.deck().drag_position().x;
    assert!(x < -150.0 && x > -WIDTH, "mid-flight x = {x}");
    assert_eq!(robot.current_index(), 0);
    assert!(recorder.is_empty());

    assert!(robot.wait_for_idle());
    assert_eq!(robot.current_index(), 1);
    assert_eq!(recorder.items(SwipeDirection::Left), vec!["A"]);
}

#[test]
fn stack_slides_up_after_commit() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B", "C"], DeckOptions::new(WIDTH), &recorder);
    let center = robot.card_center();

    robot.press(center.x, center.y);
    robot.move_to(center.x + 200.0, center.y);
    robot.release();
    while robot.current_index() == 0 {
        robot.advance_frame();
    }

    let scene = robot.last_scene().expect("scene");
    let top = scene.top_card().expect("top card");
    assert_eq!(top.index, 1);
    robot_assertions::assert_rect_approx_eq(
        top.visual_bounds(),
        Rect::from_origin_size(Point::new(0.0, 10.0), Size::new(WIDTH, 300.0)),
        1e-3,
        "shifted top",
    );
    assert!(top.layer.is_identity());

    assert!(robot.wait_for_idle());
    let top = robot
        .last_scene()
        .and_then(|scene| scene.top_card())
        .expect("top card");
    assert_eq!(top.bounds.y, 0.0);
}

#[test]
fn recycled_first_card_starts_in_its_resting_slot() {
    let recorder = SwipeRecorder::new();
    let mut robot = launch_deck(vec!["A", "B"], DeckOptions::new(WIDTH), &recorder);
    robot.swipe_right(200.0);

    let center = robot.card_center();
    robot.press(center.x, center.y);
    robot.move_to(center.x + 200.0, center.y);
    robot.release();
    while robot.exhausted_frame_count() == 0 {
        robot.advance_frame();
    }
    assert_eq!(robot.current_index(), 0);
    assert!(!robot.deck().is_animating());

    robot.advance_frame();
    let top = robot
        .last_scene()
        .and_then(|scene| scene.top_card())
        .expect("top card");
    assert_eq!(top.index, 0);
    robot_assertions::assert_rect_approx_eq(
        top.visual_bounds(),
        Rect::from_size(Size::new(WIDTH, 300.0)),
        1e-3,
        "recycled top",
    );
}

#[test]
fn stack_snaps_when_layout_animations_are_unavailable() {
    let recorder = SwipeRecorder::new();
    let options = DeckOptions::new(WIDTH).layout_animations(false);
    let mut robot = launch_deck(vec!["A", "B", "C"], options, &recorder);
    let center = robot.card_center();

    robot.press(center.x, center.y);
    robot.move_to(center.x + 200.0, center.y);
    robot.release();
    while robot.current_index() == 0 {
        robot.advance_frame();
    }

    let top = robot
        .last_scene()
        .and_then(|scene| scene.top_card())
        .expect("top card");
    assert_eq!(top.bounds.y, 0.0);
    assert!(!robot.deck().is_animating());
}

#[test]
fn terminal_policy_holds_no_more_cards_until_reset() {
    let recorder = SwipeRecorder::new();
    let options = DeckOptions::new(WIDTH).exhaustion(ExhaustionPolicy::Terminal);
    let mut robot = launch_deck(vec!["A", "B"], options, &recorder);

    robot.swipe_right(200.0);
    robot.swipe_right(200.0);
    assert_eq!(robot.current_index(), 2);
    assert!(robot.deck().is_exhausted());
    assert!(robot.deck().active_card_bounds().is_none());
    let scene = robot.last_scene().expect("scene");
    robot_assertions::assert_exhausted(scene, "terminal");
    assert_eq!(scene.no_more_cards().map(String::as_str), Some("No more cards"));

    robot.advance_frames(5);
    assert_eq!(robot.current_index(), 2);

    // Nothing to grab on an exhausted deck.
    assert!(!robot.swipe_left(200.0));
    assert_eq!(recorder.len(), 2);

    assert!(robot.deck_mut().reset());
    assert!(robot.wait_for_idle());
    assert_eq!(robot.current_index(), 0);
    robot_assertions::assert_top_card(robot.last_scene().expect("scene"), 0, "after reset");
}
