//! Robot testing harness for decks
//!
//! [`DeckRobot`] owns a manual runtime and a deck and plays the host: it
//! sends pointer events, advances frame time in fixed steps and renders
//! whenever the deck asks for it. Every rendered frame is summarised so
//! tests can assert on what a user would have seen, including views that
//! were only on screen for a single frame.
//!
//! # Example
//!
//! ```
//! use swipedeck_testing::DeckRobot;
//! use swipedeck_ui::{Deck, DeckOptions};
//!
//! let mut robot = DeckRobot::launch(|runtime| {
//!     Deck::builder(vec!["A", "B"], DeckOptions::new(400.0))
//!         .render_card(|item: &&str| item.to_string())
//!         .render_no_more_cards(|| "done".to_string())
//!         .build(runtime)
//! })
//! .expect("deck builds");
//!
//! robot.swipe_right(200.0);
//! assert_eq!(robot.current_index(), 1);
//! ```

use swipedeck_core::{Runtime, RuntimeHandle};
use swipedeck_foundation::{PointerEvent, PointerId};
use swipedeck_ui::{Deck, DeckError, DeckScene};
use swipedeck_ui_graphics::Point;

/// Frame interval of a 60 Hz display.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound for [`DeckRobot::wait_for_idle`], ten seconds of frames.
pub const MAX_IDLE_FRAMES: usize = 600;

const DRAG_STEPS: usize = 10;
const ROBOT_POINTER: PointerId = 1;

/// Summary of one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRecord {
    pub frame_time_nanos: u64,
    pub current_index: usize,
    /// The no-more-cards view was on screen.
    pub exhausted: bool,
    /// Data index of the card drawn on top.
    pub top_index: Option<usize>,
    pub layer_count: usize,
}

impl FrameRecord {
    fn capture<C>(frame_time_nanos: u64, current_index: usize, scene: &DeckScene<C>) -> Self {
        Self {
            frame_time_nanos,
            current_index,
            exhausted: scene.is_exhausted(),
            top_index: scene.top_card().map(|card| card.index),
            layer_count: scene.layers().len(),
        }
    }
}

/// Drives a [`Deck`] the way a host would.
pub struct DeckRobot<T, C> {
    deck: Deck<T, C>,
    runtime: Runtime,
    frame_time_nanos: u64,
    cursor: Point,
    frames: Vec<FrameRecord>,
    last_scene: Option<DeckScene<C>>,
}

impl<T: Clone + 'static, C> DeckRobot<T, C> {
    /// Build a deck on a fresh manual runtime and render its first frame.
    pub fn launch(
        build: impl FnOnce(RuntimeHandle) -> Result<Deck<T, C>, DeckError>,
    ) -> Result<Self, DeckError> {
        let runtime = Runtime::manual();
        let deck = build(runtime.handle())?;
        let mut robot = Self {
            deck,
            runtime,
            frame_time_nanos: 0,
            cursor: Point::ZERO,
            frames: Vec::new(),
            last_scene: None,
        };
        robot.render();
        Ok(robot)
    }

    /// Press the pointer at the given position.
    ///
    /// Returns true if the deck handled the press.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.dispatch(PointerEvent::down(x, y))
    }

    /// Move the pointer, pressed or not.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.dispatch(PointerEvent::moved(x, y))
    }

    /// Release the pointer where it currently is.
    pub fn release(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.dispatch(PointerEvent::up(x, y))
    }

    /// Cancel the current pointer stream, as when the system steals it.
    pub fn cancel(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.dispatch(PointerEvent::cancel(x, y))
    }

    /// Press, move in steps to the target and release, then wait for idle.
    ///
    /// Returns true if the deck accepted the press.
    pub fn drag(&mut self, from: Point, to: Point) -> bool {
        let accepted = self.press(from.x, from.y);
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.move_to(x, y);
        }
        self.release();
        self.wait_for_idle();
        accepted
    }

    /// Drag the active card right by `distance` from its centre.
    pub fn swipe_right(&mut self, distance: f32) -> bool {
        self.swipe_by(distance)
    }

    /// Drag the active card left by `distance` from its centre.
    pub fn swipe_left(&mut self, distance: f32) -> bool {
        self.swipe_by(-distance)
    }

    fn swipe_by(&mut self, dx: f32) -> bool {
        let from = self.card_center();
        self.drag(from, Point::new(from.x + dx, from.y))
    }

    /// Centre of the active card, or of the resting card slot once exhausted.
    pub fn card_center(&self) -> Point {
        match self.deck.active_card_bounds() {
            Some(bounds) => bounds.center(),
            None => {
                let size = self.deck.options().card_size();
                Point::new(size.width / 2.0, size.height / 2.0)
            }
        }
    }

    /// Advance time by one frame, run animations and render if needed.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_NANOS;
        self.deck.advance_frame(self.frame_time_nanos);
        self.render_if_needed();
    }

    /// Advance `count` frames.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    /// Pump frames until nothing is animating or waiting to render.
    ///
    /// Returns false if the deck was still busy after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> bool {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.deck.needs_frame() {
                return true;
            }
            self.advance_frame();
        }
        log::warn!(
            "deck still busy after {} frames (frame callbacks pending: {})",
            MAX_IDLE_FRAMES,
            self.runtime.handle().has_frame_callbacks()
        );
        !self.deck.needs_frame()
    }

    /// Render unconditionally and record the frame.
    pub fn render(&mut self) -> &DeckScene<C> {
        let current_index = self.deck.current_index();
        let scene = self.deck.render();
        self.frames.push(FrameRecord::capture(
            self.frame_time_nanos,
            current_index,
            &scene,
        ));
        self.last_scene.insert(scene)
    }

    fn render_if_needed(&mut self) {
        if self.deck.needs_render() {
            self.render();
        }
    }

    fn dispatch(&mut self, event: PointerEvent) -> bool {
        let handled = self.deck.dispatch_pointer(&event.with_id(ROBOT_POINTER));
        self.render_if_needed();
        handled
    }

    pub fn current_index(&self) -> usize {
        self.deck.current_index()
    }

    /// Every frame rendered so far, oldest first.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Forget recorded frames, keeping the latest scene.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Number of recorded frames that showed the no-more-cards view.
    pub fn exhausted_frame_count(&self) -> usize {
        self.frames.iter().filter(|frame| frame.exhausted).count()
    }

    pub fn last_scene(&self) -> Option<&DeckScene<C>> {
        self.last_scene.as_ref()
    }

    pub fn deck(&self) -> &Deck<T, C> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck<T, C> {
        &mut self.deck
    }
}
