//! Headless SwipeDeck demo.
//!
//! Builds a deck over eight sample cards and replays a scripted session of
//! swipes, logging every scene the host would draw.

mod cards;

use anyhow::Context;
use cards::{render_card, render_no_more_cards, sample_cards, SampleCard};
use swipedeck_core::Runtime;
use swipedeck_foundation::PointerEvent;
use swipedeck_ui::{Deck, DeckOptions, DeckScene};
use web_time::Instant;

const VIEWPORT_WIDTH: f32 = 390.0;
const FRAME_NANOS: u64 = 16_666_667;
const MAX_FRAMES_PER_GESTURE: usize = 600;
const DRAG_STEPS: usize = 12;

/// One scripted gesture: a horizontal drag released at `dx`.
#[derive(Clone, Copy, Debug)]
enum Gesture {
    Drag { dx: f32 },
    /// Drag to `dx`, then lose the pointer stream.
    Cancelled { dx: f32 },
}

const SESSION: &[Gesture] = &[
    Gesture::Drag { dx: 180.0 },
    Gesture::Drag { dx: 40.0 },
    Gesture::Drag { dx: -220.0 },
    Gesture::Cancelled { dx: 250.0 },
    Gesture::Drag { dx: -120.0 },
    Gesture::Drag { dx: 300.0 },
    Gesture::Drag { dx: 160.0 },
    Gesture::Drag { dx: -160.0 },
    Gesture::Drag { dx: 200.0 },
    Gesture::Drag { dx: -200.0 },
    Gesture::Drag { dx: 200.0 },
];

struct Host {
    runtime: Runtime,
    deck: Deck<SampleCard, String>,
    frame_time_nanos: u64,
    frames_rendered: usize,
}

impl Host {
    fn new() -> anyhow::Result<Self> {
        let runtime = Runtime::manual();
        let deck = Deck::builder(sample_cards(), DeckOptions::new(VIEWPORT_WIDTH))
            .render_card(render_card)
            .render_no_more_cards(render_no_more_cards)
            .on_swipe_left(|card: &SampleCard| log::info!("swiped left: {}", card.text))
            .on_swipe_right(|card: &SampleCard| log::info!("swiped right: {}", card.text))
            .build(runtime.handle())
            .context("building the sample deck")?;
        Ok(Self {
            runtime,
            deck,
            frame_time_nanos: 0,
            frames_rendered: 0,
        })
    }

    fn play(&mut self, gesture: Gesture) {
        let (dx, cancelled) = match gesture {
            Gesture::Drag { dx } => (dx, false),
            Gesture::Cancelled { dx } => (dx, true),
        };
        let start = match self.deck.active_card_bounds() {
            Some(bounds) => bounds.center(),
            None => {
                log::info!("nothing to swipe");
                return;
            }
        };

        self.deck.dispatch_pointer(&PointerEvent::down(start.x, start.y));
        for step in 1..=DRAG_STEPS {
            let x = start.x + dx * step as f32 / DRAG_STEPS as f32;
            self.deck.dispatch_pointer(&PointerEvent::moved(x, start.y));
            self.render_if_needed();
        }
        let end = start.x + dx;
        if cancelled {
            self.deck.dispatch_pointer(&PointerEvent::cancel(end, start.y));
        } else {
            self.deck.dispatch_pointer(&PointerEvent::up(end, start.y));
        }
        self.settle();
    }

    fn settle(&mut self) {
        for _ in 0..MAX_FRAMES_PER_GESTURE {
            if !self.deck.needs_frame() {
                return;
            }
            self.frame_time_nanos += FRAME_NANOS;
            self.deck.advance_frame(self.frame_time_nanos);
            self.render_if_needed();
        }
        log::warn!(
            "deck did not settle within {MAX_FRAMES_PER_GESTURE} frames (frame callbacks pending: {})",
            self.runtime.handle().has_frame_callbacks()
        );
    }

    fn render_if_needed(&mut self) {
        if !self.deck.needs_render() {
            return;
        }
        let scene = self.deck.render();
        self.frames_rendered += 1;
        match &scene {
            DeckScene::NoMoreCards(view) => log::info!("scene: {view}"),
            DeckScene::Cards(layers) => {
                if let Some(top) = scene.top_card() {
                    log::debug!(
                        "scene: {} cards, top {} at x {:.1} rotated {:.1}°",
                        layers.len(),
                        top.content,
                        top.layer.translation_x,
                        top.layer.rotation_z
                    );
                }
            }
        }
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let started = Instant::now();
    let mut host = Host::new()?;
    host.render_if_needed();

    for (step, gesture) in SESSION.iter().enumerate() {
        log::info!(
            "gesture {} {:?} on card index {}",
            step + 1,
            gesture,
            host.deck.current_index()
        );
        host.play(*gesture);
    }

    log::info!(
        "session finished on card index {} after {} rendered frames in {:?}",
        host.deck.current_index(),
        host.frames_rendered,
        started.elapsed()
    );
    Ok(())
}
