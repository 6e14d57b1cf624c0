//! Card stack rendering.
//!
//! Turns the deck state into a back-to-front list of card layers, or the
//! no-more-cards view once the index runs past the data.

use super::options::DeckOptions;
use smallvec::SmallVec;
use swipedeck_ui_graphics::{GraphicsLayer, Point, Rect};

/// One card as the host should draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayer<C> {
    /// Position of the item in the deck's data.
    pub index: usize,
    pub content: C,
    /// Resting bounds, stack offset and layout transition included.
    pub bounds: Rect,
    /// Drag translation and rotation, identity for stacked cards.
    pub layer: GraphicsLayer,
    /// Only the active card receives pointer input.
    pub interactive: bool,
}

impl<C> CardLayer<C> {
    /// Bounds after the layer translation, rotation ignored.
    pub fn visual_bounds(&self) -> Rect {
        self.bounds.translate(self.layer.translation_x, self.layer.translation_y)
    }
}

/// Result of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckScene<C> {
    /// Cards ordered back-to-front: the active card is last.
    Cards(Vec<CardLayer<C>>),
    /// Every card has been swiped.
    NoMoreCards(C),
}

impl<C> DeckScene<C> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DeckScene::NoMoreCards(_))
    }

    pub fn layers(&self) -> &[CardLayer<C>] {
        match self {
            DeckScene::Cards(layers) => layers,
            DeckScene::NoMoreCards(_) => &[],
        }
    }

    /// The active card, drawn last.
    pub fn top_card(&self) -> Option<&CardLayer<C>> {
        self.layers().last()
    }

    pub fn no_more_cards(&self) -> Option<&C> {
        match self {
            DeckScene::NoMoreCards(content) => Some(content),
            DeckScene::Cards(_) => None,
        }
    }
}

/// Deck state sampled for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StackFrame {
    pub(crate) current_index: usize,
    pub(crate) drag_position: Point,
    pub(crate) rotation_degrees: f32,
    pub(crate) layout_shift: f32,
}

pub(crate) fn render_stack<T, C>(
    data: &[T],
    frame: &StackFrame,
    options: &DeckOptions,
    render_card: &dyn Fn(&T) -> C,
    render_no_more_cards: &dyn Fn() -> C,
) -> DeckScene<C> {
    let current = frame.current_index;
    if current >= data.len() {
        return DeckScene::NoMoreCards(render_no_more_cards());
    }

    let card = Rect::from_size(options.card_size());
    let end = data
        .len()
        .min(current.saturating_add(options.max_stacked_cards).saturating_add(1));

    // Front-to-back first; reversed below so the active card draws last.
    let mut layers: SmallVec<[CardLayer<C>; 4]> = data[current..end]
        .iter()
        .enumerate()
        .map(|(distance, item)| {
            let top = options.stack_offset * distance as f32 + frame.layout_shift;
            let is_active = distance == 0;
            let layer = if is_active {
                GraphicsLayer::translation(frame.drag_position).with_rotation(frame.rotation_degrees)
            } else {
                GraphicsLayer::default()
            };
            CardLayer {
                index: current + distance,
                content: render_card(item),
                bounds: card.translate(0.0, top),
                layer,
                interactive: is_active,
            }
        })
        .collect();

    layers.reverse();
    DeckScene::Cards(layers.into_vec())
}
