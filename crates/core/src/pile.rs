//! Pile module - ordered card stacks and their per-variant policies
//!
//! Every pile on the table, plus the drag buffer, is a [`Pile`]. The variant tag
//! ([`PileKind`]) selects an entry in a small policy table instead of a type
//! hierarchy:
//!
//! | Variant | Fans down | Orientation on relayout | Drop target |
//! |---------|-----------|-------------------------|-------------|
//! | Tableau | yes | as each card says | yes |
//! | Stock | no | forced face down | no |
//! | Waste | no | forced face up | no |
//! | Foundation | no | forced face up | yes |
//! | Moving | yes | as each card says | no |
//!
//! Card positions are never stored; they are derived from the pile origin, the
//! card index and the [`CardMetrics`], so a relayout after a restore is just the
//! orientation pass.

use arrayvec::ArrayVec;

use crate::types::{Card, CardMetrics, PileKind, Point, Rect, DECK_SIZE};

/// Card storage for a single pile. No pile can ever hold more than the deck.
pub type Cards = ArrayVec<Card, DECK_SIZE>;

/// Serialized pile contents, bottom first
pub type PileState = Vec<Card>;

/// How relayout treats card orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Leave each card's own flag alone
    AsIs,
    ForceDown,
    ForceUp,
}

/// Per-variant behavior table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPolicy {
    pub fans: bool,
    pub orientation: Orientation,
    pub drop_target: bool,
}

/// Look up the policy for a pile variant
pub const fn policy(kind: PileKind) -> VariantPolicy {
    match kind {
        PileKind::Tableau => VariantPolicy {
            fans: true,
            orientation: Orientation::AsIs,
            drop_target: true,
        },
        PileKind::Stock => VariantPolicy {
            fans: false,
            orientation: Orientation::ForceDown,
            drop_target: false,
        },
        PileKind::Waste => VariantPolicy {
            fans: false,
            orientation: Orientation::ForceUp,
            drop_target: false,
        },
        PileKind::Foundation => VariantPolicy {
            fans: false,
            orientation: Orientation::ForceUp,
            drop_target: true,
        },
        PileKind::Moving => VariantPolicy {
            fans: true,
            orientation: Orientation::AsIs,
            drop_target: false,
        },
    }
}

/// An ordered stack of cards; the last card is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    origin: Point,
    metrics: CardMetrics,
    cards: Cards,
}

impl Pile {
    pub fn new(kind: PileKind, origin: Point, metrics: CardMetrics) -> Self {
        Self {
            kind,
            origin,
            metrics,
            cards: Cards::new(),
        }
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn policy(&self) -> VariantPolicy {
        policy(self.kind)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the pile anchor. Card positions follow since they are derived.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn metrics(&self) -> CardMetrics {
        self.metrics
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The bottom card; for the drag buffer this is the lead card.
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Append one card on top and relayout.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
        self.relayout();
    }

    /// Append cards in order (first element lands lowest) and relayout.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.relayout();
    }

    /// Remove and return `cards[index..]`, preserving order.
    ///
    /// An out-of-range index removes nothing.
    pub fn remove_from(&mut self, index: usize) -> Cards {
        if index >= self.cards.len() {
            return Cards::new();
        }
        self.cards.drain(index..).collect()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return every card, bottom first.
    pub fn take_all(&mut self) -> Cards {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Apply the variant's orientation policy to every card.
    pub fn relayout(&mut self) {
        let forced = match self.policy().orientation {
            Orientation::AsIs => return,
            Orientation::ForceDown => false,
            Orientation::ForceUp => true,
        };
        for card in self.cards.iter_mut() {
            card.face_up = forced;
        }
    }

    /// Turn the top card face up if it is face down.
    ///
    /// Returns true if a card was flipped.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Top-left corner of the card at `index`
    pub fn card_origin(&self, index: usize) -> Point {
        if self.policy().fans {
            self.origin.offset(0, index as i32 * self.metrics.fan_spacing)
        } else {
            self.origin
        }
    }

    /// Full card rectangle for the card at `index`.
    ///
    /// Fanned cards overlap; hit-testing callers scan from the top down.
    pub fn card_rect(&self, index: usize) -> Rect {
        Rect::at(self.card_origin(index), self.metrics.width, self.metrics.height)
    }

    /// The base slot, independent of contents
    pub fn slot_rect(&self) -> Rect {
        Rect::at(self.origin, self.metrics.width, self.metrics.height)
    }

    /// Interactive region: the empty slot, or the top card's rectangle.
    pub fn footprint(&self) -> Rect {
        match self.cards.len() {
            0 => self.slot_rect(),
            n => self.card_rect(n - 1),
        }
    }

    /// Contents as `(rank, suit, face_up)` records, bottom first
    pub fn state(&self) -> PileState {
        self.cards.to_vec()
    }

    /// Replace the contents from a saved state and relayout.
    pub fn set_state(&mut self, state: &[Card]) {
        self.cards.clear();
        self.cards.extend(state.iter().copied().take(DECK_SIZE));
        self.relayout();
    }
}
