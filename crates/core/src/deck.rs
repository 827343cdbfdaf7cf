//! The 52-card deck used for dealing.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Card, Suit, ACE, DECK_SIZE, KING};

/// Remaining undealt cards; `draw` takes from the end.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: ArrayVec<Card, DECK_SIZE>,
}

impl Deck {
    /// All 52 cards, face down, suit by suit from Ace to King.
    pub fn new() -> Self {
        let mut cards = ArrayVec::new();
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the last card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not yet drawn, bottom first
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Empty the deck, returning what was left bottom first; the last element
    /// is the card `draw` would have returned next.
    pub fn take_remaining(&mut self) -> ArrayVec<Card, DECK_SIZE> {
        std::mem::take(&mut self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
