//! Table module - the thirteen piles of a Klondike layout
//!
//! Seven tableau columns, four foundations, the stock and the waste. The table
//! owns the piles for the lifetime of the game; a new deal clears and refills
//! them in place.

use crate::deck::Deck;
use crate::pile::Pile;
use crate::types::{
    Card, Layout, PileId, PileKind, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT,
};

/// Pile scan order for pickups: tableau, then waste, then foundations.
pub const PICKUP_ORDER: [PileId; TABLEAU_COUNT + 1 + FOUNDATION_COUNT] = [
    PileId::Tableau(0),
    PileId::Tableau(1),
    PileId::Tableau(2),
    PileId::Tableau(3),
    PileId::Tableau(4),
    PileId::Tableau(5),
    PileId::Tableau(6),
    PileId::Waste,
    PileId::Foundation(0),
    PileId::Foundation(1),
    PileId::Foundation(2),
    PileId::Foundation(3),
];

/// Pile scan order for drops. The first legal overlapping pile wins.
pub const DROP_ORDER: [PileId; TABLEAU_COUNT + FOUNDATION_COUNT] = [
    PileId::Tableau(0),
    PileId::Tableau(1),
    PileId::Tableau(2),
    PileId::Tableau(3),
    PileId::Tableau(4),
    PileId::Tableau(5),
    PileId::Tableau(6),
    PileId::Foundation(0),
    PileId::Foundation(1),
    PileId::Foundation(2),
    PileId::Foundation(3),
];

/// Result of clicking the stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOutcome {
    /// The stock's top card moved face up onto the waste
    Drawn(Card),
    /// The stock was empty; the waste was turned back over into it
    Recycled { cards: usize },
    /// Both stock and waste were empty
    Empty,
}

impl StockOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, StockOutcome::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    layout: Layout,
    tableau: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    waste: Pile,
}

impl Table {
    /// Empty table with every pile at its layout origin
    pub fn new(layout: Layout) -> Self {
        let pile = |id: PileId| Pile::new(id.kind(), layout.origin(id), layout.metrics);
        Self {
            layout,
            tableau: std::array::from_fn(|i| pile(PileId::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| pile(PileId::Foundation(i as u8))),
            stock: pile(PileId::Stock),
            waste: pile(PileId::Waste),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Tableau(i) => &self.tableau[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Tableau(i) => &mut self.tableau[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
        }
    }

    pub fn tableau(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Every pile id, in render order (stock, waste, foundations, tableau)
    pub fn pile_ids() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(PileId::Tableau))
    }

    /// Every pile paired with its id, in render order
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        Self::pile_ids().map(move |id| (id, self.pile(id)))
    }

    pub fn clear(&mut self) {
        for id in Self::pile_ids() {
            self.pile_mut(id).clear();
        }
    }

    /// Deal a fresh layout from `deck`.
    ///
    /// Column `i` receives `i + 1` cards with only the last face up; whatever the
    /// deck still holds becomes the stock, keeping the deck's order so the next
    /// card the deck would have drawn is the stock's top.
    pub fn deal(&mut self, deck: &mut Deck) {
        self.clear();
        for i in 0..TABLEAU_COUNT {
            for j in 0..=i {
                let Some(mut card) = deck.draw() else {
                    return;
                };
                card.face_up = j == i;
                self.tableau[i].append(card);
            }
        }
        self.stock.extend(deck.take_remaining());
    }

    /// Draw one card from the stock onto the waste, or recycle the waste
    /// back into the stock when the stock is empty.
    pub fn click_stock(&mut self) -> StockOutcome {
        if let Some(card) = self.stock.pop() {
            self.waste.append(card.turned_up());
            return StockOutcome::Drawn(card.turned_up());
        }
        if self.waste.is_empty() {
            return StockOutcome::Empty;
        }

        // Turning the waste over reverses it; the stock's original order returns.
        let mut cards = self.waste.take_all();
        cards.reverse();
        let count = cards.len();
        self.stock.extend(cards);
        StockOutcome::Recycled { cards: count }
    }

    /// How many times each card identity appears on the table
    pub fn card_census(&self) -> [u8; DECK_SIZE] {
        let mut counts = [0u8; DECK_SIZE];
        for (_, pile) in self.piles() {
            for card in pile.cards() {
                counts[card.index()] = counts[card.index()].saturating_add(1);
            }
        }
        counts
    }

    /// True iff foundation piles each hold a full suit
    pub fn is_complete(&self) -> bool {
        crate::rules::is_complete(self.foundations.iter())
    }

    /// Piles that may receive dropped cards, according to the variant table
    pub fn is_drop_target(id: PileId) -> bool {
        crate::pile::policy(id.kind()).drop_target
    }

    /// Piles a drag may start from
    pub fn is_pickup_source(id: PileId) -> bool {
        !matches!(id.kind(), PileKind::Stock | PileKind::Moving)
    }
}
