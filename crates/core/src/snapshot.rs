//! Game snapshots: a deep copy of every pile plus the move counter.
//!
//! The serialized shape doubles as a save-file schema:
//!
//! ```text
//! { "tableau": [Pile; 7], "foundations": [Pile; 4], "stock": Pile, "waste": Pile, "moveCount": int }
//! Pile = [ { "rank": 1..13, "suit": "clubs"|"diamonds"|"hearts"|"spades", "faceUp": bool }, ... ]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drag::Drag;
use crate::pile::PileState;
use crate::table::Table;
use crate::types::{is_valid_rank, Card, PileId, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card rank {rank} out of range 1..=13")]
    InvalidRank { rank: u8 },
    #[error("card {card} appears {count} times")]
    Duplicate { card: String, count: u8 },
    #[error("{missing} cards missing from snapshot")]
    Missing { missing: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub tableau: [PileState; TABLEAU_COUNT],
    pub foundations: [PileState; FOUNDATION_COUNT],
    pub stock: PileState,
    pub waste: PileState,
    pub move_count: u32,
}

impl GameSnapshot {
    /// Capture the table and counter.
    ///
    /// Cards held by an in-progress drag are recorded as resting on their
    /// source pile, so a snapshot always accounts for the whole deck.
    pub fn capture(table: &Table, drag: &Drag, move_count: u32) -> Self {
        let mut snap = Self {
            tableau: std::array::from_fn(|i| table.tableau()[i].state()),
            foundations: std::array::from_fn(|i| table.foundations()[i].state()),
            stock: table.stock().state(),
            waste: table.waste().state(),
            move_count,
        };
        if let Some(source) = drag.source() {
            snap.pile_mut(source).extend_from_slice(drag.buffer().cards());
        }
        snap
    }

    pub fn pile(&self, id: PileId) -> &PileState {
        match id {
            PileId::Tableau(i) => &self.tableau[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut PileState {
        match id {
            PileId::Tableau(i) => &mut self.tableau[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
        }
    }

    /// Every card in the snapshot, pile by pile
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        Table::pile_ids().flat_map(move |id| self.pile(id).iter())
    }

    /// How many times each card identity appears
    pub fn card_census(&self) -> [u8; DECK_SIZE] {
        let mut counts = [0u8; DECK_SIZE];
        for card in self.cards().filter(|c| is_valid_rank(c.rank)) {
            counts[card.index()] = counts[card.index()].saturating_add(1);
        }
        counts
    }

    /// True iff every one of the 52 cards appears exactly once.
    pub fn is_conserved(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check ranks and card conservation.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if let Some(card) = self.cards().find(|c| !is_valid_rank(c.rank)) {
            return Err(SnapshotError::InvalidRank { rank: card.rank });
        }

        let census = self.card_census();
        if let Some(card) = self.cards().find(|c| census[c.index()] > 1) {
            return Err(SnapshotError::Duplicate {
                card: card.to_string(),
                count: census[card.index()],
            });
        }

        let missing = census.iter().filter(|&&n| n == 0).count();
        if missing > 0 {
            return Err(SnapshotError::Missing { missing });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a serialized snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snap: Self = serde_json::from_str(json)?;
        snap.validate()?;
        Ok(snap)
    }
}
