//! Move legality rules
//!
//! Legality is pure card arithmetic: it never looks at positions. Only the lead
//! (bottom) card of a moved run is compared against the destination.
//!
//! | Destination | Empty pile | Non-empty pile |
//! |-------------|------------|----------------|
//! | Foundation | lead is an Ace | same suit, lead rank = top rank + 1 |
//! | Tableau | lead is a King | opposite color, lead rank = top rank - 1 |
//! | Stock / Waste / Moving | never | never |
//!
//! Foundations additionally take one card at a time, so a foundation only ever
//! holds a single suit in rank order.

use crate::pile::Pile;
use crate::types::{Card, PileKind, ACE, KING, RANKS_PER_SUIT};

/// Can a run led by `lead` be placed on a pile of `kind` whose top is `top`?
pub fn accepts(kind: PileKind, top: Option<&Card>, lead: &Card) -> bool {
    match (kind, top) {
        (PileKind::Foundation, None) => lead.rank == ACE,
        (PileKind::Foundation, Some(top)) => lead.suit == top.suit && lead.is_one_more_than(top),
        (PileKind::Tableau, None) => lead.rank == KING,
        (PileKind::Tableau, Some(top)) => lead.is_opposite_color_to(top) && top.is_one_more_than(lead),
        (PileKind::Stock | PileKind::Waste | PileKind::Moving, _) => false,
    }
}

/// [`accepts`] plus the run-length limit: foundations take single cards only.
pub fn accepts_run(kind: PileKind, top: Option<&Card>, lead: &Card, run_len: usize) -> bool {
    if kind == PileKind::Foundation && run_len != 1 {
        return false;
    }
    accepts(kind, top, lead)
}

/// Convenience over [`accepts_run`] for an actual pile
pub fn pile_accepts(pile: &Pile, lead: &Card, run_len: usize) -> bool {
    accepts_run(pile.kind(), pile.top_card(), lead, run_len)
}

/// True iff every foundation holds a full suit.
pub fn is_complete<'a>(foundations: impl IntoIterator<Item = &'a Pile>) -> bool {
    foundations
        .into_iter()
        .all(|pile| pile.len() == RANKS_PER_SUIT as usize)
}
