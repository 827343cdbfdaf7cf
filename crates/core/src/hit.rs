//! Spatial queries: which pile or card is under the pointer.
//!
//! The drag state machine only ever sees pile ids and card indices. Everything
//! that compares coordinates lives behind [`HitTest`] so a different front end
//! (pixel canvas, terminal cells, a test harness) can swap in its own geometry.

use crate::pile::Pile;
use crate::types::{Point, Rect};

pub trait HitTest {
    /// Index of the card a pickup at `pointer` would cut from.
    ///
    /// Scans from the top card down; the first face-up card whose rectangle
    /// contains the pointer wins. Face-down cards never qualify.
    fn card_at(&self, pile: &Pile, pointer: Point) -> Option<usize>;

    /// Does a lead card occupying `lead` touch this pile's footprint?
    fn overlaps(&self, pile: &Pile, lead: Rect) -> bool;

    /// Is `pointer` on the pile's base slot? Used for stock clicks.
    fn slot_contains(&self, pile: &Pile, pointer: Point) -> bool;
}

/// Axis-aligned rectangle hit-testing over derived card positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectHitTest;

impl HitTest for RectHitTest {
    fn card_at(&self, pile: &Pile, pointer: Point) -> Option<usize> {
        pile.cards()
            .iter()
            .enumerate()
            .rev()
            .find(|(i, card)| card.face_up && pile.card_rect(*i).contains(pointer))
            .map(|(i, _)| i)
    }

    fn overlaps(&self, pile: &Pile, lead: Rect) -> bool {
        pile.footprint().intersects(&lead)
    }

    fn slot_contains(&self, pile: &Pile, pointer: Point) -> bool {
        pile.slot_rect().contains(pointer)
    }
}
