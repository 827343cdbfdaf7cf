//! Drag state machine
//!
//! ```text
//!            pickup                 drop: legal target
//!   Idle ─────────────▶ Holding ───────────────────────▶ Idle (committed)
//!                        │   ▲
//!              drag_to   └───┘      drop: no legal target / cancel
//!                        Holding ───────────────────────▶ Idle (reverted)
//! ```
//!
//! While holding, the picked-up run lives in a [`PileKind::Moving`] buffer and
//! nowhere else. Every exit from `Holding` empties the buffer into exactly one
//! pile: the destination on commit, the source on revert.

use tracing::debug;

use crate::pile::Pile;
use crate::rules;
use crate::table::Table;
use crate::types::{Card, CardMetrics, PileId, PileKind, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Holding {
        source: PileId,
        /// Pointer position at the last pickup or drag update
        last_pointer: Point,
    },
}

/// How a drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was being dragged
    Idle,
    /// The run landed on `to`
    Committed {
        from: PileId,
        to: PileId,
        cards: usize,
        /// The source's new top card was turned face up
        revealed: bool,
    },
    /// The run went back to its source
    Reverted { to: PileId, cards: usize },
}

impl DropOutcome {
    pub fn committed(&self) -> bool {
        matches!(self, DropOutcome::Committed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drag {
    buffer: Pile,
    state: DragState,
}

impl Drag {
    pub fn new(metrics: CardMetrics) -> Self {
        Self {
            buffer: Pile::new(PileKind::Moving, Point::default(), metrics),
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, DragState::Holding { .. })
    }

    pub fn source(&self) -> Option<PileId> {
        match self.state {
            DragState::Holding { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// The cards under drag, positioned at the current anchor
    pub fn buffer(&self) -> &Pile {
        &self.buffer
    }

    /// Bottom card of the run; the only card compared against destinations
    pub fn lead_card(&self) -> Option<&Card> {
        self.buffer.first_card()
    }

    pub fn lead_rect(&self) -> Option<Rect> {
        self.lead_card().map(|_| self.buffer.card_rect(0))
    }

    /// Lift `cards[cut..]` off `source` into the buffer.
    ///
    /// Refuses (returns false) while already holding, for the stock, for an
    /// out-of-range cut, or when the cut card is face down.
    pub fn pickup(&mut self, table: &mut Table, source: PileId, cut: usize, pointer: Point) -> bool {
        if self.is_holding() || !Table::is_pickup_source(source) {
            return false;
        }
        let pile = table.pile_mut(source);
        match pile.cards().get(cut) {
            Some(card) if card.face_up => {}
            _ => return false,
        }

        let anchor = pile.card_origin(cut);
        let run = pile.remove_from(cut);
        debug!(%source, cut, cards = run.len(), "picked up");

        self.buffer.clear();
        self.buffer.set_origin(anchor);
        self.buffer.extend(run);
        self.state = DragState::Holding {
            source,
            last_pointer: pointer,
        };
        true
    }

    /// Move the buffer by the pointer's travel since the last update.
    pub fn drag_to(&mut self, pointer: Point) {
        if let DragState::Holding {
            ref mut last_pointer,
            ..
        } = self.state
        {
            let dx = pointer.x - last_pointer.x;
            let dy = pointer.y - last_pointer.y;
            let origin = self.buffer.origin().offset(dx, dy);
            self.buffer.set_origin(origin);
            *last_pointer = pointer;
        }
    }

    /// Finish the drag against `candidates`, the piles the lead card overlaps
    /// in scan order.
    ///
    /// The first candidate that is a drop target, is not the source, and
    /// accepts the lead card receives the whole run. Otherwise the run goes
    /// back to the source.
    pub fn drop(
        &mut self,
        table: &mut Table,
        candidates: impl IntoIterator<Item = PileId>,
    ) -> DropOutcome {
        let DragState::Holding { source, .. } = self.state else {
            return DropOutcome::Idle;
        };
        let Some(lead) = self.lead_card().copied() else {
            self.state = DragState::Idle;
            return DropOutcome::Idle;
        };

        let run_len = self.buffer.len();
        let target = candidates.into_iter().find(|&id| {
            id != source
                && Table::is_drop_target(id)
                && rules::pile_accepts(table.pile(id), &lead, run_len)
        });

        match target {
            Some(to) => {
                table.pile_mut(to).extend(self.buffer.take_all());
                let revealed = table.pile_mut(source).reveal_top();
                self.state = DragState::Idle;
                debug!(from = %source, %to, cards = run_len, revealed, "drop committed");
                DropOutcome::Committed {
                    from: source,
                    to,
                    cards: run_len,
                    revealed,
                }
            }
            None => self.revert(table, source),
        }
    }

    /// Abandon the drag, returning the run to its source.
    pub fn cancel(&mut self, table: &mut Table) -> DropOutcome {
        match self.state {
            DragState::Holding { source, .. } => self.revert(table, source),
            DragState::Idle => DropOutcome::Idle,
        }
    }

    /// Forget the buffer without returning it anywhere.
    ///
    /// Only valid when the table is about to be replaced wholesale (restore,
    /// new deal), since the buffered cards are otherwise lost.
    pub fn discard(&mut self) {
        self.buffer.clear();
        self.state = DragState::Idle;
    }

    fn revert(&mut self, table: &mut Table, source: PileId) -> DropOutcome {
        let cards = self.buffer.len();
        table.pile_mut(source).extend(self.buffer.take_all());
        self.state = DragState::Idle;
        debug!(to = %source, cards, "drop reverted");
        DropOutcome::Reverted { to: source, cards }
    }
}
