//! Game state module - the engine the front end talks to
//!
//! [`Game`] owns the table, the drag buffer, the history stacks and the move
//! counter. Front ends issue commands (`new_game`, `pickup`, `drag_to`, `drop`,
//! `click_stock`, `undo`, `redo`) and read the result back through queries; no
//! command ever fails; an action that cannot apply leaves the state untouched.
//!
//! Undoable actions follow one protocol: snapshot before, mutate, and record
//! the snapshot only once the mutation is known to have happened.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::drag::{Drag, DragState, DropOutcome};
use crate::hit::{HitTest, RectHitTest};
use crate::history::History;
use crate::pile::Pile;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::table::{StockOutcome, Table, DROP_ORDER, PICKUP_ORDER};
use crate::types::{GameAction, Layout, PileId, Point, DECK_SIZE};

/// What a pointer press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press landed on the stock slot
    Stock(StockOutcome),
    /// A run was lifted from this pile
    PickedUp(PileId),
    Nothing,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<H = RectHitTest> {
    table: Table,
    drag: Drag,
    history: History,
    hit: H,
    rng: SimpleRng,
    /// Seed of the current deal
    seed: u32,
    move_count: u32,
}

impl Game {
    /// Deal a new game with the default layout
    pub fn new(seed: u32) -> Self {
        Self::with_layout(seed, Layout::default())
    }

    pub fn with_layout(seed: u32, layout: Layout) -> Self {
        Self::with_hit_test(seed, layout, RectHitTest)
    }
}

impl<H: HitTest> Game<H> {
    /// Deal a new game using a custom spatial query
    pub fn with_hit_test(seed: u32, layout: Layout, hit: H) -> Self {
        let mut game = Self {
            table: Table::new(layout),
            drag: Drag::new(layout.metrics),
            history: History::new(),
            hit,
            rng: SimpleRng::new(seed),
            seed,
            move_count: 0,
        };
        game.new_game_with_seed(seed);
        game
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Discard the current game and deal the next one from the seed stream.
    pub fn new_game(&mut self) {
        let seed = self.rng.next_u32();
        self.new_game_with_seed(seed);
    }

    /// Discard the current game and deal the one identified by `seed`.
    pub fn new_game_with_seed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.seed = seed;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);

        self.drag.discard();
        self.table.deal(&mut deck);
        self.move_count = 0;
        self.history.reset(self.snapshot());
        info!(seed, "dealt new game");
    }

    /// Lift the run under `pointer` off `pile`.
    ///
    /// Returns false (and changes nothing) while a drag is already held, or if
    /// no face-up card of that pile is under the pointer.
    pub fn pickup(&mut self, pile: PileId, pointer: Point) -> bool {
        if self.drag.is_holding() || !Table::is_pickup_source(pile) {
            return false;
        }
        match self.hit.card_at(self.table.pile(pile), pointer) {
            Some(cut) => self.drag.pickup(&mut self.table, pile, cut, pointer),
            None => false,
        }
    }

    /// Resolve a press the way a mouse-down on the table does: a stock click if
    /// the pointer is on the stock slot, otherwise a pickup from the first pile
    /// (tableau, waste, foundations) with a face-up card under the pointer.
    pub fn press(&mut self, pointer: Point) -> PressOutcome {
        self.cancel_drag();

        if self.hit.slot_contains(self.table.stock(), pointer) {
            return PressOutcome::Stock(self.click_stock());
        }
        for id in PICKUP_ORDER {
            if self.pickup(id, pointer) {
                return PressOutcome::PickedUp(id);
            }
        }
        PressOutcome::Nothing
    }

    /// Move the held run with the pointer. No-op while idle.
    pub fn drag_to(&mut self, pointer: Point) {
        self.drag.drag_to(pointer);
    }

    /// Release the held run. Returns true iff a move was committed.
    pub fn drop(&mut self) -> bool {
        self.release().committed()
    }

    /// Release the held run and report exactly what happened.
    ///
    /// A commit counts as a move and is recorded in history; a revert leaves
    /// both untouched.
    pub fn release(&mut self) -> DropOutcome {
        let Some(lead) = self.drag.lead_rect() else {
            return self.drag.cancel(&mut self.table);
        };

        let before = self.snapshot();
        let table = &self.table;
        let hit = &self.hit;
        let candidates: ArrayVec<PileId, { DROP_ORDER.len() }> = DROP_ORDER
            .into_iter()
            .filter(|&id| hit.overlaps(table.pile(id), lead))
            .collect();

        let outcome = self.drag.drop(&mut self.table, candidates);
        if outcome.committed() {
            self.history.record(before);
            self.move_count += 1;
        }
        outcome
    }

    /// Return any held run to its source. Returns true if a drag was held.
    pub fn cancel_drag(&mut self) -> bool {
        !matches!(self.drag.cancel(&mut self.table), DropOutcome::Idle)
    }

    /// Draw from the stock, or recycle the waste into an empty stock.
    ///
    /// Counts as a move and is undoable, unless both piles are empty, in which
    /// case nothing happens.
    pub fn click_stock(&mut self) -> StockOutcome {
        self.cancel_drag();
        if self.table.stock().is_empty() && self.table.waste().is_empty() {
            return StockOutcome::Empty;
        }

        let before = self.snapshot();
        let outcome = self.table.click_stock();
        self.history.record(before);
        self.move_count += 1;
        debug!(?outcome, moves = self.move_count, "stock clicked");
        outcome
    }

    /// Step back one recorded action. Returns false at the history floor.
    pub fn undo(&mut self) -> bool {
        self.cancel_drag();
        let (table, drag, moves) = (&self.table, &self.drag, self.move_count);
        match self.history.undo(|| GameSnapshot::capture(table, drag, moves)) {
            Some(previous) => {
                self.restore(&previous);
                debug!(moves = self.move_count, "undo");
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone action. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        self.cancel_drag();
        let (table, drag, moves) = (&self.table, &self.drag, self.move_count);
        match self.history.redo(|| GameSnapshot::capture(table, drag, moves)) {
            Some(next) => {
                self.restore(&next);
                debug!(moves = self.move_count, "redo");
                true
            }
            None => false,
        }
    }

    /// Apply a non-pointer action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::Undo => self.undo(),
            GameAction::Redo => self.redo(),
            GameAction::ClickStock => self.click_stock().changed(),
        }
    }

    /// Replace every pile and the move counter with `snapshot`.
    ///
    /// History is left alone; any held run is discarded since the snapshot
    /// already accounts for every card.
    pub fn restore(&mut self, snapshot: &GameSnapshot) {
        self.drag.discard();
        for id in Table::pile_ids() {
            self.table.pile_mut(id).set_state(snapshot.pile(id));
        }
        self.move_count = snapshot.move_count;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Capture the current state (held cards counted on their source).
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.table, &self.drag, self.move_count)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        self.table.pile(id)
    }

    /// The drag buffer; empty while idle
    pub fn moving(&self) -> &Pile {
        self.drag.buffer()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn layout(&self) -> &Layout {
        self.table.layout()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True iff all four foundations hold 13 cards.
    pub fn is_complete(&self) -> bool {
        self.table.is_complete()
    }

    /// Occurrences of each card identity across all piles and the drag buffer
    pub fn card_census(&self) -> [u8; DECK_SIZE] {
        let mut counts = self.table.card_census();
        for card in self.drag.buffer().cards() {
            counts[card.index()] = counts[card.index()].saturating_add(1);
        }
        counts
    }
}
