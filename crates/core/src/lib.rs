//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Klondike rules, the pile model, the drag-and-drop
//! state machine and snapshot-based history. It has **zero dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Testable**: Every rule and state transition is covered by unit tests
//! - **Portable**: Geometry is plain integer cells behind the [`hit::HitTest`] seam
//!
//! # Module Structure
//!
//! - [`deck`]: The 52-card deck and its shuffle
//! - [`pile`]: One pile type shared by all variants, with a per-variant policy table
//! - [`rules`]: Move legality as pure card arithmetic
//! - [`table`]: The 13 board piles, dealing and the stock cycle
//! - [`hit`]: Spatial queries from pointer and lead-card rectangles to piles
//! - [`drag`]: Pickup / drag / drop state machine over a moving buffer
//! - [`snapshot`]: Deep-copy game snapshots and their JSON save format
//! - [`history`]: Undo/redo stacks of snapshots
//! - [`game_state`]: The [`Game`] engine front ends talk to
//! - [`rng`]: Seeded LCG used for shuffling
//!
//! # Game Rules
//!
//! - **Deal**: Tableau column `i` gets `i + 1` cards, only the last face up; the
//!   remaining 24 cards form the face-down stock
//! - **Stock**: Clicking draws one card face up onto the waste; an empty stock
//!   takes back the whole waste, reversed and face down
//! - **Foundations**: Built up by suit from Ace, one card at a time
//! - **Tableau**: Built down in alternating colors; empty columns take Kings
//! - **Reveal**: Moving cards off a tableau column turns its new top face up
//! - **Win**: All four foundations hold 13 cards
//!
//! # Example
//!
//! ```
//! use tui_klondike_core::Game;
//! use tui_klondike_types::{GameAction, PileId};
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.pile(PileId::Stock).len(), 24);
//!
//! game.apply_action(GameAction::ClickStock);
//! assert_eq!(game.pile(PileId::Waste).len(), 1);
//! assert_eq!(game.move_count(), 1);
//!
//! game.apply_action(GameAction::Undo);
//! assert!(game.pile(PileId::Waste).is_empty());
//! ```

pub mod deck;
pub mod drag;
pub mod game_state;
pub mod history;
pub mod hit;
pub mod pile;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod table;

pub use tui_klondike_types as types;

// Re-export commonly used types for convenience
pub use deck::Deck;
pub use drag::{Drag, DragState, DropOutcome};
pub use game_state::{Game, PressOutcome};
pub use history::History;
pub use hit::{HitTest, RectHitTest};
pub use pile::{policy, Orientation, Pile, PileState, VariantPolicy};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, SnapshotError};
pub use table::{StockOutcome, Table, DROP_ORDER, PICKUP_ORDER};
