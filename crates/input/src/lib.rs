//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and mouse events
//! into board-relative [`PointerEvent`]s for the drag state machine.

pub mod map;
pub mod mouse;

pub use tui_klondike_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{pointer_event, PointerEvent};
