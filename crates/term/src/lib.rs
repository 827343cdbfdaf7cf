//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map screen cells to board cells in one place ([`GameView::board_origin`])
//! - Only send changed cells to the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_klondike_core as core;
pub use tui_klondike_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
