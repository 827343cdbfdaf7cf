//! TUI Klondike (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_klondike::{core,input,term,types}` and owns the
//! binary's environment configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_klondike_core as core;
pub use tui_klondike_input as input;
pub use tui_klondike_term as term;
pub use tui_klondike_types as types;
