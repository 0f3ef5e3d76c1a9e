//! Interactive TUI interface
//!
//! Full-screen play mode built on ratatui.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
