//! TUI (Text User Interface) module for crtterm
//!
//! Renders the console with ratatui and feeds it crossterm input.

pub mod app;
pub mod terminal_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use terminal_app::{handle_key, KeyResult, TerminalApp, ViewState};
pub use theme::Theme;
