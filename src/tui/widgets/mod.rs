//! TUI widgets for crtterm
//!
//! Reusable pieces of the terminal screen.

pub mod power_on;
pub mod transcript;

pub use power_on::PowerOnBeam;
pub use transcript::{locate_char, max_scroll_back, window_start, wrap_line, TranscriptView};
