//! Scrollable transcript view
//!
//! Lines are wrapped to the view width by display width, then the window
//! shows the newest rows, optionally scrolled back by some rows.

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split `text` into rows no wider than `width` display columns.
///
/// An empty string yields one empty row. A zero width leaves the text whole.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    rows.push(current);
    rows
}

/// Row and display column of the character at `index` (counted in chars)
/// within rows produced by [`wrap_line`].
///
/// An index at or past the end lands just after the last character, which
/// may be a column equal to the wrap width.
pub fn locate_char(rows: &[String], index: usize) -> (usize, usize) {
    let mut remaining = index;
    for (row, text) in rows.iter().enumerate() {
        let count = text.chars().count();
        if remaining < count {
            let col = text
                .chars()
                .take(remaining)
                .map(|ch| ch.width().unwrap_or(0))
                .sum();
            return (row, col);
        }
        remaining -= count;
    }
    let last = rows.len().saturating_sub(1);
    (last, rows.last().map_or(0, |text| text.width()))
}

/// First visible row for a window of `height` rows over `total` rows,
/// scrolled back by `scroll_back` rows (clamped to the top).
pub fn window_start(total: usize, height: usize, scroll_back: usize) -> usize {
    let bottom = total.saturating_sub(height);
    bottom.saturating_sub(scroll_back)
}

/// Largest useful scroll-back for `total` rows in a `height`-row view.
pub fn max_scroll_back(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}

/// Pre-wrapped rows rendered bottom-anchored.
pub struct TranscriptView<'a> {
    rows: &'a [Line<'a>],
    scroll_back: usize,
}

impl<'a> TranscriptView<'a> {
    pub fn new(rows: &'a [Line<'a>]) -> Self {
        Self {
            rows,
            scroll_back: 0,
        }
    }

    pub fn scroll_back(mut self, rows: usize) -> Self {
        self.scroll_back = rows;
        self
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let start = window_start(self.rows.len(), height, self.scroll_back);

        for (offset, row) in self.rows.iter().skip(start).take(height).enumerate() {
            buf.set_line(area.x, area.y + offset as u16, row, area.width);
        }
    }
}
