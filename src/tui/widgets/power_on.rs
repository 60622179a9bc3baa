//! Power-on beam
//!
//! A horizontal line that widens from the center during the first half of
//! the power-on transition, then opens vertically into a lit screen.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

pub struct PowerOnBeam {
    progress: f64,
    style: Style,
}

impl PowerOnBeam {
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Width and height of the lit region inside `area`.
    pub fn lit_size(&self, area: Rect) -> (u16, u16) {
        let horizontal = (self.progress * 2.0).min(1.0);
        let vertical = ((self.progress - 0.5) * 2.0).max(0.0);
        let width = ((area.width as f64 * horizontal).round() as u16).max(1);
        let height = ((area.height as f64 * vertical).round() as u16).max(1);
        (width.min(area.width), height.min(area.height))
    }
}

impl Widget for PowerOnBeam {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.progress <= 0.0 {
            return;
        }
        let (width, height) = self.lit_size(area);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        for row in y..y + height {
            for col in x..x + width {
                buf[(col, row)].set_symbol("━").set_style(self.style);
            }
        }
    }
}
