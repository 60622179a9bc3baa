//! Screen rendering
//!
//! Draws the console: the bordered frame with its header, the transcript,
//! the prompt and the CRT effects on top.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::app::status_footer::render_footer;
use super::theme::Theme;
use super::widgets::{
    locate_char, max_scroll_back, window_start, wrap_line, PowerOnBeam, TranscriptView,
};
use crate::boot::BootPhase;
use crate::console::Console;

/// Widest the terminal frame gets.
pub const MAX_FRAME_WIDTH: u16 = 100;

/// Block cursor glyph.
pub const CURSOR: &str = "█";

/// Shown while a response is pending.
pub const PROCESSING: &str = "Processing...";

/// Prompt prefix.
pub const PROMPT: &str = "> ";

/// Everything the renderer needs besides the console.
#[derive(Debug, Clone)]
pub struct ViewOptions<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    /// Rows scrolled back from the bottom
    pub scroll_back: usize,
}

/// Rows of the content area plus the caret position, if one is shown.
#[derive(Debug, Default)]
pub struct ContentRows {
    pub rows: Vec<Line<'static>>,
    /// Row index and column of the input caret
    pub caret: Option<(usize, u16)>,
}

/// Area of the terminal frame inside the full screen.
pub fn frame_rect(area: Rect) -> Rect {
    let width = area.width.min(MAX_FRAME_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Shift `rect` by a jitter offset without leaving `bounds`.
pub fn offset_rect(rect: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let max_x = bounds.right().saturating_sub(rect.width);
    let max_y = bounds.bottom().saturating_sub(rect.height);
    let x = (rect.x as i32 + dx as i32).clamp(bounds.x as i32, max_x.max(bounds.x) as i32);
    let y = (rect.y as i32 + dy as i32).clamp(bounds.y as i32, max_y.max(bounds.y) as i32);
    Rect::new(x as u16, y as u16, rect.width, rect.height)
}

/// Build the wrapped rows of the content area.
pub fn content_rows(console: &Console, theme: &Theme, width: u16) -> ContentRows {
    let width = width as usize;
    let mut rows = Vec::new();
    let text = theme.text_style();

    for entry in console.transcript().lines() {
        let style = if entry.starts_with("Error: ") {
            theme.error_style()
        } else {
            text
        };
        for segment in entry.split('\n') {
            rows.extend(
                wrap_line(segment, width)
                    .into_iter()
                    .map(|row| Line::styled(row, style)),
            );
        }
    }

    if let Some(typed) = console.typing_line() {
        let mut typed_rows = wrap_line(typed, width);
        let last = typed_rows.pop().unwrap_or_default();
        rows.extend(typed_rows.into_iter().map(|row| Line::styled(row, text)));
        rows.push(with_cursor(last, console.cursor_visible(), theme));
    }

    if console.is_loading() {
        rows.push(Line::styled(PROCESSING, theme.text_secondary_style()));
    }

    let mut caret = None;
    if console.is_ready() {
        let input = &console.session().input;
        let prompt = format!("{PROMPT}{}", input.as_str());
        let first = rows.len();

        if input.is_empty() {
            rows.push(with_cursor(prompt, console.cursor_visible(), theme));
        } else {
            let wrapped = wrap_line(&prompt, width);
            let (row, col) = locate_char(&wrapped, PROMPT.chars().count() + input.cursor());
            rows.extend(wrapped.into_iter().map(|line| Line::styled(line, text)));
            if width > 0 {
                // A caret past a full row starts the next one
                caret = if col >= width {
                    rows.push(Line::styled(String::new(), text));
                    Some((first + row + 1, 0))
                } else {
                    Some((first + row, col as u16))
                };
            }
        }
    }

    ContentRows { rows, caret }
}

fn with_cursor(text: String, visible: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(text, theme.text_style())];
    if visible {
        spans.push(Span::styled(CURSOR, theme.accent_style()));
    }
    Line::from(spans)
}

fn header_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    let dots = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("●", Style::default().fg(Color::Green)),
    ]);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent_style())
        .style(Style::default().bg(theme.background))
        .title(dots.left_aligned())
        .title(Line::styled(format!(" {title} "), theme.accent_bold_style()).centered())
}

/// Footer key hints for the console's current state.
pub fn footer_keys(console: &Console) -> &'static [(&'static str, &'static str)] {
    if console.is_ready() {
        &[("enter", "run"), ("pgup/pgdn", "scroll"), ("esc", "quit")]
    } else {
        &[("esc", "quit")]
    }
}

/// What a draw produced that the event loop needs back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Screen area of the frame, for mouse hit-testing
    pub frame: Rect,
    /// Furthest the transcript can currently scroll back
    pub max_scroll_back: usize,
}

/// Draw the whole console.
pub fn render(frame: &mut Frame, console: &Console, view: &ViewOptions) -> Rendered {
    let screen = frame.area();
    let jitter = console.jitter();
    let outer = offset_rect(frame_rect(screen), jitter.x, jitter.y, screen);

    let block = header_block(view.title, view.theme);
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let [content, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
        .areas(inner);

    let mut max_scroll = 0;
    match console.boot_phase() {
        BootPhase::Off => {}
        BootPhase::PoweringOn => {
            let beam = PowerOnBeam::new(console.power_on_progress())
                .style(view.theme.accent_style());
            frame.render_widget(beam, content);
        }
        BootPhase::Typing { .. } | BootPhase::Ready => {
            let ContentRows { rows, caret } = content_rows(console, view.theme, content.width);
            max_scroll = max_scroll_back(rows.len(), content.height as usize);
            let start = window_start(rows.len(), content.height as usize, view.scroll_back);
            frame.render_widget(
                TranscriptView::new(&rows).scroll_back(view.scroll_back),
                content,
            );

            if let Some((row, col)) = caret {
                let visible = start..start + content.height as usize;
                if visible.contains(&row) {
                    let y = content.y + (row - start) as u16;
                    frame.set_cursor_position((content.x + col, y));
                }
            }
        }
    }

    if console.variant().has_crt_effects() && content.height > 0 {
        let row = content.y + (console.scanline() % content.height as usize) as u16;
        let line = Rect::new(content.x, row, content.width, 1);
        frame.buffer_mut().set_style(line, view.theme.scanline_style());
        if console.interference() {
            frame
                .buffer_mut()
                .set_style(content, view.theme.interference_style());
        }
    }

    render_footer(frame, footer, footer_keys(console), view.theme);
    Rendered {
        frame: outer,
        max_scroll_back: max_scroll,
    }
}
