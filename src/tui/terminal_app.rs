//! Interactive terminal application
//!
//! Runs the console under the system clock: waits for input or the next
//! timer deadline, fires due timers, and redraws when something changed.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use super::app::App;
use super::theme::Theme;
use super::ui::{self, ViewOptions};
use crate::console::Console;
use crate::timer::{Clock, SystemClock};

/// Upper bound on how long the loop sleeps between checks.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Rows moved per PageUp/PageDown.
pub const PAGE_ROWS: usize = 10;

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Scroll position of the transcript view.
///
/// Jumps back to the bottom whenever the transcript changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub scroll_back: usize,
    seen_revision: u64,
}

impl ViewState {
    /// Reset scrolling if the transcript moved on since the last call.
    pub fn sync(&mut self, revision: u64) {
        if revision != self.seen_revision {
            self.seen_revision = revision;
            self.scroll_back = 0;
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    /// Keep the position within what the last frame could show.
    pub fn clamp(&mut self, max_scroll_back: usize) {
        self.scroll_back = self.scroll_back.min(max_scroll_back);
    }
}

/// Apply a key press that arrived at time `now` to the console.
pub fn handle_key(
    console: &mut Console,
    view: &mut ViewState,
    key: KeyEvent,
    now: Duration,
) -> KeyResult {
    if key.kind != KeyEventKind::Press {
        return KeyResult::Continue;
    }

    match key.code {
        KeyCode::Esc => return KeyResult::Quit,
        KeyCode::Char('c') | KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return KeyResult::Quit
        }
        KeyCode::Enter => {
            let outcome = console.submit_input(now);
            debug!(?outcome, "enter pressed");
        }
        KeyCode::Char(ch) => console.session_mut().input.insert(ch),
        KeyCode::Backspace => console.session_mut().input.backspace(),
        KeyCode::Delete => console.session_mut().input.delete(),
        KeyCode::Left => console.session_mut().input.move_left(),
        KeyCode::Right => console.session_mut().input.move_right(),
        KeyCode::Home => console.session_mut().input.move_home(),
        KeyCode::End => console.session_mut().input.move_end(),
        KeyCode::PageUp => {
            view.scroll_up(PAGE_ROWS);
            console.mark_dirty();
        }
        KeyCode::PageDown => {
            view.scroll_down(PAGE_ROWS);
            console.mark_dirty();
        }
        _ => {}
    }
    KeyResult::Continue
}

/// The interactive terminal.
pub struct TerminalApp<C: Clock = SystemClock> {
    app: App,
    console: Console,
    clock: C,
    theme: Theme,
    title: String,
    view: ViewState,
    frame_area: Rect,
}

impl TerminalApp<SystemClock> {
    pub fn new(console: Console, theme: Theme, title: impl Into<String>) -> Result<Self> {
        Self::with_clock(console, theme, title, SystemClock::new())
    }
}

impl<C: Clock> TerminalApp<C> {
    pub fn with_clock(
        console: Console,
        theme: Theme,
        title: impl Into<String>,
        clock: C,
    ) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        Ok(Self {
            app,
            console,
            clock,
            theme,
            title: title.into(),
            view: ViewState::default(),
            frame_area: Rect::default(),
        })
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        self.console.mount(self.clock.now());
        let result = self.event_loop();
        self.console.unmount();
        info!("terminal closed");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.console.advance_to(self.clock.now());
            self.view.sync(self.console.transcript().revision());

            if self.console.take_dirty() {
                self.draw()?;
            }

            let timeout = self
                .console
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(self.clock.now()))
                .unwrap_or(self.app.tick_rate());

            let event = self.app.poll_event(timeout)?;
            let now = self.clock.now();
            match event {
                Some(Event::Key(key)) => {
                    if handle_key(&mut self.console, &mut self.view, key, now) == KeyResult::Quit {
                        return Ok(());
                    }
                }
                Some(Event::Mouse(mouse)) => {
                    if let MouseEventKind::Down(_) = mouse.kind {
                        let hit = self
                            .frame_area
                            .contains(Position::new(mouse.column, mouse.row));
                        if hit && self.console.click(now) {
                            debug!("interference");
                        }
                    }
                }
                Some(Event::Resize(..)) => self.console.mark_dirty(),
                _ => {}
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            app,
            console,
            theme,
            title,
            view,
            frame_area,
            ..
        } = self;

        let options = ViewOptions {
            theme: &*theme,
            title: title.as_str(),
            scroll_back: view.scroll_back,
        };
        let mut rendered = ui::Rendered::default();
        app.draw(|frame| rendered = ui::render(frame, &*console, &options))?;
        *frame_area = rendered.frame;
        view.clamp(rendered.max_scroll_back);
        Ok(())
    }
}
