//! Boot sequence state machine
//!
//! The boot variant powers on, then types a fixed list of messages one
//! character at a time before it accepts input:
//!
//! ```text
//! Off --1000ms--> PoweringOn --2000ms--> Typing(0, 0) --...--> Ready
//! ```
//!
//! The machine itself never sleeps. Each method performs one transition and
//! reports the delay until the next one; the console schedules that delay on
//! its timer queue.

use std::time::Duration;

/// Delay from start until the screen begins powering on.
pub const POWER_ON_DELAY: Duration = Duration::from_millis(1000);
/// Length of the power-on transition.
pub const POWER_ON_DURATION: Duration = Duration::from_millis(2000);
/// Per-character delay for messages starting with [`SLOW_PREFIX`].
pub const SLOW_CHAR_DELAY: Duration = Duration::from_millis(50);
/// Per-character delay for every other message.
pub const FAST_CHAR_DELAY: Duration = Duration::from_millis(20);
/// Pause after an empty message.
pub const EMPTY_LINE_PAUSE: Duration = Duration::from_millis(300);
/// Pause after a fully typed non-empty message.
pub const LINE_PAUSE: Duration = Duration::from_millis(500);
/// Messages with this prefix are typed slowly.
pub const SLOW_PREFIX: &str = "LOADING";

/// Builtin boot messages.
pub const DEFAULT_MESSAGES: &[&str] = &[
    "PORTFOLIO-OS BIOS v2.04",
    "MEMORY CHECK: 640K OK",
    "",
    "LOADING OPERATING SYSTEM...",
    "LOADING USER PROFILE...",
    "",
    "SYSTEM READY.",
    "Type \"help\" to see available commands.",
];

/// Phase of the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Screen is dark
    Off,
    /// Power-on transition is playing
    PoweringOn,
    /// Typing message `line`, `revealed` characters shown so far
    Typing { line: usize, revealed: usize },
    /// Boot finished; input is accepted
    Ready,
}

/// Result of one typing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootStep {
    /// Another character was revealed; next step after the delay
    Revealed { next: Duration },
    /// A message finished and belongs in the transcript
    LineDone {
        line: String,
        next: Option<Duration>,
    },
    /// Nothing to do in the current phase
    Idle,
}

/// Character delay for a message.
pub fn char_delay(message: &str) -> Duration {
    if message.starts_with(SLOW_PREFIX) {
        SLOW_CHAR_DELAY
    } else {
        FAST_CHAR_DELAY
    }
}

/// Pause after a message has been fully typed.
pub fn line_pause(message: &str) -> Duration {
    if message.is_empty() {
        EMPTY_LINE_PAUSE
    } else {
        LINE_PAUSE
    }
}

/// The boot sequence and its progress.
#[derive(Debug, Clone)]
pub struct BootSequence {
    messages: Vec<String>,
    phase: BootPhase,
    /// Text of the current message typed so far
    typed: String,
    /// Time the power-on transition started
    powered_at: Option<Duration>,
}

impl BootSequence {
    /// A sequence that has to run before input unlocks.
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            messages,
            phase: BootPhase::Off,
            typed: String::new(),
            powered_at: None,
        }
    }

    /// A sequence with the builtin messages.
    pub fn with_default_messages() -> Self {
        Self::new(DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect())
    }

    /// A sequence that is already finished, for variants without a boot.
    pub fn finished() -> Self {
        Self {
            messages: Vec::new(),
            phase: BootPhase::Ready,
            typed: String::new(),
            powered_at: None,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    /// Text typed so far for the message in progress.
    pub fn typed(&self) -> Option<&str> {
        match self.phase {
            BootPhase::Typing { .. } => Some(&self.typed),
            _ => None,
        }
    }

    /// Start the power-on transition. Returns the delay until typing starts.
    pub fn power_on(&mut self, now: Duration) -> Option<Duration> {
        if self.phase != BootPhase::Off {
            return None;
        }
        self.phase = BootPhase::PoweringOn;
        self.powered_at = Some(now);
        Some(POWER_ON_DURATION)
    }

    /// Progress of the power-on transition in `[0, 1]`.
    pub fn power_on_progress(&self, now: Duration) -> f64 {
        match (self.phase, self.powered_at) {
            (BootPhase::Off, _) => 0.0,
            (BootPhase::PoweringOn, Some(start)) => {
                let elapsed = now.saturating_sub(start).as_secs_f64();
                (elapsed / POWER_ON_DURATION.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Finish powering on and start typing the first message.
    ///
    /// Returns the delay until the first step, or `None` if there was nothing
    /// to type and the sequence went straight to `Ready`.
    pub fn begin_typing(&mut self) -> Option<Duration> {
        if self.phase != BootPhase::PoweringOn {
            return None;
        }
        self.enter_line(0)
    }

    /// Perform one typing step.
    pub fn step(&mut self) -> BootStep {
        let BootPhase::Typing { line, revealed } = self.phase else {
            return BootStep::Idle;
        };
        let message = &self.messages[line];

        match message.chars().nth(revealed) {
            Some(ch) => {
                self.typed.push(ch);
                self.phase = BootPhase::Typing {
                    line,
                    revealed: revealed + 1,
                };
                BootStep::Revealed {
                    next: self.delay_for_current(),
                }
            }
            None => {
                let done = std::mem::take(&mut self.typed);
                let next = self.enter_line(line + 1);
                BootStep::LineDone { line: done, next }
            }
        }
    }

    /// Move to message `line`, or to `Ready` past the end.
    fn enter_line(&mut self, line: usize) -> Option<Duration> {
        self.typed.clear();
        if line >= self.messages.len() {
            self.phase = BootPhase::Ready;
            return None;
        }
        self.phase = BootPhase::Typing { line, revealed: 0 };
        Some(self.delay_for_current())
    }

    /// Delay before the next step of the message in progress.
    fn delay_for_current(&self) -> Duration {
        match self.phase {
            BootPhase::Typing { line, revealed } => {
                let message = &self.messages[line];
                if revealed < message.chars().count() {
                    char_delay(message)
                } else {
                    line_pause(message)
                }
            }
            _ => Duration::ZERO,
        }
    }
}
