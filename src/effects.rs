//! Cosmetic screen effects
//!
//! Cursor blink, screen jitter, click interference and the scanline sweep.
//! None of these touch the transcript or command handling. Randomness comes
//! from an injected RNG so tests can force or suppress each effect.

use std::time::Duration;

use rand::{Rng, RngCore};

/// Cursor toggles at this interval.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Jitter is rolled at this interval.
pub const JITTER_INTERVAL: Duration = Duration::from_millis(2000);
/// Probability that a jitter roll shakes the screen.
pub const JITTER_PROBABILITY: f64 = 0.1;
/// How long a jitter offset stays applied.
pub const JITTER_DURATION: Duration = Duration::from_millis(100);
/// Probability that a click causes interference.
pub const INTERFERENCE_PROBABILITY: f64 = 0.3;
/// How long interference stays applied.
pub const INTERFERENCE_DURATION: Duration = Duration::from_millis(150);
/// Scanline moves down one row at this interval.
pub const SCANLINE_INTERVAL: Duration = Duration::from_millis(80);

/// Screen offset in cells. `x` in `[-2, 2]`, `y` in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i16,
    pub y: i16,
}

impl Offset {
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// State of every cosmetic effect.
pub struct Effects {
    rng: Box<dyn RngCore>,
    cursor_visible: bool,
    jitter: Offset,
    interference: bool,
    scanline: usize,
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects")
            .field("cursor_visible", &self.cursor_visible)
            .field("jitter", &self.jitter)
            .field("interference", &self.interference)
            .field("scanline", &self.scanline)
            .finish_non_exhaustive()
    }
}

impl Effects {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self {
            rng,
            cursor_visible: true,
            jitter: Offset::default(),
            interference: false,
            scanline: 0,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn jitter(&self) -> Offset {
        self.jitter
    }

    pub fn interference(&self) -> bool {
        self.interference
    }

    /// Row counter of the scanline. The renderer wraps it to the screen height.
    pub fn scanline(&self) -> usize {
        self.scanline
    }

    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Roll for jitter. Returns true if an offset was applied and needs a
    /// reset after [`JITTER_DURATION`].
    pub fn roll_jitter(&mut self) -> bool {
        if !self.rng.gen_bool(JITTER_PROBABILITY) {
            return false;
        }
        self.jitter = Offset {
            x: self.rng.gen_range(-2..=2),
            y: self.rng.gen_range(-1..=1),
        };
        true
    }

    pub fn reset_jitter(&mut self) {
        self.jitter = Offset::default();
    }

    /// Roll for interference after a click. Returns true if it started and
    /// needs to end after [`INTERFERENCE_DURATION`].
    pub fn roll_interference(&mut self) -> bool {
        if self.interference || !self.rng.gen_bool(INTERFERENCE_PROBABILITY) {
            return false;
        }
        self.interference = true;
        true
    }

    pub fn end_interference(&mut self) {
        self.interference = false;
    }

    pub fn advance_scanline(&mut self) {
        self.scanline = self.scanline.wrapping_add(1);
    }
}
