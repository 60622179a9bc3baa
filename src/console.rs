//! The terminal component
//!
//! [`Console`] ties the session, interpreter, boot sequence and effects
//! together. It owns a [`TimerQueue`] and never reads a clock itself: the
//! caller passes the current time to [`Console::advance_to`], which fires
//! every due timer at its own deadline, and to [`Console::submit`] and
//! [`Console::click`], which schedule from the moment of the event. The same code runs under the real
//! clock in the TUI and under a manual clock in tests.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::boot::{BootPhase, BootSequence, BootStep, POWER_ON_DELAY};
use crate::config::Config;
use crate::effects::{
    Effects, Offset, CURSOR_BLINK_INTERVAL, INTERFERENCE_DURATION, JITTER_DURATION,
    JITTER_INTERVAL, SCANLINE_INTERVAL,
};
use crate::interpreter::{self, BuiltinResolver, CommandResolver, Plan, Resolution};
use crate::session::{Session, Transcript};
use crate::timer::TimerQueue;
use crate::variant::Variant;

/// Delay between submitting a command and its response.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Greeting of the classic terminal.
pub const CLASSIC_GREETING: &[&str] = &[
    "Wake up, Neo...",
    "The Matrix has you...",
    "Follow the white rabbit.",
    "Knock, knock, Neo.",
    "",
    "Type \"help\" to see available commands.",
];

/// Greeting of the CRT terminal.
pub const CRT_GREETING: &[&str] = &[
    "CRT TERMINAL v3.0 ONLINE",
    "",
    "Type \"help\" to see available commands.",
];

/// Events scheduled on the console's timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    CursorBlink,
    PowerOn,
    PowerOnComplete,
    BootStep,
    JitterRoll,
    JitterReset,
    InterferenceEnd,
    Scanline,
    /// Resolve a submitted command
    Respond(String),
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or input before boot finished
    Ignored,
    /// Transcript was cleared immediately
    Cleared,
    /// Input echoed; response follows after [`RESPONSE_DELAY`]
    Pending,
}

/// Options for building a [`Console`].
pub struct ConsoleOptions {
    pub variant: Variant,
    pub resolver: Box<dyn CommandResolver>,
    pub rng: Box<dyn RngCore>,
    /// Replaces the builtin boot messages when set
    pub boot_messages: Option<Vec<String>>,
    /// Start with the boot sequence already finished
    pub skip_boot: bool,
}

impl ConsoleOptions {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            resolver: Box::new(BuiltinResolver::new(variant)),
            rng: Box::new(StdRng::from_entropy()),
            boot_messages: None,
            skip_boot: false,
        }
    }

    /// Options from the config file: variant, extra responses, boot messages.
    pub fn from_config(config: &Config) -> Self {
        let variant = config.terminal.variant;
        let resolver = BuiltinResolver::new(variant).with_responses(&config.responses);
        let mut options = Self::new(variant).resolver(Box::new(resolver));
        options.boot_messages = config.boot_messages();
        options
    }

    pub fn resolver(mut self, resolver: Box<dyn CommandResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    pub fn boot_messages(mut self, messages: Vec<String>) -> Self {
        self.boot_messages = Some(messages);
        self
    }

    pub fn skip_boot(mut self, skip: bool) -> Self {
        self.skip_boot = skip;
        self
    }
}

/// The terminal component.
pub struct Console {
    variant: Variant,
    session: Session,
    boot: BootSequence,
    effects: Effects,
    resolver: Box<dyn CommandResolver>,
    timers: TimerQueue<Timer>,
    now: Duration,
    mounted: bool,
    dirty: bool,
}

impl Console {
    pub fn new(options: ConsoleOptions) -> Self {
        let variant = options.variant;
        let boot = if variant.has_boot_sequence() && !options.skip_boot {
            match options.boot_messages {
                Some(messages) => BootSequence::new(messages),
                None => BootSequence::with_default_messages(),
            }
        } else {
            BootSequence::finished()
        };

        Self {
            variant,
            session: Session::new(initial_transcript(variant)),
            boot,
            effects: Effects::new(options.rng),
            resolver: options.resolver,
            timers: TimerQueue::new(),
            now: Duration::ZERO,
            mounted: false,
            dirty: true,
        }
    }

    /// Start all timers. `now` becomes the console's origin for scheduling.
    pub fn mount(&mut self, now: Duration) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.now = now;
        info!(variant = %self.variant, "console mounted");

        self.schedule(CURSOR_BLINK_INTERVAL, Timer::CursorBlink);
        if self.boot.phase() == BootPhase::Off {
            self.schedule(POWER_ON_DELAY, Timer::PowerOn);
        }
        if self.variant.has_jitter() {
            self.schedule(JITTER_INTERVAL, Timer::JitterRoll);
        }
        if self.variant.has_crt_effects() {
            self.schedule(SCANLINE_INTERVAL, Timer::Scanline);
        }
    }

    /// Cancel every pending timer. Nothing fires after this.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        debug!(pending = self.timers.len(), "console unmounted, cancelling timers");
        self.timers.clear();
        self.mounted = false;
    }

    /// Fire every timer due at or before `now`, in deadline order.
    pub fn advance_to(&mut self, now: Duration) {
        if !self.mounted {
            return;
        }
        while let Some((deadline, timer)) = self.timers.pop_due(now) {
            self.now = deadline;
            self.fire(timer);
        }
        self.now = self.now.max(now);
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Submit whatever is in the input line at time `now`.
    pub fn submit_input(&mut self, now: Duration) -> SubmitOutcome {
        let input = self.session.input.as_str().to_string();
        self.submit(&input, now)
    }

    /// Submit `input` as a command at time `now`.
    ///
    /// Timers due by `now` fire first, so the response delay counts from the
    /// moment of submission. An unmounted console ignores everything.
    pub fn submit(&mut self, input: &str, now: Duration) -> SubmitOutcome {
        if !self.mounted {
            return SubmitOutcome::Ignored;
        }
        self.advance_to(now);

        match interpreter::plan(input, self.boot.is_ready()) {
            Plan::Ignore => SubmitOutcome::Ignored,
            Plan::ClearNow => {
                debug!("clear requested");
                self.session.reset();
                self.dirty = true;
                SubmitOutcome::Cleared
            }
            Plan::Defer => {
                debug!(input, "command submitted");
                self.session.begin(input);
                self.schedule(RESPONSE_DELAY, Timer::Respond(input.to_string()));
                self.dirty = true;
                SubmitOutcome::Pending
            }
        }
    }

    /// A click landed on the terminal frame at time `now`.
    ///
    /// Returns true if it caused interference.
    pub fn click(&mut self, now: Duration) -> bool {
        if !self.mounted || !self.variant.has_crt_effects() {
            return false;
        }
        self.advance_to(now);

        let started = self.effects.roll_interference();
        if started {
            self.schedule(INTERFERENCE_DURATION, Timer::InterferenceEnd);
            self.dirty = true;
        }
        started
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.timers.schedule(self.now, delay, timer);
    }

    fn fire(&mut self, timer: Timer) {
        self.dirty = true;
        match timer {
            Timer::CursorBlink => {
                self.effects.toggle_cursor();
                self.schedule(CURSOR_BLINK_INTERVAL, Timer::CursorBlink);
            }
            Timer::PowerOn => {
                if let Some(next) = self.boot.power_on(self.now) {
                    debug!("powering on");
                    self.schedule(next, Timer::PowerOnComplete);
                }
            }
            Timer::PowerOnComplete => match self.boot.begin_typing() {
                Some(next) => self.schedule(next, Timer::BootStep),
                None => info!("boot sequence complete"),
            },
            Timer::BootStep => match self.boot.step() {
                BootStep::Revealed { next } => self.schedule(next, Timer::BootStep),
                BootStep::LineDone { line, next } => {
                    self.session.transcript.push(line);
                    match next {
                        Some(next) => self.schedule(next, Timer::BootStep),
                        None => info!("boot sequence complete"),
                    }
                }
                BootStep::Idle => {}
            },
            Timer::JitterRoll => {
                if self.effects.roll_jitter() {
                    self.schedule(JITTER_DURATION, Timer::JitterReset);
                }
                self.schedule(JITTER_INTERVAL, Timer::JitterRoll);
            }
            Timer::JitterReset => self.effects.reset_jitter(),
            Timer::InterferenceEnd => self.effects.end_interference(),
            Timer::Scanline => {
                self.effects.advance_scanline();
                self.schedule(SCANLINE_INTERVAL, Timer::Scanline);
            }
            Timer::Respond(input) => self.respond(&input),
        }
    }

    fn respond(&mut self, input: &str) {
        match self.resolver.resolve(input) {
            Ok(Resolution::Text(text)) => {
                debug!(input, "command resolved");
                self.session.respond(text);
            }
            Ok(Resolution::Clear) => {
                self.session.transcript.clear();
                self.session.finish();
            }
            Err(err) => {
                warn!(input, error = %err, "command resolver failed");
                self.session.respond(format!("Error: {err}"));
            }
        }
    }

    /// True if anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        self.dirty = true;
        &mut self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.session.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn is_ready(&self) -> bool {
        self.boot.is_ready()
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.boot.phase()
    }

    /// Boot message currently being typed.
    pub fn typing_line(&self) -> Option<&str> {
        self.boot.typed()
    }

    pub fn power_on_progress(&self) -> f64 {
        self.boot.power_on_progress(self.now)
    }

    pub fn cursor_visible(&self) -> bool {
        self.effects.cursor_visible()
    }

    pub fn jitter(&self) -> Offset {
        self.effects.jitter()
    }

    pub fn interference(&self) -> bool {
        self.effects.interference()
    }

    pub fn scanline(&self) -> usize {
        self.effects.scanline()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn initial_transcript(variant: Variant) -> Transcript {
    match variant {
        Variant::Classic => Transcript::from_lines(CLASSIC_GREETING.iter().copied()),
        Variant::Crt => Transcript::from_lines(CRT_GREETING.iter().copied()),
        Variant::Boot => Transcript::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boot::DEFAULT_MESSAGES;
    use crate::error::ResolveError;
    use crate::interpreter::{CLASSIC_BIO, NOT_RECOGNIZED};
    use rand::rngs::mock::StepRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn never_rng() -> Box<dyn RngCore> {
        Box::new(StepRng::new(u64::MAX, 0))
    }

    fn always_rng() -> Box<dyn RngCore> {
        Box::new(StepRng::new(0, 0))
    }

    fn mounted(options: ConsoleOptions) -> Console {
        let mut console = Console::new(options);
        console.mount(Duration::ZERO);
        console
    }

    fn classic() -> Console {
        mounted(ConsoleOptions::new(Variant::Classic).rng(never_rng()))
    }

    fn lines(console: &Console) -> Vec<String> {
        console.transcript().lines().to_vec()
    }

    #[test]
    fn classic_starts_with_greeting() {
        let console = classic();
        assert_eq!(lines(&console), CLASSIC_GREETING);
        assert!(console.is_ready());
    }

    #[test]
    fn blank_submission_is_a_no_op() {
        let mut console = classic();
        console.session_mut().input.set("   ");
        let before = lines(&console);

        assert_eq!(console.submit_input(console.now()), SubmitOutcome::Ignored);
        assert_eq!(lines(&console), before);
        assert_eq!(console.session().input.as_str(), "   ");
        assert!(!console.is_loading());
    }

    #[test]
    fn submission_echoes_immediately_and_responds_after_delay() {
        let mut console = classic();
        let start = console.transcript().len();

        assert_eq!(console.submit("about", console.now()), SubmitOutcome::Pending);
        assert_eq!(console.transcript().lines()[start], "> about");
        assert!(console.is_loading());

        console.advance_to(ms(499));
        assert_eq!(console.transcript().len(), start + 1);

        console.advance_to(ms(500));
        assert_eq!(console.transcript().lines()[start + 1], CLASSIC_BIO);
        assert!(!console.is_loading());
    }

    #[test]
    fn unrecognized_command_gets_fixed_message() {
        let mut console = classic();
        console.submit("xyz", console.now());
        console.advance_to(ms(500));
        assert_eq!(console.transcript().lines().last().unwrap(), NOT_RECOGNIZED);
    }

    #[test]
    fn response_clears_input_line() {
        let mut console = classic();
        console.session_mut().input.set("help");
        console.submit_input(console.now());
        assert_eq!(console.session().input.as_str(), "help");
        console.advance_to(ms(500));
        assert!(console.session().input.is_empty());
    }

    #[test]
    fn clear_is_synchronous_and_schedules_nothing() {
        let mut console = classic();
        console.session_mut().input.set("CLEAR");
        let timers_before = console.timers.len();

        assert_eq!(console.submit_input(console.now()), SubmitOutcome::Cleared);
        assert!(console.transcript().is_empty());
        assert!(console.session().input.is_empty());
        assert_eq!(console.timers.len(), timers_before);

        console.advance_to(ms(5000));
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn overlapping_submissions_resolve_in_order() {
        let mut console = classic();
        console.session_mut().reset();
        console.submit("about", console.now());
        console.submit("nope", ms(100));
        assert!(console.is_loading());

        console.advance_to(ms(500));
        assert!(console.is_loading());
        console.advance_to(ms(600));
        assert!(!console.is_loading());
        assert_eq!(
            lines(&console),
            vec!["> about", "> nope", CLASSIC_BIO, NOT_RECOGNIZED]
        );
    }

    #[test]
    fn cursor_blinks_every_half_second() {
        let mut console = classic();
        assert!(console.cursor_visible());
        console.advance_to(ms(500));
        assert!(!console.cursor_visible());
        console.advance_to(ms(1000));
        assert!(console.cursor_visible());
        console.advance_to(ms(2500));
        assert!(!console.cursor_visible());
    }

    #[test]
    fn boot_variant_gates_input_until_ready() {
        let mut console = mounted(ConsoleOptions::new(Variant::Boot).rng(never_rng()));
        assert_eq!(console.boot_phase(), BootPhase::Off);
        assert_eq!(console.submit("help", console.now()), SubmitOutcome::Ignored);
        assert!(console.transcript().is_empty());

        console.advance_to(ms(1000));
        assert_eq!(console.boot_phase(), BootPhase::PoweringOn);
        assert_eq!(console.submit("help", console.now()), SubmitOutcome::Ignored);

        console.advance_to(ms(3000));
        assert!(matches!(console.boot_phase(), BootPhase::Typing { line: 0, .. }));
        assert_eq!(console.submit("help", console.now()), SubmitOutcome::Ignored);

        console.advance_to(ms(60_000));
        assert!(console.is_ready());
        assert_eq!(lines(&console), DEFAULT_MESSAGES);
        assert_eq!(console.submit("help", console.now()), SubmitOutcome::Pending);
    }

    #[test]
    fn boot_typing_follows_character_and_pause_delays() {
        let options = ConsoleOptions::new(Variant::Boot)
            .rng(never_rng())
            .boot_messages(vec!["LOADING".to_string(), String::new(), "ok".to_string()]);
        let mut console = mounted(options);

        // Power on at 1000ms, typing starts at 3000ms
        console.advance_to(ms(3000));
        assert_eq!(console.typing_line(), Some(""));

        // "LOADING": 7 chars at 50ms each
        console.advance_to(ms(3050));
        assert_eq!(console.typing_line(), Some("L"));
        console.advance_to(ms(3349));
        assert_eq!(console.typing_line(), Some("LOADIN"));
        console.advance_to(ms(3350));
        assert_eq!(console.typing_line(), Some("LOADING"));
        assert!(console.transcript().is_empty());

        // 500ms pause, then the line lands in the transcript
        console.advance_to(ms(3850));
        assert_eq!(lines(&console), vec!["LOADING"]);

        // Empty line: 300ms pause
        console.advance_to(ms(4149));
        assert_eq!(console.transcript().len(), 1);
        console.advance_to(ms(4150));
        assert_eq!(lines(&console), vec!["LOADING", ""]);

        // "ok": 2 chars at 20ms, then 500ms pause
        console.advance_to(ms(4190));
        assert_eq!(console.typing_line(), Some("ok"));
        console.advance_to(ms(4690));
        assert!(console.is_ready());
        assert_eq!(lines(&console), vec!["LOADING", "", "ok"]);
    }

    #[test]
    fn power_on_progress_is_reported() {
        let mut console = mounted(ConsoleOptions::new(Variant::Boot).rng(never_rng()));
        assert_eq!(console.power_on_progress(), 0.0);
        console.advance_to(ms(2000));
        assert_eq!(console.power_on_progress(), 0.5);
        console.advance_to(ms(3000));
        assert_eq!(console.power_on_progress(), 1.0);
    }

    #[test]
    fn skip_boot_starts_ready() {
        let mut console = mounted(
            ConsoleOptions::new(Variant::Boot)
                .rng(never_rng())
                .skip_boot(true),
        );
        assert!(console.is_ready());
        assert_eq!(console.boot_phase(), BootPhase::Ready);
        assert_eq!(console.submit("help", console.now()), SubmitOutcome::Pending);
    }

    #[test]
    fn unmount_cancels_pending_timers() {
        let mut console = mounted(ConsoleOptions::new(Variant::Boot).rng(always_rng()));
        console.unmount();
        assert!(console.next_deadline().is_none());

        console.advance_to(ms(60_000));
        assert_eq!(console.boot_phase(), BootPhase::Off);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn unmounted_console_ignores_submissions_and_clicks() {
        let mut console = mounted(ConsoleOptions::new(Variant::Crt).rng(always_rng()));
        console.unmount();
        let before = lines(&console);

        assert_eq!(console.submit("about", ms(100)), SubmitOutcome::Ignored);
        assert!(!console.click(ms(100)));
        assert!(console.next_deadline().is_none());
        assert_eq!(lines(&console), before);

        // Remounting must not replay anything submitted while unmounted
        console.mount(ms(1000));
        console.advance_to(ms(5000));
        assert_eq!(lines(&console), before);
        assert!(!console.is_loading());
    }

    #[test]
    fn unmount_drops_pending_response() {
        let mut console = classic();
        console.submit("about", console.now());
        console.unmount();
        console.advance_to(ms(1000));
        assert!(console.is_loading());
        assert_eq!(console.transcript().lines().last().unwrap(), "> about");
    }

    #[test]
    fn jitter_applies_for_a_hundred_milliseconds() {
        let mut console = mounted(
            ConsoleOptions::new(Variant::Boot)
                .rng(always_rng())
                .skip_boot(true),
        );
        console.advance_to(ms(1999));
        assert!(console.jitter().is_zero());

        console.advance_to(ms(2000));
        let offset = console.jitter();
        assert!((-2..=2).contains(&offset.x));
        assert!((-1..=1).contains(&offset.y));

        console.advance_to(ms(2100));
        assert!(console.jitter().is_zero());
    }

    #[test]
    fn response_delay_counts_from_submission_time() {
        let mut console = classic();
        console.session_mut().reset();
        console.advance_to(Duration::ZERO);

        // Enter lands between loop iterations, well after the last advance
        assert_eq!(console.submit("about", ms(240)), SubmitOutcome::Pending);
        console.advance_to(ms(500));
        assert!(console.is_loading());
        console.advance_to(ms(739));
        assert_eq!(lines(&console), vec!["> about"]);

        console.advance_to(ms(740));
        assert!(!console.is_loading());
        assert_eq!(lines(&console), vec!["> about", CLASSIC_BIO]);
    }

    #[test]
    fn submission_fires_timers_that_came_due_first() {
        let mut console = classic();
        assert!(console.cursor_visible());
        console.submit("help", ms(600));
        assert!(!console.cursor_visible());
        assert_eq!(console.now(), ms(600));
    }

    #[test]
    fn jitter_roll_repeats_every_two_seconds() {
        let mut console = mounted(
            ConsoleOptions::new(Variant::Boot)
                .rng(always_rng())
                .skip_boot(true),
        );
        for start in [2000, 4000, 6000] {
            console.advance_to(ms(start - 1));
            assert!(console.jitter().is_zero());
            console.advance_to(ms(start));
            assert!(!console.jitter().is_zero());
            console.advance_to(ms(start + 99));
            assert!(!console.jitter().is_zero());
            console.advance_to(ms(start + 100));
            assert!(console.jitter().is_zero());
        }
    }

    #[test]
    fn failed_jitter_roll_keeps_rolling() {
        // First draw fails the 10% roll, the wrapped second draw passes
        let rng = Box::new(StepRng::new(u64::MAX, 1));
        let mut console = mounted(ConsoleOptions::new(Variant::Boot).rng(rng).skip_boot(true));

        console.advance_to(ms(2000));
        assert!(console.jitter().is_zero());
        console.advance_to(ms(3999));
        assert!(console.jitter().is_zero());

        console.advance_to(ms(4000));
        assert!(!console.jitter().is_zero());
        console.advance_to(ms(4100));
        assert!(console.jitter().is_zero());
    }

    #[test]
    fn interference_counts_from_click_time() {
        let mut console = mounted(ConsoleOptions::new(Variant::Crt).rng(always_rng()));
        console.advance_to(ms(70));

        assert!(console.click(ms(149)));
        console.advance_to(ms(230));
        assert!(console.interference());
        console.advance_to(ms(298));
        assert!(console.interference());
        console.advance_to(ms(299));
        assert!(!console.interference());
    }

    #[test]
    fn classic_ignores_clicks() {
        let mut console = mounted(ConsoleOptions::new(Variant::Classic).rng(always_rng()));
        assert!(!console.click(console.now()));
        assert!(!console.interference());
    }

    #[test]
    fn click_interference_lasts_150ms() {
        let mut console = mounted(ConsoleOptions::new(Variant::Crt).rng(always_rng()));
        assert!(console.click(console.now()));
        assert!(console.interference());
        console.advance_to(ms(149));
        assert!(console.interference());
        console.advance_to(ms(150));
        assert!(!console.interference());
    }

    #[test]
    fn scanline_moves_on_crt_variants() {
        let mut console = mounted(ConsoleOptions::new(Variant::Crt).rng(never_rng()));
        console.advance_to(ms(800));
        assert_eq!(console.scanline(), 10);
    }

    #[test]
    fn options_from_config_use_responses_and_boot_messages() {
        let mut config = Config::default();
        config.terminal.variant = Variant::Boot;
        config.boot.messages = vec!["HI".to_string()];
        config
            .responses
            .insert("skills".to_string(), "Rust".to_string());

        let mut console = mounted(ConsoleOptions::from_config(&config).rng(never_rng()));
        console.advance_to(ms(10_000));
        assert_eq!(lines(&console), vec!["HI"]);

        console.submit("skills", console.now());
        console.advance_to(ms(10_500));
        assert_eq!(lines(&console), vec!["HI", "> skills", "Rust"]);
    }

    struct Offline;

    impl CommandResolver for Offline {
        fn resolve(&self, _input: &str) -> Result<Resolution, ResolveError> {
            Err(ResolveError::BackendUnavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn resolver_errors_become_transcript_lines() {
        let mut console = mounted(
            ConsoleOptions::new(Variant::Crt)
                .rng(never_rng())
                .resolver(Box::new(Offline)),
        );
        console.submit("help", console.now());
        console.advance_to(ms(500));
        assert_eq!(
            console.transcript().lines().last().unwrap(),
            "Error: response backend unavailable: connection refused"
        );
        assert!(!console.is_loading());
    }

    struct AlwaysClear;

    impl CommandResolver for AlwaysClear {
        fn resolve(&self, _input: &str) -> Result<Resolution, ResolveError> {
            Ok(Resolution::Clear)
        }
    }

    #[test]
    fn resolver_clear_empties_transcript_after_delay() {
        let mut console = mounted(
            ConsoleOptions::new(Variant::Classic)
                .rng(never_rng())
                .resolver(Box::new(AlwaysClear)),
        );
        console.submit("wipe", console.now());
        assert!(!console.transcript().is_empty());
        console.advance_to(ms(500));
        assert!(console.transcript().is_empty());
        assert!(!console.is_loading());
    }
}
