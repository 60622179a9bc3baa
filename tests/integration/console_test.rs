//! Integration tests for the console through the public API

use super::helpers::{quiet_console, tick};
use crtterm::boot::{BootPhase, DEFAULT_MESSAGES};
use crtterm::interpreter::{help_text, CRT_BIO, NOT_RECOGNIZED};
use crtterm::{Clock, ManualClock, SubmitOutcome, Variant};

#[test]
fn full_session_in_crt_variant() {
    let clock = ManualClock::new();
    let mut console = quiet_console(Variant::Crt);
    let greeting = console.transcript().len();

    console.session_mut().input.set("HELP");
    assert_eq!(console.submit_input(clock.now()), SubmitOutcome::Pending);
    tick(&clock, &mut console, 500);

    console.session_mut().input.set("about");
    console.submit_input(clock.now());
    tick(&clock, &mut console, 500);

    console.session_mut().input.set("skills");
    console.submit_input(clock.now());
    tick(&clock, &mut console, 500);

    let added = &console.transcript().lines()[greeting..];
    assert_eq!(
        added,
        [
            "> HELP",
            help_text(Variant::Crt),
            "> about",
            CRT_BIO,
            "> skills",
            NOT_RECOGNIZED,
        ]
    );
    assert!(!console.is_loading());
    assert!(console.session().input.is_empty());
}

#[test]
fn clear_then_continue() {
    let clock = ManualClock::new();
    let mut console = quiet_console(Variant::Classic);

    assert_eq!(console.submit("clear", clock.now()), SubmitOutcome::Cleared);
    assert!(console.transcript().is_empty());

    console.submit("xyz", clock.now());
    assert_eq!(console.transcript().lines(), ["> xyz"]);
    tick(&clock, &mut console, 499);
    assert_eq!(console.transcript().len(), 1);
    tick(&clock, &mut console, 1);
    assert_eq!(console.transcript().lines(), ["> xyz", NOT_RECOGNIZED]);
}

#[test]
fn boot_sequence_runs_to_ready_under_manual_clock() {
    let clock = ManualClock::new();
    let mut console = quiet_console(Variant::Boot);

    let mut phases = vec![console.boot_phase()];
    while !console.is_ready() {
        assert_eq!(console.submit("help", clock.now()), SubmitOutcome::Ignored);
        tick(&clock, &mut console, 10);
        let phase = console.boot_phase();
        let last = *phases.last().unwrap();
        let same_kind = matches!(
            (last, phase),
            (BootPhase::Typing { .. }, BootPhase::Typing { .. })
        );
        if phase != last && !same_kind {
            phases.push(phase);
        }
        assert!(clock.now().as_secs() < 60, "boot never finished");
    }

    assert!(matches!(phases[0], BootPhase::Off));
    assert!(matches!(phases[1], BootPhase::PoweringOn));
    assert!(matches!(phases[2], BootPhase::Typing { .. }));
    assert!(matches!(phases[3], BootPhase::Ready));
    assert_eq!(console.transcript().lines(), DEFAULT_MESSAGES);
    assert_eq!(console.submit("help", clock.now()), SubmitOutcome::Pending);
}

#[test]
fn unmounted_console_stays_frozen() {
    let clock = ManualClock::new();
    let mut console = quiet_console(Variant::Boot);
    tick(&clock, &mut console, 1500);
    assert_eq!(console.boot_phase(), BootPhase::PoweringOn);

    console.unmount();
    tick(&clock, &mut console, 30_000);
    assert_eq!(console.boot_phase(), BootPhase::PoweringOn);
    assert!(console.next_deadline().is_none());
}
