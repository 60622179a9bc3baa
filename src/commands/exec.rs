//! Headless command execution
//!
//! Runs inputs through the same console as the interactive terminal, under a
//! manual clock, and prints the transcript lines each one adds.

use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crtterm::console::RESPONSE_DELAY;
use crtterm::{Clock, Config, Console, ConsoleOptions, ManualClock, SubmitOutcome, Variant};

pub fn handle_exec(config_path: &Path, variant: Option<Variant>, inputs: &[String]) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    if let Some(variant) = variant {
        config.terminal.variant = variant;
    }

    let clock = ManualClock::new();
    let options = ConsoleOptions::from_config(&config)
        .skip_boot(true)
        .rng(Box::new(StdRng::seed_from_u64(0)));
    let mut console = Console::new(options);
    console.mount(clock.now());

    for input in inputs {
        let before = console.transcript().len();
        match console.submit(input, clock.now()) {
            SubmitOutcome::Ignored | SubmitOutcome::Cleared => continue,
            SubmitOutcome::Pending => {}
        }
        clock.advance(RESPONSE_DELAY);
        console.advance_to(clock.now());

        for line in &console.transcript().lines()[before..] {
            println!("{}", line);
        }
    }

    console.unmount();
    Ok(())
}
