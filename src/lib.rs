//! crtterm - a retro CRT terminal for a portfolio showcase
//!
//! A terminal screen that boots, types out startup messages and then answers
//! a handful of canned commands. The command handling and every timed effect
//! run on an injectable clock, so the whole behavior is testable without
//! sleeping.

pub mod boot;
pub mod cli;
pub mod config;
pub mod console;
pub mod effects;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod session;
pub mod timer;
pub mod tui;
pub mod variant;

pub use config::Config;
pub use console::{Console, ConsoleOptions, SubmitOutcome};
pub use error::{ConfigError, ResolveError};
pub use interpreter::{BuiltinResolver, CommandResolver, Resolution};
pub use timer::{Clock, ManualClock, SystemClock};
pub use variant::Variant;
