//! Command interpreter
//!
//! Maps submitted text to a canned response. Matching is a case-insensitive
//! exact comparison against the raw input: no trimming, no argument parsing.
//!
//! The help listing advertises more commands than are handled. `skills`,
//! `projects`, `contact`, `experience`, `education` (and `interact` in the
//! boot variant) fall through to the not-recognized response unless the
//! config file supplies text for them.

use std::collections::BTreeMap;

use crate::error::ResolveError;
use crate::variant::Variant;

/// Response for anything that is not a known command.
pub const NOT_RECOGNIZED: &str = "Command not recognized. Type 'help' for available commands.";

/// Bio printed by `about` in the classic terminal.
pub const CLASSIC_BIO: &str = "I'm a front-end engineer specializing in React and TypeScript. \
Welcome to my Matrix-inspired portfolio.";

/// Bio printed by `about` in the CRT terminals.
pub const CRT_BIO: &str = "I'm a front-end engineer specializing in React and TypeScript. \
Welcome to my retro terminal portfolio.";

const CLASSIC_HELP: &str = "
Available commands:
- about: Display information about me
- skills: List my technical skills
- projects: Show my portfolio projects
- contact: How to get in touch with me
- experience: My work experience
- education: My educational background
- clear: Clear the terminal
";

const BOOT_HELP: &str = "
AVAILABLE COMMANDS:
- about: Display information about me
- skills: List my technical skills
- projects: Show my portfolio projects
- contact: How to get in touch with me
- experience: My work experience
- education: My educational background
- interact: Talk to the terminal assistant
- clear: Clear the terminal
";

const CRT_HELP: &str = "
AVAILABLE COMMANDS:
- about: Display information about me
- skills: List my technical skills
- projects: Show my portfolio projects
- contact: How to get in touch with me
- experience: My work experience
- education: My educational background
- clear: Clear the terminal
";

/// Help listing for a variant.
pub fn help_text(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => CLASSIC_HELP,
        Variant::Boot => BOOT_HELP,
        Variant::Crt => CRT_HELP,
    }
}

/// Bio line for a variant.
pub fn bio(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => CLASSIC_BIO,
        Variant::Boot | Variant::Crt => CRT_BIO,
    }
}

/// Command names listed in the help text of a variant, in listing order.
pub fn advertised_commands(variant: Variant) -> Vec<&'static str> {
    help_text(variant)
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .filter_map(|entry| entry.split(':').next())
        .collect()
}

/// What a submission should do, decided before any timer is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Blank input or input while locked: nothing changes
    Ignore,
    /// `clear`: wipe the transcript right away
    ClearNow,
    /// Echo the input and resolve after the response delay
    Defer,
}

/// Decide how to handle a submission.
///
/// `ready` is false while the boot sequence still owns the screen.
pub fn plan(input: &str, ready: bool) -> Plan {
    if input.trim().is_empty() || !ready {
        Plan::Ignore
    } else if input.to_lowercase() == "clear" {
        Plan::ClearNow
    } else {
        Plan::Defer
    }
}

/// Outcome of resolving a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Append this text to the transcript
    Text(String),
    /// Empty the transcript
    Clear,
}

/// Resolve a command against the builtin table.
pub fn dispatch(input: &str, variant: Variant) -> Resolution {
    match input.to_lowercase().as_str() {
        "help" => Resolution::Text(help_text(variant).to_string()),
        "about" => Resolution::Text(bio(variant).to_string()),
        "clear" => Resolution::Clear,
        _ => Resolution::Text(NOT_RECOGNIZED.to_string()),
    }
}

/// Something that turns submitted text into a response.
///
/// The console calls this once the response delay has elapsed. A real
/// backend can be plugged in here without touching the console.
pub trait CommandResolver {
    fn resolve(&self, input: &str) -> Result<Resolution, ResolveError>;
}

/// Resolver backed by the builtin command table, plus optional responses
/// from the config file for commands the table does not know.
#[derive(Debug, Clone)]
pub struct BuiltinResolver {
    variant: Variant,
    extra: BTreeMap<String, String>,
}

impl BuiltinResolver {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            extra: BTreeMap::new(),
        }
    }

    /// Add configured responses. Keys are matched case-insensitively and can
    /// not shadow builtin commands.
    pub fn with_responses(mut self, responses: &BTreeMap<String, String>) -> Self {
        self.extra.extend(
            responses
                .iter()
                .map(|(name, text)| (name.to_lowercase(), text.clone())),
        );
        self
    }
}

impl CommandResolver for BuiltinResolver {
    fn resolve(&self, input: &str) -> Result<Resolution, ResolveError> {
        let resolution = dispatch(input, self.variant);
        if resolution == Resolution::Text(NOT_RECOGNIZED.to_string()) {
            if let Some(text) = self.extra.get(&input.to_lowercase()) {
                return Ok(Resolution::Text(text.clone()));
            }
        }
        Ok(resolution)
    }
}
