//! Terminal variants
//!
//! Three revisions of the same terminal. They share the command interpreter
//! and differ in the cosmetic features switched on around it.

use serde::{Deserialize, Serialize};

/// Which revision of the terminal to run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Matrix-style terminal with a greeting and a blinking cursor
    Classic,
    /// Power-on transition, typed boot sequence, screen jitter
    #[default]
    Boot,
    /// CRT scanline sweep and click interference, no boot sequence
    Crt,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Boot, Variant::Crt];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Boot => "boot",
            Variant::Crt => "crt",
        }
    }

    /// Title shown in the frame header when the config does not set one.
    pub fn default_title(&self) -> &'static str {
        match self {
            Variant::Classic => "Matrix Terminal v1.0",
            Variant::Boot => "PORTFOLIO-OS 2.0",
            Variant::Crt => "CRT Terminal v3.0",
        }
    }

    /// Input stays locked until the boot sequence finishes.
    pub fn has_boot_sequence(&self) -> bool {
        matches!(self, Variant::Boot)
    }

    /// Random screen jitter every few seconds.
    pub fn has_jitter(&self) -> bool {
        matches!(self, Variant::Boot)
    }

    /// Scanline sweep and click interference.
    pub fn has_crt_effects(&self) -> bool {
        matches!(self, Variant::Boot | Variant::Crt)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
