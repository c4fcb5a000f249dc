use std::fmt;
use std::io;
use std::str::FromStr;

use crossterm::tty::IsTty;
use tracing::{debug, warn};

/// Environment variable that forces the capability probe result.
pub const TIME_INPUT_ENV: &str = "TIMEFIELD_TIME_INPUT";

/// Answers whether the presentation layer can host a native time control.
pub trait CapabilityProbe {
    fn supports_native_time_input(&self) -> bool;
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapability(pub bool);

impl CapabilityProbe for FixedCapability {
    fn supports_native_time_input(&self) -> bool {
        self.0
    }
}

/// Probes the attached terminal.
///
/// The segmented control needs cursor keys delivered as key events, which a
/// dumb terminal or a redirected stdout cannot provide.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl CapabilityProbe for TerminalProbe {
    fn supports_native_time_input(&self) -> bool {
        let forced = std::env::var(TIME_INPUT_ENV).ok();
        let term = std::env::var("TERM").ok();
        let supported = probe_terminal(forced.as_deref(), term.as_deref(), io::stdout().is_tty());
        debug!(supported, term = term.as_deref().unwrap_or(""), "probed native time input");
        supported
    }
}

pub(crate) fn probe_terminal(forced: Option<&str>, term: Option<&str>, is_tty: bool) -> bool {
    if let Some(raw) = forced {
        match raw.parse::<InputMode>() {
            Ok(InputMode::Native) => return true,
            Ok(InputMode::Text) => return false,
            Ok(InputMode::Auto) => {}
            Err(err) => warn!(%err, "ignoring {TIME_INPUT_ENV}"),
        }
    }
    is_tty && term.is_some_and(|term| !term.is_empty() && term != "dumb")
}

/// Which input strategy a host asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Auto,
    Native,
    Text,
}

impl InputMode {
    pub fn probe(self) -> Box<dyn CapabilityProbe> {
        match self {
            InputMode::Auto => Box::new(TerminalProbe),
            InputMode::Native => Box::new(FixedCapability(true)),
            InputMode::Text => Box::new(FixedCapability(false)),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Auto => write!(f, "auto"),
            InputMode::Native => write!(f, "native"),
            InputMode::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInputModeError(String);

impl fmt::Display for ParseInputModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown input mode '{}', expected auto, native or text",
            self.0
        )
    }
}

impl std::error::Error for ParseInputModeError {}

impl FromStr for InputMode {
    type Err = ParseInputModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(InputMode::Auto),
            "native" | "1" | "true" => Ok(InputMode::Native),
            "text" | "manual" | "0" | "false" => Ok(InputMode::Text),
            _ => Err(ParseInputModeError(raw.to_string())),
        }
    }
}
