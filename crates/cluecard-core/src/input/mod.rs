//! Input abstraction layer.

pub mod mock;

use alloc::string::{String, ToString};
use core::{fmt, num::IntErrorKind};

/// Player actions consumed by the game app.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Raw duration as typed; validated when a round starts.
    Start(String),
    PauseToggle,
    Stop,
    Reveal,
    Continue,
    Previous,
    NewGame,
}

impl InputEvent {
    pub fn start(text: &str) -> Self {
        Self::Start(text.trim().to_string())
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::PauseToggle => "pause",
            Self::Stop => "stop",
            Self::Reveal => "reveal",
            Self::Continue => "continue",
            Self::Previous => "previous",
            Self::NewGame => "new-game",
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Rejected round duration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidInput {
    Missing,
    NotANumber,
    NotPositive,
    TooLong { max_secs: u32 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("enter a round length in seconds"),
            Self::NotANumber => f.write_str("round length must be a whole number of seconds"),
            Self::NotPositive => f.write_str("round length must be greater than zero"),
            Self::TooLong { max_secs } => {
                write!(f, "round length must be at most {} seconds", max_secs)
            }
        }
    }
}

/// Validate a typed round length.
pub fn parse_duration(text: &str, max_secs: u32) -> Result<u32, InvalidInput> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InvalidInput::Missing);
    }

    let secs: i64 = text.parse().map_err(|err: core::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => InvalidInput::TooLong { max_secs },
        IntErrorKind::NegOverflow => InvalidInput::NotPositive,
        _ => InvalidInput::NotANumber,
    })?;
    if secs <= 0 {
        return Err(InvalidInput::NotPositive);
    }
    if secs > max_secs as i64 {
        return Err(InvalidInput::TooLong { max_secs });
    }

    Ok(secs as u32)
}
