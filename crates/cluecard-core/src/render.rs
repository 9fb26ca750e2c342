//! View models and the presenter contract.

use alloc::string::String;
use core::fmt;

use crate::input::InvalidInput;

/// Visible round controls. Derived from the app phase, never stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    pub pause: bool,
    pub stop: bool,
    pub reveal: bool,
    /// An earlier batch is available to replay.
    pub previous: bool,
    /// Whether the pause control should read as "resume".
    pub paused: bool,
}

impl Controls {
    pub const HIDDEN: Self = Self {
        pause: false,
        stop: false,
        reveal: false,
        previous: false,
        paused: false,
    };

    pub const fn pause_label(self) -> &'static str {
        if self.paused { "resume" } else { "pause" }
    }
}

/// Card shown while a round is running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundCard<'a> {
    pub category: &'a str,
    pub keyword: &'a str,
}

/// Answer line shown after the round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealItem<'a> {
    pub category: &'a str,
    pub keyword: &'a str,
    pub clues: &'a [String],
}

/// Renderer driven by the app's effects. Strictly reactive.
pub trait Presenter {
    type Error: fmt::Debug;

    fn show_setup(&mut self) -> Result<(), Self::Error>;
    fn show_invalid_input(&mut self, error: InvalidInput) -> Result<(), Self::Error>;
    fn render_round(&mut self, round: u32, cards: &[RoundCard<'_>]) -> Result<(), Self::Error>;
    fn render_timer(&mut self, text: &str) -> Result<(), Self::Error>;
    fn render_reveal(&mut self, items: &[RevealItem<'_>]) -> Result<(), Self::Error>;
    fn set_controls(&mut self, controls: Controls) -> Result<(), Self::Error>;
}
