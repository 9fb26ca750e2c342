//! Game configuration.

use crate::{content::WordListFormat, pool::MAX_BATCH_SIZE};

/// Longest round whose clock still renders as `mm:ss`.
pub const MAX_ROUND_SECS: u32 = 99 * 60 + 59;

/// Record shape a session plays with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PlayMode {
    /// Keyword cards with clues revealed after the round.
    #[default]
    Clues,
    /// Bare words paged a batch at a time; nothing to reveal but the words.
    Paging,
}

impl PlayMode {
    pub const fn word_list_format(self) -> WordListFormat {
        match self {
            Self::Clues => WordListFormat::Clues,
            Self::Paging => WordListFormat::SingleColumn,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clues => "clues",
            Self::Paging => "paging",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("clues") {
            Some(Self::Clues)
        } else if name.eq_ignore_ascii_case("paging") || name.eq_ignore_ascii_case("words") {
            Some(Self::Paging)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub batch_size: u8,
    pub mode: PlayMode,
    /// The cue plays on every tick that leaves `1..=cue_window_secs` seconds.
    pub cue_window_secs: u8,
    pub max_round_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            mode: PlayMode::Clues,
            cue_window_secs: 5,
            max_round_secs: MAX_ROUND_SECS,
        }
    }
}

impl GameConfig {
    pub const fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_batch_size(mut self, batch_size: u8) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Pull out-of-range values back into bounds.
    pub fn normalized(mut self) -> Self {
        self.batch_size = self.batch_size.clamp(1, MAX_BATCH_SIZE as u8);
        self.max_round_secs = self.max_round_secs.clamp(1, MAX_ROUND_SECS);
        self
    }
}
