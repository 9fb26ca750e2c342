use std::path::PathBuf;

use cluecard_core::{
    pool::MAX_BATCH_SIZE,
    settings::{GameConfig, PlayMode},
};
use log::warn;

const WORDS_ENV: &str = "CLUECARD_WORDS";
const MODE_ENV: &str = "CLUECARD_MODE";
const BATCH_ENV: &str = "CLUECARD_BATCH";
const MUTE_ENV: &str = "CLUECARD_MUTE";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct HostConfig {
    /// Word list file; the built-in sample is used when unset.
    pub(super) word_list: Option<PathBuf>,
    pub(super) game: GameConfig,
    pub(super) muted: bool,
}

impl HostConfig {
    pub(super) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut game = GameConfig::default();

        if let Some(raw) = lookup(MODE_ENV) {
            match PlayMode::from_name(&raw) {
                Some(mode) => game = game.with_mode(mode),
                None => warn!(
                    "config: {}={:?} is not clues|paging; using {}",
                    MODE_ENV,
                    raw,
                    game.mode.as_str()
                ),
            }
        }

        if let Some(raw) = lookup(BATCH_ENV) {
            match raw.trim().parse::<u8>() {
                Ok(size) if (1..=MAX_BATCH_SIZE as u8).contains(&size) => {
                    game = game.with_batch_size(size)
                }
                _ => warn!(
                    "config: {}={:?} is not within 1..={}; using {}",
                    BATCH_ENV, raw, MAX_BATCH_SIZE, game.batch_size
                ),
            }
        }

        let word_list = lookup(WORDS_ENV)
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let muted = lookup(MUTE_ENV).is_some_and(|raw| {
            let raw = raw.trim();
            !(raw.is_empty() || raw == "0" || raw.eq_ignore_ascii_case("false"))
        });

        Self {
            word_list,
            game,
            muted,
        }
    }
}
