use std::{fs, io};

use cluecard_core::{
    content::{
        self, LoadError, Record, WordListFormat, WordListResource,
        static_source::{SAMPLE_RESOURCE_ID, sample_resource},
    },
    settings::PlayMode,
};
use log::info;

use super::config::HostConfig;

/// Word list read from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct FileResource;

impl WordListResource for FileResource {
    type Error = io::Error;

    fn fetch(&mut self, resource_id: &str) -> Result<String, Self::Error> {
        fs::read_to_string(resource_id)
    }
}

/// Load the configured word list, once, before any round can start.
pub(super) fn load_word_list(config: &HostConfig) -> Result<Vec<Record>, LoadError> {
    let mode = config.game.mode;

    let Some(path) = config.word_list.as_ref() else {
        info!("loading: no word list configured; using {}", SAMPLE_RESOURCE_ID);
        let records = content::load(
            &mut sample_resource(),
            SAMPLE_RESOURCE_ID,
            WordListFormat::Clues,
        )?;
        return Ok(match mode {
            PlayMode::Clues => records,
            PlayMode::Paging => records
                .into_iter()
                .map(|record| Record::word(record.keyword))
                .collect(),
        });
    };

    let resource_id = path.to_string_lossy();
    content::load(&mut FileResource, &resource_id, mode.word_list_format())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use cluecard_core::settings::GameConfig;

    use super::*;

    fn config(word_list: Option<PathBuf>, mode: PlayMode) -> HostConfig {
        HostConfig {
            word_list,
            game: GameConfig::default().with_mode(mode),
            muted: true,
        }
    }

    #[test]
    fn missing_file_is_unreachable() {
        let config = config(
            Some(PathBuf::from("/nonexistent/cluecard/words.csv")),
            PlayMode::Clues,
        );
        assert_eq!(load_word_list(&config), Err(LoadError::Unreachable));
    }

    #[test]
    fn sample_list_in_paging_mode_is_bare_words() {
        let records = load_word_list(&config(None, PlayMode::Paging)).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|record| record.clues.is_empty()));
        assert!(records.iter().all(|record| record.category.is_empty()));
    }

    #[test]
    fn file_is_parsed_with_mode_format() {
        let path =
            std::env::temp_dir().join(format!("cluecard-words-{}.txt", std::process::id()));
        fs::write(&path, "WORDLIST\nkite\nlamp\n").unwrap();

        let records = load_word_list(&config(Some(path.clone()), PlayMode::Paging)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(records, [Record::word("kite"), Record::word("lamp")]);
    }
}
