//! Word list sources and parsers.

mod clue_list;
mod single_column;
pub mod static_source;
mod text_utils;

use alloc::{string::String, vec::Vec};
use core::fmt;

use log::{info, warn};

pub use clue_list::parse_clue_list;
pub use single_column::parse_single_column;

/// One entry of the word list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record {
    pub category: String,
    pub keyword: String,
    pub clues: Vec<String>,
}

impl Record {
    pub fn new<C, K, I, S>(category: C, keyword: K, clues: I) -> Self
    where
        C: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            keyword: keyword.into(),
            clues: clues.into_iter().map(Into::into).collect(),
        }
    }

    /// Bare word used by the single-column lists.
    pub fn word<K: Into<String>>(keyword: K) -> Self {
        Self {
            category: String::new(),
            keyword: keyword.into(),
            clues: Vec::new(),
        }
    }
}

/// Layout of the raw word list text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WordListFormat {
    /// Header line, then `category,keyword,clue1,...,clueN`.
    #[default]
    Clues,
    /// One word per line with an optional `wordlist` header.
    SingleColumn,
}

impl WordListFormat {
    pub fn parse(self, text: &str) -> Vec<Record> {
        match self {
            Self::Clues => parse_clue_list(text),
            Self::SingleColumn => parse_single_column(text),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadError {
    /// The resource could not be fetched.
    Unreachable,
    /// The resource was fetched but held no records.
    Empty,
}

impl LoadError {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Unreachable => "unreachable",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => f.write_str("word list could not be read"),
            Self::Empty => f.write_str("word list has no usable entries"),
        }
    }
}

/// Supplier of raw word list text. Fetching is the host's job; parsing is not.
pub trait WordListResource {
    type Error: fmt::Debug;

    fn fetch(&mut self, resource_id: &str) -> Result<String, Self::Error>;
}

/// Fetch `resource_id` and parse it as `format`.
pub fn load<S>(
    source: &mut S,
    resource_id: &str,
    format: WordListFormat,
) -> Result<Vec<Record>, LoadError>
where
    S: WordListResource + ?Sized,
{
    let text = source.fetch(resource_id).map_err(|err| {
        warn!("word list: fetch {} failed: {:?}", resource_id, err);
        LoadError::Unreachable
    })?;

    let records = format.parse(&text);
    if records.is_empty() {
        warn!("word list: {} parsed to zero records", resource_id);
        return Err(LoadError::Empty);
    }

    info!(
        "word list: loaded records={} format={:?} from {}",
        records.len(),
        format,
        resource_id
    );
    Ok(records)
}

#[cfg(test)]
mod tests;
