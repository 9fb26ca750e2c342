use alloc::vec::Vec;

use super::{Record, text_utils::data_lines};

const HEADER: &str = "wordlist";

/// Parse a one-word-per-line list. A leading `wordlist` header is dropped.
pub fn parse_single_column(text: &str) -> Vec<Record> {
    let mut lines = data_lines(text).peekable();
    if lines
        .peek()
        .is_some_and(|first| first.eq_ignore_ascii_case(HEADER))
    {
        lines.next();
    }

    lines.map(Record::word).collect()
}
