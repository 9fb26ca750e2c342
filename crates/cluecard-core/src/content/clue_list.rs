use alloc::{string::ToString, vec::Vec};

use log::debug;

use super::{
    Record,
    text_utils::{data_lines, split_fields},
};

/// Parse the `category,keyword,clue...` layout.
///
/// The first non-blank line is a header and is dropped. Fields are not
/// quoted, so a comma always ends a field. Empty clue cells are dropped and
/// rows without a keyword are skipped.
pub fn parse_clue_list(text: &str) -> Vec<Record> {
    let mut records = Vec::new();

    for (line_no, line) in data_lines(text).enumerate().skip(1) {
        let mut fields = split_fields(line);
        let category = fields.next().unwrap_or_default();
        let keyword = fields.next().unwrap_or_default();

        if keyword.is_empty() {
            debug!("word list: skipping row {} without keyword", line_no + 1);
            continue;
        }

        records.push(Record {
            category: category.to_string(),
            keyword: keyword.to_string(),
            clues: fields
                .filter(|clue| !clue.is_empty())
                .map(ToString::to_string)
                .collect(),
        });
    }

    records
}
