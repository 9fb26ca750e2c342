use alloc::string::String;

use super::static_source::{SAMPLE_RESOURCE_ID, StaticResource, sample_resource};
use super::*;

struct MissingResource;

impl WordListResource for MissingResource {
    type Error = &'static str;

    fn fetch(&mut self, _resource_id: &str) -> Result<String, Self::Error> {
        Err("not found")
    }
}

#[test]
fn clue_rows_split_into_category_keyword_and_clues() {
    let records = parse_clue_list(
        "category,keyword,clue1,clue2\nFruit,Apple,red,tree\nTools,Hammer,nail\nMisc,Echo\n",
    );

    assert_eq!(
        records,
        [
            Record::new("Fruit", "Apple", ["red", "tree"]),
            Record::new("Tools", "Hammer", ["nail"]),
            Record::new("Misc", "Echo", [] as [&str; 0]),
        ]
    );
}

#[test]
fn clue_list_header_is_dropped_even_after_blank_lines() {
    let records = parse_clue_list("\n\ncategory,keyword\nA,Alpha\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].keyword, "Alpha");
}

#[test]
fn clue_list_tolerates_crlf_padding_and_ragged_rows() {
    let records = parse_clue_list("h\r\n Food , Soup , hot ,, spoon ,\r\n\r\n,NoCategory\r\n");

    assert_eq!(records[0], Record::new("Food", "Soup", ["hot", "spoon"]));
    assert_eq!(records[1], Record::new("", "NoCategory", [] as [&str; 0]));
}

#[test]
fn rows_without_keyword_are_skipped() {
    let records = parse_clue_list("h\nOnlyCategory\nA,,clue\nB,Bee,buzz\n");
    assert_eq!(records, [Record::new("B", "Bee", ["buzz"])]);
}

#[test]
fn header_only_clue_list_is_empty() {
    assert!(parse_clue_list("category,keyword,clue1\n").is_empty());
    assert!(parse_clue_list("").is_empty());
}

#[test]
fn single_column_drops_wordlist_header_case_insensitively() {
    let records = parse_single_column("WordList\r\n apple \n\nbanana\n");
    assert_eq!(records, [Record::word("apple"), Record::word("banana")]);
}

#[test]
fn single_column_keeps_first_line_when_not_a_header() {
    let records = parse_single_column("kite\nlamp\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].keyword, "kite");
    assert!(records[0].clues.is_empty());
    assert!(records[0].category.is_empty());
}

#[test]
fn load_reports_unreachable_resource() {
    let result = load(&mut MissingResource, "words.csv", WordListFormat::Clues);
    assert_eq!(result, Err(LoadError::Unreachable));
    assert_eq!(LoadError::Unreachable.reason(), "unreachable");
}

#[test]
fn load_reports_empty_word_list() {
    let mut source = StaticResource::new("wordlist\n");
    let result = load(&mut source, "words.txt", WordListFormat::SingleColumn);
    assert_eq!(result, Err(LoadError::Empty));
    assert_eq!(LoadError::Empty.reason(), "empty");
}

#[test]
fn sample_list_loads_as_clue_records() {
    let records = load(
        &mut sample_resource(),
        SAMPLE_RESOURCE_ID,
        WordListFormat::Clues,
    )
    .unwrap();

    assert_eq!(records.len(), 12);
    assert!(records.iter().all(|record| record.clues.len() == 3));
    assert_eq!(records[0].keyword, "Elephant");
}
