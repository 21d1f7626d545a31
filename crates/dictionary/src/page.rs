use serde::Serialize;

use crate::grouping::{group_definitions, GroupedDefinition};
use crate::WordEntry;

/// Everything a renderer needs to show one looked up word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPage {
    /// The query as typed, display-cased.
    pub word: String,
    pub data: Vec<GroupedDefinition>,
}

impl WordPage {
    pub fn new(word: &str, entries: &[WordEntry]) -> Self {
        Self {
            word: capitalize(word),
            data: group_definitions(entries),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
