use derive_new::new;
use serde::{Deserialize, Serialize};

/// A contiguous run of lines present unchanged in both the current and the
/// suggested document. Line numbers are 1-based, inclusive and always refer
/// to the current (source) document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct EqualBlock {
    pub start_line: usize,
    pub end_line: usize,
    /// Exact text of the lines, joined by `\n`, without a trailing separator.
    pub content: String,
}

/// A contiguous run of lines present only in the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBlock {
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
}

/// Lines present only in the suggested document, anchored to a position in
/// the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct AdditionBlock {
    /// The current-document line after which the content is inserted.
    /// 0 means "before the first line".
    pub insert_after_line: usize,
    pub content: String,
}

/// The classified outcome of a single comparison.
///
/// The field names of the JSON serialization (`hasDifference`, `startLine`,
/// `insertAfterLine`, ...) are an interchange contract consumed by downstream
/// tooling and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub has_difference: bool,
    pub equal: Vec<EqualBlock>,
    pub remove: Vec<RemoveBlock>,
    pub addition: Vec<AdditionBlock>,
}

impl DiffResult {
    /// True when the comparison produced no blocks at all, i.e. both inputs
    /// were empty.
    pub fn is_empty(&self) -> bool {
        self.equal.is_empty() && self.remove.is_empty() && self.addition.is_empty()
    }
}
