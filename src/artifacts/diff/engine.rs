use crate::artifacts::diff::alignment::{Align, LineAligner};
use crate::artifacts::diff::classifier;
use crate::artifacts::diff::fast_path;
use crate::artifacts::diff::normalizer::Normalizer;
use crate::artifacts::diff::result::DiffResult;
use derive_new::new;

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("classified {} groups", groups.len());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_diff"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Tuning knobs for a comparison.
///
/// `ignore_whitespace` aligns lines with leading/trailing whitespace
/// stripped; the reported blocks still carry the original text.
/// `collapse_moves` enables the normalizer pass that reinterprets a
/// remove/addition pair as a pure insertion when the removed text survives
/// verbatim in the suggested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub collapse_moves: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions::new(false, true)
    }
}

/// The diff-classification pipeline: fast-path detection, line alignment,
/// classification, normalization.
///
/// A comparison is a pure function of its two inputs and the options; the
/// engine holds no per-call state and may be shared freely across callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn options(&self) -> DiffOptions {
        self.options
    }

    /// Classify every line of `source` against `target` into equal, removed
    /// and added blocks. Total over any pair of strings.
    pub fn compare(&self, source: &str, target: &str) -> DiffResult {
        if let Some(result) = fast_path::detect(source, target) {
            debug_log!("fast path: {} equal, {} added", result.equal.len(), result.addition.len());
            return result;
        }

        let groups = LineAligner::new(self.options.ignore_whitespace).align(source, target);
        debug_log!("aligned into {} change groups", groups.len());

        let classification = classifier::classify(&groups);
        Normalizer::new(self.options.collapse_moves).normalize(classification, source, target)
    }
}

/// Compare two documents with default options.
pub fn diff(source: &str, target: &str) -> DiffResult {
    DiffEngine::default().compare(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::result::{AdditionBlock, EqualBlock, RemoveBlock};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn equal(start: usize, end: usize, content: &str) -> EqualBlock {
        EqualBlock::new(start, end, content.to_string())
    }

    fn remove(start: usize, end: usize, content: &str) -> RemoveBlock {
        RemoveBlock::new(start, end, content.to_string())
    }

    fn addition(anchor: usize, content: &str) -> AdditionBlock {
        AdditionBlock::new(anchor, content.to_string())
    }

    #[fixture]
    fn greet_fn() -> &'static str {
        "function greet(name) {\n  console.log(name);\n}"
    }

    #[rstest]
    fn whole_file_replacement_anchors_the_insertion_at_file_start() {
        let result = diff("a\nb", "x\ny");

        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![]);
        assert_eq!(result.remove, vec![remove(1, 2, "a\nb")]);
        assert_eq!(result.addition, vec![addition(0, "x\ny")]);
    }

    #[rstest]
    fn deletion_only_splits_the_surviving_lines_around_the_removal() {
        let result = diff("a\nb\nc", "a\nc");

        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![equal(1, 1, "a"), equal(3, 3, "c")]);
        assert_eq!(result.remove, vec![remove(2, 2, "b")]);
        assert_eq!(result.addition, vec![]);
    }

    #[rstest]
    fn appending_a_function_is_a_single_anchored_addition(greet_fn: &'static str) {
        let appended = "\nfunction bye(name) {\n  console.log(name);\n}";
        let target = format!("{greet_fn}\n{appended}");

        let result = diff(greet_fn, &target);

        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![equal(1, 3, greet_fn)]);
        assert_eq!(result.remove, vec![]);
        assert_eq!(result.addition, vec![addition(3, appended)]);
    }

    #[rstest]
    fn identical_inputs_have_no_difference(greet_fn: &'static str) {
        let result = diff(greet_fn, greet_fn);

        assert_eq!(result.has_difference, false);
        assert_eq!(result.equal, vec![equal(1, 3, greet_fn)]);
        assert_eq!(result.remove, vec![]);
        assert_eq!(result.addition, vec![]);
    }

    #[rstest]
    fn replacement_in_the_middle_keeps_surrounding_lines_equal() {
        let result = diff("a\nold\nz", "a\nnew\nz");

        assert_eq!(result.equal, vec![equal(1, 1, "a"), equal(3, 3, "z")]);
        assert_eq!(result.remove, vec![remove(2, 2, "old")]);
        assert_eq!(result.addition, vec![addition(2, "new")]);
    }

    #[rstest]
    fn removed_text_reappearing_verbatim_collapses_to_a_pure_insertion() {
        // "helper()" is not moved, it merely recurs inside an added line;
        // the containment heuristic collapses anyway (known approximation)
        let source = "a\nhelper()\nz\n";
        let target = "a\nB\nz\nuse helper() here\n";

        let result = diff(source, target);

        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![equal(1, 4, source)]);
        assert_eq!(result.remove, vec![]);
        assert_eq!(result.addition, vec![addition(2, "B\nuse helper() here")]);
    }

    #[rstest]
    fn disabling_collapse_keeps_the_removal_visible() {
        let options = DiffOptions::new(false, false);
        let source = "a\nhelper()\nz\n";
        let target = "a\nB\nz\nuse helper() here\n";

        let result = DiffEngine::new(options).compare(source, target);

        assert_eq!(result.remove, vec![remove(2, 2, "helper()")]);
        assert_eq!(result.equal, vec![equal(1, 1, "a"), equal(3, 3, "z")]);
    }

    #[rstest]
    fn whitespace_only_edits_vanish_when_ignoring_whitespace() {
        let options = DiffOptions::new(true, true);

        let result = DiffEngine::new(options).compare("  a\nb", "a\n  b");

        // alignment treats the trimmed lines as equal; the full pipeline
        // still ran, so a difference is reported even though nothing moved
        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![equal(1, 2, "  a\nb")]);
        assert_eq!(result.remove, vec![]);
        assert_eq!(result.addition, vec![]);
    }

    #[rstest]
    fn emptying_a_document_is_a_plain_removal() {
        let result = diff("a\nb", "");

        assert_eq!(result.has_difference, true);
        assert_eq!(result.equal, vec![]);
        assert_eq!(result.remove, vec![remove(1, 2, "a\nb")]);
        assert_eq!(result.addition, vec![]);
    }
}
