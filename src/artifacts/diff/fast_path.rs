use crate::artifacts::diff::lines;
use crate::artifacts::diff::result::{AdditionBlock, DiffResult, EqualBlock};

/// Decide in O(n) whether a trivial comparison bypasses full alignment.
///
/// Two cases short-circuit: byte-identical inputs, and a target that starts
/// with the source as a literal prefix (the common "append at end of file"
/// edit). Besides the speed win, the append path avoids the noisier
/// remove/add split a generic alignment can produce for suffix-only changes.
pub fn detect(source: &str, target: &str) -> Option<DiffResult> {
    if source == target {
        return Some(identical(source));
    }

    if target.starts_with(source) {
        return Some(pure_append(source, target));
    }

    None
}

fn identical(source: &str) -> DiffResult {
    let equal = if source.is_empty() {
        Vec::new()
    } else {
        vec![EqualBlock::new(
            1,
            lines::line_count(source),
            source.to_string(),
        )]
    };

    DiffResult::new(false, equal, Vec::new(), Vec::new())
}

fn pure_append(source: &str, target: &str) -> DiffResult {
    let appended = &target[source.len()..];
    // a single leading separator opens the appended line, it is not content
    let appended = appended.strip_prefix('\n').unwrap_or(appended);

    let equal = if source.is_empty() {
        Vec::new()
    } else {
        vec![EqualBlock::new(
            1,
            lines::line_count(source),
            source.to_string(),
        )]
    };

    let addition = if appended.is_empty() {
        Vec::new()
    } else {
        vec![AdditionBlock::new(
            lines::line_count(source),
            appended.to_string(),
        )]
    };

    DiffResult::new(true, equal, Vec::new(), addition)
}
