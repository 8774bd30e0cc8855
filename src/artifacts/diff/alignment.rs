use crate::artifacts::diff::lines;
use derive_new::new;
use similar::{Algorithm, DiffOp, capture_diff_slices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTag {
    Unchanged,
    Added,
    Removed,
}

/// One tagged run of complete lines emitted by the alignment primitive.
/// The payload is the exact text of the run, separators included, so a run
/// that does not end the document ends with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeGroup {
    pub tag: GroupTag,
    pub text: String,
}

pub trait Align {
    fn align(&self, source: &str, target: &str) -> Vec<ChangeGroup>;
}

/// Line-granularity alignment over Myers' diff.
///
/// With `ignore_whitespace` the lines are compared with leading and trailing
/// whitespace stripped, while the emitted payloads still carry the original
/// text. Separators are never diffed as tokens of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct LineAligner {
    ignore_whitespace: bool,
}

impl Align for LineAligner {
    fn align(&self, source: &str, target: &str) -> Vec<ChangeGroup> {
        let source_lines = lines::split_keeping_separator(source);
        let target_lines = lines::split_keeping_separator(target);

        let ops = if self.ignore_whitespace {
            let source_keys = source_lines.iter().map(|l| l.trim()).collect::<Vec<_>>();
            let target_keys = target_lines.iter().map(|l| l.trim()).collect::<Vec<_>>();
            capture_diff_slices(Algorithm::Myers, &source_keys, &target_keys)
        } else {
            capture_diff_slices(Algorithm::Myers, &source_lines, &target_lines)
        };

        let mut groups: Vec<ChangeGroup> = Vec::with_capacity(ops.len());
        for op in ops {
            match op {
                DiffOp::Equal { old_index, len, .. } => push_group(
                    &mut groups,
                    GroupTag::Unchanged,
                    &source_lines[old_index..old_index + len],
                ),
                DiffOp::Delete {
                    old_index, old_len, ..
                } => push_group(
                    &mut groups,
                    GroupTag::Removed,
                    &source_lines[old_index..old_index + old_len],
                ),
                DiffOp::Insert {
                    new_index, new_len, ..
                } => push_group(
                    &mut groups,
                    GroupTag::Added,
                    &target_lines[new_index..new_index + new_len],
                ),
                // a replaced run reports its removed lines before its added ones
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => {
                    push_group(
                        &mut groups,
                        GroupTag::Removed,
                        &source_lines[old_index..old_index + old_len],
                    );
                    push_group(
                        &mut groups,
                        GroupTag::Added,
                        &target_lines[new_index..new_index + new_len],
                    );
                }
            }
        }

        groups
    }
}

// Consecutive same-tag runs fold into one group so that downstream blocks
// are maximal and never line-adjacent within a list.
fn push_group(groups: &mut Vec<ChangeGroup>, tag: GroupTag, run: &[&str]) {
    if run.is_empty() {
        return;
    }

    match groups.last_mut() {
        Some(last) if last.tag == tag => last.text.push_str(&run.concat()),
        _ => groups.push(ChangeGroup::new(tag, run.concat())),
    }
}
