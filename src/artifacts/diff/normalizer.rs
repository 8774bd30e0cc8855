use crate::artifacts::diff::classifier::Classification;
use crate::artifacts::diff::lines;
use crate::artifacts::diff::result::{AdditionBlock, DiffResult, EqualBlock};
use derive_new::new;

/// Post-processes raw classification into the final, position-stable result.
///
/// Four passes run in fixed order: merge adjacent equal blocks, merge
/// adjacent addition blocks, re-anchor additions when nothing survived
/// unchanged, and optionally collapse a remove/addition pair back into a
/// pure insertion when the removed text still occurs verbatim in the
/// suggested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Normalizer {
    collapse_moves: bool,
}

impl Normalizer {
    pub fn normalize(
        &self,
        classification: Classification,
        source: &str,
        target: &str,
    ) -> DiffResult {
        let Classification {
            equal,
            remove,
            addition,
        } = classification;

        let equal = merge_adjacent_equal_blocks(equal);
        let mut addition = merge_adjacent_addition_blocks(addition);

        // With nothing unchanged, a removal-relative anchor is meaningless;
        // the whole insertion belongs at the start of the file.
        if equal.is_empty() && !remove.is_empty() && !addition.is_empty() {
            for block in &mut addition {
                block.insert_after_line = 0;
            }
            addition = merge_adjacent_addition_blocks(addition);
        }

        if self.collapse_moves && !remove.is_empty() && !addition.is_empty() {
            let removed_text = remove
                .iter()
                .map(|block| block.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");

            // Textual containment, not move detection: identical content
            // elsewhere in the target triggers the collapse as well.
            if target.contains(&removed_text) {
                return DiffResult::new(
                    true,
                    vec![EqualBlock::new(
                        1,
                        lines::line_count(source),
                        source.to_string(),
                    )],
                    Vec::new(),
                    addition,
                );
            }
        }

        DiffResult::new(true, equal, remove, addition)
    }
}

fn merge_adjacent_equal_blocks(blocks: Vec<EqualBlock>) -> Vec<EqualBlock> {
    let mut merged: Vec<EqualBlock> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.end_line + 1 == block.start_line => {
                last.end_line = block.end_line;
                last.content.push('\n');
                last.content.push_str(&block.content);
            }
            _ => merged.push(block),
        }
    }

    merged
}

// Folds runs of addition blocks whose anchors repeat or ascend by exactly 1,
// keeping the first block's anchor. Insertions chunked by the adapter around
// consumed lines coalesce here, and no two blocks share an anchor afterwards.
fn merge_adjacent_addition_blocks(blocks: Vec<AdditionBlock>) -> Vec<AdditionBlock> {
    let mut merged: Vec<AdditionBlock> = Vec::with_capacity(blocks.len());
    let mut last_anchor = 0usize;

    for block in blocks {
        match merged.last_mut() {
            Some(last)
                if block.insert_after_line == last_anchor
                    || block.insert_after_line == last_anchor + 1 =>
            {
                last_anchor = block.insert_after_line;
                last.content.push('\n');
                last.content.push_str(&block.content);
            }
            _ => {
                last_anchor = block.insert_after_line;
                merged.push(block);
            }
        }
    }

    merged
}
