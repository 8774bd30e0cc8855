use crate::artifacts::diff::alignment::{ChangeGroup, GroupTag};
use crate::artifacts::diff::lines;
use crate::artifacts::diff::result::{AdditionBlock, EqualBlock, RemoveBlock};

/// Raw, unnormalized block lists in adapter encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub equal: Vec<EqualBlock>,
    pub remove: Vec<RemoveBlock>,
    pub addition: Vec<AdditionBlock>,
}

/// Walk the change groups once and assign current-document line numbers.
///
/// A single cursor tracks the next unconsumed line of the current document.
/// Unchanged and removed groups occupy current-document lines and advance it;
/// added content occupies none, so an added group is anchored to the line
/// before the cursor and leaves it untouched. Groups that split into zero
/// lines emit nothing.
pub fn classify(groups: &[ChangeGroup]) -> Classification {
    groups
        .iter()
        .fold(
            (Classification::default(), 1usize),
            |(mut classification, cursor), group| {
                let group_lines = lines::payload_lines(&group.text);
                if group_lines.is_empty() {
                    return (classification, cursor);
                }

                let count = group_lines.len();
                let content = group_lines.join("\n");

                match group.tag {
                    GroupTag::Unchanged => {
                        classification
                            .equal
                            .push(EqualBlock::new(cursor, cursor + count - 1, content));
                        (classification, cursor + count)
                    }
                    GroupTag::Removed => {
                        classification
                            .remove
                            .push(RemoveBlock::new(cursor, cursor + count - 1, content));
                        (classification, cursor + count)
                    }
                    GroupTag::Added => {
                        classification
                            .addition
                            .push(AdditionBlock::new(cursor - 1, content));
                        (classification, cursor)
                    }
                }
            },
        )
        .0
}
