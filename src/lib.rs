//! Block-classified line diffing for code documents.
//!
//! The crate compares two versions of a text document and classifies every
//! line as unchanged, removed or added, preserving original line numbering
//! and exact content. See [`artifacts::diff::engine::DiffEngine`] for the
//! core pipeline and [`artifacts::diff::result::DiffResult`] for the output
//! shape.

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::engine::{DiffEngine, DiffOptions, diff};
pub use artifacts::diff::result::{AdditionBlock, DiffResult, EqualBlock, RemoveBlock};
