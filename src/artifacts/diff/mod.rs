//! Diff classification pipeline
//!
//! This module implements the block-classified line diff:
//!
//! - `fast_path`: short-circuits identical and pure-append comparisons
//! - `alignment`: line-granularity Myers alignment into tagged change groups
//! - `classifier`: assigns current-document line numbers to the groups
//! - `normalizer`: block merging, anchor fixes and the move collapse
//! - `engine`: the `DiffEngine` entry point tying the passes together
//! - `result`: the `DiffResult` value records and their JSON contract
//!
//! The pipeline classifies every line of the current document as unchanged,
//! removed or added relative to the suggested document, preserving original
//! line numbering and exact text.

pub mod alignment;
pub mod classifier;
pub mod engine;
pub mod fast_path;
pub mod lines;
pub mod normalizer;
pub mod result;
