//! I/O surfaces around the diff engine
//!
//! This module contains the components that touch the outside world:
//!
//! - `comparator`: high-level comparison operations and output coordination
//! - `workspace`: file system access for the compared documents

pub mod comparator;
pub mod workspace;
