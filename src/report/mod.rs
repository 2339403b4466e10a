//! Report module - printing plan summaries

pub mod summary;

pub use summary::*;
