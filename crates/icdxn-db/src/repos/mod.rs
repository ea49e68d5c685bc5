//! Repository modules implementing store operations.
//!
//! Each module adds methods to `CurationService` via `impl CurationService` blocks.

pub mod association;
pub mod catalog;
pub mod export;
pub mod seed;
pub mod selector;
