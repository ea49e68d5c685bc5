//! Cross-cutting error types.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `TabularError`) are defined in
//! their respective crates. They converge in the `icdxn` binary via `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value stored or received does not match any known variant.
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
