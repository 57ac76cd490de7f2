// vtreebuild.
// Copyright 2026.

//! Error types returned by this crate.
//!
//! Almost every input to this crate is normalized rather than rejected
//! (see the module docs on [`crate::builder`]); the only recoverable
//! error is a programmer error that slips past its `debug_assert`-time
//! check, plus the invariant checker that can be run explicitly outside
//! debug builds.

use thiserror::Error;

/// Errors that can be returned while building or inspecting a tree.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A folder name contained a `/`, which would make it ambiguous with
    /// a path. Folder names come from path segments and entry names, so
    /// this indicates a caller bug rather than a malformed path.
    #[error("folder name {name:?} contains a path separator")]
    InvariantViolation { name: String },

    /// One of the [`crate::node::TreeData`] structural invariants did not
    /// hold after materialization.
    #[error("tree invariant violated: {0}")]
    TreeInvariant(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
