use thiserror::Error;

use crate::diff_entry::{OperationKind, Source};

/// Error type for diffs that cannot be flattened or applied.
///
/// Every variant aborts the whole call; no partially flattened diff is ever
/// returned next to an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    /// The operation references positions outside of the sequence it is
    /// defined against.
    #[error(
        "Invalid diff: {kind} operation at key {key} spanning {length} items does not fit into a \
         sequence of {available} items"
    )]
    OutOfBounds {
        /// The kind of the offending operation
        kind: OperationKind,
        /// The position where the operation starts
        key: usize,
        /// The number of items the operation touches (0 for insertions)
        length: usize,
        /// The length of the sequence the operation is defined against
        available: usize,
    },

    /// Two deletions remove some of the same characters.
    #[error(
        "Overlapping delete diff ops: removing {first_length} from {first_key} and \
         {second_length} from {second_key} would remove the same characters twice"
    )]
    OverlappingDeleteConflict {
        first_key: usize,
        first_length: usize,
        second_key: usize,
        second_length: usize,
    },

    /// Two operations at the same position come from different sources.
    #[error(
        "Cannot combine diff ops with different sources ({} and {}) at key {key}",
        describe_source(.left),
        describe_source(.right)
    )]
    ProvenanceMismatch {
        key: usize,
        left: Option<Source>,
        right: Option<Source>,
    },

    /// Only insertions with insertions and deletions with deletions can be
    /// combined.
    #[error("Cannot combine a {existing} operation with a {candidate} operation")]
    IncompatibleOperationKinds {
        existing: OperationKind,
        candidate: OperationKind,
    },

    /// A patch was found where only flat operations are allowed, e.g. inside
    /// the diff of a single line.
    #[error("Unexpected patch at key {key}: characters cannot be patched")]
    NestedPatch { key: usize },

    /// A flat diff was applied with operations that are not in ascending,
    /// non-overlapping order.
    #[error("Operation at key {key} starts before the already processed position {position}")]
    UnsortedOperations { key: usize, position: usize },
}

#[allow(clippy::ref_option)]
fn describe_source(source: &Option<Source>) -> String {
    source
        .as_ref()
        .map_or_else(|| "none".to_owned(), ToString::to_string)
}
