//! Flatten hierarchical diffs of multiline strings.
//!
//! A diff of a string split into lines can insert and remove whole lines and
//! patch single lines with a nested character-level diff. `flatten_string_diff`
//! turns such a two-level diff into a single character-level diff of the
//! joined string, which is what editors and diff views operate on.
//!
//! ```
//! use flatten_diff::{DiffEntry, apply_flat_diff, flatten_text_diff};
//!
//! let text = "first line\nsecond line\n";
//! let diff: Vec<DiffEntry<String>> = vec![
//!     DiffEntry::create_patch(0, vec![DiffEntry::create_add_range(0, "the ")]),
//!     DiffEntry::create_remove_range(1, 1),
//! ];
//!
//! let flattened = flatten_text_diff(text, &diff).unwrap();
//! assert_eq!(
//!     flattened,
//!     vec![
//!         DiffEntry::create_add_range(0, "the "),
//!         DiffEntry::create_remove_range(11, 12),
//!     ]
//! );
//! assert_eq!(apply_flat_diff(text, &flattened).unwrap(), "the first line\n");
//! ```

mod diff_entry;
mod diff_error;
mod flattening;
mod patching;
mod utils;

pub use diff_entry::{DiffEntry, OperationKind, Source, ValueList, get_diff_key};
pub use diff_error::DiffError;
pub use flattening::{
    combine, find_overlap, flatten_string_diff, flatten_text_diff, overlaps, validate_sequence_op,
    validate_string_diff,
};
pub use patching::{apply_flat_diff, apply_line_diff};
pub use utils::{
    accumulate_lengths::accumulate_lengths,
    shared_prefix::{common_prefix_len, find_shared_prefix},
    split_lines::split_lines,
};

#[cfg(feature = "wasm")]
pub mod wasm;
