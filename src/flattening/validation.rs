use std::fmt::Debug;

use log::debug;

use crate::{DiffEntry, DiffError};

/// Checks that `entry` fits into a sequence of `length` items: insertions may
/// point one past the last item, removals must not run past the end and
/// patches need an existing item.
///
/// Nested diffs of patches are not looked at, see `validate_string_diff`.
pub fn validate_sequence_op<T>(length: usize, entry: &DiffEntry<T>) -> Result<(), DiffError>
where
    T: PartialEq + Clone + Debug,
{
    let (is_valid, touched) = match entry {
        DiffEntry::Add { key, .. } | DiffEntry::AddRange { key, .. } => (*key <= length, 0),
        DiffEntry::RemoveRange {
            key,
            length: removed,
            ..
        } => (
            key.checked_add(*removed).is_some_and(|end| end <= length),
            *removed,
        ),
        DiffEntry::Patch { key, .. } => (*key < length, 1),
    };

    if is_valid {
        Ok(())
    } else {
        Err(DiffError::OutOfBounds {
            kind: entry.kind(),
            key: entry.key(),
            length: touched,
            available: length,
        })
    }
}

/// Validates a line-level entry of a string diff against the lines of the
/// base string. The nested diff of a patch is validated against the
/// characters of the patched line and may not contain further patches.
pub fn validate_string_diff<L>(lines: &[L], entry: &DiffEntry<String>) -> Result<(), DiffError>
where
    L: AsRef<str>,
{
    validate_sequence_op(lines.len(), entry)
        .and_then(|()| {
            let DiffEntry::Patch { key, diff, .. } = entry else {
                return Ok(());
            };

            let line_length = lines[*key].as_ref().chars().count();
            diff.iter().try_for_each(|line_entry| {
                if let DiffEntry::Patch { key, .. } = line_entry {
                    return Err(DiffError::NestedPatch { key: *key });
                }

                validate_sequence_op(line_length, line_entry)
            })
        })
        .inspect_err(|error| debug!("Rejected {entry}: {error}"))
}
