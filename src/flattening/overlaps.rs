use std::fmt::Debug;

use crate::{DiffEntry, DiffError};

/// Finds the entry of `existing` that `candidate` has to be combined with
/// instead of being added as a separate entry. When several entries match, the
/// most recently added one is returned.
///
/// An entry matches when
/// - it is of the same kind and has the same key, or
/// - both are insertions (single or range) with the same key, or
/// - both are removals whose ranges touch.
///
/// Every entry is checked, so a removal sharing characters with any of them
/// is an error since the diff would remove those characters twice.
pub fn find_overlap<T>(
    existing: &[DiffEntry<T>],
    candidate: &DiffEntry<T>,
) -> Result<Option<usize>, DiffError>
where
    T: PartialEq + Clone + Debug,
{
    let mut found = None;

    for (index, entry) in existing.iter().enumerate().rev() {
        if is_overlapping(entry, candidate)? && found.is_none() {
            found = Some(index);
        }
    }

    Ok(found)
}

/// Check whether the existing collection of diff entries has one that must be
/// combined with `candidate`. See `find_overlap`.
pub fn overlaps<T>(existing: &[DiffEntry<T>], candidate: &DiffEntry<T>) -> Result<bool, DiffError>
where
    T: PartialEq + Clone + Debug,
{
    find_overlap(existing, candidate).map(|index| index.is_some())
}

fn is_overlapping<T>(entry: &DiffEntry<T>, candidate: &DiffEntry<T>) -> Result<bool, DiffError>
where
    T: PartialEq + Clone + Debug,
{
    if let (Some(existing_range), Some(candidate_range)) =
        (entry.removed_range()?, candidate.removed_range()?)
    {
        let (first, last) = if (existing_range.start, existing_range.end)
            <= (candidate_range.start, candidate_range.end)
        {
            (existing_range, candidate_range)
        } else {
            (candidate_range, existing_range)
        };

        if first.end < last.start {
            return Ok(false);
        }

        if first.end != last.start {
            return Err(DiffError::OverlappingDeleteConflict {
                first_key: first.start,
                first_length: first.len(),
                second_key: last.start,
                second_length: last.len(),
            });
        }

        return Ok(true);
    }

    let (kind, candidate_kind) = (entry.kind(), candidate.kind());

    Ok(entry.key() == candidate.key()
        && (kind == candidate_kind || (kind.is_insertion() && candidate_kind.is_insertion())))
}
