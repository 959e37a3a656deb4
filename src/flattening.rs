mod combine;
mod overlaps;
mod validation;

pub use combine::combine;
use log::{debug, trace};
pub use overlaps::{find_overlap, overlaps};
pub use validation::{validate_sequence_op, validate_string_diff};

use crate::{
    DiffEntry, DiffError, ValueList,
    utils::{accumulate_lengths::accumulate_lengths, split_lines::split_lines},
};

/// Translates a diff of a multiline string split into lines (each line
/// keeping its line ending) into a diff of the joined string.
///
/// Line insertions and removals become a single character-level insertion or
/// removal, and the character-level diffs of patched lines are moved to the
/// position of their line. Entries that end up at the same position are
/// combined, so that the result never contains two insertions at the same key
/// or two touching removals.
///
/// The result is sorted by key, keeping entries with equal keys in the order
/// they were produced.
///
/// ```
/// use flatten_diff::{DiffEntry, flatten_string_diff};
///
/// let lines = ["ab\n", "123\n", "y\n"];
/// let diff: Vec<DiffEntry<String>> = vec![
///     DiffEntry::create_patch(1, vec![DiffEntry::create_add_range(3, "4")]),
///     DiffEntry::create_remove_range(2, 1),
/// ];
///
/// assert_eq!(
///     flatten_string_diff(&lines, &diff).unwrap(),
///     vec![
///         DiffEntry::create_add_range(6, "4"),
///         DiffEntry::create_remove_range(7, 2),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Fails without returning a partial result if any entry doesn't fit into the
/// lines, if two removals overlap or if entries at the same position come
/// from different sources.
pub fn flatten_string_diff<L>(
    lines: &[L],
    diff: &[DiffEntry<String>],
) -> Result<Vec<DiffEntry<String>>, DiffError>
where
    L: AsRef<str>,
{
    let line_to_char = accumulate_lengths(lines);
    let mut flattened: Vec<DiffEntry<String>> = Vec::with_capacity(diff.len());

    for entry in diff {
        validate_string_diff(lines, entry)?;

        let line_offset = line_to_char[entry.key()];
        match entry {
            DiffEntry::Patch { diff, .. } => {
                for line_entry in diff {
                    push_or_combine(
                        &mut flattened,
                        line_entry.clone().with_shifted_key(line_offset),
                    )?;
                }
            }

            DiffEntry::Add { value, source, .. } => push_or_combine(
                &mut flattened,
                DiffEntry::AddRange {
                    key: line_offset,
                    valuelist: ValueList::Text(value.clone()),
                    source: source.clone(),
                },
            )?,

            DiffEntry::AddRange {
                valuelist, source, ..
            } => push_or_combine(
                &mut flattened,
                DiffEntry::AddRange {
                    key: line_offset,
                    valuelist: ValueList::Text(join_lines(valuelist)),
                    source: source.clone(),
                },
            )?,

            DiffEntry::RemoveRange {
                key,
                length,
                source,
            } => push_or_combine(
                &mut flattened,
                DiffEntry::RemoveRange {
                    key: line_offset,
                    length: line_to_char[key + length] - line_offset,
                    source: source.clone(),
                },
            )?,
        }
    }

    // Nested diffs can list their entries out of order, but the relative order
    // of entries at the same key is meaningful.
    flattened.sort_by_key(DiffEntry::key);

    Ok(flattened)
}

/// Same as `flatten_string_diff` but takes the multiline string itself and
/// splits it into lines first.
///
/// # Errors
///
/// See `flatten_string_diff`.
pub fn flatten_text_diff(
    text: &str,
    diff: &[DiffEntry<String>],
) -> Result<Vec<DiffEntry<String>>, DiffError> {
    flatten_string_diff(&split_lines(text), diff)
}

/// Concatenates inserted lines into the inserted text.
pub(crate) fn join_lines(valuelist: &ValueList<String>) -> String {
    match valuelist {
        ValueList::Items(lines) => lines.concat(),
        ValueList::Text(text) => text.clone(),
    }
}

fn push_or_combine(
    flattened: &mut Vec<DiffEntry<String>>,
    entry: DiffEntry<String>,
) -> Result<(), DiffError> {
    trace!("Translated entry: {entry}");

    let Some(mut index) = find_overlap(flattened, &entry)? else {
        flattened.push(entry);
        return Ok(());
    };

    debug!("{entry} overlaps with {}", flattened[index]);
    flattened[index] = combine(&flattened[index], &entry)?;

    // A removal filling the gap between two removals touches both of them.
    loop {
        let merged = flattened.remove(index);
        let Some(other) = find_overlap(flattened, &merged)? else {
            flattened.insert(index, merged);
            return Ok(());
        };

        debug!("{merged} also overlaps with {}", flattened[other]);
        flattened[other] = combine(&flattened[other], &merged)?;
        index = other;
    }
}
