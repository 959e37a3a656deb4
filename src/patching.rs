use log::debug;

use crate::{
    DiffEntry, DiffError,
    flattening::{join_lines, validate_sequence_op, validate_string_diff},
    utils::string_builder::StringBuilder,
};

/// Applies a flat, character-level diff to `text` and returns the patched
/// text.
///
/// The entries must be sorted by key and must not overlap, as returned by
/// `flatten_string_diff`. An insertion may share its key with the removal
/// right before it; it's then inserted in place of the removed characters.
///
/// ```
/// use flatten_diff::{DiffEntry, apply_flat_diff};
///
/// let diff: Vec<DiffEntry<String>> = vec![
///     DiffEntry::create_remove_range(0, 5),
///     DiffEntry::create_add_range(0, "Goodbye"),
/// ];
///
/// assert_eq!(apply_flat_diff("Hello world", &diff).unwrap(), "Goodbye world");
/// ```
///
/// # Errors
///
/// Fails if an entry doesn't fit into `text`, if it's a patch or if the
/// entries are out of order.
pub fn apply_flat_diff(text: &str, diff: &[DiffEntry<String>]) -> Result<String, DiffError> {
    let length = text.chars().count();
    let mut builder = StringBuilder::new(text);
    let mut last_removal: Option<usize> = None;

    for entry in diff {
        if let DiffEntry::Patch { key, .. } = entry {
            return Err(DiffError::NestedPatch { key: *key });
        }

        validate_sequence_op(length, entry)?;
        let key = entry.key();
        ensure_in_order(entry, builder.position(), last_removal)?;

        if key > builder.position() {
            builder.retain(key - builder.position());
            last_removal = None;
        }

        match entry {
            DiffEntry::Add { value, .. } => builder.insert(value),
            DiffEntry::AddRange { valuelist, .. } => builder.insert(&join_lines(valuelist)),
            DiffEntry::RemoveRange { length, .. } => {
                builder.delete(*length);
                last_removal = Some(key);
            }
            DiffEntry::Patch { .. } => unreachable!("Patches are rejected above"),
        }
    }

    Ok(builder.build())
}

/// Applies a line-level diff to `lines` and returns the joined, patched
/// lines. Patched lines have their nested diff applied with
/// `apply_flat_diff`.
///
/// Applying a line-level diff gives the same result as applying its
/// flattened version to the joined lines.
///
/// # Errors
///
/// Fails if an entry is invalid for `lines` or if the entries are out of
/// order.
pub fn apply_line_diff<L>(lines: &[L], diff: &[DiffEntry<String>]) -> Result<String, DiffError>
where
    L: AsRef<str>,
{
    let mut result = String::new();
    let mut position = 0;
    let mut last_removal: Option<usize> = None;

    for entry in diff {
        validate_string_diff(lines, entry)?;
        let key = entry.key();
        ensure_in_order(entry, position, last_removal)?;

        if key > position {
            for line in &lines[position..key] {
                result.push_str(line.as_ref());
            }
            position = key;
            last_removal = None;
        }

        match entry {
            DiffEntry::Add { value, .. } => result.push_str(value),
            DiffEntry::AddRange { valuelist, .. } => result.push_str(&join_lines(valuelist)),
            DiffEntry::RemoveRange { length, .. } => {
                position += length;
                last_removal = Some(key);
            }
            DiffEntry::Patch { diff, .. } => {
                result.push_str(&apply_flat_diff(lines[key].as_ref(), diff)?);
                position += 1;
            }
        }
    }

    for line in &lines[position..] {
        result.push_str(line.as_ref());
    }

    Ok(result)
}

/// Entries must not start before the already processed position, except for
/// insertions right at the start of the previous removal.
fn ensure_in_order(
    entry: &DiffEntry<String>,
    position: usize,
    last_removal: Option<usize>,
) -> Result<(), DiffError> {
    let key = entry.key();
    let replaces_removal = entry.kind().is_insertion() && last_removal == Some(key);

    if key < position && !replaces_removal {
        debug!("{entry} is before position {position}");
        return Err(DiffError::UnsortedOperations { key, position });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_apply_flat_diff() {
        let diff = [
            DiffEntry::create_add(0, ">".to_owned()),
            DiffEntry::create_remove_range(3, 4),
            DiffEntry::create_add_range(9, vec!["!".to_owned(), "?".to_owned()]),
        ];

        assert_eq!(apply_flat_diff("ab\n123\ny\n", &diff), Ok(">ab\ny\n!?".to_owned()));
    }

    #[test]
    fn test_apply_unicode() {
        let diff = [
            DiffEntry::create_remove_range(1, 1),
            DiffEntry::create_add_range(2, "ö"),
        ];

        assert_eq!(apply_flat_diff("héllo", &diff), Ok("höllo".to_owned()));
    }

    #[test]
    fn test_unsorted_flat_diff() {
        let diff = [
            DiffEntry::create_remove_range(2, 2),
            DiffEntry::create_add_range(3, "x"),
        ];

        assert_eq!(
            apply_flat_diff("abcdef", &diff),
            Err(DiffError::UnsortedOperations {
                key: 3,
                position: 4
            })
        );
    }

    #[test]
    fn test_patches_cannot_be_applied_to_text() {
        assert_eq!(
            apply_flat_diff("abc", &[DiffEntry::create_patch(0, vec![])]),
            Err(DiffError::NestedPatch { key: 0 })
        );
    }

    #[test]
    fn test_apply_line_diff() {
        let lines = ["ab\n", "123\n", "y\n", "\t\nfoo"];
        let diff = [
            DiffEntry::create_add_range(0, vec!["start\n".to_owned()]),
            DiffEntry::create_patch(1, vec![DiffEntry::create_remove_range(0, 1)]),
            DiffEntry::create_remove_range(2, 1),
            DiffEntry::create_add(2, "why\n".to_owned()),
        ];

        assert_eq!(
            apply_line_diff(&lines, &diff),
            Ok("start\nab\n23\nwhy\n\t\nfoo".to_owned())
        );
    }
}
