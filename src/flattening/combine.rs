use std::fmt::Debug;

use log::debug;

use crate::{DiffEntry, DiffError, ValueList};

/// Combines two entries into a new one that does the same as applying both.
///
/// - Insertions are combined into a range insertion at the key of `a` that
///   inserts the values of `a` followed by the values of `b`.
/// - Adjacent removals are combined into a single removal spanning both.
///
/// Both entries must come from the same source. Any other pairing is an
/// `IncompatibleOperationKinds` error; `find_overlap` only pairs up entries
/// that can be combined.
pub fn combine<T>(a: &DiffEntry<T>, b: &DiffEntry<T>) -> Result<DiffEntry<T>, DiffError>
where
    T: PartialEq + Clone + Debug + From<char> + Into<String>,
{
    let combined = match (a, b) {
        (
            DiffEntry::RemoveRange {
                key,
                length,
                source,
            },
            DiffEntry::RemoveRange {
                key: other_key,
                length: other_length,
                ..
            },
        ) => {
            ensure_same_source(a, b)?;

            DiffEntry::RemoveRange {
                key: *key.min(other_key),
                length: length + other_length,
                source: source.clone(),
            }
        }

        _ => {
            let valuelist = match (inserted_values(a), b) {
                (Some(values), DiffEntry::Add { value, .. }) => values.push(value.clone()),
                (Some(values), DiffEntry::AddRange { valuelist, .. }) => {
                    values.concat(valuelist.clone())
                }
                _ => {
                    return Err(DiffError::IncompatibleOperationKinds {
                        existing: a.kind(),
                        candidate: b.kind(),
                    });
                }
            };
            ensure_same_source(a, b)?;

            DiffEntry::AddRange {
                key: a.key(),
                valuelist,
                source: a.source().cloned(),
            }
        }
    };

    debug!("Combined {a} and {b} into {combined}");

    Ok(combined)
}

/// The values inserted by `entry`, with a single value wrapped into a list.
fn inserted_values<T>(entry: &DiffEntry<T>) -> Option<ValueList<T>>
where
    T: PartialEq + Clone + Debug,
{
    match entry {
        DiffEntry::Add { value, .. } => Some(ValueList::Items(vec![value.clone()])),
        DiffEntry::AddRange { valuelist, .. } => Some(valuelist.clone()),
        DiffEntry::RemoveRange { .. } | DiffEntry::Patch { .. } => None,
    }
}

fn ensure_same_source<T>(a: &DiffEntry<T>, b: &DiffEntry<T>) -> Result<(), DiffError>
where
    T: PartialEq + Clone + Debug,
{
    if a.source() == b.source() {
        Ok(())
    } else {
        Err(DiffError::ProvenanceMismatch {
            key: b.key(),
            left: a.source().cloned(),
            right: b.source().cloned(),
        })
    }
}
