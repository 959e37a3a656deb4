mod operation_kind;
mod source;
mod value_list;

use core::fmt::{Debug, Display};
use std::ops::Range;

pub use operation_kind::OperationKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use source::Source;
pub use value_list::ValueList;

use crate::DiffError;

/// A single edit of a sequence, addressed by the `key` of the item it applies
/// to.
///
/// Line-level diffs of a string may contain `Patch` entries carrying the
/// character-level diff of a single line. Flattened diffs never do.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "lowercase"))]
#[derive(Clone, PartialEq)]
pub enum DiffEntry<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Insert `value` before the item at `key`.
    Add {
        key: usize,
        value: T,

        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        source: Option<Source>,
    },

    /// Insert all of `valuelist` before the item at `key`.
    AddRange {
        key: usize,
        valuelist: ValueList<T>,

        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        source: Option<Source>,
    },

    /// Remove `length` items starting with the item at `key`.
    RemoveRange {
        key: usize,
        length: usize,

        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        source: Option<Source>,
    },

    /// Apply the nested `diff` to the item at `key`.
    Patch {
        key: usize,
        diff: Vec<DiffEntry<T>>,

        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        source: Option<Source>,
    },
}

impl<T> DiffEntry<T>
where
    T: PartialEq + Clone + Debug,
{
    #[must_use]
    pub fn create_add(key: usize, value: T) -> Self {
        DiffEntry::Add {
            key,
            value,
            source: None,
        }
    }

    #[must_use]
    pub fn create_add_range(key: usize, valuelist: impl Into<ValueList<T>>) -> Self {
        DiffEntry::AddRange {
            key,
            valuelist: valuelist.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn create_remove_range(key: usize, length: usize) -> Self {
        DiffEntry::RemoveRange {
            key,
            length,
            source: None,
        }
    }

    #[must_use]
    pub fn create_patch(key: usize, diff: Vec<DiffEntry<T>>) -> Self {
        DiffEntry::Patch {
            key,
            diff,
            source: None,
        }
    }

    /// Returns the index of the item that the entry applies to.
    #[must_use]
    pub fn key(&self) -> usize {
        match self {
            DiffEntry::Add { key, .. }
            | DiffEntry::AddRange { key, .. }
            | DiffEntry::RemoveRange { key, .. }
            | DiffEntry::Patch { key, .. } => *key,
        }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            DiffEntry::Add { .. } => OperationKind::Add,
            DiffEntry::AddRange { .. } => OperationKind::AddRange,
            DiffEntry::RemoveRange { .. } => OperationKind::RemoveRange,
            DiffEntry::Patch { .. } => OperationKind::Patch,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&Source> {
        match self {
            DiffEntry::Add { source, .. }
            | DiffEntry::AddRange { source, .. }
            | DiffEntry::RemoveRange { source, .. }
            | DiffEntry::Patch { source, .. } => source.as_ref(),
        }
    }

    /// The nested diff of a patch entry.
    #[must_use]
    pub fn nested(&self) -> Option<&[DiffEntry<T>]> {
        match self {
            DiffEntry::Patch { diff, .. } => Some(diff),
            _ => None,
        }
    }

    /// The range of keys removed by a `RemoveRange` entry.
    ///
    /// # Errors
    ///
    /// Removals whose end doesn't fit into `usize` can't be part of any
    /// sequence and are `OutOfBounds`.
    pub fn removed_range(&self) -> Result<Option<Range<usize>>, DiffError> {
        let DiffEntry::RemoveRange { key, length, .. } = self else {
            return Ok(None);
        };

        key.checked_add(*length)
            .map(|end| Some(*key..end))
            .ok_or(DiffError::OutOfBounds {
                kind: OperationKind::RemoveRange,
                key: *key,
                length: *length,
                available: usize::MAX,
            })
    }

    /// Creates a new entry with the same type and payload but with the given
    /// key.
    #[must_use]
    pub fn with_key(self, key: usize) -> Self {
        match self {
            DiffEntry::Add { value, source, .. } => DiffEntry::Add { key, value, source },
            DiffEntry::AddRange {
                valuelist, source, ..
            } => DiffEntry::AddRange {
                key,
                valuelist,
                source,
            },
            DiffEntry::RemoveRange { length, source, .. } => DiffEntry::RemoveRange {
                key,
                length,
                source,
            },
            DiffEntry::Patch { diff, source, .. } => DiffEntry::Patch { key, diff, source },
        }
    }

    /// Creates a new entry with the key moved forward by `offset`.
    #[must_use]
    pub fn with_shifted_key(self, offset: usize) -> Self {
        let key = self.key() + offset;
        self.with_key(key)
    }

    #[must_use]
    pub fn with_source(mut self, new_source: Option<Source>) -> Self {
        match &mut self {
            DiffEntry::Add { source, .. }
            | DiffEntry::AddRange { source, .. }
            | DiffEntry::RemoveRange { source, .. }
            | DiffEntry::Patch { source, .. } => *source = new_source,
        }

        self
    }
}

/// Search the list of diffs for an entry with the given key.
///
/// Returns the nested diff of the first entry found with the key, or `None`
/// if there is no such entry or it isn't a patch.
#[must_use]
pub fn get_diff_key<T>(diff: &[DiffEntry<T>], key: usize) -> Option<&[DiffEntry<T>]>
where
    T: PartialEq + Clone + Debug,
{
    diff.iter()
        .find(|entry| entry.key() == key)
        .and_then(DiffEntry::nested)
}

impl<T> Display for DiffEntry<T>
where
    T: PartialEq + Clone + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffEntry::Add { key, value, .. } => write!(f, "<add {value:?} at {key}")?,
            DiffEntry::AddRange { key, valuelist, .. } => {
                write!(f, "<addrange {valuelist} at {key}")?;
            }
            DiffEntry::RemoveRange { key, length, .. } => {
                write!(f, "<removerange {length} at {key}")?;
            }
            DiffEntry::Patch { key, diff, .. } => {
                write!(f, "<patch at {key}: [")?;
                for (i, entry) in diff.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                write!(f, "]")?;
            }
        }

        if let Some(source) = self.source() {
            write!(f, " from {source}")?;
        }

        write!(f, ">")
    }
}

impl<T> Debug for DiffEntry<T>
where
    T: PartialEq + Clone + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{self}") }
}
