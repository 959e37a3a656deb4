use std::fmt::Display;

/// The tag of a `DiffEntry` without any of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    AddRange,
    RemoveRange,
    Patch,
}

impl OperationKind {
    /// Single and range insertions both insert before the item at their key,
    /// so they are interchangeable when merging.
    #[must_use]
    pub fn is_insertion(self) -> bool { matches!(self, OperationKind::Add | OperationKind::AddRange) }

    /// The value of the `op` field in the serialised form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::AddRange => "addrange",
            OperationKind::RemoveRange => "removerange",
            OperationKind::Patch => "patch",
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
