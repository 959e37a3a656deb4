use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The inserted values of an `addrange` operation.
///
/// Line-level diffs insert a list of lines, while character-level diffs
/// usually insert a string. Both shapes are kept as they were received so
/// that serialising a parsed diff gives back the same JSON.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ValueList<T>
where
    T: PartialEq + Clone + Debug,
{
    Items(Vec<T>),
    Text(String),
}

impl<T> ValueList<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Appends a single value to the end of the list.
    #[must_use]
    pub fn push(self, value: T) -> Self
    where
        T: From<char> + Into<String>,
    {
        match self {
            ValueList::Items(mut items) => {
                items.push(value);
                ValueList::Items(items)
            }
            ValueList::Text(mut text) => {
                text.push_str(&value.into());
                ValueList::Text(text)
            }
        }
    }

    /// Appends all values of `other` to the end of the list. The shape of
    /// `self` is kept: text appended to items is split into characters and
    /// items appended to text are concatenated.
    #[must_use]
    pub fn concat(self, other: ValueList<T>) -> Self
    where
        T: From<char> + Into<String>,
    {
        match (self, other) {
            (ValueList::Items(mut items), ValueList::Items(other_items)) => {
                items.extend(other_items);
                ValueList::Items(items)
            }
            (ValueList::Items(mut items), ValueList::Text(other_text)) => {
                items.extend(other_text.chars().map(T::from));
                ValueList::Items(items)
            }
            (ValueList::Text(mut text), ValueList::Text(other_text)) => {
                text.push_str(&other_text);
                ValueList::Text(text)
            }
            (ValueList::Text(mut text), ValueList::Items(other_items)) => {
                text.extend(other_items.into_iter().map(Into::<String>::into));
                ValueList::Text(text)
            }
        }
    }
}

impl<T> From<Vec<T>> for ValueList<T>
where
    T: PartialEq + Clone + Debug,
{
    fn from(items: Vec<T>) -> Self { ValueList::Items(items) }
}

impl<T> From<&str> for ValueList<T>
where
    T: PartialEq + Clone + Debug,
{
    fn from(text: &str) -> Self { ValueList::Text(text.to_owned()) }
}

impl<T> Display for ValueList<T>
where
    T: PartialEq + Clone + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueList::Items(items) => write!(f, "{items:?}"),
            ValueList::Text(text) => write!(f, "'{}'", text.replace('\n', "\\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_concat_keeps_shape_of_self() {
        let text = ValueList::<String>::from("ab").concat(vec!["c".to_owned()].into());
        assert_eq!(text, ValueList::Text("abc".to_owned()));

        let items = ValueList::from(vec!["a".to_owned()]).concat("bc".into());
        assert_eq!(
            items,
            ValueList::Items(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
        );
    }

    #[test]
    fn test_push() {
        assert_eq!(
            ValueList::<String>::from("x").push("y".to_owned()),
            ValueList::Text("xy".to_owned())
        );
        assert_eq!(
            ValueList::from(vec!['x']).push('y'),
            ValueList::Items(vec!['x', 'y'])
        );
    }
}
