use std::str::Chars;

/// A helper for building a string in-order based on an original string and a
/// series of insertions, deletions, and copies applied to it. It is safe to use
/// with UTF-8 strings as all operations are based on character indices. The
/// methods must be called in-order.
#[derive(Debug, Clone)]
pub struct StringBuilder<'a> {
    original: Chars<'a>,
    position: usize,
    buffer: String,
}

impl<'a> StringBuilder<'a> {
    pub fn new(original: &'a str) -> Self {
        StringBuilder {
            original: original.chars(),
            position: 0,
            buffer: String::with_capacity(original.len()),
        }
    }

    /// Number of characters of the original string consumed so far.
    pub fn position(&self) -> usize { self.position }

    /// Insert a string at the end of the built buffer.
    pub fn insert(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Skip copying `length` characters from the original string to the built
    /// buffer.
    pub fn delete(&mut self, length: usize) {
        self.position += self.original.by_ref().take(length).count();
    }

    /// Copy `length` characters from the original string to the built buffer.
    pub fn retain(&mut self, length: usize) {
        let before = self.buffer.len();
        self.buffer.extend(self.original.by_ref().take(length));
        self.position += self.buffer[before..].chars().count();
    }

    /// Copies the rest of the original string and returns the built string.
    pub fn build(mut self) -> String {
        self.buffer.extend(self.original);
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_string_builder() {
        let mut builder = StringBuilder::new("aaa bbb ccc");

        builder.insert("ddd");
        builder.delete(3);
        builder.retain(8);
        builder.insert(" eee");

        assert_eq!(builder.position(), 11);
        assert_eq!(builder.build(), "ddd bbb ccc eee");

        let mut builder = StringBuilder::new("abcde");

        builder.retain(1);
        builder.delete(3);

        assert_eq!(builder.position(), 4);
        assert_eq!(builder.build(), "ae");
    }

    #[test]
    fn test_unicode_characters() {
        let mut builder = StringBuilder::new("こんにちは");

        builder.retain(3);
        builder.insert("世界, ");
        builder.delete(1);

        assert_eq!(builder.position(), 4);
        assert_eq!(builder.build(), "こんに世界, は");
    }

    #[test]
    fn test_operations_past_the_end_are_clamped() {
        let mut builder = StringBuilder::new("Hello");

        builder.delete(3);
        builder.retain(10);

        assert_eq!(builder.position(), 5);
        assert_eq!(builder.build(), "lo");
    }
}
