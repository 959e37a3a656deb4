/// Splits text into lines, keeping the line endings attached to the line they
/// terminate. `\n`, `\r\n` and a lone `\r` all end a line. Joining the result
/// gives back the original text.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello\n", "World!"]
/// "Line 1\r\nLine 2\n" -> ["Line 1\r\n", "Line 2\n"]
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            result.push(&text[line_start..=i]);
            line_start = i + 1;
        } else if c == '\r' {
            if chars.peek() == Some(&(i + 1, '\n')) {
                chars.next(); // consume \n
                result.push(&text[line_start..i + 2]);
                line_start = i + 2;
            } else {
                result.push(&text[line_start..=i]);
                line_start = i + 1;
            }
        }
    }

    // Add final line if any
    if line_start < text.len() {
        result.push(&text[line_start..]);
    }

    result
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_with_snapshots() {
        assert_debug_snapshot!(split_lines(""), @"[]");

        assert_debug_snapshot!(split_lines("Hello"), @r#"
        [
            "Hello",
        ]
        "#);

        assert_debug_snapshot!(split_lines("Hello\nWorld\n"), @r#"
        [
            "Hello\n",
            "World\n",
        ]
        "#);

        assert_debug_snapshot!(split_lines("Line 1\r\nLine 2\rLine 3"), @r#"
        [
            "Line 1\r\n",
            "Line 2\r",
            "Line 3",
        ]
        "#);

        assert_debug_snapshot!(split_lines("\n\n"), @r#"
        [
            "\n",
            "\n",
        ]
        "#);
    }

    #[test_case("")]
    #[test_case("a")]
    #[test_case("ab\n123\ny\n\t\nfoo")]
    #[test_case("\r\n\r\r\n\n")]
    #[test_case("űnicode\nlínes\n")]
    fn test_joining_gives_back_the_text(text: &str) {
        assert_eq!(split_lines(text).concat(), text);
    }
}
