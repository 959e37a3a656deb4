/// Calculate the cumulative sum of character counts for a list of strings,
/// starting with a leading 0. The `i`-th element is the character offset of
/// the `i`-th string in the concatenation of all strings, and the last element
/// is the length of the concatenation.
///
/// ## Example
///
/// ```not_rust
/// ["ab\n", "123\n", "y\n", "\t\nfoo"] -> [0, 3, 7, 9, 15]
/// ```
pub fn accumulate_lengths<L>(lines: &[L]) -> Vec<usize>
where
    L: AsRef<str>,
{
    let mut result = Vec::with_capacity(lines.len() + 1);
    result.push(0);

    let mut total = 0;
    for line in lines {
        total += line.as_ref().chars().count();
        result.push(total);
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_accumulate_lengths() {
        assert_eq!(
            accumulate_lengths(&["ab\n", "123\n", "y\n", "\t\nfoo"]),
            vec![0, 3, 7, 9, 15]
        );
        assert_eq!(accumulate_lengths::<&str>(&[]), vec![0]);
        assert_eq!(accumulate_lengths(&["", "é", ""]), vec![0, 0, 1, 1]);
    }
}
