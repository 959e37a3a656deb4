use flatten_diff::{DiffEntry, apply_flat_diff, apply_line_diff, flatten_text_diff, split_lines};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// `ExampleDiff` is a test case for flattening: a base text, a line-level
/// diff of it, and either the expected outcome or the expected error.
///
/// `flattened` is optional since the patched text is already checked with
/// both the line-level and the flattened diff.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExampleDiff {
    name: String,
    base: String,
    diff: Vec<DiffEntry<String>>,

    #[serde(default)]
    flattened: Option<Vec<DiffEntry<String>>>,

    #[serde(default)]
    expected: Option<String>,

    #[serde(default)]
    error: Option<String>,
}

impl ExampleDiff {
    /// Asserts that flattening the diff gives the expected result, and that
    /// the flattened diff patches the base the same way as the line-level one.
    ///
    /// # Panics
    ///
    /// If any of the results differ from the expected ones.
    pub fn assert_flattens(&self) {
        let result = flatten_text_diff(&self.base, &self.diff);

        if let Some(error) = &self.error {
            let actual = result.expect_err(&format!("`{}` should fail", self.name));
            assert_eq!(&actual.to_string(), error, "{}", self.name);
            return;
        }

        let flattened = result.unwrap_or_else(|error| panic!("`{}` failed: {error}", self.name));

        if let Some(expected_flattened) = &self.flattened {
            assert_eq!(&flattened, expected_flattened, "{}", self.name);
        }

        let expected = self
            .expected
            .as_ref()
            .unwrap_or_else(|| panic!("`{}` has neither `expected` nor `error`", self.name));

        assert_eq!(
            &apply_flat_diff(&self.base, &flattened).unwrap(),
            expected,
            "{}",
            self.name
        );

        // Line-level diffs can only be applied in order.
        if self.diff.is_sorted_by_key(DiffEntry::key) {
            assert_eq!(
                &apply_line_diff(&split_lines(&self.base), &self.diff).unwrap(),
                expected,
                "{}",
                self.name
            );
        }
    }
}
