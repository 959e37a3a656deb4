#![cfg(feature = "serde")]

mod example_diff;

use std::{fs, path::Path};

use example_diff::ExampleDiff;
use serde::Deserialize;

#[test]
fn test_flatten_examples() {
    let documents = get_all_examples();
    assert!(!documents.is_empty(), "No examples found");

    for doc in &documents {
        doc.assert_flattens();
    }
}

fn get_all_examples() -> Vec<ExampleDiff> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc = ExampleDiff::deserialize(document).expect("Failed to deserialize example");
                documents.push(doc);
            }
        }
    }

    documents
}
