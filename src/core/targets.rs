//! Target-address list loader.
//!
//! Bytecode checking is optional enrichment, so a missing or malformed
//! document degrades to an empty list rather than failing the run.

use std::path::Path;

use serde::Deserialize;

/// Shape of `inputs/targets.json`.
#[derive(Debug, Default, Deserialize)]
struct TargetsDoc {
    #[serde(default)]
    targets: Vec<String>,
}

/// Reads the target-address list. Any failure (missing file, unreadable
/// file, invalid JSON, `targets` not an array) yields an empty list.
pub fn load_targets(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "no targets file, skipping bytecode checks");
            return Vec::new();
        }
    };
    match serde_json::from_str::<TargetsDoc>(&content) {
        Ok(doc) => doc.targets,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed targets file, skipping bytecode checks");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    fn write_doc(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_empty_list() {
        assert!(load_targets(Path::new("inputs/nope/targets.json")).is_empty());
    }

    #[test_case("" ; "empty file")]
    #[test_case("not json at all" ; "not json")]
    #[test_case("[]" ; "top level array")]
    #[test_case("{}" ; "missing field")]
    #[test_case("{\"targets\": \"0xabc\"}" ; "field is a string")]
    #[test_case("{\"targets\": 7}" ; "field is a number")]
    #[test_case("{\"targets\": {\"a\": 1}}" ; "field is an object")]
    fn malformed_documents_yield_empty_list(body: &str) {
        let file = write_doc(body);
        assert!(load_targets(file.path()).is_empty());
    }

    #[test]
    fn well_formed_document_preserves_order_and_duplicates() {
        let file = write_doc(
            "{\"targets\": [\"0xaa\", \"not-an-address\", \"0xbb\", \"0xaa\"]}",
        );
        let targets = load_targets(file.path());
        assert_eq!(targets, vec!["0xaa", "not-an-address", "0xbb", "0xaa"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let file = write_doc("{\"targets\": [\"0xaa\"], \"note\": \"hi\"}");
        assert_eq!(load_targets(file.path()), vec!["0xaa"]);
    }
}
