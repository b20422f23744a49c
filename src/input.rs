//! Loading of the JSON input document.
//!
//! The document must have an object at its root; anything else is rejected
//! here so the flattener only ever sees objects.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Error type for reading and parsing the input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input could not be read.
    #[error("Failed to read input '{}': {source}", path.display())]
    Read {
        /// Path that was read (`-` for standard input)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON input: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON root is not an object.
    #[error("Input root must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the root value
        found: &'static str,
    },
}

/// Reads and parses the document at `path`.
///
/// A path of `-` reads from standard input.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, or
/// does not have an object at its root.
pub fn load_document(path: &Path) -> Result<Map<String, Value>, InputError> {
    let read_error = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };

    let text = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read input document");

    parse_document(&text)
}

/// Parses a JSON document that must have an object at its root.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or its root is not an object.
pub fn parse_document(text: &str) -> Result<Map<String, Value>, InputError> {
    match serde_json::from_str(text)? {
        Value::Object(object) => Ok(object),
        other => Err(InputError::NotAnObject {
            found: type_name(&other),
        }),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    mod parse {
        use super::*;

        #[test]
        fn object_root_is_accepted() {
            let object = parse_document(r#"{"a": {"b": 1}}"#).unwrap();

            assert_eq!(object.len(), 1);
            assert!(object["a"].is_object());
        }

        #[test]
        fn empty_object_is_accepted() {
            let object = parse_document("{}").unwrap();

            assert!(object.is_empty());
        }

        #[test]
        fn key_order_follows_source() {
            let object = parse_document(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();

            let keys: Vec<_> = object.keys().map(String::as_str).collect();
            assert_eq!(keys, ["b", "a", "c"]);
        }

        #[test]
        fn array_root_is_rejected() {
            let result = parse_document("[1, 2]");

            assert!(matches!(
                result,
                Err(InputError::NotAnObject { found: "array" })
            ));
        }

        #[test]
        fn scalar_roots_are_rejected_with_type_name() {
            for (text, expected) in [
                ("null", "null"),
                ("true", "boolean"),
                ("3", "number"),
                (r#""s""#, "string"),
            ] {
                match parse_document(text) {
                    Err(InputError::NotAnObject { found }) => assert_eq!(found, expected),
                    other => panic!("Expected NotAnObject for {text}, got {other:?}"),
                }
            }
        }

        #[test]
        fn malformed_json_is_parse_error() {
            let result = parse_document(r#"{"a": }"#);

            assert!(matches!(result, Err(InputError::Parse(_))));
        }

        #[test]
        fn empty_text_is_parse_error() {
            assert!(matches!(parse_document(""), Err(InputError::Parse(_))));
        }
    }

    mod load {
        use super::*;

        #[test]
        fn reads_document_from_file() {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, r#"{{"user": {{"name": "Alice"}}}}"#).unwrap();

            let object = load_document(file.path()).unwrap();

            assert_eq!(object["user"]["name"], "Alice");
        }

        #[test]
        fn missing_file_is_read_error_with_path() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("send-json.json");

            let err = load_document(&path).unwrap_err();

            assert!(matches!(err, InputError::Read { .. }));
            assert!(err.to_string().contains("send-json.json"));
        }

        #[test]
        fn invalid_file_content_is_parse_error() {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "not json").unwrap();

            let result = load_document(file.path());

            assert!(matches!(result, Err(InputError::Parse(_))));
        }
    }
}
