use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {source_name}: {source}")]
    Parse {
        source_name: String,
        source: serde_json::Error,
    },

    #[error("Unexpected structure in {source_name}: {source}")]
    Structure {
        source_name: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode merged document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify a decoding failure.
    ///
    /// Text that is not JSON at all is a `Parse` error; well-formed JSON that
    /// does not have the expected shape (missing `entries`, catalog that is
    /// not an array, ...) is a `Structure` error.
    pub fn decode(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        let source_name = source_name.into();
        match source.classify() {
            Category::Data => Self::Structure {
                source_name,
                source,
            },
            Category::Syntax | Category::Eof | Category::Io => Self::Parse {
                source_name,
                source,
            },
        }
    }

    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalizationDocument;

    fn decode_err(text: &str) -> Error {
        let err = serde_json::from_str::<LocalizationDocument>(text).unwrap_err();
        Error::decode("de.i18n.json", err)
    }

    #[test]
    fn missing_entries_is_structural() {
        let err = decode_err(r#"{"language": "de"}"#);
        assert!(err.is_structural());
        assert!(err.to_string().contains("de.i18n.json"));
        assert!(err.to_string().contains("entries"));
    }

    #[test]
    fn broken_json_is_parse_error() {
        assert!(matches!(decode_err(r#"{"entries": {"1": "#), Error::Parse { .. }));
        assert!(matches!(decode_err("not json"), Error::Parse { .. }));
    }
}
