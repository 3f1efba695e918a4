use std::path::PathBuf;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::vectorizer::corpus::Document;

/// Where the text of a document comes from
///
/// Deserializes from a table holding an optional `label` and exactly one of
/// `text` or `path`. Any other key is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentSource {
    /// text given directly
    Inline {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        text: String,
    },
    /// text read from a file
    File {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        path: PathBuf,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocumentSource {
    label: Option<String>,
    text: Option<String>,
    path: Option<PathBuf>,
}

impl<'de> Deserialize<'de> for DocumentSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawDocumentSource { label, text, path } = RawDocumentSource::deserialize(deserializer)?;
        match (text, path) {
            (Some(text), None) => Ok(DocumentSource::Inline { label, text }),
            (None, Some(path)) => Ok(DocumentSource::File { label, path }),
            (Some(_), Some(_)) => Err(de::Error::custom("document source has both `text` and `path`")),
            (None, None) => Err(de::Error::custom("document source needs `text` or `path`")),
        }
    }
}

impl DocumentSource {
    pub fn inline(text: impl Into<String>) -> Self {
        DocumentSource::Inline {
            label: None,
            text: text.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        DocumentSource::File {
            label: None,
            path: path.into(),
        }
    }

    /// Label for reports
    /// explicit label, then file name, then `Document {index + 1}`
    pub fn label(&self, index: usize) -> String {
        match self {
            DocumentSource::Inline { label: Some(label), .. }
            | DocumentSource::File { label: Some(label), .. } => label.clone(),
            DocumentSource::File { path, .. } => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| Document::default_label(index)),
            DocumentSource::Inline { .. } => Document::default_label(index),
        }
    }

    /// Fetch the text of this source
    ///
    /// A source that cannot be read does not fail the run: its text is
    /// replaced with a placeholder message, which is then scored like any
    /// other document.
    pub fn load(&self, index: usize) -> Document {
        let label = self.label(index);
        let text = match self {
            DocumentSource::Inline { text, .. } => text.clone(),
            DocumentSource::File { path, .. } => match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "document unavailable, using placeholder");
                    placeholder_text(&label)
                }
            },
        };
        Document { label, text }
    }
}

/// Text substituted for a document that could not be retrieved
pub fn placeholder_text(label: &str) -> String {
    format!("Error: Could not retrieve document '{}'", label)
}

/// Load every source in order
pub fn load_all(sources: &[DocumentSource]) -> Vec<Document> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| source.load(i))
        .collect()
}
