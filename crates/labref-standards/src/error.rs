#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference table {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid reference table: {message}")]
    InvalidSchema { message: String },

    #[error("duplicate analyte name or alias {name:?} (already used by {existing:?})")]
    DuplicateAnalyte { name: String, existing: String },

    #[error("analyte {analyte:?} must define exactly one of `range` or `buckets`")]
    AmbiguousRange { analyte: String },

    #[error("analyte {analyte:?} is missing reference ranges for buckets: {buckets}")]
    MissingBuckets { analyte: String, buckets: String },

    #[error("analyte {analyte:?} uses unknown demographic bucket {label:?}")]
    UnknownBucket { analyte: String, label: String },

    #[error("analyte {analyte:?} has an invalid range: {message}")]
    InvalidRange { analyte: String, message: String },

    #[error("duplicate panel {name:?}")]
    DuplicatePanel { name: String },

    #[error("panel {name:?} lists no analytes")]
    EmptyPanel { name: String },

    #[error("panel {panel:?} references unknown analyte {analyte:?}")]
    UnknownPanelAnalyte { panel: String, analyte: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
