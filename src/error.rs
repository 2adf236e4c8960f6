use std::io;
use std::path::PathBuf;

/// Fatal outcomes of a pipeline run. Malformed lines never surface here.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("report limit must be a positive integer, got {0}")]
    InvalidLimit(i64),

    #[error("failed to read log source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log line pattern")]
    Pattern(#[from] regex::Error),
}

impl AnalyzeError {
    pub(crate) fn source_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }
}
