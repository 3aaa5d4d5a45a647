use std::path::PathBuf;

/// The only failure the search core reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PalindromeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failures of the outer loaders (word list files and option files).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
