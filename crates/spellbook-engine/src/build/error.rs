use std::path::PathBuf;

use crate::io::IoError;
use crate::parsing::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a markdown file: {0}")]
    NotMarkdown(PathBuf),
    #[error("File encoding error: {0} is not valid UTF-8")]
    Encoding(PathBuf),
    #[error("Markdown parsing error in {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error(transparent)]
    Io(IoError),
    #[error("No markdown files found in {0}")]
    NoMarkdownFiles(PathBuf),
    #[error("Content app directory not found: {0}")]
    ContentAppNotFound(PathBuf),
}

impl From<IoError> for BuildError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::NotFound(path) => Self::NotFound(path),
            other => Self::Io(other),
        }
    }
}
