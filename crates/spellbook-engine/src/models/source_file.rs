use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};

/// A markdown document addressed by its path below the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    relative_url: String,
}

impl SourceFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let relative_url = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".md").unwrap_or(path_str).to_string()
        };

        Self {
            relative_path,
            relative_url,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// `None` when `path` is not below `root`.
    pub fn from_absolute(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        RelativePathBuf::from_path(relative).ok().map(Self::new)
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without `.md`, always `/`-separated
    pub fn relative_url(&self) -> &str {
        &self.relative_url
    }

    /// Where the rendered template lives below the template directory
    pub fn template_path(&self) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.html", self.relative_url))
    }
}

impl From<RelativePathBuf> for SourceFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
