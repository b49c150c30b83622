use std::path::Path;

use crate::io::{self, is_markdown};
use crate::models::SourceFile;
use crate::parsing::{Diagnostic, Pipeline};

use super::error::BuildError;

/// One rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub source: SourceFile,
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read, decode and render the document at `file` below `root`.
pub fn process_file(
    root: &Path,
    file: &SourceFile,
    pipeline: &Pipeline,
) -> Result<ProcessedFile, BuildError> {
    let path = file.relative_path().to_path(root);
    if !path.is_file() {
        return Err(BuildError::NotFound(path));
    }
    if !is_markdown(&path) {
        return Err(BuildError::NotMarkdown(path));
    }

    let bytes = io::read_bytes(file.relative_path(), root)?;
    let text = String::from_utf8(bytes).map_err(|_| BuildError::Encoding(path.clone()))?;

    let doc = pipeline
        .parse(&text)
        .map_err(|source| BuildError::Parse { path, source })?;

    Ok(ProcessedFile {
        source: file.clone(),
        html: doc.to_html(),
        diagnostics: doc.diagnostics,
    })
}
