use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::io::{self, scan_markdown_files};
use crate::models::SourceFile;
use crate::parsing::{Diagnostic, Pipeline};

use super::error::BuildError;
use super::process::process_file;
use super::routes::{Route, render_urls, render_views};
use super::template::wrap_in_base_template;

/// Where markdown is read from and where the Django content app lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub source_dir: PathBuf,
    pub content_app: String,
    /// Directory of the content app; `urls.py` and `views.py` land here.
    pub content_app_dir: PathBuf,
    pub base_template: Option<String>,
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub routes: Vec<Route>,
    /// Documents that ended inside an open tag, with the tag names.
    pub unterminated: Vec<(SourceFile, Vec<String>)>,
}

impl Site {
    /// Templates go to `<content_app_dir>/templates/<content_app>/spellbook_md/`.
    pub fn template_dir(&self) -> PathBuf {
        self.content_app_dir
            .join("templates")
            .join(&self.content_app)
            .join("spellbook_md")
    }

    pub fn build(&self, pipeline: &Pipeline) -> Result<BuildSummary, BuildError> {
        let paths = scan_markdown_files(&self.source_dir)?;
        if paths.is_empty() {
            return Err(BuildError::NoMarkdownFiles(self.source_dir.clone()));
        }
        if !self.content_app_dir.is_dir() {
            return Err(BuildError::ContentAppNotFound(self.content_app_dir.clone()));
        }

        let template_dir = self.template_dir();
        let mut summary = BuildSummary::default();

        for path in &paths {
            let Some(file) = SourceFile::from_absolute(&self.source_dir, path) else {
                continue;
            };
            log::info!("Processing {}", file.relative_path());
            let processed = process_file(&self.source_dir, &file, pipeline)?;

            for diagnostic in &processed.diagnostics {
                log::warn!("{}: {diagnostic}", file.relative_path());
            }
            let unterminated = unterminated_tags(&processed.diagnostics);
            if !unterminated.is_empty() {
                summary.unterminated.push((file.clone(), unterminated));
            }

            let html = wrap_in_base_template(&processed.html, self.base_template.as_deref());
            io::write_file(&file.template_path(), &template_dir, &html)?;
            summary.routes.push(Route::new(&self.content_app, &file));
        }

        write_module(&self.content_app_dir, "urls.py", &render_urls(&summary.routes))?;
        write_module(&self.content_app_dir, "views.py", &render_views(&summary.routes))?;
        log::info!(
            "Processed {} markdown files and generated URLs and views",
            summary.routes.len()
        );
        Ok(summary)
    }
}

fn write_module(dir: &Path, name: &str, content: &str) -> Result<(), BuildError> {
    io::write_file(&RelativePathBuf::from(name), dir, content)?;
    Ok(())
}

fn unterminated_tags(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|d| match d {
            Diagnostic::UnterminatedTag { tag } => tag.clone(),
        })
        .collect()
}
