//! The pluggable markdown engine that renders every block no processor claims.

use pulldown_cmark::{Options, Parser, html};

use super::options::MarkdownExtensions;

/// Renders plain markdown (paragraphs, headings, emphasis, lists, tables).
pub trait MarkdownEngine: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// [`MarkdownEngine`] backed by pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct CmarkEngine {
    options: Options,
}

impl CmarkEngine {
    pub fn new(extensions: &MarkdownExtensions) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, extensions.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, extensions.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, extensions.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, extensions.footnotes);
        Self { options }
    }
}

impl Default for CmarkEngine {
    fn default() -> Self {
        Self::new(&MarkdownExtensions::default())
    }
}

impl MarkdownEngine for CmarkEngine {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
