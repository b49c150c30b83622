//! Parsing: raw document text in, [`MarkupTree`](crate::markup::MarkupTree) out.
//!
//! Text is split into blocks; each block is offered to the block processors
//! (code fences, then tags). Whatever they leave unclaimed is rendered by the
//! markdown engine. Tag bodies are parsed recursively by the same pipeline.

pub mod attributes;
pub mod blocks;
pub mod error;
pub mod markers;
pub mod native;
pub mod options;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use attributes::parse_attributes;
pub use error::{Diagnostic, Outcome, ParseError};
pub use native::{CmarkEngine, MarkdownEngine};
pub use options::{MarkdownExtensions, NestingMode, ParseOptions};
pub use pipeline::{ParseContext, ParsedDocument, Pipeline, PipelineBuilder, render_markdown};
