pub mod build;
pub mod io;
pub mod markup;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use build::{BuildError, BuildSummary, ProcessedFile, Route, Site, process_file};
pub use io::*;
pub use markup::{AttributeSet, Element, MarkupTree, Node};
pub use models::SourceFile;
pub use parsing::{
    Diagnostic, NestingMode, Outcome, ParseError, ParseOptions, ParsedDocument, Pipeline,
    render_markdown,
};
