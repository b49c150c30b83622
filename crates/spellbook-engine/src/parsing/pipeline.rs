use crate::markup::{Element, MarkupTree};

use super::blocks::kinds::{CodeFenceProcessor, TagProcessor};
use super::blocks::{Block, BlockProcessor, BlockQueue};
use super::error::{Diagnostic, Outcome, ParseError};
use super::native::{CmarkEngine, MarkdownEngine};
use super::options::ParseOptions;

struct Registered {
    priority: u16,
    processor: Box<dyn BlockProcessor>,
}

/// Ordered set of block processors in front of a markdown engine.
///
/// Built once and then shared; every [`parse`](Pipeline::parse) call owns its
/// own queue, tree and diagnostics, so a pipeline can serve many documents
/// from many threads.
pub struct Pipeline {
    processors: Vec<Registered>,
    engine: Box<dyn MarkdownEngine>,
    options: ParseOptions,
}

impl Pipeline {
    /// Code fences and tags over pulldown-cmark.
    pub fn new(options: ParseOptions) -> Self {
        Self::builder(options).with_default_processors().build()
    }

    /// An empty builder: no processors, default engine.
    pub fn builder(options: ParseOptions) -> PipelineBuilder {
        PipelineBuilder {
            processors: Vec::new(),
            engine: None,
            options,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Processor names in the order blocks are offered to them.
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|r| r.processor.name()).collect()
    }

    pub fn parse(&self, text: &str) -> Result<ParsedDocument, ParseError> {
        let mut cx = ParseContext {
            pipeline: self,
            diagnostics: Vec::new(),
            depth: 0,
        };
        let mut tree = MarkupTree::new();
        let mut blocks = BlockQueue::from_text(text);
        cx.run(tree.root_mut(), &mut blocks)?;

        Ok(ParsedDocument {
            tree,
            diagnostics: cx.diagnostics,
        })
    }

    /// Parse and serialize in one step.
    pub fn render(&self, text: &str) -> Result<String, ParseError> {
        self.parse(text).map(|doc| doc.to_html())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

pub struct PipelineBuilder {
    processors: Vec<Registered>,
    engine: Option<Box<dyn MarkdownEngine>>,
    options: ParseOptions,
}

impl PipelineBuilder {
    /// Register a processor. Higher priorities see each block first; equal
    /// priorities keep registration order.
    pub fn register(mut self, processor: impl BlockProcessor + 'static, priority: u16) -> Self {
        self.processors.push(Registered {
            priority,
            processor: Box::new(processor),
        });
        self
    }

    pub fn with_default_processors(self) -> Self {
        self.register(CodeFenceProcessor, CodeFenceProcessor::PRIORITY)
            .register(TagProcessor, TagProcessor::PRIORITY)
    }

    /// Replace the markdown engine used for unclaimed blocks.
    pub fn engine(mut self, engine: impl MarkdownEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    pub fn build(mut self) -> Pipeline {
        self.processors.sort_by(|a, b| b.priority.cmp(&a.priority));
        let engine: Box<dyn MarkdownEngine> = match self.engine {
            Some(engine) => engine,
            None => Box::new(CmarkEngine::new(&self.options.extensions)),
        };
        Pipeline {
            processors: self.processors,
            engine,
            options: self.options,
        }
    }
}

/// State for one parse call, handed to processors so they can recurse.
pub struct ParseContext<'p> {
    pipeline: &'p Pipeline,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
}

impl ParseContext<'_> {
    pub fn options(&self) -> &ParseOptions {
        &self.pipeline.options
    }

    /// Parse `text` as an independent document, appending into `parent`.
    pub fn parse_into(&mut self, parent: &mut Element, text: &str) -> Result<(), ParseError> {
        let mut blocks = BlockQueue::from_text(text);
        self.depth += 1;
        let result = self.run(parent, &mut blocks);
        self.depth -= 1;
        result
    }

    /// Record that input ended inside `tag`. Fails in strict mode.
    pub fn report_unterminated(&mut self, tag: &str) -> Result<(), ParseError> {
        if self.options().strict {
            return Err(ParseError::UnterminatedTag {
                tag: tag.to_string(),
            });
        }
        log::warn!("tag `{tag}` is not closed before the end of input");
        self.diagnostics.push(Diagnostic::UnterminatedTag {
            tag: tag.to_string(),
        });
        Ok(())
    }

    fn run(&mut self, parent: &mut Element, blocks: &mut BlockQueue) -> Result<(), ParseError> {
        let pipeline = self.pipeline;
        let mut native = NativeRun::default();

        while !blocks.is_empty() {
            let mut handled = false;
            for entry in &pipeline.processors {
                if !blocks.peek().is_some_and(|b| entry.processor.accepts(b)) {
                    continue;
                }
                native.flush(&*pipeline.engine, parent);
                if entry.processor.consume(self, parent, blocks)? {
                    log::debug!(
                        "block handled by `{}` at depth {}",
                        entry.processor.name(),
                        self.depth
                    );
                    handled = true;
                    break;
                }
            }
            if !handled && let Some(block) = blocks.pop() {
                native.push(&block);
            }
        }

        native.flush(&*pipeline.engine, parent);
        Ok(())
    }
}

/// Consecutive unclaimed blocks, rendered by the engine in a single call.
#[derive(Default)]
struct NativeRun {
    source: String,
}

impl NativeRun {
    fn push(&mut self, block: &Block) {
        self.source.push_str(&block.source());
    }

    fn flush(&mut self, engine: &dyn MarkdownEngine, parent: &mut Element) {
        if !self.source.trim().is_empty() {
            parent.append_raw(engine.render(&self.source));
        }
        self.source.clear();
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub tree: MarkupTree,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDocument {
    pub fn to_html(&self) -> String {
        self.tree.to_html()
    }

    pub fn outcome(&self) -> Outcome {
        let unterminated: Vec<String> = self
            .diagnostics
            .iter()
            .map(|d| match d {
                Diagnostic::UnterminatedTag { tag } => tag.clone(),
            })
            .collect();
        if unterminated.is_empty() {
            Outcome::Complete
        } else {
            Outcome::Unterminated(unterminated)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome() == Outcome::Complete
    }
}

/// Render `text` with the default pipeline.
pub fn render_markdown(text: &str) -> Result<String, ParseError> {
    Pipeline::default().render(text)
}
