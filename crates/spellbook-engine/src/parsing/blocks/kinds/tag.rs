use std::collections::HashMap;
use std::ops::Range;

use crate::markup::Element;
use crate::parsing::attributes::parse_attributes;
use crate::parsing::blocks::content::trim_leading_blank_lines;
use crate::parsing::blocks::kinds::CodeFence;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::blocks::queue::BlockQueue;
use crate::parsing::blocks::types::{Block, joiner};
use crate::parsing::error::ParseError;
use crate::parsing::markers::{self, MarkerKind};
use crate::parsing::options::NestingMode;
use crate::parsing::pipeline::ParseContext;

/// Where a tag body stands while blocks are being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanState {
    Open,
    /// A closing marker with the opening name was found.
    Closed,
    /// Input ran out first; the body is everything that was accumulated.
    Exhausted,
}

/// Transient state for one `{% name %} ... {% endname %}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub name: String,
    /// Raw attribute fragment from the opening marker.
    pub attrs: String,
    pub body: String,
    pub state: SpanState,
    /// Text after the closing marker, to be handed back to the queue.
    pub leftover: Option<Block>,
}

impl TagSpan {
    pub fn open(name: &str, attrs: &str, residual: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: attrs.to_string(),
            body: residual.to_string(),
            state: SpanState::Open,
            leftover: None,
        }
    }

    /// Pull blocks from `blocks` into the body until a closing marker
    /// resolves it or the queue runs dry.
    ///
    /// `trailing` is the separator that followed the text already in the body.
    pub fn accumulate(
        &mut self,
        blocks: &mut BlockQueue,
        mut trailing: String,
        nesting: NestingMode,
    ) -> Result<(), ParseError> {
        while self.state == SpanState::Open {
            if let Some(close) = find_close(&self.body, &self.name, nesting)? {
                let rest = trim_leading_blank_lines(&self.body[close.end..]);
                if nesting == NestingMode::DepthAware && !rest.trim().is_empty() {
                    self.leftover = Some(Block::with_trailing(rest, trailing.as_str()));
                }
                self.body.truncate(close.start);
                self.state = SpanState::Closed;
                break;
            }

            match blocks.pop() {
                Some(next) => {
                    self.body.push_str(joiner(&trailing));
                    self.body.push_str(next.text());
                    trailing = next.trailing().to_string();
                }
                None => self.state = SpanState::Exhausted,
            }
        }
        Ok(())
    }
}

/// Locate the marker that closes a body opened as `name`.
fn find_close(
    body: &str,
    name: &str,
    nesting: NestingMode,
) -> Result<Option<Range<usize>>, ParseError> {
    match nesting {
        NestingMode::FirstMatch => match markers::first_close(body) {
            Some(close) if close.name() == name => Ok(Some(close.range)),
            Some(close) => Err(mismatch(name, close.name())),
            None => Ok(None),
        },
        NestingMode::DepthAware => {
            let fences = CodeFence::ranges(body);
            // Open markers per name. Tags that are never closed (template
            // tags such as `{% csrf_token %}`) only raise their own count.
            let mut depth: HashMap<&str, usize> = HashMap::new();
            for marker in markers::markers(body) {
                if fences.iter().any(|f| f.contains(&marker.range.start)) {
                    continue;
                }
                match marker.kind {
                    MarkerKind::Open { name: inner, .. } => *depth.entry(inner).or_default() += 1,
                    MarkerKind::Close { name: closed } => match depth.get_mut(closed) {
                        Some(open) if *open > 0 => *open -= 1,
                        _ if closed == name => return Ok(Some(marker.range)),
                        _ => return Err(mismatch(name, closed)),
                    },
                }
            }
            Ok(None)
        }
    }
}

fn mismatch(opened: &str, closed: &str) -> ParseError {
    ParseError::MismatchedTag {
        opened: opened.to_string(),
        closed: closed.to_string(),
    }
}

/// Turns `{% name attrs %} ... {% endname %}` into an element named `name`.
///
/// Text before the opening marker is parsed first as sibling content. The
/// body is parsed recursively as a document of its own and becomes the
/// element's children.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagProcessor;

impl TagProcessor {
    pub const PRIORITY: u16 = 175;
}

impl BlockProcessor for TagProcessor {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn accepts(&self, block: &Block) -> bool {
        markers::first_open(block.text()).is_some()
    }

    fn consume(
        &self,
        cx: &mut ParseContext<'_>,
        parent: &mut Element,
        blocks: &mut BlockQueue,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop() else {
            return Ok(false);
        };
        let text = block.text();
        let Some(marker) = markers::first_open(text) else {
            blocks.push_front(block);
            return Ok(false);
        };

        let before = &text[..marker.range.start];
        if !before.trim().is_empty() {
            cx.parse_into(parent, before)?;
        }

        let mut span = TagSpan::open(marker.name(), marker.attrs(), &text[marker.range.end..]);
        span.accumulate(blocks, block.trailing().to_string(), cx.options().nesting)?;
        if span.state == SpanState::Exhausted {
            cx.report_unterminated(&span.name)?;
        }
        log::debug!("tag `{}` resolved as {:?}", span.name, span.state);

        let mut element = Element::new(span.name.as_str(), parse_attributes(&span.attrs));
        cx.parse_into(&mut element, &span.body)?;
        parent.push_element(element);

        if let Some(leftover) = span.leftover.take() {
            blocks.push_front(leftover);
        }
        Ok(true)
    }
}
