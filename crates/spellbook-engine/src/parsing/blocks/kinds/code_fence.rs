use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::markup::{AttributeSet, Element};
use crate::parsing::blocks::content::{trim_blank_lines, trim_leading_blank_lines};
use crate::parsing::blocks::open::{BlockOpen, first_opener};
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::blocks::queue::BlockQueue;
use crate::parsing::blocks::types::{Block, joiner};
use crate::parsing::error::ParseError;
use crate::parsing::pipeline::ParseContext;

fn opening_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*```").expect("Invalid fence opening regex"))
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*```(?P<lang>[\w+#-]+)?[^\n]*\n(?P<body>[\s\S]*?)^[ \t]*```")
            .expect("Invalid fence regex")
    })
}

/// A closed backtick fence located inside some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence<'a> {
    /// Language token written right after the opening backticks.
    pub language: Option<&'a str>,
    /// Interior with surrounding blank lines removed.
    pub content: &'a str,
    /// From the start of the opening line to the end of the closing backticks.
    pub range: Range<usize>,
}

impl<'a> CodeFence<'a> {
    /// Offset of the first line that opens a fence.
    pub fn opening(text: &str) -> Option<usize> {
        opening_regex().find(text).map(|m| m.start())
    }

    /// The first complete fence in `text`.
    pub fn find(text: &'a str) -> Option<Self> {
        let caps = fence_regex().captures(text)?;
        let whole = caps.get(0)?;
        Some(Self {
            language: caps.name("lang").map(|m| m.as_str()),
            content: caps.name("body").map_or("", |m| trim_blank_lines(m.as_str())),
            range: whole.range(),
        })
    }

    /// Byte ranges of every complete fence in `text`.
    pub fn ranges(text: &str) -> Vec<Range<usize>> {
        fence_regex().find_iter(text).map(|m| m.range()).collect()
    }
}

/// Turns a fenced region into `<pre><code>`.
///
/// Runs ahead of tag processing: a block is taken here when its first fence
/// opening comes before its first tag marker. A fence whose closing line sits
/// in a later block pulls those blocks in; an unclosed fence is declined.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeFenceProcessor;

impl CodeFenceProcessor {
    pub const PRIORITY: u16 = 180;
}

impl BlockProcessor for CodeFenceProcessor {
    fn name(&self) -> &'static str {
        "code_fence"
    }

    fn accepts(&self, block: &Block) -> bool {
        matches!(
            first_opener(block.text()),
            Some(BlockOpen::FencedCode { .. })
        )
    }

    fn consume(
        &self,
        cx: &mut ParseContext<'_>,
        parent: &mut Element,
        blocks: &mut BlockQueue,
    ) -> Result<bool, ParseError> {
        let Some((text, taken, trailing)) = gather_fence(blocks) else {
            log::warn!("code fence is never closed; rendering it as plain markdown");
            return Ok(false);
        };
        let Some(fence) = CodeFence::find(&text) else {
            return Ok(false);
        };
        blocks.skip(taken);

        let before = &text[..fence.range.start];
        if !before.trim().is_empty() {
            cx.parse_into(parent, before)?;
        }

        let mut attrs = AttributeSet::new();
        if let Some(language) = fence.language {
            attrs.set("data-language", language);
            attrs.set("class", format!("language-{language}"));
        }
        let mut code = Element::inline("code", attrs);
        code.append_text(fence.content);
        parent.push_element(Element::new("pre", AttributeSet::new()).with_element(code));

        let rest = trim_leading_blank_lines(&text[fence.range.end..]);
        if !rest.trim().is_empty() {
            blocks.push_front(Block::with_trailing(rest, trailing));
        }
        Ok(true)
    }
}

/// Join blocks from the front of the queue until they hold a closed fence.
///
/// Returns the joined text, how many blocks it spans, and the separator that
/// followed the last of them.
fn gather_fence(blocks: &BlockQueue) -> Option<(String, usize, String)> {
    let first = blocks.peek()?;
    let mut text = first.text().to_string();
    let mut trailing = first.trailing().to_string();
    let mut taken = 1;

    while CodeFence::find(&text).is_none() {
        let next = blocks.get(taken)?;
        text.push_str(joiner(&trailing));
        text.push_str(next.text());
        trailing = next.trailing().to_string();
        taken += 1;
    }
    Some((text, taken, trailing))
}
