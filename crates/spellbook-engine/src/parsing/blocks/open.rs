use super::kinds::CodeFence;
use crate::parsing::markers;

/// The first structure opened inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { at: usize },
    Tag { at: usize },
}

pub fn first_opener(text: &str) -> Option<BlockOpen> {
    let fence = CodeFence::opening(text);
    let tag = markers::first_open(text).map(|m| m.range.start);

    // Precedence: a fence beats a tag marker that starts at or after it.
    match (fence, tag) {
        (Some(f), Some(t)) if f <= t => Some(BlockOpen::FencedCode { at: f }),
        (Some(f), None) => Some(BlockOpen::FencedCode { at: f }),
        (_, Some(t)) => Some(BlockOpen::Tag { at: t }),
        (None, None) => None,
    }
}
