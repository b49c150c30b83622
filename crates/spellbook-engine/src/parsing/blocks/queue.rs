use std::collections::VecDeque;

use super::types::Block;

/// Split `text` into blocks at blank lines.
///
/// Leading blank lines are dropped. Every other byte of the input ends up in
/// exactly one block's text or trailing separator.
pub fn split_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut separator = String::new();

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                separator.push_str(line);
            }
            continue;
        }
        if !separator.is_empty() {
            blocks.push(finish_block(
                std::mem::take(&mut current),
                std::mem::take(&mut separator),
            ));
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        blocks.push(finish_block(current, separator));
    }
    blocks
}

fn finish_block(mut text: String, separator: String) -> Block {
    let mut trailing = String::new();
    if text.ends_with('\n') {
        text.pop();
        trailing.push('\n');
    }
    trailing.push_str(&separator);
    Block::with_trailing(text, trailing)
}

/// Cursor over an immutable block sequence plus a queue of re-inserted
/// fragments.
///
/// Re-inserted blocks are always served before the next unread source block.
#[derive(Debug, Default)]
pub struct BlockQueue {
    blocks: Vec<Block>,
    cursor: usize,
    pending: VecDeque<Block>,
}

impl BlockQueue {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            cursor: 0,
            pending: VecDeque::new(),
        }
    }

    /// Normalize line endings and split `text` into a queue.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        Self::new(split_blocks(&normalized))
    }

    /// The `n`th block still to be consumed (0 = next).
    pub fn get(&self, n: usize) -> Option<&Block> {
        if n < self.pending.len() {
            self.pending.get(n)
        } else {
            self.blocks.get(self.cursor + n - self.pending.len())
        }
    }

    pub fn peek(&self) -> Option<&Block> {
        self.get(0)
    }

    pub fn pop(&mut self) -> Option<Block> {
        if let Some(block) = self.pending.pop_front() {
            return Some(block);
        }
        let block = self.blocks.get(self.cursor).cloned();
        if block.is_some() {
            self.cursor += 1;
        }
        block
    }

    /// Drop the next `n` blocks.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.pop().is_none() {
                break;
            }
        }
    }

    /// Re-insert a leftover fragment so it is the next block served.
    pub fn push_front(&mut self, block: Block) {
        self.pending.push_front(block);
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.blocks.len().saturating_sub(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
