/// A paragraph-sized unit of raw document text.
///
/// Blocks are cut at blank lines. Each block remembers the separator that
/// followed it in the source so that joining blocks back together (for a
/// native markdown run or a tag body) reproduces the original spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    text: String,
    /// Newline plus any blank lines that followed the block.
    trailing: String,
}

impl Block {
    /// Separator assumed for blocks that did not come from a split.
    pub const DEFAULT_TRAILING: &'static str = "\n\n";

    pub fn new(text: impl Into<String>) -> Self {
        Self::with_trailing(text, Self::DEFAULT_TRAILING)
    }

    pub fn with_trailing(text: impl Into<String>, trailing: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trailing: trailing.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    /// The block as it appeared in the source, separator included.
    pub fn source(&self) -> String {
        let mut s = String::with_capacity(self.text.len() + self.trailing.len());
        s.push_str(&self.text);
        s.push_str(&self.trailing);
        s
    }
}

/// The separator to place after a block whose trailing text is `trailing`.
pub fn joiner(trailing: &str) -> &str {
    if trailing.is_empty() { "\n" } else { trailing }
}
