use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a tag body finds its closing marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestingMode {
    /// Track nested openers; only a balancing closer ends the body.
    /// Text after that closer is re-queued.
    #[default]
    DepthAware,
    /// The first closing marker of any name ends the body, and whatever
    /// follows it in the accumulated text is dropped. Same-named tags
    /// therefore cannot nest.
    FirstMatch,
}

impl FromStr for NestingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-aware" => Ok(Self::DepthAware),
            "first-match" => Ok(Self::FirstMatch),
            other => Err(format!(
                "unknown nesting mode `{other}` (expected `depth-aware` or `first-match`)"
            )),
        }
    }
}

/// Markdown engine extensions applied to natively rendered blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownExtensions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub footnotes: bool,
}

impl Default for MarkdownExtensions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: false,
            tasklists: false,
            footnotes: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub nesting: NestingMode,
    /// Fail instead of warning when input ends inside an open tag.
    pub strict: bool,
    #[serde(flatten)]
    pub extensions: MarkdownExtensions,
}
