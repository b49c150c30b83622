//! Tag marker scanning.
//!
//! A marker is any `{% ... %}` span. `{% name attrs %}` opens a tag and
//! `{% endname %}` closes one; a marker is a closer only when its name starts
//! with `end`, something follows the `end`, and it carries no attribute text.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Attribute text never contains `{%`, so a stray `{%` in prose cannot
        // swallow the marker that follows it.
        Regex::new(r"\{%\s*(\w[\w-]*)((?:[^{%]|\{[^{%]|%[^{}])*?)%\}")
            .expect("Invalid tag marker regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind<'a> {
    Open { name: &'a str, attrs: &'a str },
    Close { name: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub kind: MarkerKind<'a>,
    /// Byte range of the whole `{% ... %}` marker.
    pub range: Range<usize>,
}

impl<'a> Marker<'a> {
    pub fn is_open(&self) -> bool {
        matches!(self.kind, MarkerKind::Open { .. })
    }

    pub fn name(&self) -> &'a str {
        match self.kind {
            MarkerKind::Open { name, .. } | MarkerKind::Close { name } => name,
        }
    }

    /// Raw attribute fragment; empty for closing markers.
    pub fn attrs(&self) -> &'a str {
        match self.kind {
            MarkerKind::Open { attrs, .. } => attrs,
            MarkerKind::Close { .. } => "",
        }
    }
}

/// All markers in `text`, left to right.
pub fn markers(text: &str) -> impl Iterator<Item = Marker<'_>> {
    marker_regex().captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?.as_str();
        let attrs = caps.get(2).map_or("", |m| m.as_str());

        let kind = match name.strip_prefix("end") {
            Some(closed) if !closed.is_empty() && attrs.trim().is_empty() => {
                MarkerKind::Close { name: closed }
            }
            _ => MarkerKind::Open { name, attrs },
        };
        Some(Marker {
            kind,
            range: whole.range(),
        })
    })
}

/// The first opening marker in `text`.
pub fn first_open(text: &str) -> Option<Marker<'_>> {
    markers(text).find(Marker::is_open)
}

/// The first closing marker in `text`, whatever its name.
pub fn first_close(text: &str) -> Option<Marker<'_>> {
    markers(text).find(|m| !m.is_open())
}
