//! # Markup Tree
//!
//! Owned output tree built during a single parse call.
//!
//! - **`attributes`**: `AttributeSet`, the ordered attribute map on every element
//! - **`html`**: depth-first HTML serialization
//!
//! Each [`Element`] owns its children outright; nothing in the tree is shared
//! between parses. Subtrees are built bottom-up and moved into their parent
//! once complete.

pub mod attributes;
pub mod html;

pub use attributes::AttributeSet;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A named element with attributes and children.
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// HTML already serialized by the markdown engine, emitted verbatim.
    Raw(String),
}

impl Node {
    /// Whether the node starts on its own line when serialized.
    pub fn is_block(&self) -> bool {
        match self {
            Node::Element(e) => e.block,
            Node::Raw(_) => true,
            Node::Text(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: AttributeSet,
    pub children: Vec<Node>,
    /// Block elements are laid out on their own lines.
    pub block: bool,
}

impl Element {
    /// Create a block-level element.
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            name: name.into(),
            attributes,
            children: Vec::new(),
            block: true,
        }
    }

    /// Create an inline element (no line breaks around it).
    pub fn inline(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            block: false,
            ..Self::new(name, attributes)
        }
    }

    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Builder form of [`push_element`](Element::push_element).
    pub fn with_element(mut self, child: Element) -> Self {
        self.push_element(child);
        self
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Append engine output. Empty fragments are dropped.
    pub fn append_raw(&mut self, html: impl Into<String>) {
        let html = html.into();
        if !html.is_empty() {
            self.children.push(Node::Raw(html));
        }
    }

    /// Child elements in document order, skipping text and raw fragments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search for the first descendant named `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements()
            .find_map(|e| if e.name == name { Some(e) } else { e.find(name) })
    }
}

/// The tree produced by one parse call.
///
/// The root is a container only; serialization emits its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupTree {
    root: Element,
}

impl MarkupTree {
    pub fn new() -> Self {
        Self {
            root: Element::new("root", AttributeSet::new()),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Top-level nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.root.children
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_nodes(&mut out, &self.root.children);
        out
    }
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}
