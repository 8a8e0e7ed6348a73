//! Document tree node types and kinds.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Closed set of node kinds a document tree may contain.
///
/// The kind decides which half of a [`Node`] carries data: leaf kinds
/// (`Text`, `Symbols`, `ReferenceDef`) use [`Node::text`], container kinds
/// use [`Node::children`]. `Code`, `Raw` and `Verbatim` hold their literal
/// content as `Text` children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Root of a parsed document.
    Document,
    /// Implicit section opened by a heading.
    Section,
    /// Leaf text content.
    Text,
    /// Block of inline content.
    Paragraph,
    /// Heading; level in `$HeadingLevel`.
    Heading,
    UnorderedList,
    /// Ordered list; numbering style in `type`.
    OrderedList,
    TaskList,
    /// Item of any list kind. Task items carry `class="checked"` when ticked.
    ListItem,
    Emphasis,
    Strong,
    /// Hyperlink; target in `$Href`.
    Link,
    /// Inline code, inline/display math, or raw inline content.
    Verbatim,
    Delete,
    Insert,
    Highlighted,
    Subscript,
    Superscript,
    /// Hard line break.
    LineBreak,
    /// Image; `src` and `alt` attributes, never any children.
    Image,
    Span,
    /// Symbol name such as `smile` in `:smile:`.
    Symbols,
    ThematicBreak,
    /// Fenced code block; language in `class="language-…"`.
    Code,
    /// Fenced raw block; format in `$RawFormat`.
    Raw,
    /// Block quote.
    Quote,
    /// Fenced div; optional `class`.
    Div,
    DefinitionList,
    DefinitionTerm,
    DefinitionItem,
    /// Link reference definition; label in `$ReferenceKey`, url in text.
    ReferenceDef,
    /// Footnote body; label in `$ReferenceKey`.
    FootnoteDef,
    Table,
    TableRow,
    /// Header cell of a table row.
    TableHeader,
    TableCell,
    TableCaption,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 37] = [
        NodeKind::Document,
        NodeKind::Section,
        NodeKind::Text,
        NodeKind::Paragraph,
        NodeKind::Heading,
        NodeKind::UnorderedList,
        NodeKind::OrderedList,
        NodeKind::TaskList,
        NodeKind::ListItem,
        NodeKind::Emphasis,
        NodeKind::Strong,
        NodeKind::Link,
        NodeKind::Verbatim,
        NodeKind::Delete,
        NodeKind::Insert,
        NodeKind::Highlighted,
        NodeKind::Subscript,
        NodeKind::Superscript,
        NodeKind::LineBreak,
        NodeKind::Image,
        NodeKind::Span,
        NodeKind::Symbols,
        NodeKind::ThematicBreak,
        NodeKind::Code,
        NodeKind::Raw,
        NodeKind::Quote,
        NodeKind::Div,
        NodeKind::DefinitionList,
        NodeKind::DefinitionTerm,
        NodeKind::DefinitionItem,
        NodeKind::ReferenceDef,
        NodeKind::FootnoteDef,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableHeader,
        NodeKind::TableCell,
        NodeKind::TableCaption,
    ];
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Insertion-ordered attribute map. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute.
    ///
    /// A repeated `class` appends its tokens to the existing value; any other
    /// repeated key overwrites the value in place, keeping its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == "class"
            && let Some(existing) = self.0.get_mut("class")
            && !existing.is_empty()
        {
            if !value.is_empty() {
                existing.push(' ');
                existing.push_str(&value);
            }
            return;
        }
        self.0.insert(key, value);
    }

    /// Value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Literal payload (only for leaf kinds).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a `Text` leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// Create a leaf of any kind carrying a text payload.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(kind)
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Shorthand for `self.attributes.get(key)`.
    pub fn attr(&self, key: &str) -> &str {
        self.attributes.get(key)
    }

    /// Concatenate the text payload of this node and all descendants.
    pub fn flat_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
