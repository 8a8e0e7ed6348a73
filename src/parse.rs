//! Djot source → document tree, via [`jotdown`].
//!
//! The adapter keeps everything the renderer needs to reproduce the source:
//! escapes are re-emitted with their backslash, smart punctuation is mapped
//! back to the characters that produced it, and consecutive text events are
//! merged into one `Text` leaf so the sentence wrapper sees whole sentences.

use jotdown::{Alignment, Container, Event, LinkType, ListKind, OrderedListNumbering};

use crate::tree::{Attributes, Node, NodeKind, keys};

/// Parse djot source into a single `Document` node.
///
/// # Examples
///
/// ```
/// use djot_fmt::parse::parse;
/// use djot_fmt::tree::NodeKind;
///
/// let doc = parse("Hello *world*\n");
/// assert_eq!(doc.kind, NodeKind::Document);
/// assert_eq!(doc.children[0].kind, NodeKind::Paragraph);
/// ```
pub fn parse(source: &str) -> Node {
    let mut builder = TreeBuilder::new();
    for event in jotdown::Parser::new(source) {
        builder.event(event);
    }
    let doc = builder.finish();
    log::debug!("parsed {} top-level blocks", doc.children.len());
    doc
}

struct TreeBuilder {
    stack: Vec<Node>,
    escaped: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::new(NodeKind::Document)],
            escaped: false,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(container, attrs) => {
                let node = start_node(&container, convert_attributes(&attrs));
                self.stack.push(node);
            }
            Event::End(..) => self.close(),
            Event::Str(s) => self.push_text(&s),
            Event::FootnoteReference(label) => self.push_text(&format!("[^{label}]")),
            Event::Symbol(name) => self.push_child(Node::leaf(NodeKind::Symbols, name.to_string())),
            Event::LeftSingleQuote | Event::RightSingleQuote => self.push_text("'"),
            Event::LeftDoubleQuote | Event::RightDoubleQuote => self.push_text("\""),
            Event::Ellipsis => self.push_text("..."),
            Event::EnDash => self.push_text("--"),
            Event::EmDash => self.push_text("---"),
            Event::NonBreakingSpace => {
                self.escaped = false;
                self.push_text("\\ ");
            }
            Event::Softbreak => self.push_text("\n"),
            Event::Hardbreak => {
                self.escaped = false;
                self.push_child(Node::new(NodeKind::LineBreak));
            }
            Event::Escape => self.escaped = true,
            Event::ThematicBreak(attrs) => {
                let mut node = Node::new(NodeKind::ThematicBreak);
                node.attributes = convert_attributes(&attrs);
                self.push_child(node);
            }
            _ => {}
        }
    }

    fn top(&mut self) -> &mut Node {
        // The document root is never popped, so the stack is never empty.
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn push_child(&mut self, node: Node) {
        self.top().children.push(node);
    }

    /// Append text, merging with a preceding text leaf.
    fn push_text(&mut self, text: &str) {
        let escaped = std::mem::take(&mut self.escaped);
        let top = self.top();
        if let Some(last) = top.children.last_mut()
            && last.kind == NodeKind::Text
        {
            if escaped {
                last.text.push('\\');
            }
            last.text.push_str(text);
            return;
        }
        let mut leaf = Node::text(text);
        if escaped {
            leaf.text.insert(0, '\\');
        }
        top.children.push(leaf);
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            log::warn!("unbalanced end event ignored");
            return;
        }
        let Some(mut node) = self.stack.pop() else {
            return;
        };
        match node.kind {
            NodeKind::Image => {
                let alt = node.flat_text();
                node.attributes.insert(keys::ALT, alt);
                node.children.clear();
            }
            NodeKind::ReferenceDef => {
                node.text = node.flat_text();
                node.children.clear();
            }
            _ => {}
        }
        self.push_child(node);
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().unwrap_or_else(|| Node::new(NodeKind::Document))
    }
}

fn convert_attributes(attrs: &jotdown::Attributes<'_>) -> Attributes {
    attrs
        .iter()
        .map(|(key, value)| (key.to_string(), value.parts().collect::<String>()))
        .collect()
}

fn numbering_token(numbering: OrderedListNumbering) -> &'static str {
    match numbering {
        OrderedListNumbering::Decimal => "1",
        OrderedListNumbering::AlphaLower => "a",
        OrderedListNumbering::AlphaUpper => "A",
        OrderedListNumbering::RomanLower => "i",
        OrderedListNumbering::RomanUpper => "I",
    }
}

/// Map a container start to an open node. Structural data the renderer
/// needs goes into internal attributes.
fn start_node(container: &Container<'_>, attributes: Attributes) -> Node {
    let mut node = Node::new(NodeKind::Document);
    node.attributes = attributes;
    let attrs = &mut node.attributes;

    node.kind = match container {
        Container::Blockquote => NodeKind::Quote,
        Container::List { kind, tight } => {
            if !*tight {
                attrs.insert(keys::SPARSE, "true");
            }
            match kind {
                ListKind::Unordered { .. } => NodeKind::UnorderedList,
                ListKind::Task { .. } => NodeKind::TaskList,
                ListKind::Ordered { numbering, .. } => {
                    attrs.insert(keys::LIST_STYLE, numbering_token(*numbering));
                    NodeKind::OrderedList
                }
            }
        }
        Container::ListItem => NodeKind::ListItem,
        Container::TaskListItem { checked } => {
            attrs.insert(keys::CLASS, if *checked { "checked" } else { "unchecked" });
            NodeKind::ListItem
        }
        Container::DescriptionList => NodeKind::DefinitionList,
        Container::DescriptionTerm => NodeKind::DefinitionTerm,
        Container::DescriptionDetails => NodeKind::DefinitionItem,
        Container::Footnote { label, .. } => {
            attrs.insert(keys::REFERENCE_KEY, *label);
            NodeKind::FootnoteDef
        }
        Container::Table => NodeKind::Table,
        Container::TableRow { .. } => NodeKind::TableRow,
        Container::TableCell {
            alignment, head, ..
        } => {
            match alignment {
                Alignment::Left => attrs.insert(keys::ALIGNMENT, "left"),
                Alignment::Center => attrs.insert(keys::ALIGNMENT, "center"),
                Alignment::Right => attrs.insert(keys::ALIGNMENT, "right"),
                Alignment::Unspecified => {}
            }
            if *head {
                NodeKind::TableHeader
            } else {
                NodeKind::TableCell
            }
        }
        Container::Caption => NodeKind::TableCaption,
        Container::Section { .. } => NodeKind::Section,
        Container::Div { class } => {
            // The fence class comes first so it stays the div's name.
            let mut with_name = Attributes::new();
            if !class.is_empty() {
                with_name.insert(keys::CLASS, *class);
            }
            for (key, value) in attrs.iter() {
                with_name.insert(key, value);
            }
            *attrs = with_name;
            NodeKind::Div
        }
        Container::Paragraph => NodeKind::Paragraph,
        Container::Heading { level, .. } => {
            attrs.insert(keys::HEADING_LEVEL, "#".repeat(usize::from(*level)));
            NodeKind::Heading
        }
        Container::LinkDefinition { label } => {
            attrs.insert(keys::REFERENCE_KEY, *label);
            NodeKind::ReferenceDef
        }
        Container::RawBlock { format } => {
            attrs.insert(keys::RAW_FORMAT, *format);
            NodeKind::Raw
        }
        Container::CodeBlock { language } => {
            if !language.is_empty() {
                attrs.insert(keys::CLASS, format!("language-{language}"));
            }
            NodeKind::Code
        }
        Container::Span => NodeKind::Span,
        Container::Link(url, link_type) => {
            attrs.insert(keys::HREF, url.to_string());
            match link_type {
                LinkType::AutoLink => attrs.insert(keys::LINK_KIND, "autolink"),
                LinkType::Email => attrs.insert(keys::LINK_KIND, "email"),
                _ => {}
            }
            NodeKind::Link
        }
        Container::Image(src, _) => {
            attrs.insert(keys::SRC, src.to_string());
            NodeKind::Image
        }
        Container::Verbatim => NodeKind::Verbatim,
        Container::Math { display } => {
            let key = if *display {
                keys::DISPLAY_MATH
            } else {
                keys::INLINE_MATH
            };
            attrs.insert(key, "true");
            NodeKind::Verbatim
        }
        Container::RawInline { format } => {
            attrs.insert(keys::RAW_FORMAT, *format);
            NodeKind::Verbatim
        }
        Container::Subscript => NodeKind::Subscript,
        Container::Superscript => NodeKind::Superscript,
        Container::Insert => NodeKind::Insert,
        Container::Delete => NodeKind::Delete,
        Container::Strong => NodeKind::Strong,
        Container::Emphasis => NodeKind::Emphasis,
        Container::Mark => NodeKind::Highlighted,
        #[allow(unreachable_patterns)]
        _ => {
            log::warn!("unrecognized djot container, keeping its content as a span");
            NodeKind::Span
        }
    };
    node
}
