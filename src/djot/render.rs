//! Tree → djot rendering driver.
//!
//! Rendering is a depth-first walk. Each node is dispatched through a
//! [`Registry`] that maps its [`NodeKind`] to a [`Handler`]. A handler gets
//! the node, its parent and the [`Renderer`], and decides whether and when
//! to render the children by calling [`Visit::children`]. Kinds that only
//! wrap their children in a fixed delimiter pair are registered as
//! [`Delimiters`] instead of a function, so they all share one code path for
//! attribute output.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::slw::SlwConfig;
use crate::tree::{Node, NodeKind};

use super::attributes::render_attributes;
use super::writer::Writer;
use super::{blocks, inlines};

/// A node being rendered, with its parent.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'n> {
    pub node: &'n Node,
    pub parent: Option<&'n Node>,
}

impl<'n> Visit<'n> {
    /// Render the children of this node.
    pub fn children(self, r: &mut Renderer<'_>) -> Result<()> {
        r.render_nodes(&self.node.children, Some(self.node))
    }

    /// Whether this node is the first child of its parent.
    pub fn is_first_child(&self) -> bool {
        self.parent
            .and_then(|p| p.children.first())
            .is_some_and(|first| std::ptr::eq(first, self.node))
    }
}

/// Handler function for one node kind.
pub type HandlerFn = fn(&mut Renderer<'_>, Visit<'_>) -> Result<()>;

/// Open/close pair written around a node's content, followed by the node's
/// rendered attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    fn apply(self, r: &mut Renderer<'_>, visit: Visit<'_>) -> Result<()> {
        r.writer().write(self.open).write(&visit.node.text);
        visit.children(r)?;
        let attrs = render_attributes(&visit.node.attributes);
        r.writer().write(self.close).write(&attrs);
        Ok(())
    }
}

/// How a node kind is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Fn(HandlerFn),
    Delimited(Delimiters),
}

/// Node kind → handler table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    handlers: HashMap<NodeKind, Handler>,
}

static DJOT: LazyLock<Registry> = LazyLock::new(Registry::build_djot);

impl Registry {
    /// An empty registry; every kind is unsupported until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry covering every node kind.
    pub fn djot() -> &'static Registry {
        &DJOT
    }

    fn build_djot() -> Self {
        use Handler::{Delimited, Fn};
        use NodeKind::*;

        let mut r = Registry::new();
        r.register(Document, Fn(blocks::container));
        r.register(Section, Fn(blocks::container));
        r.register(Paragraph, Fn(blocks::paragraph));
        r.register(Heading, Fn(blocks::heading));
        r.register(UnorderedList, Fn(blocks::list));
        r.register(OrderedList, Fn(blocks::list));
        r.register(TaskList, Fn(blocks::list));
        r.register(ListItem, Fn(blocks::list_item));
        r.register(Code, Fn(blocks::code));
        r.register(Raw, Fn(blocks::raw));
        r.register(Quote, Fn(blocks::quote));
        r.register(Div, Fn(blocks::div));
        r.register(ThematicBreak, Fn(blocks::thematic_break));
        r.register(DefinitionList, Fn(blocks::definition_list));
        r.register(DefinitionTerm, Fn(blocks::definition_term));
        r.register(DefinitionItem, Fn(blocks::definition_item));
        r.register(ReferenceDef, Fn(blocks::reference_def));
        r.register(FootnoteDef, Fn(blocks::footnote_def));
        r.register(Table, Fn(blocks::table));
        r.register(TableRow, Fn(blocks::table_row));
        r.register(TableHeader, Fn(blocks::table_cell));
        r.register(TableCell, Fn(blocks::table_cell));
        r.register(TableCaption, Fn(blocks::table_caption));

        r.register(Text, Fn(inlines::text));
        r.register(Link, Fn(inlines::link));
        r.register(Verbatim, Fn(inlines::verbatim));
        r.register(Image, Fn(inlines::image));
        r.register(LineBreak, Delimited(Delimiters::new("\\\n", "")));
        r.register(Emphasis, Delimited(Delimiters::new("_", "_")));
        r.register(Strong, Delimited(Delimiters::new("*", "*")));
        r.register(Symbols, Delimited(Delimiters::new(":", ":")));
        r.register(Subscript, Delimited(Delimiters::new("{~", "~}")));
        r.register(Superscript, Delimited(Delimiters::new("{^", "^}")));
        r.register(Insert, Delimited(Delimiters::new("{+", "+}")));
        r.register(Delete, Delimited(Delimiters::new("{-", "-}")));
        r.register(Highlighted, Delimited(Delimiters::new("{=", "=}")));
        r.register(Span, Delimited(Delimiters::new("[", "]")));
        r
    }

    /// Register a handler, returning the one it replaces.
    pub fn register(&mut self, kind: NodeKind, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind, handler)
    }

    /// Remove the handler for `kind`; rendering that kind then fails.
    pub fn remove(&mut self, kind: NodeKind) -> Option<Handler> {
        self.handlers.remove(&kind)
    }

    pub fn get(&self, kind: NodeKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    /// Kinds without a handler.
    pub fn missing(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(|k| !self.handlers.contains_key(k))
            .collect()
    }
}

/// Rendering context: the registry, the wrap settings and the output state.
pub struct Renderer<'a> {
    registry: &'a Registry,
    slw: &'a SlwConfig,
    out: Writer,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a Registry, slw: &'a SlwConfig) -> Self {
        Self {
            registry,
            slw,
            out: Writer::new(),
        }
    }

    pub fn writer(&mut self) -> &mut Writer {
        &mut self.out
    }

    pub fn slw(&self) -> &'a SlwConfig {
        self.slw
    }

    /// Dispatch one node through the registry.
    pub fn render_node(&mut self, node: &Node, parent: Option<&Node>) -> Result<()> {
        let visit = Visit { node, parent };
        match self.registry.get(node.kind) {
            Some(Handler::Fn(f)) => f(self, visit),
            Some(Handler::Delimited(d)) => d.apply(self, visit),
            None => {
                log::error!("no handler registered for {} node", node.kind);
                Err(Error::UnsupportedNode { kind: node.kind })
            }
        }
    }

    pub fn render_nodes(&mut self, nodes: &[Node], parent: Option<&Node>) -> Result<()> {
        for node in nodes {
            self.render_node(node, parent)?;
        }
        Ok(())
    }

    /// Consume the renderer, returning the text with one trailing newline.
    pub fn finish(self) -> String {
        self.out.finish()
    }
}

/// Render a document tree to canonical djot.
///
/// # Examples
///
/// ```
/// use djot_fmt::djot::format;
/// use djot_fmt::slw::SlwConfig;
/// use djot_fmt::tree::{Node, NodeKind};
///
/// let doc = Node::new(NodeKind::Paragraph).with_child(Node::text("Hello, world!"));
/// assert_eq!(format(&[doc], &SlwConfig::default()).unwrap(), "Hello, world!\n");
/// ```
pub fn format(nodes: &[Node], config: &SlwConfig) -> Result<String> {
    format_with(nodes, config, Registry::djot())
}

/// Render with a caller-supplied registry.
pub fn format_with(nodes: &[Node], config: &SlwConfig, registry: &Registry) -> Result<String> {
    let mut renderer = Renderer::new(registry, config);
    renderer.render_nodes(nodes, None)?;
    Ok(renderer.finish())
}
