//! Block-level handlers.
//!
//! Spacing between sibling blocks is driven by [`Writer::needs_blank_line`];
//! containers that open a fresh block context (list items, quotes, divs,
//! footnote and definition bodies) clear the last block kind on entry so
//! their first child starts flush.

use crate::error::Result;
use crate::tree::{Attributes, Node, NodeKind, keys};

use super::attributes::render_attributes;
use super::escape::calculate_fence_length;
use super::render::{Renderer, Visit};
use super::writer::{BlockKind, Writer};

/// Blank line before a block when the previous sibling asks for one.
fn separate(w: &mut Writer) {
    if w.needs_blank_line() {
        w.ensure_blank_lines(1);
    }
}

/// Block attributes on their own line, directly above the block.
fn block_attributes(w: &mut Writer, attrs: &Attributes) {
    if !w.is_line_start() {
        return;
    }
    let rendered = render_attributes(attrs);
    if !rendered.is_empty() {
        w.write(&rendered).write("\n");
    }
}

/// Document and section: no decoration.
pub(super) fn container(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    v.children(r)
}

pub(super) fn paragraph(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    block_attributes(w, &v.node.attributes);
    w.set_in_paragraph(true);
    v.children(r)?;
    let w = r.writer();
    w.set_in_paragraph(false);
    w.write("\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn heading(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    if w.needs_blank_line() {
        w.ensure_blank_lines(2);
    }
    // Attributes written after the heading text would bind to the last
    // word, so both the section's and the heading's own go above it.
    let mut attrs = Attributes::new();
    if let Some(section) = v.parent
        && section.kind == NodeKind::Section
        && v.is_first_child()
    {
        attrs.extend(section.attributes.iter());
    }
    attrs.extend(v.node.attributes.iter());
    block_attributes(w, &attrs);
    w.write(v.node.attr(keys::HEADING_LEVEL)).write(" ");
    v.children(r)?;
    let w = r.writer();
    w.write("\n");
    w.set_last_block(BlockKind::Heading);
    Ok(())
}

/// Unordered, ordered and task lists.
pub(super) fn list(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    if w.in_list_item() {
        // Nested list: one blank line below the item's text, nothing when
        // the list opens right after the item marker.
        w.ensure_blank_lines(1);
    } else {
        separate(w);
    }
    block_attributes(w, &v.node.attributes);

    let sparse = v.node.attr(keys::SPARSE) == "true";
    let was_sparse = w.in_sparse_list();
    w.set_in_sparse_list(sparse);
    v.children(r)?;
    let w = r.writer();
    w.set_in_sparse_list(was_sparse);
    w.set_last_block(BlockKind::List);
    Ok(())
}

/// Marker for an item of the given list. Ordered lists reuse their style
/// token for every item.
fn list_marker(list: Option<&Node>, item: &Node) -> String {
    match list.map(|l| l.kind) {
        Some(NodeKind::OrderedList) => {
            let style = list.map(|l| l.attr(keys::LIST_STYLE)).unwrap_or("");
            let style = if style.is_empty() { "1" } else { style };
            format!("{style}. ")
        }
        Some(NodeKind::TaskList) => {
            let checked = item
                .attr(keys::CLASS)
                .split_whitespace()
                .any(|c| c == "checked");
            if checked {
                "- [x] ".to_string()
            } else {
                "- [ ] ".to_string()
            }
        }
        _ => "- ".to_string(),
    }
}

pub(super) fn list_item(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let marker = list_marker(v.parent, v.node);
    let w = r.writer();
    if v.node.children.is_empty() {
        w.indent().write(marker.trim_end()).write("\n");
        if w.in_sparse_list() {
            w.ensure_blank_lines(1);
        }
        return Ok(());
    }

    // A thematic break on the marker line would read as a break itself.
    if v.node
        .children
        .first()
        .is_some_and(|c| c.kind == NodeKind::ThematicBreak)
    {
        w.indent().write(marker.trim_end()).write("\n");
    } else {
        w.indent().write(&marker);
    }
    w.push_indent(" ".repeat(marker.chars().count()));
    let was_in_item = w.in_list_item();
    w.set_in_list_item(true);
    let saved = w.last_block();
    w.set_last_block(BlockKind::None);

    v.children(r)?;

    let w = r.writer();
    if !w.is_line_start() {
        w.write("\n");
    }
    if w.in_sparse_list() {
        w.ensure_blank_lines(1);
    }
    w.set_last_block(saved);
    w.pop_indent();
    w.set_in_list_item(was_in_item);
    Ok(())
}

/// Language token from a `language-…` class.
fn code_language(attrs: &Attributes) -> &str {
    attrs
        .get(keys::CLASS)
        .split_whitespace()
        .find_map(|c| c.strip_prefix("language-"))
        .unwrap_or("")
}

/// Attributes of a code block minus the class that became the fence tag.
fn without_language(attrs: &Attributes) -> Attributes {
    attrs
        .iter()
        .map(|(k, val)| {
            if k == keys::CLASS {
                let rest: Vec<&str> = val
                    .split_whitespace()
                    .filter(|c| !c.starts_with("language-"))
                    .collect();
                (k, rest.join(" "))
            } else {
                (k, val.to_string())
            }
        })
        .filter(|(k, val)| *k != keys::CLASS || !val.is_empty())
        .collect()
}

fn fenced(r: &mut Renderer<'_>, v: Visit<'_>, info: &str, attrs: &Attributes) -> Result<()> {
    let content = v.node.flat_text();
    let fence = "`".repeat(calculate_fence_length(&content, '`'));
    let w = r.writer();
    separate(w);
    block_attributes(w, attrs);
    w.write(&fence).write(info).write("\n");
    v.children(r)?;
    let w = r.writer();
    if !w.is_line_start() {
        w.write("\n");
    }
    w.write(&fence).write("\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn code(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let info = code_language(&v.node.attributes);
    let attrs = without_language(&v.node.attributes);
    fenced(r, v, info, &attrs)
}

pub(super) fn raw(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let info = format!("={}", v.node.attr(keys::RAW_FORMAT));
    fenced(r, v, &info, &v.node.attributes)
}

pub(super) fn quote(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    block_attributes(w, &v.node.attributes);
    if v.node.children.is_empty() {
        w.write(">\n");
        w.set_last_block(BlockKind::Paragraph);
        return Ok(());
    }
    w.push_prefix("> ");
    w.set_last_block(BlockKind::None);
    v.children(r)?;
    let w = r.writer();
    w.pop_prefix();
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

/// Deepest chain of divs below `node`.
fn div_depth(node: &Node) -> usize {
    node.children
        .iter()
        .map(|c| usize::from(c.kind == NodeKind::Div) + div_depth(c))
        .max()
        .unwrap_or(0)
}

pub(super) fn div(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    // The first class names the div; any further classes stay attributes.
    let mut classes = v.node.attr(keys::CLASS).split_whitespace();
    let name = classes.next().unwrap_or("");
    let rest: Vec<&str> = classes.collect();
    let attrs: Attributes = v
        .node
        .attributes
        .iter()
        .filter(|(k, _)| *k != keys::CLASS)
        .map(|(k, val)| (k.to_string(), val.to_string()))
        .chain((!rest.is_empty()).then(|| (keys::CLASS.to_string(), rest.join(" "))))
        .collect();

    let fence = ":".repeat(3 + div_depth(v.node));
    let w = r.writer();
    separate(w);
    block_attributes(w, &attrs);
    w.write(&fence);
    if !name.is_empty() {
        w.write(" ").write(name);
    }
    w.write("\n");
    w.set_last_block(BlockKind::None);
    v.children(r)?;
    let w = r.writer();
    w.write(&fence).write("\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn thematic_break(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    block_attributes(w, &v.node.attributes);
    w.write("***\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn definition_list(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    block_attributes(w, &v.node.attributes);
    v.children(r)?;
    r.writer().set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn definition_term(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    w.write(": ");
    v.children(r)?;
    let w = r.writer();
    w.write("\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn definition_item(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    w.push_indent("  ");
    v.children(r)?;
    let w = r.writer();
    w.pop_indent();
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn reference_def(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let node = v.node;
    let w = r.writer();
    separate(w);
    block_attributes(w, &node.attributes);
    w.write("[")
        .write(node.attr(keys::REFERENCE_KEY))
        .write("]: ")
        .write(&node.text)
        .write("\n");
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn footnote_def(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    w.write("[^").write(v.node.attr(keys::REFERENCE_KEY)).write("]: ");
    w.push_indent("  ");
    w.set_last_block(BlockKind::None);
    v.children(r)?;
    let w = r.writer();
    if !w.is_line_start() {
        w.write("\n");
    }
    w.pop_indent();
    w.set_last_block(BlockKind::Paragraph);
    Ok(())
}

pub(super) fn table(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    separate(w);
    block_attributes(w, &v.node.attributes);

    let mut caption = None;
    for child in &v.node.children {
        if child.kind == NodeKind::TableCaption {
            caption = Some(child);
        } else {
            r.render_node(child, Some(v.node))?;
        }
    }
    if let Some(caption) = caption {
        r.render_node(caption, Some(v.node))?;
    }
    r.writer().set_last_block(BlockKind::Paragraph);
    Ok(())
}

/// Separator cell for a header column.
fn separator_cell(cell: &Node) -> &'static str {
    match cell.attr(keys::ALIGNMENT) {
        "left" => ":---",
        "center" => ":---:",
        "right" => "---:",
        _ => "---",
    }
}

pub(super) fn table_row(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    r.writer().indent().write("|");
    v.children(r)?;
    let w = r.writer();
    w.write("\n");

    let is_header = v
        .node
        .children
        .first()
        .is_some_and(|c| c.kind == NodeKind::TableHeader);
    if is_header {
        w.write("|");
        for cell in &v.node.children {
            w.write(separator_cell(cell)).write("|");
        }
        w.write("\n");
    }
    Ok(())
}

/// Header and body cells.
pub(super) fn table_cell(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    r.writer().write(" ");
    v.children(r)?;
    r.writer().write(" |");
    Ok(())
}

pub(super) fn table_caption(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let w = r.writer();
    w.ensure_blank_lines(1);
    w.write("^ ");
    v.children(r)?;
    r.writer().write("\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::djot::format;
    use crate::slw::SlwConfig;
    use pretty_assertions::assert_eq;

    fn render(nodes: Vec<Node>) -> String {
        let doc = Node::new(NodeKind::Document).with_children(nodes);
        format(&[doc], &SlwConfig::disabled()).unwrap()
    }

    fn para(text: &str) -> Node {
        Node::new(NodeKind::Paragraph).with_child(Node::text(text))
    }

    fn item(children: Vec<Node>) -> Node {
        Node::new(NodeKind::ListItem).with_children(children)
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(render(vec![para("One"), para("Two")]), "One\n\nTwo\n");
    }

    #[test]
    fn test_heading_levels_and_spacing() {
        let heading = Node::new(NodeKind::Heading)
            .with_attr(keys::HEADING_LEVEL, "##")
            .with_child(Node::text("Title"));
        assert_eq!(
            render(vec![para("Intro"), heading, para("Body")]),
            "Intro\n\n\n## Title\n\nBody\n"
        );
    }

    #[test]
    fn test_heading_attributes_above_heading() {
        let heading = Node::new(NodeKind::Heading)
            .with_attr(keys::HEADING_LEVEL, "#")
            .with_attr("id", "t")
            .with_child(Node::text("Title"));
        let div = Node::new(NodeKind::Div)
            .with_attr("class", "d")
            .with_child(heading);
        assert_eq!(render(vec![div]), "::: d\n{#t}\n# Title\n:::\n");
    }

    #[test]
    fn test_section_and_heading_attributes_share_one_line() {
        let section = Node::new(NodeKind::Section)
            .with_attr("id", "intro")
            .with_child(
                Node::new(NodeKind::Heading)
                    .with_attr(keys::HEADING_LEVEL, "#")
                    .with_attr("class", "x")
                    .with_child(Node::text("Intro")),
            );
        assert_eq!(render(vec![section]), "{.x #intro}\n# Intro\n");
    }

    #[test]
    fn test_section_attributes_above_heading() {
        let section = Node::new(NodeKind::Section)
            .with_attr("id", "intro")
            .with_child(
                Node::new(NodeKind::Heading)
                    .with_attr(keys::HEADING_LEVEL, "#")
                    .with_child(Node::text("Intro")),
            );
        assert_eq!(render(vec![section]), "{#intro}\n# Intro\n");
    }

    #[test]
    fn test_missing_heading_level_is_empty() {
        let heading = Node::new(NodeKind::Heading).with_child(Node::text("T"));
        assert_eq!(render(vec![heading]), " T\n");
    }

    #[test]
    fn test_unordered_list() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_child(item(vec![para("one")]))
            .with_child(item(vec![para("two")]));
        assert_eq!(render(vec![list]), "- one\n- two\n");
    }

    #[test]
    fn test_ordered_list_reuses_marker() {
        let list = Node::new(NodeKind::OrderedList)
            .with_child(item(vec![para("Fifth")]))
            .with_child(item(vec![para("Sixth")]));
        assert_eq!(render(vec![list]), "1. Fifth\n1. Sixth\n");
    }

    #[test]
    fn test_ordered_list_style_token() {
        let list = Node::new(NodeKind::OrderedList)
            .with_attr(keys::LIST_STYLE, "a")
            .with_child(item(vec![para("x")]))
            .with_child(item(vec![para("y")]));
        assert_eq!(render(vec![list]), "a. x\na. y\n");
    }

    #[test]
    fn test_task_list_markers() {
        let list = Node::new(NodeKind::TaskList)
            .with_child(item(vec![para("done")]).with_attr("class", "checked"))
            .with_child(item(vec![para("todo")]).with_attr("class", "unchecked"));
        assert_eq!(render(vec![list]), "- [x] done\n- [ ] todo\n");
    }

    #[test]
    fn test_sparse_list() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_attr(keys::SPARSE, "true")
            .with_child(item(vec![para("a")]))
            .with_child(item(vec![para("b")]));
        assert_eq!(render(vec![list, para("after")]), "- a\n\n- b\n\nafter\n");
    }

    #[test]
    fn test_nested_list_aligned_under_marker() {
        let inner = Node::new(NodeKind::UnorderedList).with_child(item(vec![para("b")]));
        let outer = Node::new(NodeKind::OrderedList)
            .with_child(item(vec![para("a"), inner]))
            .with_child(item(vec![para("c")]));
        assert_eq!(render(vec![outer]), "1. a\n\n   - b\n1. c\n");
    }

    #[test]
    fn test_list_item_with_two_paragraphs() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_child(item(vec![para("first"), para("second")]));
        assert_eq!(render(vec![list]), "- first\n\n  second\n");
    }

    #[test]
    fn test_paragraph_after_list() {
        let list = Node::new(NodeKind::UnorderedList).with_child(item(vec![para("a")]));
        assert_eq!(render(vec![list, para("after")]), "- a\n\nafter\n");
    }

    #[test]
    fn test_empty_list_item() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_child(item(vec![]))
            .with_child(item(vec![para("x")]));
        assert_eq!(render(vec![list]), "-\n- x\n");
    }

    #[test]
    fn test_blockquote_prefixing() {
        let quote = Node::new(NodeKind::Quote)
            .with_child(para("one"))
            .with_child(para("two"));
        assert_eq!(render(vec![quote]), "> one\n>\n> two\n");
    }

    #[test]
    fn test_nested_blockquote() {
        let inner = Node::new(NodeKind::Quote).with_child(para("deep"));
        let outer = Node::new(NodeKind::Quote)
            .with_child(para("top"))
            .with_child(inner);
        assert_eq!(render(vec![outer]), "> top\n>\n> > deep\n");
    }

    #[test]
    fn test_list_inside_blockquote() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_child(item(vec![para("a")]))
            .with_child(item(vec![para("b")]));
        let quote = Node::new(NodeKind::Quote).with_child(list);
        assert_eq!(render(vec![quote]), "> - a\n> - b\n");
    }

    #[test]
    fn test_blockquote_inside_list_item() {
        let quote = Node::new(NodeKind::Quote).with_child(para("q"));
        let list = Node::new(NodeKind::UnorderedList).with_child(item(vec![para("a"), quote]));
        assert_eq!(render(vec![list]), "- a\n\n  > q\n");
    }

    #[test]
    fn test_code_block_with_language() {
        let code = Node::new(NodeKind::Code)
            .with_attr("class", "language-rust")
            .with_child(Node::text("fn main() {}\n"));
        assert_eq!(render(vec![code]), "```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_code_block_fence_grows() {
        let code = Node::new(NodeKind::Code).with_child(Node::text("```\ninner\n```\n"));
        assert_eq!(render(vec![code]), "````\n```\ninner\n```\n````\n");
    }

    #[test]
    fn test_code_block_without_trailing_newline() {
        let code = Node::new(NodeKind::Code).with_child(Node::text("x"));
        assert_eq!(render(vec![para("p"), code]), "p\n\n```\nx\n```\n");
    }

    #[test]
    fn test_code_block_extra_classes_kept() {
        let code = Node::new(NodeKind::Code)
            .with_attr("class", "numbered language-py")
            .with_child(Node::text("pass\n"));
        assert_eq!(render(vec![code]), "{.numbered}\n```py\npass\n```\n");
    }

    #[test]
    fn test_raw_block() {
        let raw = Node::new(NodeKind::Raw)
            .with_attr(keys::RAW_FORMAT, "html")
            .with_child(Node::text("<hr>\n"));
        assert_eq!(render(vec![raw]), "```=html\n<hr>\n```\n");
    }

    #[test]
    fn test_div_with_class() {
        let div = Node::new(NodeKind::Div)
            .with_attr("class", "warning")
            .with_child(para("Careful."));
        assert_eq!(render(vec![div]), "::: warning\nCareful.\n:::\n");
    }

    #[test]
    fn test_nested_div_fences_grow() {
        let inner = Node::new(NodeKind::Div).with_child(para("in"));
        let outer = Node::new(NodeKind::Div)
            .with_attr("class", "outer")
            .with_child(inner);
        assert_eq!(render(vec![outer]), ":::: outer\n:::\nin\n:::\n::::\n");
    }

    #[test]
    fn test_div_extra_classes_become_attributes() {
        let div = Node::new(NodeKind::Div)
            .with_attr("class", "note wide")
            .with_attr("id", "n1")
            .with_child(para("x"));
        assert_eq!(render(vec![div]), "{.wide #n1}\n::: note\nx\n:::\n");
    }

    #[test]
    fn test_thematic_break() {
        let hr = Node::new(NodeKind::ThematicBreak);
        assert_eq!(render(vec![para("a"), hr, para("b")]), "a\n\n***\n\nb\n");
    }

    #[test]
    fn test_thematic_break_first_in_item_goes_below_marker() {
        let list = Node::new(NodeKind::UnorderedList)
            .with_child(item(vec![Node::new(NodeKind::ThematicBreak)]));
        assert_eq!(render(vec![list]), "-\n  ***\n");
    }

    #[test]
    fn test_definition_list() {
        let list = Node::new(NodeKind::DefinitionList)
            .with_child(Node::new(NodeKind::DefinitionTerm).with_child(Node::text("apple")))
            .with_child(Node::new(NodeKind::DefinitionItem).with_child(para("red fruit")))
            .with_child(Node::new(NodeKind::DefinitionTerm).with_child(Node::text("pear")))
            .with_child(Node::new(NodeKind::DefinitionItem).with_child(para("green fruit")));
        assert_eq!(
            render(vec![list]),
            ": apple\n\n  red fruit\n\n: pear\n\n  green fruit\n"
        );
    }

    #[test]
    fn test_reference_definition() {
        let def = Node::leaf(NodeKind::ReferenceDef, "https://djot.net")
            .with_attr(keys::REFERENCE_KEY, "djot");
        assert_eq!(
            render(vec![para("See [djot][]."), def]),
            "See [djot][].\n\n[djot]: https://djot.net\n"
        );
    }

    #[test]
    fn test_footnote_body_indented() {
        let note = Node::new(NodeKind::FootnoteDef)
            .with_attr(keys::REFERENCE_KEY, "1")
            .with_child(para("First."))
            .with_child(para("Second."));
        assert_eq!(render(vec![note]), "[^1]: First.\n\n  Second.\n");
    }

    fn cell(kind: NodeKind, text: &str) -> Node {
        Node::new(kind).with_child(Node::text(text))
    }

    #[test]
    fn test_table_with_header_and_alignment() {
        let header = Node::new(NodeKind::TableRow)
            .with_child(cell(NodeKind::TableHeader, "a").with_attr(keys::ALIGNMENT, "left"))
            .with_child(cell(NodeKind::TableHeader, "b").with_attr(keys::ALIGNMENT, "right"))
            .with_child(cell(NodeKind::TableHeader, "c"));
        let body = Node::new(NodeKind::TableRow)
            .with_child(cell(NodeKind::TableCell, "1"))
            .with_child(cell(NodeKind::TableCell, "2"))
            .with_child(cell(NodeKind::TableCell, "3"));
        let table = Node::new(NodeKind::Table).with_child(header).with_child(body);
        assert_eq!(
            render(vec![table]),
            "| a | b | c |\n|:---|---:|---|\n| 1 | 2 | 3 |\n"
        );
    }

    #[test]
    fn test_table_caption_last() {
        let caption = Node::new(NodeKind::TableCaption).with_child(Node::text("Totals"));
        let row = Node::new(NodeKind::TableRow).with_child(cell(NodeKind::TableCell, "x"));
        let table = Node::new(NodeKind::Table).with_child(caption).with_child(row);
        assert_eq!(render(vec![table]), "| x |\n\n^ Totals\n");
    }

    #[test]
    fn test_paragraph_attributes_on_own_line() {
        let p = para("text").with_attr("class", "lead");
        assert_eq!(render(vec![p]), "{.lead}\ntext\n");
    }

    #[test]
    fn test_paragraph_text_is_sentence_wrapped() {
        let doc = Node::new(NodeKind::Document).with_child(para(
            "This is a long sentence that exceeds the minimum length. It should be wrapped!",
        ));
        let out = format(&[doc], &SlwConfig::default()).unwrap();
        assert_eq!(
            out,
            "This is a long sentence that exceeds the minimum length.\nIt should be wrapped!\n"
        );
    }

    #[test]
    fn test_wrapped_text_in_list_item_stays_indented() {
        let config = SlwConfig {
            min_line_length: 0,
            ..SlwConfig::default()
        };
        let list = Node::new(NodeKind::OrderedList).with_child(item(vec![para("One. Two.")]));
        let doc = Node::new(NodeKind::Document).with_child(list);
        assert_eq!(format(&[doc], &config).unwrap(), "1. One.\n   Two.\n");
    }
}
