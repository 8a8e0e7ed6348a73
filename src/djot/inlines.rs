//! Inline handlers that need more than a fixed delimiter pair.

use crate::error::Result;
use crate::slw;
use crate::tree::keys;

use super::attributes::{render_attributes, render_attributes_except};
use super::escape::delimit_verbatim;
use super::render::{Renderer, Visit};

/// Text leaf. Prose inside a paragraph goes through the sentence wrapper.
pub(super) fn text(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let config = r.slw();
    let w = r.writer();
    if w.in_paragraph() && config.enabled {
        w.write(&slw::wrap(&v.node.text, config));
    } else {
        w.write(&v.node.text);
    }
    Ok(())
}

pub(super) fn link(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let node = v.node;
    match node.attr(keys::LINK_KIND) {
        "autolink" | "email" => {
            r.writer().write("<").write(&node.flat_text()).write(">");
        }
        _ => {
            r.writer().write("[");
            v.children(r)?;
            r.writer().write("](").write(node.attr(keys::HREF)).write(")");
        }
    }
    let attrs = render_attributes(&node.attributes);
    r.writer().write(&attrs);
    Ok(())
}

/// Inline code, math and raw inline content.
pub(super) fn verbatim(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let node = v.node;
    let body = delimit_verbatim(&node.flat_text());
    let w = r.writer();
    if node.attributes.contains(keys::DISPLAY_MATH) {
        w.write("$$");
    } else if node.attributes.contains(keys::INLINE_MATH) {
        w.write("$");
    }
    w.write(&body);
    let format = node.attr(keys::RAW_FORMAT);
    if !format.is_empty() {
        w.write("{=").write(format).write("}");
    }
    w.write(&render_attributes(&node.attributes));
    Ok(())
}

/// Image: `![alt](src)`. Never visits children.
pub(super) fn image(r: &mut Renderer<'_>, v: Visit<'_>) -> Result<()> {
    let node = v.node;
    let attrs = render_attributes_except(&node.attributes, &[keys::SRC, keys::ALT]);
    r.writer()
        .write("![")
        .write(node.attr(keys::ALT))
        .write("](")
        .write(node.attr(keys::SRC))
        .write(")")
        .write(&attrs);
    Ok(())
}
