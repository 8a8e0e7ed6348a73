//! Document tree consumed by the renderer.
//!
//! The tree is produced by [`crate::parse`] (or built by hand) and is only
//! ever read by the renderer. Structural data the parser resolves, such as
//! heading levels or link targets, travels in attributes whose keys start
//! with [`INTERNAL_MARKER`]; those keys are never rendered as user-visible
//! djot attributes.

mod node;

pub use node::{Attributes, Node, NodeKind};

/// Leading character of internal attribute keys.
pub const INTERNAL_MARKER: char = '$';

/// Internal and structural attribute keys.
pub mod keys {
    /// Heading marker as a run of `#`.
    pub const HEADING_LEVEL: &str = "$HeadingLevel";
    /// Link target.
    pub const HREF: &str = "$Href";
    /// `autolink` or `email` for links written as `<…>`.
    pub const LINK_KIND: &str = "$LinkKind";
    /// Format of a raw block or raw inline.
    pub const RAW_FORMAT: &str = "$RawFormat";
    /// Label of a reference definition or footnote.
    pub const REFERENCE_KEY: &str = "$ReferenceKey";
    /// Present with value `true` on loose lists.
    pub const SPARSE: &str = "$Sparse";
    pub const INLINE_MATH: &str = "$InlineMath";
    pub const DISPLAY_MATH: &str = "$DisplayMath";
    /// Table cell alignment: `left`, `center` or `right`.
    pub const ALIGNMENT: &str = "$Alignment";

    /// Ordered list numbering token (`1`, `a`, `A`, `i`, `I`).
    pub const LIST_STYLE: &str = "type";
    pub const CLASS: &str = "class";
    pub const ID: &str = "id";
    pub const SRC: &str = "src";
    pub const ALT: &str = "alt";
}

/// Whether an attribute key is internal to the tree.
pub fn is_internal(key: &str) -> bool {
    key.starts_with(INTERNAL_MARKER)
}
