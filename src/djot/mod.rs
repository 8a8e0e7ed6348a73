//! Document tree → canonical djot.
//!
//! The renderer walks the tree depth-first and dispatches every node through
//! a data-driven [`Registry`]. Handlers write into a single [`Writer`] that
//! owns all layout state for one [`format`] call.
//!
//! ## Design Notes
//!
//! - **Normalized markers**: every ordered list item uses the list's style
//!   token (`1.` by default), whatever the source numbering was.
//! - **Margins**: list indents and blockquote prefixes live on one stack in
//!   nesting order; blank lines get the margin with trailing spaces removed.
//! - **Fatal gaps**: a kind without a handler is an
//!   [`Error::UnsupportedNode`](crate::Error::UnsupportedNode), never a
//!   silent drop.
//! - **Exactly one trailing newline** on every rendered document.

mod attributes;
mod blocks;
mod escape;
mod inlines;
mod render;
mod writer;

pub use attributes::{render_attributes, render_attributes_except};
pub use escape::{
    calculate_fence_length, calculate_inline_code_ticks, delimit_verbatim, escape_attribute_value,
};
pub use render::{Delimiters, Handler, HandlerFn, Registry, Renderer, Visit, format, format_with};
pub use writer::{BlockKind, Writer};
