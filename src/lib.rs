//! # djot-fmt
//!
//! A canonical formatter for [djot](https://djot.net) markup.
//!
//! ## Features
//!
//! - Renders a djot document tree back to normalized djot text
//! - Semantic line wrapping: one sentence per line, with abbreviation
//!   awareness
//! - Normalized list markers, fences and attribute order
//! - Every output ends in exactly one newline
//!
//! ## Quick Start
//!
//! ```
//! use djot_fmt::{SlwConfig, format_str};
//!
//! let out = format_str("5. Fifth\n6. Sixth\n", &SlwConfig::default()).unwrap();
//! assert_eq!(out, "1. Fifth\n1. Sixth\n");
//! ```
//!
//! ## Working with Trees
//!
//! Trees can also be built by hand and rendered with [`format`]:
//!
//! ```
//! use djot_fmt::tree::{Node, NodeKind};
//! use djot_fmt::{SlwConfig, format};
//!
//! let doc = Node::new(NodeKind::Document).with_child(
//!     Node::new(NodeKind::Quote)
//!         .with_child(Node::new(NodeKind::Paragraph).with_child(Node::text("quoted"))),
//! );
//! assert_eq!(format(&[doc], &SlwConfig::default()).unwrap(), "> quoted\n");
//! ```

pub mod config;
pub mod djot;
pub mod error;
pub mod parse;
pub mod slw;
pub mod tree;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod process;

pub use djot::{Registry, format};
pub use error::{Error, Result};
pub use slw::{SlwConfig, wrap};
pub use tree::{Attributes, Node, NodeKind};

/// Parse djot source and render it canonically.
pub fn format_str(source: &str, config: &SlwConfig) -> Result<String> {
    let doc = parse::parse(source);
    djot::format(std::slice::from_ref(&doc), config)
}
