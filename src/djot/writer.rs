//! Output state for the renderer.
//!
//! The writer accumulates output and owns all layout state: the margin
//! stack (list indents and blockquote prefixes, in nesting order), the kind
//! of the last block written, and the flags that gate sentence wrapping and
//! list item spacing.

/// Kind of the last block written; drives blank-line insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
    #[default]
    None,
    Paragraph,
    List,
    Heading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarginKind {
    Indent,
    Prefix,
}

#[derive(Debug, Clone)]
struct Margin {
    kind: MarginKind,
    text: String,
}

/// Mutable output accumulator. One per [`format`](super::format) call.
#[derive(Debug)]
pub struct Writer {
    buffer: String,
    margins: Vec<Margin>,
    last_block: BlockKind,
    in_paragraph: bool,
    in_list_item: bool,
    in_sparse_list: bool,
    line_start: bool,
    /// Blank lines written since the last line with content.
    blank_lines: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            margins: Vec::new(),
            last_block: BlockKind::None,
            in_paragraph: false,
            in_list_item: false,
            in_sparse_list: false,
            line_start: true,
            blank_lines: 0,
        }
    }

    fn margin(&self) -> String {
        self.margins.iter().map(|m| m.text.as_str()).collect()
    }

    /// Append text, decorating the start of every line with the current
    /// margin. Blank lines get the margin with trailing whitespace removed.
    pub fn write(&mut self, text: &str) -> &mut Self {
        for piece in text.split_inclusive('\n') {
            if self.line_start {
                let margin = self.margin();
                if piece == "\n" {
                    self.buffer.push_str(margin.trim_end());
                    self.blank_lines += 1;
                } else {
                    self.buffer.push_str(&margin);
                    self.blank_lines = 0;
                }
            }
            self.buffer.push_str(piece);
            self.line_start = piece.ends_with('\n');
        }
        self
    }

    /// Write the margin if the cursor sits at the start of a line.
    ///
    /// Used before list markers so the marker lands under its parent's text.
    pub fn indent(&mut self) -> &mut Self {
        if self.line_start {
            let margin = self.margin();
            self.buffer.push_str(&margin);
            self.line_start = false;
            self.blank_lines = 0;
        }
        self
    }

    pub fn push_indent(&mut self, indent: impl Into<String>) {
        self.margins.push(Margin {
            kind: MarginKind::Indent,
            text: indent.into(),
        });
    }

    pub fn pop_indent(&mut self) {
        self.pop_margin(MarginKind::Indent);
    }

    /// Push a line prefix such as `"> "`.
    ///
    /// When the cursor is mid-line (a blockquote opening right after a list
    /// marker) the prefix is written immediately for the current line.
    pub fn push_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !self.line_start {
            self.buffer.push_str(&prefix);
        }
        self.margins.push(Margin {
            kind: MarginKind::Prefix,
            text: prefix,
        });
    }

    pub fn pop_prefix(&mut self) {
        self.pop_margin(MarginKind::Prefix);
    }

    fn pop_margin(&mut self, kind: MarginKind) {
        if let Some(pos) = self.margins.iter().rposition(|m| m.kind == kind) {
            self.margins.remove(pos);
        }
    }

    /// Write newlines until at least `count` blank lines separate the
    /// cursor from the last content line. No-op mid-line.
    pub fn ensure_blank_lines(&mut self, count: usize) {
        if !self.line_start {
            return;
        }
        while self.blank_lines < count {
            self.write("\n");
        }
    }

    /// Whether the previous sibling block requires separation.
    pub fn needs_blank_line(&self) -> bool {
        matches!(
            self.last_block,
            BlockKind::Paragraph | BlockKind::List | BlockKind::Heading
        )
    }

    pub fn is_line_start(&self) -> bool {
        self.line_start
    }

    pub fn last_block(&self) -> BlockKind {
        self.last_block
    }

    pub fn set_last_block(&mut self, kind: BlockKind) {
        self.last_block = kind;
    }

    pub fn in_paragraph(&self) -> bool {
        self.in_paragraph
    }

    pub fn set_in_paragraph(&mut self, value: bool) {
        self.in_paragraph = value;
    }

    pub fn in_list_item(&self) -> bool {
        self.in_list_item
    }

    pub fn set_in_list_item(&mut self, value: bool) {
        self.in_list_item = value;
    }

    pub fn in_sparse_list(&self) -> bool {
        self.in_sparse_list
    }

    pub fn set_in_sparse_list(&mut self, value: bool) {
        self.in_sparse_list = value;
    }

    /// Finish the document: exactly one trailing newline.
    pub fn finish(self) -> String {
        let mut out = self.buffer;
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}
