//! Delimiter sizing and escaping for djot output.

/// Length of the longest run of `ch` in `content`.
fn longest_run(content: &str, ch: char) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;

    for c in content.chars() {
        if c == ch {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }

    max_run
}

/// Calculate the minimum fence length needed for a fenced block.
///
/// Returns the smallest number of fence characters (at least 3) that
/// doesn't appear as a run in the content.
///
/// # Examples
///
/// ```
/// use djot_fmt::djot::calculate_fence_length;
///
/// assert_eq!(calculate_fence_length("let x = 1;", '`'), 3);
/// assert_eq!(calculate_fence_length("```rust\ncode\n```", '`'), 4);
/// ```
pub fn calculate_fence_length(content: &str, fence_char: char) -> usize {
    longest_run(content, fence_char).max(2) + 1
}

/// Calculate the minimum backtick count needed for inline verbatim.
///
/// Returns the smallest number of backticks (at least 1) that doesn't
/// appear as a run in the content.
///
/// # Examples
///
/// ```
/// use djot_fmt::djot::calculate_inline_code_ticks;
///
/// assert_eq!(calculate_inline_code_ticks("code"), 1);
/// assert_eq!(calculate_inline_code_ticks("a ` b"), 2);
/// assert_eq!(calculate_inline_code_ticks("a `` b"), 3);
/// ```
pub fn calculate_inline_code_ticks(content: &str) -> usize {
    longest_run(content, '`') + 1
}

/// Wrap verbatim content in the shortest safe backtick delimiter.
///
/// Content that starts or ends with a backtick is padded with one space on
/// each side so the delimiter stays unambiguous.
pub fn delimit_verbatim(content: &str) -> String {
    let ticks = "`".repeat(calculate_inline_code_ticks(content));
    let spacer = if content.starts_with('`') || content.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{ticks}{spacer}{content}{spacer}{ticks}")
}

/// Escape an attribute value for use inside double quotes.
///
/// Only `"` is escaped.
pub fn escape_attribute_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
