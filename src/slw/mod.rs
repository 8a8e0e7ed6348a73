//! Semantic line wrapping: one sentence per line.
//!
//! Prose is reflowed so every sentence starts on its own line, which keeps
//! version-control diffs local to the sentence that changed. Existing line
//! breaks are kept; each line is wrapped independently.
//!
//! A position is a sentence boundary when the character is one of the
//! configured markers, the next character is whitespace, and the word in
//! front of the marker is not a known abbreviation. The word is the maximal
//! run of letters and periods before the marker, so `Ph.D.` looks up `ph.d`.

mod config;

pub use config::{
    DEFAULT_MARKERS, DEFAULT_MAX_LINE_WIDTH, DEFAULT_MIN_LINE_LENGTH, SlwConfig,
    default_abbreviations, normalize_abbreviation,
};

/// Wrap `text` so each sentence sits on its own line.
///
/// Returns the input unchanged when wrapping is disabled or the text is
/// empty. Blank and whitespace-only lines pass through verbatim.
///
/// # Examples
///
/// ```
/// use djot_fmt::slw::{SlwConfig, wrap};
///
/// let config = SlwConfig { min_line_length: 0, ..SlwConfig::default() };
/// assert_eq!(wrap("Short sentence. Another one.", &config), "Short sentence.\nAnother one.");
/// ```
pub fn wrap(text: &str, config: &SlwConfig) -> String {
    if !config.enabled || text.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() {
            out.push_str(line);
        } else {
            wrap_line(line, config, &mut out);
        }
    }
    out
}

fn wrap_line(line: &str, config: &SlwConfig, out: &mut String) {
    // Threshold is in bytes.
    if config.min_line_length > 0 && line.len() < config.min_line_length {
        out.push_str(line);
        return;
    }

    let chars: Vec<char> = line.chars().collect();

    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        if is_boundary(&chars, i, config) {
            let mut next = i + 1;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }
            // Trailing whitespace only: the sentence runs to the end as-is.
            if next < chars.len() {
                out.extend(&chars[start..=i]);
                out.push('\n');
                start = next;
                i = next;
                continue;
            }
        }
        i += 1;
    }
    out.extend(&chars[start..]);
}

fn is_boundary(chars: &[char], pos: usize, config: &SlwConfig) -> bool {
    config.markers.contains(chars[pos])
        && chars.get(pos + 1).is_some_and(|c| c.is_whitespace())
        && !ends_with_abbreviation(chars, pos, config)
}

/// Whether the word right before the marker at `marker_pos` is an
/// abbreviation.
fn ends_with_abbreviation(chars: &[char], marker_pos: usize, config: &SlwConfig) -> bool {
    let mut start = marker_pos;
    while start > 0 && (chars[start - 1].is_alphabetic() || chars[start - 1] == '.') {
        start -= 1;
    }
    let word: String = chars[start..marker_pos].iter().collect();
    config.is_abbreviation(&word)
}
