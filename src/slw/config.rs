//! Sentence wrapping configuration.

use std::collections::HashSet;

/// Built-in abbreviations that never end a sentence.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // Titles
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Sr", "Jr",
    // Time
    "a.m", "p.m",
    // Latin
    "e.g", "i.e", "etc", "vs", "cf",
    // Academic
    "Ph.D", "M.D", "B.A", "M.A", "B.S", "M.S",
];

pub const DEFAULT_MARKERS: &str = ".!?";
pub const DEFAULT_MIN_LINE_LENGTH: usize = 40;
pub const DEFAULT_MAX_LINE_WIDTH: usize = 88;

/// Semantic line wrap settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlwConfig {
    pub enabled: bool,
    /// Characters that end a sentence.
    pub markers: String,
    /// Lines shorter than this are left alone; `0` wraps every line.
    pub min_line_length: usize,
    /// Accepted for compatibility; hard wrapping is not performed.
    pub max_line_width: usize,
    /// Normalized abbreviations, see [`normalize_abbreviation`].
    pub abbreviations: HashSet<String>,
}

impl Default for SlwConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            markers: DEFAULT_MARKERS.to_string(),
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            abbreviations: default_abbreviations(),
        }
    }
}

impl SlwConfig {
    /// Configuration with wrapping turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Add abbreviations on top of the current set.
    pub fn add_abbreviations<I, S>(&mut self, abbreviations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations.extend(
            abbreviations
                .into_iter()
                .map(|a| normalize_abbreviation(a.as_ref())),
        );
    }

    /// Case-insensitive membership test that ignores a trailing period.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        !word.is_empty() && self.abbreviations.contains(&normalize_abbreviation(word))
    }
}

/// Lower-case an abbreviation and strip one trailing period.
pub fn normalize_abbreviation(word: &str) -> String {
    let word = word.strip_suffix('.').unwrap_or(word);
    word.to_lowercase()
}

/// The built-in title, time, Latin and academic abbreviations.
pub fn default_abbreviations() -> HashSet<String> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|a| normalize_abbreviation(a))
        .collect()
}
