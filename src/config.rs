//! Configuration file support.
//!
//! Settings are layered: built-in defaults, then the config file, then
//! command-line flags. The file is TOML with a single `[slw]` table:
//!
//! ```toml
//! [slw]
//! enabled = true
//! markers = ".!?"
//! min_line_length = 40
//! max_line_width = 88
//! abbreviations = ["approx", "St"]
//! ```
//!
//! `abbreviations` extends the built-in list rather than replacing it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slw::SlwConfig;

/// File names searched for, in order, when no explicit path is given.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["djot-fmt.toml", ".djot-fmt.toml"];

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub slw: SlwSection,
}

/// The `[slw]` table. Absent keys keep the lower layer's value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlwSection {
    pub enabled: Option<bool>,
    pub markers: Option<String>,
    pub min_line_length: Option<usize>,
    pub max_line_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abbreviations: Vec<String>,
}

impl Config {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file. A missing file is an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content =
            std::fs::read_to_string(config_path).map_err(|source| Error::io(config_path, source))?;
        Self::from_toml(&content).map_err(|source| Error::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Find and load the first config file in `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<(PathBuf, Self)>> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.as_ref().join(name);
            if path.is_file() {
                let config = Self::load_from_path(&path)?;
                return Ok(Some((path, config)));
            }
        }
        Ok(None)
    }

    /// Overlay this file's settings onto `slw`.
    pub fn apply(&self, slw: &mut SlwConfig) {
        let section = &self.slw;
        if let Some(enabled) = section.enabled {
            slw.enabled = enabled;
        }
        if let Some(markers) = &section.markers {
            slw.markers = markers.clone();
        }
        if let Some(min) = section.min_line_length {
            slw.min_line_length = min;
        }
        if let Some(max) = section.max_line_width {
            slw.max_line_width = max;
        }
        slw.add_abbreviations(&section.abbreviations);
    }
}
