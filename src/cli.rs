//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::error::Result;
use crate::process::Options;
use crate::slw::SlwConfig;

#[derive(Debug, Parser)]
#[command(name = "djot-fmt")]
#[command(version, about = "Automatically format djot files", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "EXAMPLES:
    djot-fmt notes.dj               Print formatted notes.dj
    djot-fmt -w *.dj                Format files in place
    djot-fmt -c docs/*.dj           Exit 1 if any file needs formatting
    cat notes.dj | djot-fmt         Format standard input")]
pub struct Cli {
    /// Input files; none or `-` reads standard input
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Write result to source files instead of stdout
    #[arg(short, long)]
    pub write: bool,

    /// Check if files are formatted; print a diff and exit 1 if not
    #[arg(short, long)]
    pub check: bool,

    /// Write output to FILE (single input only)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable semantic line wrapping
    #[arg(long)]
    pub no_wrap_sentences: bool,

    /// Characters that end a sentence
    #[arg(long, value_name = "TEXT")]
    pub slw_markers: Option<String>,

    /// Maximum line width (accepted, not enforced)
    #[arg(long, value_name = "N")]
    pub slw_wrap: Option<usize>,

    /// Minimum line length before wrapping; 0 wraps every line
    #[arg(long, value_name = "N")]
    pub slw_min_line: Option<usize>,

    /// Config file (default: djot-fmt.toml or .djot-fmt.toml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the parsed document tree as JSON
    #[arg(long)]
    pub ast: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Resolve wrap settings: defaults, then the config file, then flags.
    pub fn slw_config(&self, cwd: &Path) -> Result<SlwConfig> {
        let mut slw = SlwConfig::default();

        let file = match &self.config {
            Some(path) => Some((path.clone(), Config::load_from_path(path)?)),
            None => Config::discover(cwd)?,
        };
        if let Some((path, config)) = file {
            log::debug!("using config file {}", path.display());
            config.apply(&mut slw);
        }

        if self.no_wrap_sentences {
            slw.enabled = false;
        }
        if let Some(markers) = &self.slw_markers {
            slw.markers = markers.clone();
        }
        if let Some(width) = self.slw_wrap {
            slw.max_line_width = width;
        }
        if let Some(min) = self.slw_min_line {
            slw.min_line_length = min;
        }
        Ok(slw)
    }

    /// Turn parsed arguments into run options.
    pub fn into_options(self, cwd: &Path) -> Result<Options> {
        let slw = self.slw_config(cwd)?;
        let mut options = Options::new(self.files, self.write, self.check, self.output, slw)?;
        options.dump_ast = self.ast;
        Ok(options)
    }
}
