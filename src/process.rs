//! File-level formatting: read inputs, format, and write, check or print.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::{Error, Result};
use crate::slw::SlwConfig;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// What to do with formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print to standard output.
    #[default]
    Stdout,
    /// Rewrite each input file in place.
    Write,
    /// Report unformatted inputs without writing.
    Check,
    /// Write to the given file.
    Output(PathBuf),
}

/// A single input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` means standard input.
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }

    pub fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self, stdin: &mut dyn Read) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut content = String::new();
                stdin
                    .read_to_string(&mut content)
                    .map_err(|e| Error::io(STDIN_NAME, e))?;
                Ok(content)
            }
            Input::File(path) => std::fs::read_to_string(path).map_err(|e| Error::io(path, e)),
        }
    }
}

/// Resolved options for one run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub inputs: Vec<Input>,
    pub mode: Mode,
    pub slw: SlwConfig,
    /// Print the parsed tree as JSON instead of formatting.
    pub dump_ast: bool,
}

impl Options {
    /// Build options from raw flags, rejecting invalid combinations.
    pub fn new(
        files: Vec<PathBuf>,
        write: bool,
        check: bool,
        output: Option<PathBuf>,
        slw: SlwConfig,
    ) -> Result<Self> {
        let inputs: Vec<Input> = if files.is_empty() {
            vec![Input::Stdin]
        } else {
            files.into_iter().map(Input::from_arg).collect()
        };

        let mode = match (write, check, output) {
            (true, _, Some(_)) => return Err(usage("cannot use both -w/--write and -o/--output")),
            (true, true, _) | (false, true, Some(_)) => {
                return Err(usage("-c/--check cannot be combined with -w/--write or -o/--output"));
            }
            (true, false, None) => {
                if inputs.contains(&Input::Stdin) {
                    return Err(usage("-w/--write requires input files (cannot write to stdin)"));
                }
                Mode::Write
            }
            (false, true, None) => Mode::Check,
            (false, false, Some(path)) => {
                if inputs.len() != 1 {
                    return Err(usage("-o/--output requires a single input file"));
                }
                Mode::Output(path)
            }
            (false, false, None) => Mode::Stdout,
        };

        Ok(Self {
            inputs,
            mode,
            slw,
            dump_ast: false,
        })
    }
}

fn usage(message: &str) -> Error {
    Error::Usage(message.to_string())
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Inputs whose content differs from the formatted output (check mode).
    pub unformatted: Vec<String>,
    /// Files rewritten in write mode.
    pub rewritten: Vec<PathBuf>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.unformatted.is_empty()
    }
}

/// Run over every input, writing to `stdout`/`stderr` as the mode requires.
pub fn run(
    options: &Options,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<Report> {
    let mut report = Report::default();
    for input in &options.inputs {
        let name = input.name();
        let source = input.read(stdin)?;
        log::debug!("formatting {name} ({} bytes)", source.len());

        if options.dump_ast {
            let doc = crate::parse::parse(&source);
            let json = serde_json::to_string_pretty(&doc)?;
            writeln!(stdout, "{json}").map_err(|e| Error::io("<stdout>", e))?;
            continue;
        }

        let formatted = crate::format_str(&source, &options.slw)?;
        match &options.mode {
            Mode::Stdout => {
                stdout
                    .write_all(formatted.as_bytes())
                    .map_err(|e| Error::io("<stdout>", e))?;
            }
            Mode::Output(path) => write_file(path, &formatted)?,
            Mode::Write => {
                if let Input::File(path) = input
                    && formatted != source
                {
                    write_file(path, &formatted)?;
                    report.rewritten.push(path.clone());
                } else {
                    log::debug!("{name} already formatted");
                }
            }
            Mode::Check => {
                if formatted != source {
                    writeln!(stderr, "{name}: not formatted")
                        .and_then(|()| write!(stderr, "{}", unified_diff(&name, &source, &formatted)))
                        .map_err(|e| Error::io("<stderr>", e))?;
                    report.unformatted.push(name);
                }
            }
        }
    }
    Ok(report)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    log::debug!("writing {}", path.display());
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Unified diff of `original` against `formatted`, three lines of context.
pub fn unified_diff(name: &str, original: &str, formatted: &str) -> String {
    TextDiff::from_lines(original, formatted)
        .unified_diff()
        .context_radius(3)
        .header(name, &format!("{name} (formatted)"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn options(names: &[&str], write: bool, check: bool, output: Option<&str>) -> Result<Options> {
        Options::new(
            files(names),
            write,
            check,
            output.map(PathBuf::from),
            SlwConfig::default(),
        )
    }

    #[test]
    fn test_no_files_reads_stdin() {
        let opts = options(&[], false, false, None).unwrap();
        assert_eq!(opts.inputs, vec![Input::Stdin]);
        assert_eq!(opts.mode, Mode::Stdout);
    }

    #[test]
    fn test_dash_is_stdin() {
        let opts = options(&["-", "a.dj"], false, true, None).unwrap();
        assert_eq!(opts.inputs[0], Input::Stdin);
        assert_eq!(opts.inputs[1], Input::File(PathBuf::from("a.dj")));
    }

    #[test]
    fn test_write_requires_files() {
        let err = options(&[], true, false, None).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert!(options(&["-"], true, false, None).is_err());
        assert_eq!(options(&["a.dj"], true, false, None).unwrap().mode, Mode::Write);
    }

    #[test]
    fn test_write_and_output_exclusive() {
        let err = options(&["a.dj"], true, false, Some("b.dj")).unwrap_err();
        assert!(err.to_string().contains("-o/--output"));
    }

    #[test]
    fn test_check_excludes_write_and_output() {
        assert!(options(&["a.dj"], true, true, None).is_err());
        assert!(options(&["a.dj"], false, true, Some("b.dj")).is_err());
        assert_eq!(options(&["a.dj"], false, true, None).unwrap().mode, Mode::Check);
    }

    #[test]
    fn test_output_requires_single_input() {
        let err = options(&["a.dj", "b.dj"], false, false, Some("out.dj")).unwrap_err();
        assert!(err.to_string().contains("single input file"));
        let ok = options(&["a.dj"], false, false, Some("out.dj")).unwrap();
        assert_eq!(ok.mode, Mode::Output(PathBuf::from("out.dj")));
    }

    #[test]
    fn test_stdout_mode_from_stdin() {
        let opts = options(&[], false, false, None).unwrap();
        let mut stdin = "*strong*\n\n\n".as_bytes();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run(&opts, &mut stdin, &mut out, &mut err).unwrap();
        assert!(report.is_clean());
        assert_eq!(String::from_utf8(out).unwrap(), "*strong*\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_check_mode_reports_diff() {
        let opts = options(&["-"], false, true, None).unwrap();
        let mut stdin = "5. Fifth\n6. Sixth\n".as_bytes();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run(&opts, &mut stdin, &mut out, &mut err).unwrap();
        assert_eq!(report.unformatted, vec![STDIN_NAME.to_string()]);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("<stdin>: not formatted\n"));
        assert!(err.contains("-5. Fifth"));
        assert!(err.contains("+1. Fifth"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_mode_clean_input() {
        let opts = options(&[], false, true, None).unwrap();
        let mut stdin = "Hello.\n".as_bytes();
        let mut err = Vec::new();
        let report = run(&opts, &mut stdin, &mut Vec::new(), &mut err).unwrap();
        assert!(report.is_clean());
        assert!(err.is_empty());
    }

    #[test]
    fn test_dump_ast() {
        let mut opts = options(&[], false, false, None).unwrap();
        opts.dump_ast = true;
        let mut stdin = "hi\n".as_bytes();
        let mut out = Vec::new();
        run(&opts, &mut stdin, &mut out, &mut Vec::new()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["kind"], "Document");
        assert_eq!(json["children"][0]["kind"], "Paragraph");
    }

    #[test]
    fn test_unified_diff_headers() {
        let diff = unified_diff("a.dj", "x\n", "y\n");
        assert!(diff.contains("--- a.dj"));
        assert!(diff.contains("+++ a.dj (formatted)"));
        assert!(diff.contains("-x"));
        assert!(diff.contains("+y"));
    }
}
