//! djot-fmt - canonical djot formatter

use std::process::ExitCode;

use clap::Parser;

use djot_fmt::cli::Cli;
use djot_fmt::process;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!("error: {} file(s) not formatted", report.unformatted.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> djot_fmt::Result<process::Report> {
    let cwd = std::env::current_dir().map_err(|e| djot_fmt::Error::Io {
        path: ".".into(),
        source: e,
    })?;
    let options = cli.into_options(&cwd)?;
    process::run(
        &options,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
