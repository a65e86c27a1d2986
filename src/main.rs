//! Wordle Guesses - CLI
//!
//! Lists candidate Wordle guesses by substituting letters into a template.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use log::{LevelFilter, debug};
use std::path::Path;
use std::process::ExitCode;
use wordle_guesses::{
    commands::{GuessConfig, list_guesses},
    core::OutputCase,
    output::{DEFAULT_GUESSES_PER_LINE, print_error, print_guess_lines},
};

#[derive(Debug, Parser)]
#[command(
    name = "wordle_guesses",
    about = "List candidate Wordle guesses from a template",
    long_about = "When playing Wordle, it is useful to write out lists of candidate words. \
        This can be laborious, and a real hindrance to those with diminished dexterity. \
        This tool lists those candidate guesses for you.\n\n\
        The template marks the letter to change with a '.'; every letter of the alphabet is \
        substituted there in turn to produce a guess. Exclude the letters Wordle has ruled \
        out with --exclude, or give the exact letters to try with --include.",
    after_help = "Example: wordle_guesses -e risengycuk .a_am",
    version,
    disable_version_flag = true
)]
struct Cli {
    /// 5-character template of letters, any number of '_' and a single '.' (e.g. '.a_am')
    template: Option<String>,

    /// Letters to exclude when generating candidate guesses
    #[arg(short = 'e', long, value_name = "EXCLUDED_LETTERS")]
    exclude: Option<String>,

    /// Explicit letters to include when generating candidate guesses
    #[arg(short = 'i', long, value_name = "INCLUDED_LETTERS")]
    include: Option<String>,

    /// Case of the candidate guesses: title (default), upper, lower
    #[arg(short, long, default_value = "title", value_parser = OutputCase::NAMES)]
    case: String,

    /// Number of guesses per line of output
    #[arg(
        short = 'n',
        long = "num_guesses",
        default_value_t = DEFAULT_GUESSES_PER_LINE as i64,
        allow_negative_numbers = true
    )]
    num_guesses: i64,

    /// Log parsed arguments and generation steps to stderr
    #[arg(long)]
    debug: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    fn into_config(self) -> GuessConfig {
        GuessConfig {
            template: self.template,
            exclude: self.exclude,
            include: self.include,
            case: OutputCase::from_name(&self.case),
            num_guesses: self.num_guesses,
        }
    }
}

/// Program name for diagnostics: the file name of argv[0]
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || "wordle_guesses".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
}

fn main() -> ExitCode {
    let program = program_name();

    match run() {
        Ok(code) => code,
        Err(err) => {
            print_error(&program, &err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Bare invocation shows usage rather than a terse error
    if std::env::args_os().len() <= 1 {
        Cli::command()
            .print_help()
            .context("failed to print help")?;
        return Ok(ExitCode::FAILURE);
    }

    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("args={cli:?}");

    let result = list_guesses(&cli.into_config())?;
    print_guess_lines(&result.lines).context("failed to write guesses")?;

    Ok(ExitCode::SUCCESS)
}
