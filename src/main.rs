use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use ordered_tree::error::{LoadError, LoadResult, SuiteError};
use ordered_tree::loader;
use ordered_tree::report::{Report, INTEGER_PROBES, STRING_PROBES};

/// Cannot open input (sysexits.h).
const NOINPUT: i32 = 66;
/// Input/output error (sysexits.h).
const IOERR: i32 = 74;

/// Builds an integer tree and a string tree from files and reports what every
/// query and traversal says about them.
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Whitespace separated integers. Prompted for when not given.
    #[arg(short, long, env = "ORDERED_TREE_INTEGERS")]
    integers: Option<PathBuf>,

    /// One string per line. Prompted for when not given.
    #[arg(short, long, env = "ORDERED_TREE_STRINGS")]
    strings: Option<PathBuf>,

    /// More logging on stderr, up to -ddd. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let result = run(
        &cli,
        io::stdout().lock(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
    );
    process::exit(exit_code(result));
}

/// 0 when at least one suite loaded its keys, `NOINPUT` when none did, and
/// `IOERR` when the report couldn't be written.
fn exit_code(result: io::Result<usize>) -> i32 {
    match result {
        Ok(0) => NOINPUT,
        Ok(_) => 0,
        Err(e) => {
            error!(%e, "Report failed");
            eprintln!("Error: {}", e);
            IOERR
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
    debug!(%level, "Logging initialised");
}

/// Runs both suites, writing the report to `out`. Paths missing from `cli` are
/// asked for on `prompt` and read from `input`. Returns how many suites loaded
/// their keys.
fn run<W, R, P>(cli: &Cli, out: W, input: &mut R, prompt: &mut P) -> io::Result<usize>
where
    W: Write,
    R: BufRead,
    P: Write,
{
    let mut report = Report::new(out);
    let mut loaded = 0;

    report.intro()?;

    let integers = report.suite(
        "INTEGER",
        || {
            let path = path_or_prompt(&cli.integers, "integer", &mut *input, &mut *prompt)?;
            loader::load_tokens::<i32>(path)
        },
        &INTEGER_PROBES,
    );
    loaded += finished(integers)?;

    let strings = report.suite(
        "STRING",
        || loader::load_lines(path_or_prompt(&cli.strings, "string", input, prompt)?),
        &STRING_PROBES.map(String::from),
    );
    loaded += finished(strings)?;

    report.outro()?;
    Ok(loaded)
}

/// A load failure skips the rest of that suite but isn't fatal. Failing to
/// write the report is.
fn finished<K>(result: Result<K, SuiteError>) -> io::Result<usize> {
    match result {
        Ok(_) => Ok(1),
        Err(SuiteError::Load(e)) => {
            error!(%e, "Skipping suite");
            eprintln!("{}", e);
            Ok(0)
        }
        Err(SuiteError::Write(e)) => Err(e),
    }
}

/// The path given on the command line, or else the first word of the first
/// non-blank line read from `input` after asking for it on `prompt`.
fn path_or_prompt<R, P>(
    path: &Option<PathBuf>,
    kind: &'static str,
    input: &mut R,
    prompt: &mut P,
) -> LoadResult<PathBuf>
where
    R: BufRead,
    P: Write,
{
    if let Some(path) = path {
        return Ok(path.clone());
    }

    let _ = write!(prompt, "\nEnter {} file: ", kind).and_then(|()| prompt.flush());

    for line in input.lines() {
        let line = line.map_err(|source| LoadError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if let Some(word) = line.split_whitespace().next() {
            return Ok(PathBuf::from(word));
        }
    }
    Err(LoadError::MissingPath(kind))
}
