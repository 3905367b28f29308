//! Reads an HTML fragment from stdin, replaces matches in its text, and
//! writes the result to stdout.
//!
//! ```text
//! echo '<p>hi :meow:!</p>' | replace_stdin ':meow:' '<b>cat</b>'
//! echo 'Meow MEOW' | replace_stdin --regex '/meow/gi' purr
//! ```

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use replace_in_html::{replace_in_html_bytes_with_options, Options, Pattern, Search};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "replace_stdin", about = "Replace text inside an HTML fragment read from stdin")]
struct Args {
    /// Text to find (literal unless --regex is given).
    search: String,

    /// Markup inserted in place of every match.
    replacement: String,

    /// Treat SEARCH as a regular expression, either `/source/flags` or a bare
    /// expression (first match per text node).
    #[arg(long)]
    regex: bool,

    /// Tag whose text is left alone. Repeat to list several; replaces the
    /// default script/style/textarea list.
    #[arg(long = "skip-tag", value_name = "TAG")]
    skip_tags: Vec<String>,

    /// Log debug information to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("replace_stdin: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let search = if !args.regex {
        Search::from(args.search)
    } else if args.search.starts_with('/') {
        Search::from(Pattern::parse(&args.search)?)
    } else {
        Search::from(Pattern::new(&args.search)?)
    };

    let mut options = Options::default();
    if !args.skip_tags.is_empty() {
        options.skip_tags = args.skip_tags;
    }

    let output = replace_in_html_bytes_with_options(&input, search, args.replacement, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
