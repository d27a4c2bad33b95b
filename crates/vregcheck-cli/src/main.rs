//! vregcheck CLI
//!
//! Reads an IR dump from FILE or standard input and prints the first
//! function that uses registers without declaring them. Logs and
//! explanations go to stderr; stdout only ever carries the report.

use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use vregcheck_error::{Diagnostic, DiagnosticRenderer, SourceCache};
use vregcheck_lint::{check, Input, Report};

/// Exit code when the dump could not be read
const INPUT_ERROR_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "vregcheck")]
#[command(version)]
#[command(about = "Flags virtual registers used without a declaration in an IR dump", long_about = None)]
struct Cli {
    /// IR dump to check (standard input unless exactly one is given)
    #[arg(value_name = "FILE", num_args = 0..)]
    input: Vec<PathBuf>,

    /// Explain each flagged register on stderr with its source line
    #[arg(long)]
    explain: bool,

    /// Disable colors in explanations and error messages
    #[arg(long)]
    no_color: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn use_colors(&self) -> bool {
        !self.no_color && io::stderr().is_terminal()
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = run(&cli);
    std::process::exit(code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> i32 {
    let input = Input::from_args(cli.input.clone());

    let source = match input.load() {
        Ok(source) => source,
        Err(e) => {
            let cache = SourceCache::new();
            let renderer = DiagnosticRenderer::new(&cache).with_colors(cli.use_colors());
            eprintln!("{}", renderer.render(&Diagnostic::from(e)));
            return INPUT_ERROR_EXIT_CODE;
        }
    };

    let outcome = check(&source);

    if let Some(report) = outcome.report() {
        if let Err(e) = report.write_to(io::stdout().lock()) {
            tracing::error!("could not write report: {}", e);
        }

        if cli.explain {
            explain(cli, &input, source, report);
        }
    }

    outcome.exit_code()
}

fn explain(cli: &Cli, input: &Input, source: String, report: &Report) {
    let mut cache = SourceCache::new();
    let file_id = cache.add(input.display_name(), source);
    let renderer = DiagnosticRenderer::new(&cache).with_colors(cli.use_colors());

    let diagnostics = report.diagnostics(&cache, file_id);
    eprintln!("{}", diagnostics.render(&renderer));
}
