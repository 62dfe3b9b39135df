//! Ori front-end CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ori_diagnostic::emitter::{ColorMode, TerminalEmitter};
use oric::commands::{lex_files, parse_files};
use oric::tracing_setup::init_tracing;
use oric::{CliError, Inputs, Status};

#[derive(Parser)]
#[command(name = "ori", version, about = "Lex and parse Ori source files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of each file
    Lex(InputArgs),
    /// Print the syntax tree of each file
    Parse {
        #[command(flatten)]
        inputs: InputArgs,
        /// Only report diagnostics
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Source file to process (repeatable)
    #[arg(short = 'f', long = "file")]
    file: Vec<PathBuf>,
    /// Directory to search for .ori and .mod files (repeatable)
    #[arg(short = 'd', long = "directory")]
    directory: Vec<PathBuf>,
    /// Log lexer and parser activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl InputArgs {
    fn inputs(&self) -> Inputs {
        Inputs {
            files: self.file.clone(),
            directories: self.directory.clone(),
        }
    }
}

fn run(command: &Command) -> Result<Status, CliError> {
    let (args, quiet) = match command {
        Command::Lex(args) => (args, false),
        Command::Parse { inputs, quiet } => (inputs, *quiet),
    };
    init_tracing(args.verbose);

    let paths = args.inputs().resolve()?;
    let mut out = io::stdout().lock();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, io::stderr().is_terminal());
    match command {
        Command::Lex(_) => lex_files(&paths, &mut out, &mut emitter),
        Command::Parse { .. } => parse_files(&paths, quiet, &mut out, &mut emitter),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.command) {
        Ok(Status::Clean) => ExitCode::SUCCESS,
        Ok(Status::Errors) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
