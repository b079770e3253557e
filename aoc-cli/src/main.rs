//! AOC CLI - Command-line interface for running Advent of Code solutions

mod cache;
mod cli;
mod config;
mod error;
mod output;
mod provider;
mod runner;
mod scaffold;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::{Cli, Command, RunArgs, RunRequest, ScaffoldArgs};
use config::Config;
use error::CliError;
use output::OutputFormatter;
use provider::InputProvider;
use runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    config::load_dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run(args) => run_solution(&args),
        Command::Scaffold(args) => scaffold_day(&args),
    }
}

fn run_solution(args: &RunArgs) -> Result<(), CliError> {
    let config = Config::from_env(&args.cache_dir)?;
    let request = RunRequest::from(args);

    let output = OutputFormatter::new(args.quiet);
    output.print_header(config.year, &request);

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let provider = InputProvider::new(&config)?;

    let outcome = Runner::new(&registry, &provider, &output).run(&request)?;
    output.print_result(&outcome);

    Ok(())
}

fn scaffold_day(args: &ScaffoldArgs) -> Result<(), CliError> {
    let created = scaffold::scaffold(&args.solutions_dir, args.day)?;
    OutputFormatter::new(false).print_scaffold(args.day, &created);
    Ok(())
}
