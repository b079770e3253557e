//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solutions", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one part of a day's solution
    Run(RunArgs),
    /// Generate the boilerplate for a new day's solution
    Scaffold(ScaffoldArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Day to run (1-25)
    #[arg(value_parser = parse_day)]
    pub day: u8,

    /// Part to run (1 or 2)
    #[arg(value_parser = parse_part)]
    pub part: u8,

    /// Use the test input embedded in the solution
    #[arg(short, long)]
    pub test: bool,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "inputs")]
    pub cache_dir: PathBuf,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub struct ScaffoldArgs {
    /// Day to create (1-25)
    #[arg(value_parser = parse_day)]
    pub day: u8,

    /// Directory holding the `dayNN` solution modules
    #[arg(long, default_value = crate::scaffold::DEFAULT_SOLUTIONS_DIR)]
    pub solutions_dir: PathBuf,
}

/// A validated request to run one part of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRequest {
    pub day: u8,
    pub part: u8,
    pub use_test_input: bool,
}

impl From<&RunArgs> for RunRequest {
    fn from(args: &RunArgs) -> Self {
        Self {
            day: args.day,
            part: args.part,
            use_test_input: args.test,
        }
    }
}

/// Parse a day token, accepting integers 1 through 25
pub fn parse_day(s: &str) -> Result<u8, String> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|day| (1..=25).contains(day))
        .ok_or_else(|| "Day must be between 1 and 25".to_string())
}

/// Parse a part token, accepting exactly 1 or 2
pub fn parse_part(s: &str) -> Result<u8, String> {
    match s.trim().parse::<u8>() {
        Ok(part @ (1 | 2)) => Ok(part),
        _ => Err("Part must be 1 or 2".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse_run(args: &[&str]) -> Result<RunRequest, clap::Error> {
        let argv = ["aoc", "run"].into_iter().chain(args.iter().copied());
        match Cli::try_parse_from(argv)?.command {
            Command::Run(run) => Ok(RunRequest::from(&run)),
            Command::Scaffold(_) => panic!("expected run command"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_request_round_trips(
            day in 1u8..=25,
            part in 1u8..=2,
            flag in prop::option::of(prop::sample::select(vec!["--test", "-t"])),
            flag_position in 0usize..3,
        ) {
            let (day_s, part_s) = (day.to_string(), part.to_string());
            let mut args = vec![day_s.as_str(), part_s.as_str()];
            if let Some(flag) = flag {
                args.insert(flag_position, flag);
            }

            let request = parse_run(&args).unwrap();

            prop_assert_eq!(request, RunRequest { day, part, use_test_input: flag.is_some() });
        }

        #[test]
        fn prop_out_of_range_day_rejected(day in prop_oneof![Just(0u32), 26u32..10_000]) {
            let day = day.to_string();
            prop_assert!(parse_run(&[day.as_str(), "1"]).is_err());
        }

        #[test]
        fn prop_invalid_part_rejected(part in prop_oneof![Just(0u32), 3u32..1_000]) {
            let part = part.to_string();
            prop_assert!(parse_run(&["1", part.as_str()]).is_err());
        }
    }

    #[test]
    fn test_non_integer_tokens_rejected() {
        assert!(parse_run(&["abc", "1"]).is_err());
        assert!(parse_run(&["1", "two"]).is_err());
        assert!(parse_run(&["1.5", "1"]).is_err());
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(parse_run(&[]).is_err());
        assert!(parse_run(&["3"]).is_err());
        assert!(parse_run(&["--test", "3"]).is_err());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(parse_day("26").unwrap_err(), "Day must be between 1 and 25");
        assert_eq!(parse_part("3").unwrap_err(), "Part must be 1 or 2");
        assert_eq!(parse_day(" 7 "), Ok(7));
    }

    #[test]
    fn test_scaffold_args() {
        let cli = Cli::try_parse_from(["aoc", "scaffold", "12"]).unwrap();
        match cli.command {
            Command::Scaffold(args) => {
                assert_eq!(args.day, 12);
                assert_eq!(args.solutions_dir, PathBuf::from("aoc-solutions/src"));
            }
            Command::Run(_) => panic!("expected scaffold command"),
        }

        assert!(Cli::try_parse_from(["aoc", "scaffold", "0"]).is_err());
    }
}
