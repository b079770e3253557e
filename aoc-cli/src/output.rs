//! Output formatting for runs and scaffolding

use crate::cli::RunRequest;
use crate::provider::InputSource;
use crate::runner::RunOutcome;
use crate::scaffold::ScaffoldOutput;
use chrono::TimeDelta;

/// Output formatter for progress lines and results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the banner for a run
    pub fn print_header(&self, year: u16, request: &RunRequest) {
        if !self.quiet {
            println!(
                "🎄 Advent of Code {} - Day {} Part {}",
                year, request.day, request.part
            );
        }
    }

    /// Report where the input came from (`None` means the embedded test input)
    pub fn print_input_source(&self, source: Option<&InputSource>) {
        if self.quiet {
            return;
        }
        match source {
            None => println!("🧪 Using TEST input"),
            Some(InputSource::Cache(path)) => {
                println!("📂 Loaded input from cache: {}", path.display())
            }
            Some(InputSource::Fetched(path)) => {
                println!("💾 Fetched input and saved to cache: {}", path.display())
            }
        }
    }

    /// Announce that the solving function is about to run
    pub fn print_running(&self) {
        if !self.quiet {
            println!("🚀 Running solution...");
        }
    }

    /// Print the answer, timing, and expected-answer check
    pub fn print_result(&self, outcome: &RunOutcome) {
        if self.quiet {
            println!("{}", outcome.result.answer);
            return;
        }

        println!();
        println!("🎉 Result: {}", outcome.result.answer);
        println!("⏱️  Time: {}", format_duration(outcome.result.duration()));

        match (outcome.expected, outcome.matches_expected()) {
            (Some(_), Some(true)) => println!("✅ Matches expected answer"),
            (Some(expected), Some(false)) => println!("❌ Expected {}", expected),
            _ => {}
        }
    }

    /// Print the files created by the scaffolder
    pub fn print_scaffold(&self, day: u8, output: &ScaffoldOutput) {
        if self.quiet {
            return;
        }
        println!("✅ Successfully created structure for Day {}!", day);
        println!("📂 {}", output.dir.display());
        for file in &output.files {
            println!("   {}", file.display());
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
