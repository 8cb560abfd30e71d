//! Console reporter with colored output

use crate::{Confidence, FlaggedFile};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors (also respected by piping through `colored`'s own
    /// tty detection; this is an explicit override)
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the full report to stdout.
    pub fn report(&self, results: &[FlaggedFile]) {
        if results.is_empty() {
            println!("{}", "No fake tests detected.".green());
            return;
        }

        println!();
        println!(
            "{}",
            format!("🔍 Found {} suspicious test file(s):", results.len()).bold()
        );
        println!();

        for record in results {
            self.print_record(record);
        }

        println!(
            "{}",
            "Review these files: tests that verify nothing give false confidence in CI.".dimmed()
        );
    }

    fn print_record(&self, record: &FlaggedFile) {
        let icon = self.confidence_icon(record.confidence);
        println!("{} {}", icon, record.path.display().to_string().bold());
        println!(
            "   confidence: {} | lines: {}",
            self.colorize_confidence(record.confidence),
            record.line_count
        );
        for reason in &record.reasons {
            println!("   {} {}", "→".dimmed(), reason);
        }
        println!();
    }

    fn confidence_icon(&self, confidence: Confidence) -> &'static str {
        match confidence {
            Confidence::High => "🚨",
            Confidence::Medium => "⚠️ ",
            Confidence::Low => "💡",
        }
    }

    fn colorize_confidence(&self, confidence: Confidence) -> colored::ColoredString {
        let label = confidence.to_string();
        if !self.use_colors {
            return label.normal();
        }
        match confidence {
            Confidence::High => label.red().bold(),
            Confidence::Medium => label.yellow(),
            Confidence::Low => label.blue(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
