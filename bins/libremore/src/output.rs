//! Terminal output utilities

use clap::ValueEnum;
use libremore_core::availability::{DisplayStatus, StatusTone};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, coloured when the terminal supports it
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Coloured availability label for one book
pub fn status_badge(status: &DisplayStatus<'_>) -> String {
    match status {
        DisplayStatus::Pending => "pending".dimmed().to_string(),
        DisplayStatus::Ranked(best) => match best.tone() {
            StatusTone::Positive => best.status().green().bold().to_string(),
            StatusTone::Neutral => best.status().yellow().to_string(),
        },
    }
}

/// Ten-cell progress bar with percentage
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100) / 10);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        percent
    )
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "[----------]   0%");
        assert_eq!(progress_bar(55), "[#####-----]  55%");
        assert_eq!(progress_bar(100), "[##########] 100%");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "book", "books"), "1 book");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(3, "book", "books"), "3 books");
    }
}
