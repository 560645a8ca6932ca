//! Console output formatter for one-shot drafting

use colored::Colorize;

/// Formats drafted replies for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a drafted reply with its scenario
    pub fn format_reply(scenario: &str, reply: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Scenario:".cyan().bold(), scenario));
        output.push('\n');
        output.push_str(&format!("{}\n", "Suggested reply:".green().bold()));
        for line in reply.lines() {
            output.push_str(&format!("  {}\n", line));
        }

        output
    }
}
