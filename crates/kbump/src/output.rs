//! Terminal output utilities

use console::style;
use kbump_core::UpdateOutcome;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print the outcome for one manifest entry
pub fn outcome(outcome: &UpdateOutcome) {
    println!("{}", format_outcome(outcome));
}

fn format_outcome(outcome: &UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::Bumped { name, from, to } => format!(
            "Bumped {} from {} to {}",
            style(name).yellow().bold(),
            style(from).red().bold(),
            style(to).green().bold()
        ),
        UpdateOutcome::NoNewImage { name, .. } => format!(
            "{} for {}",
            style("No new image found").red().bold(),
            style(name).yellow().bold()
        ),
    }
}
