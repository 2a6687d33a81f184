//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (disabled by `NO_COLOR` or `[output] color = false`):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, operation names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info, status line

use console::style;
use std::fmt::Display;

use crate::core::recipe::Step;

const RULE_WIDTH: usize = 56;

/// Turn color on or off for both streams.
pub fn set_color(enabled: bool) {
    let enabled = enabled && std::env::var_os("NO_COLOR").is_none();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print a success message with checkmark.
///
/// Example: `✓ recipe saved`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr.
///
/// Example: `✗ file not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message to stderr, so it never mixes into piped output.
///
/// Example: `⚠ Could not find an inverse for 'ROT13'. Skipping.`
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message.
///
/// Example: `→ run: ladle ops`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  steps:  3`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a blank line.
pub fn blank() {
    println!();
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Format a path in cyan for inline use.
pub fn path(p: &std::path::Path) -> String {
    style(p.display()).cyan().to_string()
}

/// Format a command in green for inline use.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Format an operation name in cyan for inline use.
pub fn op(name: &str) -> String {
    style(name).cyan().to_string()
}

/// Print numbered recipe steps, marking the highlighted one.
///
/// Example:
/// ```text
///    1. To Base64
///  ▶ 2. Caesar Encrypt (shift: 5)
/// ```
pub fn steps(steps: &[Step], highlighted: Option<usize>) {
    if steps.is_empty() {
        dimmed("  (empty recipe)");
        return;
    }
    for (i, step) in steps.iter().enumerate() {
        if highlighted == Some(i) {
            println!(
                " {} {}",
                style("▶").cyan().bold(),
                style(format!("{}. {}", i + 1, step)).bold()
            );
        } else {
            println!("   {}. {}", i + 1, step);
        }
    }
}
