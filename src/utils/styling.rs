//! Terminal styling utilities

use console::style;
use std::path::Path;
use std::time::Duration;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("POPANEL").cyan().bold(),
        style("Populism panel builder").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card
pub fn print_config(
    indicators: &Path,
    populism: &Path,
    output: &Path,
    csv_output: &Path,
    region: &str,
    min_year: i32,
    base_year: i32,
) {
    println!("    {}", style("Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      Indicators: {}", truncate_path(indicators, 40));
    println!("      Populism:   {}", truncate_path(populism, 40));
    println!("      Output:     {}", truncate_path(output, 40));
    println!("      CSV export: {}", truncate_path(csv_output, 40));
    println!(
        "      Region: {}   Years: {}+   Base year: {}",
        style(region).yellow(),
        style(min_year).yellow(),
        style(base_year).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").cyan(), message);
}

/// Print a step's elapsed time
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {}",
        style("Panel build complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Keep the tail; the cut point must not split a multibyte character.
    let mut start = s.len() - max_len + 3;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &s[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_string("panel.parquet", 40), "panel.parquet");
    }

    #[test]
    fn test_truncate_long_ascii_path() {
        let s = format!("{}/panel.parquet", "a".repeat(60));
        let out = truncate_string(&s, 40);
        assert_eq!(out.len(), 40);
        assert!(out.starts_with("..."));
        assert!(out.ends_with("/panel.parquet"));
    }

    #[test]
    fn test_truncate_does_not_split_multibyte_chars() {
        // 30 two-byte chars put the byte cut point mid-character.
        let s = "é".repeat(30);
        let out = truncate_string(&s, 40);
        assert!(out.starts_with("..."));
        assert!(out.chars().skip(3).all(|c| c == 'é'));
    }
}
