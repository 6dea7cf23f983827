//! Console output utilities.

use std::path::PathBuf;

use console::{style, Term};

use crate::error::{Error, Result};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Notion Export Cleaner                             ║
║     Strip page IDs from a Notion HTML export          ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).color256(208));
}

/// Print configuration summary.
pub fn print_config_summary(root: &str, dry_run: bool, rename_root: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Export root: {}", root);
    println!("  Mode: {}", if dry_run { "dry run" } else { "apply" });
    println!("  Rename root: {}", if rename_root { "yes" } else { "no" });
    println!();
}

/// Strip the quotes a pasted path often carries.
pub fn clean_path_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Ask for the export root on the terminal.
pub fn prompt_export_root() -> Result<PathBuf> {
    let term = Term::stdout();
    term.write_str(&format!(
        "{} ",
        style("Enter the ROOT path of your Notion export:").yellow().bold()
    ))
    .map_err(|e| Error::io("<stdout>", e))?;
    let line = term.read_line().map_err(|e| Error::io("<stdin>", e))?;
    clean_path_input(&line).ok_or(Error::Aborted)
}
