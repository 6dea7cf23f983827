//! Run statistics and plan reporting.

use console::style;

use crate::normalize::RunReport;

/// Print every planned or applied rename.
pub fn print_plan(report: &RunReport) {
    let verb = if report.dry_run { "would rename" } else { "renamed" };

    println!();
    for entry in report.mapping.renamed() {
        println!(
            "  {} {} {}",
            style(entry.original.display()).dim(),
            style(format!("{} ->", verb)).dim(),
            entry.cleaned.display()
        );
    }
    if report.root_renamed() {
        println!(
            "  {} {} {}",
            style(report.root.display()).dim(),
            style(format!("{} ->", verb)).dim(),
            report.final_root.display()
        );
    }
}

/// Print statistics for a run.
pub fn print_run_stats(report: &RunReport) {
    let title = if report.dry_run {
        "Dry run (nothing was changed):"
    } else {
        "Statistics:"
    };

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style(title).bold());
    println!("  Scanned:      {} entries", report.nodes_scanned);
    println!("  Files:        {} renamed", report.files_renamed);
    println!("  Directories:  {} renamed", report.dirs_renamed);
    println!(
        "  Pages:        {} updated ({} links)",
        report.pages_rewritten, report.links_rewritten
    );
    match &report.workspace {
        Some(_) => println!("  Export root:  {}", style(report.final_root.display()).green()),
        None => println!("  Export root:  {}", style("unchanged").yellow()),
    }
    println!("{}", style("═".repeat(50)).dim());
}
