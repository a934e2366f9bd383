//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print statistics for a finished run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Archive Statistics:").bold());
    println!(
        "  Patterns:  {} ({} files)",
        stats.patterns, stats.pattern_files
    );
    println!("  Classes:   {}", stats.classes);
    if stats.archived_classes_skipped > 0 {
        println!(
            "  Archived:  {} (skipped)",
            style(stats.archived_classes_skipped).yellow()
        );
    }
    println!(
        "  Materials: {} ({} not downloadable)",
        stats.materials, stats.materials_skipped
    );
    println!(
        "  Episodes:  {} ({} caption tracks)",
        stats.episodes, stats.captions
    );
    println!(
        "  Total:     {} files, {} bytes downloaded",
        stats.total_files(),
        stats.bytes_downloaded
    );
    println!("{}", style("═".repeat(50)).dim());
}
