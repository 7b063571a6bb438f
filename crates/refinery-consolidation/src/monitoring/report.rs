//! Plain-text rendering of run statistics.

use std::fmt::Write;

use refinery_core::ImprovementStats;

use super::recommendations::recommendations;

/// Render `stats` and its recommendations as a human-readable report.
pub fn render_report(stats: &ImprovementStats) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, stats);
    out
}

fn write_report(out: &mut String, stats: &ImprovementStats) -> std::fmt::Result {
    writeln!(out, "Concept Refinement Report")?;
    writeln!(out, "=========================")?;
    writeln!(out, "Original concepts:  {}", stats.original_count)?;
    writeln!(
        out,
        "Merged groups:      {} ({} absorbed)",
        stats.merged_groups, stats.absorbed_concepts
    )?;
    writeln!(
        out,
        "Removed concepts:   {} ({} noise)",
        stats.removed_concepts, stats.noise_removed
    )?;
    writeln!(
        out,
        "Final concepts:     {} (surface {}, deep {})",
        stats.final_count, stats.surface_count, stats.deep_count
    )?;
    writeln!(out, "Improvement ratio:  {:.1}%", stats.improvement_ratio)?;
    writeln!(out)?;

    let tiers = &stats.tier_distribution;
    writeln!(out, "Quality distribution:")?;
    writeln!(out, "  excellent   {}", tiers.excellent)?;
    writeln!(out, "  good        {}", tiers.good)?;
    writeln!(out, "  acceptable  {}", tiers.acceptable)?;
    writeln!(out, "  poor        {}", tiers.poor)?;
    writeln!(out)?;

    writeln!(out, "Recommendations:")?;
    for rec in recommendations(stats) {
        writeln!(out, "  - {rec}")?;
    }
    Ok(())
}
