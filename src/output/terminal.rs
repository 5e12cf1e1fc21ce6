// Colored terminal output for ranked match lists.
//
// All terminal-specific formatting lives here; main.rs only decides which
// view to show.

use colored::Colorize;

use crate::similarity::traits::MatchResult;
use crate::submissions::Diagnostic;

/// Display the full ranked list of flagged pairs.
pub fn display_match_list(matches: &[MatchResult], threshold: f64) {
    if matches.is_empty() {
        println!("No pairs above similarity {threshold:.2}.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Potential plagiarism ({} pairs above {threshold:.2}) ===",
            matches.len()
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:<28} {:>10}",
        "Rank".dimmed(),
        "First".dimmed(),
        "Second".dimmed(),
        "Similarity".dimmed(),
    );
    println!("  {}", "-".repeat(74).dimmed());

    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {:>4}. {:<28} {:<28} {:>10}",
            i + 1,
            super::truncate_chars(&m.pair.0, 26),
            super::truncate_chars(&m.pair.1, 26),
            colorize_similarity(m.similarity),
        );
    }
    println!();
}

/// Display the matches for one submitter, with their highest similarity.
pub fn display_identity_report(identity: &str, matches: &[MatchResult], threshold: f64) {
    println!("\n{}", format!("=== Matches for {identity} ===").bold());

    if matches.is_empty() {
        println!("  No submissions above similarity {threshold:.2}.");
        return;
    }

    for m in matches {
        let partner = m.partner_of(identity).unwrap_or("?");
        println!(
            "  {:<40} {}",
            super::truncate_chars(partner, 38),
            colorize_similarity(m.similarity)
        );
    }

    if let Some(max) = max_similarity(matches) {
        println!("\n  Highest similarity: {}", colorize_similarity(max));
    }
}

/// Print skipped files and other warnings from a run.
pub fn display_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{} {diagnostic}", "warning:".yellow().bold());
    }
}

/// Largest similarity in the list, if any.
pub fn max_similarity(matches: &[MatchResult]) -> Option<f64> {
    matches.iter().map(|m| m.similarity).reduce(f64::max)
}

fn colorize_similarity(similarity: f64) -> colored::ColoredString {
    let text = format!("{similarity:.4}");
    if similarity >= 0.95 {
        text.red().bold()
    } else if similarity >= 0.85 {
        text.bright_red()
    } else if similarity >= 0.7 {
        text.yellow()
    } else {
        text.normal()
    }
}
