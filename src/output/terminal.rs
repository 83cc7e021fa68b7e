// Colored terminal output for similarity listings.
//
// This module handles all terminal-specific formatting: colors, tables and
// score bands. main.rs delegates here after the core has produced results.

use colored::Colorize;

use crate::similarity::corpus::{Neighbor, VectorizedCorpus};
use crate::similarity::SimilarityResult;

/// Scores at or above this band are shown as likely duplicates.
pub const LIKELY_DUPLICATE: f64 = 0.80;
/// Scores at or above this band are shown as partial matches.
pub const PARTIAL_MATCH: f64 = 0.50;

/// Print every pair in the order given, one line each.
///
/// Pairs scoring below `min_score` are left out of the listing only; the
/// results themselves are not filtered.
pub fn display_similarities(results: &[SimilarityResult], noun: &str, min_score: f64) {
    for result in results.iter().filter(|r| r.score >= min_score) {
        let line = super::similarity_line(noun, result.i, result.j, result.score);
        println!("{}", colorize_line(&line, result.score));
    }
}

/// Print pairs as a ranked table with label previews.
pub fn display_ranked(results: &[SimilarityResult], labels: &[String], top: usize, min_score: f64) {
    let shown: Vec<&SimilarityResult> = results
        .iter()
        .filter(|r| r.score >= min_score)
        .take(top)
        .collect();

    if shown.is_empty() {
        println!("No pairs at or above {min_score:.2}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Most similar pairs ({} of {}) ===", shown.len(), results.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:>5}  {:<36} {:<36}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Label A".dimmed(),
        "Label B".dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    for (rank, result) in shown.iter().enumerate() {
        let a = label_preview(labels, result.i);
        let b = label_preview(labels, result.j);
        println!(
            "  {:>4}. {}  {:<36} {:<36}",
            rank + 1,
            colorize_score(result.score),
            a,
            b,
        );
    }

    println!();
    let likely = shown.iter().filter(|r| r.score >= LIKELY_DUPLICATE).count();
    if likely > 0 {
        println!("  {} {} likely duplicate pairs", "!!".red().bold(), likely);
    }
}

/// Print the nearest labels to one query label.
pub fn display_neighbors(query: usize, neighbors: &[Neighbor], labels: &[String]) {
    println!(
        "\n{}",
        format!("=== Closest to #{}: {} ===", query + 1, label_preview(labels, query)).bold()
    );

    if neighbors.is_empty() {
        println!("  No other labels in the corpus.");
        return;
    }

    for neighbor in neighbors {
        println!(
            "  {}  #{:<5} {}",
            colorize_score(neighbor.score),
            neighbor.index + 1,
            label_preview(labels, neighbor.index),
        );
    }
}

/// Print each label's normalized tokens and the shared vocabulary.
pub fn display_inspection(corpus: &VectorizedCorpus, labels: &[String]) {
    println!("\n{}", format!("=== Tokens ({} labels) ===", labels.len()).bold());
    for (i, label) in labels.iter().enumerate() {
        let tokens = corpus.tokens(i).unwrap_or_default();
        let rendered = if tokens.is_empty() {
            "(no tokens)".dimmed().to_string()
        } else {
            tokens.join(" | ")
        };
        println!("  {:>4}. {:<40} {}", i + 1, super::truncate_chars(label, 36), rendered);
    }

    let vocabulary = corpus.vocabulary();
    println!("\n{}", format!("=== Vocabulary ({} terms) ===", vocabulary.len()).bold());
    println!("  {}", vocabulary.terms().join(", ").dimmed());
}

fn label_preview(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .map(|l| super::truncate_chars(l, 32))
        .unwrap_or_else(|| "?".to_string())
}

/// Colorize a score by band.
fn colorize_score(score: f64) -> colored::ColoredString {
    colorize_line(&format!("{score:.2}"), score)
}

fn colorize_line(text: &str, score: f64) -> colored::ColoredString {
    if score >= LIKELY_DUPLICATE {
        text.red().bold()
    } else if score >= PARTIAL_MATCH {
        text.yellow()
    } else if score > 0.0 {
        text.normal()
    } else {
        text.dimmed()
    }
}
