//! Multi-Pattern Substring Search Example
//!
//! Builds a trie over several patterns and compares it against the naive scanner.
//!
//! ```bash
//! RUST_LOG=trie_search=debug cargo run --example pattern_search
//! ```

use tracing_subscriber::EnvFilter;
use trie_search::{NaiveScanner, PatternIndex};

fn main() -> trie_search::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== trie-search Demo ===\n");

    let text = b"asldjfasfoiausaslfjaksjiuqerjfqwcsncmanxzcl";
    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", String::from_utf8_lossy(text));

    let patterns = ["zc", "man", "qwcs", "fox", "a"];
    let index = PatternIndex::try_from_patterns(patterns)?;

    println!(
        "\nIndex: {} patterns, {} nodes\n",
        index.len(),
        index.node_count()
    );

    println!("--- Per-Pattern Results ---\n");
    for pattern in &patterns {
        let positions: Vec<_> = NaiveScanner::find_iter(text, pattern.as_bytes()).collect();
        if positions.is_empty() {
            println!("  \"{}\" -> not found", pattern);
        } else {
            println!(
                "  \"{}\" -> {} occurrences at positions {:?}",
                pattern,
                positions.len(),
                positions
            );
        }
    }

    println!("\n--- Trie Attribution ---\n");
    for m in index.find_iter(text).filter(|m| m.end() - m.start() > 1) {
        let pattern = index.pattern(m.pattern()).unwrap_or_default();
        println!(
            "  {:?} \"{}\"",
            m.range(),
            String::from_utf8_lossy(pattern)
        );
    }

    println!("\n--- Agreement ---\n");
    println!(
        "  trie.contains_substring   = {}",
        index.contains_substring(text)
    );
    println!(
        "  naive.contains_any        = {}",
        NaiveScanner::contains_any(text, patterns)
    );
    println!("  total matches             = {}", index.count_matches(text));

    Ok(())
}
