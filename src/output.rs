//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every section leads with its heading and anchor, then one line per card
//! with its positional index, title, and where the link goes. Placeholder
//! links are flagged so unfinished entries are easy to spot before a
//! release.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Guides #guides (5 cards)
//!     001 Mnemonics → /mnemonics
//!     002 HD Key → /hd_key
//!
//! Official Rust Crates #official-libraries (7 cards)
//!     001 walletd → https://crates.io (external)
//!     002 walletd_bitcoin → #official-libraries (placeholder)
//!
//! 2 sections, 12 cards, 6 placeholders
//! ```
//!
//! ## Build
//!
//! The check listing followed by the written file:
//!
//! ```text
//! Wrote dist/index.html
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::catalog::TargetKind;
use crate::generate::GenerateResult;
use crate::types::{Card, RenderedSection};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format a card line: index, title, arrow, destination, and link marker.
fn card_line(index: usize, card: &Card) -> String {
    let marker = match card.link.kind {
        TargetKind::External => " (external)",
        TargetKind::Placeholder => " (placeholder)",
        TargetKind::Internal => "",
    };
    format!(
        "    {} {} \u{2192} {}{}",
        format_index(index),
        card.title,
        card.link.href,
        marker
    )
}

/// Format the inventory of rendered sections.
pub fn format_check_output(sections: &[RenderedSection]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total_cards = 0;
    let mut placeholders = 0;

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} #{} ({})",
            section.heading.text,
            section.heading.anchor,
            plural(section.cards.len(), "card")
        ));
        for (idx, card) in section.cards.iter().enumerate() {
            lines.push(card_line(idx + 1, card));
            if !card.link.is_available() {
                placeholders += 1;
            }
        }
        total_cards += section.cards.len();
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {}, {}",
        plural(sections.len(), "section"),
        plural(total_cards, "card"),
        plural(placeholders, "placeholder")
    ));
    lines
}

/// Print the section inventory to stdout.
pub fn print_check_output(sections: &[RenderedSection]) {
    for line in format_check_output(sections) {
        println!("{}", line);
    }
}

/// Format build output: the inventory plus the written file.
pub fn format_generate_output(result: &GenerateResult) -> Vec<String> {
    let mut lines = format_check_output(&result.sections);
    lines.push(format!("Wrote {}", result.path.display()));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(result: &GenerateResult) {
    for line in format_generate_output(result) {
        println!("{}", line);
    }
}
