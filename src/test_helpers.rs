//! Shared test utilities for the catalog-cards test suite.
//!
//! Short constructors for declarations and catalogs, plus extractors that
//! flatten rendered sections into plain vectors for `assert_eq!`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = catalog_of(vec![
//!     decl("mnemonics", "/mnemonics", "Mnemonics"),
//!     decl("hd_key", "/hd_key", "HD Key"),
//! ]);
//! let section = render("Guides", "guides", &catalog).unwrap();
//! assert_eq!(card_titles(&section), vec!["Mnemonics", "HD Key"]);
//! ```

use crate::catalog::{Catalog, EntryDeclaration};
use crate::types::RenderedSection;

// =========================================================================
// Constructors
// =========================================================================

/// Declaration with all required fields and no summary.
pub fn decl(identifier: &str, target: &str, title: &str) -> EntryDeclaration {
    EntryDeclaration::new(identifier, target, title)
}

/// Load a catalog that is expected to be valid. Panics with the schema
/// error otherwise.
pub fn catalog_of(entries: Vec<EntryDeclaration>) -> Catalog {
    Catalog::load(entries).unwrap_or_else(|e| panic!("test catalog is invalid: {e}"))
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Entry identifiers in catalog order.
pub fn entry_ids(catalog: &Catalog) -> Vec<&str> {
    catalog
        .entries()
        .iter()
        .map(|e| e.identifier.as_str())
        .collect()
}

/// Card titles in render order.
pub fn card_titles(section: &RenderedSection) -> Vec<&str> {
    section.cards.iter().map(|c| c.title.as_str()).collect()
}

/// Card link destinations in render order.
pub fn card_hrefs(section: &RenderedSection) -> Vec<&str> {
    section.cards.iter().map(|c| c.link.href.as_str()).collect()
}

/// Find a rendered section by anchor. Panics if not found.
pub fn find_section<'a>(sections: &'a [RenderedSection], anchor: &str) -> &'a RenderedSection {
    sections
        .iter()
        .find(|s| s.heading.anchor == anchor)
        .unwrap_or_else(|| {
            let anchors: Vec<&str> = sections.iter().map(|s| s.heading.anchor.as_str()).collect();
            panic!("section '{anchor}' not found. Available: {anchors:?}")
        })
}
