//! # Catalog Cards
//!
//! The content-catalog layer of a documentation site. Small declarative
//! tables (guides, libraries) each describe a set of resources; a pure
//! renderer turns each table into a titled grid of cards with a title,
//! summary, and call-to-action link.
//!
//! # Architecture: Load → Render → Place
//!
//! ```text
//! 1. Load     declarations  →  Catalog          (schema validation, fail fast)
//! 2. Render   Catalog       →  RenderedSection  (pure mapping, catalog order)
//! 3. Place    sections      →  index.html       (maud markup, host side)
//! ```
//!
//! Stages 1 and 2 are pure and do no I/O, so the interesting rules (unique
//! identifiers, non-empty titles, well-formed targets, fragment-safe anchors,
//! order preservation) are tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Entry schema, target classification, `Catalog::load` |
//! | [`render`] | `CatalogRenderer`: catalog → heading + cards |
//! | [`types`] | Output values (`RenderedSection`, `Card`, `CardLink`, `Columns`) |
//! | [`content`] | Built-in guide and library tables |
//! | [`config`] | `catalog.toml` loading, merging with stock defaults, validation |
//! | [`site`] | Section composition from config, errors tagged per section |
//! | [`generate`] | HTML for rendered sections, page and fragment output |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Validate at Load, Not at Render
//!
//! Every entry-level rule is checked once in [`catalog::Catalog::load`] and
//! the result is an immutable value. A `Catalog` that exists is valid, so the
//! renderer only checks its own inputs (title, anchor, label, columns).
//! Nothing is ever silently dropped: the first violation stops the build with
//! a message naming the entry.
//!
//! ## Placeholders Are Links Too
//!
//! A target of `#` means "not published yet". Rather than rendering a dead
//! link, the card points back at its own section heading and is marked
//! `aria-disabled`.
//!
//! ## Layout Reflows, Never Reorders
//!
//! Column counts per breakpoint are plain CSS custom properties on the grid.
//! Cards are emitted in catalog order and the grid fills row by row, so the
//! column count changes only where a card sits, never which card comes first.

pub mod catalog;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod render;
pub mod site;
pub mod types;

pub use catalog::{Catalog, CatalogEntry, EntryDeclaration, SchemaError};
pub use render::{CatalogRenderer, ConfigurationError, SectionKind, render};
pub use types::{Card, CardLink, Columns, Heading, RenderedSection};

#[cfg(test)]
pub(crate) mod test_helpers;
