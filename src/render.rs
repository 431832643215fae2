//! Catalog → card projection.
//!
//! [`CatalogRenderer::render`] is a pure mapping: one heading for the section
//! and one [`Card`] per catalog entry, in catalog order. It performs no I/O
//! and keeps no state, so the same inputs always give an equal
//! [`RenderedSection`].
//!
//! ## Section Defaults
//!
//! Each [`SectionKind`] carries the defaults of the corresponding section on
//! the documentation home page:
//!
//! | Kind | Title | Anchor | Link label | Columns |
//! |------|-------|--------|------------|---------|
//! | Guides | Guides | `guides` | Read more | 1 / 2 / 4 |
//! | Libraries | Official Rust Crates | `official-libraries` | Learn more | 1 / 2 / 3 |
//!
//! Callers override the label and columns through the builder methods; the
//! renderer never hardcodes either.

use crate::catalog::{Catalog, CatalogEntry, TargetKind};
use crate::types::{Card, CardLink, Columns, Heading, RenderedSection};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("section title must not be empty")]
    EmptyTitle,
    #[error("section anchor must not be empty")]
    EmptyAnchor,
    #[error(
        "section anchor `{anchor}` contains `{character}`; only letters, digits, `-` and `_` are allowed"
    )]
    UnsafeAnchor { anchor: String, character: char },
    #[error("link label must not be empty")]
    EmptyLinkLabel,
    #[error("invalid grid columns {columns:?}: each breakpoint must be 1-{max}")]
    InvalidColumns { columns: Columns, max: u8 },
}

/// Which kind of section a catalog is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Guides,
    Libraries,
}

impl SectionKind {
    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::Guides => "Guides",
            SectionKind::Libraries => "Official Rust Crates",
        }
    }

    pub fn default_anchor(self) -> &'static str {
        match self {
            SectionKind::Guides => "guides",
            SectionKind::Libraries => "official-libraries",
        }
    }

    pub fn default_link_label(self) -> &'static str {
        match self {
            SectionKind::Guides => "Read more",
            SectionKind::Libraries => "Learn more",
        }
    }

    pub fn default_columns(self) -> Columns {
        match self {
            SectionKind::Guides => Columns::new(1, 2, 4),
            SectionKind::Libraries => Columns::new(1, 2, 3),
        }
    }
}

/// Presentation parameters for rendering one section.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRenderer {
    link_label: String,
    columns: Columns,
}

impl Default for CatalogRenderer {
    fn default() -> Self {
        Self::for_kind(SectionKind::Guides)
    }
}

impl CatalogRenderer {
    pub fn for_kind(kind: SectionKind) -> Self {
        Self {
            link_label: kind.default_link_label().to_string(),
            columns: kind.default_columns(),
        }
    }

    pub fn with_link_label(mut self, label: impl Into<String>) -> Self {
        self.link_label = label.into();
        self
    }

    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    pub fn link_label(&self) -> &str {
        &self.link_label
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Project `catalog` into a titled section of cards.
    ///
    /// An empty catalog is not an error: it renders as a heading with no
    /// cards.
    pub fn render(
        &self,
        section_title: &str,
        section_anchor: &str,
        catalog: &Catalog,
    ) -> Result<RenderedSection, ConfigurationError> {
        if section_title.trim().is_empty() {
            return Err(ConfigurationError::EmptyTitle);
        }
        validate_anchor(section_anchor)?;
        if self.link_label.trim().is_empty() {
            return Err(ConfigurationError::EmptyLinkLabel);
        }
        if !self.columns.is_valid() {
            return Err(ConfigurationError::InvalidColumns {
                columns: self.columns,
                max: Columns::MAX,
            });
        }

        let cards = catalog
            .entries()
            .iter()
            .map(|entry| self.card(entry, section_anchor))
            .collect();

        Ok(RenderedSection {
            heading: Heading {
                text: section_title.to_string(),
                anchor: section_anchor.to_string(),
            },
            cards,
            columns: self.columns,
        })
    }

    fn card(&self, entry: &CatalogEntry, section_anchor: &str) -> Card {
        let href = match entry.target.kind() {
            TargetKind::Placeholder => format!("#{section_anchor}"),
            TargetKind::Internal | TargetKind::External => entry.target.as_str().to_string(),
        };
        Card {
            key: entry.identifier.clone(),
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            link: CardLink {
                href,
                label: self.link_label.clone(),
                kind: entry.target.kind(),
            },
        }
    }
}

/// Render with the Guides defaults ("Read more", 1/2/4 columns).
pub fn render(
    section_title: &str,
    section_anchor: &str,
    catalog: &Catalog,
) -> Result<RenderedSection, ConfigurationError> {
    CatalogRenderer::default().render(section_title, section_anchor, catalog)
}

/// Check that an anchor is non-empty and fragment-safe: `[A-Za-z0-9_-]+`.
pub fn validate_anchor(anchor: &str) -> Result<(), ConfigurationError> {
    if anchor.is_empty() {
        return Err(ConfigurationError::EmptyAnchor);
    }
    match anchor
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        Some(character) => Err(ConfigurationError::UnsafeAnchor {
            anchor: anchor.to_string(),
            character,
        }),
        None => Ok(()),
    }
}
