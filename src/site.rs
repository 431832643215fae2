//! Composition of the configured sections.
//!
//! Turns a [`SiteConfig`] into the ordered list of rendered sections for the
//! documentation home page: Guides first, then Official Rust Crates, skipping
//! disabled ones. Each section's catalog comes from its inline `entries` when
//! configured, otherwise from the built-in table in [`crate::content`].
//!
//! Errors carry the config key of the section they came from so a failed
//! build points straight at the offending table.

use crate::catalog::{Catalog, EntryDeclaration, SchemaError};
use crate::config::{SectionConfig, SiteConfig};
use crate::content;
use crate::render::{CatalogRenderer, ConfigurationError, SectionKind};
use crate::types::RenderedSection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("[{section}] schema error: {source}")]
    Schema {
        section: &'static str,
        #[source]
        source: SchemaError,
    },
    #[error("[{section}] configuration error: {source}")]
    Configuration {
        section: &'static str,
        #[source]
        source: ConfigurationError,
    },
}

/// A section ready to render: its kind, settings, and validated catalog.
#[derive(Debug, Clone)]
pub struct SectionPlan<'a> {
    pub kind: SectionKind,
    pub settings: &'a SectionConfig,
    pub catalog: Catalog,
}

impl SectionPlan<'_> {
    pub fn config_key(&self) -> &'static str {
        config_key(self.kind)
    }

    pub fn render(&self) -> Result<RenderedSection, SiteError> {
        CatalogRenderer::for_kind(self.kind)
            .with_link_label(self.settings.link_label.as_str())
            .with_columns(self.settings.columns)
            .render(&self.settings.title, &self.settings.anchor, &self.catalog)
            .map_err(|source| SiteError::Configuration {
                section: self.config_key(),
                source,
            })
    }
}

fn config_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Guides => "guides",
        SectionKind::Libraries => "libraries",
    }
}

/// Load the catalog of every enabled section, in page order.
pub fn plan_sections(config: &SiteConfig) -> Result<Vec<SectionPlan<'_>>, SiteError> {
    let sections = [
        (SectionKind::Guides, &config.guides),
        (SectionKind::Libraries, &config.libraries),
    ];

    sections
        .into_iter()
        .filter(|(_, settings)| settings.enabled)
        .map(|(kind, settings)| -> Result<_, SiteError> {
            let catalog = Catalog::load(declarations(kind, settings)).map_err(|source| {
                SiteError::Schema {
                    section: config_key(kind),
                    source,
                }
            })?;
            Ok(SectionPlan {
                kind,
                settings,
                catalog,
            })
        })
        .collect()
}

/// Load and render every enabled section, in page order.
pub fn build_sections(config: &SiteConfig) -> Result<Vec<RenderedSection>, SiteError> {
    plan_sections(config)?
        .iter()
        .map(SectionPlan::render)
        .collect()
}

fn declarations(kind: SectionKind, settings: &SectionConfig) -> Vec<EntryDeclaration> {
    match &settings.entries {
        Some(entries) => entries.clone(),
        None => match kind {
            SectionKind::Guides => content::guides(),
            SectionKind::Libraries => content::libraries(),
        },
    }
}
