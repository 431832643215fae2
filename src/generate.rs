//! HTML generation.
//!
//! The host-side adapter for [`RenderedSection`] values. The renderer itself
//! returns plain data; this module decides how that data looks on a page.
//!
//! ## Markup
//!
//! ```text
//! section.catalog-section
//! ├── h2#guides > a[href="#guides"]      heading with deep-link anchor
//! └── div.card-grid[style="--cols-*"]    responsive grid, catalog order
//!     └── div.card[data-key=identifier]
//!         ├── h3.card-title
//!         ├── p.card-summary             omitted when the summary is empty
//!         └── p.card-action > a.card-link
//! ```
//!
//! External links open in a new tab with `rel="noopener"`. Placeholder links
//! point back at the section heading and carry `aria-disabled="true"`.
//!
//! ## Output
//!
//! [`generate`] writes either a full document (`index.html`) with the
//! embedded stylesheet, or a bare fragment (`sections.html`) for a host
//! template to include.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated string is
//! escaped.

use crate::config::SiteConfig;
use crate::site::{self, SiteError};
use crate::types::{Card, RenderedSection};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
}

const CSS_STATIC: &str = include_str!("../static/catalog.css");

/// Full document file name.
pub const INDEX_FILE: &str = "index.html";
/// Fragment file name.
pub const FRAGMENT_FILE: &str = "sections.html";

/// What [`generate`] wrote.
#[derive(Debug)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub sections: Vec<RenderedSection>,
}

/// Build every enabled section and write the page into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    output_dir: &Path,
    fragment: bool,
) -> Result<GenerateResult, GenerateError> {
    let sections = site::build_sections(config)?;

    let (file_name, markup) = if fragment {
        (FRAGMENT_FILE, render_sections(&sections))
    } else {
        (INDEX_FILE, render_page(&config.page_title, &sections))
    };

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, markup.into_string())?;

    Ok(GenerateResult { path, sections })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                main.catalog-page {
                    (content)
                }
            }
        }
    }
}

/// Renders a full page containing `sections` in order.
pub fn render_page(title: &str, sections: &[RenderedSection]) -> Markup {
    base_document(title, CSS_STATIC, render_sections(sections))
}

/// Renders `sections` back to back, without a document around them.
pub fn render_sections(sections: &[RenderedSection]) -> Markup {
    html! {
        @for section in sections {
            (render_section(section))
        }
    }
}

/// Renders one section: anchored heading plus card grid.
pub fn render_section(section: &RenderedSection) -> Markup {
    let anchor = &section.heading.anchor;
    html! {
        section.catalog-section {
            h2 id=(anchor) {
                a href={ "#" (anchor) } { (section.heading.text) }
            }
            div.card-grid style=(section.columns.to_css()) {
                @for card in &section.cards {
                    (render_card(card))
                }
            }
        }
    }
}

fn render_card(card: &Card) -> Markup {
    let link = &card.link;
    html! {
        div.card data-key=(card.key) {
            h3.card-title { (card.title) }
            @if !card.summary.is_empty() {
                p.card-summary { (card.summary) }
            }
            p.card-action {
                a.card-link
                    href=(link.href)
                    target=[link.is_external().then_some("_blank")]
                    rel=[link.is_external().then_some("noopener")]
                    aria-disabled=[(!link.is_available()).then_some("true")] {
                    (link.label)
                    span.arrow aria-hidden="true" { "→" }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CatalogRenderer, SectionKind, render};
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn guides_section() -> RenderedSection {
        let catalog = catalog_of(vec![
            decl("mnemonics", "/mnemonics", "Mnemonics")
                .with_summary("Learn how to use mnemonics."),
            decl("hd_key", "/hd_key", "HD Key"),
        ]);
        render("Guides", "guides", &catalog).unwrap()
    }

    #[test]
    fn section_heading_has_anchor() {
        let html = render_section(&guides_section()).into_string();
        assert!(html.contains(r#"<h2 id="guides">"#));
        assert!(html.contains(r##"href="#guides""##));
        assert!(html.contains("Guides"));
    }

    #[test]
    fn section_cards_in_order() {
        let html = render_section(&guides_section()).into_string();
        let first = html.find("Mnemonics").unwrap();
        let second = html.find("HD Key").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"data-key="mnemonics""#));
        assert!(html.contains(r#"data-key="hd_key""#));
    }

    #[test]
    fn card_link_and_label() {
        let html = render_section(&guides_section()).into_string();
        assert!(html.contains(r#"href="/mnemonics""#));
        assert!(html.contains("Read more"));
        assert!(html.contains("card-link"));
    }

    #[test]
    fn empty_summary_is_omitted() {
        let html = render_section(&guides_section()).into_string();
        assert_eq!(html.matches("card-summary").count(), 1);
        assert!(html.contains("Learn how to use mnemonics."));
    }

    #[test]
    fn grid_carries_columns() {
        let html = render_section(&guides_section()).into_string();
        assert!(html.contains("--cols-base: 1; --cols-sm: 2; --cols-xl: 4;"));
    }

    #[test]
    fn empty_section_renders_heading_and_empty_grid() {
        let section = render("Guides", "guides", &catalog_of(vec![])).unwrap();
        let html = render_section(&section).into_string();
        assert!(html.contains(r#"<h2 id="guides">"#));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn external_link_opens_new_tab() {
        let catalog = catalog_of(vec![decl("walletd", "https://crates.io", "walletd")]);
        let section = CatalogRenderer::for_kind(SectionKind::Libraries)
            .render("Crates", "crates", &catalog)
            .unwrap();
        let html = render_section(&section).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener""#));
        assert!(html.contains("Learn more"));
    }

    #[test]
    fn internal_link_stays_in_tab() {
        let html = render_section(&guides_section()).into_string();
        assert!(!html.contains("_blank"));
        assert!(!html.contains("aria-disabled"));
    }

    #[test]
    fn placeholder_link_is_disabled_anchor() {
        let catalog = catalog_of(vec![decl("walletd_bip39", "#", "walletd_bip39")]);
        let section = render("Crates", "crates", &catalog).unwrap();
        let html = render_section(&section).into_string();
        assert!(html.contains(r##"href="#crates""##));
        assert!(html.contains(r#"aria-disabled="true""#));
    }

    #[test]
    fn html_escape_in_maud() {
        let catalog = catalog_of(vec![
            decl("xss", "/x", "<script>alert('xss')</script>").with_summary("a & b"),
        ]);
        let section = render("Guides", "guides", &catalog).unwrap();
        let html = render_section(&section).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn page_includes_doctype_title_and_css() {
        let doc = render_page("walletD Documentation", &[guides_section()]).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>walletD Documentation</title>"));
        assert!(doc.contains(".card-grid"));
    }

    #[test]
    fn generate_writes_index() {
        let tmp = TempDir::new().unwrap();
        let result = generate(&SiteConfig::default(), tmp.path(), false).unwrap();
        assert_eq!(result.path, tmp.path().join(INDEX_FILE));
        assert_eq!(result.sections.len(), 2);

        let html = fs::read_to_string(&result.path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="guides""#));
        assert!(html.contains(r#"id="official-libraries""#));
        assert!(html.find(r#"id="guides""#) < html.find(r#"id="official-libraries""#));
    }

    #[test]
    fn generate_writes_fragment() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("partials");
        let result = generate(&SiteConfig::default(), &out, true).unwrap();
        assert_eq!(result.path, out.join(FRAGMENT_FILE));

        let html = fs::read_to_string(&result.path).unwrap();
        assert!(html.starts_with("<section"));
        assert!(!html.contains("<!DOCTYPE"));
    }

    #[test]
    fn generate_fails_without_writing_on_bad_catalog() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.guides.entries = Some(vec![decl("a", "/a", "")]);
        let result = generate(&config, tmp.path(), false);
        assert!(matches!(result, Err(GenerateError::Site(_))));
        assert!(!tmp.path().join(INDEX_FILE).exists());
    }
}
