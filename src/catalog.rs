//! Catalog schema and load-time validation.
//!
//! A catalog is the ordered list of resources shown in one documentation
//! section ("Guides", "Official Rust Crates"). Entries are declared as plain
//! data and checked once by [`Catalog::load`]; after that the catalog is an
//! immutable value and every [`Catalog::entries`] call sees the same slice.
//!
//! ## Entry Shape
//!
//! ```text
//! identifier  required, non-empty, unique within the catalog
//! target      required, "#" placeholder | "/root/relative" | absolute URL
//! title       required, non-empty
//! summary     optional, defaults to ""
//! ```
//!
//! ## Validation
//!
//! The loader walks entries in declaration order and stops at the first
//! violation. Nothing is dropped or repaired: a bad declaration is a
//! [`SchemaError`] naming the offending entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

/// Target value meaning "this resource is not available yet".
pub const PLACEHOLDER_TARGET: &str = "#";

/// URL schemes accepted for absolute targets.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("entry {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },
    #[error("entry {position} has an empty identifier")]
    EmptyIdentifier { position: usize },
    #[error("entry {position} ({identifier}) has an empty title")]
    EmptyTitle { position: usize, identifier: String },
    #[error("duplicate identifier `{identifier}` at entries {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: usize,
        second: usize,
    },
    #[error("entry `{identifier}` has malformed target `{target}`: {reason}")]
    MalformedTarget {
        identifier: String,
        target: String,
        reason: String,
    },
}

/// One entry as written by the author, before validation.
///
/// Every field is optional here so that a missing field can be reported as
/// such rather than failing deserialization with a less useful message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl EntryDeclaration {
    /// Declare an entry with all required fields and an empty summary.
    pub fn new(
        identifier: impl Into<String>,
        target: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            identifier: Some(identifier.into()),
            target: Some(target.into()),
            title: Some(title.into()),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// How a target resolves once it reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Absolute `http`, `https` or `mailto` URL.
    External,
    /// Root-relative path on the documentation site itself.
    Internal,
    /// Resource not available yet; rendered as a same-page anchor.
    Placeholder,
}

/// A validated link target: the author's string plus its classification.
///
/// The raw string is kept as written (no URL normalization) so that the
/// rendered `href` matches the declaration exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    raw: String,
    kind: TargetKind,
}

impl Target {
    /// Classify and validate a target string.
    ///
    /// Returns the reason text on failure; [`Catalog::load`] wraps it into
    /// [`SchemaError::MalformedTarget`] together with the entry identifier.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let kind = classify_target(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == TargetKind::Placeholder
    }
}

fn classify_target(raw: &str) -> Result<TargetKind, String> {
    if raw.is_empty() {
        return Err("target is empty".into());
    }
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("target contains whitespace or control characters".into());
    }
    // Browsers read `\` as `/`, which can turn a path into an authority.
    if raw.contains('\\') {
        return Err("target contains a backslash".into());
    }
    if raw == PLACEHOLDER_TARGET {
        return Ok(TargetKind::Placeholder);
    }
    if raw.starts_with("//") {
        return Err("protocol-relative URLs are not allowed".into());
    }
    if raw.starts_with('/') {
        let base = Url::parse("https://docs.invalid/").map_err(|e| e.to_string())?;
        let joined = base.join(raw).map_err(|e| e.to_string())?;
        if joined.host_str() != base.host_str() {
            return Err("root-relative target resolves to another host".into());
        }
        return Ok(TargetKind::Internal);
    }
    match Url::parse(raw) {
        Ok(url) if !ALLOWED_SCHEMES.contains(&url.scheme()) => {
            Err(format!("scheme `{}` is not allowed", url.scheme()))
        }
        Ok(url) if url.scheme() != "mailto" && !has_authority(raw, url.scheme()) => Err(format!(
            "`{}` URLs must be written as `{}://host/...`",
            url.scheme(),
            url.scheme()
        )),
        Ok(url) if url.scheme() != "mailto" && !url.has_host() => Err("URL has no host".into()),
        Ok(_) => Ok(TargetKind::External),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Err("relative targets must start with `/`".into())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// True when `raw` spells out `<scheme>://` literally. The URL parser
/// accepts `https:host` too, but browsers treat that as a relative link.
fn has_authority(raw: &str, scheme: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= scheme.len() + 3
        && bytes[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
        && &bytes[scheme.len()..scheme.len() + 3] == b"://"
}

/// A validated catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub identifier: String,
    pub target: Target,
    pub title: String,
    pub summary: String,
}

/// An ordered, validated collection of entries for one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate a declaration and build a catalog preserving its order.
    pub fn load<I>(declaration: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = EntryDeclaration>,
    {
        let mut entries = Vec::new();
        // identifier → 1-based position of its first occurrence
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (idx, decl) in declaration.into_iter().enumerate() {
            let position = idx + 1;
            let entry = validate_entry(position, decl)?;
            if let Some(&first) = seen.get(&entry.identifier) {
                return Err(SchemaError::DuplicateIdentifier {
                    identifier: entry.identifier,
                    first,
                    second: position,
                });
            }
            seen.insert(entry.identifier.clone(), position);
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entry(position: usize, decl: EntryDeclaration) -> Result<CatalogEntry, SchemaError> {
    let missing = |field| SchemaError::MissingField { position, field };

    let identifier = decl.identifier.ok_or_else(|| missing("identifier"))?;
    let target = decl.target.ok_or_else(|| missing("target"))?;
    let title = decl.title.ok_or_else(|| missing("title"))?;

    if identifier.trim().is_empty() {
        return Err(SchemaError::EmptyIdentifier { position });
    }
    if title.trim().is_empty() {
        return Err(SchemaError::EmptyTitle {
            position,
            identifier,
        });
    }
    let target = Target::parse(&target).map_err(|reason| SchemaError::MalformedTarget {
        identifier: identifier.clone(),
        target,
        reason,
    })?;

    Ok(CatalogEntry {
        identifier,
        target,
        title,
        summary: decl.summary.unwrap_or_default(),
    })
}
