//! Site configuration module.
//!
//! Handles loading, validating, and merging `catalog.toml`. Stock defaults
//! (the values the documentation home page ships with) are the base layer;
//! a user file overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! page_title = "walletD Documentation"
//!
//! [guides]
//! enabled = true
//! title = "Guides"
//! anchor = "guides"          # letters, digits, '-' and '_' only
//! link_label = "Read more"
//!
//! [guides.columns]
//! base = 1                   # narrow screens
//! sm = 2                     # >= 640px
//! xl = 4                     # >= 1280px
//!
//! [libraries]
//! enabled = true
//! title = "Official Rust Crates"
//! anchor = "official-libraries"
//! link_label = "Learn more"
//!
//! [libraries.columns]
//! base = 1
//! sm = 2
//! xl = 3
//! ```
//!
//! ## Replacing a Catalog
//!
//! Either section can swap its built-in table for one declared inline:
//!
//! ```toml
//! [[guides.entries]]
//! identifier = "mnemonics"
//! target = "/mnemonics"
//! title = "Mnemonics"
//! summary = "Learn how to use mnemonics."
//! ```
//!
//! Inline entries are validated exactly like the built-in ones when the
//! site is built. Unknown keys are rejected to catch typos early.

use crate::catalog::EntryDeclaration;
use crate::render::{self, SectionKind};
use crate::types::Columns;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILE: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `catalog.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `<title>` of the generated page.
    pub page_title: String,
    /// The "Guides" section.
    pub guides: SectionConfig,
    /// The "Official Rust Crates" section.
    pub libraries: SectionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "walletD Documentation".to_string(),
            guides: SectionConfig::stock(SectionKind::Guides),
            libraries: SectionConfig::stock(SectionKind::Libraries),
        }
    }
}

/// Presentation settings for one catalog section.
///
/// Fields have no serde defaults of their own: they depend on the section
/// kind, so missing keys are filled from the stock layer by
/// [`resolve_config`] before deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    /// Whether the section is rendered at all.
    pub enabled: bool,
    /// Heading text.
    pub title: String,
    /// Deep-link anchor on the heading.
    pub anchor: String,
    /// Call-to-action text on every card.
    pub link_label: String,
    /// Responsive grid columns.
    pub columns: Columns,
    /// Inline entries replacing the built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<EntryDeclaration>>,
}

impl SectionConfig {
    /// Stock settings for a section kind.
    pub fn stock(kind: SectionKind) -> Self {
        Self {
            enabled: true,
            title: kind.default_title().to_string(),
            anchor: kind.default_anchor().to_string(),
            link_label: kind.default_link_label().to_string(),
            columns: kind.default_columns(),
            entries: None,
        }
    }

    fn validate(&self, key: &str) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{key}.title must not be empty"
            )));
        }
        if self.link_label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{key}.link_label must not be empty"
            )));
        }
        render::validate_anchor(&self.anchor)
            .map_err(|e| ConfigError::Validation(format!("{key}.anchor: {e}")))?;
        if !self.columns.is_valid() {
            return Err(ConfigError::Validation(format!(
                "{key}.columns values must be 1-{}",
                Columns::MAX
            )));
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page_title must not be empty".into(),
            ));
        }
        self.guides.validate("guides")?;
        self.libraries.validate("libraries")?;
        if self.guides.enabled && self.libraries.enabled && self.guides.anchor == self.libraries.anchor
        {
            return Err(ConfigError::Validation(format!(
                "guides and libraries share the anchor `{}`",
                self.guides.anchor
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `entries` array is replaced, never appended to.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `catalog.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `catalog.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `catalog.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Catalog Cards Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# <title> of the generated page.
page_title = "walletD Documentation"

# ---------------------------------------------------------------------------
# Guides section
# ---------------------------------------------------------------------------
[guides]
enabled = true
title = "Guides"
# Deep-link anchor (letters, digits, '-' and '_' only).
anchor = "guides"
# Call-to-action text shown on every card.
link_label = "Read more"

# Grid columns at each width. Columns reflow cards, never reorder them.
[guides.columns]
base = 1    # narrow screens
sm = 2      # >= 640px
xl = 4      # >= 1280px

# Replace the built-in guides with your own (order is kept):
# [[guides.entries]]
# identifier = "mnemonics"
# target = "/mnemonics"      # "/path", "https://...", or "#" if not ready
# title = "Mnemonics"
# summary = "Learn how to use mnemonics."

# ---------------------------------------------------------------------------
# Official Rust Crates section
# ---------------------------------------------------------------------------
[libraries]
enabled = true
title = "Official Rust Crates"
anchor = "official-libraries"
link_label = "Learn more"

[libraries.columns]
base = 1
sm = 2
xl = 3
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolve_str(overlay: &str) -> Result<SiteConfig, ConfigError> {
        let overlay: toml::Value = toml::from_str(overlay).unwrap();
        resolve_config(stock_defaults_value().unwrap(), Some(overlay))
    }

    #[test]
    fn default_config_sections() {
        let config = SiteConfig::default();
        assert_eq!(config.guides.title, "Guides");
        assert_eq!(config.guides.anchor, "guides");
        assert_eq!(config.guides.link_label, "Read more");
        assert_eq!(config.libraries.title, "Official Rust Crates");
        assert_eq!(config.libraries.anchor, "official-libraries");
        assert_eq!(config.libraries.link_label, "Learn more");
        assert_eq!(config.libraries.columns, Columns::new(1, 2, 3));
        assert!(config.guides.entries.is_none());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[libraries]
link_label = "View crate"

[libraries.columns]
xl = 4
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.libraries.link_label, "View crate");
        assert_eq!(config.libraries.columns, Columns::new(1, 2, 4));
        // Untouched values come from the stock layer
        assert_eq!(config.libraries.title, "Official Rust Crates");
        assert_eq!(config.guides, SectionConfig::stock(SectionKind::Guides));
    }

    #[test]
    fn load_config_inline_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[[guides.entries]]
identifier = "mnemonics"
target = "/mnemonics"
title = "Mnemonics"
summary = "Learn how to use mnemonics."

[[guides.entries]]
identifier = "hd_key"
target = "/hd_key"
title = "HD Key"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        let entries = config.guides.entries.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].identifier.as_deref(), Some("mnemonics"));
        assert_eq!(entries[1].summary, None);
        assert!(config.libraries.entries.is_none());
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result = resolve_str(
            r#"
[guides]
tittle = "Guides"
"#,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result = resolve_str(
            r#"
[tutorials]
enabled = true
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_entry_key_rejected() {
        let result = resolve_str(
            r#"
[[guides.entries]]
identifier = "a"
target = "/a"
name = "A"
"#,
        );
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_unsafe_anchor() {
        let result = resolve_str(
            r#"
[guides]
anchor = "my guides"
"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("guides.anchor"));
    }

    #[test]
    fn validate_columns_range() {
        let mut config = SiteConfig::default();
        config.guides.columns = Columns::new(1, 2, 7);
        assert!(config.validate().is_err());

        config.guides.columns = Columns::new(0, 2, 4);
        assert!(config.validate().is_err());

        config.guides.columns = Columns::new(6, 6, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_strings() {
        let mut config = SiteConfig::default();
        config.page_title = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.libraries.title = String::new();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.libraries.link_label = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_shared_anchor() {
        let mut config = SiteConfig::default();
        config.libraries.anchor = "guides".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("share the anchor"));

        // Not a conflict when one of them is switched off
        config.libraries.enabled = false;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[guides.columns]
base = 1
sm = 2
xl = 4
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[guides.columns]
xl = 3
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let columns = merged.get("guides").unwrap().get("columns").unwrap();
        assert_eq!(columns.get("xl").unwrap().as_integer(), Some(3));
        assert_eq!(columns.get("sm").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str(r#"list = [1, 2, 3]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"list = [9]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("list").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // stock config tests
    // =========================================================================

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.is_table());
        assert!(val.get("page_title").is_some());
        assert!(val.get("guides").is_some());
        assert!(val.get("libraries").is_some());
        assert!(val.get("guides").unwrap().get("entries").is_none());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let content = stock_config_toml();
        let config: SiteConfig = toml::from_str(content).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[guides]"));
        assert!(content.contains("[guides.columns]"));
        assert!(content.contains("[libraries]"));
        assert!(content.contains("[libraries.columns]"));
    }
}
