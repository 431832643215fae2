//! Output types shared by the renderer, the HTML generator, and CLI output.
//!
//! A [`RenderedSection`] is the value handed to the host page template. It
//! carries no markup of its own; [`crate::generate`] turns it into HTML and
//! the `json` command serializes it as-is.

use crate::catalog::TargetKind;
use serde::{Deserialize, Serialize};

/// A rendered catalog section: heading plus cards in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub heading: Heading,
    pub cards: Vec<Card>,
    pub columns: Columns,
}

/// Section heading, tagged with the deep-link anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub text: String,
    pub anchor: String,
}

/// One card per catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Entry identifier, the stable rendering key.
    pub key: String,
    /// Emphasized label.
    pub title: String,
    /// Secondary text, possibly empty.
    pub summary: String,
    pub link: CardLink,
}

/// The single actionable link on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLink {
    /// Resolved destination. Placeholders point back at the section anchor.
    pub href: String,
    /// Visible call to action ("Read more", "Learn more").
    pub label: String,
    pub kind: TargetKind,
}

impl CardLink {
    pub fn is_external(&self) -> bool {
        self.kind == TargetKind::External
    }

    /// False for placeholder entries that have nowhere to go yet.
    pub fn is_available(&self) -> bool {
        self.kind != TargetKind::Placeholder
    }
}

/// Responsive column counts for the card grid.
///
/// - `base`: narrow viewports
/// - `sm`: 640px and wider
/// - `xl`: 1280px and wider
///
/// Columns only reflow cards left-to-right, top-to-bottom; they never
/// change card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Columns {
    pub base: u8,
    pub sm: u8,
    pub xl: u8,
}

impl Columns {
    pub const MAX: u8 = 6;

    pub const fn new(base: u8, sm: u8, xl: u8) -> Self {
        Self { base, sm, xl }
    }

    /// Render as CSS custom properties consumed by `.card-grid`.
    pub fn to_css(&self) -> String {
        format!(
            "--cols-base: {}; --cols-sm: {}; --cols-xl: {};",
            self.base, self.sm, self.xl
        )
    }

    /// True when every breakpoint is within `1..=MAX`.
    pub fn is_valid(&self) -> bool {
        [self.base, self.sm, self.xl]
            .iter()
            .all(|&n| (1..=Self::MAX).contains(&n))
    }
}

impl RenderedSection {
    /// Card keys in render order.
    pub fn keys(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.key.as_str()).collect()
    }
}
