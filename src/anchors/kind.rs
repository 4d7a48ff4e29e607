//! Anchor naming conventions
//!
//! An anchor named `_top` makes its glyph a mark that attaches to `top`.
//! An unprefixed `top` makes its glyph a base for `top` marks. A base anchor
//! whose name contains the contextual tag (`top_ctx`) is an alternate
//! attachment point used only in a specific context.

use kurbo::Point;

use crate::font_source::{AnchorData, GlyphData};

/// Leading character of mark attachment anchors
pub const MARK_PREFIX: char = '_';

/// Default tag marking contextual base anchors
pub const DEFAULT_CONTEXTUAL_TAG: &str = "_ctx";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// `top`: the glyph accepts marks carrying `_top`
    Base(String),
    /// `_top`: the glyph is a mark attaching to `top`
    Mark(String),
    /// `top_ctx`: a context-specific alternate of `top`
    ContextualBase {
        /// Full anchor name, e.g. `top_ctx`
        name: String,
        /// Name of the default anchor, e.g. `top`
        base: String,
        /// Everything from the tag onwards, e.g. `_ctx`
        suffix: String,
    },
}

impl AnchorKind {
    /// Classify an anchor name
    ///
    /// Names that are empty, or only the prefix, still classify: they map
    /// to a base or mark with an empty name. An empty tag disables
    /// contextual anchors.
    pub fn parse(name: &str, contextual_tag: &str) -> Self {
        if let Some(stripped) = name.strip_prefix(MARK_PREFIX) {
            return AnchorKind::Mark(stripped.to_string());
        }
        match name.find(contextual_tag) {
            Some(pos) if !contextual_tag.is_empty() => AnchorKind::ContextualBase {
                name: name.to_string(),
                base: name[..pos].to_string(),
                suffix: name[pos..].to_string(),
            },
            _ => AnchorKind::Base(name.to_string()),
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, AnchorKind::Mark(_))
    }

    /// The anchor name as written in the source
    pub fn full_name(&self) -> String {
        match self {
            AnchorKind::Base(name) => name.clone(),
            AnchorKind::Mark(name) => format!("{MARK_PREFIX}{name}"),
            AnchorKind::ContextualBase { name, .. } => name.clone(),
        }
    }
}

/// An anchor with its name already classified
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedAnchor {
    pub kind: AnchorKind,
    pub position: Point,
}

impl ParsedAnchor {
    pub fn from_anchor(anchor: &AnchorData, contextual_tag: &str) -> Self {
        Self {
            kind: AnchorKind::parse(&anchor.name, contextual_tag),
            position: anchor.position(),
        }
    }

    /// True if this anchor is written exactly as `name`
    pub fn is_named(&self, name: &str) -> bool {
        match &self.kind {
            AnchorKind::Base(base) => base == name,
            AnchorKind::Mark(mark) => name
                .strip_prefix(MARK_PREFIX)
                .is_some_and(|stripped| stripped == mark),
            AnchorKind::ContextualBase { name: full, .. } => full == name,
        }
    }
}

/// Classify every anchor of a glyph, keeping source order
pub fn parse_anchors(glyph: &GlyphData, contextual_tag: &str) -> Vec<ParsedAnchor> {
    glyph
        .anchors
        .iter()
        .map(|anchor| ParsedAnchor::from_anchor(anchor, contextual_tag))
        .collect()
}
