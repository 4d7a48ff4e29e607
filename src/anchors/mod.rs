//! Anchor classification, indexing, attachment resolution and offsets

pub mod index;
pub mod kind;
pub mod offset;
pub mod resolver;

pub use index::AnchorIndex;
pub use kind::{parse_anchors, AnchorKind, ParsedAnchor, DEFAULT_CONTEXTUAL_TAG, MARK_PREFIX};
