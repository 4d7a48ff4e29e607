//! Anchor preview
//!
//! Finds the glyphs that attach to a glyph through mark anchors and builds
//! preview composites of every combination.
pub mod anchors;
pub mod assembly;
pub mod core;
pub mod font_source;
pub mod logging;
pub mod preview;
