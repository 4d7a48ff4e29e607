//! Font source data structures
//!
//! This module contains the read-only view of the font being edited that
//! the anchor engine works from, and its conversion from UFO sources.

pub mod conversions;
pub mod data;
pub mod metrics;

#[cfg(test)]
pub(crate) mod tests;

// Explicit re-exports for public API
pub use conversions::load_ufo_from_path;
pub use data::{
    contour_bounds, AnchorData, ComponentData, ContourData, FontData, GlyphData, PointData,
    PointTypeData,
};
pub use metrics::{FontInfo, DEFAULT_UNITS_PER_EM};
