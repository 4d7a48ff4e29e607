//! Preview lists for the display: combinations of the edited glyph with
//! everything that attaches to it, or the calibration groups

pub mod cache;
pub mod calibration;
pub mod session;
pub mod settings;

pub use cache::PreviewCache;
pub use calibration::build_calibration;
pub use session::PreviewSession;
pub use settings::{parse_glyph_list, CalibrationGroup, PreviewSettings};

use crate::assembly::CompositeGlyph;

/// One entry of the display's glyph line
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewItem {
    Glyph(CompositeGlyph),
    LineBreak,
}

impl PreviewItem {
    pub fn as_glyph(&self) -> Option<&CompositeGlyph> {
        match self {
            PreviewItem::Glyph(glyph) => Some(glyph),
            PreviewItem::LineBreak => None,
        }
    }
}
