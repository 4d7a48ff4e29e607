//! In-memory glyphs built for previews
//!
//! A `CompositeGlyph` is contour-only scratch data. It is owned by whoever
//! asked for it and never written back into the font.

use kurbo::{Rect, Vec2};
use serde::Serialize;
use std::fmt;

use crate::font_source::{contour_bounds, ContourData};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeGlyph {
    pub name: String,
    pub advance_width: f64,
    pub contours: Vec<ContourData>,
    /// Components that could not be flattened into contours
    pub unresolved: Vec<UnresolvedComponent>,
}

/// A component left out of a composite, and why
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnresolvedComponent {
    /// Glyph that holds the component
    pub parent: String,
    /// Glyph the component refers to
    pub base_glyph: String,
    pub reason: UnresolvedReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The referenced glyph is not in the font
    MissingBase,
    /// The referenced glyph contains the component's parent
    Cycle,
}

impl fmt::Display for UnresolvedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            UnresolvedReason::MissingBase => write!(
                f,
                "component {} in {} refers to a missing glyph",
                self.base_glyph, self.parent
            ),
            UnresolvedReason::Cycle => write!(
                f,
                "component {} in {} refers back to itself",
                self.base_glyph, self.parent
            ),
        }
    }
}

impl CompositeGlyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when every component was flattened
    pub fn is_displayable(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn bounds(&self) -> Option<Rect> {
        contour_bounds(&self.contours)
    }

    pub fn left_margin(&self) -> Option<f64> {
        self.bounds().map(|bounds| bounds.x0)
    }

    pub fn right_margin(&self) -> Option<f64> {
        self.bounds().map(|bounds| self.advance_width - bounds.x1)
    }

    /// Move the outline so the left margin becomes `margin`; the advance
    /// changes by the same amount so the right margin is kept
    pub fn set_left_margin(&mut self, margin: f64) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let delta = margin - bounds.x0;
        if delta == 0.0 {
            return;
        }
        let shift = Vec2::new(delta, 0.0);
        for contour in &mut self.contours {
            *contour = contour.translated(shift);
        }
        self.advance_width += delta;
    }

    /// Set the advance so the right margin becomes `margin`
    pub fn set_right_margin(&mut self, margin: f64) {
        if let Some(bounds) = self.bounds() {
            self.advance_width = bounds.x1 + margin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::tests::square;

    fn boxed() -> CompositeGlyph {
        CompositeGlyph {
            name: "box".to_string(),
            advance_width: 300.0,
            contours: vec![square(100.0, 0.0, 100.0)],
            unresolved: Vec::new(),
        }
    }

    #[test]
    fn left_margin_shifts_outline_and_keeps_right() {
        let mut glyph = boxed();
        glyph.set_left_margin(40.0);

        assert_eq!(glyph.left_margin(), Some(40.0));
        assert_eq!(glyph.right_margin(), Some(100.0));
        assert_eq!(glyph.advance_width, 240.0);
    }

    #[test]
    fn right_margin_sets_advance() {
        let mut glyph = boxed();
        glyph.set_right_margin(10.0);

        assert_eq!(glyph.advance_width, 210.0);
        assert_eq!(glyph.left_margin(), Some(100.0));
    }

    #[test]
    fn empty_composite_ignores_margin_changes() {
        let mut glyph = CompositeGlyph::new("empty");
        glyph.advance_width = 200.0;
        glyph.set_left_margin(50.0);
        glyph.set_right_margin(50.0);

        assert_eq!(glyph.advance_width, 200.0);
        assert!(glyph.left_margin().is_none());
    }

    #[test]
    fn unresolved_component_message_names_both_glyphs() {
        let missing = UnresolvedComponent {
            parent: "broken".to_string(),
            base_glyph: "ghost".to_string(),
            reason: UnresolvedReason::MissingBase,
        };
        assert_eq!(
            missing.to_string(),
            "component ghost in broken refers to a missing glyph"
        );
    }
}
