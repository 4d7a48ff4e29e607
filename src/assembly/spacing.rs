//! Sidebearings of preview composites
//!
//! Applied by the preview after assembly. Composites take the advance of
//! their base, unless the glyph being edited is a zero-width mark, in which
//! case both margins get a default. Overhanging margins are then reset and
//! the user's extra sidebearings added on top.

use serde::{Deserialize, Serialize};

use super::composite::CompositeGlyph;
use crate::core::settings::{DEFAULT_MARGIN_RATIO, MIN_MARGIN_RATIO, SMALL_ADVANCE_THRESHOLD};

/// Extra space added to both sides of every preview composite
///
/// Stored in settings as `[left, right]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct ExtraSidebearings {
    pub left: u32,
    pub right: u32,
}

impl ExtraSidebearings {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }
}

impl From<[u32; 2]> for ExtraSidebearings {
    fn from([left, right]: [u32; 2]) -> Self {
        Self { left, right }
    }
}

impl From<ExtraSidebearings> for [u32; 2] {
    fn from(extra: ExtraSidebearings) -> Self {
        [extra.left, extra.right]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SpacingPolicy {
    pub units_per_em: f64,
    pub extra: ExtraSidebearings,
}

impl SpacingPolicy {
    pub fn new(units_per_em: f64, extra: ExtraSidebearings) -> Self {
        Self {
            units_per_em,
            extra,
        }
    }

    pub fn default_margin(&self) -> f64 {
        self.units_per_em * DEFAULT_MARGIN_RATIO
    }

    fn min_margin(&self) -> f64 {
        self.units_per_em * MIN_MARGIN_RATIO
    }

    /// Space a composite built while editing a glyph of `current_width`
    /// whose base glyph is `base_width` wide
    pub fn apply(&self, composite: &mut CompositeGlyph, current_width: f64, base_width: f64) {
        if current_width < SMALL_ADVANCE_THRESHOLD {
            composite.set_left_margin(self.default_margin());
            composite.set_right_margin(self.default_margin());
        } else {
            composite.advance_width = base_width;
        }

        if composite
            .left_margin()
            .is_some_and(|margin| margin < self.min_margin())
        {
            composite.set_left_margin(self.default_margin());
        }
        if composite
            .right_margin()
            .is_some_and(|margin| margin < self.min_margin())
        {
            composite.set_right_margin(self.default_margin());
        }

        self.add_extra(composite);
    }

    /// Space a calibration composite: default margins plus the extras
    pub fn apply_fixed(&self, composite: &mut CompositeGlyph) {
        composite.set_left_margin(self.default_margin() + f64::from(self.extra.left));
        composite.set_right_margin(self.default_margin() + f64::from(self.extra.right));
    }

    fn add_extra(&self, composite: &mut CompositeGlyph) {
        if let Some(left) = composite.left_margin() {
            composite.set_left_margin(left + f64::from(self.extra.left));
        }
        if let Some(right) = composite.right_margin() {
            composite.set_right_margin(right + f64::from(self.extra.right));
        }
    }
}
