//! Display parameters that shape preview assembly

use serde::{Deserialize, Serialize};

use crate::assembly::ExtraSidebearings;
use crate::core::settings::DEFAULT_CALIBRATION_GROUPS;

/// One block of calibration mode: every base is shown with every mark
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationGroup {
    /// Whitespace-separated base glyph names
    pub bases: String,
    /// Whitespace-separated mark glyph names
    pub marks: String,
}

impl CalibrationGroup {
    pub fn new(bases: impl Into<String>, marks: impl Into<String>) -> Self {
        Self {
            bases: bases.into(),
            marks: marks.into(),
        }
    }

    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.bases.split_whitespace()
    }

    pub fn mark_names(&self) -> impl Iterator<Item = &str> {
        self.marks.split_whitespace()
    }

    /// The built-in groups
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CALIBRATION_GROUPS
            .iter()
            .map(|(bases, marks)| Self::new(*bases, *marks))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSettings {
    pub extra_sidebearings: ExtraSidebearings,
    /// Glyphs shown between the composites
    pub extra_glyphs: Vec<String>,
    pub calibrate_mode: bool,
    pub calibrate_groups: Vec<CalibrationGroup>,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            extra_sidebearings: ExtraSidebearings::default(),
            extra_glyphs: Vec::new(),
            calibrate_mode: false,
            calibrate_groups: CalibrationGroup::defaults(),
        }
    }
}

/// Split a user-entered glyph list on whitespace
pub fn parse_glyph_list(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_split_on_any_whitespace() {
        let group = CalibrationGroup::new(" I  O\tS ", "dieresis.cap\ncaron.cap");
        assert_eq!(group.base_names().collect::<Vec<_>>(), ["I", "O", "S"]);
        assert_eq!(
            group.mark_names().collect::<Vec<_>>(),
            ["dieresis.cap", "caron.cap"]
        );
    }

    #[test]
    fn defaults_have_four_groups_with_empty_last() {
        let groups = CalibrationGroup::defaults();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].bases, "dotlessi o s");
        assert_eq!(groups[3], CalibrationGroup::default());
    }

    #[test]
    fn glyph_list_ignores_blank_input() {
        assert!(parse_glyph_list("   ").is_empty());
        assert_eq!(parse_glyph_list("H O"), ["H", "O"]);
    }
}
