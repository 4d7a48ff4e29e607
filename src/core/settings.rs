//! Built-in preview settings
//!
//! Spacing ratios are fractions of the font's units-per-em.

/// Glyphs narrower than this are treated as combining marks when spacing
pub const SMALL_ADVANCE_THRESHOLD: f64 = 10.0;

/// Margin given to composites that would otherwise overhang
pub const DEFAULT_MARGIN_RATIO: f64 = 0.05;

/// Margins below this are considered overhang and reset
pub const MIN_MARGIN_RATIO: f64 = 0.15;

pub const DEFAULT_TEXT_SIZE: u32 = 150;
pub const DEFAULT_LINE_HEIGHT: i32 = 200;

/// Number of base/mark input groups in calibration mode
pub const CALIBRATION_GROUP_COUNT: usize = 4;

/// Default (bases, marks) inputs for the calibration groups
pub const DEFAULT_CALIBRATION_GROUPS: [(&str, &str); CALIBRATION_GROUP_COUNT] = [
    ("dotlessi o s", "dieresis circumflex macron breve caron"),
    (
        "I O S",
        "dieresis.cap circumflex.cap macron.cap breve.cap caron.cap",
    ),
    ("I.sc O.sc S.sc", "dieresis circumflex macron breve caron"),
    ("", ""),
];

pub const APP_NAME: &str = "anchor-preview";
