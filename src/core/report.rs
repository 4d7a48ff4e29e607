//! Preview output for the terminal
//!
//! The preview list is printed either as a readable table or as JSON for
//! other tools to consume.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::assembly::CompositeGlyph;
use crate::preview::{PreviewItem, PreviewSession};

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub font: String,
    /// UFO the font was read from
    pub source: Option<PathBuf>,
    pub units_per_em: f64,
    /// Glyph being previewed; absent in calibration mode
    pub glyph: Option<String>,
    pub calibrate_mode: bool,
    pub candidates: Vec<String>,
    /// Marks carrying more than one mark anchor
    pub inconsistent_marks: Vec<String>,
    pub items: Vec<ReportItem>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportItem {
    Glyph {
        name: String,
        advance_width: f64,
        left_margin: Option<f64>,
        right_margin: Option<f64>,
        contours: usize,
    },
    LineBreak,
}

impl From<&CompositeGlyph> for ReportItem {
    fn from(glyph: &CompositeGlyph) -> Self {
        ReportItem::Glyph {
            name: glyph.name.clone(),
            advance_width: glyph.advance_width,
            left_margin: glyph.left_margin(),
            right_margin: glyph.right_margin(),
            contours: glyph.contours.len(),
        }
    }
}

impl From<&PreviewItem> for ReportItem {
    fn from(item: &PreviewItem) -> Self {
        match item {
            PreviewItem::Glyph(glyph) => glyph.into(),
            PreviewItem::LineBreak => ReportItem::LineBreak,
        }
    }
}

impl PreviewReport {
    pub fn new(session: &PreviewSession, items: &[PreviewItem]) -> Self {
        let calibrate_mode = session.settings().calibrate_mode;
        Self {
            font: session.font().info.get_display_name(),
            source: session.font().path.clone(),
            units_per_em: session.font().units_per_em(),
            glyph: if calibrate_mode {
                None
            } else {
                session.current_glyph().map(str::to_string)
            },
            calibrate_mode,
            candidates: session.candidates().to_vec(),
            inconsistent_marks: session.index().inconsistent_marks().to_vec(),
            items: items.iter().map(ReportItem::from).collect(),
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain text rendering, one combination per line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({} units per em)", self.font, self.units_per_em);
        if let Some(source) = &self.source {
            let _ = writeln!(out, "Source: {}", source.display());
        }
        match &self.glyph {
            Some(glyph) => {
                let _ = writeln!(out, "Glyph: {}", glyph);
                let _ = writeln!(out, "Attaches to: {}", join_or_none(&self.candidates));
            }
            None => {
                let _ = writeln!(out, "Calibration");
            }
        }
        if !self.inconsistent_marks.is_empty() {
            let _ = writeln!(
                out,
                "Marks with more than one mark anchor: {}",
                self.inconsistent_marks.join(" ")
            );
        }
        out.push('\n');

        for item in &self.items {
            match item {
                ReportItem::Glyph {
                    name,
                    advance_width,
                    left_margin,
                    right_margin,
                    contours,
                } => {
                    let _ = writeln!(
                        out,
                        "{:<32} adv {:>7} lsb {:>7} rsb {:>7} contours {}",
                        name,
                        format_units(Some(*advance_width)),
                        format_units(*left_margin),
                        format_units(*right_margin),
                        contours
                    );
                }
                ReportItem::LineBreak => out.push_str("--\n"),
            }
        }
        out
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(" ")
    }
}

fn format_units(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::DEFAULT_CONTEXTUAL_TAG;
    use crate::font_source::tests::latin_marks_font;
    use crate::preview::PreviewSettings;

    fn report_for(glyph: &str) -> PreviewReport {
        let mut session = PreviewSession::new(
            latin_marks_font(),
            PreviewSettings::default(),
            DEFAULT_CONTEXTUAL_TAG,
        );
        session.current_glyph_changed(Some(glyph));
        let items = session.preview();
        PreviewReport::new(&session, &items)
    }

    #[test]
    fn report_lists_combinations_with_metrics() {
        let report = report_for("macroncomb");

        assert_eq!(report.glyph.as_deref(), Some("macroncomb"));
        assert_eq!(report.candidates, ["I", "n", "o"]);
        let ReportItem::Glyph { name, contours, .. } = &report.items[0] else {
            panic!("expected a glyph item");
        };
        assert_eq!(name, "I+macroncomb");
        assert_eq!(*contours, 2);
    }

    #[test]
    fn json_tags_item_types() {
        let report = report_for("o");
        let json = report.to_json().expect("serialize report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse report");

        assert_eq!(value["glyph"], "o");
        assert_eq!(value["items"][0]["type"], "glyph");
        assert_eq!(value["items"][0]["name"], "o+acutecomb");
    }

    #[test]
    fn text_names_glyph_and_candidates() {
        let text = report_for("cedillacomb").to_text();

        assert!(text.contains("Glyph: cedillacomb"));
        assert!(text.contains("Attaches to: o oacute"));
        assert!(text.contains("oacute+cedillacomb"));
    }

    #[test]
    fn units_print_without_trailing_zeroes() {
        assert_eq!(format_units(Some(50.0)), "50");
        assert_eq!(format_units(Some(12.5)), "12.5");
        assert_eq!(format_units(None), "-");
    }
}
