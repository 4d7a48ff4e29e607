//! UFO format conversion utilities
//!
//! Conversion from the norad UFO model into the read-only structures the
//! anchor engine works on. Nothing is converted back: previews never
//! modify the source font.

use anyhow::{Context, Result};
use norad::Font;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::data::{
    AnchorData, ComponentData, ContourData, FontData, GlyphData, PointData, PointTypeData,
};
use super::metrics::FontInfo;

const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Load a UFO source from disk and convert it
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<FontData> {
    let path = path.as_ref();
    let font = Font::load(path)
        .with_context(|| format!("Failed to load UFO from {}", path.display()))?;
    let data = FontData::from_norad_font(&font, Some(path.to_path_buf()));
    debug!(
        "Loaded {} glyphs from {}",
        data.glyphs.len(),
        path.display()
    );
    Ok(data)
}

impl FontData {
    /// Extract font data from the default layer of a norad Font
    pub fn from_norad_font(font: &Font, path: Option<PathBuf>) -> Self {
        let glyphs: HashMap<String, GlyphData> = font
            .default_layer()
            .iter()
            .map(|glyph| (glyph.name().to_string(), GlyphData::from_norad_glyph(glyph)))
            .collect();

        let glyph_order = glyph_order(font, &glyphs);

        Self {
            glyphs,
            glyph_order,
            info: FontInfo::from_norad_font(font),
            path,
        }
    }
}

/// Names from `public.glyphOrder` that exist in the layer, followed by any
/// remaining glyphs sorted by name
fn glyph_order(font: &Font, glyphs: &HashMap<String, GlyphData>) -> Vec<String> {
    let mut listed: HashSet<&str> = HashSet::new();
    let mut order: Vec<String> = font
        .lib
        .get(GLYPH_ORDER_KEY)
        .and_then(|value| value.as_array())
        .map(|names| {
            names
                .iter()
                .filter_map(|name| name.as_string())
                .filter(|name| glyphs.contains_key(*name) && listed.insert(*name))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut rest: Vec<String> = glyphs
        .keys()
        .filter(|name| !listed.contains(name.as_str()))
        .cloned()
        .collect();
    rest.sort();
    order.extend(rest);
    order
}

impl GlyphData {
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph) -> Self {
        Self {
            name: norad_glyph.name().to_string(),
            advance_width: norad_glyph.width,
            anchors: norad_glyph
                .anchors
                .iter()
                .map(AnchorData::from_norad_anchor)
                .collect(),
            contours: norad_glyph
                .contours
                .iter()
                .map(ContourData::from_norad_contour)
                .collect(),
            components: norad_glyph
                .components
                .iter()
                .map(ComponentData::from_norad_component)
                .collect(),
        }
    }
}

impl AnchorData {
    /// Unnamed anchors become anchors with an empty name
    pub fn from_norad_anchor(anchor: &norad::Anchor) -> Self {
        Self {
            name: anchor
                .name
                .as_ref()
                .map(|name| name.to_string())
                .unwrap_or_default(),
            x: anchor.x,
            y: anchor.y,
        }
    }
}

impl ComponentData {
    pub fn from_norad_component(norad_component: &norad::Component) -> Self {
        Self {
            base_glyph: norad_component.base.to_string(),
            transform: [
                norad_component.transform.x_scale,
                norad_component.transform.xy_scale,
                norad_component.transform.yx_scale,
                norad_component.transform.y_scale,
                norad_component.transform.x_offset,
                norad_component.transform.y_offset,
            ],
        }
    }
}

impl ContourData {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        Self {
            points: norad_contour
                .points
                .iter()
                .map(PointData::from_norad_point)
                .collect(),
        }
    }
}

impl PointData {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Self {
            x: norad_point.x,
            y: norad_point.y,
            point_type: PointTypeData::from_norad_point_type(&norad_point.typ),
        }
    }
}

impl PointTypeData {
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move => PointTypeData::Move,
            norad::PointType::Line => PointTypeData::Line,
            norad::PointType::OffCurve => PointTypeData::OffCurve,
            norad::PointType::Curve => PointTypeData::Curve,
            norad::PointType::QCurve => PointTypeData::QCurve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norad_glyph(name: &str) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(name);
        glyph.width = 500.0;
        glyph
    }

    #[test]
    fn converts_anchors_components_and_contours() {
        let mut glyph = norad_glyph("aacute");
        glyph.anchors.push(norad::Anchor::new(
            250.0,
            500.0,
            Some("top".parse().expect("valid name")),
            None,
            None,
        ));
        glyph.components.push(norad::Component::new(
            "a".parse().expect("valid name"),
            norad::AffineTransform {
                x_scale: 1.0,
                xy_scale: 0.0,
                yx_scale: 0.0,
                y_scale: 1.0,
                x_offset: 10.0,
                y_offset: 20.0,
            },
            None,
        ));
        glyph.contours.push(norad::Contour::new(
            vec![
                norad::ContourPoint::new(0.0, 0.0, norad::PointType::Line, false, None, None),
                norad::ContourPoint::new(100.0, 0.0, norad::PointType::Line, false, None, None),
            ],
            None,
        ));

        let data = GlyphData::from_norad_glyph(&glyph);

        assert_eq!(data.name, "aacute");
        assert_eq!(data.advance_width, 500.0);
        assert_eq!(data.anchors, vec![AnchorData::new("top", 250.0, 500.0)]);
        assert_eq!(data.components[0].base_glyph, "a");
        assert_eq!(data.components[0].transform[4..], [10.0, 20.0]);
        assert_eq!(data.contours[0].points.len(), 2);
        assert_eq!(data.contours[0].points[1].point_type, PointTypeData::Line);
    }

    #[test]
    fn unnamed_anchor_gets_empty_name() {
        let anchor = norad::Anchor::new(1.0, 2.0, None, None, None);
        assert_eq!(AnchorData::from_norad_anchor(&anchor).name, "");
    }

    #[test]
    fn glyph_order_appends_unlisted_glyphs() {
        let mut font = Font::new();
        for name in ["c", "b", "a"] {
            font.default_layer_mut().insert_glyph(norad_glyph(name));
        }
        font.lib.insert(
            GLYPH_ORDER_KEY.to_string(),
            plist::Value::Array(vec!["c".into(), "missing".into()]),
        );

        let data = FontData::from_norad_font(&font, None);
        assert_eq!(data.glyph_order, vec!["c", "a", "b"]);
    }

    #[test]
    fn repeated_glyph_order_entries_are_listed_once() {
        let mut font = Font::new();
        for name in ["c", "b", "a"] {
            font.default_layer_mut().insert_glyph(norad_glyph(name));
        }
        font.lib.insert(
            GLYPH_ORDER_KEY.to_string(),
            plist::Value::Array(vec!["a".into(), "c".into(), "a".into()]),
        );

        let data = FontData::from_norad_font(&font, None);
        assert_eq!(data.glyph_order, vec!["a", "c", "b"]);
    }

    #[test]
    fn loading_missing_path_reports_it() {
        let err = load_ufo_from_path("/definitely/not/here.ufo").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.ufo"));
    }
}
