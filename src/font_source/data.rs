//! Read-only font data used by the anchor engine
//!
//! These structures mirror the parts of a UFO glyph that anchor previews
//! need: advance, anchors, contours and components. They are extracted once
//! from the host font and never written back.

use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};
use std::collections::HashMap;
use std::path::PathBuf;

use super::metrics::FontInfo;

/// A snapshot of the font being edited
#[derive(Clone, Debug, Default)]
pub struct FontData {
    pub glyphs: HashMap<String, GlyphData>,
    /// Glyph names in the font's defined ordering
    pub glyph_order: Vec<String>,
    pub info: FontInfo,
    pub path: Option<PathBuf>,
}

impl FontData {
    /// Create an empty font with the given units-per-em
    pub fn new(units_per_em: f64) -> Self {
        Self {
            info: FontInfo {
                units_per_em,
                ..FontInfo::default()
            },
            ..Self::default()
        }
    }

    /// Look up a glyph by name
    pub fn glyph(&self, name: &str) -> Option<&GlyphData> {
        self.glyphs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Iterate glyphs in glyph order, skipping order entries with no glyph
    pub fn iter_ordered(&self) -> impl Iterator<Item = &GlyphData> {
        self.glyph_order
            .iter()
            .filter_map(|name| self.glyphs.get(name))
    }

    pub fn units_per_em(&self) -> f64 {
        self.info.units_per_em
    }

    /// Add or replace a glyph, appending new names to the glyph order
    pub fn insert_glyph(&mut self, glyph: GlyphData) {
        if !self.glyphs.contains_key(&glyph.name) {
            self.glyph_order.push(glyph.name.clone());
        }
        self.glyphs.insert(glyph.name.clone(), glyph);
    }
}

/// A single glyph as seen by the anchor engine
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphData {
    pub name: String,
    pub advance_width: f64,
    pub anchors: Vec<AnchorData>,
    pub contours: Vec<ContourData>,
    pub components: Vec<ComponentData>,
}

impl GlyphData {
    pub fn new(name: impl Into<String>, advance_width: f64) -> Self {
        Self {
            name: name.into(),
            advance_width,
            ..Self::default()
        }
    }

    pub fn with_anchor(mut self, name: &str, x: f64, y: f64) -> Self {
        self.anchors.push(AnchorData::new(name, x, y));
        self
    }

    pub fn with_contour(mut self, contour: ContourData) -> Self {
        self.contours.push(contour);
        self
    }

    pub fn with_component(mut self, component: ComponentData) -> Self {
        self.components.push(component);
        self
    }

    /// Find the first anchor with exactly this name
    pub fn anchor(&self, name: &str) -> Option<&AnchorData> {
        self.anchors.iter().find(|anchor| anchor.name == name)
    }

    /// Bounds of the glyph's own contours (components are not included)
    pub fn bounds(&self) -> Option<Rect> {
        contour_bounds(&self.contours)
    }

    pub fn left_margin(&self) -> Option<f64> {
        self.bounds().map(|bounds| bounds.x0)
    }

    pub fn right_margin(&self) -> Option<f64> {
        self.bounds().map(|bounds| self.advance_width - bounds.x1)
    }
}

/// Union of the bounding boxes of a set of contours
pub fn contour_bounds(contours: &[ContourData]) -> Option<Rect> {
    contours
        .iter()
        .filter(|contour| !contour.points.is_empty())
        .map(|contour| contour.to_bezpath().bounding_box())
        .reduce(|acc, rect| acc.union(rect))
}

/// A named attachment point
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorData {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl AnchorData {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A reference to another glyph, with its UFO-style affine transform
///
/// `transform` is `[xx, xy, yx, yy, dx, dy]`; the last two are the
/// component's offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentData {
    pub base_glyph: String,
    pub transform: [f64; 6],
}

impl ComponentData {
    /// A component placed at an offset with no scale or skew
    pub fn new(base_glyph: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self {
            base_glyph: base_glyph.into(),
            transform: [1.0, 0.0, 0.0, 1.0, dx, dy],
        }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.transform[4], self.transform[5])
    }

    /// The 2x2 part of the transform, without the offset
    pub fn linear(&self) -> Affine {
        let [xx, xy, yx, yy, _, _] = self.transform;
        Affine::new([xx, xy, yx, yy, 0.0, 0.0])
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContourData {
    pub points: Vec<PointData>,
}

impl ContourData {
    pub fn new(points: Vec<PointData>) -> Self {
        Self { points }
    }

    /// Closed polygon through the given on-curve points
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        Self {
            points: points
                .iter()
                .map(|&(x, y)| PointData::new(x, y, PointTypeData::Line))
                .collect(),
        }
    }

    /// A copy of this contour with every point mapped through `affine`
    pub fn transformed(&self, affine: Affine) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|point| point.transformed(affine))
                .collect(),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        self.transformed(Affine::translate(offset))
    }

    /// Build a kurbo path following UFO point semantics
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pending_offcurves: Vec<Point> = Vec::new();
        let mut first_point: Option<(Point, PointTypeData)> = None;

        for (idx, point) in self.points.iter().enumerate() {
            let pt = point.position();

            // UFO contours: first point defines start position
            if idx == 0 {
                path.move_to(pt);
                first_point = Some((pt, point.point_type));
                continue;
            }

            match point.point_type {
                PointTypeData::Move => path.move_to(pt),
                PointTypeData::Line => path.line_to(pt),
                PointTypeData::OffCurve => pending_offcurves.push(pt),
                PointTypeData::Curve | PointTypeData::QCurve => {
                    flush_segment(&mut path, &mut pending_offcurves, point.point_type, pt)
                }
            }
        }

        // The first point's type defines how to reach it from the last point
        if let Some((first_pt, first_type)) = first_point {
            match first_type {
                PointTypeData::Move => {}
                PointTypeData::Line | PointTypeData::OffCurve => path.line_to(first_pt),
                PointTypeData::Curve | PointTypeData::QCurve => {
                    flush_segment(&mut path, &mut pending_offcurves, first_type, first_pt)
                }
            }
        }

        path.close_path();
        path
    }
}

/// Emit the segment ending at `end` using any pending off-curve points
fn flush_segment(
    path: &mut BezPath,
    pending: &mut Vec<Point>,
    point_type: PointTypeData,
    end: Point,
) {
    match (point_type, pending.len()) {
        (_, 0) => path.line_to(end),
        (_, 1) => path.quad_to(pending[0], end),
        (PointTypeData::Curve, n) => path.curve_to(pending[n - 2], pending[n - 1], end),
        (_, n) => {
            // TrueType implied on-curve points between consecutive off-curves
            for i in 0..n {
                let cp = pending[i];
                let seg_end = if i == n - 1 {
                    end
                } else {
                    cp.midpoint(pending[i + 1])
                };
                path.quad_to(cp, seg_end);
            }
        }
    }
    pending.clear();
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointData {
    pub x: f64,
    pub y: f64,
    pub point_type: PointTypeData,
}

impl PointData {
    pub fn new(x: f64, y: f64, point_type: PointTypeData) -> Self {
        Self { x, y, point_type }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn transformed(&self, affine: Affine) -> Self {
        let moved = affine * self.position();
        Self {
            x: moved.x,
            y: moved.y,
            point_type: self.point_type,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointTypeData {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}
