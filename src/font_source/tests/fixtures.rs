//! A small Latin font with bases, marks, composites and a contextual anchor

use crate::font_source::{ComponentData, ContourData, FontData, GlyphData};

/// Axis-aligned closed square contour
pub(crate) fn square(x: f64, y: f64, size: f64) -> ContourData {
    ContourData::polygon(&[
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
    ])
}

/// Glyphs:
/// - bases `o`, `n` (with a contextual `top_ctx` anchor), `I`
/// - marks `acutecomb`, `dieresis`, `macroncomb` (top only),
///   `tildecomb` (top, can take stacked marks), `cedillacomb` (bottom)
/// - composites `oacute` (o + acutecomb) and `broken` (o + missing glyph)
pub(crate) fn latin_marks_font() -> FontData {
    let mut font = FontData::new(1000.0);

    font.insert_glyph(
        GlyphData::new("o", 500.0)
            .with_contour(square(50.0, 0.0, 400.0))
            .with_anchor("top", 250.0, 500.0)
            .with_anchor("bottom", 250.0, 0.0),
    );
    font.insert_glyph(
        GlyphData::new("n", 560.0)
            .with_contour(square(60.0, 0.0, 440.0))
            .with_anchor("top", 280.0, 500.0)
            .with_anchor("top_ctx", 300.0, 540.0),
    );
    font.insert_glyph(
        GlyphData::new("I", 300.0)
            .with_contour(square(100.0, 0.0, 100.0))
            .with_anchor("top", 150.0, 700.0),
    );
    font.insert_glyph(
        GlyphData::new("acutecomb", 0.0)
            .with_contour(square(80.0, 20.0, 80.0))
            .with_anchor("_top", 120.0, 20.0),
    );
    font.insert_glyph(
        GlyphData::new("dieresis", 0.0)
            .with_contour(square(-100.0, 10.0, 60.0))
            .with_contour(square(40.0, 10.0, 60.0))
            .with_anchor("_top", 0.0, 10.0),
    );
    font.insert_glyph(
        GlyphData::new("macroncomb", 0.0)
            .with_contour(square(-120.0, 20.0, 40.0))
            .with_anchor("_top", 0.0, 20.0),
    );
    font.insert_glyph(
        GlyphData::new("tildecomb", 0.0)
            .with_contour(square(-110.0, 30.0, 60.0))
            .with_anchor("_top", 0.0, 30.0)
            .with_anchor("top", 0.0, 160.0),
    );
    font.insert_glyph(
        GlyphData::new("cedillacomb", 0.0)
            .with_contour(square(-40.0, -180.0, 80.0))
            .with_anchor("_bottom", 0.0, 0.0),
    );
    font.insert_glyph(
        GlyphData::new("oacute", 500.0)
            .with_component(ComponentData::new("o", 0.0, 0.0))
            .with_component(ComponentData::new("acutecomb", 130.0, 480.0))
            .with_anchor("bottom", 250.0, 0.0),
    );
    font.insert_glyph(
        GlyphData::new("broken", 500.0)
            .with_component(ComponentData::new("o", 0.0, 0.0))
            .with_component(ComponentData::new("ghost", 0.0, 0.0)),
    );

    font
}
