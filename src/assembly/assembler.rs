//! Component flattening
//!
//! Glyphs built from components are expanded into plain contours with an
//! explicit work stack. Each entry carries the glyph to expand, its
//! placement (accumulated component transforms plus the requested offset)
//! and the chain of glyphs above it, which is how reference cycles are
//! caught.

use kurbo::{Affine, Vec2};
use tracing::warn;

use super::composite::{CompositeGlyph, UnresolvedComponent, UnresolvedReason};
use crate::font_source::{FontData, GlyphData};

enum Step<'g> {
    /// Queue the glyph's components, then its own contours
    Expand {
        glyph: &'g GlyphData,
        placement: Affine,
        lineage: Vec<&'g str>,
    },
    /// Copy the glyph's own contours into the target
    Outline {
        glyph: &'g GlyphData,
        placement: Affine,
    },
}

/// Builds contour-only composites from glyphs of one font
#[derive(Clone, Copy)]
pub struct GlyphAssembler<'f> {
    font: &'f FontData,
}

impl<'f> GlyphAssembler<'f> {
    pub fn new(font: &'f FontData) -> Self {
        Self { font }
    }

    /// Append the outline of `source`, moved by `offset`, to `target`
    ///
    /// Components are replaced by the contours of the glyphs they refer to,
    /// at any depth, in component order, followed by the glyph's own
    /// contours. A component's scale and skew apply to its base glyph before
    /// the component offset. Components referring to glyphs that are not in
    /// the font, or back to one of their own ancestors, are skipped and
    /// recorded in `target.unresolved`.
    pub fn assemble(&self, target: &mut CompositeGlyph, source: &GlyphData, offset: Vec2) {
        let mut stack = vec![Step::Expand {
            glyph: source,
            placement: Affine::translate(offset),
            lineage: vec![source.name.as_str()],
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Outline { glyph, placement } => {
                    target.contours.extend(
                        glyph
                            .contours
                            .iter()
                            .map(|contour| contour.transformed(placement)),
                    );
                }
                Step::Expand {
                    glyph,
                    placement,
                    lineage,
                } => {
                    stack.push(Step::Outline { glyph, placement });

                    let mut children = Vec::with_capacity(glyph.components.len());
                    for component in &glyph.components {
                        let Some(base) = self.font.glyph(&component.base_glyph) else {
                            warn!(
                                "Glyph {} uses component {} which is not in the font",
                                glyph.name, component.base_glyph
                            );
                            target.unresolved.push(UnresolvedComponent {
                                parent: glyph.name.clone(),
                                base_glyph: component.base_glyph.clone(),
                                reason: UnresolvedReason::MissingBase,
                            });
                            continue;
                        };
                        if lineage.contains(&base.name.as_str()) {
                            warn!(
                                "Glyph {} uses component {} which contains it",
                                glyph.name, component.base_glyph
                            );
                            target.unresolved.push(UnresolvedComponent {
                                parent: glyph.name.clone(),
                                base_glyph: component.base_glyph.clone(),
                                reason: UnresolvedReason::Cycle,
                            });
                            continue;
                        }

                        let mut child_lineage = lineage.clone();
                        child_lineage.push(base.name.as_str());
                        children.push(Step::Expand {
                            glyph: base,
                            placement: placement
                                * Affine::translate(component.offset())
                                * component.linear(),
                            lineage: child_lineage,
                        });
                    }
                    // Reversed so the first component is expanded first
                    stack.extend(children.into_iter().rev());
                }
            }
        }
    }

    /// A new composite holding the flattened outline of `glyph`
    pub fn flatten(&self, glyph: &GlyphData) -> CompositeGlyph {
        let mut composite = CompositeGlyph::new(glyph.name.clone());
        composite.advance_width = glyph.advance_width;
        self.assemble(&mut composite, glyph, Vec2::ZERO);
        composite
    }

    /// `base` followed by `mark` moved by `offset`, named `base+mark`
    pub fn compose(&self, base: &GlyphData, mark: &GlyphData, offset: Vec2) -> CompositeGlyph {
        let mut composite = CompositeGlyph::new(format!("{}+{}", base.name, mark.name));
        composite.advance_width = base.advance_width;
        self.assemble(&mut composite, base, Vec2::ZERO);
        self.assemble(&mut composite, mark, offset);
        composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::tests::{latin_marks_font, square};
    use crate::font_source::ComponentData;

    #[test]
    fn plain_glyph_is_copied_with_offset() {
        let font = latin_marks_font();
        let acute = font.glyph("acutecomb").expect("fixture glyph");
        let mut target = CompositeGlyph::new("scratch");

        GlyphAssembler::new(&font).assemble(&mut target, acute, Vec2::new(130.0, 480.0));

        let expected: Vec<_> = acute
            .contours
            .iter()
            .map(|contour| contour.translated(Vec2::new(130.0, 480.0)))
            .collect();
        assert_eq!(target.contours, expected);
        assert!(target.is_displayable());
    }

    #[test]
    fn nested_components_flatten_to_contours() {
        let mut font = latin_marks_font();
        font.insert_glyph(
            GlyphData::new("oacute.ring", 500.0)
                .with_component(ComponentData::new("oacute", 10.0, 0.0))
                .with_contour(square(0.0, 700.0, 20.0)),
        );
        let glyph = font.glyph("oacute.ring").expect("inserted glyph");

        let composite = GlyphAssembler::new(&font).flatten(glyph);

        // o, then acutecomb from oacute, then the glyph's own square
        assert_eq!(
            composite.contours,
            vec![
                square(60.0, 0.0, 400.0),
                square(220.0, 500.0, 80.0),
                square(0.0, 700.0, 20.0),
            ]
        );
    }

    #[test]
    fn component_scale_applies_before_offset() {
        let mut font = latin_marks_font();
        font.insert_glyph(GlyphData::new("dot", 100.0).with_contour(square(10.0, 10.0, 10.0)));
        font.insert_glyph(GlyphData::new("bigdot", 200.0).with_component(ComponentData {
            base_glyph: "dot".to_string(),
            transform: [2.0, 0.0, 0.0, 2.0, 5.0, 0.0],
        }));
        let glyph = font.glyph("bigdot").expect("inserted glyph");

        let composite = GlyphAssembler::new(&font).flatten(glyph);

        assert_eq!(composite.contours, vec![square(25.0, 20.0, 20.0)]);
    }

    #[test]
    fn missing_component_is_skipped_and_recorded() {
        let font = latin_marks_font();
        let broken = font.glyph("broken").expect("fixture glyph");

        let composite = GlyphAssembler::new(&font).flatten(broken);

        assert_eq!(composite.contours, vec![square(50.0, 0.0, 400.0)]);
        assert_eq!(
            composite.unresolved,
            vec![UnresolvedComponent {
                parent: "broken".to_string(),
                base_glyph: "ghost".to_string(),
                reason: UnresolvedReason::MissingBase,
            }]
        );
        assert!(!composite.is_displayable());
    }

    #[test]
    fn cyclic_components_terminate() {
        let mut font = FontData::new(1000.0);
        font.insert_glyph(
            GlyphData::new("a", 500.0)
                .with_component(ComponentData::new("b", 0.0, 0.0))
                .with_contour(square(0.0, 0.0, 10.0)),
        );
        font.insert_glyph(
            GlyphData::new("b", 500.0).with_component(ComponentData::new("a", 0.0, 0.0)),
        );
        let a = font.glyph("a").expect("inserted glyph");

        let composite = GlyphAssembler::new(&font).flatten(a);

        assert_eq!(composite.contours.len(), 1);
        assert_eq!(composite.unresolved.len(), 1);
        assert_eq!(composite.unresolved[0].reason, UnresolvedReason::Cycle);
        assert_eq!(composite.unresolved[0].parent, "b");
    }

    #[test]
    fn assembly_leaves_font_untouched() {
        let font = latin_marks_font();
        let before = font.glyphs.clone();
        let assembler = GlyphAssembler::new(&font);

        for glyph in font.iter_ordered() {
            let _ = assembler.flatten(glyph);
            let _ = assembler.compose(glyph, glyph, Vec2::new(1.0, 1.0));
        }

        assert_eq!(font.glyphs, before);
    }
}
