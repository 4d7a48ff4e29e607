//! Placement of one glyph against another through matching anchors

use kurbo::Vec2;

use super::index::AnchorIndex;
use super::kind::{AnchorKind, ParsedAnchor, MARK_PREFIX};
use crate::font_source::GlyphData;

impl AnchorIndex {
    /// Translation that puts `other` in place against `canvas`
    ///
    /// When `canvas` is a base, `other` is the mark and the result moves the
    /// mark anchor onto the base anchor named `mark anchor + suffix`. When
    /// `canvas` is a mark, the result is the mark-relative position of
    /// `other`: its negation places the canvas mark on `other`. A canvas
    /// mark meeting another mark stacks through the canvas's first
    /// non-mark anchor.
    ///
    /// Returns `None` when either anchor of the pair is missing.
    pub fn try_offset(&self, canvas: &GlyphData, other: &GlyphData, suffix: &str) -> Option<Vec2> {
        let canvas_anchors = self.anchors_of(canvas);
        let other_anchors = self.anchors_of(other);

        if self.is_mark(&canvas.name) {
            let (mark_anchor, base_anchor) = if self.is_mark(&other.name) {
                // mark-to-mark: canvas acts as the base for `other`
                let mark_anchor = canvas_anchors.iter().find(|a| !a.kind.is_mark())?;
                let wanted = format!("{MARK_PREFIX}{}", mark_anchor.kind.full_name());
                (mark_anchor, find_named(&other_anchors, &wanted)?)
            } else {
                let mark_anchor = canvas_anchors.iter().find(|a| a.kind.is_mark())?;
                let AnchorKind::Mark(name) = &mark_anchor.kind else {
                    return None;
                };
                (mark_anchor, find_named(&other_anchors, name)?)
            };
            Some(mark_anchor.position - base_anchor.position)
        } else {
            let mark_name = self.mark_anchor(&other.name)?;
            let base_anchor = find_named(&canvas_anchors, &format!("{mark_name}{suffix}"))?;
            let mark_anchor = find_named(&other_anchors, &format!("{MARK_PREFIX}{mark_name}"))?;
            Some(base_anchor.position - mark_anchor.position)
        }
    }

    /// Like [`try_offset`](Self::try_offset), with unresolvable pairs placed
    /// at the origin
    pub fn offset(&self, canvas: &GlyphData, other: &GlyphData, suffix: &str) -> Vec2 {
        self.try_offset(canvas, other, suffix).unwrap_or(Vec2::ZERO)
    }
}

fn find_named<'a>(anchors: &'a [ParsedAnchor], name: &str) -> Option<&'a ParsedAnchor> {
    anchors.iter().find(|anchor| anchor.is_named(name))
}
