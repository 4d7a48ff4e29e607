//! Which glyphs can be combined with a given glyph

use std::collections::BTreeSet;

use super::index::AnchorIndex;
use super::kind::AnchorKind;
use crate::font_source::GlyphData;

impl AnchorIndex {
    /// Names of the glyphs that attach to `glyph`, or that `glyph` attaches
    /// to, sorted and without duplicates
    ///
    /// A base anchor offers every mark carrying the matching mark anchor. A
    /// mark anchor offers every base carrying the matching base anchor. A
    /// contextual anchor offers the marks drawn for it, or when there are
    /// none, one synthesized name: the first mark of the default anchor
    /// followed by the contextual suffix. A mark that has no
    /// base anchor of its own is not offered other marks.
    pub fn resolve(&self, glyph: &GlyphData) -> Vec<String> {
        let anchors = self.anchors_of(glyph);
        let mut names: BTreeSet<String> = BTreeSet::new();

        for anchor in anchors.iter() {
            match &anchor.kind {
                AnchorKind::Base(name) => {
                    names.extend(self.marks_for(name).iter().cloned());
                }
                AnchorKind::Mark(name) => {
                    names.extend(self.bases_for(name).iter().cloned());
                    names.extend(self.contextual_bases_for(name).iter().cloned());
                }
                AnchorKind::ContextualBase { name, base, suffix } => {
                    let marks = self.marks_for(name);
                    if !marks.is_empty() {
                        names.extend(marks.iter().cloned());
                        continue;
                    }
                    if self.contextual_bases_for(name).is_empty() {
                        continue;
                    }
                    if let Some(mark) = self.marks_for(base).first() {
                        names.insert(format!("{mark}{suffix}"));
                    }
                }
            }
        }

        let can_take_marks = anchors.iter().any(|anchor| !anchor.kind.is_mark());
        if self.is_mark(&glyph.name) && !can_take_marks {
            names.retain(|name| !self.is_mark(name));
        }

        names.into_iter().collect()
    }
}
