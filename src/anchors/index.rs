//! Font-wide anchor lookup tables
//!
//! The index answers "which glyphs carry `_top`", "which glyphs carry
//! `top`" and "which anchor does this mark use". It is rebuilt from scratch
//! whenever the font changes; it is never patched incrementally.

use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, error};

use super::kind::{parse_anchors, AnchorKind, ParsedAnchor, DEFAULT_CONTEXTUAL_TAG};
use crate::font_source::{FontData, GlyphData};

#[derive(Clone, Debug)]
pub struct AnchorIndex {
    contextual_tag: String,
    /// anchor name -> mark glyphs carrying `_name`, in glyph order
    marks_by_anchor: HashMap<String, Vec<String>>,
    /// anchor name -> base glyphs carrying `name`, in glyph order
    bases_by_anchor: HashMap<String, Vec<String>>,
    /// full contextual anchor name -> base glyphs carrying it
    contextual_bases_by_anchor: HashMap<String, Vec<String>>,
    /// mark glyph -> the anchor name it attaches with
    anchor_of_mark: HashMap<String, String>,
    /// Classified anchors of every indexed glyph
    glyph_anchors: HashMap<String, Vec<ParsedAnchor>>,
    /// Marks found with more than one mark anchor name
    inconsistent_marks: Vec<String>,
}

impl Default for AnchorIndex {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXTUAL_TAG)
    }
}

impl AnchorIndex {
    /// An empty index using `contextual_tag` to recognise contextual anchors
    pub fn new(contextual_tag: impl Into<String>) -> Self {
        Self {
            contextual_tag: contextual_tag.into(),
            marks_by_anchor: HashMap::new(),
            bases_by_anchor: HashMap::new(),
            contextual_bases_by_anchor: HashMap::new(),
            anchor_of_mark: HashMap::new(),
            glyph_anchors: HashMap::new(),
            inconsistent_marks: Vec::new(),
        }
    }

    /// Build an index for `font` with the default contextual tag
    pub fn from_font(font: &FontData) -> Self {
        let mut index = Self::default();
        index.rebuild(font);
        index
    }

    /// Clear every table and re-read all anchors of `font` in glyph order
    ///
    /// A mark carrying two different mark anchor names is reported but
    /// still indexed; the last name seen becomes its attachment anchor.
    pub fn rebuild(&mut self, font: &FontData) {
        self.marks_by_anchor.clear();
        self.bases_by_anchor.clear();
        self.contextual_bases_by_anchor.clear();
        self.anchor_of_mark.clear();
        self.glyph_anchors.clear();
        self.inconsistent_marks.clear();

        for glyph in font.iter_ordered() {
            let parsed = parse_anchors(glyph, &self.contextual_tag);
            for anchor in &parsed {
                match &anchor.kind {
                    AnchorKind::Mark(name) => {
                        register(&mut self.marks_by_anchor, name, &glyph.name);
                        let previous = self
                            .anchor_of_mark
                            .insert(glyph.name.clone(), name.clone());
                        if previous.is_some_and(|previous| previous != *name)
                            && !self.inconsistent_marks.contains(&glyph.name)
                        {
                            self.inconsistent_marks.push(glyph.name.clone());
                        }
                    }
                    AnchorKind::ContextualBase { name, .. } => {
                        register(&mut self.contextual_bases_by_anchor, name, &glyph.name);
                    }
                    AnchorKind::Base(name) => {
                        register(&mut self.bases_by_anchor, name, &glyph.name);
                    }
                }
            }
            self.glyph_anchors.insert(glyph.name.clone(), parsed);
        }

        for glyph_name in &self.inconsistent_marks {
            error!("Glyph {} has more than one type of mark anchor", glyph_name);
        }
        debug!(
            "Indexed anchors: {} marks, {} base anchor names, {} contextual anchor names",
            self.anchor_of_mark.len(),
            self.bases_by_anchor.len(),
            self.contextual_bases_by_anchor.len()
        );
    }

    /// Mark glyphs carrying `_anchor`
    pub fn marks_for(&self, anchor: &str) -> &[String] {
        self.marks_by_anchor
            .get(anchor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Base glyphs carrying `anchor`
    pub fn bases_for(&self, anchor: &str) -> &[String] {
        self.bases_by_anchor
            .get(anchor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Base glyphs carrying the full contextual anchor name
    pub fn contextual_bases_for(&self, anchor: &str) -> &[String] {
        self.contextual_bases_by_anchor
            .get(anchor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The anchor name a mark glyph attaches with
    pub fn mark_anchor(&self, glyph_name: &str) -> Option<&str> {
        self.anchor_of_mark.get(glyph_name).map(String::as_str)
    }

    pub fn is_mark(&self, glyph_name: &str) -> bool {
        self.anchor_of_mark.contains_key(glyph_name)
    }

    /// Marks that carry anchors of two or more mark anchor names
    pub fn inconsistent_marks(&self) -> &[String] {
        &self.inconsistent_marks
    }

    /// Classified anchors of `glyph`, from the index when it was indexed
    pub fn anchors_of<'a>(&'a self, glyph: &GlyphData) -> Cow<'a, [ParsedAnchor]> {
        match self.glyph_anchors.get(&glyph.name) {
            Some(parsed) => Cow::Borrowed(parsed.as_slice()),
            None => Cow::Owned(parse_anchors(glyph, &self.contextual_tag)),
        }
    }

    /// Split a synthesized contextual candidate such as `acutecomb_ctx`
    /// into its mark glyph and contextual suffix
    pub fn split_contextual_candidate<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)> {
        if self.contextual_tag.is_empty() {
            return None;
        }
        name.match_indices(self.contextual_tag.as_str())
            .map(|(pos, _)| name.split_at(pos))
            .find(|(mark, _)| self.is_mark(mark))
    }
}

/// Append `glyph` under `key`, skipping repeats from the same glyph
fn register(table: &mut HashMap<String, Vec<String>>, key: &str, glyph: &str) {
    let names = table.entry(key.to_string()).or_default();
    if names.last().map(String::as_str) != Some(glyph) {
        names.push(glyph.to_string());
    }
}
