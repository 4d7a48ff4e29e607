//! The preview session
//!
//! Owns the font snapshot, the anchor index and the preview cache, and
//! reacts to the host editor's events. The host serializes events, so the
//! session is plain single-threaded state.

use kurbo::Vec2;
use tracing::{debug, warn};

use super::cache::PreviewCache;
use super::calibration::build_calibration;
use super::settings::{parse_glyph_list, CalibrationGroup, PreviewSettings};
use super::PreviewItem;
use crate::anchors::AnchorIndex;
use crate::assembly::{CompositeGlyph, ExtraSidebearings, GlyphAssembler, SpacingPolicy};
use crate::font_source::{FontData, GlyphData};

pub struct PreviewSession {
    font: FontData,
    index: AnchorIndex,
    cache: PreviewCache,
    settings: PreviewSettings,
    current_glyph: Option<String>,
    /// Names offered for the current glyph
    candidates: Vec<String>,
    /// Names picked by the user to overlay on the current glyph
    selection: Vec<String>,
}

impl PreviewSession {
    pub fn new(font: FontData, settings: PreviewSettings, contextual_tag: &str) -> Self {
        let mut index = AnchorIndex::new(contextual_tag);
        index.rebuild(&font);
        Self {
            font,
            index,
            cache: PreviewCache::new(),
            settings,
            current_glyph: None,
            candidates: Vec::new(),
            selection: Vec::new(),
        }
    }

    pub fn font(&self) -> &FontData {
        &self.font
    }

    pub fn index(&self) -> &AnchorIndex {
        &self.index
    }

    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    pub fn current_glyph(&self) -> Option<&str> {
        self.current_glyph.as_deref()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    /// The font's glyphs or anchors changed
    pub fn font_modified(&mut self, font: FontData) {
        self.font = font;
        self.reload();
    }

    /// The host switched to a different font
    pub fn current_font_changed(&mut self, font: FontData) {
        self.font = font;
        self.reload();
    }

    fn reload(&mut self) {
        self.index.rebuild(&self.font);
        self.cache.invalidate_all();
        self.candidates.clear();
        self.selection.clear();
        self.refresh_candidates();
    }

    /// The glyph being edited changed, or editing stopped
    pub fn current_glyph_changed(&mut self, glyph_name: Option<&str>) {
        self.current_glyph = glyph_name.map(str::to_string);
        self.refresh_candidates();
    }

    fn refresh_candidates(&mut self) {
        self.candidates = self
            .current_glyph
            .as_deref()
            .and_then(|name| self.font.glyph(name))
            .map(|glyph| self.index.resolve(glyph))
            .unwrap_or_default();
        self.selection
            .retain(|name| self.candidates.contains(name));
    }

    pub fn set_extra_sidebearings(&mut self, extra: ExtraSidebearings) {
        self.settings.extra_sidebearings = extra;
        self.cache.invalidate_all();
    }

    /// Set the flanking glyphs from a whitespace-separated list
    pub fn set_extra_glyphs(&mut self, input: &str) {
        self.settings.extra_glyphs = parse_glyph_list(input);
        self.cache.invalidate_all();
    }

    pub fn set_calibrate_mode(&mut self, enabled: bool) {
        self.settings.calibrate_mode = enabled;
    }

    pub fn set_calibrate_groups(&mut self, groups: Vec<CalibrationGroup>) {
        self.settings.calibrate_groups = groups;
    }

    /// Names to draw on top of the current glyph; names that are not
    /// current candidates are ignored
    pub fn set_selection(&mut self, names: &[String]) {
        self.selection = names
            .iter()
            .filter(|name| self.candidates.contains(name))
            .cloned()
            .collect();
    }

    fn spacing(&self) -> SpacingPolicy {
        SpacingPolicy::new(self.font.units_per_em(), self.settings.extra_sidebearings)
    }

    /// Glyphs for the display, in order
    ///
    /// In calibration mode these are the calibration groups. Otherwise they
    /// are the current glyph combined with each candidate, cached until
    /// the font or the spacing settings change.
    pub fn preview(&mut self) -> Vec<PreviewItem> {
        if self.settings.calibrate_mode {
            return build_calibration(
                &self.font,
                &self.index,
                &self.settings.calibrate_groups,
                &self.spacing(),
            );
        }

        let Some(current_name) = self.current_glyph.clone() else {
            return Vec::new();
        };
        if let Some(items) = self.cache.get(&current_name) {
            debug!("Using cached preview for {}", current_name);
            return items.to_vec();
        }

        let Some(current) = self.font.glyph(&current_name) else {
            return Vec::new();
        };
        let composites = self.combinations(current);
        let items = self.with_flanking_glyphs(composites);
        self.cache.insert(current_name, items.clone());
        items
    }

    /// The current glyph combined with every candidate that can be shown
    fn combinations(&self, current: &GlyphData) -> Vec<CompositeGlyph> {
        let assembler = GlyphAssembler::new(&self.font);
        let policy = self.spacing();
        let mut composites = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            let composite = match self.font.glyph(candidate) {
                Some(mark) if self.index.is_mark(candidate) => {
                    let offset = self.index.offset(current, mark, "");
                    let mut composite = assembler.compose(current, mark, offset);
                    policy.apply(&mut composite, current.advance_width, current.advance_width);
                    composite
                }
                Some(base) => {
                    let offset = self.index.offset(base, current, "");
                    let mut composite = assembler.compose(base, current, offset);
                    policy.apply(&mut composite, current.advance_width, base.advance_width);
                    composite
                }
                None => {
                    let Some((mark, suffix)) = self.index.split_contextual_candidate(candidate)
                    else {
                        debug!("Candidate {} is not in the font", candidate);
                        continue;
                    };
                    let Some(mark) = self.font.glyph(mark) else {
                        continue;
                    };
                    let offset = self.index.offset(current, mark, suffix);
                    let mut composite = assembler.compose(current, mark, offset);
                    composite.name = format!("{}+{}", current.name, candidate);
                    policy.apply(&mut composite, current.advance_width, current.advance_width);
                    composite
                }
            };

            if let Some(unresolved) = composite.unresolved.first() {
                warn!(
                    "Combination with {} can't be previewed because it contains component {}",
                    candidate, unresolved.base_glyph
                );
                continue;
            }
            composites.push(composite);
        }

        composites
    }

    /// Place the flanking glyphs before, between and after the composites
    fn with_flanking_glyphs(&self, composites: Vec<CompositeGlyph>) -> Vec<PreviewItem> {
        let assembler = GlyphAssembler::new(&self.font);
        let flanks: Vec<CompositeGlyph> = self
            .settings
            .extra_glyphs
            .iter()
            .filter_map(|name| self.font.glyph(name))
            .map(|glyph| assembler.flatten(glyph))
            .filter(CompositeGlyph::is_displayable)
            .collect();

        if flanks.is_empty() || composites.is_empty() {
            return composites.into_iter().map(PreviewItem::Glyph).collect();
        }

        let mut items: Vec<PreviewItem> = flanks.iter().cloned().map(PreviewItem::Glyph).collect();
        for composite in composites {
            items.push(PreviewItem::Glyph(composite));
            items.extend(flanks.iter().cloned().map(PreviewItem::Glyph));
        }
        items
    }

    /// Where to draw each selected glyph relative to the current glyph
    pub fn overlay_offsets(&self) -> Vec<(String, Vec2)> {
        let Some(current) = self
            .current_glyph
            .as_deref()
            .and_then(|name| self.font.glyph(name))
        else {
            return Vec::new();
        };

        self.selection
            .iter()
            .filter_map(|name| {
                if let Some(glyph) = self.font.glyph(name) {
                    return Some((name.clone(), self.index.offset(current, glyph, "")));
                }
                let (mark, suffix) = self.index.split_contextual_candidate(name)?;
                let glyph = self.font.glyph(mark)?;
                Some((name.clone(), self.index.offset(current, glyph, suffix)))
            })
            .collect()
    }
}
