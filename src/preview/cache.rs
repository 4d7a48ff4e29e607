//! Assembled previews, remembered per edited glyph

use std::collections::HashMap;

use super::PreviewItem;

/// All-or-nothing cache of preview lists keyed by the edited glyph's name
#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<String, Vec<PreviewItem>>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, glyph_name: &str) -> Option<&[PreviewItem]> {
        self.entries.get(glyph_name).map(Vec::as_slice)
    }

    pub fn insert(&mut self, glyph_name: impl Into<String>, items: Vec<PreviewItem>) {
        self.entries.insert(glyph_name.into(), items);
    }

    /// Forget every entry
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
