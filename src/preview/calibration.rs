//! Calibration mode: fixed base and mark lists shown side by side

use tracing::{debug, warn};

use super::settings::CalibrationGroup;
use super::PreviewItem;
use crate::anchors::AnchorIndex;
use crate::assembly::{GlyphAssembler, SpacingPolicy};
use crate::font_source::FontData;

/// Every base with every mark of each group, one line per group
///
/// Names missing from the font are skipped. Each group, including empty
/// ones, ends with a line break.
pub fn build_calibration(
    font: &FontData,
    index: &AnchorIndex,
    groups: &[CalibrationGroup],
    policy: &SpacingPolicy,
) -> Vec<PreviewItem> {
    let assembler = GlyphAssembler::new(font);
    let mut items = Vec::new();

    for group in groups {
        for base_name in group.base_names() {
            let Some(base) = font.glyph(base_name) else {
                debug!("Calibration base {} is not in the font", base_name);
                continue;
            };
            for mark_name in group.mark_names() {
                let Some(mark) = font.glyph(mark_name) else {
                    debug!("Calibration mark {} is not in the font", mark_name);
                    continue;
                };
                let mut composite = assembler.compose(base, mark, index.offset(base, mark, ""));
                if let Some(unresolved) = composite.unresolved.first() {
                    warn!(
                        "Combination of {} and {} can't be previewed: {}",
                        base_name, mark_name, unresolved
                    );
                    continue;
                }
                policy.apply_fixed(&mut composite);
                items.push(PreviewItem::Glyph(composite));
            }
        }
        items.push(PreviewItem::LineBreak);
    }

    items
}
