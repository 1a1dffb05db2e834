//! Preview panel entry animation.

use ratatui::layout::Rect;

use folio_engine::PreviewEffect;
use folio_types::ui::PreviewEffectKind;

/// Rows the panel rises through while it appears.
const SLIDE_ROWS: u16 = 3;

/// Apply a preview effect to transform the panel's resting rectangle.
#[must_use]
pub fn apply_preview_effect(effect: &PreviewEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        PreviewEffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(SLIDE_ROWS);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                x: base.x,
                y: base.y.saturating_add(y_offset),
                width: base.width,
                height: base.height,
            }
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
