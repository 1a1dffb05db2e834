//! Screen geometry shared by drawing and pointer hit-testing.
//!
//! Everything here is a pure function of the viewport and catalog length, so
//! the rows the pointer is tested against are exactly the rows that were drawn.

use ratatui::layout::{Position, Rect};

use folio_types::ui::{LayoutMode, Viewport};
use folio_types::{ProjectCatalog, ProjectId};

/// Vertical distance between consecutive project rows.
pub const ROW_PITCH: u16 = 2;
const LIST_WIDTH: u16 = 32;
const COLUMN_GAP: u16 = 4;
const MAX_CONTENT_WIDTH: u16 = 140;
const PHONE_WIDTH: u16 = 40;
const PHONE_MAX_HEIGHT: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub list: Rect,
    pub info: Rect,
    pub preview: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect, mode: LayoutMode, project_count: usize) -> ScreenLayout {
    let layout = match mode {
        LayoutMode::Wide => wide_layout(area),
        LayoutMode::Compact => compact_layout(area, project_count),
    };
    ScreenLayout {
        list: layout.list.intersection(area),
        info: layout.info.intersection(area),
        preview: layout.preview.intersection(area),
    }
}

fn top_padding(height: u16) -> u16 {
    (height / 5).clamp(1, 8)
}

fn phone_height(area: Rect) -> u16 {
    PHONE_MAX_HEIGHT.min(area.height.saturating_sub(2))
}

fn wide_layout(area: Rect) -> ScreenLayout {
    let content_width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
    let content_x = area.x + (area.width - content_width) / 2;
    let top = area.y + top_padding(area.height);
    let body_height = area.bottom().saturating_sub(top);

    let list = Rect::new(content_x, top, LIST_WIDTH.min(content_width), body_height);
    let info_x = list.right() + COLUMN_GAP;
    let info = Rect::new(
        info_x,
        top,
        (content_x + content_width).saturating_sub(info_x),
        body_height,
    );

    let width = PHONE_WIDTH.min(content_width);
    let height = phone_height(area);
    let preview = Rect::new(
        (content_x + content_width).saturating_sub(width),
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    ScreenLayout {
        list,
        info,
        preview,
    }
}

fn compact_layout(area: Rect, project_count: usize) -> ScreenLayout {
    let content_width = area.width.saturating_sub(2);
    let content_x = area.x + 1;
    let top = area.y + 2.min(area.height);

    let rows = u16::try_from(project_count).unwrap_or(u16::MAX);
    let list_height = rows
        .saturating_mul(ROW_PITCH)
        .min(area.bottom().saturating_sub(top));
    let list = Rect::new(content_x, top, content_width, list_height);

    let info_y = (list.bottom() + 1).min(area.bottom());
    let info = Rect::new(
        content_x,
        info_y,
        content_width,
        area.bottom().saturating_sub(info_y),
    );

    let width = PHONE_WIDTH.min(area.width.saturating_sub(2));
    let height = phone_height(area);
    let preview = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    ScreenLayout {
        list,
        info,
        preview,
    }
}

/// One single-line rect per project that fits in `list`, in catalog order.
#[must_use]
pub fn project_rows(list: Rect, count: usize) -> Vec<Rect> {
    let mut rows = Vec::with_capacity(count);
    for index in 0..count {
        let Ok(index) = u16::try_from(index) else {
            break;
        };
        let y = list.y.saturating_add(index.saturating_mul(ROW_PITCH));
        if y >= list.bottom() {
            break;
        }
        rows.push(Rect::new(list.x, y, list.width, 1));
    }
    rows
}

/// The project whose row lies under the pointer, if any.
#[must_use]
pub fn hit_test(
    viewport: Viewport,
    catalog: &ProjectCatalog,
    column: u16,
    row: u16,
) -> Option<ProjectId> {
    let area = Rect::new(0, 0, viewport.width, viewport.height);
    let layout = screen_layout(area, viewport.layout_mode(), catalog.len());
    let position = Position::new(column, row);
    project_rows(layout.list, catalog.len())
        .into_iter()
        .zip(catalog.iter())
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, project)| project.id())
}
