//! TUI rendering for Folio using ratatui.

mod effects;
mod input;
mod layout;
mod preview;
mod theme;

pub use effects::apply_preview_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use layout::{ROW_PITCH, ScreenLayout, hit_test, project_rows, screen_layout};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{Backdrop, PortfolioView};

use self::preview::draw_preview;

/// Width reserved for the year column in the project list.
const YEAR_COLUMN: usize = 6;
/// Cells a hovered row shifts to the right.
const HOVER_SHIFT: u16 = 2;

/// Main draw function
pub fn draw(frame: &mut Frame, view: &PortfolioView) {
    let options = view.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    paint_backdrop(frame.buffer_mut(), area, view.backdrop(), &palette);

    let layout = screen_layout(area, view.layout_mode(), view.catalog().len());
    draw_projects(frame, view, layout.list, &palette);
    draw_info(frame, view, layout.info, &palette);

    if view.preview_visible() {
        let panel = match view.preview_effect() {
            Some(effect) => apply_preview_effect(effect, layout.preview, area),
            None => layout.preview,
        };
        draw_preview(frame, view, panel.intersection(area), &palette, &glyphs);
    }
}

fn paint_backdrop(buf: &mut Buffer, area: Rect, backdrop: Backdrop, palette: &Palette) {
    let width = f32::from(area.width.max(1));
    let height = f32::from(area.height.max(1));

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let color = match backdrop {
                Backdrop::Neutral => palette.neutral,
                Backdrop::Gradient { .. } if palette.gradient.is_empty() => palette.backdrop_flat,
                Backdrop::Gradient { phase } => {
                    // A quarter of the gradient is on screen at a time, running
                    // diagonally; the sweep slides that window along it.
                    let fx = f32::from(x - area.x) / width;
                    let fy = f32::from(y - area.y) / height;
                    let position = (fx + fy) / 2.0 * 0.25 + Backdrop::sweep(phase) * 0.75;
                    sample_gradient(palette.gradient, position)
                }
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(color);
            }
        }
    }
}

/// Linear interpolation across evenly spaced stops. `t` is clamped to `[0, 1]`.
fn sample_gradient(stops: &[Color], t: f32) -> Color {
    let Some((&first, rest)) = stops.split_first() else {
        return Color::Reset;
    };
    if rest.is_empty() {
        return first;
    }

    let t = t.clamp(0.0, 1.0);
    let segments = rest.len();
    let scaled = t * segments as f32;
    let index = (scaled.floor() as usize).min(segments - 1);
    let local = scaled - index as f32;
    lerp_color(stops[index], stops[index + 1], local)
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn draw_projects(frame: &mut Frame, view: &PortfolioView, area: Rect, palette: &Palette) {
    let rows = project_rows(area, view.catalog().len());
    for (row, project) in rows.into_iter().zip(view.catalog()) {
        let hovered = view.is_selected(project.id());
        let (year_style, title_style) = if hovered {
            (
                styles::hovered(styles::project_year(palette)),
                styles::hovered(styles::project_title(palette)),
            )
        } else {
            (styles::project_year(palette), styles::project_title(palette))
        };

        let row = if hovered {
            let shift = HOVER_SHIFT.min(row.width);
            Rect {
                x: row.x + shift,
                width: row.width - shift,
                ..row
            }
        } else {
            row
        };

        let line = Line::from(vec![
            Span::styled(format!("{:<YEAR_COLUMN$}", project.year()), year_style),
            Span::styled(project.title().to_string(), title_style),
        ]);
        frame.render_widget(Paragraph::new(line), row);
    }
}

fn draw_info(frame: &mut Frame, view: &PortfolioView, area: Rect, palette: &Palette) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let profile = view.profile();
    let faded = view.preview_visible();
    let fade = |style: Style| {
        if faded {
            styles::faded(style, palette)
        } else {
            style
        }
    };

    let name_style = styles::profile_name(palette);
    let mut name = vec![Span::styled(
        profile.name.clone(),
        fade(name_style.remove_modifier(Modifier::BOLD)),
    )];
    if let Some(surname) = &profile.surname {
        name.push(Span::raw(" "));
        name.push(Span::styled(surname.clone(), fade(name_style)));
    }

    let mut lines = vec![
        Line::from(name),
        Line::from(Span::styled(
            profile.role.clone(),
            styles::profile_role(palette),
        )),
        Line::default(),
    ];

    let label_width = profile
        .links
        .iter()
        .map(|link| link.label.width())
        .max()
        .unwrap_or(0);
    for link in &profile.links {
        let pad = label_width - link.label.width();
        lines.push(Line::from(vec![
            Span::styled(link.label.clone(), fade(styles::link_label(palette))),
            Span::raw(" ".repeat(pad + 2)),
            Span::styled(link.url.clone(), fade(styles::profile_role(palette))),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
