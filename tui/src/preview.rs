//! The phone-shaped preview panel: status bar, chat header, transcript.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_engine::{ChatMessage, MessageBody, PortfolioView, Profile, Sender};

use crate::theme::{Glyphs, Palette, styles};

const HOME_INDICATOR_WIDTH: usize = 12;

pub(crate) fn draw_preview(
    frame: &mut Frame,
    view: &PortfolioView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    // Nothing selected, nothing drawn.
    let Some(messages) = view.conversation() else {
        return;
    };
    if area.width < 4 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.phone_frame).bg(palette.phone_bg))
        .style(styles::phone(palette));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status, header, divider, body, home] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(status_line(&view.clock_label(), status.width, palette, glyphs)),
        status,
    );
    frame.render_widget(
        Paragraph::new(header_lines(view.profile(), header.width, palette, glyphs)),
        header,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(usize::from(divider.width)),
            Style::default().fg(palette.divider),
        ))),
        divider,
    );

    let body_block = Block::default().padding(Padding::horizontal(1));
    let text_area = body_block.inner(body);
    frame.render_widget(
        Paragraph::new(transcript_lines(&messages, text_area.width, palette, glyphs))
            .block(body_block),
        body,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            glyphs.home_indicator.repeat(HOME_INDICATOR_WIDTH),
            Style::default().fg(palette.phone_frame),
        )))
        .alignment(Alignment::Center),
        home,
    );
}

/// Time on the left; signal and battery on the right.
fn status_line(time: &str, width: u16, palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    let left = format!(" {time}");
    let right = format!("{} {} ", glyphs.signal, glyphs.battery);
    let gap = usize::from(width)
        .saturating_sub(left.width() + right.width())
        .max(1);

    Line::from(vec![
        Span::styled(left, styles::phone(palette)),
        Span::styled(" ".repeat(gap), styles::phone(palette)),
        Span::styled(format!("{} ", glyphs.signal), styles::phone(palette)),
        Span::styled(
            format!("{} ", glyphs.battery),
            Style::default().fg(palette.battery).bg(palette.phone_bg),
        ),
    ])
}

fn header_lines(
    profile: &Profile,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let lead = format!(" {} {} ", glyphs.back, glyphs.avatar);
    let actions = format!("{}  {} ", glyphs.call, glyphs.video);
    let gap = usize::from(width)
        .saturating_sub(lead.width() + profile.name.width() + actions.width())
        .max(1);

    vec![
        Line::from(vec![
            Span::styled(lead.clone(), styles::phone(palette)),
            Span::styled(profile.name.clone(), styles::profile_name(palette)),
            Span::raw(" ".repeat(gap)),
            Span::styled(actions, styles::phone(palette)),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(lead.width())),
            Span::styled(profile.status.clone(), styles::status_muted(palette)),
        ]),
    ]
}

/// Lay out the conversation as bubbles, one blank line apart.
///
/// Bubbles take at most four fifths of the width; received ones hug the left
/// edge and sent ones the right.
pub(crate) fn transcript_lines(
    messages: &[ChatMessage],
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let max_bubble = (usize::from(width) * 4 / 5).max(6);
    let text_width = max_bubble.saturating_sub(2).max(1);
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        let style = match message.sender {
            Sender::Received => styles::received_bubble(palette),
            Sender::Sent => styles::sent_bubble(palette),
        };

        let rows = match &message.body {
            MessageBody::Text(text) => wrap_text(text, text_width),
            MessageBody::Image { uri, alt } => vec![
                String::new(),
                truncate_with_ellipsis(&format!("{} {alt}", glyphs.image), text_width, glyphs),
                truncate_with_ellipsis(uri, text_width, glyphs),
                String::new(),
            ],
        };
        let bubble_width = match message.body {
            MessageBody::Text(_) => rows.iter().map(|row| row.width()).max().unwrap_or(0),
            MessageBody::Image { .. } => text_width,
        };

        for row in rows {
            let pad = bubble_width.saturating_sub(row.width());
            let span = Span::styled(format!(" {row}{} ", " ".repeat(pad)), style);
            let line = Line::from(span);
            lines.push(match message.sender {
                Sender::Received => line.left_aligned(),
                Sender::Sent => line.right_aligned(),
            });
        }
    }

    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            rows.push(mem::take(&mut current));
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current.width() + ch_width > width && !current.is_empty() {
                rows.push(mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn truncate_with_ellipsis(raw: &str, max: usize, glyphs: &Glyphs) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let budget = max.saturating_sub(glyphs.ellipsis.width());
    let mut out = String::new();
    for ch in raw.chars() {
        if out.width() + ch.width().unwrap_or(0) > budget {
            break;
        }
        out.push(ch);
    }
    out.push_str(glyphs.ellipsis);
    out
}
