//! Color theme and glyphs for the Folio TUI.
//!
//! The standard palette mirrors a light pastel page: a four-stop gradient
//! backdrop, black text, and a white phone with iMessage-style bubbles. The
//! high-contrast override drops the gradient entirely.

use ratatui::style::{Color, Modifier, Style};

use folio_types::ui::UiOptions;

/// Standard palette color constants.
mod colors {
    use super::Color;

    // === Backdrop gradient (pastel pink -> lilac -> sky -> mint) ===
    pub const GRADIENT: [Color; 4] = [
        Color::Rgb(255, 204, 213), // #ffccd5
        Color::Rgb(228, 193, 249), // #e4c1f9
        Color::Rgb(169, 222, 249), // #a9def9
        Color::Rgb(212, 241, 244), // #d4f1f4
    ];
    pub const NEUTRAL: Color = Color::Rgb(255, 255, 255);

    // === Text ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(0, 0, 0);
    pub const TEXT_MUTED: Color = Color::Rgb(102, 102, 102); // #666

    // === Phone ===
    pub const PHONE_BG: Color = Color::Rgb(255, 255, 255);
    pub const PHONE_FRAME: Color = Color::Rgb(0, 0, 0);
    pub const DIVIDER: Color = Color::Rgb(238, 238, 238); // #eee
    pub const BUBBLE_RECEIVED: Color = Color::Rgb(240, 240, 240); // #f0f0f0
    pub const BUBBLE_SENT: Color = Color::Rgb(0, 132, 255); // #0084ff
    pub const BUBBLE_SENT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const BATTERY: Color = Color::Rgb(48, 209, 88); // #30d158
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Empty when the backdrop should be a flat fill.
    pub gradient: &'static [Color],
    pub backdrop_flat: Color,
    pub neutral: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub phone_bg: Color,
    pub phone_frame: Color,
    pub divider: Color,
    pub bubble_received: Color,
    pub bubble_received_text: Color,
    pub bubble_sent: Color,
    pub bubble_sent_text: Color,
    pub battery: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            gradient: &colors::GRADIENT,
            backdrop_flat: colors::GRADIENT[0],
            neutral: colors::NEUTRAL,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            phone_bg: colors::PHONE_BG,
            phone_frame: colors::PHONE_FRAME,
            divider: colors::DIVIDER,
            bubble_received: colors::BUBBLE_RECEIVED,
            bubble_received_text: colors::TEXT_PRIMARY,
            bubble_sent: colors::BUBBLE_SENT,
            bubble_sent_text: colors::BUBBLE_SENT_TEXT,
            battery: colors::BATTERY,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            gradient: &[],
            backdrop_flat: Color::Black,
            neutral: Color::Black,
            text_primary: Color::White,
            text_muted: Color::Gray,
            phone_bg: Color::Black,
            phone_frame: Color::White,
            divider: Color::Gray,
            bubble_received: Color::DarkGray,
            bubble_received_text: Color::White,
            bubble_sent: Color::Blue,
            bubble_sent_text: Color::White,
            battery: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for the phone chrome.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub back: &'static str,
    pub avatar: &'static str,
    pub call: &'static str,
    pub video: &'static str,
    pub signal: &'static str,
    pub battery: &'static str,
    pub image: &'static str,
    pub home_indicator: &'static str,
    pub ellipsis: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            back: "<",
            avatar: "(o)",
            call: "call",
            video: "video",
            signal: "....",
            battery: "[###]",
            image: "[img]",
            home_indicator: "-",
            ellipsis: "...",
        }
    } else {
        Glyphs {
            back: "‹",
            avatar: "●",
            call: "✆",
            video: "▶",
            signal: "▂▄▆█",
            battery: "▮▮▮▯",
            image: "▣",
            home_indicator: "━",
            ellipsis: "…",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn project_year(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn project_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hovered(style: Style) -> Style {
        style.add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn profile_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn profile_role(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn link_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Name and links fade back while the preview is up.
    #[must_use]
    pub fn faded(style: Style, palette: &Palette) -> Style {
        style
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM)
            .remove_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn phone(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary).bg(palette.phone_bg)
    }

    #[must_use]
    pub fn received_bubble(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bubble_received_text)
            .bg(palette.bubble_received)
    }

    #[must_use]
    pub fn sent_bubble(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bubble_sent_text)
            .bg(palette.bubble_sent)
    }

    #[must_use]
    pub fn status_muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted).bg(palette.phone_bg)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::ui::UiOptions;

    use super::{glyphs, palette};

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.back,
            g.avatar,
            g.call,
            g.video,
            g.signal,
            g.battery,
            g.image,
            g.home_indicator,
            g.ellipsis,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} should be ASCII");
        }
    }

    #[test]
    fn high_contrast_has_no_gradient() {
        let standard = palette(UiOptions::default());
        assert_eq!(standard.gradient.len(), 4);

        let high = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert!(high.gradient.is_empty());
    }
}
