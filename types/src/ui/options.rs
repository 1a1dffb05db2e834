//! Display options and viewport-derived layout.

/// Terminals narrower than this many columns use the stacked layout.
pub const COMPACT_BREAKPOINT: u16 = 96;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Project list and info side by side; preview docked on the right.
    #[default]
    Wide,
    /// Single stacked column; preview centered over the content.
    Compact,
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn layout_mode(self) -> LayoutMode {
        if self.width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}
