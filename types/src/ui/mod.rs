//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod options;
mod preview_effect;

pub use animation::AnimPhase;
pub use options::{COMPACT_BREAKPOINT, LayoutMode, UiOptions, Viewport};
pub use preview_effect::{PreviewEffect, PreviewEffectKind};
