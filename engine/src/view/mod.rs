//! Portfolio view state: hover selection, displayed time, viewport, motion.
//!
//! Every mutation is synchronous and happens on the frame loop, so hover
//! events and clock ticks are applied strictly in arrival order.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use thiserror::Error;

use folio_types::ui::{AnimPhase, LayoutMode, PreviewEffect, UiOptions, Viewport};
use folio_types::{Profile, ProjectCatalog, ProjectId, ProjectRecord};

use crate::assets::Portfolio;
use crate::backdrop::Backdrop;
use crate::clock::format_clock;
use crate::conversation::{ChatMessage, conversation};

pub const PREVIEW_ENTRY_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("project {0} is not in the catalog")]
    UnknownProject(ProjectId),
}

#[derive(Debug)]
pub struct PortfolioView {
    portfolio: Arc<Portfolio>,
    /// Index into the catalog. Only ever set from a successful catalog lookup.
    selected: Option<usize>,
    /// Last cell the pointer was seen at; `None` after keyboard navigation
    /// or once the pointer left the window.
    pointer: Option<(u16, u16)>,
    current_time: DateTime<Local>,
    viewport: Viewport,
    ui_options: UiOptions,
    preview_effect: Option<PreviewEffect>,
    /// Drives the background gradient.
    motion_elapsed: Duration,
    last_frame: Instant,
}

impl PortfolioView {
    #[must_use]
    pub fn new(
        portfolio: Arc<Portfolio>,
        now: DateTime<Local>,
        viewport: Viewport,
        ui_options: UiOptions,
    ) -> Self {
        Self {
            portfolio,
            selected: None,
            pointer: None,
            current_time: now,
            viewport,
            ui_options,
            preview_effect: None,
            motion_elapsed: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &ProjectCatalog {
        self.portfolio.catalog()
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        self.portfolio.profile()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn on_hover_enter(&mut self, id: ProjectId) -> Result<(), ViewError> {
        let index = self
            .catalog()
            .position(id)
            .ok_or(ViewError::UnknownProject(id))?;
        self.select_index(index);
        Ok(())
    }

    pub fn on_hover_leave(&mut self) {
        self.preview_effect = None;
        if let Some(index) = self.selected.take() {
            tracing::debug!(index, "Preview hidden");
        }
    }

    /// Pointer moved; `hit` is the row under it, if any.
    ///
    /// Moving between rows is a leave followed by an enter, matching the
    /// order a browser dispatches `mouseleave`/`mouseenter`.
    pub fn on_pointer_moved(&mut self, hit: Option<ProjectId>) -> Result<(), ViewError> {
        let current = self.selected_project().map(ProjectRecord::id);
        if current == hit {
            return Ok(());
        }
        if current.is_some() {
            self.on_hover_leave();
        }
        match hit {
            Some(id) => self.on_hover_enter(id),
            None => Ok(()),
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<(u16, u16)>) {
        self.pointer = pointer;
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Keyboard equivalent of hovering the next row. Stops at the last row.
    pub fn hover_next(&mut self) {
        self.pointer = None;
        let len = self.catalog().len();
        if len == 0 {
            return;
        }
        let next = match self.selected {
            Some(index) => (index + 1).min(len - 1),
            None => 0,
        };
        self.select_index(next);
    }

    /// Keyboard equivalent of hovering the previous row. Stops at the first row.
    pub fn hover_previous(&mut self) {
        self.pointer = None;
        let len = self.catalog().len();
        if len == 0 {
            return;
        }
        let previous = match self.selected {
            Some(index) => index.saturating_sub(1),
            None => len - 1,
        };
        self.select_index(previous);
    }

    fn select_index(&mut self, index: usize) {
        if self.selected == Some(index) {
            return;
        }
        let was_hidden = self.selected.is_none();
        self.selected = Some(index);
        if was_hidden && !self.ui_options.reduced_motion {
            self.preview_effect = Some(PreviewEffect::slide_up(PREVIEW_ENTRY_DURATION));
        }
        tracing::debug!(index, "Preview shown");
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        self.selected.and_then(|index| self.catalog().at(index))
    }

    #[must_use]
    pub fn is_selected(&self, id: ProjectId) -> bool {
        self.selected_project().is_some_and(|p| p.id() == id)
    }

    #[must_use]
    pub fn preview_visible(&self) -> bool {
        self.selected.is_some()
    }

    /// The preview transcript, present exactly when the preview is visible.
    #[must_use]
    pub fn conversation(&self) -> Option<Vec<ChatMessage>> {
        self.selected_project().map(conversation)
    }

    #[must_use]
    pub fn backdrop(&self) -> Backdrop {
        Backdrop::resolve(
            self.preview_visible(),
            self.motion_elapsed,
            self.ui_options.reduced_motion,
        )
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    pub fn on_clock_tick(&mut self, now: DateTime<Local>) {
        self.current_time = now;
    }

    #[must_use]
    pub fn current_time(&self) -> DateTime<Local> {
        self.current_time
    }

    #[must_use]
    pub fn clock_label(&self) -> String {
        format_clock(&self.current_time)
    }

    // ------------------------------------------------------------------
    // Viewport and motion
    // ------------------------------------------------------------------

    pub fn on_resize(&mut self, viewport: Viewport) {
        let before = self.viewport.layout_mode();
        self.viewport = viewport;
        let after = viewport.layout_mode();
        if before != after {
            tracing::debug!(?before, ?after, "Layout mode changed");
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.viewport.layout_mode()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn preview_effect(&self) -> Option<&PreviewEffect> {
        self.preview_effect.as_ref()
    }

    /// Advance animations by the wall time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    pub fn advance(&mut self, delta: Duration) {
        if !self.ui_options.reduced_motion {
            self.motion_elapsed = self.motion_elapsed.saturating_add(delta);
        }
        if let Some(effect) = self.preview_effect.as_mut() {
            effect.advance(delta);
            if matches!(effect.phase(), AnimPhase::Completed) {
                self.preview_effect = None;
            }
        }
    }
}

#[cfg(test)]
mod tests;
