//! A view together with the clock ticker it owns while on screen.

use std::sync::Arc;

use crate::clock::{Clock, ClockTicker, TICK_PERIOD};
use crate::view::PortfolioView;

/// Mounting starts the one-second ticker; unmounting (or dropping) stops it.
///
/// Ticks are delivered through [`MountedView::pump_clock`] on the frame loop,
/// so the view is never touched from the timer task.
pub struct MountedView {
    view: PortfolioView,
    ticker: ClockTicker,
}

impl MountedView {
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(view: PortfolioView, clock: Arc<dyn Clock>) -> Self {
        let ticker = ClockTicker::spawn(clock, TICK_PERIOD);
        tracing::info!(projects = view.catalog().len(), "Portfolio view mounted");
        Self { view, ticker }
    }

    #[must_use]
    pub fn view(&self) -> &PortfolioView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PortfolioView {
        &mut self.view
    }

    /// Apply the newest clock tick, if one arrived since the last call.
    pub fn pump_clock(&mut self) -> bool {
        match self.ticker.latest() {
            Some(now) => {
                self.view.on_clock_tick(now);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn unmount(self) -> PortfolioView {
        let MountedView { view, mut ticker } = self;
        ticker.cancel();
        tracing::info!("Portfolio view unmounted");
        view
    }
}
