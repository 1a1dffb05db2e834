//! Wall-clock source and the one-second ticker that feeds the status bar.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// en-US short time, e.g. `3:07 PM`.
#[must_use]
pub fn format_clock(time: &DateTime<Local>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Repeating timer task that publishes the current time once per period.
///
/// Only the most recent tick is kept; readers that fall behind skip straight to
/// it. The task is aborted by [`ClockTicker::cancel`] or on drop, so a ticker
/// never outlives its owner.
pub struct ClockTicker {
    rx: watch::Receiver<DateTime<Local>>,
    task: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(clock.now());
        let task = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if tx.send(clock.now()).is_err() {
                    break;
                }
            }
        });
        Self {
            rx,
            task: Some(task),
        }
    }

    /// The newest tick not yet observed, if any.
    pub fn latest(&mut self) -> Option<DateTime<Local>> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) | Err(_) => None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Clock ticker cancelled");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{Local, TimeZone};
    use tokio::time::sleep;

    use super::test_support::SteppingClock;
    use super::{ClockTicker, TICK_PERIOD, format_clock};

    #[test]
    fn formats_twelve_hour_time() {
        let morning = Local.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&morning), "9:05 AM");
        let afternoon = Local.with_ymd_and_hms(2024, 1, 1, 15, 7, 42).unwrap();
        assert_eq!(format_clock(&afternoon), "3:07 PM");
        let midnight = Local.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(format_clock(&midnight), "12:30 AM");
        let noon = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_clock(&noon), "12:00 PM");
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_are_strictly_increasing() {
        let clock = Arc::new(SteppingClock::new());
        let mut ticker = ClockTicker::spawn(clock.clone(), TICK_PERIOD);

        // Sample between ticks so each window holds exactly one.
        sleep(Duration::from_millis(1500)).await;
        let mut previous = ticker.latest().expect("first tick");

        for _ in 0..5 {
            sleep(TICK_PERIOD).await;
            let current = ticker.latest().expect("one tick per period");
            assert!(current > previous);
            previous = current;
        }
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn latest_is_consumed_once() {
        let clock = Arc::new(SteppingClock::new());
        let mut ticker = ClockTicker::spawn(clock, TICK_PERIOD);

        sleep(Duration::from_millis(500)).await;
        assert!(ticker.latest().is_some());
        assert!(ticker.latest().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_reading_the_clock() {
        let clock = Arc::new(SteppingClock::new());
        let mut ticker = ClockTicker::spawn(clock.clone(), TICK_PERIOD);

        sleep(Duration::from_millis(2500)).await;
        ticker.cancel();
        assert!(!ticker.is_running());
        let reads = clock.reads();

        sleep(Duration::from_secs(10)).await;
        assert_eq!(clock.reads(), reads);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_task() {
        let clock = Arc::new(SteppingClock::new());
        let ticker = ClockTicker::spawn(clock.clone(), TICK_PERIOD);

        sleep(Duration::from_millis(1500)).await;
        drop(ticker);
        let reads = clock.reads();

        sleep(Duration::from_secs(10)).await;
        assert_eq!(clock.reads(), reads);
    }
}
