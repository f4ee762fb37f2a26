//! Cancellable repeating task for periodic UI refreshes.
//!
//! ARCHITECTURE
//! ============
//! A `Ticker` is owned by the component that started it. Stopping (or
//! dropping) the ticker cancels the browser interval, so the task never
//! outlives the page section it updates. Outside `hydrate` builds the first
//! tick still runs but nothing is scheduled.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

pub struct Ticker {
    period: Duration,
    #[cfg(feature = "hydrate")]
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            #[cfg(feature = "hydrate")]
            interval: None,
        }
    }

    /// Interval length handed to the browser, at least one millisecond.
    pub fn period_ms(&self) -> u32 {
        u32::try_from(self.period.as_millis()).unwrap_or(u32::MAX).max(1)
    }

    /// Run `tick` once now, then every period until stopped.
    ///
    /// Restarting replaces any interval already registered.
    pub fn start<F>(&mut self, mut tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        tick();
        #[cfg(feature = "hydrate")]
        {
            self.interval = Some(Interval::new(self.period_ms(), tick));
        }
    }

    pub fn stop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            // Dropping an `Interval` clears it.
            drop(self.interval.take());
        }
    }

    pub fn is_running(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.interval.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
