use crate::suggest::application::clock::{Clock, Timer};
use std::time::Duration;

/// Debouncer for search input
///
/// Holds the latest raw input and emits it, trimmed, once no change has been
/// seen for `delay`. Poll-driven: nothing happens until [`poll`](Self::poll).
pub struct Debouncer<C: Clock> {
    clock: C,
    delay: Duration,
    timer: Timer,
    pending: Option<String>,
}

impl<C: Clock> Debouncer<C> {
    pub fn new(clock: C, delay: Duration) -> Self {
        Self {
            clock,
            delay,
            timer: Timer::new(),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input change, cancelling any pending emission.
    pub fn input(&mut self, raw: impl Into<String>) {
        self.pending = Some(raw.into());
        self.timer.arm(self.clock.now(), self.delay);
    }

    /// Returns the settled, trimmed query once the quiet interval has elapsed.
    pub fn poll(&mut self) -> Option<String> {
        if self.timer.fire(self.clock.now()) {
            return self.pending.take().map(|raw| raw.trim().to_string());
        }
        None
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some() && self.timer.is_armed()
    }

    pub fn time_until_ready(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }
}
