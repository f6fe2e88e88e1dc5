use std::time::{Duration, Instant};

/// Coalesces bursts of calls into a single firing.
///
/// Time is passed in by the caller, so the owner decides when to poll
/// (typically once per frame).
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    max_wait: Option<Duration>,
    first_call: Option<Instant>,
    last_call: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            max_wait: None,
            first_call: None,
            last_call: None,
        }
    }

    /// Fire at the latest `max_wait` after the first call of a burst.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    pub fn call(&mut self, now: Instant) {
        if self.first_call.is_none() {
            self.first_call = Some(now);
        }
        self.last_call = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_call.is_some()
    }

    /// Returns `true` exactly once per burst, when the burst is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline() else {
            return false;
        };
        if now >= deadline {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// When the pending burst becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        let last = self.last_call?;
        let quiet = last + self.wait;
        match (self.first_call, self.max_wait) {
            (Some(first), Some(max_wait)) => Some(quiet.min(first + max_wait)),
            _ => Some(quiet),
        }
    }

    pub fn cancel(&mut self) {
        self.first_call = None;
        self.last_call = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(16 * MS);
        assert!(!debouncer.poll(start));

        debouncer.call(start);
        debouncer.call(start + 5 * MS);
        assert!(!debouncer.poll(start + 10 * MS));
        assert!(!debouncer.poll(start + 20 * MS));
        assert!(debouncer.poll(start + 21 * MS));
        assert!(!debouncer.poll(start + 40 * MS));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn max_wait_bounds_a_continuous_burst() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(16 * MS).with_max_wait(16 * MS);
        for step in 0..10u32 {
            debouncer.call(start + step * MS);
        }
        assert!(!debouncer.poll(start + 15 * MS));
        assert!(debouncer.poll(start + 16 * MS));
    }

    #[test]
    fn cancel_drops_pending_burst() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(16 * MS);
        debouncer.call(start);
        debouncer.cancel();
        assert_eq!(debouncer.deadline(), None);
        assert!(!debouncer.poll(start + 100 * MS));
    }
}
