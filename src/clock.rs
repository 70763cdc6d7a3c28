use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic millisecond time source plus a blocking sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    fn sleep_ms(&self, ms: u64);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn sleep_ms(&self, ms: u64) {
        (**self).sleep_ms(ms)
    }
}

/// Wall-clock time from [`Instant`], sleeping the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Virtual time that only moves when told to.
///
/// Clones share the same time, so a performer holding a clone can
/// [`advance`](ManualClock::advance) it to simulate work. Sleeping advances
/// time instantly and records the request.
///
/// Nothing else moves it. An unthrottled tween on a `ManualClock` whose
/// performer never calls `advance` (and never stops) loops forever.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
    slept: Rc<Cell<u64>>,
    sleeps: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total milliseconds spent in [`Clock::sleep_ms`].
    pub fn total_slept(&self) -> u64 {
        self.slept.get()
    }

    pub fn sleep_count(&self) -> u32 {
        self.sleeps.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
        self.slept.set(self.slept.get() + ms);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shares_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(40);
        clock.sleep_ms(10);
        assert_eq!(clock.now_ms(), 50);
        assert_eq!(handle.now_ms(), 50);
        assert_eq!(clock.total_slept(), 10);
        assert_eq!(clock.sleep_count(), 1);
    }

    #[test]
    fn test_system_clock_sleeps() {
        let clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(5);
        assert!(clock.now_ms() >= before + 5);
    }
}
