/// Elapsed-time bookkeeping for one tween session.
///
/// Elapsed time is always clamped into `[0, duration]`, so [`progress`] never
/// exceeds 1.0 however late the clock is read.
///
/// [`progress`]: Timeline::progress
#[derive(Debug, Clone)]
pub struct Timeline {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub current_ms: u64,
}

impl Timeline {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            start_ms: 0,
            duration_ms,
            current_ms: 0,
        }
    }

    pub fn start(&mut self, now: u64) {
        self.start_ms = now;
        self.current_ms = now;
    }

    pub fn update(&mut self, now: u64) {
        self.current_ms = now;
    }

    /// Time since start as read from the clock, not clamped.
    pub fn raw_elapsed(&self) -> u64 {
        self.current_ms.saturating_sub(self.start_ms)
    }

    pub fn elapsed(&self) -> u64 {
        self.raw_elapsed().min(self.duration_ms)
    }

    pub fn remaining(&self) -> u64 {
        self.duration_ms - self.elapsed()
    }

    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.elapsed() as f64 / self.duration_ms as f64
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed() >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        let mut tl = Timeline::new(200);
        tl.start(1000);
        assert_eq!(tl.progress(), 0.0);
        assert!(!tl.is_complete());

        tl.update(1050);
        assert_eq!(tl.progress(), 0.25);
        assert_eq!(tl.remaining(), 150);

        tl.update(1350);
        assert_eq!(tl.raw_elapsed(), 350);
        assert_eq!(tl.elapsed(), 200);
        assert_eq!(tl.progress(), 1.0);
        assert_eq!(tl.remaining(), 0);
        assert!(tl.is_complete());
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let mut tl = Timeline::new(0);
        tl.start(7);
        assert_eq!(tl.progress(), 1.0);
        assert!(tl.is_complete());
    }

    #[test]
    fn test_clock_behind_start() {
        let mut tl = Timeline::new(100);
        tl.start(50);
        tl.update(10);
        assert_eq!(tl.elapsed(), 0);
    }
}
