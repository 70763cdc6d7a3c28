//! The tween driver: a blocking loop that samples an easing curve against
//! elapsed time and feeds each value to a performer.

use crate::clock::{Clock, SystemClock};
use crate::timeline::Timeline;
use log::{debug, trace};

/// What the performer wants after consuming a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Rejected tween arguments, reported before the first sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TweenError {
    #[error("tween duration must not be negative, got {0}ms")]
    NegativeDuration(i64),
    #[error("tween throttle must not be negative, got {0}ms")]
    NegativeThrottle(i64),
}

/// Sampling-rate controls for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TweenOptions {
    /// Minimum gap between samples in milliseconds. 0 samples as fast as the
    /// performer allows.
    pub throttle_ms: i64,
    /// Also wait one throttle interval before the very first sample.
    pub initial_throttle: bool,
}

impl TweenOptions {
    pub fn with_throttle(mut self, throttle_ms: i64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_initial_throttle(mut self, initial_throttle: bool) -> Self {
        self.initial_throttle = initial_throttle;
        self
    }
}

/// Summary of a finished tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenOutcome {
    /// Number of times the performer was invoked. Saturates at `u64::MAX`.
    pub samples: u64,
    /// The final sample at progress 1.0 was delivered. False when the
    /// performer stopped the tween early.
    pub completed: bool,
}

impl TweenOutcome {
    fn record_sample(&mut self) {
        self.samples = self.samples.saturating_add(1);
    }
}

/// Runs a tween on the calling thread against the system clock.
pub fn run_tween<F, P>(
    ease: F,
    duration_ms: i64,
    performer: P,
    options: TweenOptions,
) -> Result<TweenOutcome, TweenError>
where
    F: Fn(f64) -> f64,
    P: FnMut(f64) -> Step,
{
    run_tween_with_clock(SystemClock::new(), ease, duration_ms, performer, options)
}

pub fn run_tween_with_clock<C, F, P>(
    clock: C,
    ease: F,
    duration_ms: i64,
    mut performer: P,
    options: TweenOptions,
) -> Result<TweenOutcome, TweenError>
where
    C: Clock,
    F: Fn(f64) -> f64,
    P: FnMut(f64) -> Step,
{
    try_run_tween_with_clock(clock, ease, duration_ms, |value| Ok(performer(value)), options)
}

/// Runs a tween whose performer may fail.
///
/// The performer is invoked at least once. Unless it returns [`Step::Stop`]
/// or an error, its last invocation receives `ease(1.0)`. A zero duration
/// produces exactly that one sample. Time spent inside the performer counts
/// against the duration. A performer error ends the loop and is returned
/// as-is.
///
/// The loop only ends once `clock` reaches the duration. With a clock that
/// does not move on its own, such as [`ManualClock`](crate::ManualClock)
/// with `throttle_ms == 0`, the performer must advance it or return
/// [`Step::Stop`], otherwise this never returns.
pub fn try_run_tween_with_clock<C, F, P, E>(
    clock: C,
    ease: F,
    duration_ms: i64,
    mut performer: P,
    options: TweenOptions,
) -> Result<TweenOutcome, E>
where
    C: Clock,
    F: Fn(f64) -> f64,
    P: FnMut(f64) -> Result<Step, E>,
    E: From<TweenError>,
{
    let duration =
        u64::try_from(duration_ms).map_err(|_| TweenError::NegativeDuration(duration_ms))?;
    let throttle = u64::try_from(options.throttle_ms)
        .map_err(|_| TweenError::NegativeThrottle(options.throttle_ms))?;

    let mut timeline = Timeline::new(duration);
    timeline.start(clock.now_ms());
    let mut outcome = TweenOutcome {
        samples: 0,
        completed: false,
    };
    debug!(
        "Tween started: duration={}ms throttle={}ms initial_throttle={}",
        duration, throttle, options.initial_throttle
    );

    loop {
        let first = outcome.samples == 0;
        if throttle != 0
            && timeline.raw_elapsed() < duration
            && (!first || options.initial_throttle)
        {
            timeline.update(clock.now_ms());
            let remaining = timeline.remaining();
            if remaining > 0 {
                let nap = remaining.min(throttle);
                trace!("Throttling for {}ms ({}ms remaining)", nap, remaining);
                clock.sleep_ms(nap);
            }
            timeline.update(clock.now_ms());
        }

        let progress = timeline.progress();
        let value = ease(progress);
        outcome.record_sample();
        trace!(
            "Sample {} at {}ms: progress={} value={}",
            outcome.samples,
            timeline.elapsed(),
            progress,
            value
        );

        if performer(value)? == Step::Stop {
            debug!("Tween stopped by performer after {} samples", outcome.samples);
            return Ok(outcome);
        }
        if timeline.is_complete() {
            break;
        }

        timeline.update(clock.now_ms());
    }

    outcome.completed = true;
    debug!(
        "Tween finished after {} samples in {}ms",
        outcome.samples,
        timeline.raw_elapsed()
    );
    Ok(outcome)
}
