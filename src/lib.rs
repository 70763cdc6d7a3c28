//! Time-bounded tweens: sample an easing curve against a monotonic clock and
//! hand each value to a performer until the duration runs out.

pub mod clock;
pub mod config;
pub mod easing;
pub mod timeline;
pub mod tween;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::{lerp, Easing};
pub use timeline::Timeline;
pub use tween::{
    run_tween, run_tween_with_clock, try_run_tween_with_clock, Step, TweenError, TweenOptions,
    TweenOutcome,
};
