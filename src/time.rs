// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::Add;
use core::time::Duration;

use core::fmt::Debug;

use num_traits::Float;

/// A trait for time-like objects that can be used to measure elapsed time.
///
/// The integrator and differentiator only ever ask for the time elapsed between two ticks, so any
/// monotonic counter (a hardware timer, a simulation clock, `std::time::Instant`) will do.
pub trait InstantLike: Sized + Add<Duration, Output = Self> + Clone + Copy + Debug {
    /// Returns the amount of time elapsed from another instant to this one, saturating at zero
    /// if `earlier` is in fact later than `self`
    #[must_use]
    fn duration_since(&self, earlier: Self) -> Duration;
}

/// A wrapper around an unsigned 64-bit integer representing milliseconds, e.g. the tick counter of
/// a microcontroller
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl InstantLike for Millis {
    fn duration_since(&self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Millis {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Millis(self.0 + rhs.as_millis() as u64)
    }
}

/// Seconds since an arbitrary epoch
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeF64(pub f64);

impl InstantLike for TimeF64 {
    fn duration_since(&self, earlier: Self) -> Duration {
        let secs = self.0 - earlier.0;
        if secs > 0.0 && secs.is_finite() {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }
}

impl Add<Duration> for TimeF64 {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        TimeF64(self.0 + rhs.as_secs_f64())
    }
}

/// Converts a duration into seconds expressed in the controller's float type
pub(crate) fn as_secs<F: Float>(duration: Duration) -> F {
    F::from(duration.as_secs_f64()).unwrap_or_else(F::zero)
}

/// A source of timestamps for the time-based parts of a controller.
///
/// The controller samples its clock exactly once per tick, so every numeric helper inside a
/// single `calculate` call sees the same instant.
pub trait Clock {
    /// The instant type produced by this clock
    type Instant: InstantLike;

    /// Returns the current time
    fn now(&self) -> Self::Instant;
}

/// A clock that only moves when told to.
///
/// Useful in tests and simulations where elapsed time must be exact.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock<I: InstantLike> {
    now: I,
}

impl<I: InstantLike> ManualClock<I> {
    /// Creates a clock that reads `start` until advanced
    pub fn new(start: I) -> Self {
        Self { now: start }
    }

    /// Moves the clock forward by `step`
    pub fn advance(&mut self, step: Duration) {
        self.now = self.now + step;
    }

    /// Jumps the clock to an arbitrary instant
    pub fn set(&mut self, now: I) {
        self.now = now;
    }
}

impl<I: InstantLike> Clock for ManualClock<I> {
    type Instant = I;

    fn now(&self) -> I {
        self.now
    }
}

impl<I: InstantLike + Default> Default for ManualClock<I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

/// A convenient wrapper around `std::time::Instant` satisfying the `InstantLike` trait.
#[cfg(feature = "std")]
mod std_instant {

    use super::{Add, Clock, Duration, InstantLike};

    /// Monotonic wall-clock instant
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct StdInstant(pub std::time::Instant);

    impl StdInstant {
        /// Reads the monotonic clock
        pub fn now() -> Self {
            StdInstant(std::time::Instant::now())
        }
    }

    impl InstantLike for StdInstant {
        fn duration_since(&self, other: Self) -> Duration {
            self.0.saturating_duration_since(other.0)
        }
    }

    impl Add<Duration> for StdInstant {
        type Output = Self;

        fn add(self, rhs: Duration) -> Self::Output {
            StdInstant(self.0 + rhs)
        }
    }

    /// Reads `std::time::Instant::now()` on every tick
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StdClock;

    impl Clock for StdClock {
        type Instant = StdInstant;

        fn now(&self) -> StdInstant {
            StdInstant::now()
        }
    }

    #[cfg(test)]
    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock;
        let start = clock.now();
        let end = clock.now();
        assert_eq!(end.duration_since(start), end.0.duration_since(start.0));
        assert_eq!(start.duration_since(end), Duration::ZERO);
    }
}

#[cfg(feature = "std")]
pub use std_instant::{StdClock, StdInstant};
