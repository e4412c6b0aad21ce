//! Time-based numeric helpers: a backward-difference differentiator and a rectangular-rule
//! integrator.
//!
//! Both take the timestamp of the current tick from the caller instead of reading a clock, so
//! one controller tick feeds the same instant to both.
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

use num_traits::Float;

use crate::time::{as_secs, InstantLike};

/// Estimates the derivative of a scalar signal from successive samples.
#[derive(Debug, Clone, Copy)]
pub struct Differentiator<F, I> {
    last_sample: Option<(F, I)>,
    derivative: F,
}

impl<F: Float, I: InstantLike> Default for Differentiator<F, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, I: InstantLike> Differentiator<F, I> {
    /// Creates a differentiator with no sample history
    pub fn new() -> Self {
        Self {
            last_sample: None,
            derivative: F::zero(),
        }
    }

    /// Feeds `x` sampled at `now` and returns `(x - x_prev) / dt`.
    ///
    /// The first sample after construction or [`reset`](Self::reset) yields zero. Two samples
    /// taken at the same instant hold the previous estimate.
    pub fn differentiate(&mut self, x: F, now: I) -> F {
        if let Some((last_x, last_time)) = self.last_sample {
            let dt: F = as_secs(now.duration_since(last_time));
            if dt > F::zero() {
                self.derivative = (x - last_x) / dt;
            }
        }
        self.last_sample = Some((x, now));
        self.derivative
    }

    /// Returns the last estimate
    pub fn derivative(&self) -> F {
        self.derivative
    }

    /// Forgets the sample history
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.derivative = F::zero();
    }
}

/// Accumulates the running integral of a scalar signal.
#[derive(Debug, Clone, Copy)]
pub struct Integrator<F, I> {
    integral: F,
    last_time: Option<I>,
    stopped: bool,
}

impl<F: Float, I: InstantLike> Default for Integrator<F, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, I: InstantLike> Integrator<F, I> {
    /// Creates an integrator at zero
    pub fn new() -> Self {
        Self {
            integral: F::zero(),
            last_time: None,
            stopped: false,
        }
    }

    /// Adds `x * dt`, where `dt` is the time since the previous call, and returns the running
    /// total.
    ///
    /// Nothing is added on the first call after construction or [`reset`](Self::reset), or
    /// while integration is stopped. The time reference advances either way.
    pub fn integrate(&mut self, x: F, now: I) -> F {
        if let Some(last_time) = self.last_time {
            if !self.stopped {
                let dt: F = as_secs(now.duration_since(last_time));
                self.integral = self.integral + x * dt;
            }
        }
        self.last_time = Some(now);
        self.integral
    }

    /// Freezes (`true`) or resumes (`false`) accumulation. A frozen integrator keeps returning
    /// its last value.
    pub fn stop_integration(&mut self, stop: bool) {
        self.stopped = stop;
    }

    /// Whether the next call to [`integrate`](Self::integrate) may accumulate
    pub fn is_integrating(&self) -> bool {
        !self.stopped
    }

    /// Returns the running total
    pub fn integral(&self) -> F {
        self.integral
    }

    /// Zeroes the running total and drops the time reference. The stop flag is left as is.
    pub fn reset(&mut self) {
        self.integral = F::zero();
        self.last_time = None;
    }
}
