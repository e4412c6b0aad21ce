//! Single-input single-output smoothing stages for the derivative term.
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

use core::time::Duration;

use num_traits::Float;

use crate::error::ConfigError;
use crate::time::as_secs;

/// A stateful smoothing stage.
///
/// A controller owns its filter and feeds it exactly one sample per tick. `reset` must bring the
/// filter back to the state it was constructed in.
pub trait Filter<F> {
    /// Feeds one sample and returns the smoothed value
    fn calculate(&mut self, x: F) -> F;

    /// Clears the filter's memory
    fn reset(&mut self);
}

/// The identity filter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoFilter;

impl<F> Filter<F> for NoFilter {
    fn calculate(&mut self, x: F) -> F {
        x
    }

    fn reset(&mut self) {}
}

/// First-order IIR low-pass filter, `y[k] = α·x[k] + (1 − α)·y[k−1]`.
///
/// The memory starts at zero, so the first output is `α·x[0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassFilter<F> {
    alpha: F,
    estimate: F,
}

impl<F: Float> LowPassFilter<F> {
    /// Creates a filter with smoothing factor `alpha`. One means no smoothing.
    ///
    /// # Errors
    /// - `ConfigError::InvalidFilterGain` unless `0 < alpha <= 1`.
    pub fn new(alpha: F) -> Result<Self, ConfigError> {
        if !(alpha > F::zero() && alpha <= F::one()) {
            return Err(ConfigError::InvalidFilterGain);
        }
        Ok(Self {
            alpha,
            estimate: F::zero(),
        })
    }

    /// Creates the discretization of an RC filter with time constant `time_constant` (seconds)
    /// sampled every `sample_time`, i.e. `α = Ts / (Ts + τ)`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidFilterTimeConstant` if the time constant is not positive and finite.
    /// - `ConfigError::InvalidSampleTime` if the sample time is zero.
    pub fn from_time_constant(time_constant: F, sample_time: Duration) -> Result<Self, ConfigError> {
        if time_constant <= F::zero() || !time_constant.is_finite() {
            return Err(ConfigError::InvalidFilterTimeConstant);
        }
        if sample_time.is_zero() {
            return Err(ConfigError::InvalidSampleTime);
        }
        let delta_t: F = as_secs(sample_time);
        Self::new(delta_t / (delta_t + time_constant))
    }

    /// Returns the smoothing factor
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Returns the last output
    pub fn estimate(&self) -> F {
        self.estimate
    }
}

impl<F: Float> Filter<F> for LowPassFilter<F> {
    fn calculate(&mut self, x: F) -> F {
        self.estimate = self.alpha * x + (F::one() - self.alpha) * self.estimate;
        self.estimate
    }

    fn reset(&mut self) {
        self.estimate = F::zero();
    }
}

/// Mean of the last `W` samples, kept in a fixed ring buffer.
///
/// Until the window fills, the mean is taken over the samples seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverageFilter<F, const W: usize> {
    samples: [F; W],
    head: usize,
    len: usize,
}

impl<F: Float, const W: usize> MovingAverageFilter<F, W> {
    /// Creates an empty window.
    ///
    /// # Errors
    /// - `ConfigError::InvalidWindow` if `W` is zero.
    pub fn new() -> Result<Self, ConfigError> {
        if W == 0 {
            return Err(ConfigError::InvalidWindow);
        }
        Ok(Self {
            samples: [F::zero(); W],
            head: 0,
            len: 0,
        })
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no sample has been seen since construction or the last reset
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<F: Float, const W: usize> Filter<F> for MovingAverageFilter<F, W> {
    fn calculate(&mut self, x: F) -> F {
        if W == 0 {
            return x;
        }
        self.samples[self.head] = x;
        self.head = (self.head + 1) % W;
        self.len = (self.len + 1).min(W);

        let sum = self.samples[..self.len]
            .iter()
            .fold(F::zero(), |acc, &s| acc + s);
        sum / F::from(self.len).unwrap_or_else(F::one)
    }

    fn reset(&mut self) {
        self.samples = [F::zero(); W];
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(feature = "std")]
impl<F, T: Filter<F> + ?Sized> Filter<F> for std::boxed::Box<T> {
    fn calculate(&mut self, x: F) -> F {
        (**self).calculate(x)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
