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

/// Errors raised while configuring gains, filters or states.
///
/// None of these can occur while a controller is running: every check happens when a value is
/// handed to the crate, and a rejected value leaves the previous configuration untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ConfigError {
    /// The proportional gain is negative or not finite
    #[cfg_attr(feature = "std", error("Proportional gain must be non-negative and finite"))]
    InvalidProportionalGain,

    /// The integral gain is negative or not finite
    #[cfg_attr(feature = "std", error("Integral gain must be non-negative and finite"))]
    InvalidIntegralGain,

    /// The derivative gain is negative or not finite
    #[cfg_attr(feature = "std", error("Derivative gain must be non-negative and finite"))]
    InvalidDerivativeGain,

    /// The output level that suspends integration is not strictly positive
    #[cfg_attr(
        feature = "std",
        error("Maximum output with integral must be positive and not NaN")
    )]
    InvalidIntegralOutputLimit,

    /// A low-pass filter gain outside of (0, 1]
    #[cfg_attr(feature = "std", error("Filter gain must lie in (0, 1]"))]
    InvalidFilterGain,

    /// A filter time constant that is not strictly positive or not finite
    #[cfg_attr(feature = "std", error("Filter time constant must be positive and finite"))]
    InvalidFilterTimeConstant,

    /// A zero sample time
    #[cfg_attr(feature = "std", error("Sample time must be positive"))]
    InvalidSampleTime,

    /// A moving-average window with no samples
    #[cfg_attr(feature = "std", error("Moving average window must hold at least one sample"))]
    InvalidWindow,

    /// A gain or state slice whose length differs from the state dimension
    #[cfg_attr(
        feature = "std",
        error("Expected {expected} components, got {actual}")
    )]
    DimensionMismatch {
        /// Dimension of the state
        expected: usize,
        /// Length of the offending slice
        actual: usize,
    },
}
