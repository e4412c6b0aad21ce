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

use crate::error::ConfigError;

/// Gains of a [`PidController`](crate::pid::PidController).
///
/// Every setter validates its argument and leaves the gains unchanged on failure, so a
/// `PidGains` value is always usable. Handing a new value to a controller takes effect on the
/// controller's next tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidGains<F> {
    /// Proportional gain.
    /// Defaults to 0.0.
    kp: F,

    /// Integral gain.
    /// Defaults to 0.0.
    ki: F,

    /// Derivative gain.
    /// Defaults to 0.0.
    kd: F,

    /// Output magnitude at or above which the integral stops accumulating, provided the output
    /// pushes in the same direction as the error.
    /// Defaults to positive infinity, i.e. integration is never suspended.
    max_output_with_integral: F,
}

impl<F: Float> Default for PidGains<F> {
    fn default() -> Self {
        PidGains {
            kp: F::zero(),
            ki: F::zero(),
            kd: F::zero(),
            max_output_with_integral: F::infinity(),
        }
    }
}

fn is_valid_gain<F: Float>(gain: F) -> bool {
    gain >= F::zero() && gain.is_finite()
}

impl<F: Float> PidGains<F> {
    /// Creates gains with an unbounded integral output.
    ///
    /// # Errors
    /// Fails if any gain is negative or not finite.
    pub fn new(kp: F, ki: F, kd: F) -> Result<Self, ConfigError> {
        PidGainsBuilder::default().kp(kp).ki(ki).kd(kd).build()
    }

    /// Returns the proportional gain.
    pub fn kp(&self) -> F {
        self.kp
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> F {
        self.ki
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> F {
        self.kd
    }

    /// Returns the output magnitude that suspends integration.
    pub fn max_output_with_integral(&self) -> F {
        self.max_output_with_integral
    }

    /// Sets the proportional gain.
    ///
    /// Zero is valid and disables the proportional term.
    ///
    /// # Errors
    /// - `ConfigError::InvalidProportionalGain` if the gain is negative or not finite.
    pub fn set_kp(&mut self, kp: F) -> Result<(), ConfigError> {
        if !is_valid_gain(kp) {
            return Err(ConfigError::InvalidProportionalGain);
        }
        self.kp = kp;
        Ok(())
    }

    /// Sets the integral gain.
    ///
    /// # Errors
    /// - `ConfigError::InvalidIntegralGain` if the gain is negative or not finite.
    pub fn set_ki(&mut self, ki: F) -> Result<(), ConfigError> {
        if !is_valid_gain(ki) {
            return Err(ConfigError::InvalidIntegralGain);
        }
        self.ki = ki;
        Ok(())
    }

    /// Sets the derivative gain.
    ///
    /// # Errors
    /// - `ConfigError::InvalidDerivativeGain` if the gain is negative or not finite.
    pub fn set_kd(&mut self, kd: F) -> Result<(), ConfigError> {
        if !is_valid_gain(kd) {
            return Err(ConfigError::InvalidDerivativeGain);
        }
        self.kd = kd;
        Ok(())
    }

    /// Sets the output magnitude at which integration is suspended.
    ///
    /// Positive infinity is valid and means the integral always accumulates.
    ///
    /// # Errors
    /// - `ConfigError::InvalidIntegralOutputLimit` if the limit is not strictly positive or NaN.
    pub fn set_max_output_with_integral(&mut self, limit: F) -> Result<(), ConfigError> {
        if limit.is_nan() || limit <= F::zero() {
            return Err(ConfigError::InvalidIntegralOutputLimit);
        }
        self.max_output_with_integral = limit;
        Ok(())
    }

    /// Convenience method to set the proportional, integral, and derivative gains together.
    ///
    /// The gains are applied all-or-nothing.
    pub fn set_gains(&mut self, kp: F, ki: F, kd: F) -> Result<(), ConfigError> {
        let mut updated = *self;
        updated.set_kp(kp)?;
        updated.set_ki(ki)?;
        updated.set_kd(kd)?;
        *self = updated;
        Ok(())
    }
}

/// Builder for [`PidGains`]. Validation is deferred to [`PidGainsBuilder::build`].
#[derive(Copy, Clone, Debug)]
pub struct PidGainsBuilder<F> {
    kp: Option<F>,
    ki: Option<F>,
    kd: Option<F>,
    max_output_with_integral: Option<F>,
}

impl<F> Default for PidGainsBuilder<F> {
    fn default() -> Self {
        Self {
            kp: None,
            ki: None,
            kd: None,
            max_output_with_integral: None,
        }
    }
}

impl<F: Float> PidGainsBuilder<F> {
    /// Sets the proportional gain
    pub fn kp(mut self, kp: F) -> Self {
        self.kp = Some(kp);
        self
    }

    /// Sets the integral gain
    pub fn ki(mut self, ki: F) -> Self {
        self.ki = Some(ki);
        self
    }

    /// Sets the derivative gain
    pub fn kd(mut self, kd: F) -> Self {
        self.kd = Some(kd);
        self
    }

    /// Sets the output magnitude at which integration is suspended
    pub fn max_output_with_integral(mut self, limit: F) -> Self {
        self.max_output_with_integral = Some(limit);
        self
    }

    /// Validates every field that was set and returns the gains; unset fields keep their
    /// defaults.
    pub fn build(self) -> Result<PidGains<F>, ConfigError> {
        let mut gains = PidGains::default();
        if let Some(kp) = self.kp {
            gains.set_kp(kp)?;
        }
        if let Some(ki) = self.ki {
            gains.set_ki(ki)?;
        }
        if let Some(kd) = self.kd {
            gains.set_kd(kd)?;
        }
        if let Some(limit) = self.max_output_with_integral {
            gains.set_max_output_with_integral(limit)?;
        }
        Ok(gains)
    }
}
