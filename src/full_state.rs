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

use log::debug;
use num_traits::Float;

use crate::controller::FeedbackController;
use crate::state::{FullStateGains, State};

/// Full-state feedback: `u = Σ (target_i − measurement_i) · gain_i`.
///
/// The law is static. Apart from the target and the gains nothing is remembered between ticks,
/// so `calculate` is a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct FullStateController<F = f64, const N: usize = 3> {
    gains: FullStateGains<F, N>,
    target: State<F, N>,
}

impl<F: Float, const N: usize> Default for FullStateController<F, N> {
    fn default() -> Self {
        Self::new(FullStateGains::default())
    }
}

impl<F: Float, const N: usize> FullStateController<F, N> {
    /// Creates a controller with a zero target
    pub fn new(gains: FullStateGains<F, N>) -> Self {
        Self {
            gains,
            target: State::zeros(),
        }
    }

    /// Returns the gains
    pub fn gains(&self) -> &FullStateGains<F, N> {
        &self.gains
    }

    /// Evaluates the law without touching the controller
    pub fn output(&self, measurement: &State<F, N>) -> F {
        self.target.minus(measurement).times(&self.gains).sum()
    }
}

impl<F: Float, const N: usize> FeedbackController<F, N> for FullStateController<F, N> {
    type Gains = FullStateGains<F, N>;

    fn set_target(&mut self, target: State<F, N>) {
        self.target = target;
    }

    fn target(&self) -> &State<F, N> {
        &self.target
    }

    fn set_gains(&mut self, gains: FullStateGains<F, N>) {
        debug!("full-state gains replaced");
        self.gains = gains;
    }

    fn calculate(&mut self, measurement: &State<F, N>) -> F {
        self.output(measurement)
    }
}
