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

use crate::state::State;

/// The capability shared by every feedback law: take a target, take a measurement, produce a
/// command.
///
/// Implementations are driven by a single control-loop thread: `set_target` and `set_gains`
/// whenever the owner decides, `calculate` once per tick.
pub trait FeedbackController<F, const N: usize> {
    /// The gain set understood by this law
    type Gains;

    /// Replaces the target; takes effect on the next [`calculate`](Self::calculate)
    fn set_target(&mut self, target: State<F, N>);

    /// Returns the current target
    fn target(&self) -> &State<F, N>;

    /// Replaces the gains; takes effect on the next [`calculate`](Self::calculate)
    fn set_gains(&mut self, gains: Self::Gains);

    /// Evaluates the control law for one tick and returns the actuator command
    fn calculate(&mut self, measurement: &State<F, N>) -> F;
}
