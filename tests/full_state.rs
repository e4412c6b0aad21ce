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

use feedback_law::controller::FeedbackController;
use feedback_law::error::ConfigError;
use feedback_law::full_state::FullStateController;
use feedback_law::state::{FullStateGains, MotionState, State};

use approx::assert_relative_eq;
use proptest::prelude::*;

mod test_full_state_law {
    use super::*;

    #[test]
    fn test_default_controller_outputs_zero() {
        let mut controller = FullStateController::<f64, 3>::default();
        assert_eq!(controller.target(), &MotionState::zeros());
        assert_eq!(controller.calculate(&MotionState::new(1.0, -2.0, 3.0)), 0.0);
    }

    #[test]
    fn test_weighted_sum_of_state_error() {
        let mut controller = FullStateController::new(FullStateGains::new([2.0, 0.5, 0.25]));
        controller.set_target(MotionState::new(1.0, 0.0, 0.0));

        // Error is (1.0, -2.0, 4.0)
        let output = controller.calculate(&MotionState::new(0.0, 2.0, -4.0));
        assert_eq!(output, 2.0 * 1.0 + 0.5 * -2.0 + 0.25 * 4.0);
    }

    #[test]
    fn test_no_history_between_ticks() {
        let mut controller = FullStateController::new(FullStateGains::new([3.0, 1.0]));
        controller.set_target(State::from_components([0.5, 0.0]));

        let measurement = State::from_components([0.25, 0.1]);
        let first = controller.calculate(&measurement);
        for x in [10.0, -4.0, 0.0] {
            controller.calculate(&State::from_components([x, x]));
        }
        assert_eq!(controller.calculate(&measurement), first);
        assert_eq!(controller.output(&measurement), first);
    }

    #[test]
    fn test_replacing_gains_and_target() {
        let mut controller = FullStateController::default();
        controller.set_gains(FullStateGains::new([1.0, 1.0, 1.0]));
        controller.set_target(MotionState::new(1.0, 1.0, 1.0));
        assert_eq!(controller.calculate(&MotionState::zeros()), 3.0);

        controller.set_gains(FullStateGains::try_from_slice(&[0.0, 2.0, 0.0]).unwrap());
        assert_eq!(controller.gains().as_array(), &[0.0, 2.0, 0.0]);
        assert_eq!(controller.calculate(&MotionState::zeros()), 2.0);
    }

    #[test]
    fn test_gain_dimension_checked_at_configuration() {
        assert_eq!(
            FullStateGains::<f64, 3>::try_from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Err(ConfigError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_single_precision() {
        let mut controller = FullStateController::new(FullStateGains::new([2.0_f32, 1.0]));
        controller.set_target(State::from_components([1.0_f32, 0.0]));
        assert_eq!(controller.calculate(&State::from_components([0.5, 0.5])), 0.5);
    }
}

fn component() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

proptest! {
    #[test]
    fn output_is_the_weighted_error_sum(
        target in prop::array::uniform4(component()),
        measured in prop::array::uniform4(component()),
        gains in prop::array::uniform4(component()),
    ) {
        let mut controller = FullStateController::new(FullStateGains::new(gains));
        controller.set_target(State::from_components(target));

        let expected = (0..4)
            .map(|i| (target[i] - measured[i]) * gains[i])
            .reduce(|acc, term| acc + term)
            .unwrap();
        prop_assert_eq!(controller.calculate(&State::from_components(measured)), expected);
    }

    #[test]
    fn output_scales_linearly_with_gains(
        target in prop::array::uniform3(component()),
        measured in prop::array::uniform3(component()),
        gains in prop::array::uniform3(component()),
        k in -10.0..10.0_f64,
    ) {
        let measurement = State::from_components(measured);

        let mut base = FullStateController::new(FullStateGains::new(gains));
        base.set_target(State::from_components(target));
        let mut scaled = FullStateController::new(FullStateGains::new(gains).scaled(k));
        scaled.set_target(State::from_components(target));

        let expected = k * base.calculate(&measurement);
        let actual = scaled.calculate(&measurement);
        assert_relative_eq!(actual, expected, epsilon = 1e-6, max_relative = 1e-9);
    }
}
