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


#[cfg(feature = "simulation")]
mod test_closed_loop_performance {
    use super::fixtures::test_pid::*;

    use core::time::Duration;
    use feedback_law::controller::FeedbackController;
    use feedback_law::full_state::FullStateController;
    use feedback_law::pid::PidController;
    use feedback_law::sim::{self, Plant};
    use feedback_law::state::{FullStateGains, State};
    use feedback_law::time::{Clock, ManualClock, Millis};

    use approx::assert_relative_eq;
    use nalgebra as na;

    const FIXED_STEP_SIZE_MS: u64 = 1;
    const FIXED_STEP_SIZE_S: f64 = FIXED_STEP_SIZE_MS as f64 * 0.001;

    /// Runs `controller` against `plant` for `steps` fixed steps, holding each command for one
    /// step, and returns the final plant state
    fn run_closed_loop<P, Ctrl>(
        plant: &P,
        controller: &mut Ctrl,
        mut before_tick: impl FnMut(&mut Ctrl),
        steps: usize,
    ) -> na::Vector2<f64>
    where
        P: Plant,
        Ctrl: FeedbackController<f64, 2>,
    {
        let mut state = na::Vector2::<f64>::zeros();
        for _ in 0..steps {
            before_tick(controller);
            let control = controller.calculate(&plant.measure(state));
            state = sim::rk4_step(|x| plant.f(x, control), state, FIXED_STEP_SIZE_S);
        }
        state
    }

    /// Full-state feedback u = k1 (r - p) - k2 p' on a mass-spring-damper settles at the static
    /// gain k1 / (1 + k1) of the closed loop
    #[test]
    fn test_full_state_regulates_mass_spring_damper() {
        const K1: f64 = 9.0;
        const K2: f64 = 0.1;
        const TARGET: f64 = 1.0;

        let plant = sim::MassSpringDamper {
            natural_frequency: 2.0 * std::f64::consts::PI,
            damping_ratio: 0.2,
        };
        let mut controller = FullStateController::new(FullStateGains::new([K1, K2]));
        controller.set_target(State::from_position(TARGET));

        let state = run_closed_loop(&plant, &mut controller, |_| {}, 10_000);

        assert_relative_eq!(state[0], TARGET * K1 / (1.0 + K1), epsilon = 1e-6);
        assert_relative_eq!(state[1], 0.0, epsilon = 1e-6);
    }

    /// A PD-dominated PID drives a damped mass onto the target despite the error crossing zero
    /// on overshoot
    #[test]
    fn test_pid_settles_damped_mass() {
        const TARGET: f64 = 2.0;

        let plant = sim::DampedMass {
            mass: 1.0,
            friction: 1.0,
        };
        let mut pid: PidController<ManualClock<Millis>, f64, _, 2> =
            PidController::new(ManualClock::new(Millis(0)));
        pid.set_gains(make_gains(4.0, 0.5, 1.0));
        pid.set_target(State::from_position(TARGET));

        let state = run_closed_loop(
            &plant,
            &mut pid,
            |pid| pid.clock_mut().advance(Duration::from_millis(FIXED_STEP_SIZE_MS)),
            20_000,
        );

        assert!(pid.is_position_in_tolerance(&plant.measure(state), 1e-2));
        assert_relative_eq!(state[1], 0.0, epsilon = 1e-2);
    }

    /// Tracking a slow sine: the error changes sign every half period, which must not stop the
    /// controller from following the setpoint
    #[test]
    fn test_pid_tracks_slow_sine() {
        let plant = sim::DampedMass {
            mass: 1.0,
            friction: 1.0,
        };
        let mut pid: PidController<ManualClock<Millis>, f64, _, 2> =
            PidController::new(ManualClock::new(Millis(0)));
        pid.set_gains(make_gains(50.0, 0.0, 10.0));

        let sine = sim::SignalGenerator::new(sim::WaveForm::Sine, Millis(0), 1.0, 0.0);
        let mut state = na::Vector2::<f64>::zeros();
        let mut worst_late_error: f64 = 0.0;

        for i in 0..20_000usize {
            pid.clock_mut().advance(Duration::from_millis(FIXED_STEP_SIZE_MS));
            let now = pid.clock().now();
            pid.set_target(sine.target(now));

            let control = pid.calculate(&plant.measure(state));
            state = sim::rk4_step(|x| plant.f(x, control), state, FIXED_STEP_SIZE_S);

            if i > 10_000 {
                worst_late_error = worst_late_error.max((sine.generate(now) - state[0]).abs());
            }
        }

        assert!(
            worst_late_error < 0.1,
            "Expected tracking error below 0.1, got {worst_late_error}"
        );
    }
}
