//! Step response of a mass-spring-damper system under PID and full-state control.
//! Prints `time,setpoint,pid_position,full_state_position` as CSV.
//! This example requires the `--features simulation` flag to be enabled.
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
pub fn main() {
    use nalgebra as na;

    use std::time::Duration;

    use feedback_law::{
        controller::FeedbackController,
        filter::LowPassFilter,
        full_state::FullStateController,
        gains::PidGainsBuilder,
        pid::PidController,
        sim::{self, Plant, SignalGenerator},
        state::FullStateGains,
        time::{Clock, ManualClock, Millis},
    };

    const FIXED_STEP_SIZE_MS: u64 = 10;
    const FIXED_STEP_SIZE_S: f64 = FIXED_STEP_SIZE_MS as f64 * 0.001;

    let gains = PidGainsBuilder::default()
        .kp(10.0)
        .ki(25.0)
        .kd(1.0)
        .max_output_with_integral(20.0)
        .build()
        .unwrap();
    let filter =
        LowPassFilter::from_time_constant(0.01, Duration::from_millis(FIXED_STEP_SIZE_MS))
            .unwrap();
    let mut pid: PidController<_, f64, _, 2> =
        PidController::with_filter(ManualClock::new(Millis(0)), filter);
    pid.set_gains(gains);

    let mut full_state = FullStateController::new(FullStateGains::new([10.0, 0.5]));

    let mdl = sim::MassSpringDamper {
        natural_frequency: 0.5 * std::f64::consts::PI,
        damping_ratio: 0.2,
    };

    let mut pid_state = na::Vector2::<f64>::zeros();
    let mut full_state_state = na::Vector2::<f64>::zeros();

    let square = SignalGenerator::new(sim::WaveForm::Square, Millis(0), 0.5, 0.5);

    println!("time,setpoint,pid_position,full_state_position");
    for _ in 0..1000usize {
        pid.clock_mut()
            .advance(Duration::from_millis(FIXED_STEP_SIZE_MS));
        let timestamp = pid.clock().now();

        let setpoint = square.generate(timestamp);
        pid.set_target(square.target(timestamp));
        full_state.set_target(square.target(timestamp));

        let pid_control = pid.calculate(&mdl.measure(pid_state));
        let full_state_control = full_state.calculate(&mdl.measure(full_state_state));

        pid_state = sim::rk4_step(|x| mdl.f(x, pid_control), pid_state, FIXED_STEP_SIZE_S);
        full_state_state = sim::rk4_step(
            |x| mdl.f(x, full_state_control),
            full_state_state,
            FIXED_STEP_SIZE_S,
        );

        println!(
            "{:.3},{setpoint:.4},{:.4},{:.4}",
            timestamp.0 as f64 / 1000.0,
            pid_state[0],
            full_state_state[0]
        );
    }
}

#[cfg(not(feature = "simulation"))]
fn main() {
    eprintln!("This example requires `--features simulation` to run.");
}
