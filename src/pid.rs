use log::{debug, trace};
use num_traits::Float;

use crate::calculus::{Differentiator, Integrator};
use crate::controller::FeedbackController;
use crate::filter::{Filter, NoFilter};
use crate::gains::PidGains;
use crate::state::State;
use crate::time::Clock;

/// Sign classes used by the zero-crossing reset and the anti-windup check.
///
/// Zero is a class of its own and `-0.0` belongs to it. NaN belongs to no class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of<F: Float>(x: F) -> Option<Self> {
        if x > F::zero() {
            Some(Sign::Positive)
        } else if x < F::zero() {
            Some(Sign::Negative)
        } else if x == F::zero() {
            Some(Sign::Zero)
        } else {
            None
        }
    }
}

/// True iff both values fall in the same sign class. NaN never matches anything, itself included.
fn same_sign<F: Float>(a: F, b: F) -> bool {
    matches!((Sign::of(a), Sign::of(b)), (Some(sa), Some(sb)) if sa == sb)
}

/// A PID (Proportional-Integral-Derivative) controller over the position-like component of a
/// [`State`].
///
/// On every tick the controller
/// - discards its integral, derivative and filter memory when the position error changes sign,
///   so history from one side of the setpoint never carries over to the other;
/// - integrates and differentiates the error against the time elapsed since the previous tick,
///   and smooths the derivative through the owned filter `D`;
/// - suspends integration for the following ticks while the output magnitude is at or above
///   [`PidGains::max_output_with_integral`] and the output pushes in the direction of the error.
///
/// Time comes from the injected clock `C`, sampled once per tick. Use
/// [`calculate_at`](Self::calculate_at) to supply the timestamp directly.
///
/// The controller holds mutable per-tick state and must be driven from a single control loop.
#[derive(Clone, Debug)]
pub struct PidController<C: Clock, F = f64, D = NoFilter, const N: usize = 3> {
    gains: PidGains<F>,
    target: State<F, N>,
    clock: C,

    derivative_filter: D,
    differentiator: Differentiator<F, C::Instant>,
    integrator: Integrator<F, C::Instant>,

    error: F,
    error_integral: F,
    raw_error_derivative: F,
    filtered_error_derivative: F,
}

impl<C: Clock, F: Float, const N: usize> PidController<C, F, NoFilter, N> {
    /// Creates a controller with default (all zero) gains, a zero target and an unfiltered
    /// derivative
    pub fn new(clock: C) -> Self {
        Self::with_filter(clock, NoFilter)
    }
}

impl<C: Clock + Default, F: Float, const N: usize> Default for PidController<C, F, NoFilter, N> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Clock, F: Float, D: Filter<F>, const N: usize> PidController<C, F, D, N> {
    /// Creates a controller with default (all zero) gains and a zero target that smooths the
    /// error derivative through `derivative_filter`
    pub fn with_filter(clock: C, derivative_filter: D) -> Self {
        Self {
            gains: PidGains::default(),
            target: State::zeros(),
            clock,
            derivative_filter,
            differentiator: Differentiator::new(),
            integrator: Integrator::new(),
            error: F::zero(),
            error_integral: F::zero(),
            raw_error_derivative: F::zero(),
            filtered_error_derivative: F::zero(),
        }
    }

    /// Returns the gains in use
    pub fn gains(&self) -> &PidGains<F> {
        &self.gains
    }

    /// Runs one tick of the control law at an explicit timestamp and returns the command.
    ///
    /// Only `measurement.x()` is used as feedback.
    pub fn calculate_at(&mut self, measurement: &State<F, N>, now: C::Instant) -> F {
        let last_error = self.error;
        self.error = self.target.x() - measurement.x();

        if !same_sign(self.error, last_error) {
            trace!("position error changed sign, discarding integral and derivative history");
            self.reset();
        }

        self.error_integral = self.integrator.integrate(self.error, now);
        self.raw_error_derivative = self.differentiator.differentiate(self.error, now);
        self.filtered_error_derivative = self.derivative_filter.calculate(self.raw_error_derivative);

        let output = self.gains.kp() * self.error
            + self.gains.ki() * self.error_integral
            + self.gains.kd() * self.filtered_error_derivative;

        // Anti-windup: hold the integral while saturated in the direction of the error
        let saturated =
            output.abs() >= self.gains.max_output_with_integral() && same_sign(output, self.error);
        if saturated == self.integrator.is_integrating() {
            debug!(
                "output {} integral limit, integration {}",
                if saturated { "reached" } else { "left" },
                if saturated { "suspended" } else { "resumed" }
            );
        }
        self.integrator.stop_integration(saturated);

        output
    }

    /// Whether the measured position is within `tolerance` of the target position
    pub fn is_position_in_tolerance(&self, measurement: &State<F, N>, tolerance: F) -> bool {
        (measurement.x() - self.target.x()).abs() <= tolerance
    }

    /// Position error of the last tick
    pub fn error(&self) -> F {
        self.error
    }

    /// Running integral of the position error as of the last tick
    pub fn error_integral(&self) -> F {
        self.error_integral
    }

    /// Unfiltered derivative of the position error as of the last tick
    pub fn raw_error_derivative(&self) -> F {
        self.raw_error_derivative
    }

    /// Filtered derivative of the position error as of the last tick
    pub fn filtered_error_derivative(&self) -> F {
        self.filtered_error_derivative
    }

    /// Whether the next tick may accumulate the integral
    pub fn is_integrating(&self) -> bool {
        self.integrator.is_integrating()
    }

    /// Manually freezes (`true`) or resumes (`false`) integration. The anti-windup check
    /// overrides this at the end of every tick.
    pub fn stop_integration(&mut self, stop: bool) {
        self.integrator.stop_integration(stop);
    }

    /// Clears the integral, the derivative history and the filter memory. Gains and target are
    /// kept.
    pub fn reset(&mut self) {
        self.integrator.reset();
        self.differentiator.reset();
        self.derivative_filter.reset();
    }

    /// Returns the derivative filter
    pub fn filter(&self) -> &D {
        &self.derivative_filter
    }

    /// Returns the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the clock mutably, e.g. to advance a [`ManualClock`](crate::time::ManualClock)
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<C: Clock, F: Float, D: Filter<F>, const N: usize> FeedbackController<F, N>
    for PidController<C, F, D, N>
{
    type Gains = PidGains<F>;

    fn set_target(&mut self, target: State<F, N>) {
        self.target = target;
    }

    fn target(&self) -> &State<F, N> {
        &self.target
    }

    fn set_gains(&mut self, gains: PidGains<F>) {
        debug!("PID gains replaced");
        self.gains = gains;
    }

    fn calculate(&mut self, measurement: &State<F, N>) -> F {
        let now = self.clock.now();
        self.calculate_at(measurement, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_classes() {
        assert_eq!(Sign::of(2.5), Some(Sign::Positive));
        assert_eq!(Sign::of(-1e-300), Some(Sign::Negative));
        assert_eq!(Sign::of(0.0), Some(Sign::Zero));
        assert_eq!(Sign::of(-0.0), Some(Sign::Zero));
        assert_eq!(Sign::of(f64::NAN), None);
    }

    #[test]
    fn test_same_sign_treats_zero_as_its_own_class() {
        assert!(same_sign(0.0, -0.0));
        assert!(same_sign(3.0, 1e-12));
        assert!(!same_sign(0.0, 1.0));
        assert!(!same_sign(-1.0, 0.0));
        assert!(!same_sign(-1.0, 1.0));
        assert!(!same_sign(f64::NAN, f64::NAN));
        assert!(!same_sign(f64::NAN, 1.0));
    }
}
