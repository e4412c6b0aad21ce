use crate::state::State;
use crate::time::InstantLike;
use nalgebra as na;

/// Setpoint waveforms
pub enum WaveForm {
    Sine,
    Square,
}

pub struct SignalGenerator<I: InstantLike> {
    fcn: fn(f64) -> f64,
    initial_time: I,
    amplitude: f64,
    offset: f64,
}

impl<I: InstantLike> SignalGenerator<I> {
    pub fn new(waveform: WaveForm, initial_time: I, amplitude: f64, offset: f64) -> Self {
        Self {
            fcn: match waveform {
                WaveForm::Sine => f64::sin,
                WaveForm::Square => |x| if x.sin() >= 0.0 { 1.0 } else { -1.0 },
            },
            initial_time,
            amplitude,
            offset,
        }
    }

    pub fn generate(&self, time: I) -> f64 {
        self.amplitude * (self.fcn)(time.duration_since(self.initial_time).as_secs_f64())
            + self.offset
    }

    /// The generated value as a position target
    pub fn target<const N: usize>(&self, time: I) -> State<f64, N> {
        State::from_position(self.generate(time))
    }
}

/// Plant dynamics in state-space form, `x' = f(x, u)`, with the position as output
pub trait Plant {
    fn f(&self, x: na::Vector2<f64>, u: f64) -> na::Vector2<f64>;

    /// The measured state handed to a controller
    fn measure(&self, x: na::Vector2<f64>) -> State<f64, 2> {
        x.into()
    }
}

pub struct MassSpringDamper {
    pub natural_frequency: f64,
    pub damping_ratio: f64,
}

impl Plant for MassSpringDamper {
    /// Implements the state-space realization of the mass-spring-damper system:
    /// ┌     ┐   ┌              ┐┌    ┐   ┌     ┐
    /// │ p'  │ = │  0     1     ││ p  │ + │ 0   │ u
    /// │ p'' │   │  -ωₙ²  -2ζωₙ ││ p' │   │ ωₙ² │
    /// └     ┘   └              ┘└    ┘   └     ┘
    fn f(&self, x: na::Vector2<f64>, u: f64) -> na::Vector2<f64> {
        let omega_sq = self.natural_frequency.powi(2);
        let two_zeta_omega = 2.0 * self.natural_frequency * self.damping_ratio;

        let mat_a = na::Matrix2::new(0.0, 1.0, -omega_sq, -two_zeta_omega);
        let mat_b = na::Vector2::new(0.0, omega_sq);

        mat_a * x + mat_b * u
    }
}

/// A mass sliding against viscous friction, e.g. a drivetrain axis. Any position is an
/// equilibrium under zero force.
pub struct DampedMass {
    pub mass: f64,
    pub friction: f64,
}

impl Plant for DampedMass {
    /// ┌     ┐   ┌           ┐┌    ┐   ┌     ┐
    /// │ p'  │ = │  0   1    ││ p  │ + │ 0   │ u
    /// │ p'' │   │  0  -b/m  ││ p' │   │ 1/m │
    /// └     ┘   └           ┘└    ┘   └     ┘
    fn f(&self, x: na::Vector2<f64>, u: f64) -> na::Vector2<f64> {
        let mat_a = na::Matrix2::new(0.0, 1.0, 0.0, -self.friction / self.mass);
        let mat_b = na::Vector2::new(0.0, 1.0 / self.mass);

        mat_a * x + mat_b * u
    }
}

/// One classic fourth-order Runge-Kutta step of `x' = f(x)`
pub fn rk4_step<G>(f: G, x: na::Vector2<f64>, dt: f64) -> na::Vector2<f64>
where
    G: Fn(na::Vector2<f64>) -> na::Vector2<f64>,
{
    let k1 = f(x);
    let k2 = f(x + k1 * (dt / 2.0));
    let k3 = f(x + k2 * (dt / 2.0));
    let k4 = f(x + k3 * dt);
    x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}
