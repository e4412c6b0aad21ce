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

use core::ops::{Index, Sub};

use num_traits::Float;

use crate::error::ConfigError;

/// A point in phase space: position, velocity, acceleration and so on.
///
/// `State` is a plain value. Every arithmetic operation returns a new state and leaves its
/// operands untouched. Component 0 is the position-like component, read with [`State::x`].
///
/// The dimension `N` is part of the type, so a state and a [`FullStateGains`] of different sizes
/// cannot be combined. Use [`State::try_from_slice`] when the components come from a runtime
/// source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<F, const N: usize>([F; N]);

/// The position/velocity/acceleration triple used by most joints and drivetrain axes
pub type MotionState<F = f64> = State<F, 3>;

impl<F: Float, const N: usize> State<F, N> {
    /// Creates a state from its components
    pub const fn from_components(components: [F; N]) -> Self {
        Self(components)
    }

    /// The state with every component equal to zero
    pub fn zeros() -> Self {
        Self([F::zero(); N])
    }

    /// A state at position `x` with all higher-order components zero
    pub fn from_position(x: F) -> Self {
        let mut state = Self::zeros();
        if let Some(first) = state.0.first_mut() {
            *first = x;
        }
        state
    }

    /// Copies a state out of a slice, failing unless the slice holds exactly `N` values
    pub fn try_from_slice(components: &[F]) -> Result<Self, ConfigError> {
        if components.len() != N {
            return Err(ConfigError::DimensionMismatch {
                expected: N,
                actual: components.len(),
            });
        }
        let mut state = Self::zeros();
        state.0.copy_from_slice(components);
        Ok(state)
    }

    /// The position-like component. A zero-dimensional state reads as zero.
    pub fn x(&self) -> F {
        self.0.first().copied().unwrap_or_else(F::zero)
    }

    /// All components in order
    pub fn components(&self) -> &[F; N] {
        &self.0
    }

    /// Component-wise `self - other`
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        let mut out = *self;
        out.0.iter_mut().zip(other.0.iter()).for_each(|(a, b)| *a = *a - *b);
        out
    }

    /// Component-wise product with a gain vector
    #[must_use]
    pub fn times(&self, gains: &FullStateGains<F, N>) -> Self {
        let mut out = *self;
        out.0
            .iter_mut()
            .zip(gains.0.iter())
            .for_each(|(a, k)| *a = *a * *k);
        out
    }

    /// Sum of all components, accumulated left to right from component 0
    pub fn sum(&self) -> F {
        self.0.iter().copied().reduce(|acc, c| acc + c).unwrap_or_else(F::zero)
    }
}

impl<F: Float> State<F, 3> {
    /// Creates a position/velocity/acceleration state
    pub const fn new(x: F, v: F, a: F) -> Self {
        Self([x, v, a])
    }

    /// Velocity
    pub fn v(&self) -> F {
        self.0[1]
    }

    /// Acceleration
    pub fn a(&self) -> F {
        self.0[2]
    }
}

impl<F: Float, const N: usize> Default for State<F, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<F: Float, const N: usize> Sub for State<F, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(&rhs)
    }
}

impl<F, const N: usize> Index<usize> for State<F, N> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.0[index]
    }
}

impl<F: Float, const N: usize> From<[F; N]> for State<F, N> {
    fn from(components: [F; N]) -> Self {
        Self(components)
    }
}

/// Gains of a full-state feedback law, one per state component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullStateGains<F, const N: usize>([F; N]);

impl<F: Float, const N: usize> FullStateGains<F, N> {
    /// Creates a gain vector
    pub const fn new(gains: [F; N]) -> Self {
        Self(gains)
    }

    /// Copies gains out of a slice, failing unless the slice holds exactly `N` values
    pub fn try_from_slice(gains: &[F]) -> Result<Self, ConfigError> {
        State::try_from_slice(gains).map(|state| Self(state.0))
    }

    /// All gains in order
    pub fn as_array(&self) -> &[F; N] {
        &self.0
    }

    /// Every gain multiplied by `k`
    #[must_use]
    pub fn scaled(&self, k: F) -> Self {
        let mut out = *self;
        out.0.iter_mut().for_each(|g| *g = *g * k);
        out
    }
}

impl<F: Float, const N: usize> Default for FullStateGains<F, N> {
    fn default() -> Self {
        Self([F::zero(); N])
    }
}

impl<F: Float, const N: usize> From<[F; N]> for FullStateGains<F, N> {
    fn from(gains: [F; N]) -> Self {
        Self(gains)
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_interop {
    use super::State;
    use nalgebra as na;
    use num_traits::Float;

    impl<F: Float + na::Scalar, const N: usize> From<na::SVector<F, N>> for State<F, N> {
        fn from(v: na::SVector<F, N>) -> Self {
            State(core::array::from_fn(|i| v[i]))
        }
    }

    impl<F: Float + na::Scalar, const N: usize> From<State<F, N>> for na::SVector<F, N> {
        fn from(state: State<F, N>) -> Self {
            na::SVector::from_column_slice(&state.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_operations_leave_operands_untouched() {
        let target = State::new(3.0, 1.0, 0.5);
        let measured = State::new(1.0, 2.0, 0.5);
        let gains = FullStateGains::new([2.0, 0.5, 4.0]);

        let error = target.minus(&measured);
        assert_eq!(error, State::new(2.0, -1.0, 0.0));
        assert_eq!(target - measured, error);
        assert_eq!(target, State::new(3.0, 1.0, 0.5));

        let weighted = error.times(&gains);
        assert_eq!(weighted, State::new(4.0, -0.5, 0.0));
        assert_eq!(weighted.sum(), 3.5);
        assert_eq!(error, State::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_accessors() {
        let state = MotionState::new(1.0, 2.0, 3.0);
        assert_eq!((state.x(), state.v(), state.a()), (1.0, 2.0, 3.0));
        assert_eq!(state[1], 2.0);
        assert_eq!(State::<f64, 4>::from_position(7.0).components(), &[7.0, 0.0, 0.0, 0.0]);
        assert_eq!(State::<f64, 0>::zeros().x(), 0.0);
        assert_eq!(State::<f64, 0>::zeros().sum(), 0.0);
    }

    #[test]
    fn test_sum_starts_from_first_component() {
        // Folding from +0.0 would turn an all-negative-zero state into +0.0
        let state = State::from_components([-0.0_f64, -0.0]);
        assert!(state.sum().is_sign_negative());
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        assert_eq!(
            State::<f64, 3>::try_from_slice(&[1.0, 2.0]),
            Err(ConfigError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            FullStateGains::<f64, 2>::try_from_slice(&[1.0, 2.0, 3.0]),
            Err(ConfigError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            FullStateGains::<f64, 2>::try_from_slice(&[1.0, 2.0]).map(|g| *g.as_array()),
            Ok([1.0, 2.0])
        );
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn test_nalgebra_round_trip() {
        let v = nalgebra::Vector3::new(1.0, -2.0, 0.25);
        let state: State<f64, 3> = v.into();
        assert_eq!(state, State::new(1.0, -2.0, 0.25));
        assert_eq!(nalgebra::Vector3::from(state), v);
    }
}
