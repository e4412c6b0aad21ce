#![warn(missing_docs)]

//! # Feedback Law Library
//!
//! This library provides the feedback-control core of a motion-control stack: the part that turns
//! a target state and a measured state into an actuator command once per control-loop tick.
//!
//! Two interchangeable laws implement the [`FeedbackController`](controller::FeedbackController)
//! capability:
//!
//! - [`PidController`](pid::PidController): PID over the position error with
//!   - a pluggable filter on the derivative term,
//!   - zero-crossing reset: integral, derivative and filter memory are discarded whenever the
//!     error changes sign,
//!   - anti-windup: integration is suspended while the output is saturated in the direction of
//!     the error.
//! - [`FullStateController`](full_state::FullStateController): a static gain vector applied to
//!   the full state error.
//!
//! Everything runs in `no_std`; `calculate` never allocates.
//!
//! ## Usage
//!
//! ### PID Controller
//!
//! The integrator and differentiator measure the time elapsed between ticks through an injected
//! [`Clock`](time::Clock). On a robot that is usually [`StdClock`](time::StdClock) or a wrapper
//! around a hardware timer; in tests it is a [`ManualClock`](time::ManualClock).
//!
//! ```rust
//! use std::time::Duration;
//!
//! use feedback_law::controller::FeedbackController;
//! use feedback_law::gains::PidGainsBuilder;
//! use feedback_law::pid::PidController;
//! use feedback_law::state::MotionState;
//! use feedback_law::time::{ManualClock, Millis};
//!
//! let gains = PidGainsBuilder::default()
//!     .kp(2.0)
//!     .ki(0.5)
//!     .max_output_with_integral(12.0)
//!     .build()
//!     .expect("Invalid PID gains");
//!
//! let mut pid: PidController<_> = PidController::new(ManualClock::new(Millis(0)));
//! pid.set_gains(gains);
//! pid.set_target(MotionState::new(1.0, 0.0, 0.0));
//!
//! let output = pid.calculate(&MotionState::new(0.25, 0.0, 0.0));
//! assert_eq!(output, 1.5);
//!
//! pid.clock_mut().advance(Duration::from_millis(20));
//! let output = pid.calculate(&MotionState::new(0.5, 0.0, 0.0));
//! assert!(output > 1.0);
//! assert!(!pid.is_position_in_tolerance(&MotionState::new(0.5, 0.0, 0.0), 0.1));
//! ```
//!
//! ### Full-State Controller
//!
//! ```rust
//! use feedback_law::controller::FeedbackController;
//! use feedback_law::full_state::FullStateController;
//! use feedback_law::state::{FullStateGains, State};
//!
//! let mut controller = FullStateController::new(FullStateGains::new([4.0, 0.5]));
//! controller.set_target(State::from_components([1.0, 0.0]));
//!
//! let output = controller.calculate(&State::from_components([0.5, 2.0]));
//! assert_eq!(output, 4.0 * 0.5 + 0.5 * -2.0);
//! ```
//!
//! ### Plugging in a derivative filter
//!
//! ``` rust
//! use core::time::Duration;
//! use feedback_law::filter::LowPassFilter;
//! use feedback_law::pid::PidController;
//! use feedback_law::time::StdClock;
//!
//! let filter = LowPassFilter::from_time_constant(0.02, Duration::from_millis(10))
//!     .expect("Invalid filter");
//! let pid: PidController<StdClock, f64, _> = PidController::with_filter(StdClock, filter);
//! assert!((pid.filter().alpha() - 1.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! MIT
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// Time-based numeric helpers used by the PID controller.
pub mod calculus;

/// The capability shared by all feedback laws.
pub mod controller;

/// Configuration errors.
pub mod error;

/// Derivative filters.
pub mod filter;

/// The full-state feedback law.
pub mod full_state;

/// PID gains and their builder.
pub mod gains;

/// The PID feedback law.
pub mod pid;

/// State vectors and full-state gain vectors.
pub mod state;

/// Time sources and time-like types.
pub mod time;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
