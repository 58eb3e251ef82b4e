//! State and configuration types for the cart / two-pole apparatus.
//!
//! The canonical positional ordering of the state vector is
//! `[x, x_dot, theta1, theta1_dot, theta2, theta2_dot]`; the array
//! conversions below are the compatibility boundary for callers that hold
//! flat state.

/// Full instantaneous state of the apparatus.
///
/// Angles are measured from vertical in radians; positions in meters.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct State {
    /// Cart horizontal position (m).
    pub x: f64,
    /// Cart velocity (m/s).
    pub x_dot: f64,
    /// Pole-1 angle from vertical (rad).
    pub theta1: f64,
    /// Pole-1 angular velocity (rad/s).
    pub theta1_dot: f64,
    /// Pole-2 angle from vertical (rad).
    pub theta2: f64,
    /// Pole-2 angular velocity (rad/s).
    pub theta2_dot: f64,
}

impl State {
    /// Build a state from the canonical positional ordering.
    #[must_use]
    pub const fn from_array(a: [f64; 6]) -> Self {
        Self {
            x: a[0],
            x_dot: a[1],
            theta1: a[2],
            theta1_dot: a[3],
            theta2: a[4],
            theta2_dot: a[5],
        }
    }

    /// Return the state in the canonical positional ordering.
    #[must_use]
    pub const fn to_array(self) -> [f64; 6] {
        [
            self.x,
            self.x_dot,
            self.theta1,
            self.theta1_dot,
            self.theta2,
            self.theta2_dot,
        ]
    }
}

/// Time derivative of a [`State`], slot for slot.
///
/// Invariant: the position-slot derivatives (`x_dot`, `theta1_dot`,
/// `theta2_dot`) are always copies of the corresponding state velocities;
/// the velocity-slot derivatives are the accelerations computed by
/// [`dynamics::accelerations`](crate::dynamics::accelerations).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Derivative {
    /// d(x)/dt, i.e. the cart velocity (m/s).
    pub x_dot: f64,
    /// d(x_dot)/dt, the cart acceleration (m/s^2).
    pub x_ddot: f64,
    /// d(theta1)/dt (rad/s).
    pub theta1_dot: f64,
    /// d(theta1_dot)/dt (rad/s^2).
    pub theta1_ddot: f64,
    /// d(theta2)/dt (rad/s).
    pub theta2_dot: f64,
    /// d(theta2_dot)/dt (rad/s^2).
    pub theta2_ddot: f64,
}

impl Derivative {
    /// Return the derivative in the canonical positional ordering.
    #[must_use]
    pub const fn to_array(self) -> [f64; 6] {
        [
            self.x_dot,
            self.x_ddot,
            self.theta1_dot,
            self.theta1_ddot,
            self.theta2_dot,
            self.theta2_ddot,
        ]
    }
}

/// Physical constants of the cart / two-pole apparatus.
///
/// Immutable for the lifetime of a simulation. The defaults reproduce the
/// classic double-pole balancing setup exactly and must not drift: existing
/// experiments rely on them for drop-in compatibility. Altered physics for
/// tests goes through a non-default value of this struct instead.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CartTwoPoleConfig {
    /// Gravitational acceleration (m/s^2). Negative: the equations of
    /// motion for the two-pole system assume it to be negative.
    pub gravity: f64,
    /// Cart mass (kg).
    pub cart_mass: f64,
    /// Magnitude of the bang-bang force applied to the cart (N).
    pub force_mag: f64,
    /// Mass of the first pole (kg).
    pub pole1_mass: f64,
    /// Half the first pole's length (m).
    pub pole1_half_length: f64,
    /// Mass of the second pole (kg).
    pub pole2_mass: f64,
    /// Half the second pole's length (m).
    pub pole2_half_length: f64,
    /// Coefficient of friction at the pole pivot.
    pub pivot_friction: f64,
    /// Cart position magnitude beyond which the episode fails (m).
    pub position_limit: f64,
    /// Pole angle magnitude beyond which the episode fails (rad).
    pub angle_limit: f64,
}

impl Default for CartTwoPoleConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            cart_mass: 1.0,
            force_mag: 10.0,
            pole1_mass: 1.0,
            pole1_half_length: 0.5,
            pole2_mass: 0.1,
            pole2_half_length: 0.05,
            pivot_friction: 0.000_002,
            position_limit: 2.4,
            angle_limit: 36.0 * std::f64::consts::PI / 180.0,
        }
    }
}
