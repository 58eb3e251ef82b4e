//! Equations of motion for the cart / two-pole apparatus.
//!
//! The accelerations come from the closed-form coupled Lagrangian-derived
//! equations for a cart with two poles hinged on a shared pivot. Both
//! entry points are pure: no validation, no side effects, total over all
//! real inputs (trigonometric functions are defined everywhere).

use crate::types::{CartTwoPoleConfig, Derivative, State};

/// Instantaneous accelerations of the cart and both poles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Accelerations {
    /// Cart acceleration (m/s^2).
    pub x_ddot: f64,
    /// Pole-1 angular acceleration (rad/s^2).
    pub theta1_ddot: f64,
    /// Pole-2 angular acceleration (rad/s^2).
    pub theta2_ddot: f64,
}

/// Per-pole terms entering the cart force balance.
struct PoleTerms {
    cos: f64,
    /// Gravity projected along the pole swing direction.
    g_sin: f64,
    /// Pivot friction torque scaled by the pole's mass-length product.
    temp: f64,
    /// The pole's contribution to the cart force balance.
    fi: f64,
    /// The pole's contribution to the effective cart inertia.
    mi: f64,
}

fn pole_terms(
    mass: f64,
    half_length: f64,
    gravity: f64,
    pivot_friction: f64,
    theta: f64,
    theta_dot: f64,
) -> PoleTerms {
    let cos = theta.cos();
    let sin = theta.sin();
    let g_sin = gravity * sin;
    let ml = half_length * mass;
    let temp = pivot_friction * theta_dot / ml;
    let fi = ml * theta_dot * theta_dot * sin + 0.75 * mass * cos * (temp + g_sin);
    let mi = mass * (1.0 - 0.75 * cos * cos);
    PoleTerms {
        cos,
        g_sin,
        temp,
        fi,
        mi,
    }
}

/// Evaluate the equations of motion at `state` under the given action.
///
/// `action` is nominally binary (0 pushes left, 1 pushes right) and is
/// mapped to a signed force via `(action - 0.5) * force_mag * 2.0`. The
/// mapping is kept generic over real-valued actions on purpose: integrator
/// sub-stages pass the action value through unchanged.
#[must_use]
pub fn accelerations(cfg: &CartTwoPoleConfig, action: f64, state: &State) -> Accelerations {
    let force = (action - 0.5) * cfg.force_mag * 2.0;

    let p1 = pole_terms(
        cfg.pole1_mass,
        cfg.pole1_half_length,
        cfg.gravity,
        cfg.pivot_friction,
        state.theta1,
        state.theta1_dot,
    );
    let p2 = pole_terms(
        cfg.pole2_mass,
        cfg.pole2_half_length,
        cfg.gravity,
        cfg.pivot_friction,
        state.theta2,
        state.theta2_dot,
    );

    // Both poles share the single cart acceleration computed here.
    let x_ddot = (force + p1.fi + p2.fi) / (p1.mi + p2.mi + cfg.cart_mass);
    let theta1_ddot = -0.75 * (x_ddot * p1.cos + p1.g_sin + p1.temp) / cfg.pole1_half_length;
    let theta2_ddot = -0.75 * (x_ddot * p2.cos + p2.g_sin + p2.temp) / cfg.pole2_half_length;

    Accelerations {
        x_ddot,
        theta1_ddot,
        theta2_ddot,
    }
}

/// Assemble the six-slot derivative vector for `state`.
///
/// Position-slot derivatives are the state's velocities; velocity-slot
/// derivatives are the accelerations from [`accelerations`].
#[must_use]
pub fn derivative(cfg: &CartTwoPoleConfig, action: f64, state: &State) -> Derivative {
    let acc = accelerations(cfg, action, state);
    Derivative {
        x_dot: state.x_dot,
        x_ddot: acc.x_ddot,
        theta1_dot: state.theta1_dot,
        theta1_ddot: acc.theta1_ddot,
        theta2_dot: state.theta2_dot,
        theta2_ddot: acc.theta2_ddot,
    }
}
