//! Fixed-step fourth-order Runge-Kutta integration.
//!
//! One call to [`rk4_step`] advances the six-slot state by a single step of
//! size `tau`. The caller supplies the derivative at the current state (k1);
//! the three remaining stage derivatives are evaluated here, each routed
//! through [`dynamics::derivative`] so the position/velocity coupling is
//! never re-derived by other means.
//!
//! Stage order is fixed: each trial state depends on the previous stage's
//! derivative estimate. Reordering would change the result, and callers
//! rely on bit-identical output for reproducible experiments.

use crate::dynamics;
use crate::types::{CartTwoPoleConfig, Derivative, State};

/// Build the trial state `y + h * k`, slot for slot.
fn trial(y: &State, h: f64, k: &Derivative) -> State {
    let y = y.to_array();
    let k = k.to_array();
    let mut out = [0.0; 6];
    for i in 0..6 {
        out[i] = y[i] + h * k[i];
    }
    State::from_array(out)
}

/// Advance `state` by one RK4 step of size `tau` under a fixed action.
///
/// `k1` is the derivative of `state` itself, supplied by the caller so the
/// control loop can reuse it. The action value is held constant across all
/// four stages.
#[must_use]
pub fn rk4_step(
    cfg: &CartTwoPoleConfig,
    action: f64,
    state: &State,
    k1: &Derivative,
    tau: f64,
) -> State {
    let half = tau / 2.0;

    let k2 = dynamics::derivative(cfg, action, &trial(state, half, k1));
    let k3 = dynamics::derivative(cfg, action, &trial(state, half, &k2));
    let k4 = dynamics::derivative(cfg, action, &trial(state, tau, &k3));

    let y = state.to_array();
    let k1 = k1.to_array();
    let k2 = k2.to_array();
    let k3 = k3.to_array();
    let k4 = k4.to_array();

    let h6 = tau / 6.0;
    let mut out = [0.0; 6];
    for i in 0..6 {
        // Summation order matters for bit-exact reproducibility; the
        // 2.0 * (k3 + k2) grouping is the historical one.
        out[i] = y[i] + h6 * ((k1[i] + k4[i]) + 2.0 * (k3[i] + k2[i]));
    }
    State::from_array(out)
}
