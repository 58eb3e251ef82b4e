//! Control-tick driver and safe-region predicate.
//!
//! [`CartTwoPoleSim`] is the public entry point for a controlling policy:
//! one [`step`](CartTwoPoleSim::step) per control decision, then
//! [`is_out_of_bounds`](CartTwoPoleSim::is_out_of_bounds) to decide whether
//! the episode continues. The simulator owns nothing but its immutable
//! configuration, so independent instances can run on separate threads
//! without any sharing.

use tracing::trace;

use crate::dynamics;
use crate::integrator::rk4_step;
use crate::types::{CartTwoPoleConfig, State};

/// Simulation time step size (s). Control decisions arrive at half the
/// simulation frequency, so one control tick spans two steps of this size.
pub const TAU: f64 = 0.01;

/// Deterministic simulator for the cart / two-pole apparatus.
#[derive(Clone, Debug, Default)]
pub struct CartTwoPoleSim {
    cfg: CartTwoPoleConfig,
}

impl CartTwoPoleSim {
    /// Create a simulator with the given physical constants.
    #[must_use]
    pub const fn new(cfg: CartTwoPoleConfig) -> Self {
        Self { cfg }
    }

    /// The physical constants this simulator was built with.
    #[must_use]
    pub const fn config(&self) -> &CartTwoPoleConfig {
        &self.cfg
    }

    /// Apply one control decision and return the resulting state.
    ///
    /// Performs exactly two fixed-size RK4 steps with the action held
    /// constant; before each step the derivative vector is rebuilt from the
    /// current state. The input state is taken by value and a fresh state is
    /// returned; no simulator state persists between calls.
    #[must_use]
    pub fn step(&self, action: f64, state: State) -> State {
        let mut s = state;
        for _ in 0..2 {
            let k1 = dynamics::derivative(&self.cfg, action, &s);
            s = rk4_step(&self.cfg, action, &s, &k1, TAU);
        }
        trace!(
            action,
            x = s.x,
            theta1 = s.theta1,
            theta2 = s.theta2,
            "control tick applied"
        );
        s
    }

    /// [`step`](Self::step) over the canonical positional state ordering,
    /// for callers holding flat state.
    #[must_use]
    pub fn step_array(&self, action: f64, state: [f64; 6]) -> [f64; 6] {
        self.step(action, State::from_array(state)).to_array()
    }

    /// Whether the cart position or either pole angle has left the safe
    /// region. The safe region is open: reaching a limit exactly already
    /// counts as out of bounds.
    ///
    /// NaN compares false against every limit, so a NaN state (e.g. from a
    /// degenerate zero pole length) silently registers as in-bounds here;
    /// callers that can produce one must check for it themselves.
    #[must_use]
    pub fn is_out_of_bounds(&self, x: f64, theta1: f64, theta2: f64) -> bool {
        x <= -self.cfg.position_limit
            || x >= self.cfg.position_limit
            || theta1 <= -self.cfg.angle_limit
            || theta1 >= self.cfg.angle_limit
            || theta2 <= -self.cfg.angle_limit
            || theta2 >= self.cfg.angle_limit
    }
}
