//! Double-pole balancing environment.

use physics::{CartTwoPoleConfig, CartTwoPoleSim, State};

use crate::env::Env;

/// Environment for balancing two poles of differing mass and length by
/// pushing the cart left (action 0) or right (action 1).
///
/// The environment owns the current state and a failure latch; the physics
/// itself is stateless between ticks. Observations are the six state
/// scalars in the canonical positional ordering.
pub struct DoublePoleBalanceEnv {
    sim: CartTwoPoleSim,
    state: State,
    failed: bool,
    /// Control ticks survived since the last reset.
    ticks: u64,
}

impl DoublePoleBalanceEnv {
    /// Create an environment with the classic default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CartTwoPoleConfig::default())
    }

    /// Create an environment with altered physics.
    #[must_use]
    pub fn with_config(cfg: CartTwoPoleConfig) -> Self {
        Self {
            sim: CartTwoPoleSim::new(cfg),
            state: State::default(),
            failed: false,
            ticks: 0,
        }
    }

    /// Resets the environment with pole 1 offset by the given angle in
    /// radians. A small angle will cause the poles to fall over when no
    /// control is applied.
    pub fn reset_with_angle(&mut self, angle: f64) -> Vec<f64> {
        self.failed = false;
        self.ticks = 0;
        self.state = State {
            theta1: angle,
            ..State::default()
        };
        self.state.to_array().to_vec()
    }

    /// The current full state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Control ticks survived since the last reset.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for DoublePoleBalanceEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for DoublePoleBalanceEnv {
    fn step(&mut self, action: f64) -> (Vec<f64>, f64, bool) {
        self.state = self.sim.step(action, self.state);
        if self
            .sim
            .is_out_of_bounds(self.state.x, self.state.theta1, self.state.theta2)
        {
            self.failed = true;
        }
        let reward = if self.failed { 0.0 } else { 1.0 };
        if !self.failed {
            self.ticks += 1;
        }
        (self.state.to_array().to_vec(), reward, self.failed)
    }

    fn reset(&mut self) -> Vec<f64> {
        self.reset_with_angle(0.0)
    }

    fn obs_size(&self) -> usize {
        6
    }

    fn action_size(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_six_zeroed_observations() {
        let mut env = DoublePoleBalanceEnv::new();
        let obs = env.reset();
        assert_eq!(obs.len(), env.obs_size());
        assert!(obs.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn failure_latches_until_reset() {
        let mut env = DoublePoleBalanceEnv::new();
        // Drive rightward until the episode fails.
        let mut done = false;
        for _ in 0..2_000 {
            let (_, _, d) = env.step(1.0);
            if d {
                done = true;
                break;
            }
        }
        assert!(done, "constant action must eventually fail");

        let (_, reward, still_done) = env.step(1.0);
        assert!(still_done, "failure must latch");
        assert!((reward - 0.0).abs() < f64::EPSILON);

        let obs = env.reset();
        assert!(obs.iter().all(|v| *v == 0.0));
        assert_eq!(env.ticks(), 0);
    }
}
