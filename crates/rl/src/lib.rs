#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Reinforcement-learning interface over the cart / two-pole physics kernel.
//!
//! The physics crate knows nothing about episodes; this crate supplies the
//! boundary a controlling policy talks to: the [`Env`] trait and the
//! [`DoublePoleBalanceEnv`] environment, which pairs each control decision
//! with the out-of-bounds check that decides episode termination.

pub mod balance;
pub mod env;

pub use balance::DoublePoleBalanceEnv;
pub use env::Env;
