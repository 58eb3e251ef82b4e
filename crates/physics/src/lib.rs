#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart / Two-Pole Physics Kernel
//!
//! A deterministic simulation of a cart carrying two hinged poles of
//! differing mass and length, driven by a bang-bang horizontal force and
//! advanced with a fixed-step fourth-order Runge-Kutta integrator.
//!
//! This crate is the physics layer for double-pole balancing experiments.
//! It deliberately models exactly one mechanical topology (cart plus two
//! poles on a shared pivot) rather than providing a general rigid-body
//! engine.
//!
//! ## Key Components
//!
//! -   **State & Configuration:** [`State`] holds the six scalars that fully
//!     describe the apparatus at an instant; [`CartTwoPoleConfig`] carries
//!     the immutable physical constants. Both live in the [`types`] module.
//! -   **Dynamics:** the [`dynamics`] module evaluates the closed-form
//!     coupled equations of motion, producing instantaneous accelerations
//!     for the cart and both poles.
//! -   **Integration:** the [`integrator`] module advances a state by one
//!     fixed-size step with the classical four-stage Runge-Kutta method.
//! -   **Simulation:** [`CartTwoPoleSim`] in the [`simulation`] module is
//!     the entry point for callers: one control tick per [`step`] call,
//!     plus the out-of-bounds predicate used for episode termination.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{CartTwoPoleSim, State};
//!
//! let sim = CartTwoPoleSim::default();
//! let mut state = State::default();
//! for _ in 0..10 {
//!     state = sim.step(1.0, state);
//!     if sim.is_out_of_bounds(state.x, state.theta1, state.theta2) {
//!         break;
//!     }
//! }
//! ```
//!
//! [`step`]: CartTwoPoleSim::step

pub mod dynamics;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use dynamics::Accelerations;
pub use simulation::{CartTwoPoleSim, TAU};
pub use types::{CartTwoPoleConfig, Derivative, State};
