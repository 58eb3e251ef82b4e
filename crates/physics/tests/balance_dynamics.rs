//! Physical plausibility of the coupled two-pole dynamics over whole
//! episodes, using default constants.

use physics::{CartTwoPoleSim, CartTwoPoleConfig, State};

#[test]
fn uncontrolled_episode_eventually_leaves_the_safe_region() {
    // Constant rightward force with the poles free to fall: a non-policy
    // must lose within a bounded number of ticks.
    let sim = CartTwoPoleSim::default();
    let mut state = State {
        theta1: 0.01, // slight initial lean
        ..State::default()
    };

    let mut failed_at = None;
    for tick in 0..2_000 {
        state = sim.step(1.0, state);
        if sim.is_out_of_bounds(state.x, state.theta1, state.theta2) {
            failed_at = Some(tick);
            break;
        }
    }

    let tick = failed_at.expect("constant-action episode should fail");
    println!(
        "failed at tick {}: x={:.4}, theta1={:.4}, theta2={:.4}",
        tick, state.x, state.theta1, state.theta2
    );
    assert!(tick > 0, "failure should not be instantaneous from upright");
}

#[test]
fn alternating_pushes_from_upright_stay_near_equilibrium() {
    // Upright is an exact (unstable) equilibrium; alternating the push
    // direction every tick keeps the state small over a short horizon.
    let sim = CartTwoPoleSim::default();
    let mut state = State::default();

    for tick in 0..4 {
        let action = f64::from(tick % 2);
        state = sim.step(action, state);
    }

    println!(
        "after 4 alternating ticks: x={:.6}, theta1={:.6}, theta2={:.6}",
        state.x, state.theta1, state.theta2
    );
    assert!(state.x.abs() < 0.05);
    assert!(state.theta1.abs() < 0.05);
    // The short light pole diverges fastest; it dominates the drift.
    assert!(state.theta2.abs() < 0.2);
    assert!(!sim.is_out_of_bounds(state.x, state.theta1, state.theta2));
}

#[test]
fn heavier_cart_accelerates_less_under_the_same_push() {
    let light = CartTwoPoleSim::default();
    let heavy = CartTwoPoleSim::new(CartTwoPoleConfig {
        cart_mass: 10.0,
        ..CartTwoPoleConfig::default()
    });

    let after_light = light.step(1.0, State::default());
    let after_heavy = heavy.step(1.0, State::default());

    assert!(
        after_heavy.x < after_light.x,
        "heavier cart should move less: {} vs {}",
        after_heavy.x,
        after_light.x
    );
    assert!(after_heavy.x > 0.0);
}

#[test]
fn altered_physics_does_not_leak_between_instances() {
    // Two simulators with different constants run interleaved must behave
    // exactly as when run in isolation.
    let a = CartTwoPoleSim::default();
    let b = CartTwoPoleSim::new(CartTwoPoleConfig {
        force_mag: 2.5,
        ..CartTwoPoleConfig::default()
    });

    let isolated_a = a.step(1.0, State::default());
    let isolated_b = b.step(1.0, State::default());

    let interleaved_b = b.step(1.0, State::default());
    let interleaved_a = a.step(1.0, State::default());

    assert_eq!(isolated_a.to_array(), interleaved_a.to_array());
    assert_eq!(isolated_b.to_array(), interleaved_b.to_array());
    assert!(isolated_b.x < isolated_a.x, "weaker push moves the cart less");
}
