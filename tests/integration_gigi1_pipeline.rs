//! Integration tests for the distribution algebra and the GI/GI/1 solver.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from factory-built interarrival and
//!   service distributions, through the increment `C = B - A`, to the
//!   stationary waiting time returned by the Lindley solver.
//! - Exercise the public crate surface exactly as a downstream user would,
//!   using only the `prelude` re-exports.
//!
//! Coverage
//! --------
//! - `distribution`:
//!   - Sums of uniform and deterministic distributions.
//!   - Folding with `pi_fold` and summary statistics of the results.
//! - `queueing`:
//!   - Underloaded deterministic and geometric-arrival queues.
//!   - Rejection of unstable queues and the iteration cap.
//!   - Monotonicity of the mean waiting time in the service load.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of individual operators and error variants;
//!   these are covered by unit tests.
//! - Python bindings, which are exercised from Python.
use approx::assert_relative_eq;
use discrete_time::{distribution::prelude::*, queueing::prelude::*};

/// Solve a GI/GI/1 queue with default options and a zero initial wait.
fn solve(a: &DiscreteDistribution, b: &DiscreteDistribution) -> LindleyOutcome {
    gigi1_waiting_time(a, b, None, &LindleyOptions::default()).expect("stable queue should solve")
}

#[test]
// Purpose
// -------
// Sum of two uniforms is triangular with the expected moments.
//
// Given
// -----
// - U = DU(1, 6) added to itself (two dice).
//
// Expect
// ------
// - Support [2, 12], mode 7, mean 7, variance 35/6, unit mass.
fn two_dice_sum_is_triangular() {
    // Arrange
    let die = discrete_uniform(1, 6).unwrap();

    // Act
    let sum = add(&die, &die).unwrap();

    // Assert
    assert_eq!((sum.xmin(), sum.xmax()), (2, 12));
    assert_eq!(sum.mode(), 7);
    assert_relative_eq!(sum.mean(), 7.0, epsilon = 1e-12);
    assert_relative_eq!(sum.variance(), 35.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(sum.pmf(7), 6.0 / 36.0, epsilon = 1e-12);
    assert!(sum.is_valid());
}

#[test]
fn deterministic_sum_and_fold_compose() {
    let seven = add(&deterministic(3), &deterministic(4)).unwrap();
    assert_eq!((seven.xmin(), seven.xmax()), (7, 7));
    assert_eq!(seven.pmf(7), 1.0);

    let folded = pi_fold(&discrete_uniform(0, 4).unwrap(), 3);
    assert_eq!((folded.xmin(), folded.xmax()), (3, 4));
    assert_relative_eq!(folded.pmf(3), 0.8, epsilon = 1e-12);
    assert_relative_eq!(folded.pmf(4), 0.2, epsilon = 1e-12);
    assert_relative_eq!(folded.mean(), 3.2, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// A queue whose service never outlasts the interarrival time has no wait.
//
// Given
// -----
// - A = DET(5), B = DET(3).
// - A = geometric on {1, 2, ...} with mean 4, B = DET(1).
//
// Expect
// ------
// - Both converge to the point mass at 0.
fn underloaded_queues_never_wait() {
    let det = solve(&deterministic(5), &deterministic(3));
    assert!(det.converged());
    assert_eq!((det.waiting_time.xmin(), det.waiting_time.xmax()), (0, 0));

    let a = geometric(4.0, 1, DEFAULT_TAIL_EPS).unwrap();
    let geo = solve(&a, &deterministic(1));
    assert!(geo.converged());
    assert_relative_eq!(geo.waiting_time.pmf(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(geo.waiting_time.mean(), 0.0, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// A realistic queue built from factories converges to a proper waiting
// time whose mean grows with the service load.
//
// Given
// -----
// - A = negative binomial with mean 6 and cv 0.8.
// - B = DET(2) (ρ ≈ 1/3) and B = DET(4) (ρ ≈ 2/3).
//
// Expect
// ------
// - Both converge; waiting times live on [0, ∞) with mass ≈ 1.
// - P(W = 0) decreases and E[W] increases with the load.
fn waiting_time_grows_with_load() {
    // Arrange
    let a = negative_binomial(6.0, 0.8, DEFAULT_TAIL_EPS).unwrap();

    // Act
    let light = solve(&a, &deterministic(2));
    let heavy = solve(&a, &deterministic(4));

    // Assert
    for out in [&light, &heavy] {
        assert!(out.converged());
        assert_eq!(out.waiting_time.xmin(), 0);
        assert_relative_eq!(out.waiting_time.total_mass(), 1.0, epsilon = 1e-6);
    }
    assert!(light.waiting_time.pmf(0) > heavy.waiting_time.pmf(0));
    assert!(light.waiting_time.mean() < heavy.waiting_time.mean());
}

#[test]
fn unstable_queue_fails_before_iterating() {
    let a = discrete_uniform(2, 4).unwrap();
    let err = gigi1_waiting_time(&a, &deterministic(4), None, &LindleyOptions::default())
        .unwrap_err();
    match err {
        QueueError::UnstableQueue { rho } => assert_relative_eq!(rho, 4.0 / 3.0, epsilon = 1e-12),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
// Purpose
// -------
// The iteration cap returns the last iterate instead of failing.
//
// Given
// -----
// - A = DU(0, 20), B = DU(8, 10) (ρ = 0.9), max_iter = 5, tight tolerance.
//
// Expect
// ------
// - status MaxIterReached after exactly 5 steps, with a usable iterate.
fn iteration_cap_returns_last_iterate() {
    // Arrange
    let a = discrete_uniform(0, 20).unwrap();
    let b = discrete_uniform(8, 10).unwrap();
    let opts = LindleyOptions::new(1e-16, 1e-9, Some(5)).unwrap();

    // Act
    let out = gigi1_waiting_time(&a, &b, None, &opts).unwrap();

    // Assert
    assert_eq!(out.status, LindleyStatus::MaxIterReached);
    assert_eq!(out.iterations, 5);
    assert_eq!(out.status.to_string(), "Maximum iterations reached");
    assert_eq!(out.waiting_time.xmin(), 0);
    assert!(out.waiting_time.mean() > 0.0);
}
