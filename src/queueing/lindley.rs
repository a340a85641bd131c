//! queueing::lindley — fixed-point solver for the discrete-time Lindley equation.
//!
//! Purpose
//! -------
//! Compute the stationary waiting-time distribution `W` of a single-server
//! queue from the increment `C = B - A` (service minus interarrival time) by
//! iterating the Lindley recursion
//!
//! ```text
//! W_{n+1} = π₀(W_n + C) = max(W_n + C, 0)
//! ```
//!
//! until the mean stops changing.
//!
//! Key behaviors
//! -------------
//! - One step is `convolve` + `pi_floor_zero` + `trim_below(eps_prob)`
//!   without renormalization; the trim keeps the window from growing by the
//!   width of `C` every iteration.
//! - Convergence is tested on consecutive means with
//!   [`mean_equal`](crate::distribution::algebra::mean_equal) and
//!   `LindleyOptions::tol_mean`.
//! - A configured `max_iter` turns a non-converging run into a
//!   [`LindleyStatus::MaxIterReached`] outcome carrying the last iterate.
//!
//! Invariants & assumptions
//! ------------------------
//! - `W0` and `C` carry unit mass and the options pass
//!   `LindleyOptions::validate`; both are checked before the first step, so a
//!   NaN tolerance cannot turn the loop into an endless run.
//! - Convergence in the stable case (`E[C] < 0`) is a property of the
//!   recursion, not checked here; the GI/GI/1 facade enforces `ρ < 1`.
//!
//! Logging
//! -------
//! - `trace!` per iteration, `debug!` on convergence, `warn!` when the cap
//!   is reached. No subscriber is installed by the library.
use crate::{
    distribution::{
        algebra::{convolve, mean_equal},
        fdd::DiscreteDistribution,
        support::pi_floor_zero,
        trim::trim_below,
    },
    queueing::{
        errors::QueueResult,
        options::LindleyOptions,
        validation::validate_unit_mass,
    },
};
use tracing::{debug, trace, warn};

/// How a Lindley iteration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LindleyStatus {
    /// Consecutive means agreed within `tol_mean`.
    Converged,
    /// `max_iter` steps were taken without meeting the tolerance.
    MaxIterReached,
}

impl std::fmt::Display for LindleyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LindleyStatus::Converged => write!(f, "Converged"),
            LindleyStatus::MaxIterReached => write!(f, "Maximum iterations reached"),
        }
    }
}

/// Result of [`solve_lindley`].
///
/// - `waiting_time`: last iterate `W_n` (the stationary distribution when
///   converged).
/// - `iterations`: number of recursion steps performed.
/// - `status`: termination reason.
/// - `mean_delta`: `|E[W_n] - E[W_{n-1}]|` at termination.
#[derive(Debug, Clone, PartialEq)]
pub struct LindleyOutcome {
    pub waiting_time: DiscreteDistribution,
    pub iterations: usize,
    pub status: LindleyStatus,
    pub mean_delta: f64,
}

impl LindleyOutcome {
    pub fn converged(&self) -> bool {
        self.status == LindleyStatus::Converged
    }
}

/// Iterate `W ← trim(π₀(W + C))` from `w0` until the mean converges.
///
/// Parameters
/// ----------
/// - `w0`: `&DiscreteDistribution`
///   Initial waiting time; usually the point mass at 0.
/// - `c`: `&DiscreteDistribution`
///   Increment `B - A`.
/// - `opts`: `&LindleyOptions`
///   Trimming threshold, mean tolerance and iteration cap.
///
/// Returns
/// -------
/// `LindleyOutcome` with the last iterate; `status` tells whether the
/// tolerance was met or the cap was hit.
///
/// Errors
/// ------
/// - `QueueError::InvalidEpsProb`, `InvalidTolMean` or `InvalidMaxIter` if
///   `opts` fails [`LindleyOptions::validate`]; checked before iterating.
/// - `QueueError::InvalidDistribution` if `w0` or `c` lacks unit mass.
/// - `QueueError::Distribution` if a step fails (window overflow).
///
/// Examples
/// --------
/// ```rust
/// # use discrete_time::distribution::factories::deterministic;
/// # use discrete_time::queueing::{lindley::solve_lindley, options::LindleyOptions};
/// let out = solve_lindley(&deterministic(0), &deterministic(-2), &LindleyOptions::default()).unwrap();
/// assert!(out.converged());
/// assert_eq!(out.iterations, 1);
/// assert_eq!(out.waiting_time.pmf(0), 1.0);
/// ```
pub fn solve_lindley(
    w0: &DiscreteDistribution, c: &DiscreteDistribution, opts: &LindleyOptions,
) -> QueueResult<LindleyOutcome> {
    opts.validate()?;
    validate_unit_mass(w0, "initial waiting time")?;
    validate_unit_mass(c, "increment")?;

    let mut current = w0.clone();
    let mut iterations = 0_usize;
    loop {
        let next = trim_below(&pi_floor_zero(&convolve(&current, c)?), opts.eps_prob, false)?;
        iterations += 1;
        let mean_delta = (next.mean() - current.mean()).abs();
        trace!(
            iteration = iterations,
            mean = next.mean(),
            mean_delta,
            xmin = next.xmin(),
            xmax = next.xmax(),
            "lindley step"
        );

        if mean_equal(&next, &current, opts.tol_mean) {
            debug!(iterations, mean = next.mean(), mean_delta, "lindley iteration converged");
            return Ok(outcome(next, iterations, LindleyStatus::Converged, mean_delta));
        }
        if opts.max_iter.is_some_and(|cap| iterations >= cap) {
            warn!(
                iterations,
                mean = next.mean(),
                mean_delta,
                tol_mean = opts.tol_mean,
                "lindley iteration stopped at max_iter before converging"
            );
            return Ok(outcome(next, iterations, LindleyStatus::MaxIterReached, mean_delta));
        }
        current = next;
    }
}

fn outcome(
    w: DiscreteDistribution, iterations: usize, status: LindleyStatus, mean_delta: f64,
) -> LindleyOutcome {
    LindleyOutcome { waiting_time: w.with_name("W"), iterations, status, mean_delta }
}
