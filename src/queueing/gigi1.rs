//! queueing::gigi1 — waiting time of the discrete-time GI/GI/1 queue.
//!
//! Builds the Lindley increment `C = B - A` from the interarrival time `A`
//! and service time `B`, checks the stability condition `ρ = E[B]/E[A] < 1`
//! and delegates to [`solve_lindley`]. An unstable queue is rejected before
//! any iteration is attempted.
use crate::{
    distribution::{algebra::convolve_neg, factories::deterministic, fdd::DiscreteDistribution},
    queueing::{
        errors::{QueueError, QueueResult},
        lindley::{LindleyOutcome, solve_lindley},
        options::LindleyOptions,
    },
};
use tracing::{debug, warn};

/// Utilization `ρ = E[B] / E[A]`.
///
/// # Errors
/// [`QueueError::NonPositiveInterarrivalMean`] if `E[A] <= 0`.
pub fn utilization(a: &DiscreteDistribution, b: &DiscreteDistribution) -> QueueResult<f64> {
    let ea = a.mean();
    if !(ea > 0.0) {
        return Err(QueueError::NonPositiveInterarrivalMean { mean: ea });
    }
    Ok(b.mean() / ea)
}

/// Stationary waiting-time distribution of a GI/GI/1 queue.
///
/// Parameters
/// ----------
/// - `a`: interarrival-time distribution.
/// - `b`: service-time distribution.
/// - `w0`: initial waiting time; `None` starts from the point mass at 0.
/// - `opts`: solver options.
///
/// Errors
/// ------
/// - `QueueError::NonPositiveInterarrivalMean` if `E[A] <= 0`.
/// - `QueueError::UnstableQueue` if `ρ >= 1`; no iteration is performed.
/// - `QueueError::Distribution` if `B - A` has no representable window.
/// - Propagates [`solve_lindley`] errors, including invalid options.
///
/// Examples
/// --------
/// ```rust
/// # use discrete_time::distribution::factories::deterministic;
/// # use discrete_time::queueing::{gigi1::gigi1_waiting_time, options::LindleyOptions};
/// let out = gigi1_waiting_time(&deterministic(5), &deterministic(3), None, &LindleyOptions::default())
///     .unwrap();
/// assert_eq!(out.waiting_time.pmf(0), 1.0);
/// ```
pub fn gigi1_waiting_time(
    a: &DiscreteDistribution, b: &DiscreteDistribution, w0: Option<&DiscreteDistribution>,
    opts: &LindleyOptions,
) -> QueueResult<LindleyOutcome> {
    let rho = utilization(a, b)?;
    if rho >= 1.0 {
        warn!(rho, mean_interarrival = a.mean(), mean_service = b.mean(), "GI/GI/1 queue is unstable");
        return Err(QueueError::UnstableQueue { rho });
    }
    debug!(rho, interarrival = %a.name(), service = %b.name(), "solving GI/GI/1 waiting time");

    let c = convolve_neg(b, a)?;
    match w0 {
        Some(w0) => solve_lindley(w0, &c, opts),
        None => solve_lindley(&deterministic(0), &c, opts),
    }
}
