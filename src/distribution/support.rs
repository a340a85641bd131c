//! distribution::support — boundary folding (π) and tail extraction (σ).
//!
//! Purpose
//! -------
//! Reshape the support of a distribution: fold mass below a threshold onto
//! the threshold (`π_m`, the `max(A, m)` operator), extract left/right tails
//! (`σ^m`, `σ_m`), and restrict to the values satisfying a predicate.
//!
//! Key behaviors
//! -------------
//! - [`pi_fold`]: `x'(m) = Σ_{i<=m} x(i)`, values below `m` vanish, values
//!   above `m` are untouched. [`pi_floor_zero`] is the `m = 0` case used by the
//!   Lindley recursion.
//! - [`tail_lt`] / [`tail_geq`]: the parts of the distribution strictly below /
//!   at or above `m`, optionally renormalized.
//! - [`conditional`]: restriction to a predicate-selected subset of values.
//!
//! Invariants & assumptions
//! ------------------------
//! - `pi_fold` preserves total mass except in the `m >= xmax` clamp, which
//!   returns a unit point mass at `m`.
//! - For any `m`, the unnormalized `tail_lt(A, m)` and `tail_geq(A, m)`
//!   partition the mass of `A`.
//!
//! Conventions
//! -----------
//! - Degenerate unnormalized tails are point masses of probability 0 located
//!   at `m`, so the result is still a well-formed window.
//! - Normalized tails with nothing to normalize fail with
//!   [`DistError::TruncationDomain`] instead of dividing by zero.
use crate::distribution::{
    errors::{DistError, DistResult},
    fdd::DiscreteDistribution,
};
use ndarray::{Array1, s};

/// Boundary fold `π_m(A)`: distribution of `max(A, m)`.
///
/// Parameters
/// ----------
/// - `a`: `&DiscreteDistribution`
/// - `m`: `i64` fold point.
///
/// Returns
/// -------
/// - `m <= a.xmin`: an equivalent copy of `a`.
/// - `m >= a.xmax`: a point mass at `m` with probability 1.
/// - Otherwise a distribution on `[m, a.xmax]` with `P(m) = CDF_A(m)`.
///
/// Examples
/// --------
/// ```rust
/// # use discrete_time::distribution::{factories::discrete_uniform, support::pi_fold};
/// let folded = pi_fold(&discrete_uniform(0, 4).unwrap(), 3);
/// assert_eq!((folded.xmin(), folded.xmax()), (3, 4));
/// assert!((folded.pmf(3) - 0.8).abs() < 1e-12);
/// ```
pub fn pi_fold(a: &DiscreteDistribution, m: i64) -> DiscreteDistribution {
    let name = format!("pi_{m}({})", a.name());
    if m <= a.xmin() {
        return a.clone().with_name(name);
    }
    if m >= a.xmax() {
        return DiscreteDistribution::point(m, 1.0, name);
    }
    let k = (m - a.xmin()) as usize;
    let mut pk = a.pk().slice(s![k..]).to_owned();
    pk[0] = a.pk().slice(s![..=k]).sum();
    DiscreteDistribution::from_window(m, pk, name)
}

/// `π_0(A)`: distribution of `max(A, 0)`.
pub fn pi_floor_zero(a: &DiscreteDistribution) -> DiscreteDistribution {
    pi_fold(a, 0)
}

/// Left tail `σ^m(A)`: the values strictly below `m`.
///
/// Returns
/// -------
/// - `m > a.xmax`: the whole distribution (renormalized if requested).
/// - `m <= a.xmin`, unnormalized: point mass of probability 0 at `m`.
/// - Otherwise the restriction of `a` to `[a.xmin, m - 1]`.
///
/// Errors
/// ------
/// - `DistError::TruncationDomain` if `normalized` is set and the selected
///   region carries no mass (including `m <= a.xmin`).
pub fn tail_lt(a: &DiscreteDistribution, m: i64, normalized: bool) -> DistResult<DiscreteDistribution> {
    const OP: &str = "tail_lt";
    let name = format!("sigma^{m}({})", a.name());
    if m <= a.xmin() {
        if normalized {
            return Err(DistError::TruncationDomain { operator: OP, m });
        }
        return Ok(DiscreteDistribution::point(m, 0.0, name));
    }
    let hi = m.min(a.xmax().saturating_add(1));
    let pk = a.pk().slice(s![..((hi - a.xmin()) as usize)]).to_owned();
    finish_tail(DiscreteDistribution::from_window(a.xmin(), pk, name), normalized, OP, m)
}

/// Right tail `σ_m(A)`: the values at or above `m`.
///
/// Mirror image of [`tail_lt`]: `m <= a.xmin` returns the whole distribution,
/// `m > a.xmax` yields a zero point mass at `m` (or `TruncationDomain` when
/// normalized).
pub fn tail_geq(a: &DiscreteDistribution, m: i64, normalized: bool) -> DistResult<DiscreteDistribution> {
    const OP: &str = "tail_geq";
    let name = format!("sigma_{m}({})", a.name());
    if m > a.xmax() {
        if normalized {
            return Err(DistError::TruncationDomain { operator: OP, m });
        }
        return Ok(DiscreteDistribution::point(m, 0.0, name));
    }
    let lo = m.max(a.xmin());
    let pk = a.pk().slice(s![((lo - a.xmin()) as usize)..]).to_owned();
    finish_tail(DiscreteDistribution::from_window(lo, pk, name), normalized, OP, m)
}

/// Restriction of `a` to the values for which `predicate` holds.
///
/// The result spans the first to the last selected value; unselected values
/// inside that window get probability 0.
///
/// Errors
/// ------
/// - `DistError::EmptySelection` if the predicate matches no value.
/// - `DistError::TruncationDomain` if `normalized` is set and the selected
///   values carry no mass.
///
/// Examples
/// --------
/// ```rust
/// # use discrete_time::distribution::{factories::discrete_uniform, support::conditional};
/// let even = conditional(&discrete_uniform(0, 5).unwrap(), |x| x % 2 == 0, true).unwrap();
/// assert_eq!((even.xmin(), even.xmax()), (0, 4));
/// assert_eq!(even.pmf(1), 0.0);
/// ```
pub fn conditional(
    a: &DiscreteDistribution, predicate: impl Fn(i64) -> bool, normalized: bool,
) -> DistResult<DiscreteDistribution> {
    let selected: Vec<bool> = a.iter().map(|(x, _)| predicate(x)).collect();
    let first = selected.iter().position(|&s| s).ok_or(DistError::EmptySelection)?;
    let last = selected.iter().rposition(|&s| s).ok_or(DistError::EmptySelection)?;
    let pk: Array1<f64> = (first..=last)
        .map(|i| if selected[i] { a.pk()[i] } else { 0.0 })
        .collect();
    let xmin = a.xmin() + first as i64;
    let out = DiscreteDistribution::from_window(xmin, pk, format!("{}|cond", a.name()));
    finish_tail(out, normalized, "conditional", xmin)
}

// ---- Helpers ----

fn finish_tail(
    d: DiscreteDistribution, normalized: bool, operator: &'static str, m: i64,
) -> DistResult<DiscreteDistribution> {
    if !normalized {
        return Ok(d);
    }
    d.normalized().map_err(|_| DistError::TruncationDomain { operator, m })
}
