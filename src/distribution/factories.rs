//! distribution::factories — named discrete distributions.
//!
//! Purpose
//! -------
//! Closed-form parameter → PMF conversions for the distributions commonly used
//! as interarrival and service times in discrete-time queueing models. The
//! algebra never inspects how a distribution was produced; factories are
//! conveniences on top of [`DiscreteDistribution::new`].
//!
//! Key behaviors
//! -------------
//! - Finite families (`bernoulli`, `binomial`, `deterministic`,
//!   `discrete_uniform`, `mixture`) are exact.
//! - Infinite-support families (`poisson`, `negative_binomial`, `geometric`)
//!   are evaluated with `statrs` and cut at the first `k` whose survival
//!   function `P(X > k)` is `<= eps` (the cut point is kept), then
//!   renormalized to unit mass.
//!
//! Conventions
//! -----------
//! - Parameter violations surface as [`DistError::InvalidParameter`] tagged
//!   with the family name; `statrs` construction errors are mapped into the
//!   same variant.
//! - Supports that would leave the `i64` range or need more than
//!   `MAX_WINDOW_LEN` values (huge `n`, huge means, extreme shifts) fail with
//!   [`DistError::WindowOverflow`].
//! - [`DEFAULT_TAIL_EPS`] is the usual right-tail cut.
use crate::distribution::{
    errors::{DistError, DistResult},
    fdd::{DiscreteDistribution, MAX_WINDOW_LEN, checked_bound, window_len},
    validation::{MASS_TOLERANCE, verify_tail_cut, verify_unit_probability},
};
use ndarray::Array1;
use statrs::distribution::{
    Binomial, Discrete, DiscreteCDF, Geometric, NegativeBinomial, Poisson,
};

/// Default right-tail cut for infinite-support families.
pub const DEFAULT_TAIL_EPS: f64 = 1e-8;

/// Bernoulli trial: `P(1) = p`, `P(0) = 1 - p`.
pub fn bernoulli(p: f64) -> DistResult<DiscreteDistribution> {
    verify_unit_probability("Bernoulli", p)?;
    DiscreteDistribution::new(&[0, 1], &[1.0 - p, p], format!("BER({p:.2})"))
}

/// Number of successes in `n` Bernoulli trials with success probability `p`.
pub fn binomial(n: u64, p: f64) -> DistResult<DiscreteDistribution> {
    const FAMILY: &str = "Binomial";
    verify_unit_probability(FAMILY, p)?;
    let rv = Binomial::new(p, n).map_err(|e| statrs_error(FAMILY, e))?;
    let n_max = i64::try_from(n).map_err(|_| DistError::WindowOverflow { operator: "binomial" })?;
    window_len(0, n_max, "binomial")?;
    let pk: Array1<f64> = (0..=n).map(|k| rv.pmf(k)).collect();
    Ok(DiscreteDistribution::from_window(0, pk, format!("BINOM({n}, {p:.2})")))
}

/// Poisson distribution with the given mean, right tail cut at `eps`.
///
/// A mean of zero yields the point mass at 0.
///
/// # Errors
/// `DistError::InvalidParameter` for a negative or non-finite mean or an
/// `eps` outside `(0, 1)`.
pub fn poisson(mean: f64, eps: f64) -> DistResult<DiscreteDistribution> {
    const FAMILY: &str = "Poisson";
    verify_tail_cut(FAMILY, eps)?;
    if !mean.is_finite() || mean < 0.0 {
        return Err(DistError::InvalidParameter {
            family: FAMILY,
            reason: format!("mean value {mean} out of range"),
        });
    }
    let name = format!("POIS({mean:.2})");
    if mean == 0.0 {
        return Ok(DiscreteDistribution::point(0, 1.0, name));
    }
    let rv = Poisson::new(mean).map_err(|e| statrs_error(FAMILY, e))?;
    cut_right_tail(0, 0, |k| rv.pmf(k), |k| rv.sf(k), eps, name)
}

/// Negative binomial distribution parameterized by mean and coefficient of
/// variation.
///
/// With `z = cv²·mean - 1` the number-of-failures parameters are
/// `r = mean / z` and `p = 1 - z / (cv²·mean)`.
///
/// # Errors
/// `DistError::InvalidParameter` unless `mean > 0` and `mean · cv² > 1`.
///
/// # Examples
/// ```rust
/// # use discrete_time::distribution::factories::{negative_binomial, DEFAULT_TAIL_EPS};
/// let d = negative_binomial(4.0, 0.8, DEFAULT_TAIL_EPS).unwrap();
/// assert!((d.mean() - 4.0).abs() < 1e-4);
/// assert!(negative_binomial(1.0, 0.5, DEFAULT_TAIL_EPS).is_err());
/// ```
pub fn negative_binomial(mean: f64, cv: f64, eps: f64) -> DistResult<DiscreteDistribution> {
    const FAMILY: &str = "NegativeBinomial";
    verify_tail_cut(FAMILY, eps)?;
    let spread = cv * cv * mean;
    if !(mean > 0.0 && spread.is_finite() && spread > 1.0) {
        return Err(DistError::InvalidParameter {
            family: FAMILY,
            reason: format!("mean * cv^2 must exceed 1; got {spread}"),
        });
    }
    let z = spread - 1.0;
    let r = mean / z;
    let p = 1.0 - z / spread;
    let rv = NegativeBinomial::new(r, p).map_err(|e| statrs_error(FAMILY, e))?;
    cut_right_tail(0, 0, |k| rv.pmf(k), |k| rv.sf(k), eps, format!("NEGBIN({mean:.2},{cv:.2})"))
}

/// Geometric distribution on `{shift, shift + 1, …}` with the given mean.
///
/// The success probability is `p = 1 / (mean + 1 - shift)`.
///
/// # Errors
/// `DistError::InvalidParameter` unless `mean >= shift`.
pub fn geometric(mean: f64, shift: i64, eps: f64) -> DistResult<DiscreteDistribution> {
    let denom = mean + 1.0 - shift as f64;
    if !(denom.is_finite() && denom >= 1.0) {
        return Err(DistError::InvalidParameter {
            family: "Geometric",
            reason: format!("mean {mean} must be >= shift {shift}"),
        });
    }
    geometric_with_p(1.0 / denom, shift, eps)
}

/// Geometric distribution on `{shift, shift + 1, …}` with success
/// probability `p ∈ (0, 1]`.
pub fn geometric_with_p(p: f64, shift: i64, eps: f64) -> DistResult<DiscreteDistribution> {
    const FAMILY: &str = "Geometric";
    verify_tail_cut(FAMILY, eps)?;
    verify_unit_probability(FAMILY, p)?;
    let rv = Geometric::new(p).map_err(|e| statrs_error(FAMILY, e))?;
    // statrs counts trials (support k >= 1); value = k + shift - 1.
    cut_right_tail(shift, 1, |k| rv.pmf(k), |k| rv.sf(k), eps, format!("GEOM_{shift}({p:.2})"))
}

/// Point mass at `x`.
pub fn deterministic(x: i64) -> DiscreteDistribution {
    DiscreteDistribution::point(x, 1.0, format!("DET({x})"))
}

/// Uniform distribution on the integers `a..=b`.
///
/// # Errors
/// `DistError::InvalidParameter` if `a > b`.
pub fn discrete_uniform(a: i64, b: i64) -> DistResult<DiscreteDistribution> {
    if a > b {
        return Err(DistError::InvalidParameter {
            family: "DiscreteUniform",
            reason: format!("lower bound {a} exceeds upper bound {b}"),
        });
    }
    let n = window_len(a, b, "discrete_uniform")?;
    Ok(DiscreteDistribution::from_window(
        a,
        Array1::from_elem(n, 1.0 / n as f64),
        format!("DU({a},{b})"),
    ))
}

/// Mixture: with probability `w_i` the value is drawn from `components[i]`.
///
/// `weights = None` means equal weights.
///
/// # Errors
/// - `DistError::EmptyInput` if `components` is empty.
/// - `DistError::InvalidParameter` if the weights have the wrong length, a
///   negative or non-finite entry, or do not sum to one.
pub fn mixture(
    components: &[&DiscreteDistribution], weights: Option<&[f64]>,
) -> DistResult<DiscreteDistribution> {
    const FAMILY: &str = "Mixture";
    if components.is_empty() {
        return Err(DistError::EmptyInput { operator: "mixture" });
    }
    let weights: Vec<f64> = match weights {
        Some(w) => w.to_vec(),
        None => vec![1.0 / components.len() as f64; components.len()],
    };
    if weights.len() != components.len() {
        return Err(DistError::InvalidParameter {
            family: FAMILY,
            reason: format!("{} weights for {} components", weights.len(), components.len()),
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(DistError::InvalidParameter {
            family: FAMILY,
            reason: "weights must be finite and >= 0".to_string(),
        });
    }
    let total: f64 = weights.iter().sum();
    if (total - 1.0).abs() > MASS_TOLERANCE {
        return Err(DistError::InvalidParameter {
            family: FAMILY,
            reason: format!("weights sum to {total}, expected 1"),
        });
    }

    let lo = components.iter().map(|d| d.xmin()).fold(i64::MAX, i64::min);
    let hi = components.iter().map(|d| d.xmax()).fold(i64::MIN, i64::max);
    let pk = components
        .iter()
        .zip(&weights)
        .fold(Array1::<f64>::zeros(window_len(lo, hi, "mixture")?), |acc, (d, &w)| {
            acc + d.pmf_over(lo, hi) * w
        });
    Ok(DiscreteDistribution::from_window(lo, pk, "MIX"))
}

// ---- Helpers ----

/// Evaluate `pmf` from `k = first` until `sf(k) <= eps` (inclusive), place
/// the values at `shift + (k - first)` and renormalize.
///
/// Stops with `WindowOverflow` once the support would pass
/// [`MAX_WINDOW_LEN`] values or `i64::MAX`.
fn cut_right_tail(
    shift: i64, first: u64, pmf: impl Fn(u64) -> f64, sf: impl Fn(u64) -> f64, eps: f64,
    name: String,
) -> DistResult<DiscreteDistribution> {
    const OP: &str = "right-tail cut";
    let mut probs = Vec::new();
    let mut k = first;
    loop {
        if probs.len() == MAX_WINDOW_LEN {
            return Err(DistError::WindowOverflow { operator: OP });
        }
        checked_bound(shift.checked_add(probs.len() as i64), OP)?;
        probs.push(pmf(k));
        let tail = sf(k);
        if tail <= eps || !tail.is_finite() {
            break;
        }
        k += 1;
    }
    let mut pk = Array1::from(probs);
    let mass = pk.sum();
    if mass > 0.0 {
        pk /= mass;
    }
    Ok(DiscreteDistribution::from_window(shift, pk, name))
}

fn statrs_error(family: &'static str, err: impl std::fmt::Display) -> DistError {
    DistError::InvalidParameter { family, reason: err.to_string() }
}
