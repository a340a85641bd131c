//! distribution::trim — numerical-stability trimming.
//!
//! Iterated convolutions grow the support window by the width of the
//! increment at every step while most of the new positions carry
//! negligible mass. The operators here shrink the window from both ends so
//! that long fixed-point iterations stay cheap.
//!
//! - [`trim_zeros`]: strip exact zeros at the ends.
//! - [`trim_below`]: strip end positions whose probability is `<= eps`.
//! - [`trim_cumulative`]: strip end positions while the mass removed from
//!   that side stays `<= eps`, so at most `2·eps` is discarded overall.
//!
//! All three return a new distribution. When no position survives the
//! criterion the input is returned unchanged. With `renormalize` the
//! surviving probabilities are rescaled to sum to one.
use crate::distribution::{
    errors::DistResult,
    fdd::DiscreteDistribution,
    validation::verify_eps,
};
use ndarray::s;

/// Remove leading and trailing exact zeros.
pub fn trim_zeros(a: &DiscreteDistribution, renormalize: bool) -> DiscreteDistribution {
    let first = a.pk().iter().position(|&p| p > 0.0);
    let last = a.pk().iter().rposition(|&p| p > 0.0);
    cut(a, first.zip(last), renormalize)
}

/// Remove leading and trailing positions with probability `<= eps`.
///
/// Interior positions below `eps` are kept.
///
/// # Errors
/// `DistError::InvalidEpsilon` if `eps` is negative or non-finite.
///
/// # Examples
/// ```rust
/// # use discrete_time::distribution::{fdd::DiscreteDistribution, trim::trim_below};
/// let d = DiscreteDistribution::new(&[0, 1, 2, 3], &[1e-20, 0.5, 0.5, 1e-20], "D").unwrap();
/// let t = trim_below(&d, 1e-16, false).unwrap();
/// assert_eq!((t.xmin(), t.xmax()), (1, 2));
/// ```
pub fn trim_below(
    a: &DiscreteDistribution, eps: f64, renormalize: bool,
) -> DistResult<DiscreteDistribution> {
    verify_eps(eps)?;
    let first = a.pk().iter().position(|&p| p > eps);
    let last = a.pk().iter().rposition(|&p| p > eps);
    Ok(cut(a, first.zip(last), renormalize))
}

/// Remove end positions while the cumulative mass removed from each side
/// stays `<= eps`.
///
/// # Errors
/// `DistError::InvalidEpsilon` if `eps` is negative or non-finite.
pub fn trim_cumulative(
    a: &DiscreteDistribution, eps: f64, renormalize: bool,
) -> DistResult<DiscreteDistribution> {
    verify_eps(eps)?;
    let mut acc = 0.0;
    let first = a.pk().iter().position(|&p| {
        acc += p;
        acc > eps
    });
    acc = 0.0;
    let last = a.pk().iter().rposition(|&p| {
        acc += p;
        acc > eps
    });
    let bounds = first.zip(last).filter(|(lo, hi)| lo <= hi);
    Ok(cut(a, bounds, renormalize))
}

/// Keep buffer positions `lo..=hi`; `None` keeps the input unchanged.
fn cut(
    a: &DiscreteDistribution, bounds: Option<(usize, usize)>, renormalize: bool,
) -> DiscreteDistribution {
    let Some((lo, hi)) = bounds else {
        return a.clone();
    };
    let mut pk = a.pk().slice(s![lo..=hi]).to_owned();
    if renormalize {
        let mass = pk.sum();
        if mass > 0.0 {
            pk /= mass;
        }
    }
    DiscreteDistribution::from_window(a.xmin() + lo as i64, pk, a.name())
}
