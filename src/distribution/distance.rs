//! distribution::distance — distances between two distributions.
//!
//! All metrics align both operands on the union window
//! `[min(A.xmin, B.xmin), max(A.xmax, B.xmax)]` and treat positions outside
//! either window as probability zero. A union window wider than
//! `MAX_WINDOW_LEN` values is reported as `DistError::WindowOverflow`.
use crate::distribution::{
    errors::DistResult,
    fdd::{DiscreteDistribution, window_len},
};
use ndarray::Array1;

/// Jensen–Shannon distance (square root of the divergence, base 2).
///
/// Lies in `[0, 1]` for valid distributions; 0 iff the PMFs coincide.
pub fn jensen_shannon(a: &DiscreteDistribution, b: &DiscreteDistribution) -> DistResult<f64> {
    let (p, q) = aligned(a, b, DiscreteDistribution::pmf_over, "jensen_shannon")?;
    let m = (&p + &q) / 2.0;
    let divergence = 0.5 * kullback_leibler(&p, &m) + 0.5 * kullback_leibler(&q, &m);
    Ok(divergence.max(0.0).sqrt())
}

/// Total variation distance `½ Σ |p_A(x) - p_B(x)|`.
pub fn total_variation(a: &DiscreteDistribution, b: &DiscreteDistribution) -> DistResult<f64> {
    let (p, q) = aligned(a, b, DiscreteDistribution::pmf_over, "total_variation")?;
    Ok((&p - &q).mapv(f64::abs).sum() / 2.0)
}

/// Earth mover's distance `Σ |CDF_A(x) - CDF_B(x)|`.
///
/// # Examples
/// ```rust
/// # use discrete_time::distribution::{distance::earth_movers, factories::deterministic};
/// assert_eq!(earth_movers(&deterministic(2), &deterministic(5)).unwrap(), 3.0);
/// ```
pub fn earth_movers(a: &DiscreteDistribution, b: &DiscreteDistribution) -> DistResult<f64> {
    let (fa, fb) = aligned(a, b, DiscreteDistribution::cdf_over, "earth_movers")?;
    Ok((&fa - &fb).mapv(f64::abs).sum())
}

fn aligned(
    a: &DiscreteDistribution, b: &DiscreteDistribution,
    eval: fn(&DiscreteDistribution, i64, i64) -> Array1<f64>, operator: &'static str,
) -> DistResult<(Array1<f64>, Array1<f64>)> {
    let lo = a.xmin().min(b.xmin());
    let hi = a.xmax().max(b.xmax());
    window_len(lo, hi, operator)?;
    Ok((eval(a, lo, hi), eval(b, lo, hi)))
}

/// `D(P || M)` in bits over the positions where both are positive.
fn kullback_leibler(p: &Array1<f64>, m: &Array1<f64>) -> f64 {
    p.iter()
        .zip(m.iter())
        .filter(|&(&pi, &mi)| pi > 0.0 && mi > 0.0)
        .map(|(&pi, &mi)| pi * (pi / mi).log2())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{
        errors::DistError,
        factories::{bernoulli, deterministic, discrete_uniform},
    };
    use approx::assert_relative_eq;

    #[test]
    fn identical_distributions_have_zero_distance() {
        let a = discrete_uniform(0, 5).unwrap();
        assert_relative_eq!(jensen_shannon(&a, &a).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(total_variation(&a, &a).unwrap(), 0.0);
        assert_relative_eq!(earth_movers(&a, &a).unwrap(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Disjoint supports reach the maximum JSD and TVD.
    //
    // Given
    // -----
    // - DET(0) and DET(3).
    //
    // Expect
    // ------
    // - JSD = 1, TVD = 1, EMD = 3 (mass moved three steps).
    fn disjoint_supports_reach_maximal_distance() {
        // Arrange
        let a = deterministic(0);
        let b = deterministic(3);

        // Act / Assert
        assert_relative_eq!(jensen_shannon(&a, &b).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(total_variation(&a, &b).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(earth_movers(&a, &b).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn partial_overlap_is_symmetric_and_bounded() {
        let a = bernoulli(0.2).unwrap();
        let b = bernoulli(0.6).unwrap();

        let ab = jensen_shannon(&a, &b).unwrap();
        assert!(ab > 0.0 && ab < 1.0);
        assert_relative_eq!(ab, jensen_shannon(&b, &a).unwrap(), epsilon = 1e-12);
        assert_relative_eq!(total_variation(&a, &b).unwrap(), 0.4, epsilon = 1e-12);
        assert_relative_eq!(earth_movers(&a, &b).unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn union_window_beyond_the_cap_is_an_error() {
        let low = deterministic(i64::MIN);
        let high = deterministic(i64::MAX);
        assert_eq!(
            earth_movers(&low, &high).unwrap_err(),
            DistError::WindowOverflow { operator: "earth_movers" }
        );
        assert!(jensen_shannon(&low, &high).is_err());
        assert!(total_variation(&low, &high).is_err());
    }
}
