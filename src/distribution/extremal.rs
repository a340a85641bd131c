//! distribution::extremal — maximum and minimum of independent random variables.
//!
//! Purpose
//! -------
//! Compute the distributions of `max(A_1, …, A_n)` and `min(A_1, …, A_n)` for
//! independent operands, and the mixed `max(A, m)` form with an integer.
//!
//! Key behaviors
//! -------------
//! - Every operand's CDF is evaluated over the union window
//!   `[min xmin_i, max xmax_i]`.
//! - `max`: `CDF = Π CDF_i`. `min`: `CDF = 1 - Π (1 - CDF_i)`.
//! - The PMF is recovered by finite differencing and clipped to `[0, 1]` to
//!   absorb round-off (slightly negative differences, products above one).
//! - [`max_with`] is the π fold; [`max_pair`] dispatches on an [`Operand`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Operands are independent; no joint structure is modelled.
//! - For valid operands `E[max(A,B)] + E[min(A,B)] == E[A] + E[B]`.
use crate::distribution::{
    algebra::Operand,
    errors::{DistError, DistResult},
    fdd::{DiscreteDistribution, window_len},
    support::pi_fold,
};
use ndarray::Array1;

/// Distribution of the maximum of independent random variables.
///
/// # Errors
/// - `DistError::EmptyInput` if `dists` is empty.
/// - `DistError::WindowOverflow` if the union window exceeds the cap.
///
/// # Examples
/// ```rust
/// # use discrete_time::distribution::{extremal::max_of, factories::discrete_uniform};
/// let a = discrete_uniform(0, 1).unwrap();
/// let m = max_of(&[&a, &a]).unwrap();
/// assert!((m.pmf(1) - 0.75).abs() < 1e-12);
/// ```
pub fn max_of(dists: &[&DiscreteDistribution]) -> DistResult<DiscreteDistribution> {
    if dists.is_empty() {
        return Err(DistError::EmptyInput { operator: "max_of" });
    }
    extremal(dists, "max_of", cdf_product)
}

/// Distribution of the minimum of independent random variables.
///
/// # Errors
/// Same as [`max_of`].
pub fn min_of(dists: &[&DiscreteDistribution]) -> DistResult<DiscreteDistribution> {
    if dists.is_empty() {
        return Err(DistError::EmptyInput { operator: "min_of" });
    }
    extremal(dists, "min_of", cdf_of_minimum)
}

/// `max(A, m)` for an integer `m`; identical to [`pi_fold`].
pub fn max_with(a: &DiscreteDistribution, m: i64) -> DiscreteDistribution {
    pi_fold(a, m)
}

/// `max(A, rhs)` where `rhs` is a distribution or an integer.
///
/// # Errors
/// `DistError::WindowOverflow` if the union window of two distributions
/// exceeds the cap; the integer form never fails.
pub fn max_pair<'a>(
    a: &DiscreteDistribution, rhs: impl Into<Operand<'a>>,
) -> DistResult<DiscreteDistribution> {
    match rhs.into() {
        Operand::Dist(b) => extremal(&[a, b], "max_pair", cdf_product),
        Operand::Scalar(m) => Ok(max_with(a, m)),
    }
}

/// `Π CDF_i` over the union window.
fn cdf_product(cdfs: &[Array1<f64>], len: usize) -> Array1<f64> {
    cdfs.iter().fold(Array1::<f64>::ones(len), |acc, cdf| acc * cdf)
}

/// `1 - Π (1 - CDF_i)` over the union window.
fn cdf_of_minimum(cdfs: &[Array1<f64>], len: usize) -> Array1<f64> {
    let survival = cdfs.iter().fold(Array1::<f64>::ones(len), |acc, cdf| acc * &cdf.mapv(|c| 1.0 - c));
    survival.mapv(|s| 1.0 - s)
}

/// Shared union-window / CDF-combination / differencing pipeline.
///
/// `dists` must be non-empty.
fn extremal(
    dists: &[&DiscreteDistribution], operator: &'static str,
    combine: fn(&[Array1<f64>], usize) -> Array1<f64>,
) -> DistResult<DiscreteDistribution> {
    let lo = dists.iter().map(|d| d.xmin()).fold(i64::MAX, i64::min);
    let hi = dists.iter().map(|d| d.xmax()).fold(i64::MIN, i64::max);
    let len = window_len(lo, hi, operator)?;
    let cdfs: Vec<Array1<f64>> = dists.iter().map(|d| d.cdf_over(lo, hi)).collect();
    let cdf = combine(&cdfs, len);

    let mut prev = 0.0;
    let pk = cdf.mapv(|c| {
        let p = (c - prev).clamp(0.0, 1.0);
        prev = c;
        p
    });
    let label = if operator == "min_of" { "min" } else { "max" };
    let names: Vec<&str> = dists.iter().map(|d| d.name()).collect();
    Ok(DiscreteDistribution::from_window(lo, pk, format!("{label}({})", names.join(","))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::factories::{deterministic, discrete_uniform};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - max/min of two and three operands with overlapping and disjoint windows.
    // - The mean identity E[max] + E[min] = E[A] + E[B].
    // - Operand dispatch of `max_pair` and the empty-input error.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Max and min of two overlapping uniforms satisfy the mean identity.
    //
    // Given
    // -----
    // - A = DU(0, 6), B = DU(3, 10).
    //
    // Expect
    // ------
    // - Both results are valid and E[max] + E[min] = E[A] + E[B].
    fn max_and_min_satisfy_mean_identity() {
        // Arrange
        let a = discrete_uniform(0, 6).unwrap();
        let b = discrete_uniform(3, 10).unwrap();

        // Act
        let mx = max_of(&[&a, &b]).unwrap();
        let mn = min_of(&[&a, &b]).unwrap();

        // Assert
        assert!(mx.is_valid());
        assert!(mn.is_valid());
        assert_relative_eq!(mx.mean() + mn.mean(), a.mean() + b.mean(), epsilon = 1e-10);
        assert_eq!((mx.xmin(), mx.xmax()), (0, 10));
        assert_abs_diff_eq!(mx.pmf(2), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mn.pmf(8), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn max_of_disjoint_windows_is_the_upper_operand() {
        let low = discrete_uniform(0, 2).unwrap();
        let high = discrete_uniform(5, 7).unwrap();

        let mx = max_of(&[&low, &high]).unwrap();
        let mn = min_of(&[&low, &high]).unwrap();

        for x in 5..=7 {
            assert_relative_eq!(mx.pmf(x), 1.0 / 3.0, epsilon = 1e-12);
        }
        for x in 0..=2 {
            assert_relative_eq!(mn.pmf(x), 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn max_of_three_deterministic_values() {
        let (a, b, c) = (deterministic(1), deterministic(4), deterministic(2));
        let mx = max_of(&[&a, &b, &c]).unwrap();
        let mn = min_of(&[&a, &b, &c]).unwrap();
        assert_relative_eq!(mx.pmf(4), 1.0);
        assert_relative_eq!(mn.pmf(1), 1.0);
    }

    #[test]
    fn max_pair_dispatches_on_operand() {
        let a = discrete_uniform(0, 4).unwrap();

        let with_scalar = max_pair(&a, 3_i64).unwrap();
        assert_relative_eq!(with_scalar.pmf(3), 0.8, epsilon = 1e-12);

        let b = deterministic(3);
        let with_dist = max_pair(&a, &b).unwrap();
        assert_relative_eq!(with_dist.pmf(3), 0.8, epsilon = 1e-12);
        assert_relative_eq!(with_dist.pmf(4), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(max_of(&[]).unwrap_err(), DistError::EmptyInput { operator: "max_of" });
        assert_eq!(min_of(&[]).unwrap_err(), DistError::EmptyInput { operator: "min_of" });
    }

    #[test]
    fn far_apart_operands_overflow_the_union_window() {
        let low = deterministic(i64::MIN);
        let high = deterministic(i64::MAX);

        assert_eq!(
            max_of(&[&low, &high]).unwrap_err(),
            DistError::WindowOverflow { operator: "max_of" }
        );
        assert_eq!(
            min_of(&[&low, &high]).unwrap_err(),
            DistError::WindowOverflow { operator: "min_of" }
        );
        assert_eq!(
            max_pair(&low, &high).unwrap_err(),
            DistError::WindowOverflow { operator: "max_pair" }
        );
        assert_eq!(max_pair(&low, i64::MAX).unwrap().pmf(i64::MAX), 1.0);
    }
}
