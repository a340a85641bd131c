//! distribution::algebra — arithmetic on independent discrete random variables.
//!
//! Purpose
//! -------
//! Implement the distribution algebra: sums and differences of independent
//! random variables (discrete convolution / cross-correlation), integer shift
//! and scale, negation, absolute value, and mean-based ordering.
//!
//! Key behaviors
//! -------------
//! - [`convolve`]: PMF of `A + B` on `[A.xmin + B.xmin, A.xmax + B.xmax]`.
//! - [`convolve_neg`]: PMF of `A - B` on `[A.xmin - B.xmax, A.xmax - B.xmin]`.
//! - [`shift`], [`scale`], [`negate`], [`absolute`]: re-indexing operators
//!   that rebuild the window through the scatter constructor.
//! - [`add`] / [`sub`]: explicit dispatch on an [`Operand`] that is either a
//!   distribution or an integer scalar.
//! - `mean_*` comparisons: ordering and tolerance-based equality on first
//!   moments only.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are independent random variables; no joint structure is modelled.
//! - The length of every convolution result equals the size of its window
//!   exactly, so window arithmetic and buffer arithmetic never disagree.
//! - All operators return new values and never mutate their inputs.
//! - Window bounds are computed with checked `i64` arithmetic; results that
//!   would leave the `i64` range or exceed `MAX_WINDOW_LEN` values fail with
//!   `DistError::WindowOverflow` before any buffer is allocated.
//!
//! Conventions
//! -----------
//! - [`scale`] inserts structural zeros for integers skipped by the
//!   multiplication (`2·X` has zero mass on odd values). This is intended.
//! - Mean-based equality compares `|E[A] - E[B]| <= eps` and nothing else. It
//!   is the convergence test of the Lindley solver and must stay a first
//!   moment comparison.
//! - Result labels follow the arithmetic (`"A+B"`, `"A-B"`, `"-A"`, `"A*k"`).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the documented scenarios (DU(0,10)+DU(0,10), DET(3)+DET(4),
//!   window arithmetic of `convolve_neg`, structural zeros in `scale`,
//!   overflow at the edge of the `i64` range).
//! - Property tests check commutativity, window bounds and mass preservation
//!   of `convolve` on random PMFs, together with the fold, tail and extremal
//!   identities that are stated for every distribution.
use crate::distribution::{
    errors::{DistError, DistResult},
    fdd::{DiscreteDistribution, checked_bound, window_len},
};
use ndarray::{Array1, ArrayView1};

/// Default tolerance for mean-based equality.
pub const DEFAULT_MEAN_EQ_EPS: f64 = 1e-6;

/// Right-hand side of a mixed distribution/scalar operation.
///
/// Variants
/// --------
/// - `Dist`: an independent random variable.
/// - `Scalar`: a deterministic integer offset.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Dist(&'a DiscreteDistribution),
    Scalar(i64),
}

impl<'a> From<&'a DiscreteDistribution> for Operand<'a> {
    fn from(d: &'a DiscreteDistribution) -> Self {
        Operand::Dist(d)
    }
}

impl From<i64> for Operand<'_> {
    fn from(k: i64) -> Self {
        Operand::Scalar(k)
    }
}

/// PMF of `A + B` for independent `A`, `B`.
///
/// Parameters
/// ----------
/// - `a`, `b`: `&DiscreteDistribution`
///   Operands; neither is modified.
///
/// Returns
/// -------
/// `DiscreteDistribution` on `[a.xmin + b.xmin, a.xmax + b.xmax]` whose
/// buffer is the full discrete convolution of `a.pk` and `b.pk`.
///
/// Errors
/// ------
/// `DistError::WindowOverflow` if the result window is not representable.
///
/// Notes
/// -----
/// - Cost is `O(|a| · |b|)`; the Lindley solver keeps windows small through
///   trimming.
///
/// Examples
/// --------
/// ```rust
/// # use discrete_time::distribution::{algebra::convolve, factories::deterministic};
/// let seven = convolve(&deterministic(3), &deterministic(4)).unwrap();
/// assert_eq!((seven.xmin(), seven.xmax()), (7, 7));
/// assert_eq!(seven.pmf(7), 1.0);
/// ```
pub fn convolve(
    a: &DiscreteDistribution, b: &DiscreteDistribution,
) -> DistResult<DiscreteDistribution> {
    const OP: &str = "convolve";
    let lo = checked_bound(a.xmin().checked_add(b.xmin()), OP)?;
    let hi = checked_bound(a.xmax().checked_add(b.xmax()), OP)?;
    window_len(lo, hi, OP)?;
    let pk = full_convolution(a.pk().view(), b.pk().view());
    Ok(DiscreteDistribution::from_window(lo, pk, format!("{}+{}", a.name(), b.name())))
}

/// PMF of `A - B` for independent `A`, `B`.
///
/// The buffer is the convolution of `a.pk` with the reversed `b.pk`; the
/// window is `[a.xmin - b.xmax, a.xmax - b.xmin]`.
///
/// # Errors
/// `DistError::WindowOverflow` if the result window is not representable.
pub fn convolve_neg(
    a: &DiscreteDistribution, b: &DiscreteDistribution,
) -> DistResult<DiscreteDistribution> {
    const OP: &str = "convolve_neg";
    let lo = checked_bound(a.xmin().checked_sub(b.xmax()), OP)?;
    let hi = checked_bound(a.xmax().checked_sub(b.xmin()), OP)?;
    window_len(lo, hi, OP)?;
    let reversed = b.pk().slice(ndarray::s![..;-1]);
    let pk = full_convolution(a.pk().view(), reversed);
    Ok(DiscreteDistribution::from_window(lo, pk, format!("{}-{}", a.name(), b.name())))
}

/// PMF of `A + k`: the window moves by `k`, probabilities are unchanged.
///
/// # Errors
/// `DistError::WindowOverflow` if `a.xmax + k` leaves the `i64` range.
pub fn shift(a: &DiscreteDistribution, k: i64) -> DistResult<DiscreteDistribution> {
    const OP: &str = "shift";
    let lo = checked_bound(a.xmin().checked_add(k), OP)?;
    checked_bound(a.xmax().checked_add(k), OP)?;
    let name = if k < 0 { format!("{}{k}", a.name()) } else { format!("{}+{k}", a.name()) };
    Ok(DiscreteDistribution::from_window(lo, a.pk().clone(), name))
}

/// PMF of `A · k` for an integer `k`.
///
/// Every support value is multiplied by `k` and the result is re-windowed to
/// a contiguous range; integers skipped by the multiplication receive
/// probability zero. `k == 0` collapses all mass onto the point 0, and a
/// negative `k` reverses the order through the scatter constructor.
///
/// # Errors
/// `DistError::WindowOverflow` if a product overflows or the stretched
/// window exceeds `MAX_WINDOW_LEN` values.
pub fn scale(a: &DiscreteDistribution, k: i64) -> DistResult<DiscreteDistribution> {
    remap(a, |x| x.checked_mul(k), "scale", format!("{}*{k}", a.name()))
}

/// PMF of `-A`.
///
/// # Errors
/// `DistError::WindowOverflow` if the window contains `i64::MIN`.
pub fn negate(a: &DiscreteDistribution) -> DistResult<DiscreteDistribution> {
    remap(a, i64::checked_neg, "negate", format!("-{}", a.name()))
}

/// PMF of `|A|`; the masses of `x` and `-x` are summed.
///
/// # Errors
/// `DistError::WindowOverflow` if the window contains `i64::MIN`.
pub fn absolute(a: &DiscreteDistribution) -> DistResult<DiscreteDistribution> {
    remap(a, i64::checked_abs, "absolute", format!("|{}|", a.name()))
}

/// `A + rhs`, where `rhs` is a distribution (convolution) or a scalar (shift).
pub fn add<'a>(
    a: &DiscreteDistribution, rhs: impl Into<Operand<'a>>,
) -> DistResult<DiscreteDistribution> {
    match rhs.into() {
        Operand::Dist(b) => convolve(a, b),
        Operand::Scalar(k) => shift(a, k),
    }
}

/// `A - rhs`, where `rhs` is a distribution (cross-correlation) or a scalar.
pub fn sub<'a>(
    a: &DiscreteDistribution, rhs: impl Into<Operand<'a>>,
) -> DistResult<DiscreteDistribution> {
    match rhs.into() {
        Operand::Dist(b) => convolve_neg(a, b),
        Operand::Scalar(k) => {
            let neg = k.checked_neg().ok_or(DistError::WindowOverflow { operator: "sub" })?;
            shift(a, neg)
        }
    }
}

/// `E[A] < E[B]`.
pub fn mean_less(a: &DiscreteDistribution, b: &DiscreteDistribution) -> bool {
    a.mean() < b.mean()
}

/// `E[A] <= E[B]`.
pub fn mean_less_eq(a: &DiscreteDistribution, b: &DiscreteDistribution) -> bool {
    a.mean() <= b.mean()
}

/// `E[A] > E[B]`.
pub fn mean_greater(a: &DiscreteDistribution, b: &DiscreteDistribution) -> bool {
    a.mean() > b.mean()
}

/// `E[A] >= E[B]`.
pub fn mean_greater_eq(a: &DiscreteDistribution, b: &DiscreteDistribution) -> bool {
    a.mean() >= b.mean()
}

/// Mean-based equality: `|E[A] - E[B]| <= eps`.
///
/// Only the first moments are compared. Two distributions with different
/// shapes but equal means are "equal" under this predicate.
pub fn mean_equal(a: &DiscreteDistribution, b: &DiscreteDistribution, eps: f64) -> bool {
    (a.mean() - b.mean()).abs() <= eps
}

/// Negation of [`mean_equal`].
pub fn mean_not_equal(a: &DiscreteDistribution, b: &DiscreteDistribution, eps: f64) -> bool {
    !mean_equal(a, b, eps)
}

// ---- Helpers ----

/// Full discrete convolution; output length is `x.len() + y.len() - 1`.
fn full_convolution(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut out = Array1::<f64>::zeros(x.len() + y.len() - 1);
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0.0 {
            continue;
        }
        for (j, &yj) in y.iter().enumerate() {
            out[i + j] += xi * yj;
        }
    }
    out
}

/// Map every support value through `f` and scatter into a fresh window.
///
/// `f` returns `None` on overflow.
fn remap(
    a: &DiscreteDistribution, f: impl Fn(i64) -> Option<i64>, operator: &'static str,
    name: String,
) -> DistResult<DiscreteDistribution> {
    let mapped = a
        .iter()
        .map(|(x, p)| checked_bound(f(x), operator).map(|y| (y, p)))
        .collect::<DistResult<Vec<(i64, f64)>>>()?;
    let lo = mapped.iter().map(|&(x, _)| x).fold(i64::MAX, i64::min);
    let hi = mapped.iter().map(|&(x, _)| x).fold(i64::MIN, i64::max);
    let mut pk = Array1::<f64>::zeros(window_len(lo, hi, operator)?);
    for (x, p) in mapped {
        pk[(x - lo) as usize] += p;
    }
    Ok(DiscreteDistribution::from_window(lo, pk, name))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::distribution::{
        extremal::{max_of, min_of},
        support::{pi_floor_zero, tail_geq, tail_lt},
    };
    use proptest::prelude::*;

    /// Strategy for a random valid distribution on a small window.
    fn arb_distribution() -> impl Strategy<Value = DiscreteDistribution> {
        (-20_i64..20, proptest::collection::vec(0.0_f64..1.0, 1..=15))
            .prop_filter("positive mass", |(_, w)| w.iter().sum::<f64>() > 1e-3)
            .prop_map(|(xmin, w)| {
                let total: f64 = w.iter().sum();
                let pk = Array1::from_iter(w.into_iter().map(|p| p / total));
                DiscreteDistribution::from_window(xmin, pk, "R")
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        // --- Convolution is commutative ---
        #[test]
        fn convolve_is_commutative(a in arb_distribution(), b in arb_distribution()) {
            let ab = convolve(&a, &b).unwrap();
            let ba = convolve(&b, &a).unwrap();
            prop_assert_eq!(ab.xmin(), ba.xmin());
            prop_assert_eq!(ab.xmax(), ba.xmax());
            for (p, q) in ab.pk().iter().zip(ba.pk().iter()) {
                prop_assert!((p - q).abs() < 1e-12);
            }
        }

        // --- Window and mass of the sum ---
        #[test]
        fn convolve_window_and_mass(a in arb_distribution(), b in arb_distribution()) {
            let c = convolve(&a, &b).unwrap();
            prop_assert_eq!(c.xmin(), a.xmin() + b.xmin());
            prop_assert_eq!(c.xmax(), a.xmax() + b.xmax());
            prop_assert!((c.total_mass() - 1.0).abs() < 1e-8);
        }

        // --- Means add / subtract ---
        #[test]
        fn means_are_linear(a in arb_distribution(), b in arb_distribution()) {
            prop_assert!((convolve(&a, &b).unwrap().mean() - (a.mean() + b.mean())).abs() < 1e-8);
            prop_assert!((convolve_neg(&a, &b).unwrap().mean() - (a.mean() - b.mean())).abs() < 1e-8);
        }

        // --- Folding at zero is idempotent ---
        #[test]
        fn pi_floor_zero_is_idempotent(a in arb_distribution()) {
            let once = pi_floor_zero(&a);
            let twice = pi_floor_zero(&once);
            prop_assert_eq!(once.xmin(), twice.xmin());
            prop_assert_eq!(once.xmax(), twice.xmax());
            prop_assert_eq!(once.pk(), twice.pk());
            prop_assert!(once.xmin() >= 0);
            prop_assert!((once.total_mass() - 1.0).abs() < 1e-8);
        }

        // --- Unnormalized tails partition the distribution ---
        #[test]
        fn tails_partition_the_distribution(a in arb_distribution(), m in -30_i64..40) {
            let left = tail_lt(&a, m, false).unwrap();
            let right = tail_geq(&a, m, false).unwrap();
            prop_assert!((left.total_mass() + right.total_mass() - 1.0).abs() < 1e-8);
            for x in a.xmin()..=a.xmax() {
                prop_assert!((left.pmf(x) + right.pmf(x) - a.pmf(x)).abs() < 1e-12);
            }
            prop_assert!(left.iter().all(|(x, p)| x < m || p == 0.0));
            prop_assert!(right.iter().all(|(x, p)| x >= m || p == 0.0));
        }

        // --- E[max] + E[min] = E[A] + E[B] ---
        #[test]
        fn max_and_min_preserve_the_sum_of_means(a in arb_distribution(), b in arb_distribution()) {
            let mx = max_of(&[&a, &b]).unwrap();
            let mn = min_of(&[&a, &b]).unwrap();
            prop_assert!((mx.mean() + mn.mean() - (a.mean() + b.mean())).abs() < 1e-8);
            prop_assert!((mx.total_mass() - 1.0).abs() < 1e-8);
            prop_assert!((mn.total_mass() - 1.0).abs() < 1e-8);
        }
    }
}
