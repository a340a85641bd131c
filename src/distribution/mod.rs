//! distribution — algebra of finite discrete probability distributions.
//!
//! Purpose
//! -------
//! Represent integer-valued random variables with finite support as dense
//! probability windows and provide the exact operators needed for
//! discrete-time queueing analysis: convolution-based arithmetic, boundary
//! folding and tail extraction, stabilising trims, extremal operators,
//! summary statistics, distances and named-distribution factories.
//!
//! Key behaviors
//! -------------
//! - [`DiscreteDistribution`] is the single value type; every operator takes
//!   references and returns a new value.
//! - [`algebra`]: `A + B`, `A - B`, `A + k`, `A · k`, `-A`, `|A|` and
//!   mean-based ordering, with [`Operand`] dispatching between the
//!   distribution and integer forms.
//! - [`support`]: `π_m`, `π₀`, `σ^m`, `σ_m` and conditional restriction.
//! - [`trim`]: window shrinking by exact zeros, per-position threshold or
//!   cumulative threshold.
//! - [`extremal`]: `max` / `min` of independent random variables.
//! - [`stats`] and [`distance`]: query surface and distribution distances.
//! - [`factories`]: Bernoulli, binomial, Poisson, negative binomial,
//!   geometric, deterministic, discrete uniform and mixtures.
//!
//! Invariants & assumptions
//! ------------------------
//! - `xmin <= xmax` and `pk.len() == xmax - xmin + 1`; every entry is finite
//!   and `>= 0`.
//! - Unit mass is checkable via `is_valid` but not enforced; tails and trims
//!   without renormalization produce sub-distributions on purpose.
//! - Operands of binary operators are independent random variables.
//!
//! Conventions
//! -----------
//! - Errors are reported through [`DistError`] / [`DistResult`]; boundary
//!   clamps in `pi_fold`, `max_of` and `min_of` are behavior, not errors.
//! - Tolerances are passed explicitly; [`DEFAULT_MEAN_EQ_EPS`] and
//!   [`DEFAULT_TAIL_EPS`] are the customary values.
//!
//! Downstream usage
//! ----------------
//! - `queueing::lindley` iterates `convolve` + `pi_floor_zero` + `trim_below`.
//! - `queueing::gigi1` builds the increment `B - A` with `convolve_neg`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its operators; `algebra` adds
//!   property tests for convolution commutativity, window bounds and mass
//!   preservation.

pub mod algebra;
pub mod distance;
pub mod errors;
pub mod extremal;
pub mod factories;
pub mod fdd;
pub mod stats;
pub mod support;
pub mod trim;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::algebra::{
    DEFAULT_MEAN_EQ_EPS, Operand, absolute, add, convolve, convolve_neg, mean_equal,
    mean_greater, mean_greater_eq, mean_less, mean_less_eq, mean_not_equal, negate, scale, shift,
    sub,
};
pub use self::distance::{earth_movers, jensen_shannon, total_variation};
pub use self::errors::{DistError, DistResult};
pub use self::extremal::{max_of, max_pair, max_with, min_of};
pub use self::factories::{
    DEFAULT_TAIL_EPS, bernoulli, binomial, deterministic, discrete_uniform, geometric,
    geometric_with_p, mixture, negative_binomial, poisson,
};
pub use self::fdd::DiscreteDistribution;
pub use self::support::{conditional, pi_floor_zero, pi_fold, tail_geq, tail_lt};
pub use self::trim::{trim_below, trim_cumulative, trim_zeros};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use discrete_time::distribution::prelude::*;
//
// to import the distribution type, its error surface and the operators in a
// single line.

pub mod prelude {
    pub use super::algebra::{Operand, add, convolve, convolve_neg, shift, sub};
    pub use super::errors::{DistError, DistResult};
    pub use super::extremal::{max_of, min_of};
    pub use super::factories::*;
    pub use super::fdd::DiscreteDistribution;
    pub use super::support::{pi_floor_zero, pi_fold, tail_geq, tail_lt};
    pub use super::trim::{trim_below, trim_cumulative, trim_zeros};
}
