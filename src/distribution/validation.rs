//! distribution::validation — shared input guards for distribution code.
//!
//! Purpose
//! -------
//! Centralize the checks that every constructor, operator and factory in the
//! `distribution` subtree relies on, so error semantics stay identical whether
//! an FDD is built by hand, by an operator, or by a named factory.
//!
//! Key behaviors
//! -------------
//! - [`validate_pairs`]: equal-length, non-empty value/probability lists.
//! - [`validate_probabilities`]: every probability finite and `>= 0`.
//! - [`verify_eps`]: trimming thresholds finite and `>= 0`.
//! - [`verify_quantile_level`] and [`verify_entropy_base`] for queries.
//! - [`verify_unit_probability`]: factory success probabilities in `[0, 1]`.
//!
//! Conventions
//! -----------
//! - Pure functions, no allocation beyond error construction.
//! - Every failure maps to a [`DistError`] variant; nothing panics.
use crate::distribution::errors::{DistError, DistResult};

/// Tolerance used to decide whether probabilities sum to one.
pub const MASS_TOLERANCE: f64 = 1e-8;

/// Validate a `(values, probabilities)` pair of lists.
///
/// # Errors
/// - [`DistError::LengthMismatch`] if the lengths differ.
/// - [`DistError::EmptySupport`] if both lists are empty.
/// - Propagates [`validate_probabilities`].
pub fn validate_pairs(xk: &[i64], pk: &[f64]) -> DistResult<()> {
    if xk.len() != pk.len() {
        return Err(DistError::LengthMismatch { values: xk.len(), probabilities: pk.len() });
    }
    if xk.is_empty() {
        return Err(DistError::EmptySupport);
    }
    validate_probabilities(pk)
}

/// Validate that every probability is finite and non-negative.
///
/// Values above one are accepted here; they cannot occur in a valid
/// distribution and are caught by `is_valid` when mass matters.
///
/// # Errors
/// Returns [`DistError::InvalidProbability`] for the first offending entry.
pub fn validate_probabilities(pk: &[f64]) -> DistResult<()> {
    for (index, &value) in pk.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(DistError::InvalidProbability { index, value });
        }
    }
    Ok(())
}

/// Validate a trimming threshold.
///
/// # Errors
/// Returns [`DistError::InvalidEpsilon`] if `eps` is negative or non-finite.
pub fn verify_eps(eps: f64) -> DistResult<()> {
    if !eps.is_finite() || eps < 0.0 {
        return Err(DistError::InvalidEpsilon { value: eps });
    }
    Ok(())
}

/// Validate a quantile level `q ∈ (0, 1)`.
pub fn verify_quantile_level(q: f64) -> DistResult<()> {
    if !(q > 0.0 && q < 1.0) {
        return Err(DistError::InvalidQuantile { q });
    }
    Ok(())
}

/// Validate a logarithm base for entropy.
pub fn verify_entropy_base(base: f64) -> DistResult<()> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(DistError::InvalidEntropyBase { base });
    }
    Ok(())
}

/// Validate a factory success probability `p ∈ [0, 1]`.
///
/// # Errors
/// Returns [`DistError::InvalidParameter`] tagged with `family`.
pub fn verify_unit_probability(family: &'static str, p: f64) -> DistResult<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(DistError::InvalidParameter {
            family,
            reason: format!("success probability {p} out of range [0, 1]"),
        });
    }
    Ok(())
}

/// Validate the right-tail cut threshold of infinite-support factories.
///
/// Unlike [`verify_eps`], the cut must be strictly inside `(0, 1)` or the
/// survival-function search would never terminate (or cut everything).
pub fn verify_tail_cut(family: &'static str, eps: f64) -> DistResult<()> {
    if !(eps > 0.0 && eps < 1.0) {
        return Err(DistError::InvalidParameter {
            family,
            reason: format!("tail cut eps must satisfy 0 < eps < 1; got {eps}"),
        });
    }
    Ok(())
}
