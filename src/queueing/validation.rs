//! Validation helpers for the Lindley solver.
//!
//! - **Option checks**: [`verify_eps_prob`], [`verify_tol_mean`],
//!   [`verify_max_iter`] back [`LindleyOptions::new`](super::options::LindleyOptions::new).
//! - **Input checks**: [`validate_unit_mass`] rejects solver inputs that are
//!   not proper distributions.
//!
//! All helpers return domain-specific [`QueueError`] variants.
use crate::{
    distribution::fdd::DiscreteDistribution,
    queueing::errors::{QueueError, QueueResult},
};

/// Validate the per-position trimming threshold.
///
/// # Errors
/// Returns [`QueueError::InvalidEpsProb`] if the value is non-finite or < 0.
pub fn verify_eps_prob(eps: f64) -> QueueResult<()> {
    if !eps.is_finite() {
        return Err(QueueError::InvalidEpsProb { eps, reason: "Threshold must be finite." });
    }
    if eps < 0.0 {
        return Err(QueueError::InvalidEpsProb { eps, reason: "Threshold must be non-negative." });
    }
    Ok(())
}

/// Validate the mean-equality tolerance used as convergence test.
///
/// # Errors
/// Returns [`QueueError::InvalidTolMean`] if the value is non-finite or <= 0.
pub fn verify_tol_mean(tol: f64) -> QueueResult<()> {
    if !tol.is_finite() {
        return Err(QueueError::InvalidTolMean { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(QueueError::InvalidTolMean { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the optional iteration cap.
pub fn verify_max_iter(max_iter: Option<usize>) -> QueueResult<()> {
    if let Some(0) = max_iter {
        return Err(QueueError::InvalidMaxIter {
            max_iter: 0,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Require `Σ pk == 1` within
/// [`MASS_TOLERANCE`](crate::distribution::validation::MASS_TOLERANCE).
///
/// `role` names the input in the error (`"initial waiting time"`, ...).
pub fn validate_unit_mass(d: &DiscreteDistribution, role: &'static str) -> QueueResult<()> {
    if !d.is_valid() {
        return Err(QueueError::InvalidDistribution { role, mass: d.total_mass() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::factories::deterministic;

    #[test]
    fn option_guards_reject_out_of_range_values() {
        assert!(verify_eps_prob(0.0).is_ok());
        assert!(matches!(verify_eps_prob(-1e-3), Err(QueueError::InvalidEpsProb { .. })));
        assert!(matches!(verify_eps_prob(f64::NAN), Err(QueueError::InvalidEpsProb { .. })));

        assert!(verify_tol_mean(1e-6).is_ok());
        assert!(matches!(verify_tol_mean(0.0), Err(QueueError::InvalidTolMean { .. })));
        assert!(matches!(verify_tol_mean(f64::INFINITY), Err(QueueError::InvalidTolMean { .. })));

        assert!(verify_max_iter(None).is_ok());
        assert!(verify_max_iter(Some(1)).is_ok());
        assert!(matches!(verify_max_iter(Some(0)), Err(QueueError::InvalidMaxIter { .. })));
    }

    #[test]
    fn validate_unit_mass_reports_role_and_mass() {
        assert!(validate_unit_mass(&deterministic(0), "increment").is_ok());

        let half = DiscreteDistribution::new(&[0, 1], &[0.25, 0.25], "half").unwrap();
        let err = validate_unit_mass(&half, "increment").unwrap_err();
        assert_eq!(err, QueueError::InvalidDistribution { role: "increment", mass: 0.5 });
    }
}
