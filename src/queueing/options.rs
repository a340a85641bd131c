//! Configuration for the Lindley fixed-point solver.
//!
//! - [`LindleyOptions`]: trimming threshold, convergence tolerance and
//!   iteration cap, validated on construction.
use crate::{
    distribution::algebra::DEFAULT_MEAN_EQ_EPS,
    queueing::{
        errors::QueueResult,
        validation::{verify_eps_prob, verify_max_iter, verify_tol_mean},
    },
};

/// Default per-position trimming threshold.
pub const DEFAULT_EPS_PROB: f64 = 1e-16;

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100_000;

/// Solver-level configuration.
///
/// Fields:
/// - `eps_prob`: end positions with probability `<= eps_prob` are trimmed
///   after every step.
/// - `tol_mean`: the iteration stops once consecutive iterates have means
///   within `tol_mean`.
/// - `max_iter`: hard cap on the number of iterations; `None` iterates
///   until convergence.
///
/// Default:
/// - `eps_prob = 1e-16`, `tol_mean = 1e-6`, `max_iter = Some(100_000)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LindleyOptions {
    pub eps_prob: f64,
    pub tol_mean: f64,
    pub max_iter: Option<usize>,
}

impl LindleyOptions {
    /// Construct validated options.
    ///
    /// # Rules
    /// - `eps_prob` finite and `>= 0`.
    /// - `tol_mean` finite and `> 0`.
    /// - `max_iter`, if provided, `> 0`.
    ///
    /// # Errors
    /// [`QueueError::InvalidEpsProb`](crate::queueing::errors::QueueError::InvalidEpsProb),
    /// `InvalidTolMean` or `InvalidMaxIter` for the first violated rule.
    pub fn new(eps_prob: f64, tol_mean: f64, max_iter: Option<usize>) -> QueueResult<Self> {
        let opts = Self { eps_prob, tol_mean, max_iter };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check every field; the fields are public, so values built with a
    /// struct literal reach the solver without passing through [`Self::new`].
    ///
    /// # Errors
    /// Same as [`Self::new`].
    pub fn validate(&self) -> QueueResult<()> {
        verify_eps_prob(self.eps_prob)?;
        verify_tol_mean(self.tol_mean)?;
        verify_max_iter(self.max_iter)
    }
}

impl Default for LindleyOptions {
    fn default() -> Self {
        Self {
            eps_prob: DEFAULT_EPS_PROB,
            tol_mean: DEFAULT_MEAN_EQ_EPS,
            max_iter: Some(DEFAULT_MAX_ITER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queueing::errors::QueueError;

    #[test]
    fn default_matches_documented_values() {
        let opts = LindleyOptions::default();
        assert_eq!(opts.eps_prob, 1e-16);
        assert_eq!(opts.tol_mean, 1e-6);
        assert_eq!(opts.max_iter, Some(100_000));
        assert_eq!(LindleyOptions::new(1e-16, 1e-6, Some(100_000)).unwrap(), opts);
    }

    #[test]
    fn new_rejects_invalid_fields_in_order() {
        assert!(matches!(
            LindleyOptions::new(-1.0, 0.0, Some(0)),
            Err(QueueError::InvalidEpsProb { .. })
        ));
        assert!(matches!(
            LindleyOptions::new(0.0, 0.0, Some(0)),
            Err(QueueError::InvalidTolMean { .. })
        ));
        assert!(matches!(
            LindleyOptions::new(0.0, 1e-6, Some(0)),
            Err(QueueError::InvalidMaxIter { .. })
        ));
        assert!(LindleyOptions::new(0.0, 1e-6, None).is_ok());
    }

    #[test]
    fn validate_catches_struct_literal_values() {
        let nan_tol = LindleyOptions { tol_mean: f64::NAN, ..LindleyOptions::default() };
        let no_cap = LindleyOptions { max_iter: Some(0), ..LindleyOptions::default() };

        assert!(LindleyOptions::default().validate().is_ok());
        assert!(matches!(nan_tol.validate(), Err(QueueError::InvalidTolMean { .. })));
        assert!(matches!(no_cap.validate(), Err(QueueError::InvalidMaxIter { .. })));
    }
}
