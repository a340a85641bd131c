//! queueing::errors — error surface for the Lindley solver and GI/GI/1 facade.
//!
//! Wraps configuration mistakes, invalid input distributions and the
//! stability precondition into [`QueueError`]. Distribution-level failures
//! raised while iterating are carried through the `Distribution` variant via
//! `From<DistError>`, so `?` works across the two subtrees.
use crate::distribution::errors::DistError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for queueing operations.
pub type QueueResult<T> = Result<T, QueueError>;

#[derive(Debug, Clone, PartialEq)]
pub enum QueueError {
    // ---- Model preconditions ----
    /// Utilization `E[B] / E[A]` is not below one.
    UnstableQueue { rho: f64 },
    /// Interarrival mean must be strictly positive.
    NonPositiveInterarrivalMean { mean: f64 },

    // ---- LindleyOptions ----
    /// Trimming threshold must be finite and >= 0.
    InvalidEpsProb { eps: f64, reason: &'static str },
    /// Mean tolerance must be finite and > 0.
    InvalidTolMean { tol: f64, reason: &'static str },
    /// Iteration cap must be > 0.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    // ---- Inputs ----
    /// An input distribution does not carry unit mass.
    InvalidDistribution { role: &'static str, mass: f64 },

    // ---- Distribution algebra ----
    Distribution(DistError),
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::Distribution(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Model preconditions ----
            QueueError::UnstableQueue { rho } => {
                write!(f, "Queue is not stable: utilization rho = {rho} must be < 1")
            }
            QueueError::NonPositiveInterarrivalMean { mean } => {
                write!(f, "Interarrival time mean must be > 0; got {mean}")
            }

            // ---- LindleyOptions ----
            QueueError::InvalidEpsProb { eps, reason } => {
                write!(f, "Invalid trimming threshold {eps}: {reason}")
            }
            QueueError::InvalidTolMean { tol, reason } => {
                write!(f, "Invalid mean tolerance {tol}: {reason}")
            }
            QueueError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Inputs ----
            QueueError::InvalidDistribution { role, mass } => {
                write!(f, "{role} distribution must have unit mass; got {mass}")
            }

            // ---- Distribution algebra ----
            QueueError::Distribution(err) => write!(f, "{err}"),
        }
    }
}

impl From<DistError> for QueueError {
    fn from(err: DistError) -> Self {
        QueueError::Distribution(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<QueueError> for PyErr {
    fn from(err: QueueError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
